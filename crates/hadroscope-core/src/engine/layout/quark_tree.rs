//! Quark composition tree: four vertical levels from light hadrons down to
//! bottom hadrons, each level its own grid block.

use super::grid::{column_count, place_group, push_header};
use super::PlacementMap;
use crate::core::models::particle::Particle;
use crate::engine::config::LayoutConfig;

const LEVELS: [(&str, &str); 4] = [
    ("light", "LIGHT HADRONS (u, d quarks)"),
    ("strange", "STRANGE HADRONS (contains s quark)"),
    ("charm", "CHARM HADRONS (contains c quark)"),
    ("bottom", "BOTTOM HADRONS (contains b quark)"),
];

fn has_flavor(particle: &Particle, letter: char, word: &str) -> bool {
    // "-bar" antiquark suffixes would read as spurious bottom content.
    let content = particle.quark_content.to_ascii_lowercase().replace("-bar", "");
    content.contains(letter)
        || particle
            .composition
            .iter()
            .any(|c| c.constituent.to_ascii_lowercase().contains(word))
}

/// Tree level index, tested heaviest flavor first.
fn tree_level(particle: &Particle) -> usize {
    if has_flavor(particle, 'b', "bottom") {
        3
    } else if has_flavor(particle, 'c', "charm") {
        2
    } else if has_flavor(particle, 's', "strange") {
        1
    } else {
        0
    }
}

pub(crate) fn layout(
    particles: &[&Particle],
    config: &LayoutConfig,
    viewport_width: f64,
) -> PlacementMap {
    let mut map = PlacementMap::default();
    push_header(
        &mut map,
        "quark_tree_header",
        config.margin,
        30.0,
        "QUARK COMPOSITION TREE",
    );
    push_header(
        &mut map,
        "quark_tree_subheader",
        config.margin,
        50.0,
        "Hierarchical view from light to heavy quark content",
    );

    let mut buckets: [Vec<&Particle>; 4] = Default::default();
    for particle in particles {
        buckets[tree_level(particle)].push(particle);
    }

    let cols = column_count(config, viewport_width);
    let mut y = 30.0 + config.header_height + 60.0;

    for (idx, (key, title)) in LEVELS.iter().enumerate() {
        push_header(&mut map, &format!("{key}_level_header"), config.margin, y, *title);
        y += 40.0;

        // Baryons first, then mesons, each sorted by mass; anything else in
        // the bucket (leptons, bosons) is not a hadron and is not placed.
        let mut level: Vec<&Particle> = buckets[idx]
            .iter()
            .copied()
            .filter(|p| p.is_baryon)
            .collect();
        level.sort_by(|a, b| a.mass.total_cmp(&b.mass));
        let mut mesons: Vec<&Particle> = buckets[idx]
            .iter()
            .copied()
            .filter(|p| p.is_meson)
            .collect();
        mesons.sort_by(|a, b| a.mass.total_cmp(&b.mass));
        level.extend(mesons);

        let height = place_group(&mut map, &level, config, cols, y, Some(*key));
        y += height + config.tree.level_spacing;
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::particle::test_support::particle;
    use crate::core::models::particle::{CompositionEntry, Stability};
    use crate::engine::layout::Placement;

    fn hadron(name: &str, tags: &[&str], mass: f64, content: &str) -> Particle {
        let mut p = particle(name, tags, mass, 0.0, Stability::Unstable, Some(1e-10));
        p.quark_content = content.to_string();
        p
    }

    fn refs(particles: &[Particle]) -> Vec<&Particle> {
        particles.iter().collect()
    }

    fn card_y(map: &PlacementMap, name: &str) -> f64 {
        map.get(name)
            .and_then(Placement::as_card)
            .map(|c| c.position.y)
            .expect("placed")
    }

    #[test]
    fn heaviest_flavor_wins_level_assignment() {
        let proton = hadron("Proton", &["Baryon"], 938.3, "uud");
        let kaon = hadron("Kaon+", &["Meson", "Kaon"], 493.7, "us-bar");
        let jpsi = hadron("J/psi", &["Meson", "Charmonium"], 3096.9, "cc-bar");
        let upsilon = hadron("Upsilon", &["Meson", "Bottomonium"], 9460.3, "bb-bar");
        assert_eq!(tree_level(&proton), 0);
        assert_eq!(tree_level(&kaon), 1);
        assert_eq!(tree_level(&jpsi), 2);
        assert_eq!(tree_level(&upsilon), 3);
    }

    #[test]
    fn composition_constituents_also_assign_levels() {
        let mut omega = hadron("Omega-", &["Baryon", "Omega"], 1672.5, "");
        omega.composition = vec![CompositionEntry {
            constituent: "Strange Quark".to_string(),
            count: 3,
            symbol: "s".to_string(),
            is_anti: false,
            charge: -1.0 / 3.0,
        }];
        assert_eq!(tree_level(&omega), 1);
    }

    #[test]
    fn levels_stack_top_to_bottom() {
        let all = vec![
            hadron("Proton", &["Baryon"], 938.3, "uud"),
            hadron("Kaon+", &["Meson", "Kaon"], 493.7, "us-bar"),
            hadron("J/psi", &["Meson", "Charmonium"], 3096.9, "cc-bar"),
            hadron("Upsilon", &["Meson", "Bottomonium"], 9460.3, "bb-bar"),
        ];
        let map = layout(&refs(&all), &LayoutConfig::default(), 1280.0);
        assert!(card_y(&map, "Proton") < card_y(&map, "Kaon+"));
        assert!(card_y(&map, "Kaon+") < card_y(&map, "J/psi"));
        assert!(card_y(&map, "J/psi") < card_y(&map, "Upsilon"));
    }

    #[test]
    fn baryons_precede_mesons_within_a_level() {
        let all = vec![
            hadron("Eta", &["Meson", "Eta"], 547.9, "uu-bar"),
            hadron("Neutron", &["Baryon"], 939.6, "udd"),
        ];
        let map = layout(&refs(&all), &LayoutConfig::default(), 1280.0);
        let neutron = map.get("Neutron").and_then(Placement::as_card).expect("placed");
        let eta = map.get("Eta").and_then(Placement::as_card).expect("placed");
        // Same row, baryon in the first column.
        assert_eq!(neutron.position.y, eta.position.y);
        assert!(neutron.position.x < eta.position.x);
        assert_eq!(neutron.annotation, Some("light"));
    }

    #[test]
    fn level_headers_appear_even_for_empty_levels() {
        let all = vec![hadron("Proton", &["Baryon"], 938.3, "uud")];
        let map = layout(&refs(&all), &LayoutConfig::default(), 1280.0);
        for (key, _) in LEVELS {
            assert!(map.get(&format!("{key}_level_header")).is_some());
        }
    }

    #[test]
    fn non_hadrons_are_never_placed() {
        let electron = particle("Electron", &["Lepton"], 0.511, -1.0, Stability::Stable, None);
        let all = vec![electron];
        let map = layout(&refs(&all), &LayoutConfig::default(), 1280.0);
        assert!(map.get("Electron").is_none());
        assert_eq!(map.cards().count(), 0);
    }
}
