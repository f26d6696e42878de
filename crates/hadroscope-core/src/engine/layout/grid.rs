//! Grouped-grid layout modes: ordered groups of row-major card grids with one
//! header per non-empty group.

use super::{CardPlacement, HeaderPlacement, Placement, PlacementMap};
use crate::core::models::particle::Particle;
use crate::engine::config::LayoutConfig;
use nalgebra::Point2;
use std::collections::BTreeMap;

/// Number of card columns fitting the viewport; never less than one, so a
/// viewport narrower than a single card still lays out.
pub(crate) fn column_count(config: &LayoutConfig, viewport_width: f64) -> usize {
    let usable = viewport_width - 2.0 * config.margin;
    let per_card = config.card_width + config.card_spacing;
    (usable / per_card).floor().max(1.0) as usize
}

pub(crate) fn push_header(map: &mut PlacementMap, key: &str, x: f64, y: f64, text: impl Into<String>) {
    map.insert(
        key,
        Placement::Header(HeaderPlacement {
            position: Point2::new(x, y),
            text: text.into(),
        }),
    );
}

/// Places one group of cards in row-major order starting at `y_offset` and
/// returns the vertical extent it occupied.
pub(crate) fn place_group(
    map: &mut PlacementMap,
    particles: &[&Particle],
    config: &LayoutConfig,
    cols: usize,
    y_offset: f64,
    annotation: Option<&'static str>,
) -> f64 {
    for (i, particle) in particles.iter().enumerate() {
        let row = i / cols;
        let col = i % cols;
        let x = config.margin + col as f64 * (config.card_width + config.card_spacing);
        let y = y_offset + row as f64 * (config.card_height + config.card_spacing);
        map.insert(
            particle.name.clone(),
            Placement::Card(CardPlacement {
                position: Point2::new(x, y),
                width: config.card_width,
                height: config.card_height,
                particle: particle.name.clone(),
                annotation,
            }),
        );
    }
    let rows = particles.len().div_ceil(cols);
    rows as f64 * (config.card_height + config.card_spacing)
}

/// Baryons and mesons in two separate grid blocks.
pub(crate) fn baryon_meson(
    particles: &[&Particle],
    config: &LayoutConfig,
    viewport_width: f64,
) -> PlacementMap {
    let mut map = PlacementMap::default();
    let cols = column_count(config, viewport_width);
    let mut y = config.top_offset;

    let baryons: Vec<&Particle> = particles.iter().copied().filter(|p| p.is_baryon).collect();
    let mesons: Vec<&Particle> = particles.iter().copied().filter(|p| p.is_meson).collect();

    if !baryons.is_empty() {
        push_header(
            &mut map,
            "baryon_header",
            config.margin,
            y - config.header_height,
            "BARYONS (3 quarks)",
        );
        y += place_group(&mut map, &baryons, config, cols, y, None) + config.section_gap;
    }
    if !mesons.is_empty() {
        push_header(
            &mut map,
            "meson_header",
            config.margin,
            y - config.header_height,
            "MESONS (quark + antiquark)",
        );
        place_group(&mut map, &mesons, config, cols, y, None);
    }
    map
}

/// Single grid sorted by mass ascending.
pub(crate) fn mass_order(
    particles: &[&Particle],
    config: &LayoutConfig,
    viewport_width: f64,
) -> PlacementMap {
    let mut map = PlacementMap::default();
    let cols = column_count(config, viewport_width);
    let y = config.top_offset;

    let mut sorted: Vec<&Particle> = particles.to_vec();
    sorted.sort_by(|a, b| a.mass.total_cmp(&b.mass));

    push_header(
        &mut map,
        "header",
        config.margin,
        y - config.header_height,
        "Particles by Mass (MeV/c^2)",
    );
    place_group(&mut map, &sorted, config, cols, y, None);
    map
}

/// Single grid sorted by stability factor descending; the view adds decay
/// arrows between placed cards on top of this layout.
pub(crate) fn stability_order(
    particles: &[&Particle],
    config: &LayoutConfig,
    viewport_width: f64,
) -> PlacementMap {
    let mut map = PlacementMap::default();
    let cols = column_count(config, viewport_width);
    let y = config.top_offset;

    let mut sorted: Vec<&Particle> = particles.to_vec();
    sorted.sort_by(|a, b| b.stability_factor.total_cmp(&a.stability_factor));

    push_header(
        &mut map,
        "header",
        config.margin,
        y - config.header_height,
        "Particles by Stability (Decay Chains)",
    );
    place_group(&mut map, &sorted, config, cols, y, None);
    map
}

fn charge_label(charge: f64) -> String {
    if charge == 0.0 {
        return "0".to_string();
    }
    let thirds = (charge * 3.0).round() as i64;
    if thirds % 3 == 0 {
        format!("{:+}", thirds / 3)
    } else {
        format!("{thirds:+}/3")
    }
}

/// Groups by exact charge value, highest charge first.
pub(crate) fn charge_groups(
    particles: &[&Particle],
    config: &LayoutConfig,
    viewport_width: f64,
) -> PlacementMap {
    let mut map = PlacementMap::default();
    let cols = column_count(config, viewport_width);
    let mut y = config.top_offset;

    // Charges are multiples of 1/3, so thirds make an exact integer key.
    let mut groups: BTreeMap<i64, Vec<&Particle>> = BTreeMap::new();
    for particle in particles {
        let thirds = (particle.charge * 3.0).round() as i64;
        groups.entry(thirds).or_default().push(particle);
    }

    for (thirds, group) in groups.iter().rev() {
        let charge = *thirds as f64 / 3.0;
        push_header(
            &mut map,
            &format!("charge_header_{thirds}"),
            config.margin,
            y - config.header_height,
            format!("Charge: {} e", charge_label(charge)),
        );
        let height = place_group(&mut map, group, config, cols, y, None);
        y += height + config.section_gap;
    }
    map
}

const QUARK_GROUPS: [(&str, &str); 7] = [
    ("light_baryons", "Light Baryons (u, d quarks)"),
    ("uds", "Lambda/Sigma (uds)"),
    ("uus_dds", "Sigma (uus/dds)"),
    ("uss_dss", "Xi Cascade (uss/dss)"),
    ("sss", "Omega (sss)"),
    ("light_mesons", "Light Mesons"),
    ("heavy_mesons", "Heavy Mesons (c, b quarks)"),
];

/// Mesons heavier than this are grouped as heavy (charm/bottom content).
const HEAVY_MESON_THRESHOLD_MEV: f64 = 1000.0;

fn quark_group(particle: &Particle) -> Option<usize> {
    let content = particle.quark_content.to_ascii_lowercase();
    if content.contains("uuu") || content.contains("ddd") {
        Some(0)
    } else if (content.contains("uud") || content.contains("udd")) && particle.is_baryon {
        Some(0)
    } else if content.contains("sss") {
        Some(4)
    } else if content.contains("uss") || content.contains("dss") {
        Some(3)
    } else if content.contains("uus") || content.contains("dds") {
        Some(2)
    } else if content.contains("uds") && particle.is_baryon {
        Some(1)
    } else if particle.is_meson {
        if particle.mass > HEAVY_MESON_THRESHOLD_MEV {
            Some(6)
        } else {
            Some(5)
        }
    } else {
        None
    }
}

/// Groups by quark-content family; particles matching no family (leptons,
/// bosons) are omitted from this mode.
pub(crate) fn quark_content_groups(
    particles: &[&Particle],
    config: &LayoutConfig,
    viewport_width: f64,
) -> PlacementMap {
    let mut map = PlacementMap::default();
    let cols = column_count(config, viewport_width);
    let mut y = config.top_offset;

    let mut buckets: [Vec<&Particle>; QUARK_GROUPS.len()] = Default::default();
    for particle in particles {
        if let Some(group) = quark_group(particle) {
            buckets[group].push(particle);
        }
    }

    for (idx, (key, title)) in QUARK_GROUPS.iter().enumerate() {
        let group = &buckets[idx];
        if group.is_empty() {
            continue;
        }
        push_header(
            &mut map,
            &format!("quark_header_{key}"),
            config.margin,
            y - config.header_height,
            *title,
        );
        let height = place_group(&mut map, group, config, cols, y, None);
        y += height + config.section_gap;
    }
    map
}
