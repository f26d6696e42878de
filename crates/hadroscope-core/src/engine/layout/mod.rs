//! The nine placement algorithms and the placement map they produce.
//!
//! `compute_layout` is a pure function of the filtered particle set, the
//! selected mode, the layout configuration, and the viewport width. Callers
//! cache its result and invalidate on any input change; the map itself holds
//! no references into the repository, only particle names.

pub(crate) mod discovery;
pub(crate) mod eightfold;
pub(crate) mod grid;
pub(crate) mod lifetime;
pub(crate) mod quark_tree;

use super::config::LayoutConfig;
use crate::core::models::particle::Particle;
use nalgebra::Point2;
use std::collections::HashMap;

/// Selectable layout algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutMode {
    #[default]
    BaryonMeson,
    MassOrder,
    ChargeOrder,
    DecayChain,
    QuarkContent,
    EightfoldWay,
    LifetimeSpectrum,
    QuarkTree,
    DiscoveryTimeline,
}

impl LayoutMode {
    pub const ALL: [LayoutMode; 9] = [
        LayoutMode::BaryonMeson,
        LayoutMode::MassOrder,
        LayoutMode::ChargeOrder,
        LayoutMode::DecayChain,
        LayoutMode::QuarkContent,
        LayoutMode::EightfoldWay,
        LayoutMode::LifetimeSpectrum,
        LayoutMode::QuarkTree,
        LayoutMode::DiscoveryTimeline,
    ];

    /// Parses a mode identifier; unknown identifiers degrade to the default
    /// baryon/meson grouping.
    pub fn from_name(name: &str) -> Self {
        match name {
            "baryon_meson" => LayoutMode::BaryonMeson,
            "mass_order" => LayoutMode::MassOrder,
            "charge_order" => LayoutMode::ChargeOrder,
            "decay_chain" => LayoutMode::DecayChain,
            "quark_content" => LayoutMode::QuarkContent,
            "eightfold_way" => LayoutMode::EightfoldWay,
            "lifetime_spectrum" => LayoutMode::LifetimeSpectrum,
            "quark_tree" => LayoutMode::QuarkTree,
            "discovery_timeline" => LayoutMode::DiscoveryTimeline,
            _ => LayoutMode::BaryonMeson,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LayoutMode::BaryonMeson => "baryon_meson",
            LayoutMode::MassOrder => "mass_order",
            LayoutMode::ChargeOrder => "charge_order",
            LayoutMode::DecayChain => "decay_chain",
            LayoutMode::QuarkContent => "quark_content",
            LayoutMode::EightfoldWay => "eightfold_way",
            LayoutMode::LifetimeSpectrum => "lifetime_spectrum",
            LayoutMode::QuarkTree => "quark_tree",
            LayoutMode::DiscoveryTimeline => "discovery_timeline",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LayoutMode::BaryonMeson => "Baryon/Meson Groups",
            LayoutMode::MassOrder => "Mass Order",
            LayoutMode::ChargeOrder => "Charge Order",
            LayoutMode::DecayChain => "Decay Chains",
            LayoutMode::QuarkContent => "Quark Content",
            LayoutMode::EightfoldWay => "Eightfold Way",
            LayoutMode::LifetimeSpectrum => "Lifetime Spectrum",
            LayoutMode::QuarkTree => "Quark Tree",
            LayoutMode::DiscoveryTimeline => "Discovery Timeline",
        }
    }
}

/// A particle card placed at a 2D position.
#[derive(Debug, Clone, PartialEq)]
pub struct CardPlacement {
    /// Top-left corner.
    pub position: Point2<f64>,
    pub width: f64,
    pub height: f64,
    /// Name of the placed particle.
    pub particle: String,
    /// Mode-specific tag (multiplet, lifetime class, tree level, era).
    pub annotation: Option<&'static str>,
}

impl CardPlacement {
    /// Axis-aligned containment test in layout coordinates.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.position.x
            && x <= self.position.x + self.width
            && y >= self.position.y
            && y <= self.position.y + self.height
    }

    /// Bottom-center point, where outgoing decay arrows start.
    pub fn bottom_anchor(&self) -> Point2<f64> {
        Point2::new(self.position.x + self.width / 2.0, self.position.y + self.height)
    }

    /// Top-center point, where incoming decay arrows end.
    pub fn top_anchor(&self) -> Point2<f64> {
        Point2::new(self.position.x + self.width / 2.0, self.position.y)
    }
}

/// A section header or axis label placed at a 2D position.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderPlacement {
    pub position: Point2<f64>,
    pub text: String,
}

/// One entry of the placement map. Renderers branch on the variant: cards
/// reference a particle, headers carry display text.
#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    Card(CardPlacement),
    Header(HeaderPlacement),
}

impl Placement {
    pub fn as_card(&self) -> Option<&CardPlacement> {
        match self {
            Placement::Card(card) => Some(card),
            Placement::Header(_) => None,
        }
    }

    pub fn as_header(&self) -> Option<&HeaderPlacement> {
        match self {
            Placement::Header(header) => Some(header),
            Placement::Card(_) => None,
        }
    }
}

/// Insertion-ordered map from placement key (particle name or synthetic
/// header key) to placement.
///
/// Iteration order is insertion order, which doubles as the hit-testing
/// tie-break for deliberately staggered overlapping cards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacementMap {
    entries: Vec<(String, Placement)>,
    index: HashMap<String, usize>,
}

impl PlacementMap {
    pub fn insert(&mut self, key: impl Into<String>, placement: Placement) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&idx) => self.entries[idx].1 = placement,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, placement));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Placement> {
        self.index.get(key).map(|&idx| &self.entries[idx].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Placement)> {
        self.entries.iter().map(|(key, placement)| (key.as_str(), placement))
    }

    pub fn cards(&self) -> impl Iterator<Item = &CardPlacement> {
        self.entries.iter().filter_map(|(_, p)| p.as_card())
    }

    pub fn headers(&self) -> impl Iterator<Item = &HeaderPlacement> {
        self.entries.iter().filter_map(|(_, p)| p.as_header())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Computes the placement map for `particles` under the given mode.
pub fn compute_layout(
    particles: &[&Particle],
    mode: LayoutMode,
    config: &LayoutConfig,
    viewport_width: f64,
) -> PlacementMap {
    match mode {
        LayoutMode::BaryonMeson => grid::baryon_meson(particles, config, viewport_width),
        LayoutMode::MassOrder => grid::mass_order(particles, config, viewport_width),
        LayoutMode::ChargeOrder => grid::charge_groups(particles, config, viewport_width),
        LayoutMode::DecayChain => grid::stability_order(particles, config, viewport_width),
        LayoutMode::QuarkContent => grid::quark_content_groups(particles, config, viewport_width),
        LayoutMode::EightfoldWay => eightfold::layout(particles, config, viewport_width),
        LayoutMode::LifetimeSpectrum => lifetime::layout(particles, config, viewport_width),
        LayoutMode::QuarkTree => quark_tree::layout(particles, config, viewport_width),
        LayoutMode::DiscoveryTimeline => discovery::layout(particles, config, viewport_width),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_round_trips_every_mode() {
        for mode in LayoutMode::ALL {
            assert_eq!(LayoutMode::from_name(mode.name()), mode);
        }
    }

    #[test]
    fn unknown_mode_name_falls_back_to_default() {
        assert_eq!(LayoutMode::from_name("spiral"), LayoutMode::BaryonMeson);
        assert_eq!(LayoutMode::from_name(""), LayoutMode::BaryonMeson);
    }

    #[test]
    fn display_names_are_human_readable() {
        assert_eq!(LayoutMode::EightfoldWay.display_name(), "Eightfold Way");
        assert_eq!(LayoutMode::BaryonMeson.display_name(), "Baryon/Meson Groups");
    }

    #[test]
    fn placement_map_preserves_insertion_order() {
        let mut map = PlacementMap::default();
        for name in ["c", "a", "b"] {
            map.insert(
                name,
                Placement::Header(HeaderPlacement {
                    position: Point2::new(0.0, 0.0),
                    text: name.to_string(),
                }),
            );
        }
        let keys: Vec<&str> = map.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
    }

    #[test]
    fn placement_map_insert_replaces_in_place() {
        let mut map = PlacementMap::default();
        map.insert(
            "x",
            Placement::Header(HeaderPlacement {
                position: Point2::new(0.0, 0.0),
                text: "first".to_string(),
            }),
        );
        map.insert(
            "x",
            Placement::Header(HeaderPlacement {
                position: Point2::new(1.0, 1.0),
                text: "second".to_string(),
            }),
        );
        assert_eq!(map.len(), 1);
        assert_eq!(
            map.get("x").and_then(Placement::as_header).map(|h| h.text.as_str()),
            Some("second")
        );
    }

    #[test]
    fn card_contains_is_inclusive_of_edges() {
        let card = CardPlacement {
            position: Point2::new(10.0, 20.0),
            width: 140.0,
            height: 180.0,
            particle: "Proton".to_string(),
            annotation: None,
        };
        assert!(card.contains(10.0, 20.0));
        assert!(card.contains(150.0, 200.0));
        assert!(card.contains(80.0, 100.0));
        assert!(!card.contains(9.9, 100.0));
        assert!(!card.contains(80.0, 200.1));
    }

    #[test]
    fn anchors_sit_on_card_midlines() {
        let card = CardPlacement {
            position: Point2::new(0.0, 0.0),
            width: 100.0,
            height: 50.0,
            particle: "Proton".to_string(),
            annotation: None,
        };
        assert_eq!(card.bottom_anchor(), Point2::new(50.0, 50.0));
        assert_eq!(card.top_anchor(), Point2::new(50.0, 0.0));
    }
}
