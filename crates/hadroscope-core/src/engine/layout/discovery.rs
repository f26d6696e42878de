//! Discovery timeline: year on the horizontal axis, log mass on the vertical
//! axis, with undated particles in a grid block below the plot.

use super::grid::{column_count, place_group, push_header};
use super::{CardPlacement, Placement, PlacementMap};
use crate::core::models::particle::Particle;
use crate::engine::config::{DiscoveryConfig, LayoutConfig};
use nalgebra::Point2;
use std::collections::HashMap;

/// Coarse collision-cell size on the plot.
const CELL_WIDTH: f64 = 80.0;
const CELL_HEIGHT: f64 = 100.0;
/// Stagger steps for cards sharing a collision cell (3-wide sub-grid).
const STAGGER_X: f64 = 30.0;
const STAGGER_Y: f64 = 25.0;

/// Landmark discoveries marked on the axis.
const ERA_MARKERS: [(i32, &str); 11] = [
    (1897, "1897 Electron"),
    (1911, "1911 Nucleus"),
    (1919, "1919 Proton"),
    (1932, "1932 Neutron"),
    (1947, "1947 Pion"),
    (1950, "1950 Strange"),
    (1964, "1964 Quark Model"),
    (1974, "1974 J/psi"),
    (1977, "1977 Upsilon"),
    (1995, "1995 Top Quark"),
    (2012, "2012 Higgs"),
];

fn era(year: i32, config: &DiscoveryConfig) -> &'static str {
    if year < config.classical_end {
        "classical"
    } else if year < config.nuclear_end {
        "nuclear"
    } else if year < config.strange_end {
        "strange"
    } else if year < config.quark_model_end {
        "quark_model"
    } else {
        "modern"
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
        "discovery_header",
        config.margin,
        30.0,
        "DISCOVERY TIMELINE",
    );
    push_header(
        &mut map,
        "discovery_subheader",
        config.margin,
        50.0,
        "Chronological particle discoveries with mass distribution",
    );

    let mut dated: Vec<(&Particle, i32)> = Vec::new();
    let mut undated: Vec<&Particle> = Vec::new();
    for particle in particles {
        match particle.discovery.as_ref().and_then(|d| d.year) {
            Some(year) => dated.push((particle, year)),
            None => undated.push(particle),
        }
    }
    dated.sort_by_key(|(_, year)| *year);

    let timeline_left = config.margin * 2.0;
    let timeline_right = (viewport_width - config.margin * 2.0).max(timeline_left + 1.0);
    let timeline_width = timeline_right - timeline_left;
    let timeline_y = 30.0 + config.header_height + 40.0;

    // Year range follows the data, padded and clamped to the century the
    // datasets cover; empty data falls back to the configured span.
    let (year_min, year_max) = match (dated.first(), dated.last()) {
        (Some((_, first)), Some((_, last))) => ((first - 5).max(1890), (last + 5).min(2025)),
        _ => (config.discovery.year_min, config.discovery.year_max),
    };
    let year_span = ((year_max - year_min) as f64).max(1.0);

    let year_to_x = |year: i32| {
        let clamped = year.clamp(year_min, year_max);
        timeline_left + (clamped - year_min) as f64 / year_span * timeline_width
    };

    for (year, label) in ERA_MARKERS {
        if year < year_min || year > year_max {
            continue;
        }
        push_header(&mut map, &format!("era_{year}"), year_to_x(year), timeline_y, label);
    }

    let plot_top = timeline_y + 60.0 + 20.0;
    let plot_height = config.discovery.plot_height;

    // Log-mass bounds over the dated particles, guarded for empty and
    // degenerate spans.
    let positive_masses: Vec<f64> = dated
        .iter()
        .map(|(p, _)| p.mass)
        .filter(|m| *m > 0.0)
        .collect();
    let (log_mass_min, log_mass_max) = if positive_masses.is_empty() {
        (0.0, 4.0)
    } else {
        let min = positive_masses.iter().copied().fold(f64::INFINITY, f64::min);
        let max = positive_masses.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (min.log10(), max.log10())
    };

    let mass_to_y = |mass: f64| {
        if mass <= 0.0 {
            return plot_top + plot_height - 50.0;
        }
        let normalized = if log_mass_max > log_mass_min {
            (mass.log10() - log_mass_min) / (log_mass_max - log_mass_min)
        } else {
            0.5
        };
        // Higher mass sits higher on screen.
        plot_top + plot_height - normalized * (plot_height - 100.0)
    };

    let mut occupancy: HashMap<(i64, i64), usize> = HashMap::new();
    for (particle, year) in &dated {
        let mut x = year_to_x(*year) - config.card_width / 2.0;
        let mut y = mass_to_y(particle.mass) - config.card_height / 2.0;

        let cell = ((x / CELL_WIDTH).round() as i64, (y / CELL_HEIGHT).round() as i64);
        let seen = occupancy.entry(cell).or_insert(0);
        x += (*seen % 3) as f64 * STAGGER_X;
        y += (*seen / 3) as f64 * STAGGER_Y;
        *seen += 1;

        map.insert(
            particle.name.clone(),
            Placement::Card(CardPlacement {
                position: Point2::new(x, y),
                width: config.card_width,
                height: config.card_height,
                particle: particle.name.clone(),
                annotation: Some(era(*year, &config.discovery)),
            }),
        );
    }

    if !undated.is_empty() {
        let mut unknown_y = plot_top + plot_height + 80.0;
        push_header(
            &mut map,
            "unknown_date_header",
            config.margin,
            unknown_y,
            "Discovery Date Unknown",
        );
        unknown_y += 35.0;
        let cols = column_count(config, viewport_width);
        place_group(&mut map, &undated, config, cols, unknown_y, Some("unknown"));
    }
    map
}
