//! Eightfold Way projection: particles plotted at (isospin I3, hypercharge Y)
//! with Y = strangeness + baryon number.

use super::{grid::push_header, CardPlacement, Placement, PlacementMap};
use crate::core::models::particle::{Particle, ParticleCategory};
use crate::engine::config::LayoutConfig;
use nalgebra::Point2;
use std::collections::HashMap;

/// Horizontal shift applied per extra occupant of one (I3, Y) grid cell.
const COLLISION_STEP: f64 = 25.0;

fn multiplet(particle: &Particle) -> &'static str {
    match particle.category {
        ParticleCategory::Delta | ParticleCategory::Omega => "decuplet",
        _ if particle.is_baryon => "baryon octet",
        _ if particle.is_meson => "meson octet",
        _ => "other",
    }
}

pub(crate) fn layout(
    particles: &[&Particle],
    config: &LayoutConfig,
    viewport_width: f64,
) -> PlacementMap {
    let mut map = PlacementMap::default();
    push_header(&mut map, "eightfold_header", config.margin, 30.0, "EIGHTFOLD WAY");
    push_header(
        &mut map,
        "eightfold_subheader",
        config.margin,
        50.0,
        "Strangeness-Isospin Plot (I3 vs Hypercharge Y)",
    );

    let hadrons: Vec<(&Particle, f64, f64)> = particles
        .iter()
        .copied()
        .filter(|p| p.is_baryon || p.is_meson)
        .map(|p| {
            let hypercharge = p.strangeness as f64 + p.baryon_number as f64;
            (p, p.isospin_i3, hypercharge)
        })
        .collect();
    if hadrons.is_empty() {
        return map;
    }

    let (mut i3_min, mut i3_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for (_, i3, y) in &hadrons {
        i3_min = i3_min.min(*i3);
        i3_max = i3_max.max(*i3);
        y_min = y_min.min(*y);
        y_max = y_max.max(*y);
    }
    let i3_span = (i3_max - i3_min).max(config.eightfold.min_isospin_span);
    let y_span = (y_max - y_min).max(config.eightfold.min_hypercharge_span);

    let plot_left = config.eightfold.plot_margin + config.margin;
    let plot_right = (viewport_width - config.eightfold.plot_margin).max(plot_left + 1.0);
    let plot_top = config.header_height + 80.0;
    let plot_bottom = plot_top + config.eightfold.plot_height;
    let plot_width = plot_right - plot_left;
    let plot_height = config.eightfold.plot_height;

    push_header(
        &mut map,
        "multiplet_label",
        plot_left,
        plot_top - 20.0,
        "Baryon Octet & Decuplet",
    );

    // Occupancy per half-unit (I3, Y) cell; colliding particles shift right
    // in arrival order.
    let mut occupancy: HashMap<(i64, i64), usize> = HashMap::new();

    for (particle, i3, hypercharge) in hadrons {
        let x_norm = (i3 - (i3_min - 0.5)) / (i3_span + 1.0);
        let y_norm = (hypercharge - (y_min - 0.5)) / (y_span + 1.0);
        let mut x = plot_left + x_norm * plot_width - config.card_width / 2.0;
        let y = plot_bottom - y_norm * plot_height - config.card_height / 2.0;

        let cell = ((i3 * 2.0).round() as i64, (hypercharge * 2.0).round() as i64);
        let seen = occupancy.entry(cell).or_insert(0);
        x += *seen as f64 * COLLISION_STEP;
        *seen += 1;

        map.insert(
            particle.name.clone(),
            Placement::Card(CardPlacement {
                position: Point2::new(x, y),
                width: config.card_width,
                height: config.card_height,
                particle: particle.name.clone(),
                annotation: Some(multiplet(particle)),
            }),
        );
    }
    map
}
