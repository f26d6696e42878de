//! Lifetime spectrum: a logarithmic half-life timeline with stable particles
//! in an off-scale block and unstable baryons and mesons in two stacked
//! tracks.

use super::{grid::push_header, CardPlacement, Placement, PlacementMap};
use crate::core::models::particle::Particle;
use crate::engine::config::{LayoutConfig, TimelineConfig};
use nalgebra::Point2;
use std::collections::HashMap;

/// Vertical gap between stacked cards within one track.
const TRACK_ROW_GAP: f64 = 10.0;
/// Cards whose timeline x falls within the same bucket stack vertically.
const BUCKET_WIDTH: f64 = 50.0;

fn marker_label(exponent: i32) -> String {
    match exponent {
        0 => "1 s".to_string(),
        -3 => "1 ms".to_string(),
        -6 => "1 us".to_string(),
        -9 => "1 ns".to_string(),
        -12 => "1 ps".to_string(),
        -15 => "1 fs".to_string(),
        -18 => "1 as".to_string(),
        -21 => "1 zs".to_string(),
        -24 => "1 ys".to_string(),
        3 => "1000 s".to_string(),
        _ => format!("10^{exponent} s"),
    }
}

/// Timeline x for a half-life; out-of-range and non-positive values clamp to
/// the span boundary.
fn lifetime_x(half_life: Option<f64>, timeline: &TimelineConfig, left: f64, span: f64) -> f64 {
    match half_life {
        Some(hl) if hl > 0.0 => {
            let log_hl = hl.log10().clamp(timeline.log_min, timeline.log_max);
            left + (log_hl - timeline.log_min) / (timeline.log_max - timeline.log_min) * span
        }
        _ => left,
    }
}

fn lifetime_category(half_life: Option<f64>) -> &'static str {
    let Some(hl) = half_life else {
        return "unknown";
    };
    let log_hl = if hl > 0.0 { hl.log10() } else { -30.0 };
    if log_hl > 0.0 {
        "long_lived"
    } else if log_hl > -9.0 {
        "medium"
    } else if log_hl > -18.0 {
        "short"
    } else {
        "ultra_short"
    }
}

/// Places one unstable track bucketed by rounded timeline position and
/// returns the vertical extent it occupied.
fn place_track(
    map: &mut PlacementMap,
    particles: &[&Particle],
    config: &LayoutConfig,
    timeline_left: f64,
    span: f64,
    y_offset: f64,
) -> f64 {
    let mut sorted: Vec<&Particle> = particles.to_vec();
    sorted.sort_by(|a, b| {
        a.half_life
            .unwrap_or(0.0)
            .total_cmp(&b.half_life.unwrap_or(0.0))
    });

    let mut buckets: HashMap<i64, usize> = HashMap::new();
    let mut max_rows: usize = 1;
    for particle in sorted {
        let x = lifetime_x(particle.half_life, &config.timeline, timeline_left, span)
            - config.card_width / 2.0;
        let bucket = (x / BUCKET_WIDTH).round() as i64;
        let row = buckets.entry(bucket).or_insert(0);
        let y = y_offset + *row as f64 * (config.card_height + TRACK_ROW_GAP);
        *row += 1;
        max_rows = max_rows.max(*row);

        map.insert(
            particle.name.clone(),
            Placement::Card(CardPlacement {
                position: Point2::new(x, y),
                width: config.card_width,
                height: config.card_height,
                particle: particle.name.clone(),
                annotation: Some(lifetime_category(particle.half_life)),
            }),
        );
    }
    max_rows as f64 * (config.card_height + TRACK_ROW_GAP)
}

pub(crate) fn layout(
    particles: &[&Particle],
    config: &LayoutConfig,
    viewport_width: f64,
) -> PlacementMap {
    let mut map = PlacementMap::default();
    let mut y = 30.0;
    push_header(&mut map, "lifetime_header", config.margin, y, "LIFETIME SPECTRUM");
    push_header(
        &mut map,
        "lifetime_subheader",
        config.margin,
        y + 20.0,
        "Logarithmic timeline from shortest to longest lived",
    );
    y += config.header_height + 20.0;

    let timeline_left = config.margin * 2.0;
    let timeline_right = (viewport_width - config.margin * 2.0).max(timeline_left + 1.0);
    let span = timeline_right - timeline_left;

    // Axis tick labels every three decades.
    let marker_y = y + 30.0;
    let log_min = config.timeline.log_min.round() as i32;
    let log_max = config.timeline.log_max.round() as i32;
    for exponent in (log_min..=log_max).step_by(3) {
        let x = timeline_left
            + (exponent as f64 - config.timeline.log_min)
                / (config.timeline.log_max - config.timeline.log_min)
                * span;
        push_header(
            &mut map,
            &format!("timeline_marker_{exponent}"),
            x,
            marker_y,
            marker_label(exponent),
        );
    }
    y += 80.0;

    let stable: Vec<&Particle> = particles
        .iter()
        .copied()
        .filter(|p| p.stability.is_stable())
        .collect();
    let unstable_baryons: Vec<&Particle> = particles
        .iter()
        .copied()
        .filter(|p| p.is_baryon && !p.stability.is_stable())
        .collect();
    let unstable_mesons: Vec<&Particle> = particles
        .iter()
        .copied()
        .filter(|p| p.is_meson && !p.stability.is_stable())
        .collect();

    // Stable particles sit past the right end of the scale in a two-row block.
    if !stable.is_empty() {
        push_header(&mut map, "stable_header", config.margin, y, "STABLE PARTICLES");
        y += 35.0;
        for (i, particle) in stable.iter().enumerate() {
            let col = (i / 2) as f64;
            let row = (i % 2) as f64;
            let x = timeline_right + 50.0 + col * (config.card_width + TRACK_ROW_GAP);
            let py = y + row * (config.card_height + TRACK_ROW_GAP);
            map.insert(
                particle.name.clone(),
                Placement::Card(CardPlacement {
                    position: Point2::new(x, py),
                    width: config.card_width,
                    height: config.card_height,
                    particle: particle.name.clone(),
                    annotation: Some("stable"),
                }),
            );
        }
        let rows = stable.len().min(2) as f64;
        y += rows * (config.card_height + TRACK_ROW_GAP) + config.section_gap + 20.0;
    }

    if !unstable_baryons.is_empty() {
        push_header(
            &mut map,
            "baryon_lifetime_header",
            config.margin,
            y,
            "BARYONS (by half-life)",
        );
        y += 35.0;
        let height = place_track(&mut map, &unstable_baryons, config, timeline_left, span, y);
        y += height + config.section_gap + 20.0;
    }

    if !unstable_mesons.is_empty() {
        push_header(
            &mut map,
            "meson_lifetime_header",
            config.margin,
            y,
            "MESONS (by half-life)",
        );
        y += 35.0;
        place_track(&mut map, &unstable_mesons, config, timeline_left, span, y);
    }
    map
}
