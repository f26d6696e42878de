//! The stateful facade consumed by the host's control panel and renderer.
//!
//! `ParticleTableView` owns the injected repository, the active layout mode
//! and filters, per-channel encodings, and pan/zoom. Layout is pure derived
//! state behind a dirty flag: any input change marks it stale and the next
//! read recomputes it synchronously, so several rapid filter toggles cost one
//! recompute.

use super::config::LayoutConfig;
use super::encoder::{self, ChannelEncoding, EncodedValue, Gradient};
use super::layout::{self, LayoutMode, Placement, PlacementMap};
use crate::core::catalog::{Channel, Property};
use crate::core::models::particle::Particle;
use crate::core::models::repository::ParticleRepository;
use nalgebra::Point2;
use std::collections::HashMap;
use tracing::debug;

pub const MIN_ZOOM: f64 = 0.3;
pub const MAX_ZOOM: f64 = 3.0;
const ZOOM_STEP: f64 = 1.1;

/// Coarse particle filter driven by the control panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleFilter {
    pub show_baryons: bool,
    pub show_mesons: bool,
    pub show_stable: bool,
    pub show_unstable: bool,
    /// Exact charge to keep, in units of e; `None` shows all charges.
    pub charge: Option<f64>,
}

impl Default for ParticleFilter {
    fn default() -> Self {
        Self {
            show_baryons: true,
            show_mesons: true,
            show_stable: true,
            show_unstable: true,
            charge: None,
        }
    }
}

/// One decay arrow between two placed cards, for the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct DecayLink {
    pub source: String,
    pub target: String,
    /// Bottom-center of the source card.
    pub from: Point2<f64>,
    /// Top-center of the target card.
    pub to: Point2<f64>,
}

#[derive(Debug, Clone)]
struct Channels {
    fill: ChannelEncoding,
    border: ChannelEncoding,
    ring: ChannelEncoding,
    size: ChannelEncoding,
    glow: ChannelEncoding,
    intensity: ChannelEncoding,
}

impl Default for Channels {
    fn default() -> Self {
        Self {
            fill: ChannelEncoding::new(Property::Mass),
            border: ChannelEncoding::new(Property::Charge),
            ring: ChannelEncoding::new(Property::None),
            size: ChannelEncoding::new(Property::Mass),
            glow: ChannelEncoding::new(Property::Stability),
            intensity: ChannelEncoding::new(Property::None),
        }
    }
}

impl Channels {
    fn get(&self, channel: Channel) -> &ChannelEncoding {
        match channel {
            Channel::Fill => &self.fill,
            Channel::Border => &self.border,
            Channel::Ring => &self.ring,
            Channel::Size => &self.size,
            Channel::Glow => &self.glow,
            Channel::Intensity => &self.intensity,
        }
    }

    fn get_mut(&mut self, channel: Channel) -> &mut ChannelEncoding {
        match channel {
            Channel::Fill => &mut self.fill,
            Channel::Border => &mut self.border,
            Channel::Ring => &mut self.ring,
            Channel::Size => &mut self.size,
            Channel::Glow => &mut self.glow,
            Channel::Intensity => &mut self.intensity,
        }
    }
}

/// The single view instance owning all interaction state.
#[derive(Debug, Clone)]
pub struct ParticleTableView {
    repository: ParticleRepository,
    config: LayoutConfig,
    mode: LayoutMode,
    filter: ParticleFilter,
    property_filters: HashMap<Property, (f64, f64)>,
    channels: Channels,
    viewport: (f64, f64),
    zoom: f64,
    pan: (f64, f64),
    cache: PlacementMap,
    dirty: bool,
}

impl ParticleTableView {
    /// Builds a view over an explicitly constructed repository.
    pub fn new(repository: ParticleRepository, config: LayoutConfig) -> Self {
        Self {
            repository,
            config,
            mode: LayoutMode::default(),
            filter: ParticleFilter::default(),
            property_filters: HashMap::new(),
            channels: Channels::default(),
            viewport: (800.0, 600.0),
            zoom: 1.0,
            pan: (0.0, 0.0),
            cache: PlacementMap::default(),
            dirty: true,
        }
    }

    pub fn repository(&self) -> &ParticleRepository {
        &self.repository
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn set_layout_mode(&mut self, mode: LayoutMode) {
        if self.mode != mode {
            self.mode = mode;
            self.dirty = true;
        }
    }

    pub fn filter(&self) -> &ParticleFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: ParticleFilter) {
        if self.filter != filter {
            self.filter = filter;
            self.dirty = true;
        }
    }

    /// Assigns the property a channel encodes. Pure encoding state; the
    /// placement cache is untouched.
    pub fn set_property(&mut self, channel: Channel, property: Property) {
        self.channels.get_mut(channel).property = property;
    }

    pub fn set_fade(&mut self, channel: Channel, fade: f64) {
        self.channels.get_mut(channel).fade = fade.clamp(0.0, 1.0);
    }

    pub fn set_channel_bounds(&mut self, channel: Channel, min: f64, max: f64) {
        self.channels.get_mut(channel).bounds = Some((min, max));
    }

    pub fn clear_channel_bounds(&mut self, channel: Channel) {
        self.channels.get_mut(channel).bounds = None;
    }

    pub fn set_channel_gradient(&mut self, channel: Channel, gradient: Gradient) {
        self.channels.get_mut(channel).custom_gradient = Some(gradient);
    }

    pub fn channel(&self, channel: Channel) -> &ChannelEncoding {
        self.channels.get(channel)
    }

    /// Restricts layout to particles whose raw `property` value lies in
    /// [min, max]; applies before layout regardless of rendering channel.
    pub fn set_property_filter(&mut self, property: Property, min: f64, max: f64) {
        self.property_filters.insert(property, (min, max));
        self.dirty = true;
    }

    pub fn clear_property_filter(&mut self, property: Property) {
        if self.property_filters.remove(&property).is_some() {
            self.dirty = true;
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        if self.viewport != (width, height) {
            self.viewport = (width, height);
            self.dirty = true;
        }
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan.0 += dx;
        self.pan.1 += dy;
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom * ZOOM_STEP).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom / ZOOM_STEP).max(MIN_ZOOM);
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn pan(&self) -> (f64, f64) {
        self.pan
    }

    pub fn reset_view(&mut self) {
        self.zoom = 1.0;
        self.pan = (0.0, 0.0);
    }

    fn passes(&self, particle: &Particle) -> bool {
        if particle.is_baryon && !self.filter.show_baryons {
            return false;
        }
        if particle.is_meson && !self.filter.show_mesons {
            return false;
        }
        if particle.stability.is_stable() {
            if !self.filter.show_stable {
                return false;
            }
        } else if !self.filter.show_unstable {
            return false;
        }
        if let Some(charge) = self.filter.charge {
            if particle.charge != charge {
                return false;
            }
        }
        self.property_filters
            .iter()
            .all(|(property, range)| encoder::passes_filter(particle, *property, *range))
    }

    /// Particles surviving the active filters, in repository (mass) order.
    pub fn filtered_particles(&self) -> Vec<&Particle> {
        self.repository
            .particles()
            .iter()
            .filter(|p| self.passes(p))
            .collect()
    }

    /// Number of particles the current layout shows.
    pub fn item_count(&self) -> usize {
        self.filtered_particles().len()
    }

    fn ensure_layout(&mut self) {
        if !self.dirty {
            return;
        }
        let map = {
            let filtered = self.filtered_particles();
            layout::compute_layout(&filtered, self.mode, &self.config, self.viewport.0)
        };
        debug!(
            mode = self.mode.name(),
            entries = map.len(),
            "recomputed layout"
        );
        self.cache = map;
        self.dirty = false;
    }

    /// The placement map for the current mode, filters, and viewport,
    /// recomputed lazily when stale.
    pub fn placements(&mut self) -> &PlacementMap {
        self.ensure_layout();
        &self.cache
    }

    /// Hit-tests a pointer position through the current pan/zoom transform;
    /// first matching card in insertion order wins.
    pub fn particle_at(&mut self, x: f64, y: f64) -> Option<&Particle> {
        self.ensure_layout();
        let world_x = (x - self.pan.0) / self.zoom;
        let world_y = (y - self.pan.1) / self.zoom;
        let name = self.cache.iter().find_map(|(_, placement)| {
            placement
                .as_card()
                .filter(|card| card.contains(world_x, world_y))
                .map(|card| card.particle.clone())
        })?;
        self.repository.get(&name)
    }

    /// Decay arrows between placed cards; non-empty only in the decay-chain
    /// mode, where the layout orders particles by stability.
    pub fn decay_links(&mut self) -> Vec<DecayLink> {
        if self.mode != LayoutMode::DecayChain {
            return Vec::new();
        }
        self.ensure_layout();
        let mut links = Vec::new();
        for (_, placement) in self.cache.iter() {
            let Some(card) = placement.as_card() else {
                continue;
            };
            let Some(particle) = self.repository.get(&card.particle) else {
                continue;
            };
            for product in &particle.decay_products {
                if let Some(target) = self.cache.get(product).and_then(Placement::as_card) {
                    links.push(DecayLink {
                        source: card.particle.clone(),
                        target: target.particle.clone(),
                        from: card.bottom_anchor(),
                        to: target.top_anchor(),
                    });
                }
            }
        }
        links
    }

    /// Encodes one particle on one channel with the channel's current
    /// property, fade, bounds, and gradient.
    pub fn encoded(&self, channel: Channel, particle: &Particle) -> EncodedValue {
        self.channels.get(channel).encode(particle)
    }
}
