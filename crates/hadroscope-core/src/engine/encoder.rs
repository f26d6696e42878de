//! Maps physical property values to normalized color/intensity encodings.
//!
//! Each channel carries a property selection, a fade factor, optional
//! user-set bounds overriding the catalog defaults, and an optional custom
//! gradient. Missing values and unknown properties degrade to a neutral
//! mid-range encoding instead of failing.

use crate::core::catalog::{self, Property};
use crate::core::models::particle::{Particle, ParticleCategory};
use crate::core::models::quark::QuarkFlavor;
use phf::phf_map;

/// An opaque RGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation toward `other`; `t` is clamped to [0, 1].
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    pub const fn with_alpha(self, a: u8) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

/// An RGB color with alpha, ready for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Two-stop color gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub start: Rgb,
    pub end: Rgb,
}

impl Gradient {
    pub fn color_at(&self, t: f64) -> Rgb {
        self.start.lerp(self.end, t)
    }
}

/// Default gradient stops per property family.
pub fn default_gradient(property: Property) -> Gradient {
    match property {
        Property::Mass => Gradient {
            start: Rgb::new(50, 100, 255),
            end: Rgb::new(255, 50, 50),
        },
        Property::HalfLife => Gradient {
            start: Rgb::new(120, 50, 200),
            end: Rgb::new(255, 220, 50),
        },
        Property::Stability => Gradient {
            start: Rgb::new(255, 80, 80),
            end: Rgb::new(100, 255, 100),
        },
        Property::Charge => Gradient {
            start: Rgb::new(100, 200, 220),
            end: Rgb::new(255, 140, 50),
        },
        Property::Strangeness => Gradient {
            start: Rgb::new(50, 200, 100),
            end: Rgb::new(200, 50, 200),
        },
        _ => Gradient {
            start: Rgb::new(100, 150, 255),
            end: Rgb::new(255, 150, 100),
        },
    }
}

/// Display colors keyed by particle category, unknown families fall back to
/// neutral gray.
static CATEGORY_COLORS: phf::Map<&'static str, Rgb> = phf_map! {
    "baryon" => Rgb::new(102, 126, 234),
    "delta" => Rgb::new(255, 138, 128),
    "sigma" => Rgb::new(129, 199, 132),
    "xi" => Rgb::new(255, 213, 79),
    "lambda" => Rgb::new(79, 195, 247),
    "omega" => Rgb::new(186, 104, 200),
    "meson" => Rgb::new(240, 147, 251),
    "pion" => Rgb::new(255, 183, 77),
    "kaon" => Rgb::new(240, 147, 251),
    "eta" => Rgb::new(176, 190, 197),
    "jpsi" => Rgb::new(255, 235, 59),
    "upsilon" => Rgb::new(156, 39, 176),
    "lepton" => Rgb::new(79, 195, 247),
    "boson" => Rgb::new(255, 183, 77),
};

pub fn category_color(category: ParticleCategory) -> Rgb {
    CATEGORY_COLORS
        .get(category.as_str())
        .copied()
        .unwrap_or(Rgb::new(150, 150, 150))
}

/// Display color for one quark of a hadron's composition; antiquarks are
/// lighter tints of their matter counterparts.
pub fn quark_color(flavor: Option<QuarkFlavor>, is_anti: bool) -> Rgb {
    let Some(flavor) = flavor else {
        return Rgb::new(150, 150, 150);
    };
    match (flavor, is_anti) {
        (QuarkFlavor::Up, false) => Rgb::new(255, 100, 100),
        (QuarkFlavor::Down, false) => Rgb::new(100, 100, 255),
        (QuarkFlavor::Strange, false) => Rgb::new(100, 255, 100),
        (QuarkFlavor::Charm, false) => Rgb::new(255, 200, 100),
        (QuarkFlavor::Bottom, false) => Rgb::new(200, 100, 255),
        (QuarkFlavor::Top, false) => Rgb::new(255, 255, 100),
        (QuarkFlavor::Up, true) => Rgb::new(255, 180, 180),
        (QuarkFlavor::Down, true) => Rgb::new(180, 180, 255),
        (QuarkFlavor::Strange, true) => Rgb::new(180, 255, 180),
        (QuarkFlavor::Charm, true) => Rgb::new(255, 230, 180),
        (QuarkFlavor::Bottom, true) => Rgb::new(230, 180, 255),
        (QuarkFlavor::Top, true) => Rgb::new(255, 255, 180),
    }
}

/// Raw (or synthetic) value of `property` for a particle, in the catalog's
/// raw units. `None` when the particle carries no such value.
pub fn property_value(particle: &Particle, property: Property) -> Option<f64> {
    match property {
        Property::Mass => Some(particle.mass),
        Property::Charge => Some(particle.charge),
        Property::Spin => Some(particle.spin),
        Property::HalfLife => particle.half_life,
        Property::Stability => Some(particle.stability_factor),
        Property::BaryonNumber => Some(particle.baryon_number as f64),
        Property::LeptonNumber => Some(particle.lepton_number as f64),
        Property::Strangeness => Some(particle.strangeness as f64),
        Property::Isospin => Some(particle.isospin_i3),
        Property::Parity => particle.parity.map(|p| p as f64),
        Property::QuarkCount => Some(particle.quark_count as f64),
        Property::None => None,
    }
}

/// True when the particle's raw value for `property` lies inside the active
/// filter range. Particles without a value always pass.
pub fn passes_filter(particle: &Particle, property: Property, range: (f64, f64)) -> bool {
    match property_value(particle, property) {
        Some(value) => value >= range.0 && value <= range.1,
        None => true,
    }
}

/// The result of encoding one particle on one channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodedValue {
    /// Normalized position in [0, 1] along the active range.
    pub t: f64,
    /// Output alpha after fade.
    pub alpha: u8,
    pub color: Rgba,
}

/// Per-channel encoding state: the selected property plus its fade, bounds
/// override, and gradient override.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelEncoding {
    pub property: Property,
    /// Fade factor in [0, 1]; scales output alpha by (1 - fade).
    pub fade: f64,
    /// User bounds replacing the catalog default range.
    pub bounds: Option<(f64, f64)>,
    /// Custom gradient; when absent the property's default gradient applies.
    pub custom_gradient: Option<Gradient>,
}

impl ChannelEncoding {
    pub fn new(property: Property) -> Self {
        Self {
            property,
            fade: 0.0,
            bounds: None,
            custom_gradient: None,
        }
    }

    pub fn gradient(&self) -> Gradient {
        self.custom_gradient
            .unwrap_or_else(|| default_gradient(self.property))
    }

    /// Encodes one particle: resolve the raw value, apply the log transform
    /// when the catalog says so, normalize into [0, 1] against the active
    /// bounds, then apply fade. Missing values land at the neutral midpoint.
    pub fn encode(&self, particle: &Particle) -> EncodedValue {
        let alpha = (255.0 * (1.0 - self.fade.clamp(0.0, 1.0))).round() as u8;
        let t = match property_value(particle, self.property) {
            None => 0.5,
            Some(raw) => {
                let (mut lo, mut hi) = self.bounds.unwrap_or_else(|| catalog::range_of(self.property));
                let mut value = raw;
                if catalog::is_log_scale(self.property) {
                    // Clamp non-positive inputs to the scale minimum before
                    // taking the log.
                    let floor = lo.max(f64::MIN_POSITIVE);
                    value = value.max(floor).log10();
                    hi = hi.max(floor).log10();
                    lo = floor.log10();
                }
                if hi > lo {
                    ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
                } else {
                    0.5
                }
            }
        };
        EncodedValue {
            t,
            alpha,
            color: self.gradient().color_at(t).with_alpha(alpha),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::particle::test_support::particle;
    use crate::core::models::particle::Stability;

    fn proton() -> Particle {
        particle("Proton", &["Baryon"], 938.272, 1.0, Stability::Stable, None)
    }

    #[test]
    fn registered_minimum_encodes_to_zero_and_maximum_to_one() {
        let encoding = ChannelEncoding::new(Property::Mass);
        let (min, max) = catalog::range_of(Property::Mass);

        let mut light = proton();
        light.mass = min;
        assert_eq!(encoding.encode(&light).t, 0.0);

        let mut heavy = proton();
        heavy.mass = max;
        assert_eq!(encoding.encode(&heavy).t, 1.0);
    }

    #[test]
    fn fade_halves_alpha() {
        let mut encoding = ChannelEncoding::new(Property::Mass);
        let p = proton();
        assert_eq!(encoding.encode(&p).alpha, 255);

        encoding.fade = 0.5;
        assert_eq!(encoding.encode(&p).alpha, 128);

        encoding.fade = 1.0;
        assert_eq!(encoding.encode(&p).alpha, 0);
    }

    #[test]
    fn log_scale_bounds_apply_in_log_domain() {
        let encoding = ChannelEncoding::new(Property::HalfLife);
        let (min, max) = catalog::range_of(Property::HalfLife);

        let mut shortest = proton();
        shortest.stability = Stability::Unstable;
        shortest.half_life = Some(min);
        let shortest = shortest.with_derived_fields();
        assert!(encoding.encode(&shortest).t.abs() < 1e-12);

        let mut longest = proton();
        longest.stability = Stability::Unstable;
        longest.half_life = Some(max);
        let longest = longest.with_derived_fields();
        assert!((encoding.encode(&longest).t - 1.0).abs() < 1e-12);

        // Geometric midpoint of the range lands at the linear midpoint.
        let mut mid = proton();
        mid.stability = Stability::Unstable;
        mid.half_life = Some(10f64.powf((min.log10() + max.log10()) / 2.0));
        let mid = mid.with_derived_fields();
        assert!((encoding.encode(&mid).t - 0.5).abs() < 1e-9);
    }

    #[test]
    fn non_positive_log_input_clamps_to_scale_minimum() {
        let encoding = ChannelEncoding::new(Property::HalfLife);
        let mut p = proton();
        p.stability = Stability::Unstable;
        p.half_life = Some(1e-40);
        let p = p.with_derived_fields();
        assert_eq!(encoding.encode(&p).t, 0.0);
    }

    #[test]
    fn missing_value_encodes_to_neutral_midpoint() {
        let encoding = ChannelEncoding::new(Property::HalfLife);
        let p = proton();
        assert_eq!(p.half_life, None);
        assert_eq!(encoding.encode(&p).t, 0.5);

        let none = ChannelEncoding::new(Property::None);
        assert_eq!(none.encode(&p).t, 0.5);
    }

    #[test]
    fn custom_bounds_override_the_catalog_range() {
        let mut encoding = ChannelEncoding::new(Property::Mass);
        encoding.bounds = Some((900.0, 1000.0));
        let p = proton();
        let expected = (938.272 - 900.0) / 100.0;
        assert!((encoding.encode(&p).t - expected).abs() < 1e-12);
    }

    #[test]
    fn degenerate_bounds_fall_back_to_midpoint() {
        let mut encoding = ChannelEncoding::new(Property::Mass);
        encoding.bounds = Some((500.0, 500.0));
        assert_eq!(encoding.encode(&proton()).t, 0.5);
    }

    #[test]
    fn out_of_range_values_clamp_to_the_unit_interval() {
        let mut encoding = ChannelEncoding::new(Property::Mass);
        encoding.bounds = Some((0.0, 100.0));
        assert_eq!(encoding.encode(&proton()).t, 1.0);
    }

    #[test]
    fn gradient_endpoints_and_midpoint_interpolate() {
        let gradient = Gradient {
            start: Rgb::new(0, 0, 0),
            end: Rgb::new(200, 100, 50),
        };
        assert_eq!(gradient.color_at(0.0), Rgb::new(0, 0, 0));
        assert_eq!(gradient.color_at(1.0), Rgb::new(200, 100, 50));
        assert_eq!(gradient.color_at(0.5), Rgb::new(100, 50, 25));
    }

    #[test]
    fn custom_gradient_replaces_the_default() {
        let mut encoding = ChannelEncoding::new(Property::Mass);
        let custom = Gradient {
            start: Rgb::new(1, 2, 3),
            end: Rgb::new(1, 2, 3),
        };
        encoding.custom_gradient = Some(custom);
        let encoded = encoding.encode(&proton());
        assert_eq!((encoded.color.r, encoded.color.g, encoded.color.b), (1, 2, 3));
    }

    #[test]
    fn category_colors_cover_known_families_and_default_to_gray() {
        assert_eq!(category_color(ParticleCategory::Delta), Rgb::new(255, 138, 128));
        assert_eq!(category_color(ParticleCategory::Pion), Rgb::new(255, 183, 77));
        assert_eq!(category_color(ParticleCategory::Other), Rgb::new(150, 150, 150));
    }

    #[test]
    fn quark_colors_distinguish_matter_and_antimatter() {
        let up = quark_color(Some(QuarkFlavor::Up), false);
        let anti_up = quark_color(Some(QuarkFlavor::Up), true);
        assert_ne!(up, anti_up);
        assert_eq!(quark_color(None, false), Rgb::new(150, 150, 150));
    }

    #[test]
    fn charge_filter_selects_exact_matches() {
        let charges = [-1.0, 0.0, 0.0, 1.0, 2.0];
        let particles: Vec<Particle> = charges
            .iter()
            .enumerate()
            .map(|(i, &q)| {
                particle(&format!("P{i}"), &["Baryon"], 100.0, q, Stability::Stable, None)
            })
            .collect();
        let passing = particles
            .iter()
            .filter(|p| passes_filter(p, Property::Charge, (0.0, 0.0)))
            .count();
        assert_eq!(passing, 2);
    }

    #[test]
    fn particles_without_a_value_pass_filters() {
        let p = proton();
        assert!(passes_filter(&p, Property::HalfLife, (1e-10, 1e-5)));
        assert!(passes_filter(&p, Property::Parity, (-1.0, 1.0)));
    }
}
