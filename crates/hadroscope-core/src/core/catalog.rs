//! Static metadata for every physical property the browser can visualize.
//!
//! The catalog is a pure lookup table: each property carries its display
//! label, the data-file key it reads from (or none for synthetic values such
//! as the derived quark count), a default numeric range, a log-scale flag,
//! and the set of encoding channels it may drive. Unknown property
//! identifiers degrade to [`Property::None`] instead of failing.

/// Visual encoding channels a property can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Fill,
    Border,
    Ring,
    Size,
    Glow,
    Intensity,
}

impl Channel {
    pub const ALL: [Channel; 6] = [
        Channel::Fill,
        Channel::Border,
        Channel::Ring,
        Channel::Size,
        Channel::Glow,
        Channel::Intensity,
    ];
}

/// A physical property of a particle, selectable for visual encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Property {
    Mass,
    Charge,
    Spin,
    HalfLife,
    Stability,
    BaryonNumber,
    LeptonNumber,
    Strangeness,
    Isospin,
    Parity,
    QuarkCount,
    #[default]
    None,
}

impl Property {
    pub const ALL: [Property; 12] = [
        Property::Mass,
        Property::Charge,
        Property::Spin,
        Property::HalfLife,
        Property::Stability,
        Property::BaryonNumber,
        Property::LeptonNumber,
        Property::Strangeness,
        Property::Isospin,
        Property::Parity,
        Property::QuarkCount,
        Property::None,
    ];

    /// Parses a property identifier; unknown identifiers degrade to
    /// [`Property::None`] so an invalid selection means "no encoding" rather
    /// than an error.
    pub fn from_name(name: &str) -> Self {
        match name {
            "mass" => Property::Mass,
            "charge" => Property::Charge,
            "spin" => Property::Spin,
            "half_life" => Property::HalfLife,
            "stability" => Property::Stability,
            "baryon_number" => Property::BaryonNumber,
            "lepton_number" => Property::LeptonNumber,
            "strangeness" => Property::Strangeness,
            "isospin" => Property::Isospin,
            "parity" => Property::Parity,
            "quark_count" => Property::QuarkCount,
            _ => Property::None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Property::Mass => "mass",
            Property::Charge => "charge",
            Property::Spin => "spin",
            Property::HalfLife => "half_life",
            Property::Stability => "stability",
            Property::BaryonNumber => "baryon_number",
            Property::LeptonNumber => "lepton_number",
            Property::Strangeness => "strangeness",
            Property::Isospin => "isospin",
            Property::Parity => "parity",
            Property::QuarkCount => "quark_count",
            Property::None => "none",
        }
    }
}

/// Immutable encoding metadata for one property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescriptor {
    pub label: &'static str,
    /// Data-file key the raw value comes from; `None` marks a synthetic
    /// property computed at load time.
    pub source_key: Option<&'static str>,
    /// Default (min, max) bounds in raw units.
    pub range: (f64, f64),
    pub log_scale: bool,
    /// Channels this property may drive.
    pub channels: &'static [Channel],
}

const COLOR_CHANNELS: &[Channel] = &[Channel::Fill, Channel::Border, Channel::Ring];

static MASS: PropertyDescriptor = PropertyDescriptor {
    label: "Mass (MeV/c^2)",
    source_key: Some("Mass_MeVc2"),
    range: (0.0, 10_000.0),
    log_scale: false,
    channels: &Channel::ALL,
};
static CHARGE: PropertyDescriptor = PropertyDescriptor {
    label: "Electric Charge",
    source_key: Some("Charge_e"),
    range: (-2.0, 2.0),
    log_scale: false,
    channels: &[Channel::Fill, Channel::Border, Channel::Ring, Channel::Size],
};
static SPIN: PropertyDescriptor = PropertyDescriptor {
    label: "Spin",
    source_key: Some("Spin_hbar"),
    range: (0.0, 2.0),
    log_scale: false,
    channels: &[Channel::Fill, Channel::Border, Channel::Ring, Channel::Size],
};
static HALF_LIFE: PropertyDescriptor = PropertyDescriptor {
    label: "Half-Life",
    source_key: Some("HalfLife_s"),
    // Shortest resonances to the free neutron, handled on a log10 axis.
    range: (1e-24, 1e4),
    log_scale: true,
    channels: &[
        Channel::Fill,
        Channel::Border,
        Channel::Ring,
        Channel::Glow,
        Channel::Intensity,
    ],
};
static STABILITY: PropertyDescriptor = PropertyDescriptor {
    label: "Stability",
    source_key: None,
    range: (0.0, 1.0),
    log_scale: false,
    channels: &[
        Channel::Fill,
        Channel::Border,
        Channel::Ring,
        Channel::Glow,
        Channel::Intensity,
    ],
};
static BARYON_NUMBER: PropertyDescriptor = PropertyDescriptor {
    label: "Baryon Number",
    source_key: Some("BaryonNumber_B"),
    range: (-1.0, 1.0),
    log_scale: false,
    channels: COLOR_CHANNELS,
};
static LEPTON_NUMBER: PropertyDescriptor = PropertyDescriptor {
    label: "Lepton Number",
    source_key: Some("LeptonNumber_L"),
    range: (-1.0, 1.0),
    log_scale: false,
    channels: COLOR_CHANNELS,
};
static STRANGENESS: PropertyDescriptor = PropertyDescriptor {
    label: "Strangeness",
    source_key: Some("Strangeness"),
    range: (-3.0, 1.0),
    log_scale: false,
    channels: COLOR_CHANNELS,
};
static ISOSPIN: PropertyDescriptor = PropertyDescriptor {
    label: "Isospin",
    source_key: Some("Isospin_I3"),
    range: (-1.5, 1.5),
    log_scale: false,
    channels: COLOR_CHANNELS,
};
static PARITY: PropertyDescriptor = PropertyDescriptor {
    label: "Parity",
    source_key: Some("Parity_P"),
    range: (-1.0, 1.0),
    log_scale: false,
    channels: COLOR_CHANNELS,
};
static QUARK_COUNT: PropertyDescriptor = PropertyDescriptor {
    label: "Quark Count",
    source_key: None,
    range: (0.0, 5.0),
    log_scale: false,
    channels: &[Channel::Size],
};
static NONE: PropertyDescriptor = PropertyDescriptor {
    label: "None",
    source_key: None,
    range: (0.0, 100.0),
    log_scale: false,
    channels: &Channel::ALL,
};

/// The full descriptor for a property.
pub fn descriptor(property: Property) -> &'static PropertyDescriptor {
    match property {
        Property::Mass => &MASS,
        Property::Charge => &CHARGE,
        Property::Spin => &SPIN,
        Property::HalfLife => &HALF_LIFE,
        Property::Stability => &STABILITY,
        Property::BaryonNumber => &BARYON_NUMBER,
        Property::LeptonNumber => &LEPTON_NUMBER,
        Property::Strangeness => &STRANGENESS,
        Property::Isospin => &ISOSPIN,
        Property::Parity => &PARITY,
        Property::QuarkCount => &QUARK_COUNT,
        Property::None => &NONE,
    }
}

pub fn range_of(property: Property) -> (f64, f64) {
    descriptor(property).range
}

pub fn is_log_scale(property: Property) -> bool {
    descriptor(property).log_scale
}

pub fn display_name(property: Property) -> &'static str {
    descriptor(property).label
}

pub fn source_key(property: Property) -> Option<&'static str> {
    descriptor(property).source_key
}

/// Every property eligible to drive `channel`.
pub fn eligible_for(channel: Channel) -> Vec<Property> {
    Property::ALL
        .iter()
        .copied()
        .filter(|p| descriptor(*p).channels.contains(&channel))
        .collect()
}
