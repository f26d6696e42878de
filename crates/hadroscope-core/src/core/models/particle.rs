use super::quark::{QuarkFlavor, QuarkInstance};
use serde::Deserialize;

/// Classification of a particle, refined past the coarse baryon/meson split
/// for families that get their own visual identity.
///
/// Classification precedence is first-match-wins: baryon subtypes are tested
/// before the generic baryon tag, meson subtypes before the generic meson tag,
/// then lepton, then boson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParticleCategory {
    Baryon,
    Delta,
    Sigma,
    Xi,
    Lambda,
    Omega,
    Meson,
    Pion,
    Kaon,
    Eta,
    JPsi,
    Upsilon,
    Lepton,
    Boson,
    #[default]
    Other,
}

impl ParticleCategory {
    /// Determines the category from a record's classification tag list.
    pub fn classify(classification: &[String]) -> Self {
        let tags: Vec<String> = classification
            .iter()
            .map(|t| t.to_ascii_lowercase())
            .collect();
        let is = |exact: &str| tags.iter().any(|t| t == exact);
        let has = |needle: &str| tags.iter().any(|t| t.contains(needle));

        if is("baryon") {
            if has("delta") {
                ParticleCategory::Delta
            } else if has("sigma") {
                ParticleCategory::Sigma
            } else if has("xi") || has("cascade") {
                ParticleCategory::Xi
            } else if has("lambda") {
                ParticleCategory::Lambda
            } else if has("omega") {
                ParticleCategory::Omega
            } else {
                ParticleCategory::Baryon
            }
        } else if is("meson") {
            if has("pion") {
                ParticleCategory::Pion
            } else if has("kaon") {
                ParticleCategory::Kaon
            } else if has("eta") {
                ParticleCategory::Eta
            } else if has("charmonium") || has("jpsi") {
                ParticleCategory::JPsi
            } else if has("bottomonium") || has("upsilon") {
                ParticleCategory::Upsilon
            } else {
                ParticleCategory::Meson
            }
        } else if is("lepton") {
            ParticleCategory::Lepton
        } else if is("boson") {
            ParticleCategory::Boson
        } else {
            ParticleCategory::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ParticleCategory::Baryon => "baryon",
            ParticleCategory::Delta => "delta",
            ParticleCategory::Sigma => "sigma",
            ParticleCategory::Xi => "xi",
            ParticleCategory::Lambda => "lambda",
            ParticleCategory::Omega => "omega",
            ParticleCategory::Meson => "meson",
            ParticleCategory::Pion => "pion",
            ParticleCategory::Kaon => "kaon",
            ParticleCategory::Eta => "eta",
            ParticleCategory::JPsi => "jpsi",
            ParticleCategory::Upsilon => "upsilon",
            ParticleCategory::Lepton => "lepton",
            ParticleCategory::Boson => "boson",
            ParticleCategory::Other => "other",
        }
    }
}

/// Whether a particle decays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stability {
    Stable,
    #[default]
    Unstable,
}

impl Stability {
    /// Parses the record's stability tag; anything but "Stable" is unstable.
    pub fn from_tag(tag: &str) -> Self {
        if tag == "Stable" {
            Stability::Stable
        } else {
            Stability::Unstable
        }
    }

    pub fn is_stable(&self) -> bool {
        matches!(self, Stability::Stable)
    }
}

/// One constituent entry of a hadron's composition list.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CompositionEntry {
    #[serde(rename = "Constituent", default)]
    pub constituent: String,
    #[serde(rename = "Count", default = "default_count")]
    pub count: u32,
    #[serde(rename = "Symbol", default)]
    pub symbol: String,
    #[serde(rename = "IsAnti", default)]
    pub is_anti: bool,
    #[serde(rename = "Charge_e", default)]
    pub charge: f64,
}

fn default_count() -> u32 {
    1
}

/// Discovery metadata attached to some particle records.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Discovery {
    #[serde(rename = "Year", default)]
    pub year: Option<i32>,
    #[serde(rename = "Location", default)]
    pub location: Option<String>,
}

/// A subatomic particle, immutable after load.
///
/// Identity is the unique `name`. Fields prefixed by nothing are carried
/// straight from the source record; the block at the bottom holds values
/// derived once at load time so layout and encoding never recompute them.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub name: String,
    pub symbol: String,
    pub classification: Vec<String>,
    /// Rest mass in MeV/c^2.
    pub mass: f64,
    /// Electric charge in units of e (multiples of 1/3).
    pub charge: f64,
    /// Spin in units of hbar.
    pub spin: f64,
    /// Half-life in seconds; absent means the particle does not decay.
    pub half_life: Option<f64>,
    pub stability: Stability,
    pub baryon_number: i32,
    pub lepton_number: i32,
    pub strangeness: i32,
    pub charm: i32,
    pub bottomness: i32,
    pub isospin_i: f64,
    pub isospin_i3: f64,
    /// Parity quantum number, +1 or -1 when defined.
    pub parity: Option<i8>,
    pub c_parity: Option<i8>,
    /// Flavor composition string, e.g. "uud" for a proton.
    pub quark_content: String,
    pub composition: Vec<CompositionEntry>,
    /// Names of decay products; resolved against the repository after load.
    pub decay_products: Vec<String>,
    pub discovery: Option<Discovery>,

    // Derived at load time.
    pub category: ParticleCategory,
    pub is_baryon: bool,
    pub is_meson: bool,
    pub log_mass: f64,
    pub log_half_life: Option<f64>,
    pub quark_count: u32,
    pub quarks: Vec<QuarkInstance>,
    /// Visualization stability factor: exactly 1.0 for stable particles,
    /// otherwise the log half-life interpolated into [0, 0.9]. Particles with
    /// neither a "Stable" tag nor a usable half-life get the presentation
    /// default 0.5.
    pub stability_factor: f64,
}

impl Particle {
    /// Computes every derived field from the raw record fields.
    ///
    /// Must run exactly once, immediately after construction; all consumers
    /// treat the result as immutable.
    pub(crate) fn with_derived_fields(mut self) -> Self {
        self.category = ParticleCategory::classify(&self.classification);
        self.is_baryon = self.classification.iter().any(|t| t == "Baryon");
        self.is_meson = self.classification.iter().any(|t| t == "Meson");
        self.log_mass = if self.mass > 0.0 {
            self.mass.log10()
        } else {
            0.0
        };
        self.log_half_life = self.half_life.filter(|hl| *hl > 0.0).map(f64::log10);
        self.quark_count = self.composition.iter().map(|c| c.count).sum();
        self.quarks = expand_composition(&self.composition);
        self.stability_factor = match self.stability {
            Stability::Stable => 1.0,
            Stability::Unstable => match self.log_half_life {
                // -24 maps to 0.0 and +3 to 0.9, spanning the shortest-lived
                // resonances up to the free neutron.
                Some(log_hl) => ((log_hl + 24.0) / 30.0).clamp(0.0, 0.9),
                None => 0.5,
            },
        };
        self
    }
}

/// Expands a composition list into one entry per quark instance.
pub fn expand_composition(composition: &[CompositionEntry]) -> Vec<QuarkInstance> {
    let mut quarks = Vec::new();
    for entry in composition {
        let is_anti = entry.is_anti || entry.constituent.to_ascii_lowercase().contains("anti");
        let token = entry.symbol.to_ascii_lowercase().replace("-bar", "");
        let flavor = QuarkFlavor::from_token(&token)
            .or_else(|| QuarkFlavor::from_constituent(&entry.constituent));
        for _ in 0..entry.count {
            quarks.push(QuarkInstance {
                flavor,
                is_anti,
                charge: entry.charge,
            });
        }
    }
    quarks
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Builds a bare particle with the given raw fields and derives the rest.
    pub(crate) fn particle(
        name: &str,
        classification: &[&str],
        mass: f64,
        charge: f64,
        stability: Stability,
        half_life: Option<f64>,
    ) -> Particle {
        Particle {
            name: name.to_string(),
            symbol: name.to_string(),
            classification: classification.iter().map(|t| t.to_string()).collect(),
            mass,
            charge,
            spin: 0.5,
            half_life,
            stability,
            baryon_number: 0,
            lepton_number: 0,
            strangeness: 0,
            charm: 0,
            bottomness: 0,
            isospin_i: 0.0,
            isospin_i3: 0.0,
            parity: None,
            c_parity: None,
            quark_content: String::new(),
            composition: Vec::new(),
            decay_products: Vec::new(),
            discovery: None,
            category: ParticleCategory::Other,
            is_baryon: false,
            is_meson: false,
            log_mass: 0.0,
            log_half_life: None,
            quark_count: 0,
            quarks: Vec::new(),
            stability_factor: 0.0,
        }
        .with_derived_fields()
    }
}
