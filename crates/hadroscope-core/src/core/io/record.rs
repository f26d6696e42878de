use crate::core::models::particle::{
    CompositionEntry, Discovery, Particle, ParticleCategory, Stability,
};
use serde::Deserialize;
use thiserror::Error;

/// A particle data file is missing one of the fields every record must carry.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("missing required field '{field}'")]
pub struct MissingField {
    pub field: &'static str,
}

/// On-disk particle record exactly as decoded from a data file.
///
/// Every field except `Name` and `Type` is optional; unknown fields are
/// ignored so datasets can carry annotations this library does not consume.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParticleRecord {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Symbol", default)]
    pub symbol: Option<String>,
    #[serde(rename = "Type", default)]
    pub particle_type: Option<String>,
    #[serde(rename = "Classification", default)]
    pub classification: Vec<String>,
    #[serde(rename = "Mass_MeVc2", default)]
    pub mass_mevc2: f64,
    #[serde(rename = "Charge_e", default)]
    pub charge_e: f64,
    #[serde(rename = "Spin_hbar", default)]
    pub spin_hbar: f64,
    #[serde(rename = "HalfLife_s", default)]
    pub half_life_s: Option<f64>,
    #[serde(rename = "MeanLifetime_s", default)]
    pub mean_lifetime_s: Option<f64>,
    #[serde(rename = "Stability", default)]
    pub stability: Option<String>,
    #[serde(rename = "BaryonNumber_B", default)]
    pub baryon_number_b: i32,
    #[serde(rename = "LeptonNumber_L", default)]
    pub lepton_number_l: i32,
    #[serde(rename = "Strangeness", default)]
    pub strangeness: i32,
    #[serde(rename = "Charm", default)]
    pub charm: i32,
    #[serde(rename = "Bottomness", default)]
    pub bottomness: i32,
    #[serde(rename = "Isospin_I", default)]
    pub isospin_i: f64,
    #[serde(rename = "Isospin_I3", default)]
    pub isospin_i3: f64,
    #[serde(rename = "Parity_P", default)]
    pub parity_p: Option<i8>,
    #[serde(rename = "CParity", default)]
    pub c_parity: Option<i8>,
    #[serde(rename = "QuarkContent", default)]
    pub quark_content: String,
    #[serde(rename = "Composition", default)]
    pub composition: Vec<CompositionEntry>,
    #[serde(rename = "DecayProducts", default)]
    pub decay_products: Vec<String>,
    #[serde(rename = "Discovery", default)]
    pub discovery: Option<Discovery>,
}

impl ParticleRecord {
    /// Validates the required fields and produces a particle with all derived
    /// fields computed.
    pub fn into_particle(self) -> Result<Particle, MissingField> {
        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(MissingField { field: "Name" }),
        };
        let particle_type = match self.particle_type {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Err(MissingField { field: "Type" }),
        };
        // Records that carry only the coarse Type tag still classify.
        let classification = if self.classification.is_empty() {
            vec![particle_type]
        } else {
            self.classification
        };
        let symbol = self.symbol.unwrap_or_else(|| name.clone());
        let stability = self
            .stability
            .as_deref()
            .map(Stability::from_tag)
            .unwrap_or_default();

        Ok(Particle {
            symbol,
            classification,
            mass: self.mass_mevc2,
            charge: self.charge_e,
            spin: self.spin_hbar,
            half_life: self.half_life_s.or(self.mean_lifetime_s),
            stability,
            baryon_number: self.baryon_number_b,
            lepton_number: self.lepton_number_l,
            strangeness: self.strangeness,
            charm: self.charm,
            bottomness: self.bottomness,
            isospin_i: self.isospin_i,
            isospin_i3: self.isospin_i3,
            parity: self.parity_p,
            c_parity: self.c_parity,
            quark_content: self.quark_content,
            composition: self.composition,
            decay_products: self.decay_products,
            discovery: self.discovery,
            name,
            category: ParticleCategory::Other,
            is_baryon: false,
            is_meson: false,
            log_mass: 0.0,
            log_half_life: None,
            quark_count: 0,
            quarks: Vec::new(),
            stability_factor: 0.0,
        }
        .with_derived_fields())
    }
}
