use super::particle::{Particle, ParticleCategory};
use crate::core::io::loader;
use std::collections::HashMap;
use std::path::Path;

/// The loaded, indexed collection of particle records.
///
/// Built once by the composition root and passed to every consumer; read-only
/// afterwards. The master list is sorted by mass ascending, which is an
/// incidental presentation order and not relied on by layout code except
/// where a mode explicitly re-sorts.
#[derive(Debug, Clone, Default)]
pub struct ParticleRepository {
    particles: Vec<Particle>,
    by_name: HashMap<String, usize>,
    by_symbol: HashMap<String, usize>,
    baryons: Vec<usize>,
    mesons: Vec<usize>,
}

impl ParticleRepository {
    /// Loads every particle data file in `dir`.
    ///
    /// A missing directory or unreadable/malformed files degrade to fewer
    /// particles, never to an error; diagnostics are logged.
    pub fn load_from_dir(dir: &Path) -> Self {
        Self::from_particles(loader::load_directory(dir))
    }

    /// Builds a repository from already-constructed particles.
    pub fn from_particles(mut particles: Vec<Particle>) -> Self {
        particles.sort_by(|a, b| a.mass.total_cmp(&b.mass));

        let mut by_name = HashMap::new();
        let mut by_symbol = HashMap::new();
        let mut baryons = Vec::new();
        let mut mesons = Vec::new();
        for (idx, particle) in particles.iter().enumerate() {
            // Last write wins on name or symbol collisions.
            by_name.insert(particle.name.clone(), idx);
            by_symbol.insert(particle.symbol.clone(), idx);
            if particle.is_baryon {
                baryons.push(idx);
            }
            if particle.is_meson {
                mesons.push(idx);
            }
        }

        Self {
            particles,
            by_name,
            by_symbol,
            baryons,
            mesons,
        }
    }

    /// All particles, sorted by mass ascending.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn get(&self, name: &str) -> Option<&Particle> {
        self.by_name.get(name).map(|&idx| &self.particles[idx])
    }

    pub fn get_by_symbol(&self, symbol: &str) -> Option<&Particle> {
        self.by_symbol.get(symbol).map(|&idx| &self.particles[idx])
    }

    pub fn baryons(&self) -> Vec<&Particle> {
        self.baryons.iter().map(|&idx| &self.particles[idx]).collect()
    }

    pub fn mesons(&self) -> Vec<&Particle> {
        self.mesons.iter().map(|&idx| &self.particles[idx]).collect()
    }

    pub fn particles_by_charge(&self, charge: f64) -> Vec<&Particle> {
        self.particles.iter().filter(|p| p.charge == charge).collect()
    }

    pub fn particles_by_category(&self, category: ParticleCategory) -> Vec<&Particle> {
        self.particles
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Minimum and maximum mass over all particles, or (0, 0) when empty.
    pub fn mass_range(&self) -> (f64, f64) {
        match (self.particles.first(), self.particles.last()) {
            (Some(lightest), Some(heaviest)) => (lightest.mass, heaviest.mass),
            _ => (0.0, 0.0),
        }
    }

    /// Expands the decay products of `name` into every combinatorial
    /// root-to-leaf path, each path a sequence of particle names.
    ///
    /// Each recursion level consumes one unit of the depth budget, so no
    /// returned chain holds more than `max_depth + 1` names; the budget is
    /// also the only guard against cyclic decay graphs, which truncate
    /// instead of hanging. A decay product that names no loaded particle
    /// still terminates its chain as an explicit leaf. An unknown root
    /// yields no chains; a particle with no decay products yields exactly
    /// `[[name]]`.
    pub fn decay_chains(&self, name: &str, max_depth: usize) -> Vec<Vec<String>> {
        match self.get(name) {
            Some(particle) => self.expand_chains(particle, max_depth),
            None => Vec::new(),
        }
    }

    fn expand_chains(&self, particle: &Particle, budget: usize) -> Vec<Vec<String>> {
        if budget == 0 || particle.decay_products.is_empty() {
            return vec![vec![particle.name.clone()]];
        }
        let mut chains = Vec::new();
        for product in &particle.decay_products {
            match self.get(product) {
                Some(next) => {
                    for sub_chain in self.expand_chains(next, budget - 1) {
                        let mut chain = Vec::with_capacity(sub_chain.len() + 1);
                        chain.push(particle.name.clone());
                        chain.extend(sub_chain);
                        chains.push(chain);
                    }
                }
                None => chains.push(vec![particle.name.clone(), product.clone()]),
            }
        }
        chains
    }
}
