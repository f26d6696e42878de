use super::record::ParticleRecord;
use crate::core::models::particle::Particle;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ParticleFileError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parsing error for '{path}': {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("Missing required field '{field}' in '{path}'")]
    MissingField { path: String, field: &'static str },
}

/// Strips `//` line comments so annotated data files still decode as JSON.
fn strip_line_comments(content: &str) -> String {
    content
        .lines()
        .map(|line| match line.find("//") {
            Some(idx) => &line[..idx],
            None => line,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Loads a single particle data file.
pub fn load_particle_file(path: &Path) -> Result<Particle, ParticleFileError> {
    let display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| ParticleFileError::Io {
        path: display.clone(),
        source: e,
    })?;
    let record: ParticleRecord = serde_json::from_str(&strip_line_comments(&content)).map_err(
        |e| ParticleFileError::Json {
            path: display.clone(),
            source: e,
        },
    )?;
    record
        .into_particle()
        .map_err(|e| ParticleFileError::MissingField {
            path: display,
            field: e.field,
        })
}

/// Loads every `*.json` record in `dir`, in file-name order.
///
/// A missing directory or an individual malformed file reduces the result,
/// never aborts it; each problem is logged as a warning.
pub fn load_directory(dir: &Path) -> Vec<Particle> {
    if !dir.is_dir() {
        warn!("particle data directory not found: {}", dir.display());
        return Vec::new();
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("failed to read particle data directory {}: {e}", dir.display());
            return Vec::new();
        }
    };

    let mut paths: Vec<_> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    if paths.is_empty() {
        warn!("no particle data files found in {}", dir.display());
        return Vec::new();
    }

    let mut particles = Vec::new();
    for path in &paths {
        match load_particle_file(path) {
            Ok(particle) => particles.push(particle),
            Err(e) => warn!("skipping particle file: {e}"),
        }
    }
    info!(
        count = particles.len(),
        "loaded particle definitions from {}",
        dir.display()
    );
    particles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::repository::ParticleRepository;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, content: &str) {
        let mut file = fs::File::create(dir.join(name)).expect("create file");
        file.write_all(content.as_bytes()).expect("write file");
    }

    #[test]
    fn strip_line_comments_removes_trailing_markers() {
        let input = "{\n  \"Name\": \"Proton\", // the nucleon\n  \"Type\": \"Baryon\"\n}";
        let cleaned = strip_line_comments(input);
        assert!(!cleaned.contains("nucleon"));
        assert!(serde_json::from_str::<serde_json::Value>(&cleaned).is_ok());
    }

    #[test]
    fn commented_file_still_loads() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_file(
            dir.path(),
            "pion.json",
            "{\n\"Name\": \"Pion+\", // charged pion\n\"Type\": \"Meson\",\n\"Mass_MeVc2\": 139.57\n}",
        );
        let particle = load_particle_file(&dir.path().join("pion.json")).expect("loads");
        assert_eq!(particle.name, "Pion+");
        assert_eq!(particle.mass, 139.57);
    }

    #[test]
    fn missing_directory_yields_empty_result() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("does-not-exist");
        assert!(load_directory(&missing).is_empty());
    }

    #[test]
    fn malformed_and_incomplete_files_are_skipped() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_file(
            dir.path(),
            "proton.json",
            r#"{"Name": "Proton", "Type": "Baryon", "Mass_MeVc2": 938.272,
                "Charge_e": 1, "Classification": ["Baryon"], "Stability": "Stable"}"#,
        );
        write_file(
            dir.path(),
            "pion.json",
            r#"{"Name": "Pion+", "Type": "Meson", "Mass_MeVc2": 139.57,
                "Classification": ["Meson", "Pion"], "HalfLife_s": 2.6e-8,
                "Stability": "Unstable"}"#,
        );
        // Missing the required Type field.
        write_file(dir.path(), "mystery.json", r#"{"Name": "Mystery"}"#);
        // Not JSON at all.
        write_file(dir.path(), "broken.json", "{ not json ]");
        // Wrong extension, never considered.
        write_file(dir.path(), "notes.txt", "irrelevant");

        let particles = load_directory(dir.path());
        assert_eq!(particles.len(), 2);

        let repo = ParticleRepository::from_particles(particles);
        let proton = repo.get("Proton").expect("proton loaded");
        assert_eq!(proton.stability_factor, 1.0);
        let pion = repo.get("Pion+").expect("pion loaded");
        let expected = ((2.6e-8f64).log10() + 24.0) / 30.0;
        assert!((pion.stability_factor - expected).abs() < 1e-12);
        assert!(pion.stability_factor > 0.0 && pion.stability_factor <= 0.9);
    }

    #[test]
    fn files_load_in_name_order_before_mass_sort() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_file(
            dir.path(),
            "b_heavy.json",
            r#"{"Name": "Heavy", "Type": "Baryon", "Mass_MeVc2": 2000}"#,
        );
        write_file(
            dir.path(),
            "a_light.json",
            r#"{"Name": "Light", "Type": "Meson", "Mass_MeVc2": 100}"#,
        );
        let particles = load_directory(dir.path());
        assert_eq!(particles[0].name, "Light");
        assert_eq!(particles[1].name, "Heavy");
    }

    #[test]
    fn empty_directory_yields_empty_result() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(load_directory(dir.path()).is_empty());
    }
}
