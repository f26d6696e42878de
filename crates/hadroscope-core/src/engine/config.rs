use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Geometry shared by every layout mode: card dimensions, margins, and the
/// mode-specific plot parameters. One immutable value, passed into the layout
/// engine rather than duplicated per mode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub card_width: f64,
    pub card_height: f64,
    pub card_spacing: f64,
    /// Horizontal margin on both sides of the content area.
    pub margin: f64,
    /// Vertical space reserved above a grid block for its header line.
    pub header_height: f64,
    /// Gap between consecutive group blocks.
    pub section_gap: f64,
    /// Y coordinate of the first grid row.
    pub top_offset: f64,
    pub eightfold: EightfoldConfig,
    pub timeline: TimelineConfig,
    pub discovery: DiscoveryConfig,
    pub tree: TreeConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            card_width: 140.0,
            card_height: 180.0,
            card_spacing: 20.0,
            margin: 50.0,
            header_height: 40.0,
            section_gap: 60.0,
            top_offset: 80.0,
            eightfold: EightfoldConfig::default(),
            timeline: TimelineConfig::default(),
            discovery: DiscoveryConfig::default(),
            tree: TreeConfig::default(),
        }
    }
}

/// Plot parameters for the Eightfold Way projection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EightfoldConfig {
    pub plot_margin: f64,
    pub plot_height: f64,
    /// Minimum isospin span, so sparse datasets keep a readable aspect.
    pub min_isospin_span: f64,
    pub min_hypercharge_span: f64,
}

impl Default for EightfoldConfig {
    fn default() -> Self {
        Self {
            plot_margin: 100.0,
            plot_height: 500.0,
            min_isospin_span: 3.0,
            min_hypercharge_span: 4.0,
        }
    }
}

/// Log10 half-life span of the lifetime spectrum axis, in seconds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub log_min: f64,
    pub log_max: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            log_min: -24.0,
            log_max: 4.0,
        }
    }
}

/// Discovery-timeline parameters, including the historical era boundaries.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Fallback year range when no particle carries a discovery year.
    pub year_min: i32,
    pub year_max: i32,
    pub plot_height: f64,
    pub classical_end: i32,
    pub nuclear_end: i32,
    pub strange_end: i32,
    pub quark_model_end: i32,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            year_min: 1895,
            year_max: 2020,
            plot_height: 400.0,
            classical_end: 1932,
            nuclear_end: 1947,
            strange_end: 1964,
            quark_model_end: 1995,
        }
    }
}

/// Vertical spacing between quark-tree levels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    pub level_spacing: f64,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            level_spacing: 220.0,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

impl LayoutConfig {
    /// Loads a layout configuration from a TOML file; absent keys keep their
    /// defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_reference_geometry() {
        let config = LayoutConfig::default();
        assert_eq!(config.card_width, 140.0);
        assert_eq!(config.card_height, 180.0);
        assert_eq!(config.card_spacing, 20.0);
        assert_eq!(config.margin, 50.0);
        assert_eq!(config.timeline.log_min, -24.0);
        assert_eq!(config.timeline.log_max, 4.0);
        assert_eq!(config.discovery.year_min, 1895);
        assert_eq!(config.tree.level_spacing, 220.0);
    }

    #[test]
    fn partial_toml_overrides_keep_remaining_defaults() {
        let toml_str = r#"
            card_width = 100.0

            [timeline]
            log_min = -20.0
        "#;
        let config: LayoutConfig = toml::from_str(toml_str).expect("valid TOML");
        assert_eq!(config.card_width, 100.0);
        assert_eq!(config.card_height, 180.0);
        assert_eq!(config.timeline.log_min, -20.0);
        assert_eq!(config.timeline.log_max, 4.0);
    }

    #[test]
    fn load_reads_a_config_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("layout.toml");
        let mut file = std::fs::File::create(&path).expect("create file");
        writeln!(file, "margin = 25.0").expect("write file");
        let config = LayoutConfig::load(&path).expect("loads");
        assert_eq!(config.margin, 25.0);
        assert_eq!(config.card_width, 140.0);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = LayoutConfig::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
