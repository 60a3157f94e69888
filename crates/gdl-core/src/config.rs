use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::export::DEFAULT_EXPORT_PREFIX;

/// How `gdl batch` prints its report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Numbered lines, `[FAILED]`/`[INVALID]` markers, summary line.
    #[default]
    Text,
    /// The whole report as JSON.
    Json,
}

/// Global configuration loaded from `~/.config/gdl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GdlConfig {
    /// File name prefix for saved reports (`<prefix>-<date>.txt`).
    pub export_prefix: String,
    /// Directory for saved reports; current directory when unset.
    pub export_dir: Option<PathBuf>,
    /// Report format when `--format` is not given.
    pub default_format: OutputFormat,
    /// Print the "N successful, M failed" line after a text report.
    pub show_summary: bool,
}

impl Default for GdlConfig {
    fn default() -> Self {
        Self {
            export_prefix: DEFAULT_EXPORT_PREFIX.to_string(),
            export_dir: None,
            default_format: OutputFormat::Text,
            show_summary: true,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GdlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = GdlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: GdlConfig = toml::from_str(&data)?;
    Ok(cfg)
}

/// Like [`load_or_init`], but an unreadable or unwritable config falls back
/// to the defaults so conversion never depends on the filesystem.
pub fn load_or_default() -> GdlConfig {
    or_default(load_or_init())
}

fn or_default(loaded: Result<GdlConfig>) -> GdlConfig {
    loaded.unwrap_or_else(|err| {
        tracing::warn!("using default config: {:#}", err);
        GdlConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_falls_back_to_defaults() {
        let cfg = or_default(Err(anyhow::anyhow!("config dir is read-only")));
        assert_eq!(cfg.export_prefix, "google-drive-links");
        assert!(cfg.show_summary);
    }

    #[test]
    fn loaded_config_is_kept() {
        let loaded = GdlConfig {
            show_summary: false,
            ..GdlConfig::default()
        };
        assert!(!or_default(Ok(loaded)).show_summary);
    }

    #[test]
    fn default_config_values() {
        let cfg = GdlConfig::default();
        assert_eq!(cfg.export_prefix, "google-drive-links");
        assert!(cfg.export_dir.is_none());
        assert_eq!(cfg.default_format, OutputFormat::Text);
        assert!(cfg.show_summary);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = GdlConfig {
            export_dir: Some(PathBuf::from("/tmp/links")),
            ..GdlConfig::default()
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: GdlConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.export_prefix, cfg.export_prefix);
        assert_eq!(parsed.export_dir, cfg.export_dir);
        assert_eq!(parsed.default_format, cfg.default_format);
        assert_eq!(parsed.show_summary, cfg.show_summary);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            export_prefix = "drive"
            export_dir = "/srv/exports"
            default_format = "json"
            show_summary = false
        "#;
        let cfg: GdlConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.export_prefix, "drive");
        assert_eq!(cfg.export_dir, Some(PathBuf::from("/srv/exports")));
        assert_eq!(cfg.default_format, OutputFormat::Json);
        assert!(!cfg.show_summary);
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let cfg: GdlConfig = toml::from_str(r#"show_summary = false"#).unwrap();
        assert_eq!(cfg.export_prefix, "google-drive-links");
        assert!(cfg.export_dir.is_none());
        assert!(!cfg.show_summary);
    }

    #[test]
    fn config_toml_rejects_unknown_format() {
        assert!(toml::from_str::<GdlConfig>(r#"default_format = "xml""#).is_err());
    }
}
