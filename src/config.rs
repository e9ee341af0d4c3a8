//! Layout configuration: track geometry and canvas sizing, loaded from TOML
//! at startup for deployments that override the built-in defaults.

use std::path::Path;

use serde::Deserialize;

use crate::projector::CanvasSpec;
use crate::track::TrackConfig;

/// Top-level TOML file structure.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct LayoutConfigFile {
    #[serde(default)]
    pub track: Option<TrackConfig>,
    #[serde(default)]
    pub canvas: Option<CanvasSpec>,
}

impl LayoutConfigFile {
    pub fn track_config(&self) -> TrackConfig {
        self.track.unwrap_or_default()
    }

    pub fn canvas_spec(&self) -> CanvasSpec {
        self.canvas.unwrap_or_default()
    }
}

/// Load layout config from a TOML file at the given path.
pub fn load_layout_config(path: &Path) -> Result<LayoutConfigFile, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    toml::from_str(&content).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}

/// Try to load layout config from well-known paths, returning the built-in
/// defaults if none is found.
pub fn load_default_layout_config() -> LayoutConfigFile {
    let candidates = ["layout.toml", "../layout.toml", "/etc/domino/layout.toml"];
    for path in &candidates {
        let p = Path::new(path);
        if p.exists() {
            match load_layout_config(p) {
                Ok(config) => {
                    tracing::info!(path = %p.display(), "loaded layout config");
                    return config;
                }
                Err(e) => {
                    tracing::warn!(path = %p.display(), error = %e, "failed to load layout config");
                }
            }
        }
    }
    tracing::info!("no layout.toml found, using built-in defaults");
    LayoutConfigFile::default()
}
