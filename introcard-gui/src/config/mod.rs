use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use introcard_lib::fs::config_dir;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::theme::Theme;

pub mod theme;

const FILE_NAME: &str = "gui.toml";

/// Handle to the GUI configuration
pub type Cfg = Arc<RwLock<GuiConfig>>;

/// Preferences of the GUI, serialized to TOML. Profiles are never stored here.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    pub theme: Theme,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Window width, in logical pixels, from which the preview sits beside the form.
    pub regular_width: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            regular_width: 900.0,
        }
    }
}

impl GuiConfig {
    /// Load the configuration from the config directory, writing the defaults if there is
    /// none yet. Any problem falls back to the defaults.
    pub fn load() -> Self {
        match path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                    warn!("Ignoring malformed {}: {err}", path.display());
                    Self::default()
                }),
                Err(err) => {
                    warn!("Failed to read {}: {err}", path.display());
                    Self::default()
                }
            }
        } else {
            let cfg = Self::default();
            if let Err(err) = cfg.save_to(path) {
                warn!("Failed to write {}: {err}", path.display());
            }
            cfg
        }
    }

    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        let contents = toml::to_string_pretty(self).map_err(std::io::Error::other)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, contents)
    }

    pub fn theme(&self) -> iced::Theme {
        (&self.theme).into()
    }
}

fn path() -> Option<PathBuf> {
    match config_dir() {
        Ok(dir) => Some(dir.join(FILE_NAME)),
        Err(err) => {
            warn!("No configuration directory: {err}");
            None
        }
    }
}
