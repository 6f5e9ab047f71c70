//! Configuration loading.
//!
//! Configuration is loaded from TOML files with the following resolution order:
//! 1. `--config <path>` (CLI flag)
//! 2. `~/.massclass/config.toml` (user)
//! 3. `/etc/massclass/config.toml` (system)
//!
//! If none exists the built-in defaults are used. The model path has no
//! default; it must come from the file, `MASSCLASS_MODEL`, or the caller.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::device::Device;
use crate::element::DEFAULT_CATEGORY;
use crate::units::LengthUnit;
use crate::{MassclassError, Result};

/// Environment variable overriding `model.path`.
pub const MODEL_ENV_VAR: &str = "MASSCLASS_MODEL";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub geometry: GeometryConfig,
}

/// Model file and runtime settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Path to the ONNX model file.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Device to use: "cpu" or "cuda" (default: "cpu").
    #[serde(default = "default_device")]
    pub device: String,
    /// Element type of the model's input tensor (default: int32).
    #[serde(default)]
    pub input_type: InputElementType,
    /// Input name; required only when the model has several inputs.
    #[serde(default)]
    pub input_name: Option<String>,
    /// Output holding the probabilities; detected when omitted.
    #[serde(default)]
    pub output_name: Option<String>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: None,
            device: default_device(),
            input_type: InputElementType::default(),
            input_name: None,
            output_name: None,
        }
    }
}

impl ModelConfig {
    /// Config for a model file with all other settings at their defaults.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Default::default()
        }
    }

    /// Model path, or a configuration error if none was given.
    pub fn require_path(&self) -> Result<&Path> {
        self.path.as_deref().ok_or_else(|| {
            MassclassError::Configuration(format!(
                "no model path configured; set model.path, {MODEL_ENV_VAR} or --model"
            ))
        })
    }

    /// Parsed compute device.
    pub fn device(&self) -> Result<Device> {
        Device::from_name(&self.device)
    }
}

fn default_device() -> String {
    "cpu".to_string()
}

/// Element type of the `[1, 3]` model input tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputElementType {
    #[default]
    Int32,
    Int64,
    Float32,
}

/// Geometry interpretation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeometryConfig {
    /// Unit of the host coordinates and lengths (default: feet).
    #[serde(default)]
    pub internal_unit: LengthUnit,
    /// Host categories that may be classified (default: ["Mass"]).
    #[serde(default = "default_categories")]
    pub accepted_categories: Vec<String>,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            internal_unit: LengthUnit::default(),
            accepted_categories: default_categories(),
        }
    }
}

fn default_categories() -> Vec<String> {
    vec![DEFAULT_CATEGORY.to_string()]
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// Resolution order:
    /// 1. Explicit path (if provided; must exist)
    /// 2. `~/.massclass/config.toml`
    /// 3. `/etc/massclass/config.toml`
    /// 4. Built-in defaults
    ///
    /// `MASSCLASS_MODEL` is applied on top.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::load_from_file(&path)?,
            None => Self::default(),
        };
        if let Some(model) = std::env::var_os(MODEL_ENV_VAR) {
            config.model.path = Some(PathBuf::from(model));
        }
        Ok(config)
    }

    /// Parse a single config file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            MassclassError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            MassclassError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })
    }

    /// Resolve the config file path.
    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(MassclassError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        // User config
        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".massclass").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        // System config
        let system_config = PathBuf::from("/etc/massclass/config.toml");
        if system_config.exists() {
            return Ok(Some(system_config));
        }

        Ok(None)
    }
}
