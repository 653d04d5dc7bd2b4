use super::geometry::Viewport;
use dioxus::logger::tracing::warn;
use serde::Deserialize;
use thiserror::Error;

/// Id of the optional `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "block-canvas-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed canvas config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("block_size must be positive, got {0}")]
    BlockSize(f64),
    #[error("padding must not be negative, got {0}")]
    Padding(f64),
}

/// Presentation settings for the canvas. Every field falls back to its default
/// when missing from the JSON document.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub block_size: f64,
    pub padding: f64,
    pub block_color: String,
    pub button_color: String,
    pub connector_stroke: String,
    pub connector_dash: String,
    pub fallback_viewport: Viewport,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            block_size: 100.0,
            padding: 100.0,
            block_color: "#ff0066".to_string(),
            button_color: "pink".to_string(),
            connector_stroke: "black".to_string(),
            connector_dash: "5,5".to_string(),
            fallback_viewport: Viewport::new(1024.0, 768.0),
        }
    }
}

impl CanvasConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: CanvasConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.block_size.is_nan() || self.block_size <= 0.0 {
            return Err(ConfigError::BlockSize(self.block_size));
        }
        if self.padding.is_nan() || self.padding < 0.0 {
            return Err(ConfigError::Padding(self.padding));
        }
        Ok(())
    }

    /// Reads overrides from the host page, or defaults when the page carries none
    /// or carries a broken document.
    pub fn load() -> Self {
        let Some(json) = config_element_text() else {
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(config) => config,
            Err(err) => {
                warn!("ignoring canvas config: {err}");
                Self::default()
            }
        }
    }
}

fn config_element_text() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}
