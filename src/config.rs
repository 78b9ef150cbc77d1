use crate::consts::{
    DEFAULT_MAX_TEXT_CHARS, DEFAULT_ORDER_WEIGHTS, DEFAULT_SHARPNESS, DEFAULT_UNSEEN_LOGP,
    MAX_NGRAM_ORDER,
};
use crate::error::{GlResult, GlossaError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Calibration parameters for scoring and confidence normalization.
///
/// The defaults are tuned against the greeting-corpus scenarios in the
/// integration tests; files loaded at runtime may override any subset of
/// fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Weight applied to each n-gram order, orders 1 through 5.
    pub order_weights: [f64; MAX_NGRAM_ORDER],
    /// Log10 probability for grams absent from a model table.
    pub unseen_logp: f64,
    /// Softmax sharpness for confidence normalization.
    pub sharpness: f64,
    /// Inputs longer than this many characters are rejected.
    pub max_text_chars: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            order_weights: DEFAULT_ORDER_WEIGHTS,
            unseen_logp: DEFAULT_UNSEEN_LOGP,
            sharpness: DEFAULT_SHARPNESS,
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
        }
    }
}

impl DetectorConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GlResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: DetectorConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> GlResult<()> {
        if self.order_weights.iter().any(|w| !w.is_finite() || *w <= 0.0) {
            return Err(GlossaError::Config(
                "order_weights must be finite and positive".to_string(),
            ));
        }
        if !self.unseen_logp.is_finite() || self.unseen_logp >= 0.0 {
            return Err(GlossaError::Config(
                "unseen_logp must be finite and negative".to_string(),
            ));
        }
        if !self.sharpness.is_finite() || self.sharpness <= 0.0 {
            return Err(GlossaError::Config(
                "sharpness must be finite and positive".to_string(),
            ));
        }
        if self.max_text_chars == 0 {
            return Err(GlossaError::Config(
                "max_text_chars must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}
