use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::math::{FillStrategy, RangeFill};
use crate::text::{FormatRule, ParseRule};

/// Central configuration for fill policy and text rules.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```json
/// { "fill": { "strategy": "sequential" }, "format": { "spacing": false } }
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct MathConfig {
    pub fill: FillConfig,
    pub format: FormatRule,
    pub parse: ParseRule,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct FillConfig {
    pub strategy: FillStrategy,
    pub parallel_threshold: usize,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            strategy: FillStrategy::Auto,
            parallel_threshold: RangeFill::DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl FillConfig {
    pub fn range_fill(&self) -> RangeFill {
        RangeFill::new(self.strategy, self.parallel_threshold)
    }
}

impl MathConfig {
    pub fn new(fill: FillConfig, format: FormatRule, parse: ParseRule) -> Self {
        Self {
            fill,
            format,
            parse,
        }
    }
}

/// Load a `MathConfig` from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<MathConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: MathConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    log::debug!(
        "loaded config from {}: fill {:?}, format layout {:?}",
        path.as_ref().display(),
        config.fill.strategy,
        config.format.layout
    );
    Ok(config)
}
