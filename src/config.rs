use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main scanner configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ScanConfig {
    /// Step detection thresholds
    #[serde(default)]
    pub steps: StepConfig,
}

/// Tunable thresholds for the step detection strategies.
///
/// These are heuristics tuned against real OCR samples, not hard
/// invariants, so they are kept configurable rather than baked into the
/// matching logic.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StepConfig {
    /// Minimum number of numbered/bulleted lines before a fallback strategy
    /// is trusted; guards against an isolated number or bullet being
    /// mistaken for a step list
    #[serde(default = "default_min_fallback_steps")]
    pub min_fallback_steps: usize,
    /// Highest starting number accepted for a numbered list; guards against
    /// stray mid-recipe numbers like oven temperatures
    #[serde(default = "default_max_start_number")]
    pub max_start_number: u32,
    /// Minimum cleaned length (in characters) for a bulleted line to count
    /// as an instruction rather than an ingredient entry
    #[serde(default = "default_min_bullet_len")]
    pub min_bullet_len: usize,
    /// Consecutive non-bulleted lines tolerated before a bullet run is
    /// abandoned
    #[serde(default = "default_max_bullet_gap")]
    pub max_bullet_gap: usize,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            min_fallback_steps: default_min_fallback_steps(),
            max_start_number: default_max_start_number(),
            min_bullet_len: default_min_bullet_len(),
            max_bullet_gap: default_max_bullet_gap(),
        }
    }
}

fn default_min_fallback_steps() -> usize {
    2
}

fn default_max_start_number() -> u32 {
    2
}

fn default_min_bullet_len() -> usize {
    20
}

fn default_max_bullet_gap() -> usize {
    2
}

impl ScanConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_SCAN__ prefix
    /// 2. scan.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_SCAN__STEPS__MIN_BULLET_LEN
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("scan").required(false))
            .add_source(
                Environment::with_prefix("RECIPE_SCAN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
