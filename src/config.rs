//! Editor size policy parsed from environment variables.

use crate::consts::{CORNER_RADIUS, MIN_PART, MIN_PILL, SHIFT_BACK_PX, SHIFT_CLEARANCE_PX};

pub const ENV_MIN_PILL: &str = "PILLSPLIT_MIN_PILL";
pub const ENV_MIN_PART: &str = "PILLSPLIT_MIN_PART";
pub const ENV_CORNER_RADIUS: &str = "PILLSPLIT_CORNER_RADIUS";
pub const ENV_SHIFT_BACK: &str = "PILLSPLIT_SHIFT_BACK";
pub const ENV_SHIFT_CLEARANCE: &str = "PILLSPLIT_SHIFT_CLEARANCE";
pub const ENV_COLOR_SEED: &str = "PILLSPLIT_COLOR_SEED";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} is not a non-negative number of pixels")]
    InvalidPixels { var: &'static str, value: String },
    #[error("invalid {var}: {value:?} is not an unsigned integer")]
    InvalidSeed { var: &'static str, value: String },
    #[error("minimum pill size {min_pill} is below minimum part size {min_part}")]
    Inconsistent { min_pill: f64, min_part: f64 },
}

/// Numeric policy shared by the split engine, the store, and the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorConfig {
    /// Minimum side length of a drawn pill.
    pub min_pill: f64,
    /// Minimum side length of a split piece.
    pub min_part: f64,
    /// Radius applied to rounded corners.
    pub corner_radius: f64,
    /// Distance a pill is pushed back when it cannot be split.
    pub shift_back: f64,
    /// Gap left after the line when a pill is pushed past it.
    pub shift_clearance: f64,
    /// Seed for reproducible pill colors; entropy when absent.
    pub color_seed: Option<u64>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            min_pill: MIN_PILL,
            min_part: MIN_PART,
            corner_radius: CORNER_RADIUS,
            shift_back: SHIFT_BACK_PX,
            shift_clearance: SHIFT_CLEARANCE_PX,
            color_seed: None,
        }
    }
}

impl EditorConfig {
    /// Build config from environment variables.
    ///
    /// All optional, defaults from [`crate::consts`]:
    /// - `PILLSPLIT_MIN_PILL`: default 40
    /// - `PILLSPLIT_MIN_PART`: default 20
    /// - `PILLSPLIT_CORNER_RADIUS`: default 20
    /// - `PILLSPLIT_SHIFT_BACK`: default 10
    /// - `PILLSPLIT_SHIFT_CLEARANCE`: default 2
    /// - `PILLSPLIT_COLOR_SEED`: unset means random colors
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value does not parse, is negative, or
    /// the minimum pill size is smaller than the minimum part size.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(value) => Some(value),
            Err(_) => None,
        })
    }

    /// Same as [`Self::from_env`] but reads variables through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`Self::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            min_pill: parse_px(&lookup, ENV_MIN_PILL, defaults.min_pill)?,
            min_part: parse_px(&lookup, ENV_MIN_PART, defaults.min_part)?,
            corner_radius: parse_px(&lookup, ENV_CORNER_RADIUS, defaults.corner_radius)?,
            shift_back: parse_px(&lookup, ENV_SHIFT_BACK, defaults.shift_back)?,
            shift_clearance: parse_px(&lookup, ENV_SHIFT_CLEARANCE, defaults.shift_clearance)?,
            color_seed: parse_seed(&lookup, ENV_COLOR_SEED)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject policies under which a freshly drawn pill could not be split legally.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Inconsistent`] when `min_pill < min_part`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_pill < self.min_part {
            return Err(ConfigError::Inconsistent { min_pill: self.min_pill, min_part: self.min_part });
        }
        Ok(())
    }
}

fn parse_px<F>(lookup: &F, var: &'static str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(ConfigError::InvalidPixels { var, value: raw }),
    }
}

fn parse_seed<F>(lookup: &F, var: &'static str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<u64>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidSeed { var, value: raw })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
