//! Board configuration
//!
//! Everything a host may want to inject at construction time: playfield size, how many
//! preview pieces it renders, the high score it restored from its own storage, and an
//! optional supply seed. Missing JSON fields fall back to the defaults.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{
    DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_PREVIEW_COUNT, MAX_BOARD_DIM,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub width: usize,
    pub height: usize,
    pub preview_count: usize,
    pub initial_high_score: u32,
    /// `None` seeds the piece supply from the operating system
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            preview_count: DEFAULT_PREVIEW_COUNT,
            initial_high_score: 0,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Parse from JSON and validate
    ///
    /// ```
    /// use blockfall_core::EngineConfig;
    ///
    /// let config = EngineConfig::from_json_str(r#"{ "height": 20, "seed": 7 }"#).unwrap();
    /// assert_eq!(config.width, 10);
    /// assert_eq!(config.height, 20);
    /// assert_eq!(config.seed, Some(7));
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.width > MAX_BOARD_DIM || self.height > MAX_BOARD_DIM {
            return Err(ConfigError::TooLarge {
                width: self.width,
                height: self.height,
                max: MAX_BOARD_DIM,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroWidth,
    ZeroHeight,
    /// Width or height above [`MAX_BOARD_DIM`]
    TooLarge {
        width: usize,
        height: usize,
        max: usize,
    },
    /// A preset grid does not match the configured dimensions
    GridMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroWidth => write!(f, "board width must be at least 1"),
            ConfigError::ZeroHeight => write!(f, "board height must be at least 1"),
            ConfigError::TooLarge { width, height, max } => write!(
                f,
                "board {width}x{height} exceeds the {max} cell limit per side"
            ),
            ConfigError::GridMismatch { expected, found } => write!(
                f,
                "grid is {}x{} (rows x cols), config expects {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
            ConfigError::Parse(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
