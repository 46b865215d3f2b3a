use std::path::Path;

use image::imageops::FilterType;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Side length of the low-frequency DCT block that feeds the hash (8x8 = 64 bits)
pub const HASH_BLOCK: usize = 8;

/// Largest accepted `sample_size`
pub const MAX_SAMPLE_SIZE: u32 = 1024;

/// Resampling filter used when normalising the grayscale image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeFilter {
    Nearest,
    /// Bilinear
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Log level for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Configuration for perceptual hash computation
///
/// Every field changes the produced hash except `log_level`, so two hashes are
/// only comparable when they were computed with the same configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashConfig {
    /// Side length of the square grayscale sample fed to the DCT
    pub sample_size: u32,

    /// Filter used to resample the image to `sample_size`
    pub filter: ResizeFilter,

    /// A coefficient must exceed the median by more than this to set its bit.
    /// Zero means strictly greater. Luma is in [0, 1] and the DCT is unnormalised.
    pub tie_tolerance: f64,

    /// Log level
    pub log_level: LogLevel,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            sample_size: 32,
            filter: ResizeFilter::Triangle,
            tie_tolerance: 0.0,
            log_level: LogLevel::Warn,
        }
    }
}

impl HashConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())
            .map_err(|e| Error::Configuration(format!("Failed to open config file: {}", e)))?;

        let config: HashConfig = serde_json::from_reader(file)
            .map_err(|e| Error::Configuration(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path.as_ref())
            .map_err(|e| Error::Configuration(format!("Failed to create config file: {}", e)))?;

        serde_json::to_writer_pretty(file, self)
            .map_err(|e| Error::Configuration(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if (self.sample_size as usize) < HASH_BLOCK || self.sample_size > MAX_SAMPLE_SIZE {
            return Err(Error::Configuration(format!(
                "Sample size must be between {} and {}, got {}",
                HASH_BLOCK, MAX_SAMPLE_SIZE, self.sample_size
            )));
        }

        if !self.tie_tolerance.is_finite() || self.tie_tolerance < 0.0 {
            return Err(Error::Configuration(format!(
                "Tie tolerance must be a finite non-negative number, got {}",
                self.tie_tolerance
            )));
        }

        Ok(())
    }
}
