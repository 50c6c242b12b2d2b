// src/config.rs
//! Conversion policy and the optional `pxrem.toml` config file
//!
//! # Example pxrem.toml
//!
//! ```toml
//! [convert]
//! base = 16
//! max = 50
//! min_pixel_value = 2
//! min_dimension_pixels = 20
//!
//! [discovery]
//! exclude_dirs = ["node_modules", "dist"]
//! ```
//!
//! Every key is optional. Command-line flags override the file, and
//! built-in defaults fill whatever neither provides.

use crate::convert::ThresholdPolicy;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Pixels per rem when nothing else is configured
pub const DEFAULT_BASE_UNIT: u32 = 16;

/// Config file looked up in the working root when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "pxrem.toml";

/// Directory names never descended into during discovery
pub const DEFAULT_EXCLUDED_DIRS: &[&str] =
    &["node_modules", ".next", "vendor", ".git", "dist", "build"];

/// Validated settings for one conversion session
///
/// Immutable once built; construct through [`ConversionPolicy::new`] so a
/// zero base or zero budget is rejected before any file is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionPolicy {
    base_unit_size: u32,
    max_conversions: Option<usize>,
    dry_run: bool,
    thresholds: ThresholdPolicy,
}

impl ConversionPolicy {
    /// Create a policy with default thresholds
    pub fn new(base_unit_size: u32, max_conversions: Option<usize>, dry_run: bool) -> Result<Self> {
        if base_unit_size == 0 {
            return Err(Error::InvalidBaseUnit(base_unit_size));
        }
        if let Some(max) = max_conversions
            && max == 0
        {
            return Err(Error::InvalidMaxConversions(max));
        }

        Ok(Self {
            base_unit_size,
            max_conversions,
            dry_run,
            thresholds: ThresholdPolicy::default(),
        })
    }

    /// Replace the value thresholds
    pub fn with_thresholds(mut self, thresholds: ThresholdPolicy) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Pixel count equal to `1rem`
    pub fn base_unit_size(&self) -> u32 {
        self.base_unit_size
    }

    /// Cap on total conversions, `None` when unbounded
    pub fn max_conversions(&self) -> Option<usize> {
        self.max_conversions
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn thresholds(&self) -> ThresholdPolicy {
        self.thresholds
    }
}

/// `[convert]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConvertSection {
    #[serde(default)]
    pub base: Option<u32>,
    #[serde(default)]
    pub max: Option<usize>,
    #[serde(default)]
    pub min_pixel_value: Option<u64>,
    #[serde(default)]
    pub min_dimension_pixels: Option<u64>,
}

/// `[discovery]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiscoverySection {
    /// Replaces the default excluded directory names when set
    #[serde(default)]
    pub exclude_dirs: Option<Vec<String>>,
}

/// Parsed contents of a `pxrem.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub convert: ConvertSection,
    #[serde(default)]
    pub discovery: DiscoverySection,
}

impl ConfigFile {
    /// Parse config content; `path` is only used for error messages
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a config file that must exist
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Load an explicit config, or `pxrem.toml` under `root` if present
    ///
    /// Missing default file means built-in defaults; a missing explicit file
    /// is an error.
    pub fn discover(explicit: Option<&Path>, root: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "Loading config file");
            return Self::load(path);
        }

        let default_path: PathBuf = root.join(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            debug!(path = %default_path.display(), "Loading config file");
            return Self::load(&default_path);
        }

        Ok(Self::default())
    }

    /// Thresholds from the file, falling back to the built-in constants
    pub fn thresholds(&self) -> Result<ThresholdPolicy> {
        let defaults = ThresholdPolicy::default();
        ThresholdPolicy::new(
            self.convert.min_pixel_value.unwrap_or(defaults.min_pixel_value),
            self.convert
                .min_dimension_pixels
                .unwrap_or(defaults.min_dimension_pixels),
        )
    }

    /// Excluded directory names from the file, or the defaults
    pub fn excluded_dirs(&self) -> Vec<String> {
        match &self.discovery.exclude_dirs {
            Some(dirs) => dirs.clone(),
            None => DEFAULT_EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect(),
        }
    }

    /// Build a policy, letting explicit values override the file
    pub fn policy(
        &self,
        base_override: Option<u32>,
        max_override: Option<usize>,
        dry_run: bool,
    ) -> Result<ConversionPolicy> {
        let base = base_override
            .or(self.convert.base)
            .unwrap_or(DEFAULT_BASE_UNIT);
        let max = max_override.or(self.convert.max);
        Ok(ConversionPolicy::new(base, max, dry_run)?.with_thresholds(self.thresholds()?))
    }
}
