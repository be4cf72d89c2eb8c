// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Top-level configuration struct

use super::ThemeConfig;
use crate::theme::StyleTypeId;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Base configuration
///
/// This is serializable (using `feature = "serde"`) with the following fields:
///
/// > `style`: [`StyleTypeId`] \
/// > `dpi_factor`: `f32` \
/// > `theme`: [`ThemeConfig`] \
/// > `stylesheet`: CSS source used by the classic style (empty for built-in)
///
/// Styles are built from this via
/// [`StyleParams::from_config`](crate::theme::StyleParams::from_config).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    #[cfg_attr(feature = "serde", serde(default))]
    pub style: StyleTypeId,

    #[cfg_attr(feature = "serde", serde(default = "defaults::dpi_factor"))]
    pub dpi_factor: f32,

    #[cfg_attr(feature = "serde", serde(default))]
    pub theme: ThemeConfig,

    #[cfg_attr(feature = "serde", serde(default))]
    pub stylesheet: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            style: StyleTypeId::default(),
            dpi_factor: defaults::dpi_factor(),
            theme: ThemeConfig::default(),
            stylesheet: String::new(),
        }
    }
}

#[cfg(feature = "serde")]
impl Config {
    /// Read from a path, guessing the format from the extension
    pub fn read_path(path: &std::path::Path) -> Result<Self, super::Error> {
        let config: Config = super::Format::guess_and_read_path(path)?;
        if !config.stylesheet.trim().is_empty() {
            crate::theme::StyleSheet::parse(&config.stylesheet)?;
        }
        Ok(config)
    }

    /// Write to a path, guessing the format from the extension
    pub fn write_path(&self, path: &std::path::Path) -> Result<(), super::Error> {
        super::Format::guess_and_write_path(path, self)
    }
}

mod defaults {
    pub fn dpi_factor() -> f32 {
        1.0
    }
}
