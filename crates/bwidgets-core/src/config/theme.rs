// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Theme configuration

use crate::theme::ThemeColors;
use std::collections::BTreeMap;

/// Colour scheme configuration
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThemeConfig {
    /// The colour scheme to use
    #[cfg_attr(feature = "serde", serde(default = "defaults::default_scheme"))]
    pub active_scheme: String,

    /// All colour schemes
    #[cfg_attr(feature = "serde", serde(default = "defaults::color_schemes"))]
    pub color_schemes: BTreeMap<String, ThemeColors>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            active_scheme: defaults::default_scheme(),
            color_schemes: defaults::color_schemes(),
        }
    }
}

impl ThemeConfig {
    /// Active colour scheme (name)
    #[inline]
    pub fn active_scheme(&self) -> &str {
        &self.active_scheme
    }

    /// Set the active colour scheme (by name)
    ///
    /// Does nothing if the named scheme is not found.
    pub fn set_active_scheme(&mut self, scheme: impl ToString) {
        let scheme = scheme.to_string();
        if self.color_schemes.contains_key(&scheme) {
            self.active_scheme = scheme;
        }
    }

    /// Iterate over all colour schemes
    #[inline]
    pub fn color_schemes(&self) -> impl Iterator<Item = (&str, &ThemeColors)> {
        self.color_schemes.iter().map(|(s, t)| (s.as_str(), t))
    }

    /// Get a colour scheme by name
    #[inline]
    pub fn get_color_scheme(&self, name: &str) -> Option<&ThemeColors> {
        self.color_schemes.get(name)
    }

    /// Get the active colour scheme
    ///
    /// Falls back to [`ThemeColors::DARK`] if the active scheme is missing.
    #[inline]
    pub fn get_active_scheme(&self) -> &ThemeColors {
        self.color_schemes
            .get(&self.active_scheme)
            .unwrap_or(&ThemeColors::DARK)
    }

    /// Add or update a colour scheme
    pub fn add_scheme(&mut self, scheme: impl ToString, colors: ThemeColors) {
        self.color_schemes.insert(scheme.to_string(), colors);
    }

    /// Remove a colour scheme
    pub fn remove_scheme(&mut self, scheme: &str) {
        self.color_schemes.remove(scheme);
    }
}

mod defaults {
    use super::*;

    pub fn default_scheme() -> String {
        "dark".to_string()
    }

    pub fn color_schemes() -> BTreeMap<String, ThemeColors> {
        let mut schemes = BTreeMap::new();
        schemes.insert("dark".to_string(), ThemeColors::DARK);
        schemes.insert("classic".to_string(), ThemeColors::CLASSIC);
        schemes
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn active_scheme() {
        let mut config = ThemeConfig::default();
        assert_eq!(config.get_active_scheme(), &ThemeColors::DARK);

        config.set_active_scheme("missing");
        assert_eq!(config.active_scheme(), "dark");

        config.set_active_scheme("classic");
        assert_eq!(config.get_active_scheme(), &ThemeColors::CLASSIC);

        config.remove_scheme("classic");
        assert_eq!(config.get_active_scheme(), &ThemeColors::DARK);
        assert_eq!(config.color_schemes().count(), 1);
    }
}
