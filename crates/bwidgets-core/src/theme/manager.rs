// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Registry of style types

use super::{BlenderThemeStyle, Style, StyleCss, StyleParams};
use std::fmt;

/// Identifier of a style type
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum StyleTypeId {
    /// [`StyleCss`]
    #[default]
    ClassicCss,
    /// [`BlenderThemeStyle`]
    BlenderTheme,
}

/// A registered style type
#[derive(Clone)]
pub struct StyleType {
    pub id: StyleTypeId,
    /// Display name
    pub name: &'static str,
    constructor: fn(StyleParams) -> Box<dyn Style>,
}

impl StyleType {
    /// Construct
    pub fn new(
        id: StyleTypeId,
        name: &'static str,
        constructor: fn(StyleParams) -> Box<dyn Style>,
    ) -> Self {
        StyleType {
            id,
            name,
            constructor,
        }
    }

    /// Create a style of this type
    pub fn create(&self, params: StyleParams) -> Box<dyn Style> {
        (self.constructor)(params)
    }
}

impl fmt::Debug for StyleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleType")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Creates styles by type
///
/// The manager is owned by the host; there is no global instance.
#[derive(Debug, Default)]
pub struct StyleManager {
    types: Vec<StyleType>,
}

impl StyleManager {
    /// Construct an empty manager
    pub fn new() -> Self {
        StyleManager::default()
    }

    /// Construct with [`Self::register_default_style_types`] applied
    pub fn with_default_style_types() -> Self {
        let mut manager = StyleManager::new();
        manager.register_default_style_types();
        manager
    }

    /// Register the built-in style types
    pub fn register_default_style_types(&mut self) {
        self.register_style_type(StyleType::new(
            StyleTypeId::ClassicCss,
            "Classic CSS",
            |params| Box::new(StyleCss::new(params)),
        ));
        self.register_style_type(StyleType::new(
            StyleTypeId::BlenderTheme,
            "Blender Theme",
            |params| Box::new(BlenderThemeStyle::new(params)),
        ));
    }

    /// Register a style type
    ///
    /// Replaces any registered type with the same id.
    pub fn register_style_type(&mut self, style_type: StyleType) {
        log::debug!("StyleManager: registering {:?}", style_type.id);
        if let Some(existing) = self.types.iter_mut().find(|t| t.id == style_type.id) {
            *existing = style_type;
        } else {
            self.types.push(style_type);
        }
    }

    /// Registered style types, in registration order
    pub fn style_types(&self) -> &[StyleType] {
        &self.types
    }

    /// Create a style, if `id` is registered
    pub fn create_style(&self, id: StyleTypeId, params: StyleParams) -> Option<Box<dyn Style>> {
        let style_type = self.types.iter().find(|t| t.id == id)?;
        log::debug!("StyleManager: creating {:?}", id);
        Some(style_type.create(params))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn create_by_id() {
        let mut manager = StyleManager::new();
        assert!(manager.create_style(StyleTypeId::BlenderTheme, Default::default()).is_none());

        manager.register_default_style_types();
        manager.register_default_style_types();
        assert_eq!(manager.style_types().len(), 2);

        for id in [StyleTypeId::ClassicCss, StyleTypeId::BlenderTheme] {
            let style = manager.create_style(id, StyleParams::default()).unwrap();
            assert_eq!(style.style_type(), id);
        }
    }
}
