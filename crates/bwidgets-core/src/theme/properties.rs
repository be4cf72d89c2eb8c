// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Style property registry

use crate::draw::Color;
use crate::cast::Conv;
use linear_map::{Entry, LinearMap};
use smol_str::SmolStr;
use thiserror::Error;

/// Type of a [`PropertyValue`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PropertyType {
    Bool,
    Integer,
    Float,
    Color,
}

/// A typed property value
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Integer(i32),
    Float(f32),
    Color(Color),
}

impl PropertyValue {
    /// The type of this value
    pub fn property_type(&self) -> PropertyType {
        match self {
            PropertyValue::Bool(_) => PropertyType::Bool,
            PropertyValue::Integer(_) => PropertyType::Integer,
            PropertyValue::Float(_) => PropertyType::Float,
            PropertyValue::Color(_) => PropertyType::Color,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            PropertyValue::Bool(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i32> {
        match *self {
            PropertyValue::Integer(i) => Some(i),
            _ => None,
        }
    }

    /// Get a float; integers convert
    pub fn as_float(&self) -> Option<f32> {
        match *self {
            PropertyValue::Float(f) => Some(f),
            PropertyValue::Integer(i) => Some(f32::conv(i)),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match *self {
            PropertyValue::Color(c) => Some(c),
            _ => None,
        }
    }

    /// Convert to type `ty`, if possible
    ///
    /// The only conversion besides identity is integer to float.
    fn convert_to(self, ty: PropertyType) -> Option<Self> {
        match (self, ty) {
            (v, ty) if v.property_type() == ty => Some(v),
            (PropertyValue::Integer(i), PropertyType::Float) => {
                Some(PropertyValue::Float(f32::conv(i)))
            }
            _ => None,
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Bool(b)
    }
}
impl From<i32> for PropertyValue {
    fn from(i: i32) -> Self {
        PropertyValue::Integer(i)
    }
}
impl From<f32> for PropertyValue {
    fn from(f: f32) -> Self {
        PropertyValue::Float(f)
    }
}
impl From<Color> for PropertyValue {
    fn from(c: Color) -> Self {
        PropertyValue::Color(c)
    }
}

/// Style property errors
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum PropertyError {
    #[error("property has type {expected:?}, value has type {found:?}")]
    TypeMismatch {
        expected: PropertyType,
        found: PropertyType,
    },
}

/// A typed value slot with a default
///
/// The type is fixed by the default value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StyleProperty {
    default: PropertyValue,
    value: PropertyValue,
}

impl StyleProperty {
    /// Construct, with current value equal to `default`
    pub fn new(default: PropertyValue) -> Self {
        StyleProperty {
            default,
            value: default,
        }
    }

    #[inline]
    pub fn property_type(&self) -> PropertyType {
        self.default.property_type()
    }

    #[inline]
    pub fn value(&self) -> PropertyValue {
        self.value
    }

    #[inline]
    pub fn default_value(&self) -> PropertyValue {
        self.default
    }

    /// True if the current value equals the default
    #[inline]
    pub fn is_default(&self) -> bool {
        self.value == self.default
    }

    /// Set the current value
    ///
    /// Fails if `value` does not have (or convert to) this property's type.
    pub fn set_value(&mut self, value: impl Into<PropertyValue>) -> Result<(), PropertyError> {
        let value = value.into();
        let expected = self.property_type();
        match value.convert_to(expected) {
            Some(v) => {
                self.value = v;
                Ok(())
            }
            None => Err(PropertyError::TypeMismatch {
                expected,
                found: value.property_type(),
            }),
        }
    }

    /// Reset the current value to the default
    #[inline]
    pub fn set_value_to_default(&mut self) {
        self.value = self.default;
    }
}

/// The style properties of one widget, keyed by name
///
/// Lookups of unknown names return `None`; this is not an error.
#[derive(Clone, Debug, Default)]
pub struct StyleProperties {
    map: LinearMap<SmolStr, StyleProperty>,
}

impl StyleProperties {
    /// Register a property
    ///
    /// Registering a name twice replaces the earlier property.
    pub fn register(
        &mut self,
        name: &str,
        default: impl Into<PropertyValue>,
    ) -> &mut StyleProperty {
        let prop = StyleProperty::new(default.into());
        match self.map.entry(SmolStr::new(name)) {
            Entry::Occupied(mut entry) => {
                log::debug!("StyleProperties::register: replacing property `{name}`");
                entry.insert(prop);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(prop),
        }
    }

    /// Look up a property by name
    pub fn lookup(&self, name: &str) -> Option<&StyleProperty> {
        self.map.get(name)
    }

    /// Look up a property by name (mutable)
    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut StyleProperty> {
        self.map.get_mut(name)
    }

    /// Reset every property to its default
    pub fn set_all_to_default(&mut self) {
        for (_, prop) in self.map.iter_mut() {
            prop.set_value_to_default();
        }
    }

    /// Iterate over `(name, property)` pairs in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleProperty)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn set_value_checks_type() {
        let mut p = StyleProperty::new(PropertyValue::Float(1.0));
        assert_eq!(p.set_value(3), Ok(()));
        assert_eq!(p.value(), PropertyValue::Float(3.0));
        assert_eq!(
            p.set_value(true),
            Err(PropertyError::TypeMismatch {
                expected: PropertyType::Float,
                found: PropertyType::Bool,
            })
        );
        assert_eq!(p.value(), PropertyValue::Float(3.0));

        let mut p = StyleProperty::new(PropertyValue::Integer(1));
        assert!(p.set_value(2.5f32).is_err());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut props = StyleProperties::default();
        props.register("color", Color::BLACK);
        props.register("border-radius", 0.0f32);
        props.register("visible", true);

        props.lookup_mut("color").unwrap().set_value(Color::WHITE).unwrap();
        props.lookup_mut("border-radius").unwrap().set_value(4.0f32).unwrap();
        props.lookup_mut("visible").unwrap().set_value(false).unwrap();
        assert!(props.iter().all(|(_, p)| !p.is_default()));

        props.set_all_to_default();
        for (_, p) in props.iter() {
            assert_eq!(p.value(), p.default_value());
        }
    }

    #[test]
    fn lookup_miss_is_none() {
        let mut props = StyleProperties::default();
        assert!(props.lookup("color").is_none());
        props.register("color", Color::BLACK);
        props.register("color", Color::WHITE);
        assert_eq!(props.len(), 1);
        assert_eq!(
            props.lookup("color").map(|p| p.value()),
            Some(PropertyValue::Color(Color::WHITE))
        );
    }
}
