// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! A minimal CSS dialect for style properties
//!
//! Supported syntax:
//!
//! ```css
//! /* comments */
//! * { border-radius: 4; }
//! PushButton, Checkbox { background-color: #595959; color: #E6E6E6; }
//! PushButton:hover { background-color: #686868; }
//! PushButton:active { background-color: #5680C2FF; }
//! ```
//!
//! Selectors match a widget identifier (or `*` for any widget) with an
//! optional `:hover` (highlighted) or `:active` (sunken) pseudo-class.
//! Values are hex colours, numbers (an optional `px` suffix is ignored) or
//! `true` / `false`.

use super::{PropertyValue, StyleProperties};
use crate::State;
use crate::draw::{Color, Rgba8};
use smol_str::SmolStr;
use thiserror::Error;

/// Stylesheet parse errors
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CssError {
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("unexpected character `{ch}` at byte {offset}")]
    UnexpectedChar { ch: char, offset: usize },
    #[error("unknown pseudo-class `{0}`")]
    UnknownPseudoClass(String),
    #[error("invalid value `{value}` at byte {offset}")]
    InvalidValue { value: String, offset: usize },
}

/// Selector pseudo-class
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PseudoClass {
    /// Matches [`State::Highlighted`]
    Hover,
    /// Matches [`State::Sunken`]
    Active,
}

impl PseudoClass {
    fn matches(self, state: State) -> bool {
        match self {
            PseudoClass::Hover => state == State::Highlighted,
            PseudoClass::Active => state == State::Sunken,
        }
    }
}

/// A simple selector
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    /// Widget identifier; `None` for the universal selector `*`
    pub identifier: Option<SmolStr>,
    pub pseudo_class: Option<PseudoClass>,
}

impl Selector {
    /// Whether this matches a widget with the given identifier and state
    pub fn matches(&self, identifier: &str, state: State) -> bool {
        self.identifier.as_ref().is_none_or(|id| id == identifier)
            && self.pseudo_class.is_none_or(|pc| pc.matches(state))
    }

    /// Specificity: type selectors and pseudo-classes each count one
    pub fn specificity(&self) -> u8 {
        u8::from(self.identifier.is_some()) + u8::from(self.pseudo_class.is_some())
    }
}

/// One rule: selectors and declarations
#[derive(Clone, Debug, PartialEq)]
pub struct StyleRule {
    pub selectors: Vec<Selector>,
    pub declarations: Vec<(SmolStr, PropertyValue)>,
}

/// A parsed stylesheet
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleSheet {
    rules: Vec<StyleRule>,
}

impl StyleSheet {
    /// Parse from source
    pub fn parse(source: &str) -> Result<Self, CssError> {
        Parser::new(source).parse_sheet()
    }

    /// The built-in stylesheet
    pub fn classic() -> Self {
        match StyleSheet::parse(CLASSIC) {
            Ok(sheet) => sheet,
            Err(err) => {
                log::error!("StyleSheet::classic: {err}");
                StyleSheet::default()
            }
        }
    }

    /// The parsed rules
    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    /// Apply matching declarations to `properties`
    ///
    /// Declarations are applied in order of increasing selector specificity,
    /// then source order. Properties which are not registered are skipped;
    /// values of the wrong type are reported and skipped.
    pub fn apply(&self, identifier: &str, state: State, properties: &mut StyleProperties) {
        let mut matched: Vec<(u8, usize)> = self
            .rules
            .iter()
            .enumerate()
            .filter_map(|(index, rule)| {
                rule.selectors
                    .iter()
                    .filter(|sel| sel.matches(identifier, state))
                    .map(Selector::specificity)
                    .max()
                    .map(|spec| (spec, index))
            })
            .collect();
        matched.sort();

        for (_, index) in matched {
            for (name, value) in &self.rules[index].declarations {
                let Some(prop) = properties.lookup_mut(name) else {
                    continue;
                };
                if let Err(err) = prop.set_value(*value) {
                    log::warn!("StyleSheet::apply: {identifier} `{name}`: {err}");
                }
            }
        }
    }
}

/// Built-in stylesheet
const CLASSIC: &str = r#"
* {
    color: #000000;
    border-color: #191919;
    border-radius: 5;
}
PushButton, RadioButton, Checkbox, ScrollBar {
    background-color: #999999;
    decoration-color: #FFFFFF;
}
PushButton:hover, RadioButton:hover, Checkbox:hover, ScrollBar:hover {
    background-color: #A8A8A8;
}
PushButton:active, RadioButton:active, Checkbox:active {
    background-color: #5680C2;
    color: #FFFFFF;
}
ScrollBar:active {
    background-color: #646464;
}
TextBox, NumberSlider {
    background-color: #B4B4B4;
    decoration-color: #5680C2;
}
TextBox:hover, NumberSlider:hover {
    background-color: #C3C3C3;
}
Panel {
    background-color: #727272;
    border-color: #727272;
    border-radius: 0;
}
Label {
    color: #000000;
}
"#;

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Parser { src, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_ws(&mut self) -> Result<(), CssError> {
        loop {
            let rest = &self.src[self.pos..];
            let trimmed = rest.trim_start();
            self.pos += rest.len() - trimmed.len();
            if let Some(comment) = trimmed.strip_prefix("/*") {
                let end = comment.find("*/").ok_or(CssError::UnexpectedEnd)?;
                self.pos += 2 + end + 2;
            } else {
                return Ok(());
            }
        }
    }

    fn unexpected(&self) -> CssError {
        match self.peek() {
            Some(ch) => CssError::UnexpectedChar {
                ch,
                offset: self.pos,
            },
            None => CssError::UnexpectedEnd,
        }
    }

    fn expect(&mut self, ch: char) -> Result<(), CssError> {
        self.skip_ws()?;
        if self.peek() == Some(ch) {
            self.bump();
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn take_while(&mut self, f: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(&f) {
            self.bump();
        }
        let src = self.src;
        &src[start..self.pos]
    }

    fn ident(&mut self) -> Result<&'a str, CssError> {
        self.skip_ws()?;
        let ident = self.take_while(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if ident.is_empty() {
            Err(self.unexpected())
        } else {
            Ok(ident)
        }
    }

    fn parse_sheet(mut self) -> Result<StyleSheet, CssError> {
        let mut rules = vec![];
        loop {
            self.skip_ws()?;
            if self.peek().is_none() {
                return Ok(StyleSheet { rules });
            }
            rules.push(self.parse_rule()?);
        }
    }

    fn parse_rule(&mut self) -> Result<StyleRule, CssError> {
        let mut selectors = vec![self.parse_selector()?];
        loop {
            self.skip_ws()?;
            match self.peek() {
                Some(',') => {
                    self.bump();
                    selectors.push(self.parse_selector()?);
                }
                Some('{') => {
                    self.bump();
                    break;
                }
                _ => return Err(self.unexpected()),
            }
        }

        let mut declarations = vec![];
        loop {
            self.skip_ws()?;
            match self.peek() {
                Some('}') => {
                    self.bump();
                    return Ok(StyleRule {
                        selectors,
                        declarations,
                    });
                }
                Some(';') => self.bump(),
                Some(_) => {
                    let name = SmolStr::new(self.ident()?);
                    self.expect(':')?;
                    let value = self.parse_value()?;
                    declarations.push((name, value));
                }
                None => return Err(CssError::UnexpectedEnd),
            }
        }
    }

    fn parse_selector(&mut self) -> Result<Selector, CssError> {
        self.skip_ws()?;
        let identifier = if self.peek() == Some('*') {
            self.bump();
            None
        } else {
            Some(SmolStr::new(self.ident()?))
        };

        let pseudo_class = if self.peek() == Some(':') {
            self.bump();
            let name = self.take_while(|c| c.is_ascii_alphanumeric() || c == '-');
            Some(match name {
                "hover" => PseudoClass::Hover,
                "active" => PseudoClass::Active,
                _ => return Err(CssError::UnknownPseudoClass(name.to_string())),
            })
        } else {
            None
        };

        Ok(Selector {
            identifier,
            pseudo_class,
        })
    }

    fn parse_value(&mut self) -> Result<PropertyValue, CssError> {
        self.skip_ws()?;
        let offset = self.pos;
        let token = self.take_while(|c| !c.is_whitespace() && c != ';' && c != '}');
        if token.is_empty() {
            return Err(self.unexpected());
        }
        let invalid = || CssError::InvalidValue {
            value: token.to_string(),
            offset,
        };

        if token.starts_with('#') {
            let c: Rgba8 = token.parse().map_err(|_| invalid())?;
            return Ok(PropertyValue::Color(Color::from(c)));
        }
        match token {
            "true" => return Ok(PropertyValue::Bool(true)),
            "false" => return Ok(PropertyValue::Bool(false)),
            _ => (),
        }

        let number = token.strip_suffix("px").unwrap_or(token);
        if let Ok(i) = number.parse::<i32>() {
            Ok(PropertyValue::Integer(i))
        } else if let Ok(f) = number.parse::<f32>() {
            Ok(PropertyValue::Float(f))
        } else {
            Err(invalid())
        }
    }
}
