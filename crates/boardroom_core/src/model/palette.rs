//! Component palette shown in the builder sidebar.
//!
//! # Invariants
//! - Component names are trimmed and non-blank.
//! - Names are unique; insertion order is display order.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Components offered when no palette is configured.
pub const DEFAULT_COMPONENTS: &[&str] = &["Graph", "Text", "Image"];

/// Palette validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    BlankComponent,
    DuplicateComponent(String),
}

impl Display for PaletteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankComponent => write!(f, "component name must not be blank"),
            Self::DuplicateComponent(name) => write!(f, "component already listed: {name}"),
        }
    }
}

impl Error for PaletteError {}

/// Ordered list of available component names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ComponentPalette {
    components: Vec<String>,
}

impl ComponentPalette {
    /// Builds a palette, normalizing and validating every name.
    pub fn new<I, S>(names: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut palette = Self {
            components: Vec::new(),
        };
        for name in names {
            palette.push(name)?;
        }
        Ok(palette)
    }

    /// Appends one component name.
    pub fn push(&mut self, name: impl Into<String>) -> Result<(), PaletteError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(PaletteError::BlankComponent);
        }
        if self.components.iter().any(|existing| existing == trimmed) {
            return Err(PaletteError::DuplicateComponent(trimmed.to_string()));
        }
        self.components.push(trimmed.to_string());
        Ok(())
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl Default for ComponentPalette {
    fn default() -> Self {
        Self {
            components: DEFAULT_COMPONENTS.iter().map(|name| name.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for ComponentPalette {
    type Error = PaletteError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ComponentPalette> for Vec<String> {
    fn from(value: ComponentPalette) -> Self {
        value.components
    }
}
