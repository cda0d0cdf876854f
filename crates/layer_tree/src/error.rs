//! Diagnostics raised when a source construct has no layer tree equivalent.

use std::fmt;

pub type Result<T, E = LayerTreeError> = std::result::Result<T, E>;

/// What kind of source construct could not be represented.
///
/// New categories may be added as the translator grows, so matches on this
/// type need a wildcard arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum UnsupportedKind {
    Element,
    Attribute,
    Value,
    Image,
    Other,
}

impl UnsupportedKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::Attribute => "attribute",
            Self::Value => "value",
            Self::Image => "image",
            Self::Other => "construct",
        }
    }
}

impl fmt::Display for UnsupportedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A source construct that could not be mapped onto the layer tree.
///
/// The context string is carried verbatim; callers get back exactly what
/// the translator put in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unsupported {
    kind: UnsupportedKind,
    context: String,
}

impl Unsupported {
    pub fn new(kind: UnsupportedKind, context: impl Into<String>) -> Self {
        Self {
            kind,
            context: context.into(),
        }
    }

    pub fn kind(&self) -> UnsupportedKind {
        self.kind
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn into_parts(self) -> (UnsupportedKind, String) {
        (self.kind, self.context)
    }
}

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported {}: {}", self.kind, self.context)
    }
}

/// Error type for layer tree construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerTreeError {
    Unsupported(Unsupported),
}

impl LayerTreeError {
    pub fn unsupported(kind: UnsupportedKind, context: impl Into<String>) -> Self {
        Self::Unsupported(Unsupported::new(kind, context))
    }
}

impl From<Unsupported> for LayerTreeError {
    fn from(unsupported: Unsupported) -> Self {
        Self::Unsupported(unsupported)
    }
}

impl fmt::Display for LayerTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported(unsupported) => write!(f, "{}", unsupported),
        }
    }
}

impl std::error::Error for LayerTreeError {}
