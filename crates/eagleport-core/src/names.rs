//! Validated names and identifiers
//!
//! - [`ElementName`]: non-empty, no leading/trailing whitespace
//! - [`CircuitIdentifier`]: non-empty, no whitespace at all (pins, pads)
//! - [`GateSuffix`]: like a circuit identifier but may be empty

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name used when a sanitized name would otherwise be empty
pub const UNNAMED: &str = "Unnamed";

/// Human readable name of a library element, component or device
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ElementName(String);

impl ElementName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        if name.trim() != name {
            return Err(Error::UntrimmedName { name });
        }
        Ok(Self(name))
    }

    /// The fallback name.
    pub fn unnamed() -> Self {
        Self(UNNAMED.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of a pin, pad or signal
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CircuitIdentifier(String);

impl CircuitIdentifier {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        validate_no_whitespace(name).map(Self)
    }

    /// The fallback identifier.
    pub fn unnamed() -> Self {
        Self(UNNAMED.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Suffix distinguishing the gates of a multi-gate component
///
/// An empty suffix means the component has a single (default) gate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GateSuffix(String);

impl GateSuffix {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        validate_no_whitespace(name.into()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn validate_no_whitespace(name: String) -> Result<String> {
    if name.chars().any(char::is_whitespace) {
        return Err(Error::WhitespaceInIdentifier { name });
    }
    Ok(name)
}

macro_rules! impl_name_traits {
    ($($ty:ty),*) => {$(
        impl TryFrom<String> for $ty {
            type Error = Error;

            fn try_from(name: String) -> Result<Self> {
                Self::new(name)
            }
        }

        impl From<$ty> for String {
            fn from(name: $ty) -> String {
                name.0
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $ty {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $ty {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    )*};
}

impl_name_traits!(ElementName, CircuitIdentifier, GateSuffix);
