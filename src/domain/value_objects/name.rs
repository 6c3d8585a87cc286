//! Module and Operation Name Value Objects
//!
//! Validated, immutable names used as registry keys.

use std::fmt;

use crate::error::RegistryError;

fn validate(kind: &'static str, raw: &str) -> Result<(), RegistryError> {
    let reason = if raw.is_empty() {
        Some("name is empty")
    } else if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
        Some("name contains whitespace or control characters")
    } else if raw.contains("::") {
        Some("name contains '::'")
    } else if raw.contains('.') {
        Some("name contains '.'")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(RegistryError::InvalidName {
            kind,
            name: raw.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Name of a domain module, unique within a registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleName(String);

impl ModuleName {
    pub fn new(raw: impl Into<String>) -> Result<Self, RegistryError> {
        let raw = raw.into();
        validate("module", &raw)?;
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Name of an operation on a module's public surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OperationName(String);

impl OperationName {
    pub fn new(raw: impl Into<String>) -> Result<Self, RegistryError> {
        let raw = raw.into();
        validate("operation", &raw)?;
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for OperationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ModuleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for OperationName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
