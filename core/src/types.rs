//! Constrained value domains for account records.
//!
//! The access level and the phone kind are the only two fields whose
//! contents are validated; everything else on an account is accepted
//! verbatim. Both domains parse from their lowercase names and format
//! back the same way.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// Core Error Types
// ============================================================================

/// Errors that can occur when parsing the constrained account domains
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Unknown access level: {0}")]
    InvalidAccessLevel(String),

    #[error("Unknown phone kind: {0}")]
    InvalidPhoneKind(String),
}

/// Result type for this module
pub type Result<T> = std::result::Result<T, ValidationError>;

// ============================================================================
// Access Level
// ============================================================================

/// Access granted to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    /// Unrestricted access, above administrative.
    Elevated,
    /// Administrative access.
    Administrative,
    /// Ordinary account access.
    Standard,
}

impl AccessLevel {
    /// Whether the level carries more than standard access
    pub const fn is_privileged(&self) -> bool {
        !matches!(self, AccessLevel::Standard)
    }

    /// Lowercase name of the level
    pub const fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::Elevated => "elevated",
            AccessLevel::Administrative => "administrative",
            AccessLevel::Standard => "standard",
        }
    }
}

impl FromStr for AccessLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "elevated" => Ok(AccessLevel::Elevated),
            "administrative" => Ok(AccessLevel::Administrative),
            "standard" => Ok(AccessLevel::Standard),
            other => Err(ValidationError::InvalidAccessLevel(other.to_string())),
        }
    }
}

impl TryFrom<&str> for AccessLevel {
    type Error = ValidationError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Phone Kinds and Entries
// ============================================================================

/// Where a contact number reaches the account holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneKind {
    Mobile,
    Work,
    Home,
}

impl PhoneKind {
    /// Lowercase name of the kind
    pub const fn as_str(&self) -> &'static str {
        match self {
            PhoneKind::Mobile => "mobile",
            PhoneKind::Work => "work",
            PhoneKind::Home => "home",
        }
    }
}

impl FromStr for PhoneKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mobile" => Ok(PhoneKind::Mobile),
            "work" => Ok(PhoneKind::Work),
            "home" => Ok(PhoneKind::Home),
            other => Err(ValidationError::InvalidPhoneKind(other.to_string())),
        }
    }
}

impl TryFrom<&str> for PhoneKind {
    type Error = ValidationError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for PhoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contact number tagged with its kind.
///
/// The number itself is stored verbatim; only the kind is constrained.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phone {
    pub kind: PhoneKind,
    pub number: String,
}

impl Phone {
    /// Create a new phone entry
    pub fn new(kind: PhoneKind, number: impl Into<String>) -> Self {
        Self {
            kind,
            number: number.into(),
        }
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.number)
    }
}

// ============================================================================
// Tests
// ============================================================================
