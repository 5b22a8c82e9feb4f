//! QName - Namespaced identity for every signifier
//!
//! Format: `<prefix>:<local>` or `:<local>` for the default namespace.
//!
//! Examples:
//! - `rdf:type`
//! - `grox:iT4tYHw9xJVf65egdT1hOtNu`
//! - `:Sam`

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A qualified name: namespace prefix plus local part.
///
/// The QName is the primary key of a signifier inside a registry. An empty
/// prefix denotes the default namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QName {
    /// Namespace prefix (empty for the default namespace)
    prefix: String,
    /// Local part, never empty
    local: String,
}

impl QName {
    /// Parse a QName string.
    ///
    /// Exactly one colon is required and at least one character must follow it.
    pub fn parse(qname: &str) -> Result<Self> {
        if qname.is_empty() {
            return Err(Error::InvalidQName("QName must not be empty".to_string()));
        }

        let (prefix, local) = qname.split_once(':').ok_or_else(|| {
            Error::InvalidQName(format!(
                "{qname}: QName must use a registered namespace prefix, or ':' in first position for the default namespace"
            ))
        })?;

        if local.contains(':') {
            return Err(Error::InvalidQName(format!(
                "{qname}: only one colon is allowed in a QName"
            )));
        }
        if local.is_empty() {
            return Err(Error::InvalidQName(format!(
                "{qname}: at least one character must follow the colon"
            )));
        }

        Ok(Self {
            prefix: prefix.to_string(),
            local: local.to_string(),
        })
    }

    /// Whether a string has the shape of a QName (exactly one colon).
    ///
    /// Trailing colons pass this check and are rejected later by [`QName::parse`].
    pub fn is_qname_shaped(value: &str) -> bool {
        value.matches(':').count() == 1
    }

    /// Namespace prefix, empty for the default namespace
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Local part after the colon
    pub fn local(&self) -> &str {
        &self.local
    }

    /// True for `:local` names
    pub fn is_default_namespace(&self) -> bool {
        self.prefix.is_empty()
    }

    /// Convert to the `prefix:local` string form
    pub fn to_qname_string(&self) -> String {
        format!("{}:{}", self.prefix, self.local)
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.prefix, self.local)
    }
}

impl FromStr for QName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for QName {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_qname_string())
    }
}

impl<'de> Deserialize<'de> for QName {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        QName::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefixed() {
        let qname = QName::parse("rdf:type").unwrap();
        assert_eq!(qname.prefix(), "rdf");
        assert_eq!(qname.local(), "type");
        assert!(!qname.is_default_namespace());
        assert_eq!(qname.to_string(), "rdf:type");
    }

    #[test]
    fn test_parse_default_namespace() {
        let qname = QName::parse(":Sam").unwrap();
        assert_eq!(qname.prefix(), "");
        assert_eq!(qname.local(), "Sam");
        assert!(qname.is_default_namespace());
        assert_eq!(qname.to_qname_string(), ":Sam");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "Sam", "a:b:c", "::x", "rdf:", ":"] {
            let err = QName::parse(bad).unwrap_err();
            assert!(matches!(err, Error::InvalidQName(_)), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_qname_shape() {
        assert!(QName::is_qname_shaped(":Father"));
        assert!(QName::is_qname_shaped("ex:"));
        assert!(!QName::is_qname_shaped("1970-07-24"));
        assert!(!QName::is_qname_shaped("a:b:c"));
    }

    #[test]
    fn test_serde_as_string() {
        let qname = QName::parse("skos:related").unwrap();
        let json = serde_json::to_string(&qname).unwrap();
        assert_eq!(json, "\"skos:related\"");
        let back: QName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, qname);
        assert!(serde_json::from_str::<QName>("\"nocolon\"").is_err());
    }
}
