//! # Grox - In-memory semantic triple store
//!
//! Statements are (nomen, copula, attributum) axioms over QName-identified
//! signifiers.
//!
//! Grox provides:
//! - A term registry of namespaces and signifiers with prefLabel lookup
//! - An append-only relation store with per-role reverse indices
//! - A grammar layer seeding the core copulas and enforcing disjointness
//! - The categorization vocabulary built on top of the grammar
//! - TOML vocabulary documents and a small CLI to load and inspect them

pub mod qname;
pub mod signifier;
pub mod axiom;
pub mod registry;
pub mod grammar;
pub mod categorization;
pub mod document;
pub mod output;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use qname::QName;
pub use signifier::{Participation, Role, Signifier, SignifierId, SignifierKey};
pub use axiom::{Attributum, Axiom, AxiomId, AxiomView};
pub use registry::{Registry, RegistryStats, Signature};
pub use grammar::{DisjointSet, Grammar};
pub use categorization::Categorization;

/// Result type alias for Grox operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Grox operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid QName: {0}")]
    InvalidQName(String),

    #[error("Invalid namespace prefix: {0}")]
    InvalidPrefix(String),

    #[error("Unknown namespace prefix '{prefix}' in {qname}")]
    UnknownNamespace { prefix: String, qname: String },

    #[error("Invalid {role} for new axiom, {value:?}")]
    InvalidEndpoint { role: Role, value: String },

    #[error("Signifier not found: {0}")]
    UnknownSignifier(String),

    #[error("Label '{label}' is ambiguous: {}", .qnames.join(", "))]
    AmbiguousLabel { label: String, qnames: Vec<String> },

    #[error("{nomen} {copula} already holds a member of disjoint set {set}")]
    DisjointnessViolation {
        nomen: String,
        copula: String,
        set: String,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Registry capacity exceeded: too many {0}")]
    CapacityExceeded(&'static str),
}
