//! Axiom types - the triples of the store
//!
//! An axiom is `(nomen, copula, attributum)`:
//! - `nomen`: always a signifier
//! - `copula`: always a signifier
//! - `attributum`: a signifier or a plain string literal

use crate::registry::Registry;
use crate::signifier::SignifierId;
use serde::{Deserialize, Serialize};

/// Position of an axiom in the global sequence of the registry that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AxiomId {
    registry: u32,
    index: u32,
}

impl AxiomId {
    pub(crate) const fn new(registry: u32, index: u32) -> Self {
        Self { registry, index }
    }

    /// Position in the issuing registry's axiom sequence
    pub fn index(self) -> usize {
        self.index as usize
    }

    pub(crate) fn registry(self) -> u32 {
        self.registry
    }
}

/// The object position of an axiom: a signifier or a scalar literal, never both.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attributum {
    Signifier(SignifierId),
    Literal(String),
}

impl Attributum {
    /// The signifier handle, if the attributum is not a literal
    pub fn as_signifier(&self) -> Option<SignifierId> {
        match self {
            Attributum::Signifier(id) => Some(*id),
            Attributum::Literal(_) => None,
        }
    }

    /// The literal value, if the attributum is not a signifier
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Attributum::Signifier(_) => None,
            Attributum::Literal(value) => Some(value),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Attributum::Literal(_))
    }
}

/// One immutable triple.
///
/// `copula_label` is the alternate label given at creation, or else the
/// copula's prefLabel at that moment.
#[derive(Debug, Clone, Serialize)]
pub struct Axiom {
    id: AxiomId,
    nomen: SignifierId,
    copula: SignifierId,
    attributum: Attributum,
    copula_label: String,
}

impl Axiom {
    pub(crate) fn new(
        id: AxiomId,
        nomen: SignifierId,
        copula: SignifierId,
        attributum: Attributum,
        copula_label: String,
    ) -> Self {
        Self {
            id,
            nomen,
            copula,
            attributum,
            copula_label,
        }
    }

    pub fn id(&self) -> AxiomId {
        self.id
    }

    pub fn nomen(&self) -> SignifierId {
        self.nomen
    }

    pub fn copula(&self) -> SignifierId {
        self.copula
    }

    pub fn attributum(&self) -> &Attributum {
        &self.attributum
    }

    pub fn copula_label(&self) -> &str {
        &self.copula_label
    }

    /// Whether the attributum is the given literal (exact string match)
    pub fn has_literal(&self, literal: &str) -> bool {
        self.attributum.as_literal() == Some(literal)
    }
}

/// Borrowed rendering of an axiom with the labels of its endpoints.
pub struct AxiomView<'a> {
    registry: &'a Registry,
    axiom: &'a Axiom,
}

impl<'a> AxiomView<'a> {
    pub fn new(registry: &'a Registry, axiom: &'a Axiom) -> Self {
        Self { registry, axiom }
    }

    pub fn axiom(&self) -> &'a Axiom {
        self.axiom
    }

    fn label_of(&self, id: SignifierId) -> &'a str {
        self.registry
            .get_signifier(id)
            .map(|s| s.pref_label())
            .unwrap_or("?")
    }

    pub fn nomen_label(&self) -> &'a str {
        self.label_of(self.axiom.nomen)
    }

    pub fn copula_label(&self) -> &'a str {
        self.label_of(self.axiom.copula)
    }

    pub fn attributum_label(&self) -> &'a str {
        match &self.axiom.attributum {
            Attributum::Signifier(id) => self.label_of(*id),
            Attributum::Literal(value) => value,
        }
    }
}

impl std::fmt::Display for AxiomView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Nomen\t{}", self.nomen_label())?;
        writeln!(f, "Copula\t{}", self.copula_label())?;
        write!(f, "Attributum\t{}", self.attributum_label())
    }
}
