//! Registry - In-memory signifiers, namespaces and axioms
//!
//! The registry is split in two halves:
//! - [`terms`]: namespace table, signifiers, QName and prefLabel indices
//! - [`relations`]: the append-only axiom sequence and endpoint resolution
//!
//! Everything is single-writer: callers that share a registry across threads
//! must wrap it in one exclusive lock held for each whole operation.

pub mod relations;
pub mod terms;

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU32, Ordering};

use crate::{Error, Result};
use crate::axiom::{Axiom, AxiomId};
use crate::signifier::{Participation, Signifier, SignifierId, SignifierKey};

/// Capability of a term registry that a [`Grammar`](crate::grammar::Grammar) can sit on.
///
/// [`Registry`] is the implementation shipped with the crate.
pub trait Signature {
    fn add_namespace(&mut self, prefix: &str, uri: &str) -> Result<String>;

    fn add_signifier(
        &mut self,
        qname: &str,
        pref_label: Option<&str>,
        participation: Option<Participation>,
    ) -> Result<SignifierId>;

    fn set_pref_label(&mut self, key: SignifierKey<'_>, label: &str) -> Result<()>;

    fn get_signifier(&self, key: SignifierKey<'_>) -> Option<&Signifier>;

    fn get_signifiers_for_pref_label(&self, label: &str) -> Vec<&Signifier>;

    fn add_axiom(
        &mut self,
        nomen: SignifierKey<'_>,
        copula: SignifierKey<'_>,
        attributum: SignifierKey<'_>,
        alt_copula_label: Option<&str>,
    ) -> Result<AxiomId>;

    fn get_axiom(&self, id: AxiomId) -> Option<&Axiom>;

    fn get_axioms_with_literal_as_attributum(&self, literal: &str) -> Vec<&Axiom>;
}

/// Tag of the next registry; 0 is never issued
static NEXT_TAG: AtomicU32 = AtomicU32::new(1);

/// In-memory term registry and relation store.
///
/// Signifiers and axioms live in arenas addressed by [`SignifierId`] and
/// [`AxiomId`]; the reverse-reference lists on each signifier hold axiom ids,
/// so one axiom is stored once and indexed three ways. Every handle carries
/// the tag of the registry that issued it.
#[derive(Debug)]
pub struct Registry {
    /// Stamped into every handle this registry issues
    tag: u32,
    /// prefix -> namespace URI
    namespaces: BTreeMap<String, String>,
    /// All signifiers, indexed by id
    signifiers: Vec<Signifier>,
    /// QName string -> id
    by_qname: HashMap<String, SignifierId>,
    /// prefLabel -> ids, in registration order
    by_label: HashMap<String, Vec<SignifierId>>,
    /// Global axiom sequence
    axioms: Vec<Axiom>,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            tag: NEXT_TAG.fetch_add(1, Ordering::Relaxed),
            namespaces: BTreeMap::new(),
            signifiers: Vec::new(),
            by_qname: HashMap::new(),
            by_label: HashMap::new(),
            axioms: Vec::new(),
        }
    }
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn tag(&self) -> u32 {
        self.tag
    }

    /// Get statistics about the registry
    pub fn stats(&self) -> RegistryStats {
        let literal_axioms = self
            .axioms
            .iter()
            .filter(|a| a.attributum().is_literal())
            .count();

        RegistryStats {
            namespaces: self.namespaces.len(),
            signifiers: self.signifiers.len(),
            axioms: self.axioms.len(),
            literal_axioms,
        }
    }
}

impl Signature for Registry {
    fn add_namespace(&mut self, prefix: &str, uri: &str) -> Result<String> {
        Registry::add_namespace(self, prefix, uri)
    }

    fn add_signifier(
        &mut self,
        qname: &str,
        pref_label: Option<&str>,
        participation: Option<Participation>,
    ) -> Result<SignifierId> {
        Registry::add_signifier(self, qname, pref_label, participation)
    }

    fn set_pref_label(&mut self, key: SignifierKey<'_>, label: &str) -> Result<()> {
        Registry::set_pref_label(self, key, label)
    }

    fn get_signifier(&self, key: SignifierKey<'_>) -> Option<&Signifier> {
        Registry::get_signifier(self, key)
    }

    fn get_signifiers_for_pref_label(&self, label: &str) -> Vec<&Signifier> {
        Registry::get_signifiers_for_pref_label(self, label)
    }

    fn add_axiom(
        &mut self,
        nomen: SignifierKey<'_>,
        copula: SignifierKey<'_>,
        attributum: SignifierKey<'_>,
        alt_copula_label: Option<&str>,
    ) -> Result<AxiomId> {
        Registry::add_axiom(self, nomen, copula, attributum, alt_copula_label)
    }

    fn get_axiom(&self, id: AxiomId) -> Option<&Axiom> {
        Registry::get_axiom(self, id)
    }

    fn get_axioms_with_literal_as_attributum(&self, literal: &str) -> Vec<&Axiom> {
        Registry::get_axioms_with_literal_as_attributum(self, literal)
    }
}

/// Position for the next entry of an arena holding `len` entries.
///
/// Handles are `u32`, so an arena holds at most `u32::MAX + 1` entries.
pub(crate) fn next_index(len: usize, arena: &'static str) -> Result<u32> {
    u32::try_from(len).map_err(|_| Error::CapacityExceeded(arena))
}

/// Statistics about a registry
#[derive(Debug, Clone, serde::Serialize)]
pub struct RegistryStats {
    pub namespaces: usize,
    pub signifiers: usize,
    pub axioms: usize,
    pub literal_axioms: usize,
}

impl std::fmt::Display for RegistryStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Registry Statistics:")?;
        writeln!(f, "  Namespaces: {}", self.namespaces)?;
        writeln!(f, "  Signifiers: {}", self.signifiers)?;
        writeln!(
            f,
            "  Axioms: {} (literal attributum: {})",
            self.axioms, self.literal_axioms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn through_trait<S: Signature>(signature: &mut S) -> AxiomId {
        signature.add_namespace("skos", "http://www.w3.org/2004/02/skos/core#").unwrap();
        signature
            .add_axiom(":Smurf".into(), "skos:related".into(), ":Munchkin".into(), None)
            .unwrap()
    }

    #[test]
    fn test_registry_satisfies_signature() {
        let mut registry = Registry::new();
        let id = through_trait(&mut registry);
        let axiom = Signature::get_axiom(&registry, id).unwrap();
        assert_eq!(axiom.copula_label(), "related");
    }

    #[test]
    fn test_each_registry_has_its_own_tag() {
        let a = Registry::new();
        let b = Registry::new();
        assert_ne!(a.tag(), b.tag());
        assert_ne!(a.tag(), 0);
    }

    #[test]
    fn test_next_index_bounds() {
        assert_eq!(next_index(0, "signifiers").unwrap(), 0);
        assert_eq!(next_index(u32::MAX as usize, "signifiers").unwrap(), u32::MAX);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_next_index_refuses_overflow() {
        let err = next_index(u32::MAX as usize + 1, "axioms").unwrap_err();
        assert_eq!(err, Error::CapacityExceeded("axioms"));
    }

    #[test]
    fn test_stats() {
        let mut registry = Registry::new();
        registry.add_namespace("grox", "http://www.grox.info/").unwrap();
        registry.add_axiom("grox:AAA", "grox:hasPredicate", "red", None).unwrap();
        registry.add_axiom("grox:AAA", "grox:hasPredicate", "grox:Square", None).unwrap();

        let stats = registry.stats();
        assert_eq!(stats.namespaces, 1);
        assert_eq!(stats.signifiers, 3);
        assert_eq!(stats.axioms, 2);
        assert_eq!(stats.literal_axioms, 1);
        assert!(stats.to_string().contains("Axioms: 2 (literal attributum: 1)"));
    }
}
