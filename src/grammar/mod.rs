//! Grammar - schema layer over a term registry
//!
//! A grammar wraps any [`Signature`] implementation. Construction seeds the
//! well-known namespaces and the core copulas; afterwards the grammar forwards
//! registry operations and adds disjointness enforcement on axioms.

pub mod disjoint;
pub mod vocabulary;

use std::collections::BTreeSet;

use crate::axiom::{Axiom, AxiomId};
use crate::qname::QName;
use crate::registry::{Registry, Signature};
use crate::signifier::{Participation, Signifier, SignifierId, SignifierKey};
use crate::{Error, Result};

pub use disjoint::DisjointSet;
use vocabulary::{CORE_COPULAS, CORE_NAMESPACES};

/// Schema layer over a registry
#[derive(Debug)]
pub struct Grammar<S: Signature = Registry> {
    signature: S,
    disjoint_sets: Vec<DisjointSet>,
}

impl Grammar<Registry> {
    /// Seeded grammar over a fresh [`Registry`]
    pub fn with_registry() -> Result<Self> {
        Self::new(Registry::new())
    }
}

impl<S: Signature> Grammar<S> {
    /// Wrap a registry and seed the core namespaces and copulas into it.
    pub fn new(signature: S) -> Result<Self> {
        let mut grammar = Self {
            signature,
            disjoint_sets: Vec::new(),
        };

        for (prefix, uri) in CORE_NAMESPACES {
            grammar.signature.add_namespace(prefix, uri)?;
        }
        for copula in CORE_COPULAS {
            grammar.add_core_copula(copula.qname, copula.label)?;
        }

        tracing::info!(
            namespaces = CORE_NAMESPACES.len(),
            copulas = CORE_COPULAS.len(),
            "grammar seeded"
        );
        Ok(grammar)
    }

    /// Register a built-in copula after checking its label is not already
    /// claimed by several signifiers.
    fn add_core_copula(&mut self, qname: &str, label: &str) -> Result<SignifierId> {
        let existing = self.signature.get_signifiers_for_pref_label(label);
        if existing.len() > 1 {
            return Err(Error::AmbiguousLabel {
                label: label.to_string(),
                qnames: existing.iter().map(|s| s.qname().to_string()).collect(),
            });
        }
        self.signature
            .add_signifier(qname, Some(label), Some(Participation::CopulaAttributum))
    }

    pub fn add_namespace(&mut self, prefix: &str, uri: &str) -> Result<String> {
        self.signature.add_namespace(prefix, uri)
    }

    pub fn add_signifier(
        &mut self,
        qname: &str,
        pref_label: Option<&str>,
        participation: Option<Participation>,
    ) -> Result<SignifierId> {
        self.signature.add_signifier(qname, pref_label, participation)
    }

    pub fn get_signifier<'k>(&self, key: impl Into<SignifierKey<'k>>) -> Option<&Signifier> {
        self.signature.get_signifier(key.into())
    }

    pub fn get_signifiers_for_pref_label(&self, label: &str) -> Vec<&Signifier> {
        self.signature.get_signifiers_for_pref_label(label)
    }

    pub fn set_pref_label<'k>(&mut self, key: impl Into<SignifierKey<'k>>, label: &str) -> Result<()> {
        self.signature.set_pref_label(key.into(), label)
    }

    /// Add an axiom, refusing a second member of any disjointness set for the
    /// same (nomen, copula) pair.
    ///
    /// The check runs before the registry is touched, so a violation leaves
    /// no trace.
    pub fn add_axiom<'n, 'c, 'a>(
        &mut self,
        nomen: impl Into<SignifierKey<'n>>,
        copula: impl Into<SignifierKey<'c>>,
        attributum: impl Into<SignifierKey<'a>>,
        alt_copula_label: Option<&str>,
    ) -> Result<AxiomId> {
        let nomen = nomen.into();
        let copula = copula.into();
        let attributum = attributum.into();

        let sets = self
            .id_of(&attributum)
            .map(|attributum_id| self.sets_containing(attributum_id))
            .unwrap_or_default();

        if !sets.is_empty() {
            self.check_disjointness(&nomen, &copula, &sets)?;
        }

        let id = self
            .signature
            .add_axiom(nomen, copula, attributum, alt_copula_label)?;

        let pair = self
            .signature
            .get_axiom(id)
            .map(|axiom| (axiom.nomen(), axiom.copula()));
        if let Some((nomen, copula)) = pair {
            for index in sets {
                self.disjoint_sets[index].assign(nomen, copula);
            }
        }
        Ok(id)
    }

    fn check_disjointness(
        &self,
        nomen: &SignifierKey<'_>,
        copula: &SignifierKey<'_>,
        sets: &[usize],
    ) -> Result<()> {
        // Endpoints that don't exist yet can't have claimed a member
        let (Some(nomen_id), Some(copula_id)) = (self.id_of(nomen), self.id_of(copula)) else {
            return Ok(());
        };

        for &index in sets {
            let set = &self.disjoint_sets[index];
            if set.is_assigned(nomen_id, copula_id) {
                tracing::warn!(set = set.name(), "disjointness violation");
                return Err(Error::DisjointnessViolation {
                    nomen: self.qname_of(nomen_id),
                    copula: self.qname_of(copula_id),
                    set: set.name().to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn get_axiom(&self, id: AxiomId) -> Option<&Axiom> {
        self.signature.get_axiom(id)
    }

    pub fn get_axioms_with_literal_as_attributum(&self, literal: &str) -> Vec<&Axiom> {
        self.signature.get_axioms_with_literal_as_attributum(literal)
    }

    /// Declare a disjointness set over existing signifiers.
    ///
    /// Each member is a handle, a QName, or a prefLabel carried by exactly one
    /// signifier. Duplicates collapse. Returns the set's name.
    pub fn add_disjoint_attributum_set<'k, I, K>(&mut self, members: I) -> Result<String>
    where
        I: IntoIterator<Item = K>,
        K: Into<SignifierKey<'k>>,
    {
        let mut ids = Vec::new();
        let mut qnames = BTreeSet::new();
        for member in members {
            let qname = self.get_unique_qname_for_signifier_id(member)?;
            let id = self
                .id_of(&SignifierKey::from(qname.to_qname_string()))
                .ok_or_else(|| Error::UnknownSignifier(qname.to_string()))?;
            if !ids.contains(&id) {
                ids.push(id);
                qnames.insert(qname.to_string());
            }
        }
        if ids.is_empty() {
            return Err(Error::InvalidArgument(
                "disjoint set needs at least one member".to_string(),
            ));
        }

        let name = format!("{{{}}}", qnames.into_iter().collect::<Vec<_>>().join(", "));
        tracing::debug!(set = %name, members = ids.len(), "disjoint set declared");
        self.disjoint_sets.push(DisjointSet::new(name.clone(), ids));
        Ok(name)
    }

    /// Resolve a handle, QName or prefLabel to the one QName it designates.
    ///
    /// Handles and registered QNames win over labels. A label shared by several
    /// signifiers is ambiguous.
    pub fn get_unique_qname_for_signifier_id<'k>(
        &self,
        key: impl Into<SignifierKey<'k>>,
    ) -> Result<QName> {
        let key = key.into();
        if let Some(signifier) = self.signature.get_signifier(key.clone()) {
            return Ok(signifier.qname().clone());
        }

        let Some(label) = key.as_text() else {
            return Err(Error::UnknownSignifier(key.to_string()));
        };
        match self.signature.get_signifiers_for_pref_label(label).as_slice() {
            [] => Err(Error::UnknownSignifier(label.to_string())),
            [one] => Ok(one.qname().clone()),
            many => Err(Error::AmbiguousLabel {
                label: label.to_string(),
                qnames: many.iter().map(|s| s.qname().to_string()).collect(),
            }),
        }
    }

    pub fn disjoint_sets(&self) -> &[DisjointSet] {
        &self.disjoint_sets
    }

    pub fn signature(&self) -> &S {
        &self.signature
    }

    pub fn into_inner(self) -> S {
        self.signature
    }

    fn id_of(&self, key: &SignifierKey<'_>) -> Option<SignifierId> {
        self.signature.get_signifier(key.clone()).map(Signifier::id)
    }

    fn qname_of(&self, id: SignifierId) -> String {
        self.signature
            .get_signifier(SignifierKey::Id(id))
            .map(|s| s.qname().to_string())
            .unwrap_or_else(|| SignifierKey::Id(id).to_string())
    }

    fn sets_containing(&self, id: SignifierId) -> Vec<usize> {
        self.disjoint_sets
            .iter()
            .enumerate()
            .filter(|(_, set)| set.contains(id))
            .map(|(index, _)| index)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grammar() -> Grammar {
        let mut grammar = Grammar::with_registry().unwrap();
        grammar.add_namespace("", "http://www.example.org/default#").unwrap();
        grammar
    }

    #[test]
    fn test_seeding() {
        let grammar = grammar();
        let registry = grammar.signature();
        assert_eq!(registry.namespace_uri("grox"), Some("http://www.grox.info/"));
        assert_eq!(registry.namespace_uri("rdfs"), Some("http://www.w3.org/2000/01/rdf-schema#"));
        assert_eq!(registry.namespaces().count(), CORE_NAMESPACES.len() + 1);

        let core = grammar.get_signifier("grox:iT4tYHw9xJVf65egdT1hOtNu").unwrap();
        assert_eq!(core.pref_label(), "partWrtGen");
        assert_eq!(core.participation(), Participation::CopulaAttributum);
        assert_eq!(registry.signifiers().count(), CORE_COPULAS.len());
    }

    #[test]
    fn test_seeding_over_populated_registry() {
        let mut registry = Registry::new();
        registry.add_namespace("grox", "http://www.grox.info/").unwrap();
        registry.add_signifier(":mine", Some("partWrtGen"), None).unwrap();

        let grammar = Grammar::new(registry).unwrap();
        assert_eq!(grammar.get_signifiers_for_pref_label("partWrtGen").len(), 2);
    }

    #[test]
    fn test_seeding_fails_on_ambiguous_label() {
        let mut registry = Registry::new();
        registry.add_signifier(":a", Some("genWrtPart"), None).unwrap();
        registry.add_signifier(":b", Some("genWrtPart"), None).unwrap();

        match Grammar::new(registry).unwrap_err() {
            Error::AmbiguousLabel { label, qnames } => {
                assert_eq!(label, "genWrtPart");
                assert_eq!(qnames, vec![":a", ":b"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unique_qname_resolution() {
        let mut grammar = grammar();
        assert_eq!(
            grammar.get_unique_qname_for_signifier_id("genTraitGen").unwrap().to_string(),
            "grox:WW6JqN8iMmQcvwrRYxDub7N7"
        );
        assert_eq!(
            grammar
                .get_unique_qname_for_signifier_id("grox:WW6JqN8iMmQcvwrRYxDub7N7")
                .unwrap()
                .to_string(),
            "grox:WW6JqN8iMmQcvwrRYxDub7N7"
        );

        let id = grammar.add_signifier(":Sam", None, None).unwrap();
        assert_eq!(grammar.get_unique_qname_for_signifier_id(id).unwrap().to_string(), ":Sam");

        assert!(matches!(
            grammar.get_unique_qname_for_signifier_id("nobody"),
            Err(Error::UnknownSignifier(_))
        ));
        assert!(matches!(
            grammar.get_unique_qname_for_signifier_id(SignifierId::new(0, 9999)),
            Err(Error::UnknownSignifier(_))
        ));

        grammar.add_signifier(":x", Some("dup"), None).unwrap();
        grammar.add_signifier(":y", Some("dup"), None).unwrap();
        assert!(matches!(
            grammar.get_unique_qname_for_signifier_id("dup"),
            Err(Error::AmbiguousLabel { .. })
        ));
    }

    fn colors(grammar: &mut Grammar) -> String {
        grammar.add_signifier(":Red", None, None).unwrap();
        grammar.add_signifier(":Green", None, None).unwrap();
        grammar.add_signifier(":Blue", None, None).unwrap();
        grammar
            .add_disjoint_attributum_set([":Red", ":Green", "Blue"])
            .unwrap()
    }

    #[test]
    fn test_disjoint_set_declaration() {
        let mut grammar = grammar();
        let name = colors(&mut grammar);
        assert_eq!(name, "{:Blue, :Green, :Red}");
        assert_eq!(grammar.disjoint_sets().len(), 1);
        assert_eq!(grammar.disjoint_sets()[0].members().len(), 3);

        let err = grammar
            .add_disjoint_attributum_set([":Red", ":Purple"])
            .unwrap_err();
        assert!(matches!(err, Error::UnknownSignifier(ref q) if q == ":Purple"));
        assert_eq!(grammar.disjoint_sets().len(), 1);

        let empty: [&str; 0] = [];
        assert!(matches!(
            grammar.add_disjoint_attributum_set(empty),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_disjointness_enforced() {
        let mut grammar = grammar();
        colors(&mut grammar);

        grammar.add_axiom(":Apple", ":hasColor", ":Red", None).unwrap();
        let before = grammar.signature().axioms().len();

        let err = grammar.add_axiom(":Apple", ":hasColor", ":Green", None).unwrap_err();
        match err {
            Error::DisjointnessViolation { nomen, copula, set } => {
                assert_eq!(nomen, ":Apple");
                assert_eq!(copula, ":hasColor");
                assert_eq!(set, "{:Blue, :Green, :Red}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(grammar.signature().axioms().len(), before);

        // Other nomina and other copulas are unaffected
        grammar.add_axiom(":Pear", ":hasColor", ":Green", None).unwrap();
        grammar.add_axiom(":Apple", ":likes", ":Green", None).unwrap();
        // Non-members are unaffected
        grammar.add_axiom(":Apple", ":hasColor", "shiny", None).unwrap();
    }

    #[test]
    fn test_foreign_handle_is_refused() {
        let mut other = grammar();
        let mut grammar = grammar();
        colors(&mut grammar);
        grammar.add_axiom(":Apple", ":hasColor", ":Red", None).unwrap();
        let before = grammar.signature().axioms().len();

        let green_elsewhere = other.add_signifier(":Green", None, None).unwrap();
        let err = grammar
            .add_axiom(":Pear", ":hasColor", green_elsewhere, None)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(grammar.signature().axioms().len(), before);
        assert_eq!(grammar.disjoint_sets()[0].assigned_pairs().len(), 1);
    }

    #[test]
    fn test_disjointness_counts_only_later_axioms() {
        let mut grammar = grammar();
        grammar.add_axiom(":Apple", ":hasColor", ":Red", None).unwrap();
        grammar.add_signifier(":Green", None, None).unwrap();
        grammar.add_disjoint_attributum_set([":Red", ":Green"]).unwrap();

        grammar.add_axiom(":Apple", ":hasColor", ":Green", None).unwrap();
        assert!(grammar.add_axiom(":Apple", ":hasColor", ":Red", None).is_err());
    }

    #[test]
    fn test_generic_over_signature() {
        fn seeded<S: Signature>(signature: S) -> Grammar<S> {
            Grammar::new(signature).unwrap()
        }
        let grammar = seeded(Registry::new());
        let registry = grammar.into_inner();
        assert_eq!(registry.stats().signifiers, CORE_COPULAS.len());
    }
}
