//! Categorization vocabulary
//!
//! Specimen/species and super/sub species terms, each tied to the generalization
//! copula it specializes through a `genTraitGen` axiom.

use crate::grammar::Grammar;
use crate::grammar::vocabulary::{CATEGORIZATION_TERMS, GEN_TRAIT_GEN};
use crate::registry::{Registry, Signature};
use crate::signifier::Participation;
use crate::Result;

/// A grammar extended with the categorization terms
#[derive(Debug)]
pub struct Categorization<S: Signature = Registry> {
    grammar: Grammar<S>,
}

impl Categorization<Registry> {
    /// Categorization over a fresh registry
    pub fn with_registry() -> Result<Self> {
        Self::new(Grammar::with_registry()?)
    }
}

impl<S: Signature> Categorization<S> {
    /// Seed the categorization terms into a grammar.
    ///
    /// Fails if a referenced copula label no longer designates a single signifier.
    pub fn new(mut grammar: Grammar<S>) -> Result<Self> {
        let copula = grammar.get_unique_qname_for_signifier_id(GEN_TRAIT_GEN)?.to_qname_string();

        for term in CATEGORIZATION_TERMS {
            let attributum = grammar
                .get_unique_qname_for_signifier_id(term.generalizes)?
                .to_qname_string();
            grammar.add_signifier(
                term.qname,
                Some(term.label),
                Some(Participation::NomenCopulaAttributum),
            )?;
            grammar.add_axiom(term.qname, copula.as_str(), attributum, Some(term.label))?;
        }

        tracing::info!(terms = CATEGORIZATION_TERMS.len(), "categorization seeded");
        Ok(Self { grammar })
    }

    pub fn grammar(&self) -> &Grammar<S> {
        &self.grammar
    }

    pub fn grammar_mut(&mut self) -> &mut Grammar<S> {
        &mut self.grammar
    }

    pub fn into_grammar(self) -> Grammar<S> {
        self.grammar
    }
}
