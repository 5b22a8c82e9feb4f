//! Relation store - the append-only axiom sequence
//!
//! Endpoint resolution order for `add_axiom`:
//! 1. Handle of a signifier in this registry (a handle from another registry
//!    is refused)
//! 2. Lookup by QName (a signifier from elsewhere is re-resolved by its QName)
//! 3. Nomen/copula text: registered on demand
//! 4. Attributum text: registered on demand if QName-shaped, else a literal
//!
//! All three endpoints are resolved before anything is created, so a failing
//! call leaves the registry untouched.

use super::{Registry, next_index};
use crate::axiom::{Attributum, Axiom, AxiomId, AxiomView};
use crate::qname::QName;
use crate::signifier::{Role, SignifierId, SignifierKey};
use crate::{Error, Result};

/// How one endpoint will be satisfied once the axiom is committed
#[derive(Debug)]
enum Endpoint {
    Existing(SignifierId),
    Create(QName),
    Literal(String),
}

impl Registry {
    /// Add an axiom `(nomen, copula, attributum)`.
    ///
    /// The copula label is `alt_copula_label` when given, else the copula's
    /// prefLabel. A copula created on demand takes `alt_copula_label` as its
    /// prefLabel.
    pub fn add_axiom<'n, 'c, 'a>(
        &mut self,
        nomen: impl Into<SignifierKey<'n>>,
        copula: impl Into<SignifierKey<'c>>,
        attributum: impl Into<SignifierKey<'a>>,
        alt_copula_label: Option<&str>,
    ) -> Result<AxiomId> {
        let nomen = self.plan_endpoint(&nomen.into(), Role::Nomen)?;
        let copula = self.plan_endpoint(&copula.into(), Role::Copula)?;
        let attributum = self.plan_endpoint(&attributum.into(), Role::Attributum)?;

        let created = [&nomen, &copula, &attributum]
            .into_iter()
            .filter(|endpoint| matches!(endpoint, Endpoint::Create(_)))
            .count();
        next_index(self.signifiers.len() + created, "signifiers")?;
        let id = AxiomId::new(self.tag, next_index(self.axioms.len(), "axioms")?);

        let nomen = self.commit_endpoint(nomen, None)?;
        let copula = self.commit_endpoint(copula, alt_copula_label)?;
        let attributum = match attributum {
            Endpoint::Literal(value) => Attributum::Literal(value),
            planned => Attributum::Signifier(self.commit_endpoint(planned, None)?),
        };

        let copula_label = match alt_copula_label {
            Some(label) => label.to_string(),
            None => self.signifiers[copula.index()].pref_label().to_string(),
        };

        tracing::debug!(
            axiom = id.index(),
            nomen = %self.signifiers[nomen.index()].qname(),
            copula = %copula_label,
            "axiom added"
        );

        self.signifier_mut(nomen).notify_as_nomen(id, &copula_label, &attributum);
        self.signifier_mut(copula).notify_as_copula(id);
        if let Attributum::Signifier(target) = attributum {
            self.signifier_mut(target).notify_as_attributum(id);
        }

        self.axioms
            .push(Axiom::new(id, nomen, copula, attributum, copula_label));
        Ok(id)
    }

    fn plan_endpoint(&self, key: &SignifierKey<'_>, role: Role) -> Result<Endpoint> {
        self.reject_foreign(key)?;
        if let Some(id) = self.resolve_id(key) {
            return Ok(Endpoint::Existing(id));
        }

        let text = match key {
            SignifierKey::Id(_) => None,
            SignifierKey::Text(text) => Some(&**text),
        };

        match (role, text) {
            (Role::Nomen | Role::Copula, Some(text)) => {
                Ok(Endpoint::Create(self.validate_new_qname(text)?))
            }
            (Role::Attributum, Some(text)) if QName::is_qname_shaped(text) => {
                Ok(Endpoint::Create(self.validate_new_qname(text)?))
            }
            (Role::Attributum, Some(text)) if !text.is_empty() => {
                Ok(Endpoint::Literal(text.to_string()))
            }
            _ => Err(Error::InvalidEndpoint {
                role,
                value: key.to_string(),
            }),
        }
    }

    fn commit_endpoint(&mut self, endpoint: Endpoint, pref_label: Option<&str>) -> Result<SignifierId> {
        match endpoint {
            Endpoint::Existing(id) => Ok(id),
            Endpoint::Create(qname) => self.add_signifier(&qname.to_qname_string(), pref_label, None),
            Endpoint::Literal(value) => Err(Error::InvalidEndpoint {
                role: Role::Attributum,
                value,
            }),
        }
    }

    /// Get an axiom by its id
    pub fn get_axiom(&self, id: AxiomId) -> Option<&Axiom> {
        if id.registry() != self.tag {
            return None;
        }
        self.axioms.get(id.index())
    }

    /// All axioms in insertion order
    pub fn axioms(&self) -> &[Axiom] {
        &self.axioms
    }

    /// Axioms whose attributum is exactly this literal.
    ///
    /// Linear scan; no literal index is kept.
    pub fn get_axioms_with_literal_as_attributum(&self, literal: &str) -> Vec<&Axiom> {
        self.axioms.iter().filter(|a| a.has_literal(literal)).collect()
    }

    /// Axioms referenced from a signifier's reverse list for `role`
    pub fn axioms_for(&self, id: SignifierId, role: Role) -> Vec<&Axiom> {
        self.get_signifier(id)
            .map(|s| {
                s.axioms_as(role)
                    .iter()
                    .filter_map(|axiom| self.get_axiom(*axiom))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Render an axiom with the labels of its endpoints
    pub fn view<'r>(&'r self, axiom: &'r Axiom) -> AxiomView<'r> {
        AxiomView::new(self, axiom)
    }
}
