//! Vocabulary documents
//!
//! A TOML file describing namespaces, signifiers, disjointness sets and axioms
//! to bulk-load into a [`Grammar`]. Sections apply in that order, so a
//! disjointness set declared in a document already governs the document's
//! own axioms.
//!
//! ```toml
//! [namespaces]
//! "" = "http://www.example.org/default#"
//!
//! [[signifiers]]
//! qname = ":Red"
//!
//! [[disjoint]]
//! members = [":Red", ":Green"]
//!
//! [[axioms]]
//! nomen = ":Apple"
//! copula = ":hasColor"
//! attributum = ":Red"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::grammar::Grammar;
use crate::registry::Signature;
use crate::signifier::Participation;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocabularyDocument {
    /// prefix -> URI; the empty prefix is the default namespace
    #[serde(default)]
    pub namespaces: BTreeMap<String, String>,
    #[serde(default)]
    pub signifiers: Vec<SignifierRecord>,
    #[serde(default)]
    pub disjoint: Vec<DisjointRecord>,
    #[serde(default)]
    pub axioms: Vec<AxiomRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignifierRecord {
    pub qname: String,
    pub label: Option<String>,
    pub participation: Option<Participation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxiomRecord {
    pub nomen: String,
    pub copula: String,
    pub attributum: String,
    /// Alternate copula label
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisjointRecord {
    pub members: Vec<String>,
}

/// Outcome of applying a document
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadReport {
    pub applied: usize,
    pub skipped: Vec<SkippedRecord>,
}

/// A record that failed to apply in lenient mode
#[derive(Debug, Clone, Serialize)]
pub struct SkippedRecord {
    pub section: &'static str,
    pub index: usize,
    pub reason: String,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    fn record<T>(
        &mut self,
        section: &'static str,
        index: usize,
        result: crate::Result<T>,
        strict: bool,
    ) -> crate::Result<()> {
        match result {
            Ok(_) => {
                self.applied += 1;
                Ok(())
            }
            Err(e) if strict => Err(e),
            Err(e) => {
                tracing::warn!(section, index, error = %e, "skipping record");
                self.skipped.push(SkippedRecord {
                    section,
                    index,
                    reason: e.to_string(),
                });
                Ok(())
            }
        }
    }
}

impl std::fmt::Display for LoadReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Applied: {}", self.applied)?;
        writeln!(f, "Skipped: {}", self.skipped.len())?;
        for skipped in &self.skipped {
            writeln!(f, "  [{}#{}] {}", skipped.section, skipped.index, skipped.reason)?;
        }
        Ok(())
    }
}

impl VocabularyDocument {
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("Invalid vocabulary document")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Apply every record to the grammar.
    ///
    /// In strict mode the first failing record aborts with its error; records
    /// before it stay applied. Otherwise failures are collected in the report.
    pub fn apply<S: Signature>(
        &self,
        grammar: &mut Grammar<S>,
        strict: bool,
    ) -> crate::Result<LoadReport> {
        let mut report = LoadReport::default();

        for (index, (prefix, uri)) in self.namespaces.iter().enumerate() {
            let result = grammar.add_namespace(prefix, uri);
            report.record("namespaces", index, result, strict)?;
        }

        for (index, record) in self.signifiers.iter().enumerate() {
            let result = grammar.add_signifier(
                &record.qname,
                record.label.as_deref(),
                record.participation,
            );
            report.record("signifiers", index, result, strict)?;
        }

        for (index, record) in self.disjoint.iter().enumerate() {
            let members = record.members.iter().map(String::as_str);
            let result = grammar.add_disjoint_attributum_set(members);
            report.record("disjoint", index, result, strict)?;
        }

        for (index, record) in self.axioms.iter().enumerate() {
            let result = grammar.add_axiom(
                record.nomen.as_str(),
                record.copula.as_str(),
                record.attributum.as_str(),
                record.label.as_deref(),
            );
            report.record("axioms", index, result, strict)?;
        }

        tracing::debug!(applied = report.applied, skipped = report.skipped.len(), "document applied");
        Ok(report)
    }
}
