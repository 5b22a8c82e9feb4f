//! Built-in vocabulary seeded into every grammar
//!
//! Pure data: well-known namespaces, the core copulas, and the
//! categorization terms layered on top of them.

/// Well-known namespace prefixes registered at grammar construction
pub const CORE_NAMESPACES: &[(&str, &str)] = &[
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("dc", "http://purl.org/dc/elements/1.1/"),
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("ex", "http://www.example.org/"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
    ("skos", "http://www.w3.org/2004/02/skos/core#"),
    ("foaf", "http://xmlns.com/foaf/0.1/"),
    ("grox", "http://www.grox.info/"),
];

/// Family a core copula belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CopulaFamily {
    /// Symmetric copulas of particularization and generalization
    Generalization,
    /// Asymmetric copulas of traits
    Trait,
    /// Symmetric copulas of existence (a particular situated in a domain)
    Existence,
}

impl CopulaFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            CopulaFamily::Generalization => "generalization",
            CopulaFamily::Trait => "trait",
            CopulaFamily::Existence => "existence",
        }
    }
}

/// One built-in copula
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct CoreCopula {
    pub qname: &'static str,
    pub label: &'static str,
    pub family: CopulaFamily,
}

const fn copula(qname: &'static str, label: &'static str, family: CopulaFamily) -> CoreCopula {
    CoreCopula { qname, label, family }
}

/// Label of the copula linking categorization terms to their generalization copula
pub const GEN_TRAIT_GEN: &str = "genTraitGen";

pub const CORE_COPULAS: &[CoreCopula] = &[
    copula("grox:iT4tYHw9xJVf65egdT1hOtNu", "partWrtGen", CopulaFamily::Generalization),
    copula("grox:Fy28scb0taxYGdYeexBx3365", "genWrtPart", CopulaFamily::Generalization),
    copula("grox:LY41ZUMrKdPh9G3w6b2rxFUY", "subGenWrtSuperGen", CopulaFamily::Generalization),
    copula("grox:QT64ORWiazZEsiU9k2pfhDUf", "superGenWrtSubGen", CopulaFamily::Generalization),
    copula("grox:QQ46Ef5vecHgr6ctohqU1pTo", "subGenWrtTopDomain", CopulaFamily::Generalization),
    copula("grox:Wb4bglkQ9PrEt3C7y0YCOqpA", "topDomainWrtsubGen", CopulaFamily::Generalization),
    copula("grox:Kr7rkKhBHnxEo2OIddayrxZr", "partTraitPart", CopulaFamily::Trait),
    copula("grox:SW6KX6Y8QRKPpzEoJYoAD4Ya", "partTraitGen", CopulaFamily::Trait),
    copula("grox:Ov4ItKWDuLMVUAlrbDfgBXkW", "genTraitPart", CopulaFamily::Trait),
    copula("grox:WW6JqN8iMmQcvwrRYxDub7N7", GEN_TRAIT_GEN, CopulaFamily::Trait),
    copula("grox:VW4TIqnPANbf73SKLB1pXWr0", "partWrtTopDomain", CopulaFamily::Existence),
    copula("grox:mi1vJ1s5GHf2dD8lswGIyddE", "topDomainWrtPart", CopulaFamily::Existence),
];

/// A categorization term and the label of the generalization copula it specializes
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct CategorizationTerm {
    pub qname: &'static str,
    pub label: &'static str,
    pub generalizes: &'static str,
}

const fn term(qname: &'static str, label: &'static str, generalizes: &'static str) -> CategorizationTerm {
    CategorizationTerm { qname, label, generalizes }
}

pub const CATEGORIZATION_TERMS: &[CategorizationTerm] = &[
    term("grox:XJ3h0vQrSCvcqech7CwpXHZ0", "specimenWrtSpecies", "partWrtGen"),
    term("grox:WK0CjxWXN1z9mhoT5SSsNP2U", "speciesWrtSpecimen", "genWrtPart"),
    term("grox:H57135RLXgbxpQdKYVI94my1", "subSpeciesWrtSuperSpecies", "subGenWrtSuperGen"),
    term("grox:sA0oWPZh76OPzJontiufRvS5", "superSpeciesWrtSubSpecies", "superGenWrtSubGen"),
    term("grox:xo57ra1o9uvkpd1amXFtLRZg", "subSpeciesWrtTopDomain", "subGenWrtTopDomain"),
    term("grox:U02oAeuYZgCvsroCSF1N49J9", "topDomainWrtSubSpecies", "topDomainWrtsubGen"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_core_labels_are_distinct() {
        let labels: HashSet<_> = CORE_COPULAS.iter().map(|c| c.label).collect();
        assert_eq!(labels.len(), CORE_COPULAS.len());
    }

    #[test]
    fn test_categorization_targets_exist() {
        for term in CATEGORIZATION_TERMS {
            assert!(
                CORE_COPULAS.iter().any(|c| c.label == term.generalizes),
                "{} has no core copula",
                term.label
            );
        }
    }

    #[test]
    fn test_core_copulas_use_seeded_prefix() {
        for c in CORE_COPULAS {
            let prefix = c.qname.split(':').next().unwrap();
            assert!(CORE_NAMESPACES.iter().any(|(p, _)| *p == prefix));
        }
    }
}
