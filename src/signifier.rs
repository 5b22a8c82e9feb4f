//! Signifier types - uniquely identified terms
//!
//! A signifier can occupy three roles in an axiom:
//! - `Nomen`: the subject position
//! - `Copula`: the relation position
//! - `Attributum`: the object position
//!
//! [`Participation`] records which of those roles a signifier is expected to play.

use crate::axiom::{AxiomId, Attributum};
use crate::qname::QName;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::str::FromStr;

/// The three positions of an axiom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Subject position
    Nomen,
    /// Relation position
    Copula,
    /// Object position
    Attributum,
}

impl Role {
    /// Get the string representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Nomen => "nomen",
            Role::Copula => "copula",
            Role::Attributum => "attributum",
        }
    }

    fn bit(&self) -> u8 {
        match self {
            Role::Nomen => 1,
            Role::Copula => 2,
            Role::Attributum => 4,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which roles a signifier participates in.
///
/// Each variant is a combination of the nomen (1), copula (2) and
/// attributum (4) bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Participation {
    Nomen,
    Copula,
    NomenCopula,
    Attributum,
    #[default]
    NomenAttributum,
    CopulaAttributum,
    NomenCopulaAttributum,
}

impl Participation {
    /// Get the string representation of the participation
    pub fn as_str(&self) -> &'static str {
        match self {
            Participation::Nomen => "NOMEN",
            Participation::Copula => "COPULA",
            Participation::NomenCopula => "NOMEN_COPULA",
            Participation::Attributum => "ATTRIBUTUM",
            Participation::NomenAttributum => "NOMEN_ATTRIBUTUM",
            Participation::CopulaAttributum => "COPULA_ATTRIBUTUM",
            Participation::NomenCopulaAttributum => "NOMEN_COPULA_ATTRIBUTUM",
        }
    }

    /// Get all participations, in bit order
    pub fn all() -> &'static [Participation] {
        &[
            Participation::Nomen,
            Participation::Copula,
            Participation::NomenCopula,
            Participation::Attributum,
            Participation::NomenAttributum,
            Participation::CopulaAttributum,
            Participation::NomenCopulaAttributum,
        ]
    }

    /// Bitset value (1..=7)
    pub fn bits(&self) -> u8 {
        match self {
            Participation::Nomen => 1,
            Participation::Copula => 2,
            Participation::NomenCopula => 3,
            Participation::Attributum => 4,
            Participation::NomenAttributum => 5,
            Participation::CopulaAttributum => 6,
            Participation::NomenCopulaAttributum => 7,
        }
    }

    /// Inverse of [`Participation::bits`]; `None` for 0 or values above 7
    pub fn from_bits(bits: u8) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.bits() == bits)
    }

    /// Whether this participation includes the given role
    pub fn allows(&self, role: Role) -> bool {
        self.bits() & role.bit() != 0
    }
}

impl FromStr for Participation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if let Ok(bits) = s.parse::<u8>() {
            return Self::from_bits(bits)
                .ok_or_else(|| Error::InvalidArgument(format!("Unknown participation: {s}")));
        }

        let mut bits = 0u8;
        for part in s.split(['+', '_', '|', ' ']).filter(|p| !p.is_empty()) {
            bits |= match part.to_lowercase().as_str() {
                "nomen" | "subject" => Role::Nomen.bit(),
                "copula" | "predicate" => Role::Copula.bit(),
                "attributum" | "object" => Role::Attributum.bit(),
                _ => return Err(Error::InvalidArgument(format!("Unknown participation: {s}"))),
            };
        }
        Self::from_bits(bits)
            .ok_or_else(|| Error::InvalidArgument(format!("Unknown participation: {s}")))
    }
}

impl std::fmt::Display for Participation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Handle of a signifier: its position inside the registry that issued it.
///
/// The handle carries the issuing registry's tag; any other registry refuses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SignifierId {
    registry: u32,
    index: u32,
}

impl SignifierId {
    pub(crate) const fn new(registry: u32, index: u32) -> Self {
        Self { registry, index }
    }

    /// Position in the issuing registry
    pub fn index(self) -> usize {
        self.index as usize
    }

    pub(crate) fn registry(self) -> u32 {
        self.registry
    }
}

impl std::fmt::Display for SignifierId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// Anything that can name a signifier at the API boundary.
///
/// `Id` is a handle previously returned by the same registry. `Text` is a
/// QName, a prefLabel, or (for attributa) a literal, depending on the operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignifierKey<'a> {
    Id(SignifierId),
    Text(Cow<'a, str>),
}

impl SignifierKey<'_> {
    /// The textual form, if this key is not a handle
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SignifierKey::Id(_) => None,
            SignifierKey::Text(text) => Some(text),
        }
    }
}

impl std::fmt::Display for SignifierKey<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignifierKey::Id(id) => write!(f, "{id}"),
            SignifierKey::Text(text) => write!(f, "{text}"),
        }
    }
}

impl From<SignifierId> for SignifierKey<'static> {
    fn from(id: SignifierId) -> Self {
        SignifierKey::Id(id)
    }
}

impl<'a> From<&'a str> for SignifierKey<'a> {
    fn from(text: &'a str) -> Self {
        SignifierKey::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for SignifierKey<'a> {
    fn from(text: &'a String) -> Self {
        SignifierKey::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for SignifierKey<'static> {
    fn from(text: String) -> Self {
        SignifierKey::Text(Cow::Owned(text))
    }
}

/// A signifier taken from any registry is re-resolved by its QName.
impl From<&Signifier> for SignifierKey<'static> {
    fn from(signifier: &Signifier) -> Self {
        SignifierKey::Text(Cow::Owned(signifier.qname.to_qname_string()))
    }
}

/// A uniquely identified term.
///
/// The QName is fixed at creation. The prefLabel is the only mutable field and
/// changes go through the owning registry so its label index stays consistent.
/// The reverse-reference lists only grow.
#[derive(Debug, Clone, Serialize)]
pub struct Signifier {
    id: SignifierId,
    qname: QName,
    pref_label: String,
    participation: Participation,
    as_nomen: Vec<AxiomId>,
    as_copula: Vec<AxiomId>,
    as_attributum: Vec<AxiomId>,
    /// copulaLabel -> most recent attributum of an axiom with this as nomen
    #[serde(skip)]
    attributa_by_label: HashMap<String, Attributum>,
}

impl Signifier {
    /// Create a signifier; the prefLabel defaults to the QName's local part
    pub(crate) fn new(
        id: SignifierId,
        qname: QName,
        pref_label: Option<&str>,
        participation: Option<Participation>,
    ) -> Self {
        let pref_label = match pref_label {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => qname.local().to_string(),
        };

        Self {
            id,
            qname,
            pref_label,
            participation: participation.unwrap_or_default(),
            as_nomen: Vec::new(),
            as_copula: Vec::new(),
            as_attributum: Vec::new(),
            attributa_by_label: HashMap::new(),
        }
    }

    pub fn id(&self) -> SignifierId {
        self.id
    }

    pub fn qname(&self) -> &QName {
        &self.qname
    }

    pub fn pref_label(&self) -> &str {
        &self.pref_label
    }

    pub fn participation(&self) -> Participation {
        self.participation
    }

    /// Axioms with this signifier as nomen, in insertion order
    pub fn axioms_as_nomen(&self) -> &[AxiomId] {
        &self.as_nomen
    }

    /// Axioms with this signifier as copula, in insertion order
    pub fn axioms_as_copula(&self) -> &[AxiomId] {
        &self.as_copula
    }

    /// Axioms with this signifier as attributum, in insertion order
    pub fn axioms_as_attributum(&self) -> &[AxiomId] {
        &self.as_attributum
    }

    /// Reverse-reference list for a role
    pub fn axioms_as(&self, role: Role) -> &[AxiomId] {
        match role {
            Role::Nomen => &self.as_nomen,
            Role::Copula => &self.as_copula,
            Role::Attributum => &self.as_attributum,
        }
    }

    /// The attributum last asserted for this nomen under `copula_label`.
    ///
    /// Last write wins when several axioms share nomen and label.
    pub fn attributum_for(&self, copula_label: &str) -> Option<&Attributum> {
        self.attributa_by_label.get(copula_label)
    }

    /// All copula labels with a projected attributum
    pub fn copula_labels(&self) -> impl Iterator<Item = &str> {
        self.attributa_by_label.keys().map(String::as_str)
    }

    pub(crate) fn set_pref_label(&mut self, label: String) {
        self.pref_label = label;
    }

    pub(crate) fn notify_as_nomen(&mut self, axiom: AxiomId, copula_label: &str, attributum: &Attributum) {
        self.as_nomen.push(axiom);
        self.attributa_by_label
            .insert(copula_label.to_string(), attributum.clone());
    }

    pub(crate) fn notify_as_copula(&mut self, axiom: AxiomId) {
        self.as_copula.push(axiom);
    }

    pub(crate) fn notify_as_attributum(&mut self, axiom: AxiomId) {
        self.as_attributum.push(axiom);
    }
}

impl std::fmt::Display for Signifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Signifier: QName = {}, prefLabel = {}, participation = {}",
            self.qname, self.pref_label, self.participation
        )
    }
}

impl PartialEq for Signifier {
    fn eq(&self, other: &Self) -> bool {
        self.qname == other.qname
    }
}

impl Eq for Signifier {}

impl std::hash::Hash for Signifier {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.qname.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participation_bits_roundtrip() {
        for p in Participation::all() {
            assert_eq!(Participation::from_bits(p.bits()), Some(*p));
        }
        assert_eq!(Participation::from_bits(0), None);
        assert_eq!(Participation::from_bits(8), None);
    }

    #[test]
    fn test_participation_default_and_roles() {
        let p = Participation::default();
        assert_eq!(p, Participation::NomenAttributum);
        assert!(p.allows(Role::Nomen));
        assert!(!p.allows(Role::Copula));
        assert!(p.allows(Role::Attributum));
        assert!(Participation::CopulaAttributum.allows(Role::Copula));
    }

    #[test]
    fn test_participation_parse() {
        assert_eq!("copula".parse::<Participation>().unwrap(), Participation::Copula);
        assert_eq!(
            "nomen+copula+attributum".parse::<Participation>().unwrap(),
            Participation::NomenCopulaAttributum
        );
        assert_eq!(
            "COPULA_ATTRIBUTUM".parse::<Participation>().unwrap(),
            Participation::CopulaAttributum
        );
        assert_eq!("5".parse::<Participation>().unwrap(), Participation::NomenAttributum);
        assert!("verb".parse::<Participation>().is_err());
        assert!("0".parse::<Participation>().is_err());
    }

    #[test]
    fn test_signifier_label_defaults_to_local_part() {
        let qname = QName::parse("grox:Wally").unwrap();
        let s = Signifier::new(SignifierId::new(0, 0), qname, None, None);
        assert_eq!(s.pref_label(), "Wally");
        assert_eq!(s.participation(), Participation::NomenAttributum);

        let qname = QName::parse(":Sam").unwrap();
        let s = Signifier::new(SignifierId::new(0, 1), qname, Some("Samuel"), Some(Participation::Nomen));
        assert_eq!(s.pref_label(), "Samuel");
        assert_eq!(s.participation(), Participation::Nomen);
    }

    #[test]
    fn test_key_from_signifier_uses_qname() {
        let s = Signifier::new(SignifierId::new(0, 3), QName::parse("rdf:type").unwrap(), Some("isA"), None);
        let key = SignifierKey::from(&s);
        assert_eq!(key.as_text(), Some("rdf:type"));
        assert_eq!(SignifierKey::from(SignifierId::new(0, 3)).as_text(), None);
    }
}
