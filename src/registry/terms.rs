//! Term registry - namespaces and signifiers
//!
//! A QName is a unique key: registering it twice returns the first signifier
//! untouched. PrefLabels are not unique here; the label index maps a label to
//! every signifier carrying it.

use super::{Registry, next_index};
use crate::qname::QName;
use crate::signifier::{Participation, Signifier, SignifierId, SignifierKey};
use crate::{Error, Result};

impl Registry {
    /// Register (or overwrite) a namespace prefix.
    ///
    /// The empty prefix names the default namespace. Returns the prefix.
    pub fn add_namespace(&mut self, prefix: &str, uri: &str) -> Result<String> {
        if prefix.contains(':') {
            return Err(Error::InvalidPrefix(prefix.to_string()));
        }
        tracing::debug!(prefix, uri, "namespace registered");
        self.namespaces.insert(prefix.to_string(), uri.to_string());
        Ok(prefix.to_string())
    }

    /// URI registered for a prefix
    pub fn namespace_uri(&self, prefix: &str) -> Option<&str> {
        self.namespaces.get(prefix).map(String::as_str)
    }

    /// All (prefix, URI) pairs, ordered by prefix
    pub fn namespaces(&self) -> impl Iterator<Item = (&str, &str)> {
        self.namespaces.iter().map(|(p, u)| (p.as_str(), u.as_str()))
    }

    /// Parse a QName for a new signifier and check its prefix is registered
    pub(crate) fn validate_new_qname(&self, qname: &str) -> Result<QName> {
        let parsed = QName::parse(qname)?;
        if !parsed.is_default_namespace() && !self.namespaces.contains_key(parsed.prefix()) {
            return Err(Error::UnknownNamespace {
                prefix: parsed.prefix().to_string(),
                qname: qname.to_string(),
            });
        }
        Ok(parsed)
    }

    /// Register a signifier, or return the existing one with this QName.
    ///
    /// On a repeat call the label and participation arguments are ignored.
    pub fn add_signifier(
        &mut self,
        qname: &str,
        pref_label: Option<&str>,
        participation: Option<Participation>,
    ) -> Result<SignifierId> {
        if let Some(id) = self.by_qname.get(qname) {
            return Ok(*id);
        }

        let parsed = self.validate_new_qname(qname)?;
        let id = SignifierId::new(self.tag, next_index(self.signifiers.len(), "signifiers")?);
        let signifier = Signifier::new(id, parsed, pref_label, participation);

        tracing::debug!(
            qname,
            label = signifier.pref_label(),
            participation = %signifier.participation(),
            "signifier registered"
        );

        self.by_label
            .entry(signifier.pref_label().to_string())
            .or_default()
            .push(id);
        self.by_qname.insert(qname.to_string(), id);
        self.signifiers.push(signifier);
        Ok(id)
    }

    /// Look up a signifier by handle or QName.
    ///
    /// A handle issued by another registry, or out of range, resolves to `None`.
    pub fn get_signifier<'k>(&self, key: impl Into<SignifierKey<'k>>) -> Option<&Signifier> {
        self.resolve_id(&key.into()).map(|id| &self.signifiers[id.index()])
    }

    /// Every signifier carrying this prefLabel, in registration order
    pub fn get_signifiers_for_pref_label(&self, label: &str) -> Vec<&Signifier> {
        self.by_label
            .get(label)
            .map(|ids| ids.iter().map(|id| &self.signifiers[id.index()]).collect())
            .unwrap_or_default()
    }

    /// Change the prefLabel of an existing signifier
    pub fn set_pref_label<'k>(&mut self, key: impl Into<SignifierKey<'k>>, label: &str) -> Result<()> {
        let key = key.into();
        self.reject_foreign(&key)?;
        let id = self
            .resolve_id(&key)
            .ok_or_else(|| Error::UnknownSignifier(key.to_string()))?;
        if label.is_empty() {
            return Err(Error::InvalidArgument("prefLabel must not be empty".to_string()));
        }

        let old = self.signifiers[id.index()].pref_label().to_string();
        if old == label {
            return Ok(());
        }

        if let Some(ids) = self.by_label.get_mut(&old) {
            ids.retain(|existing| *existing != id);
            if ids.is_empty() {
                self.by_label.remove(&old);
            }
        }
        self.by_label.entry(label.to_string()).or_default().push(id);
        self.signifiers[id.index()].set_pref_label(label.to_string());

        tracing::debug!(old = %old, new = label, "prefLabel changed");
        Ok(())
    }

    /// All signifiers in registration order
    pub fn signifiers(&self) -> impl Iterator<Item = &Signifier> {
        self.signifiers.iter()
    }

    pub(crate) fn resolve_id(&self, key: &SignifierKey<'_>) -> Option<SignifierId> {
        match key {
            SignifierKey::Id(id) => {
                (id.registry() == self.tag && id.index() < self.signifiers.len()).then_some(*id)
            }
            SignifierKey::Text(text) => self.by_qname.get(&**text).copied(),
        }
    }

    /// Refuse a handle issued by another registry
    pub(crate) fn reject_foreign(&self, key: &SignifierKey<'_>) -> Result<()> {
        match key {
            SignifierKey::Id(id) if id.registry() != self.tag => Err(Error::InvalidArgument(
                format!("signifier handle {id} was issued by another registry"),
            )),
            _ => Ok(()),
        }
    }

    pub(crate) fn signifier_mut(&mut self, id: SignifierId) -> &mut Signifier {
        &mut self.signifiers[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry.add_namespace("", "http://www.example.org/default#").unwrap();
        registry.add_namespace("grox", "http://www.grox.info/").unwrap();
        registry.add_namespace("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#").unwrap();
        registry
    }

    #[test]
    fn test_namespace_prefix_rejects_colon() {
        let mut registry = Registry::new();
        let err = registry.add_namespace("a:b", "http://x/").unwrap_err();
        assert!(matches!(err, Error::InvalidPrefix(_)));
        assert!(registry.add_namespace(":", "http://x/").is_err());
    }

    #[test]
    fn test_namespace_overwrite() {
        let mut registry = Registry::new();
        assert_eq!(registry.add_namespace("ex", "http://one/").unwrap(), "ex");
        registry.add_namespace("ex", "http://two/").unwrap();
        assert_eq!(registry.namespace_uri("ex"), Some("http://two/"));
        assert_eq!(registry.namespaces().count(), 1);
    }

    #[test]
    fn test_idempotent_registration() {
        let mut registry = registry();
        let first = registry.add_signifier(":Sam", None, None).unwrap();
        let second = registry
            .add_signifier(":Sam", Some("Samuel"), Some(Participation::Copula))
            .unwrap();
        assert_eq!(first, second);

        let sam = registry.get_signifier(first).unwrap();
        assert_eq!(sam.pref_label(), "Sam");
        assert_eq!(sam.participation(), Participation::NomenAttributum);
        assert_eq!(registry.signifiers().count(), 1);
    }

    #[test]
    fn test_qname_validation() {
        let mut registry = registry();
        for bad in ["", "Sam", "grox:a:b", "grox:", ":"] {
            let err = registry.add_signifier(bad, None, None).unwrap_err();
            assert!(matches!(err, Error::InvalidQName(_)), "{bad}");
        }
        assert!(registry.add_signifier("grox:Wally", Some("Wallace"), None).is_ok());
        assert!(registry.add_signifier(":Jimmy", None, None).is_ok());
    }

    #[test]
    fn test_unregistered_prefix() {
        let mut registry = registry();
        let err = registry.add_signifier("foaf:Person", None, None).unwrap_err();
        match err {
            Error::UnknownNamespace { prefix, qname } => {
                assert_eq!(prefix, "foaf");
                assert_eq!(qname, "foaf:Person");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(registry.get_signifier("foaf:Person").is_none());
    }

    #[test]
    fn test_default_namespace_needs_no_registration() {
        let mut registry = Registry::new();
        let id = registry.add_signifier(":Sam", None, None).unwrap();
        assert_eq!(registry.get_signifier(":Sam").unwrap().id(), id);
    }

    #[test]
    fn test_get_signifier_by_handle_or_signifier() {
        let mut registry = registry();
        let id = registry.add_signifier("grox:Wally", Some("Wallace"), None).unwrap();

        let by_qname = registry.get_signifier("grox:Wally").unwrap();
        let by_id = registry.get_signifier(id).unwrap();
        assert_eq!(by_qname.id(), by_id.id());

        let again = registry.get_signifier(by_qname).unwrap();
        assert_eq!(again.id(), id);

        assert!(registry.get_signifier(SignifierId::new(registry.tag(), 99)).is_none());
        assert!(registry.get_signifier("Wallace").is_none());
    }

    #[test]
    fn test_signifier_from_other_registry_resolves_by_qname() {
        let mut a = registry();
        let mut b = registry();
        b.add_signifier(":Other", None, None).unwrap();
        let sam_in_b = b.add_signifier(":Sam", None, None).unwrap();
        let sam_in_a = a.add_signifier(":Sam", None, None).unwrap();

        let foreign = b.get_signifier(sam_in_b).unwrap();
        assert_eq!(a.get_signifier(foreign).unwrap().id(), sam_in_a);

        let other = b.get_signifier(":Other").unwrap();
        assert!(a.get_signifier(other).is_none());
    }

    #[test]
    fn test_handle_from_other_registry_is_refused() {
        let mut a = registry();
        let mut b = registry();
        a.add_signifier(":Alice", None, None).unwrap();
        let bob_in_b = b.add_signifier(":Bob", None, None).unwrap();

        // Same position in both arenas, different registries
        assert_eq!(bob_in_b.index(), 0);
        assert!(a.get_signifier(bob_in_b).is_none());
        assert!(matches!(
            a.set_pref_label(bob_in_b, "Robert"),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(a.get_signifier(":Alice").unwrap().pref_label(), "Alice");
    }

    #[test]
    fn test_duplicate_labels_allowed() {
        let mut registry = registry();
        registry.add_signifier("grox:type", Some("isA"), None).unwrap();
        registry.add_signifier("rdf:type", Some("isA"), Some(Participation::Copula)).unwrap();

        let found = registry.get_signifiers_for_pref_label("isA");
        let qnames: Vec<String> = found.iter().map(|s| s.qname().to_string()).collect();
        assert_eq!(qnames, vec!["grox:type", "rdf:type"]);
        assert!(registry.get_signifiers_for_pref_label("nothing").is_empty());
    }

    #[test]
    fn test_set_pref_label_moves_index_entry() {
        let mut registry = registry();
        let id = registry.add_signifier("grox:Wally", None, None).unwrap();
        registry.set_pref_label(id, "Wallace").unwrap();

        assert_eq!(registry.get_signifier(id).unwrap().pref_label(), "Wallace");
        assert!(registry.get_signifiers_for_pref_label("Wally").is_empty());
        assert_eq!(registry.get_signifiers_for_pref_label("Wallace").len(), 1);

        assert!(matches!(
            registry.set_pref_label("grox:Nobody", "x"),
            Err(Error::UnknownSignifier(_))
        ));
        assert!(matches!(
            registry.set_pref_label(id, ""),
            Err(Error::InvalidArgument(_))
        ));
    }
}
