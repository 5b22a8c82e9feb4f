//! Disjointness sets
//!
//! A disjointness set lets each (nomen, copula) pair take at most one of its
//! members as attributum.

use crate::signifier::SignifierId;

/// A named "choose at most one" group of attributa.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DisjointSet {
    name: String,
    members: Vec<SignifierId>,
    /// (nomen, copula) pairs already holding a member
    assigned: Vec<(SignifierId, SignifierId)>,
}

impl DisjointSet {
    pub(crate) fn new(name: String, members: Vec<SignifierId>) -> Self {
        Self {
            name,
            members,
            assigned: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[SignifierId] {
        &self.members
    }

    pub fn assigned_pairs(&self) -> &[(SignifierId, SignifierId)] {
        &self.assigned
    }

    pub fn contains(&self, id: SignifierId) -> bool {
        self.members.contains(&id)
    }

    /// Whether this (nomen, copula) pair already holds a member
    pub fn is_assigned(&self, nomen: SignifierId, copula: SignifierId) -> bool {
        self.assigned.contains(&(nomen, copula))
    }

    pub(crate) fn assign(&mut self, nomen: SignifierId, copula: SignifierId) {
        self.assigned.push((nomen, copula));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_is_per_pair() {
        let members = vec![SignifierId::new(0, 1), SignifierId::new(0, 2)];
        let mut set = DisjointSet::new("{:Alive, :Dead}".to_string(), members);
        assert!(set.contains(SignifierId::new(0, 1)));
        assert!(!set.contains(SignifierId::new(0, 3)));

        set.assign(SignifierId::new(0, 10), SignifierId::new(0, 20));
        assert!(set.is_assigned(SignifierId::new(0, 10), SignifierId::new(0, 20)));
        assert!(!set.is_assigned(SignifierId::new(0, 11), SignifierId::new(0, 20)));
        assert!(!set.is_assigned(SignifierId::new(0, 10), SignifierId::new(0, 21)));
        assert_eq!(set.assigned_pairs().len(), 1);
    }
}
