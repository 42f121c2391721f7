//! URL access policy: an ordered rule table evaluated first-match-wins.
//!
//! The table is fixed at startup. Ordering is load-bearing: rules MUST be
//! declared from most specific to most general, otherwise an early catch-all
//! shadows everything after it (see `rule_order_is_significant`).

mod pattern;

pub use pattern::PathPattern;

use crate::services::auth::principal::Principal;

/// What a matched rule demands of the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    Public,
    Authenticated,
    HasRole(String),
}

#[derive(Debug, Clone)]
pub struct AccessRule {
    pattern: PathPattern,
    requirement: Requirement,
}

impl AccessRule {
    pub fn new(pattern: &str, requirement: Requirement) -> Self {
        Self {
            pattern: PathPattern::parse(pattern),
            requirement,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// No principal, but the path requires one. Maps to 401.
    Unauthenticated,
    /// A principal is present but lacks the required role. Maps to 403.
    Forbidden,
}

#[derive(Debug, Clone)]
pub struct AccessPolicy {
    rules: Vec<AccessRule>,
}

impl AccessPolicy {
    pub fn new(rules: Vec<AccessRule>) -> Self {
        Self { rules }
    }

    /// The policy this service ships with: the token endpoint is public,
    /// the admin subtree needs ADMIN, everything else needs some principal.
    pub fn standard() -> Self {
        Self::new(vec![
            AccessRule::new("/authenticate", Requirement::Public),
            AccessRule::new("/admin/**", Requirement::HasRole("ADMIN".to_string())),
            AccessRule::new("/**", Requirement::Authenticated),
        ])
    }

    /// Decide whether `principal` may reach `path`.
    ///
    /// Pure: no side effects, no principal mutation. A path no rule matches
    /// is denied (unauthenticated callers get 401, authenticated ones 403).
    pub fn decide(&self, path: &str, principal: Option<&Principal>) -> Decision {
        for rule in &self.rules {
            if !rule.pattern.matches(path) {
                continue;
            }
            return match &rule.requirement {
                Requirement::Public => Decision::Allow,
                Requirement::Authenticated => match principal {
                    Some(_) => Decision::Allow,
                    None => Decision::Deny(DenyReason::Unauthenticated),
                },
                Requirement::HasRole(role) => match principal {
                    None => Decision::Deny(DenyReason::Unauthenticated),
                    Some(p) if p.has_role(role) => Decision::Allow,
                    Some(_) => Decision::Deny(DenyReason::Forbidden),
                },
            };
        }

        match principal {
            None => Decision::Deny(DenyReason::Unauthenticated),
            Some(_) => Decision::Deny(DenyReason::Forbidden),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> Principal {
        Principal::new("carol", vec!["USER".to_string()])
    }

    fn admin() -> Principal {
        Principal::new("root", vec!["USER".to_string(), "ADMIN".to_string()])
    }

    #[test]
    fn authenticate_is_public_regardless_of_principal() {
        let policy = AccessPolicy::standard();
        assert_eq!(policy.decide("/authenticate", None), Decision::Allow);
        assert_eq!(policy.decide("/authenticate", Some(&user())), Decision::Allow);
        assert_eq!(policy.decide("/authenticate", Some(&admin())), Decision::Allow);
    }

    #[test]
    fn admin_subtree_requires_admin_role() {
        let policy = AccessPolicy::standard();

        assert_eq!(
            policy.decide("/admin/reports", None),
            Decision::Deny(DenyReason::Unauthenticated)
        );
        assert_eq!(
            policy.decide("/admin/reports", Some(&user())),
            Decision::Deny(DenyReason::Forbidden)
        );
        assert_eq!(policy.decide("/admin/reports", Some(&admin())), Decision::Allow);
        // `/admin/**` covers the subtree root and deeper paths alike.
        assert_eq!(policy.decide("/admin", Some(&admin())), Decision::Allow);
        assert_eq!(
            policy.decide("/admin/reports/2024/q1", Some(&user())),
            Decision::Deny(DenyReason::Forbidden)
        );
    }

    #[test]
    fn any_other_path_requires_some_principal() {
        let policy = AccessPolicy::standard();

        assert_eq!(
            policy.decide("/profile", None),
            Decision::Deny(DenyReason::Unauthenticated)
        );
        assert_eq!(policy.decide("/profile", Some(&user())), Decision::Allow);
        assert_eq!(policy.decide("/anything/else", Some(&user())), Decision::Allow);
    }

    #[test]
    fn rule_order_is_significant() {
        let specific_first = AccessPolicy::new(vec![
            AccessRule::new("/admin/**", Requirement::HasRole("ADMIN".to_string())),
            AccessRule::new("/**", Requirement::Authenticated),
        ]);
        let general_first = AccessPolicy::new(vec![
            AccessRule::new("/**", Requirement::Authenticated),
            AccessRule::new("/admin/**", Requirement::HasRole("ADMIN".to_string())),
        ]);

        // Proper ordering enforces the role check ...
        assert_eq!(
            specific_first.decide("/admin/reports", Some(&user())),
            Decision::Deny(DenyReason::Forbidden)
        );
        // ... while a leading catch-all masks the specific rule entirely.
        assert_eq!(
            general_first.decide("/admin/reports", Some(&user())),
            Decision::Allow
        );
    }

    #[test]
    fn unmatched_path_is_denied_by_default() {
        let policy = AccessPolicy::new(vec![AccessRule::new(
            "/authenticate",
            Requirement::Public,
        )]);

        assert_eq!(
            policy.decide("/profile", None),
            Decision::Deny(DenyReason::Unauthenticated)
        );
        assert_eq!(
            policy.decide("/profile", Some(&user())),
            Decision::Deny(DenyReason::Forbidden)
        );
    }
}
