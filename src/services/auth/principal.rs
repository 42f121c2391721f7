/// An authenticated caller: who they are and which roles they carry.
///
/// Built either from a successful credential check (`/authenticate`) or from
/// the claims of a verified bearer token. Lives for one request; nothing
/// retains it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub username: String,
    pub roles: Vec<String>,
}

impl Principal {
    pub fn new(username: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            username: username.into(),
            roles,
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_role_is_exact_match() {
        let p = Principal::new("alice", vec!["USER".into(), "ADMIN".into()]);
        assert!(p.has_role("ADMIN"));
        assert!(p.has_role("USER"));
        assert!(!p.has_role("ADM"));
        assert!(!p.has_role("admin"));
    }
}
