//! Built-in credentials checked before the remote login endpoint.
//!
//! Isolated on purpose: delete this module (and its call site in
//! `use_auth`) to force every login through the backend.

const DEV_USERS: &[(&str, &str)] = &[("admin", "admin"), ("user", "user")];

pub fn matches(username: &str, password: &str) -> bool {
    DEV_USERS
        .iter()
        .any(|(user, pass)| *user == username && *pass == password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_listed_pairs_only() {
        assert!(matches("admin", "admin"));
        assert!(matches("user", "user"));
        assert!(!matches("admin", "user"));
        assert!(!matches("admin", ""));
        assert!(!matches("alice", "alice"));
    }
}
