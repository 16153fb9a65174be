// src/utils/credentials.rs

/// Fixed admin credential pair.
///
/// This is a placeholder check, isolated here so the comparison can later
/// be swapped for a real scheme without touching the login handler.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    username: String,
    password: String,
}

impl AdminCredentials {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }

    /// Exact, case-sensitive string comparison of both fields.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> AdminCredentials {
        AdminCredentials::new("admin_kamch".to_string(), "admin_kamch123".to_string())
    }

    #[test]
    fn exact_pair_verifies() {
        assert!(creds().verify("admin_kamch", "admin_kamch123"));
    }

    #[test]
    fn wrong_password_fails() {
        assert!(!creds().verify("admin_kamch", "wrong"));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        assert!(!creds().verify("Admin_kamch", "admin_kamch123"));
        assert!(!creds().verify("admin_kamch", "ADMIN_KAMCH123"));
    }
}
