use serde::{Deserialize, Serialize};

/// Logged-in user; exists only in memory and dies on logout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub is_admin: bool,
}

impl Session {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
            is_admin: username == "admin",
        }
    }
}

/// Body of GET /user/login
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "Login")]
    pub login: String,
}

impl LoginResponse {
    pub fn is_successful(&self) -> bool {
        self.login == "Successful"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_detection() {
        assert!(Session::new("admin").is_admin);
        assert!(!Session::new("alice").is_admin);
        assert!(!Session::new("Admin").is_admin);
    }

    #[test]
    fn login_response_deserializes_renamed_key() {
        let response: LoginResponse = serde_json::from_str(r#"{"Login": "Successful"}"#).unwrap();
        assert!(response.is_successful());

        let response: LoginResponse = serde_json::from_str(r#"{"Login": "Denied"}"#).unwrap();
        assert!(!response.is_successful());
    }
}
