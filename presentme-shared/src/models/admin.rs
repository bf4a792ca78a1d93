use serde::{Deserialize, Serialize};

/// Profile fields nested under `admin` in login and profile responses.
///
/// The backend sends more fields than these; unknown fields are ignored on
/// decode so schema additions on the server do not break the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    /// The admin's first name.
    pub first_name: String,

    /// The admin's last name.
    pub last_name: String,

    /// The admin's email address.
    pub email_id: String,
}

impl AdminProfile {
    /// First and last name joined for display.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Envelope returned by `POST sadmin/login` and `GET sadmin/profile`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminUser {
    /// The signed-in administrator's profile.
    pub admin: AdminProfile,
}

/// Credentials sent to `POST sadmin/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// The admin's email address.
    pub email_id: String,

    /// The admin's password.
    pub password: String,
}

/// Error body the backend attaches to non-success responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Human-readable error message.
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_decodes_wire_names() {
        let json = r#"{
            "admin": {
                "firstName": "Asha",
                "lastName": "Verma",
                "emailId": "asha@present-me.example",
                "role": "superadmin"
            }
        }"#;

        let user: AdminUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.admin.first_name, "Asha");
        assert_eq!(user.admin.email_id, "asha@present-me.example");
        assert_eq!(user.admin.full_name(), "Asha Verma");
    }

    #[test]
    fn profile_missing_field_is_a_decode_error() {
        let json = r#"{"admin": {"firstName": "Asha", "lastName": "Verma"}}"#;
        assert!(serde_json::from_str::<AdminUser>(json).is_err());
    }

    #[test]
    fn login_request_serializes_camel_case() {
        let request = LoginRequest {
            email_id: "admin@present-me.example".to_string(),
            password: "secret".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["emailId"], "admin@present-me.example");
        assert_eq!(value["password"], "secret");
    }

    #[test]
    fn error_response_message_defaults_empty() {
        let body: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert!(body.message.is_empty());
    }
}
