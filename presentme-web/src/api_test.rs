//! Tests for the API client functionality
//!
//! Validates URL construction, login error fallbacks, and wire payload
//! shapes for the super-admin backend endpoints.

#[cfg(test)]
mod tests {
    use crate::api::{
        DEFAULT_LOGIN_ERROR, PresentMeClient, login_error_message, with_credentials,
    };
    use shared::models::{ErrorResponse, InstituteStatus, StatusUpdateRequest};

    /// Tests API client creation and base URL normalization
    #[test]
    fn test_api_client_creation() {
        let client = PresentMeClient::new("http://localhost:3000/");
        assert_eq!(
            client.api_url("sadmin/login"),
            "http://localhost:3000/sadmin/login"
        );
    }

    /// Tests endpoint URL construction against the relative base
    #[test]
    fn test_api_endpoints() {
        let client = PresentMeClient::new("/api");

        assert_eq!(client.api_url("sadmin/login"), "/api/sadmin/login");
        assert_eq!(client.api_url("/sadmin/profile"), "/api/sadmin/profile");
        assert_eq!(
            client.api_url("sadmin/pendingInstitutes"),
            "/api/sadmin/pendingInstitutes"
        );
        assert_eq!(
            client.api_url("sadmin/verifiedInstitutes"),
            "/api/sadmin/verifiedInstitutes"
        );
    }

    /// Tests the status transition endpoint path
    #[test]
    fn test_status_endpoint() {
        let client = PresentMeClient::new("/api");
        let institution_id = "inst-42";
        let url = client.api_url(&format!("sadmin/institutes/{institution_id}/status"));
        assert_eq!(url, "/api/sadmin/institutes/inst-42/status");
    }

    /// Tests the fallback message shown for bare login failures
    #[test]
    fn test_default_login_error() {
        assert_eq!(DEFAULT_LOGIN_ERROR, "Invalid credentials. Please try again.");
        assert!(!DEFAULT_LOGIN_ERROR.is_empty());
    }

    /// Tests that a failed login surfaces the server message when present
    /// and the fallback otherwise
    #[test]
    fn test_login_failure_message() {
        assert_eq!(login_error_message(None), DEFAULT_LOGIN_ERROR);
        assert_eq!(
            login_error_message(Some(ErrorResponse {
                message: String::new(),
            })),
            DEFAULT_LOGIN_ERROR
        );
        assert_eq!(
            login_error_message(Some(ErrorResponse {
                message: "Account locked".to_string(),
            })),
            "Account locked"
        );
    }

    /// Tests that the credentials wrapper leaves the request target intact
    #[test]
    fn test_credentialed_builder_keeps_method_and_url() {
        let client = reqwest::Client::new();
        let request = with_credentials(client.get("http://localhost:3000/sadmin/profile"))
            .build()
            .unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(
            request.url().as_str(),
            "http://localhost:3000/sadmin/profile"
        );
    }

    /// Tests the status update request payload shape
    #[test]
    fn test_status_update_payload() {
        let approve = serde_json::to_value(StatusUpdateRequest {
            status: InstituteStatus::Verified,
        })
        .unwrap();
        assert_eq!(approve["status"], "verified");

        let reject = serde_json::to_value(StatusUpdateRequest {
            status: InstituteStatus::Rejected,
        })
        .unwrap();
        assert_eq!(reject["status"], "rejected");
    }
}
