use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use shared::models::{
    AdminUser, ApiError, ErrorResponse, InstituteCollection, InstituteStatus, LoginRequest,
    StatusUpdateRequest,
};

const DEFAULT_BASE_URL: &str = "/api";
const LOCAL_BASE_URL: &str = "http://localhost:3000";

/// Fallback shown when a failed login carries no server message.
pub const DEFAULT_LOGIN_ERROR: &str = "Invalid credentials. Please try again.";

thread_local! {
    static SHARED_CLIENT: OnceCell<PresentMeClient> = OnceCell::new();
}

/// Lightweight API client for the `sadmin` backend.
///
/// The session cookie rides along in the browser's cookie jar; the client
/// performs no caching, retries, or deduplication. Every call is one
/// best-effort request surfaced to the caller.
#[derive(Clone, Debug)]
pub struct PresentMeClient {
    base_url: String,
    client: Client,
}

impl PresentMeClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// The page-load-wide client instance, base URL resolved by hostname.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| cell.get_or_init(|| Self::new(&resolve_base_url())).clone())
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Authenticate with email/password credentials.
    ///
    /// Any non-success response surfaces the server's `message`, falling
    /// back to [`DEFAULT_LOGIN_ERROR`]; login failures never map to
    /// [`ApiError::Unauthorized`] because the sign-in page shows them inline.
    pub async fn login(&self, email_id: &str, password: &str) -> Result<AdminUser, ApiError> {
        let url = self.api_url("sadmin/login");
        let payload = LoginRequest {
            email_id: email_id.to_string(),
            password: password.to_string(),
        };
        let response = with_credentials(self.client.post(url).json(&payload))
            .send()
            .await
            .map_err(network_error)?;

        if response.status().is_success() {
            decode_json(response).await
        } else {
            let status = response.status();
            let message = login_error_message(response.json::<ErrorResponse>().await.ok());
            Err(ApiError::Server {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Terminate the current session. Fire-and-forget; callers clear local
    /// state whether or not this succeeds.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let url = self.api_url("sadmin/logout");
        let response = with_credentials(self.client.post(url))
            .send()
            .await
            .map_err(network_error)?;
        check_status(response).await.map(|_| ())
    }

    /// Retrieve the signed-in admin's profile. A 401 maps to
    /// [`ApiError::Unauthorized`] so the shell can redirect to sign-in.
    pub async fn fetch_profile(&self) -> Result<AdminUser, ApiError> {
        let url = self.api_url("sadmin/profile");
        let response = with_credentials(self.client.get(url))
            .send()
            .await
            .map_err(network_error)?;
        decode_json(check_status(response).await?).await
    }

    /// Fetch the collection of institutes awaiting review.
    pub async fn fetch_pending_institutes(&self) -> Result<InstituteCollection, ApiError> {
        self.fetch_collection("sadmin/pendingInstitutes").await
    }

    /// Fetch the collection of verified institutes.
    pub async fn fetch_verified_institutes(&self) -> Result<InstituteCollection, ApiError> {
        self.fetch_collection("sadmin/verifiedInstitutes").await
    }

    async fn fetch_collection(&self, path: &str) -> Result<InstituteCollection, ApiError> {
        let url = self.api_url(path);
        let response = with_credentials(self.client.get(url))
            .send()
            .await
            .map_err(network_error)?;
        decode_json(check_status(response).await?).await
    }

    /// Request a status transition for one institute. No response body is
    /// assumed beyond success/failure.
    pub async fn set_institute_status(
        &self,
        institution_id: &str,
        status: InstituteStatus,
    ) -> Result<(), ApiError> {
        let url = self.api_url(&format!("sadmin/institutes/{institution_id}/status"));
        let response = with_credentials(self.client.patch(url).json(&StatusUpdateRequest { status }))
            .send()
            .await
            .map_err(network_error)?;
        check_status(response).await.map(|_| ())
    }
}

/// Local-development hosts talk to the local backend origin; everything else
/// goes through the relative `/api` path. Resolved once per page load.
fn resolve_base_url() -> String {
    web_sys::window()
        .and_then(|window| window.location().hostname().ok())
        .map_or_else(
            || DEFAULT_BASE_URL.to_string(),
            |hostname| {
                if hostname == "localhost" || hostname == "127.0.0.1" {
                    LOCAL_BASE_URL.to_string()
                } else {
                    DEFAULT_BASE_URL.to_string()
                }
            },
        )
}

/// Browser fetch defaults to same-origin credentials, which drops the
/// session cookie whenever the base URL is the local backend origin. Every
/// request opts into include mode so the cookie rides along cross-origin
/// too; on native targets the builder passes through unchanged.
pub(crate) fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    #[cfg(target_arch = "wasm32")]
    let builder = builder.fetch_credentials_include();
    builder
}

/// Message shown for a failed login: the server's body message when it
/// carries one, the fixed fallback otherwise.
pub(crate) fn login_error_message(body: Option<ErrorResponse>) -> String {
    body.map(|body| body.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| DEFAULT_LOGIN_ERROR.to_string())
}

fn network_error(err: reqwest::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    let message = response
        .json::<ErrorResponse>()
        .await
        .ok()
        .map(|body| body.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| format!("request failed with status {}", status.as_u16()));
    Err(ApiError::Server {
        status: status.as_u16(),
        message,
    })
}

async fn decode_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}
