use std::time::Duration;

use async_trait::async_trait;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use te_core::config::ServiceConfig;
use te_core::ports::{CodeVerdict, SecretIssue, VerificationServiceError, VerificationServicePort};
use te_core::secret::OneTimeCode;

use super::codec::{decode_qr_payload, QrCodeResponse, TotpActionRequest, ValidationResponse};

pub const DEFAULT_TOTP_PATH: &str = "/api/users/v1/me/totp";

type VerificationResult<T> = std::result::Result<T, VerificationServiceError>;

/// Verification service backed by the identity provider's TOTP endpoint.
///
/// - initiate: `GET {endpoint}` → `{"qrCodeUrl": base64}`
/// - refresh:  `POST {endpoint}` `{"action":"REFRESH"}` → `{"qrCodeUrl": base64}`
/// - validate: `POST {endpoint}` `{"action":"VALIDATE","verificationCode":..}` → `{"isValid": bool}`
pub struct HttpVerificationService {
    client: reqwest::Client,
    endpoint: String,
    access_token: Option<String>,
}

impl HttpVerificationService {
    pub fn new(config: &ServiceConfig) -> VerificationResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| VerificationServiceError::Transport(format!("http client: {e}")))?;

        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: reqwest::Client, config: &ServiceConfig) -> Self {
        let path = if config.totp_path.is_empty() {
            DEFAULT_TOTP_PATH
        } else {
            config.totp_path.as_str()
        };
        Self {
            client,
            endpoint: join_endpoint(&config.base_url, path),
            access_token: config.access_token.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> VerificationResult<T> {
        let response = self
            .authorized(request)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!(operation, status = %status, "totp endpoint returned error status");
            return Err(map_status_code(status));
        }

        let body = response.text().await.map_err(map_reqwest_error)?;
        debug!(operation, bytes = body.len(), "totp endpoint responded");
        serde_json::from_str(&body)
            .map_err(|e| VerificationServiceError::MalformedResponse(e.to_string()))
    }

    async fn request_secret(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> VerificationResult<SecretIssue> {
        let response: QrCodeResponse = self.send(operation, request).await?;
        let qr_payload = decode_qr_payload(&response.qr_code_url)?;
        Ok(SecretIssue { qr_payload })
    }
}

#[async_trait]
impl VerificationServicePort for HttpVerificationService {
    async fn initiate(&self) -> VerificationResult<SecretIssue> {
        self.request_secret("initiate", self.client.get(&self.endpoint))
            .await
    }

    async fn refresh(&self) -> VerificationResult<SecretIssue> {
        let request = self
            .client
            .post(&self.endpoint)
            .json(&TotpActionRequest::refresh());
        self.request_secret("refresh", request).await
    }

    async fn validate(&self, code: &OneTimeCode) -> VerificationResult<CodeVerdict> {
        let request = self
            .client
            .post(&self.endpoint)
            .json(&TotpActionRequest::validate(code.as_str()));
        let response: ValidationResponse = self.send("validate", request).await?;
        Ok(CodeVerdict {
            is_valid: response.is_valid,
        })
    }
}

fn join_endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn map_reqwest_error(err: reqwest::Error) -> VerificationServiceError {
    if err.is_timeout() {
        VerificationServiceError::Transport("request timed out".to_string())
    } else if err.is_decode() {
        VerificationServiceError::MalformedResponse(err.to_string())
    } else {
        VerificationServiceError::Transport(err.to_string())
    }
}

fn map_status_code(code: StatusCode) -> VerificationServiceError {
    VerificationServiceError::UnexpectedStatus(code.as_u16())
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use mockito::{Matcher, Server};

    fn config(base_url: String) -> ServiceConfig {
        ServiceConfig {
            base_url,
            totp_path: String::new(),
            access_token: Some("secret-token".to_string()),
            request_timeout_secs: Some(5),
        }
    }

    fn qr_body(uri: &str) -> String {
        serde_json::json!({ "qrCodeUrl": STANDARD.encode(uri) }).to_string()
    }

    #[test]
    fn endpoint_joins_without_double_slashes() {
        assert_eq!(
            join_endpoint("https://idp.example.com/t/acme/", "/api/users/v1/me/totp"),
            "https://idp.example.com/t/acme/api/users/v1/me/totp"
        );
        let service =
            HttpVerificationService::new(&config("https://idp.example.com".to_string())).unwrap();
        assert_eq!(
            service.endpoint(),
            "https://idp.example.com/api/users/v1/me/totp"
        );
    }

    #[tokio::test]
    async fn initiate_sends_bearer_token_and_decodes_payload() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", DEFAULT_TOTP_PATH)
            .match_header("authorization", "Bearer secret-token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(qr_body("otpauth://totp/alice?secret=ABC"))
            .create_async()
            .await;

        let service = HttpVerificationService::new(&config(server.url())).unwrap();
        let issue = service.initiate().await.expect("secret should be issued");

        mock.assert_async().await;
        assert_eq!(issue.qr_payload.expose(), "otpauth://totp/alice?secret=ABC");
    }

    #[tokio::test]
    async fn refresh_posts_refresh_action() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", DEFAULT_TOTP_PATH)
            .match_body(Matcher::Json(serde_json::json!({ "action": "REFRESH" })))
            .with_status(200)
            .with_body(qr_body("otpauth://totp/alice?secret=XYZ"))
            .create_async()
            .await;

        let service = HttpVerificationService::new(&config(server.url())).unwrap();
        let issue = service.refresh().await.unwrap();

        mock.assert_async().await;
        assert_eq!(issue.qr_payload.expose(), "otpauth://totp/alice?secret=XYZ");
    }

    #[tokio::test]
    async fn validate_maps_is_valid() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", DEFAULT_TOTP_PATH)
            .match_body(Matcher::Json(serde_json::json!({
                "action": "VALIDATE",
                "verificationCode": "123456"
            })))
            .with_status(200)
            .with_body(r#"{"isValid": false}"#)
            .create_async()
            .await;

        let service = HttpVerificationService::new(&config(server.url())).unwrap();
        let verdict = service.validate(&OneTimeCode::new("123456")).await.unwrap();

        mock.assert_async().await;
        assert!(!verdict.is_valid);
    }

    #[tokio::test]
    async fn error_status_maps_to_unexpected_status() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", DEFAULT_TOTP_PATH)
            .with_status(401)
            .create_async()
            .await;

        let service = HttpVerificationService::new(&config(server.url())).unwrap();
        let err = service.initiate().await.unwrap_err();

        assert!(matches!(err, VerificationServiceError::UnexpectedStatus(401)));
    }

    #[tokio::test]
    async fn malformed_body_maps_to_malformed_response() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", DEFAULT_TOTP_PATH)
            .with_status(200)
            .with_body(r#"{"unexpected": true}"#)
            .create_async()
            .await;

        let service = HttpVerificationService::new(&config(server.url())).unwrap();
        let err = service.initiate().await.unwrap_err();

        assert!(matches!(err, VerificationServiceError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn unreachable_server_maps_to_transport_error() {
        let service =
            HttpVerificationService::new(&config("http://127.0.0.1:1".to_string())).unwrap();
        let err = service.initiate().await.unwrap_err();

        assert!(matches!(err, VerificationServiceError::Transport(_)));
    }
}
