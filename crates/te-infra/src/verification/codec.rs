//! Wire shapes of the TOTP endpoint and QR payload decoding.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use te_core::ports::VerificationServiceError;
use te_core::secret::QrPayload;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TotpActionRequest<'a> {
    pub action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_code: Option<&'a str>,
}

impl<'a> TotpActionRequest<'a> {
    pub fn refresh() -> Self {
        Self {
            action: "REFRESH",
            verification_code: None,
        }
    }

    pub fn validate(code: &'a str) -> Self {
        Self {
            action: "VALIDATE",
            verification_code: Some(code),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QrCodeResponse {
    pub qr_code_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ValidationResponse {
    pub is_valid: bool,
}

/// Decode the base64 `qrCodeUrl` field into the otpauth URI it wraps.
pub fn decode_qr_payload(encoded: &str) -> Result<QrPayload, VerificationServiceError> {
    let bytes = STANDARD.decode(encoded.trim()).map_err(|e| {
        VerificationServiceError::MalformedResponse(format!("qrCodeUrl is not base64: {e}"))
    })?;
    let decoded = String::from_utf8(bytes).map_err(|e| {
        VerificationServiceError::MalformedResponse(format!("qrCodeUrl is not UTF-8: {e}"))
    })?;
    if decoded.trim().is_empty() {
        return Err(VerificationServiceError::EmptyPayload);
    }
    Ok(QrPayload::new(decoded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_otpauth_uri() {
        let encoded = STANDARD.encode("otpauth://totp/alice?secret=JBSWY3DPEHPK3PXP");
        let payload = decode_qr_payload(&encoded).unwrap();
        assert_eq!(
            payload.expose(),
            "otpauth://totp/alice?secret=JBSWY3DPEHPK3PXP"
        );
    }

    #[test]
    fn rejects_non_base64() {
        let err = decode_qr_payload("not base64!").unwrap_err();
        assert!(matches!(err, VerificationServiceError::MalformedResponse(_)));
    }

    #[test]
    fn rejects_empty_payload() {
        let err = decode_qr_payload("").unwrap_err();
        assert!(matches!(err, VerificationServiceError::EmptyPayload));
    }

    #[test]
    fn validate_request_uses_camel_case() {
        let body = serde_json::to_value(TotpActionRequest::validate("123456")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"action": "VALIDATE", "verificationCode": "123456"})
        );
        let body = serde_json::to_value(TotpActionRequest::refresh()).unwrap();
        assert_eq!(body, serde_json::json!({"action": "REFRESH"}));
    }
}
