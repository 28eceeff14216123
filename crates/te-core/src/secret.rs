use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// Decoded enrollment secret (usually an `otpauth://` URI) shown as a QR code.
///
/// 解码后的注册密钥：
/// - Debug 不输出真实内容
/// - Drop 时清零内存
///
/// Unlike a fully opaque secret it stays `Clone` and `Serialize`, because the
/// wizard state carrying it is published to the host for rendering.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QrPayload {
    inner: String,
}

impl QrPayload {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            inner: value.into(),
        }
    }

    /// Borrow the payload for rendering.
    pub fn expose(&self) -> &str {
        &self.inner
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Debug for QrPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("QrPayload([REDACTED])")
    }
}

impl Drop for QrPayload {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

/// One-time code typed by the user.
#[derive(Clone, PartialEq, Eq)]
pub struct OneTimeCode(String);

impl OneTimeCode {
    /// Surrounding whitespace is dropped; authenticator apps often display
    /// codes with padding that users copy along.
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for OneTimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OneTimeCode([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qr_payload_debug_is_redacted() {
        let payload = QrPayload::new("otpauth://totp/alice?secret=JBSWY3DPEHPK3PXP");
        let debug = format!("{payload:?}");
        assert!(!debug.contains("JBSWY3DPEHPK3PXP"));
        assert_eq!(
            payload.expose(),
            "otpauth://totp/alice?secret=JBSWY3DPEHPK3PXP"
        );
    }

    #[test]
    fn qr_payload_serializes_as_plain_string() {
        let payload = QrPayload::new("ABC");
        assert_eq!(serde_json::to_string(&payload).unwrap(), "\"ABC\"");
    }

    #[test]
    fn one_time_code_trims_and_redacts() {
        let code = OneTimeCode::new("  123456 \n");
        assert_eq!(code.as_str(), "123456");
        assert!(!format!("{code:?}").contains("123456"));
        assert!(OneTimeCode::new("   ").is_empty());
    }
}
