mod codec;
mod http;

pub use codec::decode_qr_payload;
pub use http::{HttpVerificationService, DEFAULT_TOTP_PATH};
