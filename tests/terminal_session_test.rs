use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use te_core::config::{AuthenticatorApp, EnrollmentConfig};
use te_core::enrollment::WizardStep;
use te_core::ports::{
    CodeVerdict, SecretIssue, VerificationServiceError, VerificationServicePort,
};
use te_core::secret::{OneTimeCode, QrPayload};
use totp_enroll::adapters::TerminalIo;
use totp_enroll::bootstrap::build_orchestrator;
use totp_enroll::host::run_session;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Issues secrets in order and accepts only the configured code.
struct FakeIdentityProvider {
    secrets: Mutex<VecDeque<&'static str>>,
    accepted_code: &'static str,
    validated: Mutex<Vec<String>>,
}

impl FakeIdentityProvider {
    fn new(secrets: &[&'static str], accepted_code: &'static str) -> Self {
        Self {
            secrets: Mutex::new(secrets.iter().copied().collect()),
            accepted_code,
            validated: Mutex::new(Vec::new()),
        }
    }

    fn issue(&self) -> Result<SecretIssue, VerificationServiceError> {
        self.secrets
            .lock()
            .unwrap()
            .pop_front()
            .map(|payload| SecretIssue {
                qr_payload: QrPayload::new(payload),
            })
            .ok_or(VerificationServiceError::UnexpectedStatus(500))
    }
}

#[async_trait]
impl VerificationServicePort for FakeIdentityProvider {
    async fn initiate(&self) -> Result<SecretIssue, VerificationServiceError> {
        self.issue()
    }

    async fn refresh(&self) -> Result<SecretIssue, VerificationServiceError> {
        self.issue()
    }

    async fn validate(&self, code: &OneTimeCode) -> Result<CodeVerdict, VerificationServiceError> {
        self.validated.lock().unwrap().push(code.as_str().to_string());
        Ok(CodeVerdict {
            is_valid: code.as_str() == self.accepted_code,
        })
    }
}

/// Identity provider that never answers.
struct UnresponsiveIdentityProvider;

#[async_trait]
impl VerificationServicePort for UnresponsiveIdentityProvider {
    async fn initiate(&self) -> Result<SecretIssue, VerificationServiceError> {
        std::future::pending().await
    }

    async fn refresh(&self) -> Result<SecretIssue, VerificationServiceError> {
        std::future::pending().await
    }

    async fn validate(&self, _code: &OneTimeCode) -> Result<CodeVerdict, VerificationServiceError> {
        std::future::pending().await
    }
}

fn config() -> EnrollmentConfig {
    let mut config = EnrollmentConfig::empty();
    config.service.base_url = "https://idp.example.com".to_string();
    config.authenticator_apps = vec![AuthenticatorApp {
        name: "Google Authenticator".to_string(),
        link: "https://example.com/ga".to_string(),
    }];
    config
}

#[tokio::test]
async fn scripted_session_enrolls_after_rescan() {
    let provider = Arc::new(FakeIdentityProvider::new(
        &["otpauth://totp/alice?secret=ABC", "otpauth://totp/alice?secret=XYZ"],
        "123456",
    ));
    let out = SharedBuffer::default();
    // continue, wrong code, rescan, regenerate, continue, right code, done
    let script = "c\nc\n000000\nr\ng\nc\nc\n123456\nc\n";
    let io = Arc::new(TerminalIo::new(script.as_bytes(), out.clone()));
    let orchestrator = build_orchestrator(&config(), io.clone(), provider.clone());

    let final_state = run_session(&orchestrator, &io, true).await.unwrap();

    assert!(!final_state.is_open);
    assert_eq!(
        *provider.validated.lock().unwrap(),
        vec!["000000".to_string(), "123456".to_string()]
    );

    let transcript = out.contents();
    assert!(transcript.contains("otpauth://totp/alice?secret=ABC"));
    assert!(transcript.contains("otpauth://totp/alice?secret=XYZ"));
    assert!(transcript.contains("Google Authenticator"));
    assert!(transcript.contains("[r] scan the QR code again"));
    assert!(transcript.contains("Authenticator app enrolled."));
}

#[tokio::test]
async fn fetch_failure_is_reported_as_alert() {
    let provider = Arc::new(FakeIdentityProvider::new(&[], "123456"));
    let out = SharedBuffer::default();
    let io = Arc::new(TerminalIo::new("q\n".as_bytes(), out.clone()));
    let orchestrator = build_orchestrator(&config(), io.clone(), provider);

    let final_state = run_session(&orchestrator, &io, true).await.unwrap();

    assert!(final_state.is_at(WizardStep::AwaitingSecret));
    assert!(final_state.secret_payload.is_none());
    let transcript = out.contents();
    assert!(transcript.contains("[ERROR] Something went wrong"));
    assert!(transcript.contains("[f] fetch again"));
}

#[tokio::test]
async fn unknown_command_prints_help_and_closed_wizard_ignores_intents() {
    let provider = Arc::new(FakeIdentityProvider::new(&[], "123456"));
    let out = SharedBuffer::default();
    let io = Arc::new(TerminalIo::new("zz\nc\ng\n".as_bytes(), out.clone()));
    let orchestrator = build_orchestrator(&config(), io.clone(), provider.clone());

    let final_state = run_session(&orchestrator, &io, false).await.unwrap();

    assert!(!final_state.is_open);
    assert!(provider.validated.lock().unwrap().is_empty());
    let transcript = out.contents();
    assert!(transcript.contains("unknown command: zz"));
    assert!(transcript.contains("Commands:"));
}

#[tokio::test]
async fn cancel_reaches_wizard_while_secret_request_hangs() {
    let out = SharedBuffer::default();
    let io = Arc::new(TerminalIo::new("c\nx\nq\n".as_bytes(), out.clone()));
    let orchestrator = build_orchestrator(
        &config(),
        io.clone(),
        Arc::new(UnresponsiveIdentityProvider),
    );

    let final_state = tokio::time::timeout(
        std::time::Duration::from_secs(2),
        run_session(&orchestrator, &io, true),
    )
    .await
    .expect("session must not wait for the unanswered request")
    .unwrap();

    assert!(!final_state.is_open);
    assert_eq!(orchestrator.get_state().await, final_state);
    let transcript = out.contents();
    assert!(transcript.contains("Waiting for the identity provider"));
    assert!(transcript.contains("Authenticator app setup is closed"));
}
