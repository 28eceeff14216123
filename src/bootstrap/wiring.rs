//! # Dependency Wiring / 依赖注入
//!
//! Assembles `EnrollmentPorts` from the resolved configuration and the
//! terminal. Only this module knows the concrete adapter types.
//! 仅此模块了解具体的适配器类型。

use std::sync::Arc;

use anyhow::Context;
use te_app::{EnrollmentOrchestrator, EnrollmentPorts};
use te_core::config::EnrollmentConfig;
use te_core::ports::VerificationServicePort;
use te_infra::HttpVerificationService;
use tracing::info;

use crate::adapters::{TerminalAlertSink, TerminalFormEngine, TerminalIo, TerminalRenderer};

/// Build an orchestrator whose host-side ports all talk to `io`.
pub fn build_orchestrator(
    config: &EnrollmentConfig,
    io: Arc<TerminalIo>,
    verification: Arc<dyn VerificationServicePort>,
) -> EnrollmentOrchestrator {
    let ports = EnrollmentPorts {
        verification,
        form_engine: Arc::new(TerminalFormEngine::new(io.clone())),
        alerts: Arc::new(TerminalAlertSink::new(io.clone())),
        events: Arc::new(TerminalRenderer::new(
            io,
            config.authenticator_apps.clone(),
        )),
    };
    EnrollmentOrchestrator::new(ports)
}

/// Production wiring: HTTP verification service plus the given terminal.
pub fn wire_terminal(
    config: &EnrollmentConfig,
    io: Arc<TerminalIo>,
) -> anyhow::Result<EnrollmentOrchestrator> {
    let service = HttpVerificationService::new(&config.service)
        .context("Failed to create verification service client")?;
    info!(
        endpoint = service.endpoint(),
        "verification service configured"
    );

    Ok(build_orchestrator(config, io, Arc::new(service)))
}
