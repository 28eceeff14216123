//! # Enrollment Dependencies / 注册依赖
//!
//! This module defines the dependency grouping for orchestrator construction.
//! 此模块定义编排器构造的依赖分组。
//!
//! **Note / 注意**: This is NOT a Builder pattern.
//! - No build steps / 无构建步骤
//! - No default values / 无默认值
//! - Just parameter grouping / 仅用于参数打包

use std::sync::Arc;
use te_core::ports::*;

/// Enrollment dependency grouping (non-Builder, just parameter grouping)
/// 注册依赖分组（非 Builder，仅参数打包）
///
/// All dependencies are required - no defaults, no optional fields.
/// 所有依赖都是必需的 - 无默认值，无可选字段。
#[derive(Clone)]
pub struct EnrollmentPorts {
    // Identity provider / 身份提供方
    pub verification: Arc<dyn VerificationServicePort>,

    // Host collaborators / 宿主协作方
    pub form_engine: Arc<dyn FormEnginePort>,
    pub alerts: Arc<dyn AlertPort>,
    pub events: Arc<dyn EnrollmentEventPort>,
}
