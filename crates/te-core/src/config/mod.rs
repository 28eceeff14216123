//! # Pure Data Module / 纯数据模块 - Data Transfer Objects Only
//!
//! ## Responsibilities / 职责
//!
//! - Define configuration data structures / 定义配置数据结构
//! - Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! Validation and override policy belong to the bootstrap layer, not here.

mod enrollment_config;

pub use enrollment_config::{AuthenticatorApp, EnrollmentConfig, ServiceConfig};
