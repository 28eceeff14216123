//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - Read TOML configuration files / 读取 TOML 配置文件
//! - Parse TOML into EnrollmentConfig DTO / 将 TOML 解析为 EnrollmentConfig DTO
//! - Apply command-line overrides and reject unusable results
//!   / 应用命令行覆盖并拒绝无法使用的配置
//!
//! `load_config` stays a pure loader; policy lives in `resolve_config`.

use anyhow::{bail, Context};
use std::path::{Path, PathBuf};
use te_core::config::EnrollmentConfig;
use tracing::{info, warn};

use crate::cli::Cli;

const APP_DIR_NAME: &str = "totp-enroll";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// **NO validation is performed**: missing sections result in empty values.
///
/// # Errors / 错误
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
pub fn load_config(config_path: &Path) -> anyhow::Result<EnrollmentConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    EnrollmentConfig::from_toml(&toml_value)
}

/// `<config dir>/totp-enroll/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load the configured file (or the default one), then apply CLI overrides.
///
/// A missing default file is not an error; an explicitly requested file is.
pub fn resolve_config(cli: &Cli) -> anyhow::Result<EnrollmentConfig> {
    let mut config = match (&cli.config, default_config_path()) {
        (Some(path), _) => load_config(path)?,
        (None, Some(path)) if path.exists() => load_config(&path)?,
        (None, path) => {
            warn!(path = ?path, "no config file found, using command-line values only");
            EnrollmentConfig::empty()
        }
    };

    if let Some(base_url) = &cli.base_url {
        config.service.base_url = base_url.clone();
    }
    if let Some(token) = &cli.token {
        config.service.access_token = Some(token.clone());
    }

    if config.service.base_url.trim().is_empty() {
        bail!(
            "No identity provider base URL configured; set [service].base_url or pass --base-url"
        );
    }

    info!(
        base_url = %config.service.base_url,
        authenticator_apps = config.authenticator_apps.len(),
        "configuration resolved"
    );
    Ok(config)
}
