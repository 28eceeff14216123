/// Enrollment configuration DTO (pure data, no logic)
/// 注册配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentConfig {
    pub service: ServiceConfig,

    /// Authenticator apps recommended on the scan step (may be empty)
    /// 扫码页推荐的认证器应用（可能为空）
    pub authenticator_apps: Vec<AuthenticatorApp>,
}

/// Identity provider endpoint settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Base URL (may be empty - this is a fact, not an error)
    /// 基础地址（可能为空 - 这就是事实，不是错误）
    pub base_url: String,

    /// Path of the TOTP resource, appended to `base_url` (may be empty)
    pub totp_path: String,

    /// Bearer token sent with every request
    pub access_token: Option<String>,

    /// Per-request timeout in seconds; `None` means wait indefinitely
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatorApp {
    pub name: String,
    pub link: String,
}

impl EnrollmentConfig {
    /// Create EnrollmentConfig from TOML value
    /// 从 TOML 值创建 EnrollmentConfig
    ///
    /// **Prohibited / 禁止**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let service = toml_value.get("service");
        let str_at = |key: &str| {
            service
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .map(str::to_string)
        };

        let authenticator_apps = toml_value
            .get("authenticator_apps")
            .and_then(|v| v.as_array())
            .map(|apps| {
                apps.iter()
                    .map(|app| AuthenticatorApp {
                        name: app
                            .get("name")
                            .and_then(|v| v.as_str())
                            .unwrap_or("")
                            .to_string(),
                        link: app
                            .get("link")
                            .and_then(|v| v.as_str())
                            .unwrap_or("")
                            .to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            service: ServiceConfig {
                base_url: str_at("base_url").unwrap_or_default(),
                totp_path: str_at("totp_path").unwrap_or_default(),
                access_token: str_at("access_token"),
                request_timeout_secs: service
                    .and_then(|s| s.get("request_timeout_secs"))
                    .and_then(|v| v.as_integer())
                    .and_then(|secs| u64::try_from(secs).ok()),
            },
            authenticator_apps,
        })
    }

    /// Create empty EnrollmentConfig (all empty/default values)
    /// 创建空的 EnrollmentConfig（所有字段为空/默认值）
    pub fn empty() -> Self {
        Self {
            service: ServiceConfig {
                base_url: String::new(),
                totp_path: String::new(),
                access_token: None,
                request_timeout_secs: None,
            },
            authenticator_apps: Vec::new(),
        }
    }
}
