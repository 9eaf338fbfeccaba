//! Custom hostname 类型定义
//!
//! 所有字段在线上都是可选的：序列化时省略空值，反序列化时缺失或 `null` 视为零值。

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Custom hostname 激活状态（由服务端驱动）
///
/// 未列出的状态保存在 `Other` 中，不会导致整页解析失败。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomHostnameStatus {
    Pending,
    Active,
    Moved,
    Removed,
    #[serde(untagged)]
    Other(String),
}

impl CustomHostnameStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Moved => "moved",
            Self::Removed => "removed",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for CustomHostnameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CustomHostnameStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "pending" => Self::Pending,
            "active" => Self::Active,
            "moved" => Self::Moved,
            "removed" => Self::Removed,
            other => Self::Other(other.to_string()),
        })
    }
}

/// `on` / `off` 开关，其他取值原样保留
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SslToggle {
    On,
    Off,
    #[serde(untagged)]
    Other(String),
}

impl From<bool> for SslToggle {
    fn from(enabled: bool) -> Self {
        if enabled { Self::On } else { Self::Off }
    }
}

/// SSL 设置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomHostnameSslSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http2: Option<SslToggle>,
    #[serde(default, rename = "tls_1_3", skip_serializing_if = "Option::is_none")]
    pub tls13: Option<SslToggle>,
    #[serde(
        default,
        deserialize_with = "crate::utils::null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub min_tls_version: String,
    /// 有序的 cipher 列表
    #[serde(
        default,
        deserialize_with = "crate::utils::null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub ciphers: Vec<String>,
}

impl CustomHostnameSslSettings {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// SSL 校验错误
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SslValidationError {
    #[serde(
        default,
        deserialize_with = "crate::utils::null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub message: String,
}

/// Custom hostname 的 SSL 部分
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomHostnameSsl {
    #[serde(
        default,
        deserialize_with = "crate::utils::null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub status: String,
    /// 校验方式（`http` / `txt` / `email`）
    #[serde(
        default,
        deserialize_with = "crate::utils::null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub method: String,
    /// 证书类型（如 `dv`）
    #[serde(
        default,
        rename = "type",
        deserialize_with = "crate::utils::null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub cert_type: String,
    #[serde(
        default,
        deserialize_with = "crate::utils::null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub cname_target: String,
    #[serde(
        default,
        rename = "cname",
        deserialize_with = "crate::utils::null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub cname_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wildcard: Option<bool>,
    #[serde(
        default,
        deserialize_with = "crate::utils::null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub certificate_authority: String,
    #[serde(
        default,
        deserialize_with = "crate::utils::null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub validation_errors: Vec<SslValidationError>,
    #[serde(
        default,
        deserialize_with = "crate::utils::null_default",
        skip_serializing_if = "CustomHostnameSslSettings::is_empty"
    )]
    pub settings: CustomHostnameSslSettings,
}

impl CustomHostnameSsl {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// 所有权验证记录（TXT 等），需要调用方自行发布
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomHostnameOwnershipVerification {
    #[serde(
        default,
        rename = "type",
        deserialize_with = "crate::utils::null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub verification_type: String,
    #[serde(
        default,
        deserialize_with = "crate::utils::null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "crate::utils::null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub value: String,
}

impl CustomHostnameOwnershipVerification {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// HTTP 方式的所有权验证（在 `http_url` 返回 `http_body`）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomHostnameOwnershipVerificationHttp {
    #[serde(
        default,
        deserialize_with = "crate::utils::null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub http_url: String,
    #[serde(
        default,
        deserialize_with = "crate::utils::null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub http_body: String,
}

impl CustomHostnameOwnershipVerificationHttp {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// 自定义元数据，语义由服务端规则决定
pub type CustomMetadata = serde_json::Map<String, serde_json::Value>;

/// Zone 下的 custom hostname
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomHostname {
    /// 服务端分配，创建后不可变
    #[serde(
        default,
        deserialize_with = "crate::utils::null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub id: String,
    #[serde(
        default,
        deserialize_with = "crate::utils::null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub hostname: String,
    #[serde(
        default,
        deserialize_with = "crate::utils::null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub custom_origin_server: String,
    #[serde(
        default,
        deserialize_with = "crate::utils::null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub custom_origin_sni: String,
    #[serde(
        default,
        deserialize_with = "crate::utils::null_default",
        skip_serializing_if = "CustomHostnameSsl::is_empty"
    )]
    pub ssl: CustomHostnameSsl,
    #[serde(
        default,
        deserialize_with = "crate::utils::null_default",
        skip_serializing_if = "CustomMetadata::is_empty"
    )]
    pub custom_metadata: CustomMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CustomHostnameStatus>,
    #[serde(
        default,
        deserialize_with = "crate::utils::null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub verification_errors: Vec<String>,
    #[serde(
        default,
        deserialize_with = "crate::utils::null_default",
        skip_serializing_if = "CustomHostnameOwnershipVerification::is_empty"
    )]
    pub ownership_verification: CustomHostnameOwnershipVerification,
    #[serde(
        default,
        deserialize_with = "crate::utils::null_default",
        skip_serializing_if = "CustomHostnameOwnershipVerificationHttp::is_empty"
    )]
    pub ownership_verification_http: CustomHostnameOwnershipVerificationHttp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl CustomHostname {
    /// 仅带 hostname 的创建请求
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_ssl(mut self, ssl: CustomHostnameSsl) -> Self {
        self.ssl = ssl;
        self
    }

    #[must_use]
    pub fn with_custom_origin_server(mut self, origin: impl Into<String>) -> Self {
        self.custom_origin_server = origin.into();
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.custom_metadata.insert(key.into(), value);
        self
    }
}

/// Zone 级别的 fallback origin（每个 zone 一个）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomHostnameFallbackOrigin {
    #[serde(
        default,
        deserialize_with = "crate::utils::null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub origin: String,
    #[serde(
        default,
        deserialize_with = "crate::utils::null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub status: String,
    #[serde(
        default,
        deserialize_with = "crate::utils::null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub errors: Vec<String>,
}

impl CustomHostnameFallbackOrigin {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            ..Self::default()
        }
    }
}
