//! 错误类型定义

use std::fmt;

use thiserror::Error;

/// 请求分发层错误
///
/// 由 [`RequestDispatcher`](crate::RequestDispatcher) 返回，覆盖网络、认证与 HTTP 状态映射。
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("[{provider}] 网络错误: {detail}")]
    NetworkError { provider: String, detail: String },

    #[error("[{provider}] 凭证无效{}", fmt_raw(.raw_message.as_deref()))]
    InvalidCredentials {
        provider: String,
        raw_message: Option<String>,
    },

    #[error("[{provider}] Zone 不存在: {zone_id}{}", fmt_raw(.raw_message.as_deref()))]
    ZoneNotFound {
        provider: String,
        zone_id: String,
        raw_message: Option<String>,
    },

    #[error("[{provider}] 资源不存在: {path}{}", fmt_raw(.raw_message.as_deref()))]
    ResourceNotFound {
        provider: String,
        path: String,
        raw_message: Option<String>,
    },

    #[error("[{provider}] API 错误 (HTTP {status}, code {code:?}): {message}")]
    ApiError {
        provider: String,
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("[{provider}] 请求序列化失败: {detail}")]
    SerializationError { provider: String, detail: String },

    #[error("[{provider}] 未知错误: {raw_message}")]
    Unknown {
        provider: String,
        raw_message: String,
    },
}

fn fmt_raw(raw: Option<&str>) -> String {
    raw.map(|m| format!(": {m}")).unwrap_or_default()
}

/// 分发层 Result
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// Custom hostname 操作名，用于错误上下文
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Get,
    List,
    Update,
    UpdateSsl,
    Delete,
    GetFallbackOrigin,
    UpdateFallbackOrigin,
    DeleteFallbackOrigin,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Create => "create custom hostname",
            Self::Get => "get custom hostname",
            Self::List => "list custom hostnames",
            Self::Update => "update custom hostname",
            Self::UpdateSsl => "update custom hostname ssl",
            Self::Delete => "delete custom hostname",
            Self::GetFallbackOrigin => "get fallback origin",
            Self::UpdateFallbackOrigin => "update fallback origin",
            Self::DeleteFallbackOrigin => "delete fallback origin",
        };
        f.write_str(name)
    }
}

/// Custom hostname 操作错误
#[derive(Debug, Error)]
pub enum CustomHostnameError {
    /// 请求发送失败（网络、认证、非 2xx 等，由分发层归类）
    #[error("{operation}: 请求失败: {source}")]
    Request {
        operation: Operation,
        #[source]
        source: ProviderError,
    },

    /// 响应体无法解析
    #[error("{operation}: 响应解析失败: {source}")]
    Decode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },

    /// 请求体无法序列化
    #[error("{operation}: 请求序列化失败: {source}")]
    Encode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },

    /// 按名称查找时第一页中没有完全匹配的 hostname
    #[error("custom hostname 未找到: {hostname} (zone {zone_id})")]
    NotFound { zone_id: String, hostname: String },
}

impl CustomHostnameError {
    /// 出错的操作（`NotFound` 没有对应的单次请求）
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::Request { operation, .. }
            | Self::Decode { operation, .. }
            | Self::Encode { operation, .. } => Some(*operation),
            Self::NotFound { .. } => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::Request {
                    source: ProviderError::ResourceNotFound { .. },
                    ..
                }
        )
    }
}

/// 库级 Result
pub type Result<T, E = CustomHostnameError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_names_operation() {
        let err = CustomHostnameError::Request {
            operation: Operation::UpdateSsl,
            source: ProviderError::NetworkError {
                provider: "cloudflare".to_string(),
                detail: "connection reset".to_string(),
            },
        };
        let msg = err.to_string();
        assert!(msg.starts_with("update custom hostname ssl"));
        assert!(msg.contains("connection reset"));
        assert_eq!(err.operation(), Some(Operation::UpdateSsl));
    }

    #[test]
    fn test_invalid_credentials_message() {
        let err = ProviderError::InvalidCredentials {
            provider: "cloudflare".to_string(),
            raw_message: None,
        };
        assert_eq!(err.to_string(), "[cloudflare] 凭证无效");

        let err = ProviderError::InvalidCredentials {
            provider: "cloudflare".to_string(),
            raw_message: Some("Invalid API Token".to_string()),
        };
        assert_eq!(err.to_string(), "[cloudflare] 凭证无效: Invalid API Token");
    }

    #[test]
    fn test_not_found_messages_append_raw_message() {
        let err = ProviderError::ZoneNotFound {
            provider: "cloudflare".to_string(),
            zone_id: "z1".to_string(),
            raw_message: Some("Invalid zone identifier".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "[cloudflare] Zone 不存在: z1: Invalid zone identifier"
        );

        let err = ProviderError::ResourceNotFound {
            provider: "cloudflare".to_string(),
            path: "/zones/z1/custom_hostnames/h1".to_string(),
            raw_message: None,
        };
        assert_eq!(
            err.to_string(),
            "[cloudflare] 资源不存在: /zones/z1/custom_hostnames/h1"
        );
    }

    #[test]
    fn test_not_found_classification() {
        let err = CustomHostnameError::NotFound {
            zone_id: "z".to_string(),
            hostname: "a.example.com".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.operation(), None);

        let err = CustomHostnameError::Request {
            operation: Operation::Get,
            source: ProviderError::ResourceNotFound {
                provider: "cloudflare".to_string(),
                path: "/zones/z/custom_hostnames/x".to_string(),
                raw_message: None,
            },
        };
        assert!(err.is_not_found());
    }
}
