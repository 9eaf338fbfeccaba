//! 请求分发与错误映射抽象

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{ProviderError, ProviderResult};

/// 支持的 HTTP 方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Patch => Self::PATCH,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// 请求分发器 Trait
///
/// 负责认证头、Base URL 拼接、传输错误以及 HTTP 状态码到错误的映射。
/// 成功时返回原始响应体，由调用方自行解析。
///
/// 实现:
/// - [`CloudflareDispatcher`](crate::CloudflareDispatcher) (reqwest)
#[async_trait]
pub trait RequestDispatcher: Send + Sync {
    /// 发送一次请求
    ///
    /// # Arguments
    /// * `method` - HTTP 方法
    /// * `path` - 以 `/` 开头的 API 路径（可带 query string）
    /// * `body` - 可选的 JSON 请求体
    async fn dispatch(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> ProviderResult<Vec<u8>>;
}

#[async_trait]
impl<D: RequestDispatcher + ?Sized> RequestDispatcher for Arc<D> {
    async fn dispatch(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> ProviderResult<Vec<u8>> {
        (**self).dispatch(method, path, body).await
    }
}

#[async_trait]
impl<'a, D: RequestDispatcher + ?Sized> RequestDispatcher for &'a D {
    async fn dispatch(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> ProviderResult<Vec<u8>> {
        (**self).dispatch(method, path, body).await
    }
}

/// API 返回的原始错误
#[derive(Debug, Clone, Default)]
pub struct RawApiError {
    pub code: Option<String>,
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl ToString, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.to_string()),
            message: message.into(),
        }
    }
}

/// 错误发生时的请求上下文
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    pub status: u16,
    pub path: String,
    pub zone_id: Option<String>,
}

impl ErrorContext {
    /// 从请求路径中提取 zone ID（`/zones/{zone_id}/...`）
    pub fn from_path(status: u16, path: &str) -> Self {
        let zone_id = path
            .strip_prefix("/zones/")
            .and_then(|rest| rest.split(['/', '?']).next())
            .filter(|id| !id.is_empty())
            .map(str::to_string);
        Self {
            status,
            path: path.to_string(),
            zone_id,
        }
    }
}

/// Provider 错误映射 Trait
pub trait ProviderErrorMapper {
    fn provider_name(&self) -> &'static str;

    /// 将 API 原始错误映射为 [`ProviderError`]
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_message: raw.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_context_extracts_zone_id() {
        let ctx = ErrorContext::from_path(404, "/zones/abc123/custom_hostnames/xyz");
        assert_eq!(ctx.zone_id.as_deref(), Some("abc123"));
        assert_eq!(ctx.status, 404);

        let ctx = ErrorContext::from_path(400, "/zones/abc123?page=1");
        assert_eq!(ctx.zone_id.as_deref(), Some("abc123"));

        let ctx = ErrorContext::from_path(500, "/user/tokens/verify");
        assert!(ctx.zone_id.is_none());
    }

    #[test]
    fn test_http_method_names() {
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
        assert_eq!(reqwest::Method::from(HttpMethod::Delete), reqwest::Method::DELETE);
    }
}
