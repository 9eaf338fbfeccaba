//! Cloudflare 凭证

use std::collections::HashMap;
use std::fmt;

use reqwest::RequestBuilder;

use crate::error::{ProviderError, ProviderResult};

use super::CF_PROVIDER_NAME;

/// Cloudflare 认证方式
#[derive(Clone, PartialEq, Eq)]
pub enum CloudflareCredentials {
    /// API Token（`Authorization: Bearer`）
    ApiToken(String),
    /// Global API Key（`X-Auth-Email` + `X-Auth-Key`）
    ApiKey { email: String, key: String },
}

impl CloudflareCredentials {
    /// 从环境变量读取
    ///
    /// 优先 `CLOUDFLARE_API_TOKEN`，否则 `CLOUDFLARE_API_KEY` + `CLOUDFLARE_API_EMAIL`。
    pub fn from_env() -> ProviderResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从前端传入的凭证表读取（`apiToken`，或 `apiKey` + `email`）
    pub fn from_map(map: &HashMap<String, String>) -> ProviderResult<Self> {
        if let Some(token) = non_empty(map.get("apiToken").cloned()) {
            return Ok(Self::ApiToken(token));
        }
        match (
            non_empty(map.get("email").cloned()),
            non_empty(map.get("apiKey").cloned()),
        ) {
            (Some(email), Some(key)) => Ok(Self::ApiKey { email, key }),
            (None, Some(_)) => Err(missing("email")),
            (Some(_), None) => Err(missing("apiKey")),
            (None, None) => Err(missing("apiToken")),
        }
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ProviderResult<Self> {
        if let Some(token) = non_empty(lookup("CLOUDFLARE_API_TOKEN")) {
            return Ok(Self::ApiToken(token));
        }
        match (
            non_empty(lookup("CLOUDFLARE_API_EMAIL")),
            non_empty(lookup("CLOUDFLARE_API_KEY")),
        ) {
            (Some(email), Some(key)) => Ok(Self::ApiKey { email, key }),
            (None, Some(_)) => Err(missing("CLOUDFLARE_API_EMAIL")),
            (Some(_), None) => Err(missing("CLOUDFLARE_API_KEY")),
            (None, None) => Err(missing("CLOUDFLARE_API_TOKEN")),
        }
    }

    /// 给请求加上认证头
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            Self::ApiToken(token) => builder.bearer_auth(token),
            Self::ApiKey { email, key } => builder
                .header("X-Auth-Email", email)
                .header("X-Auth-Key", key),
        }
    }
}

// 不输出密钥
impl fmt::Debug for CloudflareCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiToken(_) => f.debug_tuple("ApiToken").field(&"***").finish(),
            Self::ApiKey { email, .. } => f
                .debug_struct("ApiKey")
                .field("email", email)
                .field("key", &"***")
                .finish(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn missing(field: &str) -> ProviderError {
    ProviderError::InvalidCredentials {
        provider: CF_PROVIDER_NAME.to_string(),
        raw_message: Some(format!("缺少字段: {field}")),
    }
}
