//! Cloudflare API 请求分发

mod credentials;
mod error;
mod http;
mod types;

use reqwest::Client;

pub use credentials::CloudflareCredentials;
pub use types::{ApiResponse, ResponseInfo, ResultInfo};

pub(crate) const CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";
pub(crate) const CF_PROVIDER_NAME: &str = "cloudflare";

/// Cloudflare 请求分发器
///
/// 负责 Base URL 拼接、认证头注入与 HTTP 状态码到 [`ProviderError`](crate::ProviderError) 的映射。
#[derive(Debug, Clone)]
pub struct CloudflareDispatcher {
    pub(crate) client: Client,
    pub(crate) credentials: CloudflareCredentials,
    pub(crate) base_url: String,
}

impl CloudflareDispatcher {
    pub fn new(credentials: CloudflareCredentials) -> Self {
        Self {
            client: Client::new(),
            credentials,
            base_url: CF_API_BASE.to_string(),
        }
    }

    /// 覆盖 API 地址（测试、代理）
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// 使用外部配置好的 `reqwest::Client`（超时、代理等）
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
