//! Cloudflare HTTP 请求方法

use async_trait::async_trait;
use reqwest::header::USER_AGENT;

use crate::error::{ProviderError, ProviderResult};
use crate::http_client::HttpUtils;
use crate::traits::{
    ErrorContext, HttpMethod, ProviderErrorMapper, RawApiError, RequestDispatcher,
};

use super::{ApiResponse, CloudflareDispatcher};

const USER_AGENT_VALUE: &str = concat!("dns-orchestrator/", env!("CARGO_PKG_VERSION"));

#[async_trait]
impl RequestDispatcher for CloudflareDispatcher {
    async fn dispatch(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> ProviderResult<Vec<u8>> {
        let url = format!("{}{path}", self.base_url);

        let mut builder = self
            .credentials
            .apply(self.client.request(method.into(), &url))
            .header(USER_AGENT, USER_AGENT_VALUE);
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let (status, bytes) =
            HttpUtils::execute_request(builder, self.provider_name(), method.as_str(), path)
                .await?;

        if (200..300).contains(&status) {
            return Ok(bytes);
        }
        Err(self.status_error(status, path, &bytes))
    }
}

impl CloudflareDispatcher {
    /// 非 2xx 响应：优先取响应信封中的第一个错误
    fn status_error(&self, status: u16, path: &str, body: &[u8]) -> ProviderError {
        let raw = serde_json::from_slice::<ApiResponse<serde_json::Value>>(body)
            .ok()
            .and_then(|resp| resp.errors.into_iter().next())
            .map_or_else(
                || {
                    RawApiError::new(format!(
                        "HTTP {status}: {}",
                        String::from_utf8_lossy(body)
                    ))
                },
                |e| RawApiError::with_code(e.code, e.message),
            );

        log::error!(
            "[{}] API 错误: HTTP {status} {path} - {:?} {}",
            self.provider_name(),
            raw.code,
            raw.message
        );
        self.map_error(raw, ErrorContext::from_path(status, path))
    }
}
