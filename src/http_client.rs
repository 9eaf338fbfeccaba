//! 通用 HTTP 工具
//!
//! 发送请求、日志记录、读取响应体与 JSON 解析。
//! 认证头与 URL 由调用方构造好 `RequestBuilder` 后传入。

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, ProviderResult};

/// HTTP 工具函数集
pub struct HttpUtils;

impl HttpUtils {
    /// 执行 HTTP 请求并返回状态码与原始响应体
    ///
    /// # Arguments
    /// * `request_builder` - 已配置好的请求构造器（包含 URL、headers、body 等）
    /// * `provider_name` - Provider 名称（用于日志）
    /// * `method_name` - 请求方法名（如 "GET", "POST"，用于日志）
    /// * `path` - 请求路径（用于日志）
    ///
    /// # Returns
    /// * `Ok((status_code, body))` - 任意 HTTP 状态都视为成功收到响应
    /// * `Err(ProviderError::NetworkError)` - 网络错误
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        path: &str,
    ) -> ProviderResult<(u16, Vec<u8>)> {
        log::debug!("[{provider_name}] {method_name} {path}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            })?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        let body = response
            .bytes()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("读取响应失败: {e}"),
            })?;

        log::trace!(
            "[{provider_name}] Response Body: {}",
            String::from_utf8_lossy(&body)
        );

        Ok((status_code, body.to_vec()))
    }

    /// 解析 JSON 响应，失败时记录原始响应
    ///
    /// 返回 serde 原始错误，由调用方决定包装成哪种错误。
    pub fn parse_json<T>(body: &[u8], context: &str) -> Result<T, serde_json::Error>
    where
        T: DeserializeOwned,
    {
        serde_json::from_slice(body).inspect_err(|e| {
            log::error!("[{context}] JSON 解析失败: {e}");
            log::error!("[{context}] 原始响应: {}", String::from_utf8_lossy(body));
        })
    }
}
