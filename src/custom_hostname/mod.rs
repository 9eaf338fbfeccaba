//! Cloudflare custom hostname（SSL for SaaS）资源客户端
//!
//! 每个操作对应一次请求和一次 JSON 解析，zone ID 原样透传。
//! 不做重试、缓存或分页遍历，这些由调用方或分发器负责。

mod types;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{CustomHostnameError, Operation, Result};
use crate::http_client::HttpUtils;
use crate::providers::cloudflare::{ApiResponse, ResultInfo};
use crate::traits::{HttpMethod, RequestDispatcher};

pub use types::{
    CustomHostname, CustomHostnameFallbackOrigin, CustomHostnameOwnershipVerification,
    CustomHostnameOwnershipVerificationHttp, CustomHostnameSsl, CustomHostnameSslSettings,
    CustomHostnameStatus, CustomMetadata, SslToggle, SslValidationError,
};

/// 列表接口固定的每页数量
pub const CUSTOM_HOSTNAMES_PER_PAGE: u32 = 50;

/// 删除接口返回的 `result`
#[derive(Debug, Default, serde::Deserialize)]
struct DeletedCustomHostname {
    #[serde(default)]
    id: Option<String>,
}

/// Custom hostname 客户端
///
/// 无状态，可在多个任务间共享（取决于分发器本身是否线程安全）。
#[derive(Debug, Clone)]
pub struct CustomHostnameClient<D> {
    dispatcher: D,
}

impl<D: RequestDispatcher> CustomHostnameClient<D> {
    pub fn new(dispatcher: D) -> Self {
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// 创建 custom hostname 并申请 SSL 证书
    ///
    /// 返回服务端分配的 ID 与初始状态。
    pub async fn create_custom_hostname(
        &self,
        zone_id: &str,
        custom_hostname: &CustomHostname,
    ) -> Result<CustomHostname> {
        let path = format!("/zones/{zone_id}/custom_hostnames");
        let body = encode(Operation::Create, custom_hostname)?;
        let created: CustomHostname = self
            .request(Operation::Create, HttpMethod::Post, &path, Some(body))
            .await?
            .result
            .unwrap_or_default();

        log::info!(
            "Created custom hostname {} ({}) in zone {zone_id}",
            created.hostname,
            created.id
        );
        Ok(created)
    }

    /// 获取单个 custom hostname
    pub async fn custom_hostname(
        &self,
        zone_id: &str,
        custom_hostname_id: &str,
    ) -> Result<CustomHostname> {
        let path = format!("/zones/{zone_id}/custom_hostnames/{custom_hostname_id}");
        Ok(self
            .request(Operation::Get, HttpMethod::Get, &path, None)
            .await?
            .result
            .unwrap_or_default())
    }

    /// 按 hostname 查找 ID
    ///
    /// 只查询第一页（最多 [`CUSTOM_HOSTNAMES_PER_PAGE`] 条）。服务端按 hostname 过滤后
    /// 匹配项通常就在第一页，但如果完全匹配的记录落在后续页，这里会返回
    /// [`CustomHostnameError::NotFound`]。
    pub async fn custom_hostname_id_by_name(
        &self,
        zone_id: &str,
        hostname: &str,
    ) -> Result<String> {
        let (custom_hostnames, _) = self.custom_hostnames(zone_id, 1, Some(hostname)).await?;

        if let Some(found) = custom_hostnames.into_iter().find(|ch| ch.hostname == hostname) {
            return Ok(found.id);
        }

        log::warn!("Custom hostname {hostname} not found on first page of zone {zone_id}");
        Err(CustomHostnameError::NotFound {
            zone_id: zone_id.to_string(),
            hostname: hostname.to_string(),
        })
    }

    /// 分页列出 custom hostname
    ///
    /// # Arguments
    /// * `page` - 页码，从 1 开始
    /// * `hostname` - 可选的 hostname 过滤，空字符串等同于不过滤
    ///
    /// 返回的 [`ResultInfo`] 可用于调用方自行翻页。
    pub async fn custom_hostnames(
        &self,
        zone_id: &str,
        page: u32,
        hostname: Option<&str>,
    ) -> Result<(Vec<CustomHostname>, ResultInfo)> {
        let path = format!(
            "/zones/{zone_id}/custom_hostnames?{}",
            list_query(page, hostname)
        );
        let response = self
            .request::<Vec<CustomHostname>>(Operation::List, HttpMethod::Get, &path, None)
            .await?;

        Ok((
            response.result.unwrap_or_default(),
            response.result_info.unwrap_or_default(),
        ))
    }

    /// 更新 custom hostname（只发送非空字段）
    pub async fn update_custom_hostname(
        &self,
        zone_id: &str,
        custom_hostname_id: &str,
        custom_hostname: &CustomHostname,
    ) -> Result<CustomHostname> {
        let path = format!("/zones/{zone_id}/custom_hostnames/{custom_hostname_id}");
        let body = encode(Operation::Update, custom_hostname)?;
        Ok(self
            .request(Operation::Update, HttpMethod::Patch, &path, Some(body))
            .await?
            .result
            .unwrap_or_default())
    }

    /// 修改 SSL 配置
    ///
    /// 请求体只包含 SSL 部分，返回完整的 custom hostname。
    pub async fn update_custom_hostname_ssl(
        &self,
        zone_id: &str,
        custom_hostname_id: &str,
        ssl: &CustomHostnameSsl,
    ) -> Result<CustomHostname> {
        let path = format!("/zones/{zone_id}/custom_hostnames/{custom_hostname_id}");
        let body = encode(Operation::UpdateSsl, ssl)?;
        Ok(self
            .request(Operation::UpdateSsl, HttpMethod::Patch, &path, Some(body))
            .await?
            .result
            .unwrap_or_default())
    }

    /// 删除 custom hostname（及已签发的证书）
    ///
    /// 响应体只用于校验格式，格式错误同样返回 [`CustomHostnameError::Decode`]。
    pub async fn delete_custom_hostname(
        &self,
        zone_id: &str,
        custom_hostname_id: &str,
    ) -> Result<()> {
        let path = format!("/zones/{zone_id}/custom_hostnames/{custom_hostname_id}");
        let deleted = self
            .request::<DeletedCustomHostname>(Operation::Delete, HttpMethod::Delete, &path, None)
            .await?
            .result
            .unwrap_or_default();

        log::info!(
            "Deleted custom hostname {} in zone {zone_id}",
            deleted.id.as_deref().unwrap_or(custom_hostname_id)
        );
        Ok(())
    }

    /// 获取 zone 的 fallback origin
    pub async fn custom_hostname_fallback_origin(
        &self,
        zone_id: &str,
    ) -> Result<CustomHostnameFallbackOrigin> {
        let path = fallback_origin_path(zone_id);
        Ok(self
            .request(Operation::GetFallbackOrigin, HttpMethod::Get, &path, None)
            .await?
            .result
            .unwrap_or_default())
    }

    /// 设置 zone 的 fallback origin
    pub async fn update_custom_hostname_fallback_origin(
        &self,
        zone_id: &str,
        fallback_origin: &CustomHostnameFallbackOrigin,
    ) -> Result<CustomHostnameFallbackOrigin> {
        let path = fallback_origin_path(zone_id);
        let body = encode(Operation::UpdateFallbackOrigin, fallback_origin)?;
        Ok(self
            .request(
                Operation::UpdateFallbackOrigin,
                HttpMethod::Put,
                &path,
                Some(body),
            )
            .await?
            .result
            .unwrap_or_default())
    }

    /// 删除 zone 的 fallback origin
    pub async fn delete_custom_hostname_fallback_origin(&self, zone_id: &str) -> Result<()> {
        let path = fallback_origin_path(zone_id);
        self.request::<serde_json::Value>(
            Operation::DeleteFallbackOrigin,
            HttpMethod::Delete,
            &path,
            None,
        )
        .await?;

        log::info!("Deleted custom hostname fallback origin in zone {zone_id}");
        Ok(())
    }

    /// 发送请求并解析响应信封
    async fn request<T: DeserializeOwned>(
        &self,
        operation: Operation,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<ApiResponse<T>> {
        let bytes = self
            .dispatcher
            .dispatch(method, path, body)
            .await
            .map_err(|source| CustomHostnameError::Request { operation, source })?;

        HttpUtils::parse_json(&bytes, &operation.to_string())
            .map_err(|source| CustomHostnameError::Decode { operation, source })
    }
}

fn encode<B: Serialize>(operation: Operation, body: &B) -> Result<serde_json::Value> {
    serde_json::to_value(body).map_err(|source| CustomHostnameError::Encode { operation, source })
}

fn fallback_origin_path(zone_id: &str) -> String {
    format!("/zones/{zone_id}/custom_hostnames/fallback_origin")
}

/// `per_page` 固定为 50；hostname 为空时不带过滤参数
fn list_query(page: u32, hostname: Option<&str>) -> String {
    let mut query = format!("per_page={CUSTOM_HOSTNAMES_PER_PAGE}&page={page}");
    if let Some(hostname) = hostname.filter(|h| !h.is_empty()) {
        query.push_str("&hostname=");
        query.push_str(&urlencoding::encode(hostname));
    }
    query
}
