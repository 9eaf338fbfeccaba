//! Cloudflare custom hostname 客户端
//!
//! 将 custom hostname（SSL for SaaS）相关的增删改查与 zone 级 fallback origin
//! 映射为类型化的异步调用。认证、Base URL 与 HTTP 状态码映射由 [`RequestDispatcher`]
//! 负责，默认实现为基于 reqwest 的 [`CloudflareDispatcher`]。
//!
//! # Example
//!
//! ```ignore
//! use dns_orchestrator_custom_hostname::{
//!     CloudflareCredentials, CloudflareDispatcher, CustomHostname, CustomHostnameClient,
//! };
//!
//! let dispatcher = CloudflareDispatcher::new(CloudflareCredentials::from_env()?);
//! let client = CustomHostnameClient::new(dispatcher);
//!
//! let created = client
//!     .create_custom_hostname(zone_id, &CustomHostname::new("app.example.com"))
//!     .await?;
//! let id = client.custom_hostname_id_by_name(zone_id, "app.example.com").await?;
//! assert_eq!(created.id, id);
//! ```

mod custom_hostname;
mod error;
mod http_client;
mod providers;
mod traits;
mod utils;

#[cfg(test)]
mod test_support;

pub use custom_hostname::{
    CUSTOM_HOSTNAMES_PER_PAGE, CustomHostname, CustomHostnameClient, CustomHostnameFallbackOrigin,
    CustomHostnameOwnershipVerification, CustomHostnameOwnershipVerificationHttp,
    CustomHostnameSsl, CustomHostnameSslSettings, CustomHostnameStatus, CustomMetadata, SslToggle,
    SslValidationError,
};
pub use error::{CustomHostnameError, Operation, ProviderError, ProviderResult, Result};
pub use http_client::HttpUtils;
pub use providers::cloudflare::{
    ApiResponse, CloudflareCredentials, CloudflareDispatcher, ResponseInfo, ResultInfo,
};
pub use traits::{ErrorContext, HttpMethod, ProviderErrorMapper, RawApiError, RequestDispatcher};
