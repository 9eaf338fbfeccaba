//! Cloudflare 错误映射

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{CF_PROVIDER_NAME, CloudflareDispatcher};

/// Cloudflare 错误码映射
/// 参考: <https://api.cloudflare.com/#getting-started-responses>
impl ProviderErrorMapper for CloudflareDispatcher {
    fn provider_name(&self) -> &'static str {
        CF_PROVIDER_NAME
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // 认证错误
            Some("9109" | "10000") => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },
            // Zone 不存在 / zone ID 无效
            Some("7003" | "1003") => ProviderError::ZoneNotFound {
                provider: self.provider_name().to_string(),
                zone_id: context.zone_id.unwrap_or_default(),
                raw_message: Some(raw.message),
            },
            _ if context.status == 404 => ProviderError::ResourceNotFound {
                provider: self.provider_name().to_string(),
                path: context.path,
                raw_message: Some(raw.message),
            },
            // 其他错误 fallback
            _ if context.status != 0 => ProviderError::ApiError {
                provider: self.provider_name().to_string(),
                status: context.status,
                code: raw.code,
                message: raw.message,
            },
            _ => self.unknown_error(raw),
        }
    }
}
