//! Cloudflare API 类型定义

use serde::{Deserialize, Serialize};

/// Cloudflare API 通用响应
///
/// 单个资源放在 `result` 中，列表接口额外带 `result_info` 分页信息。
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default, deserialize_with = "crate::utils::null_default")]
    pub success: bool,
    #[serde(default, deserialize_with = "crate::utils::null_default")]
    pub errors: Vec<ResponseInfo>,
    #[serde(default, deserialize_with = "crate::utils::null_default")]
    pub messages: Vec<ResponseInfo>,
    pub result: Option<T>,
    pub result_info: Option<ResultInfo>,
}

/// 错误 / 提示信息
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResponseInfo {
    #[serde(default, deserialize_with = "crate::utils::null_default")]
    pub code: i64,
    #[serde(default, deserialize_with = "crate::utils::null_default")]
    pub message: String,
}

/// 列表接口分页信息
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResultInfo {
    #[serde(default, deserialize_with = "crate::utils::null_default")]
    pub page: u32,
    #[serde(default, deserialize_with = "crate::utils::null_default")]
    pub per_page: u32,
    #[serde(default, deserialize_with = "crate::utils::null_default")]
    pub total_pages: u32,
    #[serde(default, deserialize_with = "crate::utils::null_default")]
    pub count: u32,
    #[serde(
        default,
        rename = "total_count",
        deserialize_with = "crate::utils::null_default"
    )]
    pub total: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_tolerates_missing_fields() {
        let resp: ApiResponse<serde_json::Value> = serde_json::from_str("{}").unwrap();
        assert!(!resp.success);
        assert!(resp.errors.is_empty());
        assert!(resp.result.is_none());
        assert!(resp.result_info.is_none());
    }

    #[test]
    fn test_envelope_tolerates_null_fields() {
        let resp: ApiResponse<serde_json::Value> = serde_json::from_str(
            r#"{"success": null, "errors": null, "messages": null, "result": {"id": "h1"}}"#,
        )
        .unwrap();
        assert!(!resp.success);
        assert!(resp.errors.is_empty());
        assert!(resp.messages.is_empty());
        assert!(resp.result.is_some());

        let resp: ApiResponse<Vec<serde_json::Value>> = serde_json::from_str(
            r#"{
                "result": [],
                "errors": [{"code": null, "message": null}],
                "result_info": {"page": 1, "per_page": null, "total_pages": null, "count": 0, "total_count": null}
            }"#,
        )
        .unwrap();
        assert_eq!(resp.errors, vec![ResponseInfo::default()]);
        let info = resp.result_info.unwrap();
        assert_eq!(info.page, 1);
        assert_eq!(info.per_page, 0);
        assert_eq!(info.total, 0);
    }

    #[test]
    fn test_result_info() {
        let resp: ApiResponse<Vec<serde_json::Value>> = serde_json::from_str(
            r#"{
                "success": true,
                "errors": [],
                "messages": [],
                "result": [],
                "result_info": {"page": 2, "per_page": 50, "total_pages": 3, "count": 50, "total_count": 120}
            }"#,
        )
        .unwrap();
        let info = resp.result_info.unwrap();
        assert_eq!(info.page, 2);
        assert_eq!(info.total_pages, 3);
        assert_eq!(info.total, 120);
    }
}
