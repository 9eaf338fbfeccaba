//! 测试用分发器

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::custom_hostname::{CustomHostname, CustomHostnameSsl};
use crate::error::{ProviderError, ProviderResult};
use crate::traits::{HttpMethod, RequestDispatcher};

/// 记录下来的一次请求
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Value>,
}

/// 按顺序返回预设响应，并记录收到的请求
#[derive(Debug, Default)]
pub struct MockDispatcher {
    responses: Mutex<VecDeque<ProviderResult<Vec<u8>>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_json(self, value: Value) -> Self {
        self.respond_raw(value.to_string().as_bytes())
    }

    pub fn respond_raw(self, body: &[u8]) -> Self {
        self.responses.lock().unwrap().push_back(Ok(body.to_vec()));
        self
    }

    pub fn respond_err(self, err: ProviderError) -> Self {
        self.responses.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("no request recorded")
    }
}

#[async_trait]
impl RequestDispatcher for MockDispatcher {
    async fn dispatch(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> ProviderResult<Vec<u8>> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.to_string(),
            body,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(network_error("no response queued")))
    }
}

/// 单 zone 的内存后端，支持 GET / PATCH 单个 custom hostname
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    zone_id: String,
    records: Mutex<HashMap<String, CustomHostname>>,
}

impl InMemoryBackend {
    pub fn new(zone_id: &str, records: impl IntoIterator<Item = CustomHostname>) -> Self {
        Self {
            zone_id: zone_id.to_string(),
            records: Mutex::new(records.into_iter().map(|r| (r.id.clone(), r)).collect()),
        }
    }
}

#[async_trait]
impl RequestDispatcher for InMemoryBackend {
    async fn dispatch(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> ProviderResult<Vec<u8>> {
        let prefix = format!("/zones/{}/custom_hostnames/", self.zone_id);
        let id = path
            .strip_prefix(&prefix)
            .ok_or_else(|| network_error(format!("unexpected path {path}")))?;

        let mut records = self.records.lock().unwrap();
        let record = records
            .get_mut(id)
            .ok_or_else(|| ProviderError::ResourceNotFound {
                provider: "memory".to_string(),
                path: path.to_string(),
                raw_message: None,
            })?;

        if method == HttpMethod::Patch {
            let ssl: CustomHostnameSsl =
                serde_json::from_value(body.unwrap_or_default()).map_err(|e| {
                    ProviderError::SerializationError {
                        provider: "memory".to_string(),
                        detail: e.to_string(),
                    }
                })?;
            record.ssl = ssl;
        }

        Ok(json!({"success": true, "errors": [], "messages": [], "result": record})
            .to_string()
            .into_bytes())
    }
}

pub fn network_error(detail: impl Into<String>) -> ProviderError {
    ProviderError::NetworkError {
        provider: "mock".to_string(),
        detail: detail.into(),
    }
}

/// 包装成 Cloudflare 单资源响应
pub fn envelope(result: Value) -> Value {
    json!({"success": true, "errors": [], "messages": [], "result": result})
}

/// 包装成 Cloudflare 列表响应
pub fn list_envelope(result: Vec<Value>, page: u32, total_count: u32) -> Value {
    let count = result.len();
    json!({
        "success": true,
        "errors": [],
        "messages": [],
        "result": result,
        "result_info": {
            "page": page,
            "per_page": 50,
            "count": count,
            "total_count": total_count,
            "total_pages": total_count.div_ceil(50)
        }
    })
}
