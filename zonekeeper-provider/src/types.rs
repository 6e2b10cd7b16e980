//! Cloudflare API 类型定义

use serde::{Deserialize, Serialize};

/// 调用凭证：账户邮箱 + Global API Key。
///
/// 凭证随每次调用传入（由调用方从配置存储读取），客户端本身不持有。
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub api_key: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            api_key: api_key.into(),
        }
    }
}

/// Cloudflare API 通用响应信封
#[derive(Debug, Deserialize)]
pub struct CloudflareResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<ApiMessage>,
    #[serde(default)]
    pub messages: Vec<ApiMessage>,
    pub result: Option<T>,
    pub result_info: Option<ResultInfo>,
}

/// `errors` / `messages` 数组元素
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResultInfo {
    pub page: u32,
    pub per_page: u32,
    pub total_count: u32,
}

/// Cloudflare Zone
#[derive(Debug, Clone, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// DNS 记录创建/更新请求体
#[derive(Debug, Clone, Serialize)]
pub struct RecordPayload {
    #[serde(rename = "type")]
    pub record_type: String,
    /// 完整域名（含 zone 后缀），由调用方先行拼装。
    pub name: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// DNS 记录（响应）
#[derive(Debug, Clone, Deserialize)]
pub struct RecordResult {
    pub id: String,
    pub zone_id: String,
    pub zone_name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub content: String,
    pub ttl: u32,
    #[serde(default)]
    pub proxied: bool,
    #[serde(default)]
    pub proxiable: bool,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub modified_on: Option<String>,
}

/// DELETE 响应的 result 字段只含被删记录的 id
#[derive(Debug, Clone, Deserialize)]
pub struct DeletedRecord {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_zone_list_envelope() {
        let body = r#"{
            "success": true,
            "errors": [],
            "messages": [],
            "result": [
                {"id": "Z1", "name": "example.com", "status": "active"},
                {"id": "Z2", "name": "example.org"}
            ],
            "result_info": {"page": 1, "per_page": 50, "total_count": 2}
        }"#;
        let resp: CloudflareResponse<Vec<Zone>> = serde_json::from_str(body).unwrap();
        assert!(resp.success);
        let zones = resp.result.unwrap();
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].id, "Z1");
        assert_eq!(zones[0].name, "example.com");
        assert_eq!(zones[1].status, None);
        assert_eq!(resp.result_info.unwrap().total_count, 2);
    }

    #[test]
    fn deserialize_error_envelope() {
        let body = r#"{
            "success": false,
            "errors": [{"code": 81057, "message": "The record already exists."}],
            "messages": [],
            "result": null
        }"#;
        let resp: CloudflareResponse<RecordResult> = serde_json::from_str(body).unwrap();
        assert!(!resp.success);
        assert!(resp.result.is_none());
        assert_eq!(resp.errors[0].code, 81057);
    }

    #[test]
    fn deserialize_record_result_with_optional_fields_missing() {
        let body = r#"{
            "id": "R1",
            "zone_id": "Z1",
            "zone_name": "example.com",
            "type": "CNAME",
            "name": "baidu.example.com",
            "content": "target.example.net",
            "ttl": 1
        }"#;
        let record: RecordResult = serde_json::from_str(body).unwrap();
        assert!(!record.proxied);
        assert!(!record.proxiable);
        assert!(record.tags.is_empty());
        assert_eq!(record.comment, None);
    }

    #[test]
    fn serialize_payload_skips_unset_fields() {
        let payload = RecordPayload {
            record_type: "A".to_string(),
            name: "www.example.com".to_string(),
            content: "1.2.3.4".to_string(),
            ttl: Some(300),
            proxied: None,
            comment: None,
            tags: None,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"type\":\"A\""));
        assert!(json.contains("\"ttl\":300"));
        assert!(!json.contains("proxied"));
        assert!(!json.contains("comment"));
    }
}
