//! 用户 DNS 记录镜像

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use zonekeeper_provider::{RecordPayload, RecordResult};

/// Cloudflare DNS 记录的本地影子行，归属于单个用户。
///
/// 只在远端调用成功之后写入；API 返回的字段永远以远端为准。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: String,
    /// Cloudflare 的记录 id
    pub record_id: String,
    pub zone_id: String,
    pub zone_name: String,
    /// 完整域名（含 zone 后缀）
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    pub proxied: bool,
    pub proxiable: bool,
    pub ttl: u32,
    pub comment: String,
    /// 逗号拼接的标签串，镜像自远端 tags 数组
    pub tags: String,
    /// 可达性探测结果（0/1）
    pub active: bool,
    pub created_on: Option<String>,
    pub modified_on: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// 由远端返回结果构造镜像行。
    #[must_use]
    pub fn from_remote(user_id: &str, result: &RecordResult, active: bool) -> Self {
        let now = Utc::now();
        Self {
            user_id: user_id.to_string(),
            record_id: result.id.clone(),
            zone_id: result.zone_id.clone(),
            zone_name: result.zone_name.clone(),
            name: result.name.clone(),
            record_type: result.record_type.clone(),
            content: result.content.clone(),
            proxied: result.proxied,
            proxiable: result.proxiable,
            ttl: result.ttl,
            comment: result.comment.clone().unwrap_or_default(),
            tags: result.tags.join(","),
            active,
            created_on: result.created_on.clone(),
            modified_on: result.modified_on.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// 用户提交的记录草稿。
///
/// `name` 可以是局部标签（`baidu`、`@`）也可以是已限定的完整域名，
/// 流程里统一经 composer 转成完整域名再外发。
#[derive(Debug, Clone, Deserialize)]
pub struct RecordDraft {
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub content: String,
    #[serde(default)]
    pub ttl: Option<u32>,
    #[serde(default)]
    pub proxied: Option<bool>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl RecordDraft {
    /// 生成外发请求体；`qualified_name` 由 composer 提供。
    #[must_use]
    pub fn to_payload(&self, qualified_name: String) -> RecordPayload {
        RecordPayload {
            record_type: self.record_type.clone(),
            name: qualified_name,
            content: self.content.clone(),
            ttl: self.ttl,
            proxied: self.proxied,
            comment: self.comment.clone(),
            tags: self.tags.clone(),
        }
    }
}
