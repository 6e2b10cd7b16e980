//! Cloudflare 账户配置

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use zonekeeper_provider::Credentials;

/// 一套 Cloudflare 账户凭证。
///
/// 约定「最新创建的一行」为当前生效配置；历史行被容忍但永远不会被读取。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudflareConfig {
    pub id: String,
    pub account_id: String,
    /// Global API Key，按基线契约明文存储并返回给管理员编辑。
    pub global_key: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CloudflareConfig {
    /// 用管理员提交的字段新建一行。
    #[must_use]
    pub fn new(account_id: String, global_key: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            account_id,
            global_key,
            email,
            created_at: now,
            updated_at: now,
        }
    }

    /// 供 provider 调用的凭证对。
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.global_key.clone())
    }
}

/// 管理员配置表单
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSubmission {
    pub account_id: String,
    pub global_key: String,
    pub email: String,
}

/// 保存配置 / 刷新域名后的结果
#[derive(Debug, Clone, Serialize)]
pub struct SyncOutcome {
    pub message: String,
    /// 本次同步看到的 zone 数
    pub domains: usize,
}
