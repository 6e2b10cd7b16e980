//! 用户邮箱地址

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 建在已授权邮件域名上的收件地址。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mailbox {
    pub id: String,
    pub user_id: String,
    /// 完整地址，如 `someone@example.com`，全局唯一
    pub email_address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Mailbox {
    #[must_use]
    pub fn new(user_id: &str, email_address: String) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            email_address,
            created_at: now,
            updated_at: now,
        }
    }
}
