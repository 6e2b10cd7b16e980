//! 域名（zone）及服务授权标志

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 域名可被授权的三类下游服务。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Dns,
    Email,
    #[serde(rename = "shorturl")]
    ShortUrl,
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dns => write!(f, "dns"),
            Self::Email => write!(f, "email"),
            Self::ShortUrl => write!(f, "shorturl"),
        }
    }
}

/// 同步发现的一个 Cloudflare zone。
///
/// `zone_id` 唯一且稳定；重新同步只更新 `domain_name` / `config_id`，
/// 三个授权标志只能由管理员显式切换。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub id: String,
    pub domain_name: String,
    pub zone_id: String,
    pub config_id: String,
    #[serde(rename = "useDNS")]
    pub use_dns: bool,
    pub use_emails: bool,
    #[serde(rename = "useShortURL")]
    pub use_short_url: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Domain {
    /// 首次发现时建行：三个标志一律 false。
    #[must_use]
    pub fn discovered(domain_name: String, zone_id: String, config_id: String) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            domain_name,
            zone_id,
            config_id,
            use_dns: false,
            use_emails: false,
            use_short_url: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// 该域名是否对某类服务开放。
    #[must_use]
    pub fn allows(&self, service: ServiceType) -> bool {
        match service {
            ServiceType::Dns => self.use_dns,
            ServiceType::Email => self.use_emails,
            ServiceType::ShortUrl => self.use_short_url,
        }
    }
}

/// 管理员 PATCH 的标志子集；未出现的字段保持不变。
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DomainFlagPatch {
    #[serde(default, rename = "useDNS")]
    pub use_dns: Option<bool>,
    #[serde(default, rename = "useEmails")]
    pub use_emails: Option<bool>,
    #[serde(default, rename = "useShortURL")]
    pub use_short_url: Option<bool>,
}

impl DomainFlagPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.use_dns.is_none() && self.use_emails.is_none() && self.use_short_url.is_none()
    }
}

/// 暴露给普通用户的投影：只含 id、名称和三个能力位，不含凭证与 zone 细节。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizedDomain {
    pub id: String,
    pub domain_name: String,
    #[serde(rename = "canUseDNS")]
    pub can_use_dns: bool,
    pub can_use_emails: bool,
    #[serde(rename = "canUseShortURL")]
    pub can_use_short_url: bool,
}

impl From<&Domain> for AuthorizedDomain {
    fn from(domain: &Domain) -> Self {
        Self {
            id: domain.id.clone(),
            domain_name: domain.domain_name.clone(),
            can_use_dns: domain.use_dns,
            can_use_emails: domain.use_emails,
            can_use_short_url: domain.use_short_url,
        }
    }
}
