//! 业务逻辑服务层

mod config_service;
mod domain_service;
mod mailbox_service;
mod record_service;

pub use config_service::ConfigService;
pub use domain_service::DomainService;
pub use mailbox_service::MailboxService;
pub use record_service::RecordService;

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use zonekeeper_provider::ZoneProvider;

use crate::error::{CoreError, CoreResult};
use crate::probe::ReachabilityProbe;
use crate::traits::{ConfigRepository, DomainRepository, MailboxRepository, RecordRepository};
use crate::types::CloudflareConfig;

/// 运营策略：保留名单与各配额组的创建上限。
///
/// 由外层（配置文件）注入；核心流程只读。
#[derive(Debug, Clone, Default)]
pub struct Policy {
    /// 禁用的记录名，完整域名或局部标签均可命中
    pub reserved_record_names: HashSet<String>,
    /// 禁用的邮箱前缀
    pub reserved_mailbox_prefixes: HashSet<String>,
    /// 配额组 → 记录上限；缺省组不设限
    pub record_quota: HashMap<String, u64>,
    /// 配额组 → 邮箱上限；缺省组不设限
    pub mailbox_quota: HashMap<String, u64>,
}

impl Policy {
    /// 组合后的记录名是否命中保留名单（完整名或标签任一命中即拒）。
    #[must_use]
    pub fn is_reserved_record_name(&self, qualified: &str, label: &str) -> bool {
        self.reserved_record_names.contains(qualified)
            || self.reserved_record_names.contains(label)
    }

    #[must_use]
    pub fn is_reserved_mailbox_prefix(&self, prefix: &str) -> bool {
        self.reserved_mailbox_prefixes.contains(prefix)
    }

    /// 配额组的记录上限；`None` 表示不设限。
    #[must_use]
    pub fn record_limit(&self, team: &str) -> Option<u64> {
        self.record_quota.get(team).copied()
    }

    #[must_use]
    pub fn mailbox_limit(&self, team: &str) -> Option<u64> {
        self.mailbox_quota.get(team).copied()
    }
}

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入平台特定的存储实现。
pub struct ServiceContext {
    /// 配置仓库
    pub config_repository: Arc<dyn ConfigRepository>,
    /// 域名仓库
    pub domain_repository: Arc<dyn DomainRepository>,
    /// 记录镜像仓库
    pub record_repository: Arc<dyn RecordRepository>,
    /// 邮箱仓库
    pub mailbox_repository: Arc<dyn MailboxRepository>,
    /// Cloudflare API
    pub provider: Arc<dyn ZoneProvider>,
    /// 可达性探测
    pub probe: Arc<dyn ReachabilityProbe>,
    /// 运营策略
    pub policy: Policy,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        config_repository: Arc<dyn ConfigRepository>,
        domain_repository: Arc<dyn DomainRepository>,
        record_repository: Arc<dyn RecordRepository>,
        mailbox_repository: Arc<dyn MailboxRepository>,
        provider: Arc<dyn ZoneProvider>,
        probe: Arc<dyn ReachabilityProbe>,
        policy: Policy,
    ) -> Self {
        Self {
            config_repository,
            domain_repository,
            record_repository,
            mailbox_repository,
            provider,
            probe,
            policy,
        }
    }

    /// 当前生效配置；没有任何配置时返回 `NotConfigured`。
    pub async fn active_config(&self) -> CoreResult<CloudflareConfig> {
        self.config_repository
            .find_latest()
            .await?
            .ok_or(CoreError::NotConfigured)
    }
}
