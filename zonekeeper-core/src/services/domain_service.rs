//! 域名授权闸门服务
//!
//! 所有「这个域名能不能用来做 X」的判断都汇聚到这里：
//! 既供选择列表过滤，也供每个变更流程在动手前做服务端校验。

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{AuthorizedDomain, Domain, DomainFlagPatch, ServiceType};

/// 域名授权闸门
pub struct DomainService {
    ctx: Arc<ServiceContext>,
}

impl DomainService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 管理员视图：当前配置下的全部域名（含标志）。
    /// 尚未配置时返回空表而非报错。
    pub async fn list_domains(&self) -> CoreResult<Vec<Domain>> {
        match self.ctx.config_repository.find_latest().await? {
            Some(config) => self.ctx.domain_repository.find_by_config(&config.id).await,
            None => Ok(Vec::new()),
        }
    }

    /// 单个域名详情（管理员）。
    pub async fn get_domain(&self, id: &str) -> CoreResult<Domain> {
        self.ctx
            .domain_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("domain {id}")))
    }

    /// 管理员切换授权标志；幂等，`id` 不存在时 `NotFound`。
    pub async fn set_flags(&self, id: &str, patch: DomainFlagPatch) -> CoreResult<Domain> {
        let updated = self.ctx.domain_repository.update_flags(id, &patch).await?;
        log::info!(
            "domain {} flags now dns={} emails={} shorturl={}",
            updated.domain_name,
            updated.use_dns,
            updated.use_emails,
            updated.use_short_url
        );
        Ok(updated)
    }

    /// 普通用户可见的授权投影；`service` 为 `None` 时不过滤。
    pub async fn list_authorized(
        &self,
        service: Option<ServiceType>,
    ) -> CoreResult<Vec<AuthorizedDomain>> {
        let domains = self.ctx.domain_repository.find_by_service(service).await?;
        Ok(domains.iter().map(AuthorizedDomain::from).collect())
    }

    /// 开启了短链服务的域名名称（公开接口用）。
    pub async fn short_enabled_names(&self) -> CoreResult<Vec<String>> {
        let domains = self
            .ctx
            .domain_repository
            .find_by_service(Some(ServiceType::ShortUrl))
            .await?;
        Ok(domains.into_iter().map(|d| d.domain_name).collect())
    }

    /// 闸门检查点：域名未对该服务开放时拒绝。
    ///
    /// 每个变更流程在调用 Cloudflare 或写库之前都必须先过这里。
    pub fn ensure_enabled(domain: &Domain, service: ServiceType) -> CoreResult<()> {
        if domain.allows(service) {
            Ok(())
        } else {
            Err(CoreError::Forbidden(format!(
                "{service} is not enabled for domain {}",
                domain.domain_name
            )))
        }
    }
}
