//! 域名持久化抽象 Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{Domain, DomainFlagPatch, ServiceType};

/// 域名仓库 Trait
///
/// `zone_id` 上有唯一约束；同步路径只触碰 `domain_name` / `config_id`，
/// 三个授权标志只经 `update_flags` 变更。
#[async_trait]
pub trait DomainRepository: Send + Sync {
    /// 某套配置下的全部域名
    async fn find_by_config(&self, config_id: &str) -> CoreResult<Vec<Domain>>;

    /// 按主键查找
    async fn find_by_id(&self, id: &str) -> CoreResult<Option<Domain>>;

    /// 按 Cloudflare zone id 查找
    async fn find_by_zone_id(&self, zone_id: &str) -> CoreResult<Option<Domain>>;

    /// 按域名本身查找（邮箱后缀校验用）
    async fn find_by_name(&self, domain_name: &str) -> CoreResult<Option<Domain>>;

    /// 首次发现的 zone 建行（标志全 false，由 `Domain::discovered` 保证）
    async fn insert(&self, domain: &Domain) -> CoreResult<()>;

    /// 重新同步时按 `zone_id` 原位更新名称与归属配置；
    /// **绝不**改动授权标志。
    async fn update_zone_binding(
        &self,
        zone_id: &str,
        domain_name: &str,
        config_id: &str,
    ) -> CoreResult<()>;

    /// 应用标志子集并返回更新后的行；`id` 不存在时返回 `NotFound`。
    /// 空补丁应原样返回当前行。
    async fn update_flags(&self, id: &str, patch: &DomainFlagPatch) -> CoreResult<Domain>;

    /// 按服务类型过滤（`None` 不过滤），按域名升序返回
    async fn find_by_service(&self, service: Option<ServiceType>) -> CoreResult<Vec<Domain>>;
}
