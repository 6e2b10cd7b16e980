//! DNS 记录变更流程
//!
//! 每个流程都是同一台状态机：取生效配置 → 定位域名 → 过授权闸门 →
//! 拼装记录名并查保留名单 →（创建时）查重、查配额 → 调 Cloudflare →
//! 远端成功后才写本地镜像。远端失败不留任何本地痕迹；镜像写失败
//! 单独上报为 `PartiallyApplied`，只能靠之后的显式刷新收敛。

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::{DomainService, ServiceContext};
use crate::types::{AuthUser, Domain, RecordDraft, ServiceType, UserRecord};
use crate::utils::record_name;

/// DNS 记录管理服务
pub struct RecordService {
    ctx: Arc<ServiceContext>,
}

impl RecordService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 创建记录。
    pub async fn create_record(
        &self,
        user: &AuthUser,
        domain_id: &str,
        draft: RecordDraft,
    ) -> CoreResult<UserRecord> {
        let config = self.ctx.active_config().await?;

        let domain = self
            .ctx
            .domain_repository
            .find_by_id(domain_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("domain {domain_id}")))?;
        DomainService::ensure_enabled(&domain, ServiceType::Dns)?;

        let qualified = self.composed_name(&draft, &domain)?;

        if self
            .ctx
            .record_repository
            .find_duplicate(&user.id, &draft.record_type, &qualified, &draft.content)
            .await?
            .is_some()
        {
            return Err(CoreError::Conflict(format!(
                "record {qualified} already exists"
            )));
        }

        if !user.is_admin() {
            if let Some(limit) = self.ctx.policy.record_limit(&user.team) {
                let total = self.ctx.record_repository.count_by_user(&user.id).await?;
                if total >= limit {
                    return Err(CoreError::QuotaExceeded { limit });
                }
            }
        }

        let result = self
            .ctx
            .provider
            .create_record(
                &config.credentials(),
                &domain.zone_id,
                &draft.to_payload(qualified),
            )
            .await?;

        // 新建记录先按不可达落库，等探测流程回写
        let mirror = UserRecord::from_remote(&user.id, &result, false);
        self.ctx
            .record_repository
            .insert(&mirror)
            .await
            .map_err(|e| CoreError::PartiallyApplied(e.to_string()))?;
        Ok(mirror)
    }

    /// 更新记录。`domain_id` 缺省时退回镜像行里存的 zone 定位域名。
    pub async fn update_record(
        &self,
        user: &AuthUser,
        record_id: &str,
        domain_id: Option<&str>,
        draft: RecordDraft,
    ) -> CoreResult<UserRecord> {
        let config = self.ctx.active_config().await?;

        let domain = self.resolve_domain(user, record_id, domain_id).await?;
        DomainService::ensure_enabled(&domain, ServiceType::Dns)?;

        let qualified = self.composed_name(&draft, &domain)?;

        let result = self
            .ctx
            .provider
            .update_record(
                &config.credentials(),
                &domain.zone_id,
                record_id,
                &draft.to_payload(qualified),
            )
            .await?;

        let mirror = UserRecord::from_remote(&user.id, &result, true);
        self.ctx
            .record_repository
            .update(&mirror)
            .await
            .map_err(|e| CoreError::PartiallyApplied(e.to_string()))?;
        Ok(mirror)
    }

    /// 删除记录。`zone_id` 缺省时从镜像行补齐。
    pub async fn delete_record(
        &self,
        user: &AuthUser,
        record_id: &str,
        zone_id: Option<&str>,
    ) -> CoreResult<()> {
        let config = self.ctx.active_config().await?;

        let zone_id = match zone_id {
            Some(z) if !z.is_empty() => z.to_string(),
            _ => {
                self.ctx
                    .record_repository
                    .find_by_record_id(&user.id, record_id)
                    .await?
                    .ok_or_else(|| CoreError::NotFound(format!("record {record_id}")))?
                    .zone_id
            }
        };

        let domain = self
            .ctx
            .domain_repository
            .find_by_zone_id(&zone_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("domain for zone {zone_id}")))?;
        DomainService::ensure_enabled(&domain, ServiceType::Dns)?;

        self.ctx
            .provider
            .delete_record(&config.credentials(), &zone_id, record_id)
            .await?;

        self.ctx
            .record_repository
            .delete(&user.id, record_id, &zone_id)
            .await
            .map_err(|e| CoreError::PartiallyApplied(e.to_string()))?;
        Ok(())
    }

    /// 可达性探测并回写镜像 `active` 位。
    ///
    /// 探不通是正常结果，返回值即探测结论；但镜像行不存在时回写
    /// 无处可落，报 `NotFound`。
    pub async fn update_record_state(
        &self,
        user: &AuthUser,
        record_id: &str,
        zone_id: &str,
        target: &str,
    ) -> CoreResult<bool> {
        let reachable = self.ctx.probe.is_reachable(target).await;
        self.ctx
            .record_repository
            .set_active(&user.id, record_id, zone_id, reachable)
            .await?;
        Ok(reachable)
    }

    /// 经 composer 取得完整域名并核对保留名单。
    fn composed_name(&self, draft: &RecordDraft, domain: &Domain) -> CoreResult<String> {
        let qualified = record_name::qualify(&draft.name, &domain.domain_name);
        let label = record_name::local_label(&qualified, &domain.domain_name);
        if self.ctx.policy.is_reserved_record_name(&qualified, &label) {
            return Err(CoreError::Conflict(format!("name {qualified} is reserved")));
        }
        Ok(qualified)
    }

    /// 更新/删除时定位域名：优先显式 `domain_id`，否则经镜像行的 zone 回查。
    async fn resolve_domain(
        &self,
        user: &AuthUser,
        record_id: &str,
        domain_id: Option<&str>,
    ) -> CoreResult<Domain> {
        if let Some(id) = domain_id {
            if let Some(domain) = self.ctx.domain_repository.find_by_id(id).await? {
                return Ok(domain);
            }
        }
        let mirror = self
            .ctx
            .record_repository
            .find_by_record_id(&user.id, record_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("record {record_id}")))?;
        self.ctx
            .domain_repository
            .find_by_zone_id(&mirror.zone_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("domain for zone {}", mirror.zone_id)))
    }
}
