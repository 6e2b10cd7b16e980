//! Cloudflare 配置管理与 zone 同步服务

use std::sync::Arc;

use zonekeeper_provider::Zone;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{CloudflareConfig, ConfigSubmission, Domain, SyncOutcome};

/// 配置服务：保存凭证并把账户下的 zones 同步进域名表。
pub struct ConfigService {
    ctx: Arc<ServiceContext>,
}

impl ConfigService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 当前配置（管理员视图，含密钥）；尚未配置时为 `None`。
    pub async fn get_config(&self) -> CoreResult<Option<CloudflareConfig>> {
        self.ctx.config_repository.find_latest().await
    }

    /// 保存凭证并立即同步域名列表。
    ///
    /// 已有配置时原位更新最新一行，不会新增历史行。
    pub async fn save_config(&self, submission: ConfigSubmission) -> CoreResult<SyncOutcome> {
        if submission.account_id.trim().is_empty()
            || submission.global_key.trim().is_empty()
            || submission.email.trim().is_empty()
        {
            return Err(CoreError::Validation(
                "accountId, globalKey and email are all required".to_string(),
            ));
        }

        let config = match self.ctx.config_repository.find_latest().await? {
            Some(mut existing) => {
                existing.account_id = submission.account_id;
                existing.global_key = submission.global_key;
                existing.email = submission.email;
                existing.updated_at = chrono::Utc::now();
                existing
            }
            None => CloudflareConfig::new(
                submission.account_id,
                submission.global_key,
                submission.email,
            ),
        };
        self.ctx.config_repository.save(&config).await?;

        let zones = self
            .ctx
            .provider
            .list_zones(&config.credentials(), &config.account_id)
            .await?;
        let count = self.sync_zones(&config, &zones).await?;

        Ok(SyncOutcome {
            message: "configuration saved, zone list synced".to_string(),
            domains: count,
        })
    }

    /// 用当前配置重新拉取 zones 并同步。
    pub async fn refresh_domains(&self) -> CoreResult<SyncOutcome> {
        let config = self.ctx.active_config().await?;

        let zones = self
            .ctx
            .provider
            .list_zones(&config.credentials(), &config.account_id)
            .await?;
        let count = self.sync_zones(&config, &zones).await?;

        Ok(SyncOutcome {
            message: "zone list refreshed".to_string(),
            domains: count,
        })
    }

    /// 按 `zone_id` 合并 zones：已知的原位更新名称与归属，新见的建行。
    /// 幂等；授权标志永不触碰。
    async fn sync_zones(&self, config: &CloudflareConfig, zones: &[Zone]) -> CoreResult<usize> {
        for zone in zones {
            match self
                .ctx
                .domain_repository
                .find_by_zone_id(&zone.id)
                .await?
            {
                Some(_) => {
                    self.ctx
                        .domain_repository
                        .update_zone_binding(&zone.id, &zone.name, &config.id)
                        .await?;
                }
                None => {
                    self.ctx
                        .domain_repository
                        .insert(&Domain::discovered(
                            zone.name.clone(),
                            zone.id.clone(),
                            config.id.clone(),
                        ))
                        .await?;
                }
            }
        }
        log::info!("synced {} zones for config {}", zones.len(), config.id);
        Ok(zones.len())
    }
}
