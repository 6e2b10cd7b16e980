//! 邮箱登记服务
//!
//! 地址 = 前缀 @ 已授权域名。前缀有最短长度与保留名单约束，
//! 域名必须存在且开启了邮箱服务。这里只做登记，不创建真实邮箱账户。

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::{DomainService, ServiceContext};
use crate::types::{AuthUser, Mailbox, ServiceType};

/// 前缀最短长度
const MIN_PREFIX_LEN: usize = 5;

/// 邮箱登记服务
pub struct MailboxService {
    ctx: Arc<ServiceContext>,
}

impl MailboxService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 当前用户已登记的邮箱。
    pub async fn list_mailboxes(&self, user: &AuthUser) -> CoreResult<Vec<Mailbox>> {
        self.ctx.mailbox_repository.find_by_user(&user.id).await
    }

    /// 登记一个邮箱地址。
    pub async fn create_mailbox(&self, user: &AuthUser, address: &str) -> CoreResult<Mailbox> {
        let (prefix, suffix) = address
            .split_once('@')
            .filter(|(p, s)| !p.is_empty() && !s.is_empty())
            .ok_or_else(|| {
                CoreError::Validation("address must look like prefix@domain".to_string())
            })?;

        if prefix.len() < MIN_PREFIX_LEN {
            return Err(CoreError::Validation(format!(
                "prefix must be at least {MIN_PREFIX_LEN} characters"
            )));
        }
        if self.ctx.policy.is_reserved_mailbox_prefix(prefix) {
            return Err(CoreError::Conflict(format!("prefix {prefix} is reserved")));
        }

        let domain = self
            .ctx
            .domain_repository
            .find_by_name(suffix)
            .await?
            .ok_or_else(|| {
                CoreError::Forbidden(format!("domain {suffix} is not available for email"))
            })?;
        DomainService::ensure_enabled(&domain, ServiceType::Email)?;

        if !user.is_admin() {
            if let Some(limit) = self.ctx.policy.mailbox_limit(&user.team) {
                let total = self.ctx.mailbox_repository.count_by_user(&user.id).await?;
                if total >= limit {
                    return Err(CoreError::QuotaExceeded { limit });
                }
            }
        }

        if self
            .ctx
            .mailbox_repository
            .find_by_address(address)
            .await?
            .is_some()
        {
            return Err(CoreError::Conflict("address already exists".to_string()));
        }

        let mailbox = Mailbox::new(&user.id, address.to_string());
        self.ctx.mailbox_repository.insert(&mailbox).await?;
        log::info!("mailbox {address} registered for user {}", user.id);
        Ok(mailbox)
    }
}
