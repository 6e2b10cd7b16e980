//! 邮箱地址持久化抽象 Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::Mailbox;

/// 用户邮箱仓库 Trait，地址全局唯一。
#[async_trait]
pub trait MailboxRepository: Send + Sync {
    /// 用户的全部地址（创建时间倒序）
    async fn find_by_user(&self, user_id: &str) -> CoreResult<Vec<Mailbox>>;

    /// 按完整地址查找（跨用户，唯一性检查用）
    async fn find_by_address(&self, address: &str) -> CoreResult<Option<Mailbox>>;

    /// 用户的地址总数（配额检查用）
    async fn count_by_user(&self, user_id: &str) -> CoreResult<u64>;

    async fn insert(&self, mailbox: &Mailbox) -> CoreResult<()>;
}
