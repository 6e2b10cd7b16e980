//! 记录镜像持久化抽象 Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::UserRecord;

/// 用户 DNS 记录镜像仓库 Trait
///
/// `record_id` 在用户范围内唯一。镜像行只在远端调用成功后写入。
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// 用户的镜像记录总数（配额检查用）
    async fn count_by_user(&self, user_id: &str) -> CoreResult<u64>;

    /// 查找等价记录：同用户、同类型、同完整域名、同内容
    async fn find_duplicate(
        &self,
        user_id: &str,
        record_type: &str,
        name: &str,
        content: &str,
    ) -> CoreResult<Option<UserRecord>>;

    /// 按 Cloudflare 记录 id 查找（用户范围内）
    async fn find_by_record_id(
        &self,
        user_id: &str,
        record_id: &str,
    ) -> CoreResult<Option<UserRecord>>;

    /// 远端创建成功后插入镜像行
    async fn insert(&self, record: &UserRecord) -> CoreResult<()>;

    /// 远端更新成功后整行覆盖镜像
    async fn update(&self, record: &UserRecord) -> CoreResult<()>;

    /// 远端删除成功后移除镜像行
    async fn delete(&self, user_id: &str, record_id: &str, zone_id: &str) -> CoreResult<()>;

    /// 可达性探测结果回写；(user, record, zone) 无匹配镜像行时返回 `NotFound`
    async fn set_active(
        &self,
        user_id: &str,
        record_id: &str,
        zone_id: &str,
        active: bool,
    ) -> CoreResult<()>;
}
