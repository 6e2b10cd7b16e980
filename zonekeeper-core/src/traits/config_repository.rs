//! 配置持久化抽象 Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::CloudflareConfig;

/// Cloudflare 配置仓库 Trait
///
/// 生效配置 = 创建时间最新的一行。实现方保证 `save` 按 `id` upsert。
#[async_trait]
pub trait ConfigRepository: Send + Sync {
    /// 读取最新创建的配置行（没有则为 `None`）
    async fn find_latest(&self) -> CoreResult<Option<CloudflareConfig>>;

    /// 按 `id` 插入或整行更新
    async fn save(&self, config: &CloudflareConfig) -> CoreResult<()>;
}
