//! Zone API 抽象 Trait

use async_trait::async_trait;

use crate::client::CloudflareClient;
use crate::error::Result;
use crate::types::{Credentials, DeletedRecord, RecordPayload, RecordResult, Zone};

/// Cloudflare zone/record API 的抽象。
///
/// 业务层通过它调用上游，测试时可以替换为记录调用的 mock。
#[async_trait]
pub trait ZoneProvider: Send + Sync {
    /// 列出账户下的 zones（第一页）
    async fn list_zones(&self, auth: &Credentials, account_id: &str) -> Result<Vec<Zone>>;

    /// 创建 DNS 记录
    async fn create_record(
        &self,
        auth: &Credentials,
        zone_id: &str,
        record: &RecordPayload,
    ) -> Result<RecordResult>;

    /// 更新 DNS 记录
    async fn update_record(
        &self,
        auth: &Credentials,
        zone_id: &str,
        record_id: &str,
        record: &RecordPayload,
    ) -> Result<RecordResult>;

    /// 删除 DNS 记录
    async fn delete_record(
        &self,
        auth: &Credentials,
        zone_id: &str,
        record_id: &str,
    ) -> Result<DeletedRecord>;
}

#[async_trait]
impl ZoneProvider for CloudflareClient {
    async fn list_zones(&self, auth: &Credentials, account_id: &str) -> Result<Vec<Zone>> {
        Self::list_zones(self, auth, account_id).await
    }

    async fn create_record(
        &self,
        auth: &Credentials,
        zone_id: &str,
        record: &RecordPayload,
    ) -> Result<RecordResult> {
        Self::create_record(self, auth, zone_id, record).await
    }

    async fn update_record(
        &self,
        auth: &Credentials,
        zone_id: &str,
        record_id: &str,
        record: &RecordPayload,
    ) -> Result<RecordResult> {
        Self::update_record(self, auth, zone_id, record_id, record).await
    }

    async fn delete_record(
        &self,
        auth: &Credentials,
        zone_id: &str,
        record_id: &str,
    ) -> Result<DeletedRecord> {
        Self::delete_record(self, auth, zone_id, record_id).await
    }
}
