//! 测试替身：内存仓库、可编程 Provider 与固定结果探针。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::RwLock;

use zonekeeper_provider::{
    ApiMessage, Credentials, DeletedRecord, ProviderError, RecordPayload, RecordResult, Zone,
    ZoneProvider,
};

use crate::error::{CoreError, CoreResult};
use crate::probe::ReachabilityProbe;
use crate::services::{Policy, ServiceContext};
use crate::traits::{ConfigRepository, DomainRepository, MailboxRepository, RecordRepository};
use crate::types::{
    AuthUser, CloudflareConfig, ConfigSubmission, Domain, DomainFlagPatch, Mailbox, RecordDraft,
    Role, ServiceType, UserRecord,
};

// ---- 身份与数据构造 ----

pub fn member(id: &str) -> AuthUser {
    AuthUser {
        id: id.to_string(),
        role: Role::User,
        team: "free".to_string(),
    }
}

pub fn admin(id: &str) -> AuthUser {
    AuthUser {
        id: id.to_string(),
        role: Role::Admin,
        team: "staff".to_string(),
    }
}

pub fn submission(account_id: &str, global_key: &str, email: &str) -> ConfigSubmission {
    ConfigSubmission {
        account_id: account_id.to_string(),
        global_key: global_key.to_string(),
        email: email.to_string(),
    }
}

pub fn zone(id: &str, name: &str) -> Zone {
    Zone {
        id: id.to_string(),
        name: name.to_string(),
        status: Some("active".to_string()),
    }
}

pub fn domain_with_flags(name: &str, dns: bool, emails: bool, shorturl: bool) -> Domain {
    let mut d = Domain::discovered(
        name.to_string(),
        format!("Z-{name}"),
        "cfg-test".to_string(),
    );
    d.use_dns = dns;
    d.use_emails = emails;
    d.use_short_url = shorturl;
    d
}

pub fn draft(name: &str, record_type: &str, content: &str) -> RecordDraft {
    RecordDraft {
        record_type: record_type.to_string(),
        name: name.to_string(),
        content: content.to_string(),
        ttl: None,
        proxied: None,
        comment: None,
        tags: None,
    }
}

pub fn remote_record(
    user_id: &str,
    record_id: &str,
    zone_id: &str,
    zone_name: &str,
    name: &str,
) -> UserRecord {
    let result = RecordResult {
        id: record_id.to_string(),
        zone_id: zone_id.to_string(),
        zone_name: zone_name.to_string(),
        record_type: "A".to_string(),
        name: name.to_string(),
        content: "1.2.3.4".to_string(),
        ttl: 1,
        proxied: false,
        proxiable: true,
        comment: None,
        tags: Vec::new(),
        created_on: None,
        modified_on: None,
    };
    UserRecord::from_remote(user_id, &result, true)
}

// ---- 内存仓库 ----

#[derive(Default)]
pub struct MockConfigRepository {
    rows: RwLock<Vec<CloudflareConfig>>,
}

impl MockConfigRepository {
    pub async fn row_count(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn seed_default(&self) {
        let config = CloudflareConfig::new(
            "ACC".to_string(),
            "KEY".to_string(),
            "admin@example.com".to_string(),
        );
        self.rows.write().await.push(config);
    }
}

#[async_trait]
impl ConfigRepository for MockConfigRepository {
    async fn find_latest(&self) -> CoreResult<Option<CloudflareConfig>> {
        Ok(self.rows.read().await.last().cloned())
    }

    async fn save(&self, config: &CloudflareConfig) -> CoreResult<()> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|c| c.id == config.id) {
            Some(existing) => *existing = config.clone(),
            None => rows.push(config.clone()),
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MockDomainRepository {
    rows: RwLock<Vec<Domain>>,
}

impl MockDomainRepository {
    pub async fn seed(&self, domain: Domain) {
        self.rows.write().await.push(domain);
    }

    pub async fn all(&self) -> Vec<Domain> {
        self.rows.read().await.clone()
    }
}

#[async_trait]
impl DomainRepository for MockDomainRepository {
    async fn find_by_config(&self, config_id: &str) -> CoreResult<Vec<Domain>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|d| d.config_id == config_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> CoreResult<Option<Domain>> {
        Ok(self.rows.read().await.iter().find(|d| d.id == id).cloned())
    }

    async fn find_by_zone_id(&self, zone_id: &str) -> CoreResult<Option<Domain>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|d| d.zone_id == zone_id)
            .cloned())
    }

    async fn find_by_name(&self, domain_name: &str) -> CoreResult<Option<Domain>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|d| d.domain_name == domain_name)
            .cloned())
    }

    async fn insert(&self, domain: &Domain) -> CoreResult<()> {
        self.rows.write().await.push(domain.clone());
        Ok(())
    }

    async fn update_zone_binding(
        &self,
        zone_id: &str,
        domain_name: &str,
        config_id: &str,
    ) -> CoreResult<()> {
        let mut rows = self.rows.write().await;
        if let Some(d) = rows.iter_mut().find(|d| d.zone_id == zone_id) {
            d.domain_name = domain_name.to_string();
            d.config_id = config_id.to_string();
            d.updated_at = chrono::Utc::now();
        }
        Ok(())
    }

    async fn update_flags(&self, id: &str, patch: &DomainFlagPatch) -> CoreResult<Domain> {
        let mut rows = self.rows.write().await;
        let d = rows
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| CoreError::NotFound(format!("domain {id}")))?;
        if let Some(v) = patch.use_dns {
            d.use_dns = v;
        }
        if let Some(v) = patch.use_emails {
            d.use_emails = v;
        }
        if let Some(v) = patch.use_short_url {
            d.use_short_url = v;
        }
        d.updated_at = chrono::Utc::now();
        Ok(d.clone())
    }

    async fn find_by_service(&self, service: Option<ServiceType>) -> CoreResult<Vec<Domain>> {
        let mut hits: Vec<Domain> = self
            .rows
            .read()
            .await
            .iter()
            .filter(|d| service.map_or(true, |s| d.allows(s)))
            .cloned()
            .collect();
        hits.sort_by(|a, b| a.domain_name.cmp(&b.domain_name));
        Ok(hits)
    }
}

#[derive(Default)]
pub struct MockRecordRepository {
    rows: RwLock<Vec<UserRecord>>,
    fail_next: RwLock<Option<String>>,
}

impl MockRecordRepository {
    pub async fn seed(&self, record: UserRecord) {
        self.rows.write().await.push(record);
    }

    /// 下一次写操作（insert/update/delete）失败一次。
    pub async fn fail_next_write(&self, reason: &str) {
        *self.fail_next.write().await = Some(reason.to_string());
    }

    async fn take_failure(&self) -> CoreResult<()> {
        match self.fail_next.write().await.take() {
            Some(reason) => Err(CoreError::Storage(reason)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RecordRepository for MockRecordRepository {
    async fn count_by_user(&self, user_id: &str) -> CoreResult<u64> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|r| r.user_id == user_id)
            .count() as u64)
    }

    async fn find_duplicate(
        &self,
        user_id: &str,
        record_type: &str,
        name: &str,
        content: &str,
    ) -> CoreResult<Option<UserRecord>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|r| {
                r.user_id == user_id
                    && r.record_type == record_type
                    && r.name == name
                    && r.content == content
            })
            .cloned())
    }

    async fn find_by_record_id(
        &self,
        user_id: &str,
        record_id: &str,
    ) -> CoreResult<Option<UserRecord>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|r| r.user_id == user_id && r.record_id == record_id)
            .cloned())
    }

    async fn insert(&self, record: &UserRecord) -> CoreResult<()> {
        self.take_failure().await?;
        self.rows.write().await.push(record.clone());
        Ok(())
    }

    async fn update(&self, record: &UserRecord) -> CoreResult<()> {
        self.take_failure().await?;
        let mut rows = self.rows.write().await;
        if let Some(r) = rows
            .iter_mut()
            .find(|r| r.user_id == record.user_id && r.record_id == record.record_id)
        {
            *r = record.clone();
        } else {
            rows.push(record.clone());
        }
        Ok(())
    }

    async fn delete(&self, user_id: &str, record_id: &str, zone_id: &str) -> CoreResult<()> {
        self.take_failure().await?;
        self.rows.write().await.retain(|r| {
            !(r.user_id == user_id && r.record_id == record_id && r.zone_id == zone_id)
        });
        Ok(())
    }

    async fn set_active(
        &self,
        user_id: &str,
        record_id: &str,
        zone_id: &str,
        active: bool,
    ) -> CoreResult<()> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|r| r.user_id == user_id && r.record_id == record_id && r.zone_id == zone_id)
            .ok_or_else(|| CoreError::NotFound(format!("record {record_id}")))?;
        row.active = active;
        row.updated_at = chrono::Utc::now();
        Ok(())
    }
}

#[derive(Default)]
pub struct MockMailboxRepository {
    rows: RwLock<Vec<Mailbox>>,
}

#[async_trait]
impl MailboxRepository for MockMailboxRepository {
    async fn find_by_user(&self, user_id: &str) -> CoreResult<Vec<Mailbox>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_address(&self, address: &str) -> CoreResult<Option<Mailbox>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|m| m.email_address == address)
            .cloned())
    }

    async fn count_by_user(&self, user_id: &str) -> CoreResult<u64> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|m| m.user_id == user_id)
            .count() as u64)
    }

    async fn insert(&self, mailbox: &Mailbox) -> CoreResult<()> {
        self.rows.write().await.push(mailbox.clone());
        Ok(())
    }
}

// ---- 可编程 Provider ----

#[derive(Default)]
struct ProviderState {
    zones: Vec<Zone>,
    list_zones_calls: usize,
    create_calls: usize,
    update_calls: usize,
    delete_calls: usize,
    last_create_payload: Option<RecordPayload>,
    last_create_zone: Option<String>,
    fail_next_create: Option<ApiMessage>,
    next_record_seq: usize,
}

#[derive(Default)]
pub struct MockZoneProvider {
    state: RwLock<ProviderState>,
}

impl MockZoneProvider {
    pub async fn set_zones(&self, zones: Vec<Zone>) {
        self.state.write().await.zones = zones;
    }

    pub async fn list_zones_calls(&self) -> usize {
        self.state.read().await.list_zones_calls
    }

    pub async fn create_calls(&self) -> usize {
        self.state.read().await.create_calls
    }

    pub async fn update_calls(&self) -> usize {
        self.state.read().await.update_calls
    }

    pub async fn delete_calls(&self) -> usize {
        self.state.read().await.delete_calls
    }

    pub async fn last_create_payload(&self) -> Option<RecordPayload> {
        self.state.read().await.last_create_payload.clone()
    }

    pub async fn last_create_zone(&self) -> Option<String> {
        self.state.read().await.last_create_zone.clone()
    }

    /// 下一次创建以 Cloudflare 错误码失败。
    pub async fn fail_next_create(&self, code: i64, message: &str) {
        self.state.write().await.fail_next_create = Some(ApiMessage {
            code,
            message: message.to_string(),
        });
    }

    fn fabricate(id: String, zone_id: &str, zone_name: String, payload: &RecordPayload) -> RecordResult {
        RecordResult {
            id,
            zone_id: zone_id.to_string(),
            zone_name,
            record_type: payload.record_type.clone(),
            name: payload.name.clone(),
            content: payload.content.clone(),
            ttl: payload.ttl.unwrap_or(1),
            proxied: payload.proxied.unwrap_or(false),
            proxiable: true,
            comment: payload.comment.clone(),
            tags: payload.tags.clone().unwrap_or_default(),
            created_on: None,
            modified_on: None,
        }
    }
}

#[async_trait]
impl ZoneProvider for MockZoneProvider {
    async fn list_zones(
        &self,
        _auth: &Credentials,
        _account_id: &str,
    ) -> zonekeeper_provider::Result<Vec<Zone>> {
        let mut state = self.state.write().await;
        state.list_zones_calls += 1;
        Ok(state.zones.clone())
    }

    async fn create_record(
        &self,
        _auth: &Credentials,
        zone_id: &str,
        record: &RecordPayload,
    ) -> zonekeeper_provider::Result<RecordResult> {
        let mut state = self.state.write().await;
        state.create_calls += 1;
        if let Some(error) = state.fail_next_create.take() {
            return Err(ProviderError::Upstream {
                status: 400,
                errors: vec![error],
                messages: Vec::new(),
            });
        }
        state.next_record_seq += 1;
        let id = format!("rec-{}", state.next_record_seq);
        let zone_name = state
            .zones
            .iter()
            .find(|z| z.id == zone_id)
            .map(|z| z.name.clone())
            .unwrap_or_default();
        state.last_create_payload = Some(record.clone());
        state.last_create_zone = Some(zone_id.to_string());
        Ok(Self::fabricate(id, zone_id, zone_name, record))
    }

    async fn update_record(
        &self,
        _auth: &Credentials,
        zone_id: &str,
        record_id: &str,
        record: &RecordPayload,
    ) -> zonekeeper_provider::Result<RecordResult> {
        let mut state = self.state.write().await;
        state.update_calls += 1;
        Ok(Self::fabricate(
            record_id.to_string(),
            zone_id,
            String::new(),
            record,
        ))
    }

    async fn delete_record(
        &self,
        _auth: &Credentials,
        _zone_id: &str,
        record_id: &str,
    ) -> zonekeeper_provider::Result<DeletedRecord> {
        self.state.write().await.delete_calls += 1;
        Ok(DeletedRecord {
            id: record_id.to_string(),
        })
    }
}

// ---- 固定结果探针 ----

pub struct MockProbe {
    reachable: RwLock<bool>,
}

impl Default for MockProbe {
    fn default() -> Self {
        Self {
            reachable: RwLock::new(true),
        }
    }
}

impl MockProbe {
    pub async fn set_reachable(&self, reachable: bool) {
        *self.reachable.write().await = reachable;
    }
}

#[async_trait]
impl ReachabilityProbe for MockProbe {
    async fn is_reachable(&self, _target: &str) -> bool {
        *self.reachable.read().await
    }
}

// ---- 组装 ----

pub struct TestContext {
    pub configs: Arc<MockConfigRepository>,
    pub domains: Arc<MockDomainRepository>,
    pub records: Arc<MockRecordRepository>,
    pub mailboxes: Arc<MockMailboxRepository>,
    pub provider: Arc<MockZoneProvider>,
    pub probe: Arc<MockProbe>,
    policy: Mutex<Policy>,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            configs: Arc::new(MockConfigRepository::default()),
            domains: Arc::new(MockDomainRepository::default()),
            records: Arc::new(MockRecordRepository::default()),
            mailboxes: Arc::new(MockMailboxRepository::default()),
            provider: Arc::new(MockZoneProvider::default()),
            probe: Arc::new(MockProbe::default()),
            policy: Mutex::new(Policy::default()),
        }
    }

    pub fn reserve_record_name(&self, name: &str) {
        if let Ok(mut policy) = self.policy.lock() {
            policy.reserved_record_names.insert(name.to_string());
        }
    }

    pub fn reserve_mailbox_prefix(&self, prefix: &str) {
        if let Ok(mut policy) = self.policy.lock() {
            policy.reserved_mailbox_prefixes.insert(prefix.to_string());
        }
    }

    pub fn set_record_quota(&self, team: &str, limit: u64) {
        if let Ok(mut policy) = self.policy.lock() {
            policy.record_quota.insert(team.to_string(), limit);
        }
    }

    pub fn set_mailbox_quota(&self, team: &str, limit: u64) {
        if let Ok(mut policy) = self.policy.lock() {
            policy.mailbox_quota.insert(team.to_string(), limit);
        }
    }

    /// 按当前策略快照组装上下文；策略改动需在调用前完成。
    pub fn ctx(&self) -> Arc<ServiceContext> {
        let policy = self
            .policy
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default();
        Arc::new(ServiceContext::new(
            self.configs.clone(),
            self.domains.clone(),
            self.records.clone(),
            self.mailboxes.clone(),
            self.provider.clone(),
            self.probe.clone(),
            policy,
        ))
    }
}
