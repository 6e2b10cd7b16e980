//! Platform-agnostic application bootstrap for Zonekeeper.
//!
//! Provides `AppState` (service container) and `AppStateBuilder` (adapter
//! injection). Frontends construct the state once at startup and hand out
//! `Arc` handles to the services.

use std::sync::Arc;

use zonekeeper_core::error::{CoreError, CoreResult};
use zonekeeper_core::probe::ReachabilityProbe;
use zonekeeper_core::services::{
    ConfigService, DomainService, MailboxService, Policy, RecordService, ServiceContext,
};
use zonekeeper_core::traits::{
    ConfigRepository, DomainRepository, MailboxRepository, RecordRepository,
};
use zonekeeper_core::ZoneProvider;

pub mod adapters;

pub use adapters::SqliteStore;

/// Application state shared by every frontend.
///
/// Holds the `ServiceContext` and one instance of each service.
pub struct AppState {
    /// Service context (holds all storage adapters)
    pub ctx: Arc<ServiceContext>,
    /// Credential + zone sync service
    pub config_service: Arc<ConfigService>,
    /// Domain authorization gate
    pub domain_service: Arc<DomainService>,
    /// DNS record mutation flows
    pub record_service: Arc<RecordService>,
    /// Mailbox registration
    pub mailbox_service: Arc<MailboxService>,
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - the four storage repositories (or a single [`SqliteStore`] via `store`)
/// - `provider` — the Cloudflare client
/// - `probe` — the reachability probe
///
/// # Optional
/// - `policy` — defaults to an empty `Policy` (no reservations, no quotas)
pub struct AppStateBuilder {
    config_repository: Option<Arc<dyn ConfigRepository>>,
    domain_repository: Option<Arc<dyn DomainRepository>>,
    record_repository: Option<Arc<dyn RecordRepository>>,
    mailbox_repository: Option<Arc<dyn MailboxRepository>>,
    provider: Option<Arc<dyn ZoneProvider>>,
    probe: Option<Arc<dyn ReachabilityProbe>>,
    policy: Policy,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_repository: None,
            domain_repository: None,
            record_repository: None,
            mailbox_repository: None,
            provider: None,
            probe: None,
            policy: Policy::default(),
        }
    }

    /// Use one `SqliteStore` for all four repositories.
    #[must_use]
    pub fn store(mut self, store: Arc<SqliteStore>) -> Self {
        self.config_repository = Some(store.clone());
        self.domain_repository = Some(store.clone());
        self.record_repository = Some(store.clone());
        self.mailbox_repository = Some(store);
        self
    }

    #[must_use]
    pub fn provider(mut self, provider: Arc<dyn ZoneProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    #[must_use]
    pub fn probe(mut self, probe: Arc<dyn ReachabilityProbe>) -> Self {
        self.probe = Some(probe);
        self
    }

    #[must_use]
    pub fn policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::Validation` if required adapters are missing.
    pub fn build(self) -> CoreResult<AppState> {
        let config_repository = self
            .config_repository
            .ok_or_else(|| CoreError::Validation("config_repository is required".to_string()))?;
        let domain_repository = self
            .domain_repository
            .ok_or_else(|| CoreError::Validation("domain_repository is required".to_string()))?;
        let record_repository = self
            .record_repository
            .ok_or_else(|| CoreError::Validation("record_repository is required".to_string()))?;
        let mailbox_repository = self
            .mailbox_repository
            .ok_or_else(|| CoreError::Validation("mailbox_repository is required".to_string()))?;
        let provider = self
            .provider
            .ok_or_else(|| CoreError::Validation("provider is required".to_string()))?;
        let probe = self
            .probe
            .ok_or_else(|| CoreError::Validation("probe is required".to_string()))?;

        let ctx = Arc::new(ServiceContext::new(
            config_repository,
            domain_repository,
            record_repository,
            mailbox_repository,
            provider,
            probe,
            self.policy,
        ));

        Ok(AppState {
            config_service: Arc::new(ConfigService::new(Arc::clone(&ctx))),
            domain_service: Arc::new(DomainService::new(Arc::clone(&ctx))),
            record_service: Arc::new(RecordService::new(Arc::clone(&ctx))),
            mailbox_service: Arc::new(MailboxService::new(Arc::clone(&ctx))),
            ctx,
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
