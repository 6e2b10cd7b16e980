//! Zonekeeper Core Library
//!
//! Business logic for the multi-tenant domain console:
//! - Cloudflare credential management and zone sync (Config Service)
//! - Per-domain service authorization gate (Domain Service)
//! - Guarded DNS record mutation flows with a local mirror (Record Service)
//! - Email address registration against gate-enabled domains (Mailbox Service)
//!
//! The storage layer is abstracted through traits so frontends can inject
//! their own persistence; the Cloudflare API sits behind the
//! `ZoneProvider` trait from `zonekeeper-provider`.

pub mod error;
pub mod probe;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use probe::{HttpsProbe, ReachabilityProbe};
pub use zonekeeper_provider::{CloudflareClient, ZoneProvider};
pub use services::{Policy, ServiceContext};
pub use traits::{ConfigRepository, DomainRepository, MailboxRepository, RecordRepository};
