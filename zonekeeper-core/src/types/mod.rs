//! 核心数据类型定义

mod config;
mod domain;
mod mailbox;
mod record;
mod user;

pub use config::{CloudflareConfig, ConfigSubmission, SyncOutcome};
pub use domain::{AuthorizedDomain, Domain, DomainFlagPatch, ServiceType};
pub use mailbox::Mailbox;
pub use record::{RecordDraft, UserRecord};
pub use user::{AuthUser, Role};
