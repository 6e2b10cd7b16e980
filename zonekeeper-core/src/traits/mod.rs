//! 存储层抽象 Trait 定义

mod config_repository;
mod domain_repository;
mod mailbox_repository;
mod record_repository;

pub use config_repository::ConfigRepository;
pub use domain_repository::DomainRepository;
pub use mailbox_repository::MailboxRepository;
pub use record_repository::RecordRepository;
