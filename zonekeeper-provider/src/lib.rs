//! Cloudflare v4 API 客户端
//!
//! 只做一件事：用账户邮箱 + Global API Key 发起单次 HTTP 调用并原样返回
//! `{success, errors, messages, result}` 信封。不重试、不分页（zones 只取
//! 第一页）、不做业务判断。

mod client;
mod error;
mod traits;
mod types;

pub use client::CloudflareClient;
pub use error::{ProviderError, Result};
pub use traits::ZoneProvider;
pub use types::{
    ApiMessage, CloudflareResponse, Credentials, DeletedRecord, RecordPayload, RecordResult,
    ResultInfo, Zone,
};
