//! Provider 层错误类型

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::ApiMessage;

/// Cloudflare 调用失败的三种形态。
///
/// `Upstream` 原样携带信封里的 `errors` / `messages`，上层不得改写；
/// `Parse` 单独区分「上游返回了非 JSON」这一情况。
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// 请求未到达或响应体读取失败
    #[error("[cloudflare] Network error: {detail}")]
    Network { detail: String },

    /// 响应体不是合法 JSON，或信封缺少 result 字段
    #[error("[cloudflare] Upstream returned non-JSON: {detail}")]
    Parse { detail: String },

    /// HTTP 非 2xx 或信封 `success: false`
    #[error("[cloudflare] API error {status}{}", first_error_suffix(errors))]
    Upstream {
        status: u16,
        errors: Vec<ApiMessage>,
        messages: Vec<ApiMessage>,
    },
}

fn first_error_suffix(errors: &[ApiMessage]) -> String {
    errors
        .first()
        .map_or_else(String::new, |e| format!(": {} (code {})", e.message, e.code))
}

impl ProviderError {
    pub(crate) fn network(e: impl std::fmt::Display) -> Self {
        Self::Network {
            detail: e.to_string(),
        }
    }

    pub(crate) fn parse(e: impl std::fmt::Display) -> Self {
        Self::Parse {
            detail: e.to_string(),
        }
    }

    /// 是否为预期行为（上游明确拒绝），用于日志分级。
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Upstream { .. })
    }

    /// 上游信封里的第一条错误消息（没有则为空串）。
    #[must_use]
    pub fn upstream_message(&self) -> &str {
        match self {
            Self::Upstream { errors, .. } => errors.first().map_or("", |e| e.message.as_str()),
            _ => "",
        }
    }
}

/// Provider 层 Result 别名
pub type Result<T> = std::result::Result<T, ProviderError>;
