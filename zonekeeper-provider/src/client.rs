//! Cloudflare HTTP 请求方法

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::types::{
    CloudflareResponse, Credentials, DeletedRecord, RecordPayload, RecordResult, Zone,
};

pub(crate) const CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Cloudflare Zones API 单页最大条数，列表只取第一页
pub(crate) const ZONES_PAGE_SIZE: u32 = 50;

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Cloudflare API 客户端
///
/// 无状态：凭证随每次调用传入。
pub struct CloudflareClient {
    client: Client,
    base_url: String,
}

impl Default for CloudflareClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CloudflareClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(CF_API_BASE)
    }

    /// 指定 API 地址（测试用）。
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// 列出账户下的 zones（仅第一页，最多 50 条）。
    pub async fn list_zones(&self, auth: &Credentials, account_id: &str) -> Result<Vec<Zone>> {
        let url = format!(
            "{}/zones?account.id={account_id}&page=1&per_page={ZONES_PAGE_SIZE}",
            self.base_url
        );
        log::debug!("GET {url}");
        self.execute(self.client.get(&url), auth).await
    }

    /// 创建 DNS 记录。
    pub async fn create_record(
        &self,
        auth: &Credentials,
        zone_id: &str,
        record: &RecordPayload,
    ) -> Result<RecordResult> {
        let url = format!("{}/zones/{zone_id}/dns_records", self.base_url);
        log::debug!("POST {url} name={}", record.name);
        self.execute(self.client.post(&url).json(record), auth)
            .await
    }

    /// 更新 DNS 记录（PATCH，部分字段）。
    pub async fn update_record(
        &self,
        auth: &Credentials,
        zone_id: &str,
        record_id: &str,
        record: &RecordPayload,
    ) -> Result<RecordResult> {
        let url = format!("{}/zones/{zone_id}/dns_records/{record_id}", self.base_url);
        log::debug!("PATCH {url} name={}", record.name);
        self.execute(self.client.patch(&url).json(record), auth)
            .await
    }

    /// 删除 DNS 记录。
    pub async fn delete_record(
        &self,
        auth: &Credentials,
        zone_id: &str,
        record_id: &str,
    ) -> Result<DeletedRecord> {
        let url = format!("{}/zones/{zone_id}/dns_records/{record_id}", self.base_url);
        log::debug!("DELETE {url}");
        self.execute(self.client.delete(&url), auth).await
    }

    /// 发送请求并解析信封。
    ///
    /// 先整体读出响应文本再解析：解析失败时原始报文可进日志。
    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        auth: &Credentials,
    ) -> Result<T> {
        let response = request
            .header("X-Auth-Email", &auth.email)
            .header("X-Auth-Key", &auth.api_key)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(ProviderError::network)?;

        let status = response.status();
        log::debug!("Response Status: {status}");

        let response_text = response.text().await.map_err(ProviderError::network)?;

        let envelope: CloudflareResponse<T> =
            serde_json::from_str(&response_text).map_err(|e| {
                log::error!("JSON 解析失败: {e}");
                log::error!("原始响应: {response_text}");
                ProviderError::parse(e)
            })?;

        if !status.is_success() || !envelope.success {
            log::warn!(
                "API 错误 {status}: {}",
                envelope
                    .errors
                    .first()
                    .map_or("<no message>", |e| e.message.as_str())
            );
            return Err(upstream_error(status, envelope.errors, envelope.messages));
        }

        envelope
            .result
            .ok_or_else(|| ProviderError::parse("响应中缺少 result 字段"))
    }
}

fn upstream_error(
    status: StatusCode,
    errors: Vec<crate::types::ApiMessage>,
    messages: Vec<crate::types::ApiMessage>,
) -> ProviderError {
    ProviderError::Upstream {
        status: status.as_u16(),
        errors,
        messages,
    }
}
