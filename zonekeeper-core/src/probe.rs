//! 可达性探测
//!
//! 对 `https://{target}` 发一次普通 GET；200 记为可达，其它状态码与
//! 网络失败一律记为不可达。探不通是正常结果，不是错误。

use std::time::Duration;

use async_trait::async_trait;

/// 探测目标是否可经 HTTPS 访问。
#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    async fn is_reachable(&self, target: &str) -> bool;
}

/// 默认实现：reqwest GET，带超时。
pub struct HttpsProbe {
    client: reqwest::Client,
}

const PROBE_TIMEOUT_SECS: u64 = 10;

impl Default for HttpsProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpsProbe {
    #[must_use]
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
            .timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        Self { client }
    }
}

#[async_trait]
impl ReachabilityProbe for HttpsProbe {
    async fn is_reachable(&self, target: &str) -> bool {
        let url = format!("https://{target}");
        match self.client.get(&url).send().await {
            Ok(response) => response.status() == reqwest::StatusCode::OK,
            Err(e) => {
                log::debug!("probe {target} unreachable: {e}");
                false
            }
        }
    }
}
