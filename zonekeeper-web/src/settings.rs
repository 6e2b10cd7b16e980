//! TOML-backed runtime settings.
//!
//! One file drives the whole deployment: listen address, database path,
//! static bearer tokens, and the operational policy (reserved names and
//! per-team quotas) that gets injected into the core services.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use zonekeeper_core::services::Policy;
use zonekeeper_core::types::{AuthUser, Role};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// 0 = one worker per CPU core
    pub workers: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            workers: 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    pub path: PathBuf,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/zonekeeper.db"),
        }
    }
}

/// One static bearer token bound to a user identity.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenEntry {
    pub token: String,
    pub user_id: String,
    pub role: Role,
    #[serde(default = "default_team")]
    pub team: String,
}

fn default_team() -> String {
    "free".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PolicySettings {
    pub reserved_record_names: Vec<String>,
    pub reserved_mailbox_prefixes: Vec<String>,
    pub record_quota: HashMap<String, u64>,
    pub mailbox_quota: HashMap<String, u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub tokens: Vec<TokenEntry>,
    pub policy: PolicySettings,
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
        let settings: Self = toml::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("failed to parse {}: {e}", path.display()))?;
        Ok(settings)
    }

    /// Resolve a bearer token to an authenticated identity.
    #[must_use]
    pub fn resolve_token(&self, token: &str) -> Option<AuthUser> {
        self.tokens.iter().find(|t| t.token == token).map(|t| AuthUser {
            id: t.user_id.clone(),
            role: t.role,
            team: t.team.clone(),
        })
    }

    /// Build the core `Policy` from the `[policy]` section.
    #[must_use]
    pub fn policy(&self) -> Policy {
        Policy {
            reserved_record_names: self
                .policy
                .reserved_record_names
                .iter()
                .cloned()
                .collect::<HashSet<_>>(),
            reserved_mailbox_prefixes: self
                .policy
                .reserved_mailbox_prefixes
                .iter()
                .cloned()
                .collect::<HashSet<_>>(),
            record_quota: self.policy.record_quota.clone(),
            mailbox_quota: self.policy.mailbox_quota.clone(),
        }
    }

    /// Worker count for the HTTP server.
    #[must_use]
    pub fn workers(&self) -> usize {
        if self.server.workers == 0 {
            num_cpus::get()
        } else {
            self.server.workers
        }
    }
}
