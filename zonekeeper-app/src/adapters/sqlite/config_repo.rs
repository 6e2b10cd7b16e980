//! `ConfigRepository` implementation for `SqliteStore`.

use async_trait::async_trait;
use sea_orm::{ActiveValue::Set, EntityTrait, QueryOrder};

use zonekeeper_core::error::{CoreError, CoreResult};
use zonekeeper_core::traits::ConfigRepository;
use zonekeeper_core::types::CloudflareConfig;

use super::entity::config;
use super::SqliteStore;

fn parse_timestamp(value: &str, field: &str) -> CoreResult<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&chrono::Utc))
        .map_err(|e| CoreError::Storage(format!("Invalid {field}: {e}")))
}

impl config::Model {
    /// Convert a `SeaORM` row model into a domain `CloudflareConfig`.
    fn into_config(self) -> CoreResult<CloudflareConfig> {
        let created_at = parse_timestamp(&self.created_at, "created_at")?;
        let updated_at = parse_timestamp(&self.updated_at, "updated_at")?;

        Ok(CloudflareConfig {
            id: self.id,
            account_id: self.account_id,
            global_key: self.global_key,
            email: self.email,
            created_at,
            updated_at,
        })
    }
}

fn config_to_active_model(config: &CloudflareConfig) -> config::ActiveModel {
    config::ActiveModel {
        id: Set(config.id.clone()),
        account_id: Set(config.account_id.clone()),
        global_key: Set(config.global_key.clone()),
        email: Set(config.email.clone()),
        created_at: Set(config.created_at.to_rfc3339()),
        updated_at: Set(config.updated_at.to_rfc3339()),
    }
}

#[async_trait]
impl ConfigRepository for SqliteStore {
    async fn find_latest(&self) -> CoreResult<Option<CloudflareConfig>> {
        let row = config::Entity::find()
            .order_by_desc(config::Column::CreatedAt)
            .one(&self.db)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to query config: {e}")))?;

        row.map(config::Model::into_config).transpose()
    }

    async fn save(&self, config: &CloudflareConfig) -> CoreResult<()> {
        let active_model = config_to_active_model(config);

        config::Entity::insert(active_model)
            .on_conflict(
                sea_orm::sea_query::OnConflict::column(config::Column::Id)
                    .update_columns([
                        config::Column::AccountId,
                        config::Column::GlobalKey,
                        config::Column::Email,
                        config::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to save config: {e}")))?;

        Ok(())
    }
}
