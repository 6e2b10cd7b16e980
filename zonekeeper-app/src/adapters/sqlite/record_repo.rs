//! `RecordRepository` implementation for `SqliteStore`.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter,
};

use zonekeeper_core::error::{CoreError, CoreResult};
use zonekeeper_core::traits::RecordRepository;
use zonekeeper_core::types::UserRecord;

use super::entity::user_record;
use super::SqliteStore;

impl user_record::Model {
    /// Convert a `SeaORM` row model into a domain `UserRecord`.
    fn into_record(self) -> CoreResult<UserRecord> {
        let created_at = chrono::DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| CoreError::Storage(format!("Invalid created_at: {e}")))?
            .with_timezone(&chrono::Utc);
        let updated_at = chrono::DateTime::parse_from_rfc3339(&self.updated_at)
            .map_err(|e| CoreError::Storage(format!("Invalid updated_at: {e}")))?
            .with_timezone(&chrono::Utc);
        let ttl = u32::try_from(self.ttl)
            .map_err(|e| CoreError::Storage(format!("Invalid ttl: {e}")))?;

        Ok(UserRecord {
            user_id: self.user_id,
            record_id: self.record_id,
            zone_id: self.zone_id,
            zone_name: self.zone_name,
            name: self.name,
            record_type: self.record_type,
            content: self.content,
            proxied: self.proxied != 0,
            proxiable: self.proxiable != 0,
            ttl,
            comment: self.comment,
            tags: self.tags,
            active: self.active != 0,
            created_on: self.created_on,
            modified_on: self.modified_on,
            created_at,
            updated_at,
        })
    }
}

fn record_to_active_model(record: &UserRecord) -> user_record::ActiveModel {
    user_record::ActiveModel {
        user_id: Set(record.user_id.clone()),
        record_id: Set(record.record_id.clone()),
        zone_id: Set(record.zone_id.clone()),
        zone_name: Set(record.zone_name.clone()),
        name: Set(record.name.clone()),
        record_type: Set(record.record_type.clone()),
        content: Set(record.content.clone()),
        proxied: Set(i32::from(record.proxied)),
        proxiable: Set(i32::from(record.proxiable)),
        ttl: Set(i64::from(record.ttl)),
        comment: Set(record.comment.clone()),
        tags: Set(record.tags.clone()),
        active: Set(i32::from(record.active)),
        created_on: Set(record.created_on.clone()),
        modified_on: Set(record.modified_on.clone()),
        created_at: Set(record.created_at.to_rfc3339()),
        updated_at: Set(record.updated_at.to_rfc3339()),
    }
}

#[async_trait]
impl RecordRepository for SqliteStore {
    async fn count_by_user(&self, user_id: &str) -> CoreResult<u64> {
        user_record::Entity::find()
            .filter(user_record::Column::UserId.eq(user_id))
            .count(&self.db)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to count records: {e}")))
    }

    async fn find_duplicate(
        &self,
        user_id: &str,
        record_type: &str,
        name: &str,
        content: &str,
    ) -> CoreResult<Option<UserRecord>> {
        let row = user_record::Entity::find()
            .filter(user_record::Column::UserId.eq(user_id))
            .filter(user_record::Column::RecordType.eq(record_type))
            .filter(user_record::Column::Name.eq(name))
            .filter(user_record::Column::Content.eq(content))
            .one(&self.db)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to query record: {e}")))?;

        row.map(user_record::Model::into_record).transpose()
    }

    async fn find_by_record_id(
        &self,
        user_id: &str,
        record_id: &str,
    ) -> CoreResult<Option<UserRecord>> {
        let row = user_record::Entity::find_by_id((user_id.to_string(), record_id.to_string()))
            .one(&self.db)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to query record: {e}")))?;

        row.map(user_record::Model::into_record).transpose()
    }

    async fn insert(&self, record: &UserRecord) -> CoreResult<()> {
        record_to_active_model(record)
            .insert(&self.db)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to insert record: {e}")))?;

        Ok(())
    }

    async fn update(&self, record: &UserRecord) -> CoreResult<()> {
        user_record::Entity::insert(record_to_active_model(record))
            .on_conflict(
                sea_orm::sea_query::OnConflict::columns([
                    user_record::Column::UserId,
                    user_record::Column::RecordId,
                ])
                .update_columns([
                    user_record::Column::ZoneId,
                    user_record::Column::ZoneName,
                    user_record::Column::Name,
                    user_record::Column::RecordType,
                    user_record::Column::Content,
                    user_record::Column::Proxied,
                    user_record::Column::Proxiable,
                    user_record::Column::Ttl,
                    user_record::Column::Comment,
                    user_record::Column::Tags,
                    user_record::Column::Active,
                    user_record::Column::CreatedOn,
                    user_record::Column::ModifiedOn,
                    user_record::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to update record: {e}")))?;

        Ok(())
    }

    async fn delete(&self, user_id: &str, record_id: &str, zone_id: &str) -> CoreResult<()> {
        user_record::Entity::delete_many()
            .filter(user_record::Column::UserId.eq(user_id))
            .filter(user_record::Column::RecordId.eq(record_id))
            .filter(user_record::Column::ZoneId.eq(zone_id))
            .exec(&self.db)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to delete record: {e}")))?;

        Ok(())
    }

    async fn set_active(
        &self,
        user_id: &str,
        record_id: &str,
        zone_id: &str,
        active: bool,
    ) -> CoreResult<()> {
        let row = user_record::Entity::find_by_id((user_id.to_string(), record_id.to_string()))
            .one(&self.db)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to query record: {e}")))?;

        let model = row
            .filter(|m| m.zone_id == zone_id)
            .ok_or_else(|| CoreError::NotFound(format!("record {record_id}")))?;

        let update = user_record::ActiveModel {
            user_id: Set(model.user_id),
            record_id: Set(model.record_id),
            active: Set(i32::from(active)),
            updated_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };
        update
            .update(&self.db)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to update record: {e}")))?;

        Ok(())
    }
}
