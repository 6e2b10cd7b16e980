//! `MailboxRepository` implementation for `SqliteStore`.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use zonekeeper_core::error::{CoreError, CoreResult};
use zonekeeper_core::traits::MailboxRepository;
use zonekeeper_core::types::Mailbox;

use super::entity::user_email;
use super::SqliteStore;

impl user_email::Model {
    /// Convert a `SeaORM` row model into a domain `Mailbox`.
    fn into_mailbox(self) -> CoreResult<Mailbox> {
        let created_at = chrono::DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| CoreError::Storage(format!("Invalid created_at: {e}")))?
            .with_timezone(&chrono::Utc);
        let updated_at = chrono::DateTime::parse_from_rfc3339(&self.updated_at)
            .map_err(|e| CoreError::Storage(format!("Invalid updated_at: {e}")))?
            .with_timezone(&chrono::Utc);

        Ok(Mailbox {
            id: self.id,
            user_id: self.user_id,
            email_address: self.email_address,
            created_at,
            updated_at,
        })
    }
}

#[async_trait]
impl MailboxRepository for SqliteStore {
    async fn find_by_user(&self, user_id: &str) -> CoreResult<Vec<Mailbox>> {
        let rows = user_email::Entity::find()
            .filter(user_email::Column::UserId.eq(user_id))
            .order_by_desc(user_email::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to query mailboxes: {e}")))?;

        rows.into_iter().map(user_email::Model::into_mailbox).collect()
    }

    async fn find_by_address(&self, address: &str) -> CoreResult<Option<Mailbox>> {
        let row = user_email::Entity::find()
            .filter(user_email::Column::EmailAddress.eq(address))
            .one(&self.db)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to query mailbox: {e}")))?;

        row.map(user_email::Model::into_mailbox).transpose()
    }

    async fn count_by_user(&self, user_id: &str) -> CoreResult<u64> {
        user_email::Entity::find()
            .filter(user_email::Column::UserId.eq(user_id))
            .count(&self.db)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to count mailboxes: {e}")))
    }

    async fn insert(&self, mailbox: &Mailbox) -> CoreResult<()> {
        let active = user_email::ActiveModel {
            id: Set(mailbox.id.clone()),
            user_id: Set(mailbox.user_id.clone()),
            email_address: Set(mailbox.email_address.clone()),
            created_at: Set(mailbox.created_at.to_rfc3339()),
            updated_at: Set(mailbox.updated_at.to_rfc3339()),
        };

        active
            .insert(&self.db)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to insert mailbox: {e}")))?;

        Ok(())
    }
}
