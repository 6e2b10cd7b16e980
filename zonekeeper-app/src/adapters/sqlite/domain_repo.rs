//! `DomainRepository` implementation for `SqliteStore`.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter, QueryOrder,
};

use zonekeeper_core::error::{CoreError, CoreResult};
use zonekeeper_core::traits::DomainRepository;
use zonekeeper_core::types::{Domain, DomainFlagPatch, ServiceType};

use super::entity::domain;
use super::SqliteStore;

impl domain::Model {
    /// Convert a `SeaORM` row model into a domain `Domain`.
    fn into_domain(self) -> CoreResult<Domain> {
        let created_at = chrono::DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| CoreError::Storage(format!("Invalid created_at: {e}")))?
            .with_timezone(&chrono::Utc);
        let updated_at = chrono::DateTime::parse_from_rfc3339(&self.updated_at)
            .map_err(|e| CoreError::Storage(format!("Invalid updated_at: {e}")))?
            .with_timezone(&chrono::Utc);

        Ok(Domain {
            id: self.id,
            domain_name: self.domain_name,
            zone_id: self.zone_id,
            config_id: self.config_id,
            use_dns: self.use_dns != 0,
            use_emails: self.use_emails != 0,
            use_short_url: self.use_short_url != 0,
            created_at,
            updated_at,
        })
    }
}

fn domain_to_active_model(domain: &Domain) -> domain::ActiveModel {
    domain::ActiveModel {
        id: Set(domain.id.clone()),
        domain_name: Set(domain.domain_name.clone()),
        zone_id: Set(domain.zone_id.clone()),
        config_id: Set(domain.config_id.clone()),
        use_dns: Set(i32::from(domain.use_dns)),
        use_emails: Set(i32::from(domain.use_emails)),
        use_short_url: Set(i32::from(domain.use_short_url)),
        created_at: Set(domain.created_at.to_rfc3339()),
        updated_at: Set(domain.updated_at.to_rfc3339()),
    }
}

impl SqliteStore {
    async fn find_one_domain(
        &self,
        filter: sea_orm::sea_query::SimpleExpr,
    ) -> CoreResult<Option<Domain>> {
        let row = domain::Entity::find()
            .filter(filter)
            .one(&self.db)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to query domain: {e}")))?;

        row.map(domain::Model::into_domain).transpose()
    }
}

#[async_trait]
impl DomainRepository for SqliteStore {
    async fn find_by_config(&self, config_id: &str) -> CoreResult<Vec<Domain>> {
        let rows = domain::Entity::find()
            .filter(domain::Column::ConfigId.eq(config_id))
            .order_by_asc(domain::Column::DomainName)
            .all(&self.db)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to query domains: {e}")))?;

        rows.into_iter().map(domain::Model::into_domain).collect()
    }

    async fn find_by_id(&self, id: &str) -> CoreResult<Option<Domain>> {
        self.find_one_domain(domain::Column::Id.eq(id)).await
    }

    async fn find_by_zone_id(&self, zone_id: &str) -> CoreResult<Option<Domain>> {
        self.find_one_domain(domain::Column::ZoneId.eq(zone_id))
            .await
    }

    async fn find_by_name(&self, domain_name: &str) -> CoreResult<Option<Domain>> {
        self.find_one_domain(domain::Column::DomainName.eq(domain_name))
            .await
    }

    async fn insert(&self, domain: &Domain) -> CoreResult<()> {
        domain_to_active_model(domain)
            .insert(&self.db)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to insert domain: {e}")))?;

        Ok(())
    }

    async fn update_zone_binding(
        &self,
        zone_id: &str,
        domain_name: &str,
        config_id: &str,
    ) -> CoreResult<()> {
        let row = domain::Entity::find()
            .filter(domain::Column::ZoneId.eq(zone_id))
            .one(&self.db)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to query domain: {e}")))?;

        // 只更新名称与归属，不触碰授权标志
        if let Some(model) = row {
            let active = domain::ActiveModel {
                id: Set(model.id),
                domain_name: Set(domain_name.to_string()),
                config_id: Set(config_id.to_string()),
                updated_at: Set(chrono::Utc::now().to_rfc3339()),
                ..Default::default()
            };
            active
                .update(&self.db)
                .await
                .map_err(|e| CoreError::Storage(format!("Failed to update domain: {e}")))?;
        }

        Ok(())
    }

    async fn update_flags(&self, id: &str, patch: &DomainFlagPatch) -> CoreResult<Domain> {
        let model = domain::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to query domain: {e}")))?
            .ok_or_else(|| CoreError::NotFound(format!("domain {id}")))?;

        if patch.is_empty() {
            return model.into_domain();
        }

        let mut active = domain::ActiveModel {
            id: Set(model.id.clone()),
            updated_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };
        if let Some(v) = patch.use_dns {
            active.use_dns = Set(i32::from(v));
        }
        if let Some(v) = patch.use_emails {
            active.use_emails = Set(i32::from(v));
        }
        if let Some(v) = patch.use_short_url {
            active.use_short_url = Set(i32::from(v));
        }

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to update flags: {e}")))?;

        updated.into_domain()
    }

    async fn find_by_service(&self, service: Option<ServiceType>) -> CoreResult<Vec<Domain>> {
        let mut select = domain::Entity::find();
        if let Some(service) = service {
            let column = match service {
                ServiceType::Dns => domain::Column::UseDns,
                ServiceType::Email => domain::Column::UseEmails,
                ServiceType::ShortUrl => domain::Column::UseShortUrl,
            };
            select = select.filter(column.eq(1));
        }

        let rows = select
            .order_by_asc(domain::Column::DomainName)
            .all(&self.db)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to query domains: {e}")))?;

        rows.into_iter().map(domain::Model::into_domain).collect()
    }
}
