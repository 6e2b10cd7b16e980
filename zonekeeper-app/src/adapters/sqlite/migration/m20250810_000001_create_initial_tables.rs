use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // cloudflare_configs 表
        manager
            .create_table(
                Table::create()
                    .table(Config::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Config::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Config::AccountId).string().not_null())
                    .col(ColumnDef::new(Config::GlobalKey).string().not_null())
                    .col(ColumnDef::new(Config::Email).string().not_null())
                    .col(ColumnDef::new(Config::CreatedAt).string().not_null())
                    .col(ColumnDef::new(Config::UpdatedAt).string().not_null())
                    .to_owned(),
            )
            .await?;

        // domains 表，zone_id 唯一
        manager
            .create_table(
                Table::create()
                    .table(Domain::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Domain::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Domain::DomainName).string().not_null())
                    .col(
                        ColumnDef::new(Domain::ZoneId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Domain::ConfigId).string().not_null())
                    .col(
                        ColumnDef::new(Domain::UseDns)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Domain::UseEmails)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Domain::UseShortUrl)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Domain::CreatedAt).string().not_null())
                    .col(ColumnDef::new(Domain::UpdatedAt).string().not_null())
                    .to_owned(),
            )
            .await?;

        // user_records 表，(user_id, record_id) 主键
        manager
            .create_table(
                Table::create()
                    .table(UserRecord::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserRecord::UserId).string().not_null())
                    .col(ColumnDef::new(UserRecord::RecordId).string().not_null())
                    .col(ColumnDef::new(UserRecord::ZoneId).string().not_null())
                    .col(ColumnDef::new(UserRecord::ZoneName).string().not_null())
                    .col(ColumnDef::new(UserRecord::Name).string().not_null())
                    .col(ColumnDef::new(UserRecord::Type).string().not_null())
                    .col(ColumnDef::new(UserRecord::Content).string().not_null())
                    .col(
                        ColumnDef::new(UserRecord::Proxied)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UserRecord::Proxiable)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UserRecord::Ttl)
                            .big_integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(UserRecord::Comment)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(UserRecord::Tags)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(UserRecord::Active)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(UserRecord::CreatedOn).string().null())
                    .col(ColumnDef::new(UserRecord::ModifiedOn).string().null())
                    .col(ColumnDef::new(UserRecord::CreatedAt).string().not_null())
                    .col(ColumnDef::new(UserRecord::UpdatedAt).string().not_null())
                    .primary_key(
                        Index::create()
                            .col(UserRecord::UserId)
                            .col(UserRecord::RecordId),
                    )
                    .to_owned(),
            )
            .await?;

        // user_emails 表，地址全局唯一
        manager
            .create_table(
                Table::create()
                    .table(UserEmail::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserEmail::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserEmail::UserId).string().not_null())
                    .col(
                        ColumnDef::new(UserEmail::EmailAddress)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(UserEmail::CreatedAt).string().not_null())
                    .col(ColumnDef::new(UserEmail::UpdatedAt).string().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserEmail::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserRecord::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Domain::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Config::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Config {
    #[sea_orm(iden = "cloudflare_configs")]
    Table,
    Id,
    AccountId,
    GlobalKey,
    Email,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Domain {
    #[sea_orm(iden = "domains")]
    Table,
    Id,
    DomainName,
    ZoneId,
    ConfigId,
    UseDns,
    UseEmails,
    UseShortUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum UserRecord {
    #[sea_orm(iden = "user_records")]
    Table,
    UserId,
    RecordId,
    ZoneId,
    ZoneName,
    Name,
    Type,
    Content,
    Proxied,
    Proxiable,
    Ttl,
    Comment,
    Tags,
    Active,
    CreatedOn,
    ModifiedOn,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum UserEmail {
    #[sea_orm(iden = "user_emails")]
    Table,
    Id,
    UserId,
    EmailAddress,
    CreatedAt,
    UpdatedAt,
}
