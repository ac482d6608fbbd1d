//! Initial schema: accounts, reference lookups, warehouse inventory, donations,
//! pickups, campaigns, e-commerce credentials and the audit trail.
//!
//! Foreign keys are declared inline with each table so the same migration
//! runs on SQLite (mock mode) and Postgres.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::Name).string_len(256).not_null())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(256)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(Users::Role)
                            .string_len(16)
                            .not_null()
                            .default("user"),
                    )
                    .col(ColumnDef::new(Users::Avatar).text().null())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Partners::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Partners::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Partners::Name).string_len(256).not_null())
                    .col(ColumnDef::new(Partners::Description).text().null())
                    .col(ColumnDef::new(Partners::LogoUrl).text().null())
                    .col(ColumnDef::new(Partners::LogoHint).string_len(256).null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Locations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Locations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Locations::Name).string_len(256).not_null())
                    .col(ColumnDef::new(Locations::Address).text().not_null())
                    .col(ColumnDef::new(Locations::Hours).string_len(256).null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AccessoryTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AccessoryTypes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AccessoryTypes::Name)
                            .string_len(256)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ToyConditions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ToyConditions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ToyConditions::Name)
                            .string_len(256)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Inventory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Inventory::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Inventory::Name).string_len(256).not_null())
                    .col(ColumnDef::new(Inventory::Description).text().null())
                    .col(ColumnDef::new(Inventory::ConditionId).integer().not_null())
                    .col(
                        ColumnDef::new(Inventory::Status)
                            .string_len(32)
                            .not_null()
                            .default("received"),
                    )
                    .col(ColumnDef::new(Inventory::ImageUrl).text().null())
                    .col(ColumnDef::new(Inventory::ImageHint).string_len(256).null())
                    .col(
                        ColumnDef::new(Inventory::RedistributedToPartnerId)
                            .integer()
                            .null(),
                    )
                    .col(ColumnDef::new(Inventory::LogisticsStatus).string_len(32).null())
                    .col(
                        ColumnDef::new(Inventory::ReceivedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventory_condition")
                            .from(Inventory::Table, Inventory::ConditionId)
                            .to(ToyConditions::Table, ToyConditions::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventory_partner")
                            .from(Inventory::Table, Inventory::RedistributedToPartnerId)
                            .to(Partners::Table, Partners::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_inventory_status")
                    .table(Inventory::Table)
                    .col(Inventory::Status)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Donations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Donations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Donations::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Donations::InventoryId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Donations::DonatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_donations_user")
                            .from(Donations::Table, Donations::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_donations_inventory")
                            .from(Donations::Table, Donations::InventoryId)
                            .to(Inventory::Table, Inventory::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Pickups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Pickups::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Pickups::Name).string_len(256).not_null())
                    .col(ColumnDef::new(Pickups::Email).string_len(256).not_null())
                    .col(ColumnDef::new(Pickups::PickupType).string_len(32).not_null())
                    .col(ColumnDef::new(Pickups::Address).text().null())
                    .col(ColumnDef::new(Pickups::LocationId).integer().null())
                    .col(ColumnDef::new(Pickups::PartnerId).integer().null())
                    .col(ColumnDef::new(Pickups::PickupDate).date().not_null())
                    .col(ColumnDef::new(Pickups::TimeSlot).string_len(64).not_null())
                    .col(
                        ColumnDef::new(Pickups::Status)
                            .string_len(32)
                            .not_null()
                            .default("scheduled"),
                    )
                    .col(ColumnDef::new(Pickups::ToyConditionId).integer().not_null())
                    .col(ColumnDef::new(Pickups::AccessoryTypeId).integer().not_null())
                    .col(ColumnDef::new(Pickups::Notes).text().null())
                    .col(ColumnDef::new(Pickups::CollectionCost).double().null())
                    .col(
                        ColumnDef::new(Pickups::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pickups_location")
                            .from(Pickups::Table, Pickups::LocationId)
                            .to(Locations::Table, Locations::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pickups_partner")
                            .from(Pickups::Table, Pickups::PartnerId)
                            .to(Partners::Table, Partners::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pickups_toy_condition")
                            .from(Pickups::Table, Pickups::ToyConditionId)
                            .to(ToyConditions::Table, ToyConditions::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pickups_accessory_type")
                            .from(Pickups::Table, Pickups::AccessoryTypeId)
                            .to(AccessoryTypes::Table, AccessoryTypes::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pickups_pickup_date")
                    .table(Pickups::Table)
                    .col(Pickups::PickupDate)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pickups_email")
                    .table(Pickups::Table)
                    .col(Pickups::Email)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Campaigns::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Campaigns::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Campaigns::Name).string_len(256).not_null())
                    .col(ColumnDef::new(Campaigns::Description).text().null())
                    .col(ColumnDef::new(Campaigns::EndDate).date().not_null())
                    .col(
                        ColumnDef::new(Campaigns::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EcommerceIntegrations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EcommerceIntegrations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EcommerceIntegrations::Platform)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(ColumnDef::new(EcommerceIntegrations::ApiKey).text().not_null())
                    .col(
                        ColumnDef::new(EcommerceIntegrations::ApiSecret)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EcommerceIntegrations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AuditLogs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(AuditLogs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(AuditLogs::UserId).uuid().null())
                    .col(ColumnDef::new(AuditLogs::Action).string_len(64).not_null())
                    .col(ColumnDef::new(AuditLogs::Resource).string_len(64).null())
                    .col(ColumnDef::new(AuditLogs::Metadata).json().null())
                    .col(
                        ColumnDef::new(AuditLogs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_audit_logs_user")
                            .from(AuditLogs::Table, AuditLogs::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuditLogs::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(EcommerceIntegrations::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Campaigns::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Pickups::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Donations::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Inventory::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ToyConditions::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AccessoryTypes::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Locations::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Partners::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Role,
    Avatar,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Partners {
    Table,
    Id,
    Name,
    Description,
    LogoUrl,
    LogoHint,
}

#[derive(DeriveIden)]
enum Locations {
    Table,
    Id,
    Name,
    Address,
    Hours,
}

#[derive(DeriveIden)]
enum AccessoryTypes {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum ToyConditions {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Inventory {
    Table,
    Id,
    Name,
    Description,
    ConditionId,
    Status,
    ImageUrl,
    ImageHint,
    RedistributedToPartnerId,
    LogisticsStatus,
    ReceivedAt,
}

#[derive(DeriveIden)]
enum Donations {
    Table,
    Id,
    UserId,
    InventoryId,
    DonatedAt,
}

#[derive(DeriveIden)]
enum Pickups {
    Table,
    Id,
    Name,
    Email,
    PickupType,
    Address,
    LocationId,
    PartnerId,
    PickupDate,
    TimeSlot,
    Status,
    ToyConditionId,
    AccessoryTypeId,
    Notes,
    CollectionCost,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Campaigns {
    Table,
    Id,
    Name,
    Description,
    EndDate,
    CreatedAt,
}

#[derive(DeriveIden)]
enum EcommerceIntegrations {
    Table,
    Id,
    Platform,
    ApiKey,
    ApiSecret,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AuditLogs {
    Table,
    Id,
    UserId,
    Action,
    Resource,
    Metadata,
    CreatedAt,
}
