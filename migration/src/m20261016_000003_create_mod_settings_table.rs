use sea_orm_migration::{prelude::*, schema::*};

use super::m20261016_000002_create_server_table::Server;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ModSettings::Table)
                    .if_not_exists()
                    .col(string(ModSettings::ServerId).primary_key())
                    .col(boolean(ModSettings::BanEnabled))
                    .col(boolean(ModSettings::KickEnabled))
                    .col(boolean(ModSettings::MuteEnabled))
                    .col(boolean(ModSettings::WarnEnabled))
                    .col(json(ModSettings::ModRoles))
                    .col(string_null(ModSettings::LogChannelId))
                    .col(timestamp_with_time_zone(ModSettings::CreatedAt))
                    .col(timestamp_with_time_zone(ModSettings::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mod_settings_server")
                            .from(ModSettings::Table, ModSettings::ServerId)
                            .to(Server::Table, Server::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ModSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ModSettings {
    Table,
    ServerId,
    BanEnabled,
    KickEnabled,
    MuteEnabled,
    WarnEnabled,
    ModRoles,
    LogChannelId,
    CreatedAt,
    UpdatedAt,
}
