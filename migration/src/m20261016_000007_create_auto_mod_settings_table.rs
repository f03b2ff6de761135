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
                    .table(AutoModSettings::Table)
                    .if_not_exists()
                    .col(string(AutoModSettings::ServerId).primary_key())
                    .col(boolean(AutoModSettings::SpamEnabled))
                    .col(integer(AutoModSettings::SpamThreshold))
                    .col(integer(AutoModSettings::SpamInterval))
                    .col(string_len(AutoModSettings::SpamAction, 20))
                    .col(boolean(AutoModSettings::WordFilterEnabled))
                    .col(json(AutoModSettings::FilteredWords))
                    .col(string_len(AutoModSettings::WordFilterAction, 20))
                    .col(boolean(AutoModSettings::RaidProtectionEnabled))
                    .col(integer(AutoModSettings::RaidJoinThreshold))
                    .col(integer(AutoModSettings::RaidJoinInterval))
                    .col(string_len(AutoModSettings::RaidAction, 20))
                    .col(json(AutoModSettings::ExemptRoles))
                    .col(timestamp_with_time_zone(AutoModSettings::CreatedAt))
                    .col(timestamp_with_time_zone(AutoModSettings::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_auto_mod_settings_server")
                            .from(AutoModSettings::Table, AutoModSettings::ServerId)
                            .to(Server::Table, Server::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AutoModSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AutoModSettings {
    Table,
    ServerId,
    SpamEnabled,
    SpamThreshold,
    SpamInterval,
    SpamAction,
    WordFilterEnabled,
    FilteredWords,
    WordFilterAction,
    RaidProtectionEnabled,
    RaidJoinThreshold,
    RaidJoinInterval,
    RaidAction,
    ExemptRoles,
    CreatedAt,
    UpdatedAt,
}
