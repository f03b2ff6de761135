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
                    .table(LogSettings::Table)
                    .if_not_exists()
                    .col(string(LogSettings::ServerId).primary_key())
                    .col(string_null(LogSettings::LogChannelId))
                    .col(boolean(LogSettings::LogModActions))
                    .col(boolean(LogSettings::LogMessageEdits))
                    .col(boolean(LogSettings::LogMessageDeletes))
                    .col(boolean(LogSettings::LogMemberJoins))
                    .col(boolean(LogSettings::LogMemberLeaves))
                    .col(boolean(LogSettings::LogVoiceActivity))
                    .col(boolean(LogSettings::LogRoleChanges))
                    .col(timestamp_with_time_zone(LogSettings::CreatedAt))
                    .col(timestamp_with_time_zone(LogSettings::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_log_settings_server")
                            .from(LogSettings::Table, LogSettings::ServerId)
                            .to(Server::Table, Server::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LogSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LogSettings {
    Table,
    ServerId,
    LogChannelId,
    LogModActions,
    LogMessageEdits,
    LogMessageDeletes,
    LogMemberJoins,
    LogMemberLeaves,
    LogVoiceActivity,
    LogRoleChanges,
    CreatedAt,
    UpdatedAt,
}
