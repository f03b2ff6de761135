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
                    .table(WelcomeSettings::Table)
                    .if_not_exists()
                    .col(string(WelcomeSettings::ServerId).primary_key())
                    .col(boolean(WelcomeSettings::WelcomeEnabled))
                    .col(string_null(WelcomeSettings::WelcomeChannelId))
                    .col(text(WelcomeSettings::WelcomeMessage))
                    .col(boolean(WelcomeSettings::WelcomeEmbedEnabled))
                    .col(string_len(WelcomeSettings::WelcomeEmbedColor, 7))
                    .col(boolean(WelcomeSettings::GoodbyeEnabled))
                    .col(string_null(WelcomeSettings::GoodbyeChannelId))
                    .col(text(WelcomeSettings::GoodbyeMessage))
                    .col(boolean(WelcomeSettings::DmWelcomeEnabled))
                    .col(text(WelcomeSettings::DmWelcomeMessage))
                    .col(timestamp_with_time_zone(WelcomeSettings::CreatedAt))
                    .col(timestamp_with_time_zone(WelcomeSettings::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_welcome_settings_server")
                            .from(WelcomeSettings::Table, WelcomeSettings::ServerId)
                            .to(Server::Table, Server::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WelcomeSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WelcomeSettings {
    Table,
    ServerId,
    WelcomeEnabled,
    WelcomeChannelId,
    WelcomeMessage,
    WelcomeEmbedEnabled,
    WelcomeEmbedColor,
    GoodbyeEnabled,
    GoodbyeChannelId,
    GoodbyeMessage,
    DmWelcomeEnabled,
    DmWelcomeMessage,
    CreatedAt,
    UpdatedAt,
}
