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
                    .table(CustomCommand::Table)
                    .if_not_exists()
                    .col(string(CustomCommand::Id).primary_key())
                    .col(string(CustomCommand::ServerId))
                    .col(string_len(CustomCommand::Name, 32))
                    .col(text_null(CustomCommand::Description))
                    .col(text(CustomCommand::Response))
                    .col(boolean(CustomCommand::EmbedEnabled))
                    .col(string_len(CustomCommand::EmbedColor, 7))
                    .col(json(CustomCommand::AllowedRoles))
                    .col(integer(CustomCommand::Cooldown))
                    .col(boolean(CustomCommand::Enabled))
                    .col(integer(CustomCommand::UsageCount).default(0))
                    .col(timestamp_with_time_zone(CustomCommand::CreatedAt))
                    .col(timestamp_with_time_zone(CustomCommand::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_custom_command_server")
                            .from(CustomCommand::Table, CustomCommand::ServerId)
                            .to(Server::Table, Server::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_custom_command_server_created_at")
                    .table(CustomCommand::Table)
                    .col(CustomCommand::ServerId)
                    .col(CustomCommand::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_custom_command_server_name")
                    .table(CustomCommand::Table)
                    .col(CustomCommand::ServerId)
                    .col(CustomCommand::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CustomCommand::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CustomCommand {
    Table,
    Id,
    ServerId,
    Name,
    Description,
    Response,
    EmbedEnabled,
    EmbedColor,
    AllowedRoles,
    Cooldown,
    Enabled,
    UsageCount,
    CreatedAt,
    UpdatedAt,
}
