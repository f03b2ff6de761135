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
                    .table(ModAction::Table)
                    .if_not_exists()
                    .col(string(ModAction::Id).primary_key())
                    .col(string(ModAction::ServerId))
                    .col(string_len(ModAction::ActionType, 20))
                    .col(string(ModAction::TargetId))
                    .col(text(ModAction::TargetName))
                    .col(string(ModAction::ModeratorId))
                    .col(text(ModAction::ModeratorName))
                    .col(text_null(ModAction::Reason))
                    .col(timestamp_with_time_zone(ModAction::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mod_action_server")
                            .from(ModAction::Table, ModAction::ServerId)
                            .to(Server::Table, Server::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_mod_action_server_created_at")
                    .table(ModAction::Table)
                    .col(ModAction::ServerId)
                    .col(ModAction::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ModAction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ModAction {
    Table,
    Id,
    ServerId,
    ActionType,
    TargetId,
    TargetName,
    ModeratorId,
    ModeratorName,
    Reason,
    CreatedAt,
}
