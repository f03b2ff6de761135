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
                    .table(ReactionRole::Table)
                    .if_not_exists()
                    .col(string(ReactionRole::Id).primary_key())
                    .col(string(ReactionRole::ServerId))
                    .col(string(ReactionRole::MessageId))
                    .col(string(ReactionRole::ChannelId))
                    .col(string_len(ReactionRole::Emoji, 64))
                    .col(string(ReactionRole::RoleId))
                    .col(timestamp_with_time_zone(ReactionRole::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reaction_role_server")
                            .from(ReactionRole::Table, ReactionRole::ServerId)
                            .to(Server::Table, Server::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reaction_role_server_created_at")
                    .table(ReactionRole::Table)
                    .col(ReactionRole::ServerId)
                    .col(ReactionRole::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReactionRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReactionRole {
    Table,
    Id,
    ServerId,
    MessageId,
    ChannelId,
    Emoji,
    RoleId,
    CreatedAt,
}
