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
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(string(Ticket::Id).primary_key())
                    .col(string(Ticket::ServerId))
                    .col(string(Ticket::ChannelId))
                    .col(string(Ticket::CreatorId))
                    .col(text(Ticket::CreatorName))
                    .col(string_len(Ticket::Status, 20))
                    .col(text_null(Ticket::Subject))
                    .col(timestamp_with_time_zone(Ticket::CreatedAt))
                    .col(timestamp_with_time_zone_null(Ticket::ClosedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_server")
                            .from(Ticket::Table, Ticket::ServerId)
                            .to(Server::Table, Server::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ticket_server_created_at")
                    .table(Ticket::Table)
                    .col(Ticket::ServerId)
                    .col(Ticket::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ticket {
    Table,
    Id,
    ServerId,
    ChannelId,
    CreatorId,
    CreatorName,
    Status,
    Subject,
    CreatedAt,
    ClosedAt,
}
