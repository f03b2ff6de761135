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
                    .table(LogEvent::Table)
                    .if_not_exists()
                    .col(string(LogEvent::Id).primary_key())
                    .col(string(LogEvent::ServerId))
                    .col(string_len(LogEvent::EventType, 30))
                    .col(string_null(LogEvent::ActorId))
                    .col(text_null(LogEvent::ActorName))
                    .col(string_null(LogEvent::TargetId))
                    .col(text_null(LogEvent::TargetName))
                    .col(text_null(LogEvent::Details))
                    .col(timestamp_with_time_zone(LogEvent::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_log_event_server")
                            .from(LogEvent::Table, LogEvent::ServerId)
                            .to(Server::Table, Server::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_log_event_server_created_at")
                    .table(LogEvent::Table)
                    .col(LogEvent::ServerId)
                    .col(LogEvent::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LogEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LogEvent {
    Table,
    Id,
    ServerId,
    EventType,
    ActorId,
    ActorName,
    TargetId,
    TargetName,
    Details,
    CreatedAt,
}
