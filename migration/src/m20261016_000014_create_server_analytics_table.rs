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
                    .table(ServerAnalytics::Table)
                    .if_not_exists()
                    .col(string(ServerAnalytics::ServerId))
                    .col(date(ServerAnalytics::Date))
                    .col(integer(ServerAnalytics::MemberCount).default(0))
                    .col(integer(ServerAnalytics::MessageCount).default(0))
                    .col(integer(ServerAnalytics::CommandsUsed).default(0))
                    .col(integer(ServerAnalytics::TicketsCreated).default(0))
                    .col(integer(ServerAnalytics::ModActionsCount).default(0))
                    .col(integer(ServerAnalytics::ActiveMembers).default(0))
                    .primary_key(
                        Index::create()
                            .col(ServerAnalytics::ServerId)
                            .col(ServerAnalytics::Date),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_server_analytics_server")
                            .from(ServerAnalytics::Table, ServerAnalytics::ServerId)
                            .to(Server::Table, Server::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServerAnalytics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServerAnalytics {
    Table,
    ServerId,
    Date,
    MemberCount,
    MessageCount,
    CommandsUsed,
    TicketsCreated,
    ModActionsCount,
    ActiveMembers,
}
