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
                    .table(TicketSettings::Table)
                    .if_not_exists()
                    .col(string(TicketSettings::ServerId).primary_key())
                    .col(boolean(TicketSettings::Enabled))
                    .col(string_null(TicketSettings::CategoryId))
                    .col(json(TicketSettings::SupportRoles))
                    .col(text(TicketSettings::WelcomeMessage))
                    .col(timestamp_with_time_zone(TicketSettings::CreatedAt))
                    .col(timestamp_with_time_zone(TicketSettings::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_settings_server")
                            .from(TicketSettings::Table, TicketSettings::ServerId)
                            .to(Server::Table, Server::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TicketSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TicketSettings {
    Table,
    ServerId,
    Enabled,
    CategoryId,
    SupportRoles,
    WelcomeMessage,
    CreatedAt,
    UpdatedAt,
}
