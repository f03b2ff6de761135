use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Server::Table)
                    .if_not_exists()
                    .col(string(Server::Id).primary_key())
                    .col(text(Server::Name))
                    .col(text_null(Server::IconUrl))
                    .col(string(Server::OwnerId))
                    .col(integer(Server::MemberCount).default(0))
                    .col(timestamp_with_time_zone(Server::CreatedAt))
                    .col(timestamp_with_time_zone(Server::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_server_owner_id")
                    .table(Server::Table)
                    .col(Server::OwnerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Server::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Server {
    Table,
    Id,
    Name,
    IconUrl,
    OwnerId,
    MemberCount,
    CreatedAt,
    UpdatedAt,
}
