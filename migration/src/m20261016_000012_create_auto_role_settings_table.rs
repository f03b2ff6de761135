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
                    .table(AutoRoleSettings::Table)
                    .if_not_exists()
                    .col(string(AutoRoleSettings::ServerId).primary_key())
                    .col(boolean(AutoRoleSettings::Enabled))
                    .col(json(AutoRoleSettings::JoinRoles))
                    .col(string_null(AutoRoleSettings::VerifiedRoleId))
                    .col(boolean(AutoRoleSettings::VerificationEnabled))
                    .col(boolean(AutoRoleSettings::ReactionRolesEnabled))
                    .col(timestamp_with_time_zone(AutoRoleSettings::CreatedAt))
                    .col(timestamp_with_time_zone(AutoRoleSettings::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_auto_role_settings_server")
                            .from(AutoRoleSettings::Table, AutoRoleSettings::ServerId)
                            .to(Server::Table, Server::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AutoRoleSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AutoRoleSettings {
    Table,
    ServerId,
    Enabled,
    JoinRoles,
    VerifiedRoleId,
    VerificationEnabled,
    ReactionRolesEnabled,
    CreatedAt,
    UpdatedAt,
}
