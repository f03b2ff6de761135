pub use sea_orm_migration::prelude::*;

mod m20261016_000001_create_user_table;
mod m20261016_000002_create_server_table;
mod m20261016_000003_create_mod_settings_table;
mod m20261016_000004_create_ticket_settings_table;
mod m20261016_000005_create_ticket_table;
mod m20261016_000006_create_mod_action_table;
mod m20261016_000007_create_auto_mod_settings_table;
mod m20261016_000008_create_log_settings_table;
mod m20261016_000009_create_log_event_table;
mod m20261016_000010_create_welcome_settings_table;
mod m20261016_000011_create_custom_command_table;
mod m20261016_000012_create_auto_role_settings_table;
mod m20261016_000013_create_reaction_role_table;
mod m20261016_000014_create_server_analytics_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261016_000001_create_user_table::Migration),
            Box::new(m20261016_000002_create_server_table::Migration),
            Box::new(m20261016_000003_create_mod_settings_table::Migration),
            Box::new(m20261016_000004_create_ticket_settings_table::Migration),
            Box::new(m20261016_000005_create_ticket_table::Migration),
            Box::new(m20261016_000006_create_mod_action_table::Migration),
            Box::new(m20261016_000007_create_auto_mod_settings_table::Migration),
            Box::new(m20261016_000008_create_log_settings_table::Migration),
            Box::new(m20261016_000009_create_log_event_table::Migration),
            Box::new(m20261016_000010_create_welcome_settings_table::Migration),
            Box::new(m20261016_000011_create_custom_command_table::Migration),
            Box::new(m20261016_000012_create_auto_role_settings_table::Migration),
            Box::new(m20261016_000013_create_reaction_role_table::Migration),
            Box::new(m20261016_000014_create_server_analytics_table::Migration),
        ]
    }
}
