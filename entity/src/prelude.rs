pub use super::auto_mod_settings::Entity as AutoModSettings;
pub use super::auto_role_settings::Entity as AutoRoleSettings;
pub use super::custom_command::Entity as CustomCommand;
pub use super::log_event::Entity as LogEvent;
pub use super::log_settings::Entity as LogSettings;
pub use super::mod_action::Entity as ModAction;
pub use super::mod_settings::Entity as ModSettings;
pub use super::reaction_role::Entity as ReactionRole;
pub use super::server::Entity as Server;
pub use super::server_analytics::Entity as ServerAnalytics;
pub use super::ticket::Entity as Ticket;
pub use super::ticket_settings::Entity as TicketSettings;
pub use super::user::Entity as User;
pub use super::welcome_settings::Entity as WelcomeSettings;
