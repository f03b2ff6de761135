mod analytics;
mod auto_mod_settings;
mod auto_role_settings;
mod custom_command;
mod log_event;
mod log_settings;
mod mod_action;
mod mod_settings;
mod reaction_role;
mod server;
mod ticket;
mod ticket_settings;
mod user;
mod welcome_settings;
