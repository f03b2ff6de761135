//! Repositories for the per-server settings entities.
//!
//! All six follow the same shape: `get` returns `None` for a server that never saved
//! its settings, and `upsert` is a single `INSERT ... ON CONFLICT (server_id) DO UPDATE`
//! statement. The insert branch seeds unspecified columns with the application
//! defaults; the update branch only touches the supplied columns plus `updated_at`.

pub mod auto_mod;
pub mod auto_role;
pub mod log;
pub mod mod_settings;
pub mod ticket_settings;
pub mod welcome;

pub use auto_mod::AutoModSettingsRepository;
pub use auto_role::AutoRoleSettingsRepository;
pub use log::LogSettingsRepository;
pub use mod_settings::ModSettingsRepository;
pub use ticket_settings::TicketSettingsRepository;
pub use welcome::WelcomeSettingsRepository;
