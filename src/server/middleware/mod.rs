//! Request authentication and ownership checks.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
