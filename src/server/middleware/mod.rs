//! Request guards and typed session access.
//!
//! - `auth` - `AuthGuard` resolves the signed-in user and checks role permissions
//! - `session` - Typed wrappers over the raw `tower_sessions::Session`

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
