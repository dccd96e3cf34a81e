//! HTTP request handlers.
//!
//! Every handler follows the same shape: run the `AuthGuard` for its access
//! tier, validate input, call into the service or repository layer, convert
//! to DTOs. Handlers return `Result<impl IntoResponse, AppError>` so error
//! mapping is uniform.

pub mod absence;
pub mod analysis;
pub mod auth;
pub mod batting;
pub mod compare;
pub mod game_result;
pub mod member;
pub mod menu;
pub mod physical;
pub mod pitching;
pub mod record;
pub mod reminder;
pub mod schedule;
pub mod team;
pub mod velocity;
