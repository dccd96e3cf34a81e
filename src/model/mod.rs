//! API data transfer objects.
//!
//! These are the serde types the HTTP surface speaks: request bodies, query
//! parameters and response payloads. Conversions that are pure field mapping
//! live here as `From` impls; anything that needs derived statistics is built
//! by the service layer.

pub mod absence;
pub mod analysis;
pub mod api;
pub mod compare;
pub mod game;
pub mod member;
pub mod menu;
pub mod physical;
pub mod record;
pub mod reminder;
pub mod schedule;
pub mod stats;
pub mod team;
pub mod user;
pub mod velocity;
