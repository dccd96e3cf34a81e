//! Entity factories with sensible defaults.
//!
//! Builder-pattern factories for the entities tests customize heavily, and
//! plain `create_*` helpers for the rest.

pub mod absence;
pub mod batting_stat;
pub mod game_result;
pub mod helpers;
pub mod member;
pub mod physical_measurement;
pub mod pitching_stat;
pub mod player_record;
pub mod schedule;
pub mod team_stat;
pub mod user;
pub mod velocity;
