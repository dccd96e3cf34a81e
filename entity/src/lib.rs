//! SeaORM entity definitions for the club management database.
//!
//! One module per table. Enumerated columns are string-backed active enums so
//! the database stays readable and the API layer can reuse the same types.

pub mod absence;
pub mod batting_stat;
pub mod exit_velocity;
pub mod game_result;
pub mod member;
pub mod physical_measurement;
pub mod pitch_velocity;
pub mod pitching_stat;
pub mod player_record;
pub mod practice_menu;
pub mod pulldown_velocity;
pub mod schedule;
pub mod team_stat;
pub mod user;

pub mod prelude;
