//! Database repository layer for all domain entities.
//!
//! Repository structs hold a `&DatabaseConnection` and own every query,
//! insert, update and delete for their table. They return entity models (or
//! aggregate rows) and `DbErr`; conversion to DTOs and business rules live a
//! layer up.

pub mod absence;
pub mod batting_stat;
pub mod game_result;
pub mod member;
pub mod physical;
pub mod pitching_stat;
pub mod player_record;
pub mod practice_menu;
pub mod schedule;
pub mod team_stat;
pub mod user;
pub mod velocity;

#[cfg(test)]
mod test;
