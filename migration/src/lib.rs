pub use sea_orm_migration::prelude::*;

mod m20260601_000001_create_user_table;
mod m20260601_000002_create_member_table;
mod m20260601_000003_create_schedule_table;
mod m20260601_000004_create_practice_menu_table;
mod m20260602_000005_create_player_record_table;
mod m20260602_000006_create_absence_table;
mod m20260603_000007_create_batting_stat_table;
mod m20260603_000008_create_pitching_stat_table;
mod m20260603_000009_create_pitch_velocity_table;
mod m20260603_000010_create_exit_velocity_table;
mod m20260603_000011_create_pulldown_velocity_table;
mod m20260604_000012_create_physical_measurement_table;
mod m20260604_000013_create_game_result_table;
mod m20260604_000014_create_team_stat_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260601_000001_create_user_table::Migration),
            Box::new(m20260601_000002_create_member_table::Migration),
            Box::new(m20260601_000003_create_schedule_table::Migration),
            Box::new(m20260601_000004_create_practice_menu_table::Migration),
            Box::new(m20260602_000005_create_player_record_table::Migration),
            Box::new(m20260602_000006_create_absence_table::Migration),
            Box::new(m20260603_000007_create_batting_stat_table::Migration),
            Box::new(m20260603_000008_create_pitching_stat_table::Migration),
            Box::new(m20260603_000009_create_pitch_velocity_table::Migration),
            Box::new(m20260603_000010_create_exit_velocity_table::Migration),
            Box::new(m20260603_000011_create_pulldown_velocity_table::Migration),
            Box::new(m20260604_000012_create_physical_measurement_table::Migration),
            Box::new(m20260604_000013_create_game_result_table::Migration),
            Box::new(m20260604_000014_create_team_stat_table::Migration),
        ]
    }
}
