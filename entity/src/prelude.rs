pub use super::absence::Entity as Absence;
pub use super::batting_stat::Entity as BattingStat;
pub use super::exit_velocity::Entity as ExitVelocity;
pub use super::game_result::Entity as GameResult;
pub use super::member::Entity as Member;
pub use super::physical_measurement::Entity as PhysicalMeasurement;
pub use super::pitch_velocity::Entity as PitchVelocity;
pub use super::pitching_stat::Entity as PitchingStat;
pub use super::player_record::Entity as PlayerRecord;
pub use super::practice_menu::Entity as PracticeMenu;
pub use super::pulldown_velocity::Entity as PulldownVelocity;
pub use super::schedule::Entity as Schedule;
pub use super::team_stat::Entity as TeamStat;
pub use super::user::Entity as User;
