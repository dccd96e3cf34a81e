use crate::server::data::schedule::ScheduleRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod for_date;
mod list;
