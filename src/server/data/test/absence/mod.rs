use crate::server::data::absence::AbsenceRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod list;
mod update_status;
