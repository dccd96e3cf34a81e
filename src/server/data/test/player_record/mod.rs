use crate::server::data::player_record::PlayerRecordRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod list_for_member;
mod summarize;
