use crate::server::data::member::MemberRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod list;
mod retire;
mod update;
