mod absence;
mod member;
mod player_record;
mod schedule;
