//! Game result repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::model::game::{CreateGameResultDto, UpdateGameResultDto};

pub struct GameResultRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameResultRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All games in chronological order, double-headers ordered by game
    /// number.
    pub async fn list(&self) -> Result<Vec<entity::game_result::Model>, DbErr> {
        entity::prelude::GameResult::find()
            .order_by_asc(entity::game_result::Column::GameDate)
            .order_by_asc(entity::game_result::Column::GameNumber)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::game_result::Model>, DbErr> {
        entity::prelude::GameResult::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        dto: &CreateGameResultDto,
    ) -> Result<entity::game_result::Model, DbErr> {
        entity::game_result::ActiveModel {
            game_number: ActiveValue::Set(dto.game_number),
            game_date: ActiveValue::Set(dto.game_date),
            opponent: ActiveValue::Set(dto.opponent.clone()),
            result: ActiveValue::Set(dto.result),
            home_away: ActiveValue::Set(dto.home_away.clone()),
            team_score: ActiveValue::Set(dto.team_score),
            opponent_score: ActiveValue::Set(dto.opponent_score),
            innings: ActiveValue::Set(dto.innings.clone()),
            notes: ActiveValue::Set(dto.notes.clone()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        id: i32,
        dto: &UpdateGameResultDto,
    ) -> Result<Option<entity::game_result::Model>, DbErr> {
        let Some(existing) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::game_result::ActiveModel = existing.into();
        if let Some(game_number) = dto.game_number {
            active.game_number = ActiveValue::Set(Some(game_number));
        }
        if let Some(game_date) = dto.game_date {
            active.game_date = ActiveValue::Set(game_date);
        }
        if let Some(opponent) = &dto.opponent {
            active.opponent = ActiveValue::Set(opponent.clone());
        }
        if let Some(result) = dto.result {
            active.result = ActiveValue::Set(result);
        }
        if let Some(home_away) = &dto.home_away {
            active.home_away = ActiveValue::Set(Some(home_away.clone()));
        }
        if let Some(team_score) = dto.team_score {
            active.team_score = ActiveValue::Set(Some(team_score));
        }
        if let Some(opponent_score) = dto.opponent_score {
            active.opponent_score = ActiveValue::Set(Some(opponent_score));
        }
        if let Some(innings) = &dto.innings {
            active.innings = ActiveValue::Set(Some(innings.clone()));
        }
        if let Some(notes) = &dto.notes {
            active.notes = ActiveValue::Set(Some(notes.clone()));
        }

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::GameResult::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
