//! Pitching snapshot service.

use sea_orm::DatabaseConnection;

use crate::{
    model::stats::{CreatePitchingStatDto, PitchingLeaderboardRowDto, PitchingStatDto},
    server::{
        data::{member::MemberRepository, pitching_stat::PitchingStatRepository},
        error::AppError,
        service::stats,
    },
};

pub struct PitchingStatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PitchingStatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn dto(model: entity::pitching_stat::Model) -> PitchingStatDto {
        PitchingStatDto {
            era: stats::era(model.earned_runs as i64, model.innings_pitched),
            whip: stats::whip(
                model.walks as i64,
                model.hits_allowed as i64,
                model.innings_pitched,
            ),
            strikeout_rate: stats::strikeout_rate(model.strikeouts as i64, model.innings_pitched),
            strikeout_percentage: stats::percentage(
                model.strikeouts as i64,
                model.batters_faced as i64,
            ),
            walk_percentage: stats::percentage(model.walks as i64, model.batters_faced as i64),
            first_strike_percentage: stats::percentage(
                model.first_pitch_strikes as i64,
                model.batters_faced as i64,
            ),
            id: model.id,
            member_id: model.member_id,
            period: model.period,
            games: model.games,
            innings_pitched: model.innings_pitched,
            batters_faced: model.batters_faced,
            hits_allowed: model.hits_allowed,
            home_runs_allowed: model.home_runs_allowed,
            walks: model.walks,
            strikeouts: model.strikeouts,
            earned_runs: model.earned_runs,
            runs_allowed: model.runs_allowed,
            first_pitch_strikes: model.first_pitch_strikes,
        }
    }

    /// Team-wide table ordered by derived ERA, best first; rows without an
    /// ERA sort last.
    pub async fn list(&self) -> Result<Vec<PitchingLeaderboardRowDto>, AppError> {
        let rows = PitchingStatRepository::new(self.db).list_with_members().await?;

        let mut rows: Vec<PitchingLeaderboardRowDto> = rows
            .into_iter()
            .filter_map(|(stat, member)| {
                member.map(|member| PitchingLeaderboardRowDto {
                    member_name: member.name,
                    grade: member.grade,
                    position: member.position,
                    stat: Self::dto(stat),
                })
            })
            .collect();

        rows.sort_by(|a, b| {
            let key = |row: &PitchingLeaderboardRowDto| row.stat.era.unwrap_or(f64::INFINITY);
            key(a).total_cmp(&key(b))
        });

        Ok(rows)
    }

    pub async fn by_member(&self, member_id: i32) -> Result<Vec<PitchingStatDto>, AppError> {
        let rows = PitchingStatRepository::new(self.db).by_member(member_id).await?;
        Ok(rows.into_iter().map(Self::dto).collect())
    }

    pub async fn create(&self, dto: &CreatePitchingStatDto) -> Result<PitchingStatDto, AppError> {
        if MemberRepository::new(self.db)
            .get_by_id(dto.member_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Member {} not found",
                dto.member_id
            )));
        }

        let created = PitchingStatRepository::new(self.db).create(dto).await?;
        Ok(Self::dto(created))
    }
}
