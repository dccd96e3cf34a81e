//! Team rollup and the monthly win-rate trend.

use std::collections::BTreeMap;

use chrono::Datelike;
use entity::game_result::GameOutcome;
use sea_orm::DatabaseConnection;

use crate::{
    model::team::{MonthlyTrendDto, TeamStatDto, UpsertTeamStatDto},
    server::{
        data::{game_result::GameResultRepository, team_stat::TeamStatRepository},
        error::AppError,
        service::stats,
    },
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn dto(model: entity::team_stat::Model) -> TeamStatDto {
        let games = (model.wins + model.losses + model.draws) as i64;
        TeamStatDto {
            win_rate: stats::win_rate(model.wins as i64, games),
            id: model.id,
            period: model.period,
            total_games: model.total_games,
            wins: model.wins,
            losses: model.losses,
            draws: model.draws,
            team_batting_avg: model.team_batting_avg,
            team_slugging: model.team_slugging,
            team_ops: model.team_ops,
            team_era: model.team_era,
            team_whip: model.team_whip,
            avg_runs_scored: model.avg_runs_scored,
            avg_runs_allowed: model.avg_runs_allowed,
        }
    }

    pub async fn get(&self) -> Result<Option<TeamStatDto>, AppError> {
        let stat = TeamStatRepository::new(self.db).get().await?;
        Ok(stat.map(Self::dto))
    }

    pub async fn upsert(&self, dto: &UpsertTeamStatDto) -> Result<TeamStatDto, AppError> {
        let stat = TeamStatRepository::new(self.db).upsert(dto).await?;
        Ok(Self::dto(stat))
    }

    /// Groups game results into one trend point per calendar month.
    pub async fn monthly_trend(&self) -> Result<Vec<MonthlyTrendDto>, AppError> {
        let games = GameResultRepository::new(self.db).list().await?;
        Ok(monthly_trend(&games))
    }
}

#[derive(Default)]
struct MonthAccumulator {
    wins: i32,
    losses: i32,
    draws: i32,
    runs_scored: i64,
    runs_allowed: i64,
    scored_games: i32,
}

/// Buckets played games per calendar month, chronologically.
///
/// Cancelled games are skipped entirely: they were not played, carry no
/// score, and would distort the win rate. Within a month, wins, losses and
/// draws sum to the month's game count by construction. Run averages cover
/// only games that have a recorded score.
pub fn monthly_trend(games: &[entity::game_result::Model]) -> Vec<MonthlyTrendDto> {
    let mut months: BTreeMap<(i32, u32), MonthAccumulator> = BTreeMap::new();

    // Cancelled games never reach the buckets, so a month with nothing but
    // cancellations produces no entry at all.
    let played = games.iter().filter(|g| g.result != GameOutcome::Cancelled);

    for game in played {
        let acc = months
            .entry((game.game_date.year(), game.game_date.month()))
            .or_default();

        match game.result {
            GameOutcome::Win => acc.wins += 1,
            GameOutcome::Loss => acc.losses += 1,
            GameOutcome::Draw => acc.draws += 1,
            GameOutcome::Cancelled => unreachable!("filtered above"),
        }

        if let (Some(team), Some(opponent)) = (game.team_score, game.opponent_score) {
            acc.runs_scored += team as i64;
            acc.runs_allowed += opponent as i64;
            acc.scored_games += 1;
        }
    }

    months
        .into_iter()
        .map(|((year, month), acc)| {
            let games = acc.wins + acc.losses + acc.draws;
            MonthlyTrendDto {
                month: format!("{:04}-{:02}", year, month),
                games,
                wins: acc.wins,
                losses: acc.losses,
                draws: acc.draws,
                win_rate: stats::win_rate(acc.wins as i64, games as i64),
                avg_runs_scored: if acc.scored_games > 0 {
                    Some(acc.runs_scored as f64 / acc.scored_games as f64)
                } else {
                    None
                },
                avg_runs_allowed: if acc.scored_games > 0 {
                    Some(acc.runs_allowed as f64 / acc.scored_games as f64)
                } else {
                    None
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use entity::game_result::GameOutcome;

    fn game(date: &str, result: GameOutcome, score: Option<(i32, i32)>) -> entity::game_result::Model {
        entity::game_result::Model {
            id: 0,
            game_number: None,
            game_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            opponent: "Rival High".to_string(),
            result,
            home_away: None,
            team_score: score.map(|s| s.0),
            opponent_score: score.map(|s| s.1),
            innings: None,
            notes: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn groups_by_month_in_chronological_order() {
        let games = vec![
            game("2026-05-03", GameOutcome::Win, Some((5, 2))),
            game("2026-04-12", GameOutcome::Loss, Some((1, 3))),
            game("2026-05-10", GameOutcome::Draw, Some((2, 2))),
            game("2026-04-19", GameOutcome::Win, Some((7, 0))),
        ];

        let trend = monthly_trend(&games);
        assert_eq!(trend.len(), 2);
        assert_eq!(trend[0].month, "2026-04");
        assert_eq!(trend[1].month, "2026-05");
    }

    #[test]
    fn counts_sum_to_game_count() {
        let games = vec![
            game("2026-06-01", GameOutcome::Win, Some((4, 1))),
            game("2026-06-08", GameOutcome::Loss, Some((2, 5))),
            game("2026-06-15", GameOutcome::Draw, Some((3, 3))),
        ];

        let trend = monthly_trend(&games);
        assert_eq!(trend.len(), 1);
        let month = &trend[0];
        assert_eq!(month.games, 3);
        assert_eq!(month.wins + month.losses + month.draws, month.games);
        assert_eq!(month.win_rate, Some(1.0 / 3.0));
        assert_eq!(month.avg_runs_scored, Some(3.0));
        assert_eq!(month.avg_runs_allowed, Some(3.0));
    }

    #[test]
    fn cancelled_games_are_excluded() {
        let games = vec![
            game("2026-07-05", GameOutcome::Cancelled, None),
            game("2026-07-12", GameOutcome::Win, Some((6, 2))),
            // A month containing only a cancelled game produces no entry.
            game("2026-08-02", GameOutcome::Cancelled, None),
        ];

        let trend = monthly_trend(&games);
        assert_eq!(trend.len(), 1);
        assert_eq!(trend[0].month, "2026-07");
        assert_eq!(trend[0].games, 1);
    }

    #[test]
    fn games_without_scores_skip_run_averages() {
        let games = vec![game("2026-09-01", GameOutcome::Win, None)];

        let trend = monthly_trend(&games);
        assert_eq!(trend[0].wins, 1);
        assert_eq!(trend[0].avg_runs_scored, None);
        assert_eq!(trend[0].avg_runs_allowed, None);
    }
}
