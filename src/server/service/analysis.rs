//! AI coaching narrative.
//!
//! Assembles a plain-text digest of a member's numbers, asks the configured
//! chat-completions endpoint for coaching advice, and returns the model's
//! text verbatim. No retry and no output parsing; a transport or API failure
//! surfaces as the request's error.

use entity::physical_measurement::PhysicalCategory;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use crate::{
    model::analysis::AnalysisDto,
    server::{
        data::{
            batting_stat::BattingStatRepository, member::MemberRepository,
            physical::PhysicalRepository, pitching_stat::PitchingStatRepository,
            velocity::VelocityRepository,
        },
        error::AppError,
        service::{batting::BattingStatsService, pitching::PitchingStatsService},
        state::LlmSettings,
    },
};

const SYSTEM_PROMPT: &str = "You are an experienced high-school baseball coach. \
    Give concrete, practical advice grounded in the player's numbers.";

const NO_DATA_MESSAGE: &str = "No batting or pitching stats have been recorded for this member \
    yet. Record some data first, then try the analysis again.";

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

pub struct AnalysisService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    llm: &'a LlmSettings,
}

impl<'a> AnalysisService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        llm: &'a LlmSettings,
    ) -> Self {
        Self {
            db,
            http_client,
            llm,
        }
    }

    /// Produces the narrative analysis for one member.
    pub async fn generate(&self, member_id: i32) -> Result<AnalysisDto, AppError> {
        let member_repo = MemberRepository::new(self.db);
        let batting_repo = BattingStatRepository::new(self.db);
        let pitching_repo = PitchingStatRepository::new(self.db);
        let velocity_repo = VelocityRepository::new(self.db);
        let physical_repo = PhysicalRepository::new(self.db);

        let (member, batting, pitching, velocity, exit_velocity, pulldown, physical) = tokio::try_join!(
            member_repo.get_by_id(member_id),
            batting_repo.latest_for_member(member_id),
            pitching_repo.latest_for_member(member_id),
            velocity_repo.latest_pitch_for_member(member_id),
            velocity_repo.latest_exit_for_member(member_id),
            velocity_repo.latest_pulldown_for_member(member_id),
            physical_repo.by_member(member_id, None),
        )?;

        let member =
            member.ok_or_else(|| AppError::NotFound(format!("Member {} not found", member_id)))?;

        if batting.is_none() && pitching.is_none() {
            return Ok(AnalysisDto {
                analysis: NO_DATA_MESSAGE.to_string(),
            });
        }

        let digest = build_stats_digest(
            &member,
            batting.as_ref(),
            pitching.as_ref(),
            velocity.as_ref(),
            exit_velocity.as_ref(),
            pulldown.as_ref(),
            &physical,
        );

        let prompt = format!(
            "Analyze the following player data and provide concrete improvement \
             suggestions and training advice.\n\n{}\n\nCover these angles:\n\
             1. Current strengths and weaknesses\n\
             2. Suggestions on batting approach or fielding position\n\
             3. Concrete training menu proposals\n\
             4. Physical development points based on the measurement data\n\
             5. Advice on goal setting",
            digest
        );

        let request = ChatRequest {
            model: self.llm.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let response = self
            .http_client
            .post(&self.llm.api_url)
            .bearer_auth(&self.llm.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatResponse>()
            .await?;

        let analysis = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_else(|| "The analysis could not be retrieved.".to_string());

        Ok(AnalysisDto { analysis })
    }
}

fn category_label(category: PhysicalCategory) -> &'static str {
    match category {
        PhysicalCategory::Sprint27m => "27m sprint",
        PhysicalCategory::BenchPress => "bench press",
        PhysicalCategory::Clean => "clean",
        PhysicalCategory::Deadlift => "deadlift",
    }
}

/// Renders the member's numbers as plain text for the prompt.
fn build_stats_digest(
    member: &entity::member::Model,
    batting: Option<&entity::batting_stat::Model>,
    pitching: Option<&entity::pitching_stat::Model>,
    velocity: Option<&entity::pitch_velocity::Model>,
    exit_velocity: Option<&entity::exit_velocity::Model>,
    pulldown: Option<&entity::pulldown_velocity::Model>,
    physical: &[entity::physical_measurement::Model],
) -> String {
    let fmt_rate = |rate: Option<f64>| {
        rate.map(|r| format!("{:.3}", r))
            .unwrap_or_else(|| "-".to_string())
    };
    let fmt_speed = |speed: Option<f64>| {
        speed
            .map(|s| format!("{:.1} km/h", s))
            .unwrap_or_else(|| "-".to_string())
    };

    let grade = match member.grade {
        entity::member::Grade::First => "1",
        entity::member::Grade::Second => "2",
        entity::member::Grade::Third => "3",
    };
    let mut digest = format!(
        "Player: {} (grade {})\nPosition: {}\n",
        member.name,
        grade,
        member.position.as_deref().unwrap_or("unassigned"),
    );

    if let Some(bat) = batting {
        let dto = BattingStatsService::dto(bat.clone());
        digest.push_str(&format!(
            "\n[Batting] {} games | AVG {} | OPS {} | OBP {} | SLG {}\n\
             at-bats {} | hits {} | doubles {} | triples {} | home runs {} | \
             RBIs {} | steals {} | strikeouts {} | walks {}\n\
             vs LHP {} | vs RHP {}",
            dto.games,
            fmt_rate(dto.batting_average),
            fmt_rate(dto.ops),
            fmt_rate(dto.on_base_percentage),
            fmt_rate(dto.slugging_percentage),
            dto.at_bats,
            dto.hits,
            dto.doubles,
            dto.triples,
            dto.home_runs,
            dto.rbis,
            dto.stolen_bases,
            dto.strikeouts,
            dto.walks,
            fmt_rate(dto.vs_left_average),
            fmt_rate(dto.vs_right_average),
        ));
    }

    if let Some(pit) = pitching {
        let dto = PitchingStatsService::dto(pit.clone());
        digest.push_str(&format!(
            "\n\n[Pitching] {} games | ERA {} | WHIP {} | innings {:.1}\n\
             strikeouts {} | walks {} | hits allowed {} | earned runs {}\n\
             K% {} | BB% {}",
            dto.games,
            fmt_rate(dto.era),
            fmt_rate(dto.whip),
            dto.innings_pitched,
            dto.strikeouts,
            dto.walks,
            dto.hits_allowed,
            dto.earned_runs,
            fmt_rate(dto.strikeout_percentage),
            fmt_rate(dto.walk_percentage),
        ));
    }

    if let Some(vel) = velocity {
        digest.push_str(&format!(
            "\n\n[Pitch velocity] fastball avg {} | breaking avg {}",
            fmt_speed(vel.avg_fastball),
            fmt_speed(vel.avg_breaking),
        ));
    }

    if let Some(ev) = exit_velocity {
        digest.push_str(&format!(
            "\n\n[Exit velocity] avg {} | max {}{}",
            fmt_speed(ev.avg_speed),
            fmt_speed(ev.max_speed),
            ev.avg_rank
                .map(|r| format!(" (team rank {})", r))
                .unwrap_or_default(),
        ));
    }

    if let Some(pd) = pulldown {
        digest.push_str(&format!(
            "\n\n[Pulldown velocity] avg {} | max {}{}",
            fmt_speed(pd.avg_speed),
            fmt_speed(pd.max_speed),
            pd.avg_rank
                .map(|r| format!(" (team rank {})", r))
                .unwrap_or_default(),
        ));
    }

    if !physical.is_empty() {
        digest.push_str("\n\n[Physical measurements]");
        for category in [
            PhysicalCategory::Sprint27m,
            PhysicalCategory::BenchPress,
            PhysicalCategory::Clean,
            PhysicalCategory::Deadlift,
        ] {
            let history: Vec<&entity::physical_measurement::Model> =
                physical.iter().filter(|m| m.category == category).collect();
            let Some(latest) = history.last() else {
                continue;
            };

            digest.push_str(&format!(
                "\n{}: {} ({})",
                category_label(category),
                latest.value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string()),
                latest.measure_date,
            ));
            if history.len() > 1 {
                let progression = history
                    .iter()
                    .map(|m| {
                        format!(
                            "{} ({})",
                            m.value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string()),
                            m.measure_date
                        )
                    })
                    .collect::<Vec<_>>()
                    .join(" -> ");
                digest.push_str(&format!(" [progression: {}]", progression));
            }
        }
    }

    digest
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use entity::member::{Grade, MemberRole, MemberStatus};

    fn member() -> entity::member::Model {
        entity::member::Model {
            id: 1,
            user_id: None,
            name: "Sato".to_string(),
            grade: Grade::Second,
            position: Some("Pitcher".to_string()),
            uniform_number: Some(1),
            class_number: None,
            student_number: None,
            kana: None,
            member_role: MemberRole::Player,
            status: MemberStatus::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn digest_includes_only_present_sections() {
        let pitching = entity::pitching_stat::Model {
            id: 1,
            member_id: 1,
            period: None,
            games: 8,
            innings_pitched: 45.0,
            batters_faced: 180,
            hits_allowed: 30,
            home_runs_allowed: 1,
            walks: 12,
            strikeouts: 52,
            earned_runs: 10,
            runs_allowed: 14,
            first_pitch_strikes: 110,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let digest = build_stats_digest(&member(), None, Some(&pitching), None, None, None, &[]);

        assert!(digest.contains("Player: Sato"));
        assert!(digest.contains("[Pitching] 8 games | ERA 2.000"));
        assert!(!digest.contains("[Batting]"));
        assert!(!digest.contains("[Physical measurements]"));
    }

    #[test]
    fn physical_history_shows_progression() {
        let measurement = |date: &str, value: f64| entity::physical_measurement::Model {
            id: 0,
            member_id: 1,
            measure_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            category: PhysicalCategory::BenchPress,
            value: Some(value),
            created_at: Utc::now(),
        };

        let batting = entity::batting_stat::Model {
            id: 1,
            member_id: 1,
            period: None,
            games: 10,
            plate_appearances: 45,
            at_bats: 40,
            runs: 6,
            hits: 10,
            singles: 7,
            doubles: 2,
            triples: 0,
            home_runs: 1,
            total_bases: 15,
            rbis: 8,
            stolen_base_attempts: 3,
            stolen_bases: 2,
            sacrifice_bunts: 1,
            sacrifice_flies: 0,
            walks: 5,
            strikeouts: 9,
            errors: 1,
            vs_left_at_bats: 12,
            vs_left_hits: 3,
            vs_right_at_bats: 28,
            vs_right_hits: 7,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let history = vec![measurement("2026-04-01", 55.0), measurement("2026-06-01", 62.5)];
        let digest =
            build_stats_digest(&member(), Some(&batting), None, None, None, None, &history);

        assert!(digest.contains("bench press: 62.5 (2026-06-01)"));
        assert!(digest.contains("[progression: 55 (2026-04-01) -> 62.5 (2026-06-01)]"));
        assert!(digest.contains("AVG 0.250"));
    }
}
