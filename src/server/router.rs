use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model,
    server::{
        controller::{
            absence, analysis, auth, batting, compare, game_result, member, menu, physical,
            pitching, record, reminder, schedule, team, velocity,
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        member::list_members,
        member::get_my_profile,
        member::get_member,
        member::get_member_detail,
        member::create_member,
        member::update_member,
        member::delete_member,
        schedule::list_schedules,
        schedule::get_schedule,
        schedule::create_schedule,
        schedule::update_schedule,
        schedule::delete_schedule,
        menu::list_menus,
        menu::create_menu,
        menu::update_menu,
        menu::delete_menu,
        record::list_records,
        record::record_summary,
        record::create_record,
        record::update_record,
        record::delete_record,
        batting::list_batting_stats,
        batting::batting_stats_by_member,
        batting::create_batting_stat,
        pitching::list_pitching_stats,
        pitching::pitching_stats_by_member,
        pitching::create_pitching_stat,
        velocity::list_pitch_velocity,
        velocity::list_exit_velocity,
        velocity::list_pulldown_velocity,
        velocity::pitch_velocity_by_member,
        velocity::exit_velocity_by_member,
        velocity::pulldown_velocity_by_member,
        velocity::create_pitch_velocity,
        velocity::create_exit_velocity,
        velocity::create_pulldown_velocity,
        physical::list_physical,
        physical::physical_by_member,
        physical::physical_scores,
        physical::create_physical,
        game_result::list_game_results,
        game_result::create_game_result,
        game_result::update_game_result,
        game_result::delete_game_result,
        team::get_team_stats,
        team::upsert_team_stats,
        team::monthly_trend,
        compare::compare_members,
        absence::list_absences,
        absence::create_absence,
        absence::update_absence_status,
        reminder::check_tomorrow,
        analysis::analyze_member,
    ),
    components(schemas(
        model::api::ErrorDto,
        model::user::UserDto,
        model::member::MemberDto,
        model::member::CreateMemberDto,
        model::member::UpdateMemberDto,
        model::member::MemberDetailDto,
        model::schedule::ScheduleDto,
        model::schedule::CreateScheduleDto,
        model::schedule::UpdateScheduleDto,
        model::menu::PracticeMenuDto,
        model::menu::CreateMenuDto,
        model::menu::UpdateMenuDto,
        model::record::PlayerRecordDto,
        model::record::CreateRecordDto,
        model::record::UpdateRecordDto,
        model::record::RecordSummaryDto,
        model::stats::BattingStatDto,
        model::stats::BattingLeaderboardRowDto,
        model::stats::CreateBattingStatDto,
        model::stats::PitchingStatDto,
        model::stats::PitchingLeaderboardRowDto,
        model::stats::CreatePitchingStatDto,
        model::velocity::PitchVelocityDto,
        model::velocity::ExitVelocityDto,
        model::velocity::PulldownVelocityDto,
        model::velocity::PitchVelocityRowDto,
        model::velocity::ExitVelocityRowDto,
        model::velocity::PulldownVelocityRowDto,
        model::velocity::CreatePitchVelocityDto,
        model::velocity::CreateExitVelocityDto,
        model::velocity::CreatePulldownVelocityDto,
        model::physical::PhysicalMeasurementDto,
        model::physical::PhysicalRowDto,
        model::physical::CreatePhysicalDto,
        model::physical::PhysicalScoreDto,
        model::game::GameResultDto,
        model::game::CreateGameResultDto,
        model::game::UpdateGameResultDto,
        model::team::TeamStatDto,
        model::team::UpsertTeamStatDto,
        model::team::MonthlyTrendDto,
        model::compare::CompareRequestDto,
        model::compare::MemberComparisonDto,
        model::absence::AbsenceDto,
        model::absence::CreateAbsenceDto,
        model::absence::UpdateAbsenceStatusDto,
        model::reminder::ReminderOutcomeDto,
        model::analysis::AnalysisDto,
    ))
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(auth::login))
        .route("/api/auth/callback", get(auth::callback))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route(
            "/api/members",
            get(member::list_members).post(member::create_member),
        )
        .route("/api/members/me", get(member::get_my_profile))
        .route(
            "/api/members/{id}",
            get(member::get_member)
                .put(member::update_member)
                .delete(member::delete_member),
        )
        .route("/api/members/{id}/detail", get(member::get_member_detail))
        .route("/api/members/{id}/analysis", post(analysis::analyze_member))
        .route(
            "/api/schedules",
            get(schedule::list_schedules).post(schedule::create_schedule),
        )
        .route(
            "/api/schedules/{id}",
            get(schedule::get_schedule)
                .put(schedule::update_schedule)
                .delete(schedule::delete_schedule),
        )
        .route("/api/menus", get(menu::list_menus).post(menu::create_menu))
        .route(
            "/api/menus/{id}",
            put(menu::update_menu).delete(menu::delete_menu),
        )
        .route(
            "/api/records",
            get(record::list_records).post(record::create_record),
        )
        .route("/api/records/summary", get(record::record_summary))
        .route(
            "/api/records/{id}",
            put(record::update_record).delete(record::delete_record),
        )
        .route(
            "/api/batting-stats",
            get(batting::list_batting_stats).post(batting::create_batting_stat),
        )
        .route(
            "/api/batting-stats/member/{member_id}",
            get(batting::batting_stats_by_member),
        )
        .route(
            "/api/pitching-stats",
            get(pitching::list_pitching_stats).post(pitching::create_pitching_stat),
        )
        .route(
            "/api/pitching-stats/member/{member_id}",
            get(pitching::pitching_stats_by_member),
        )
        .route(
            "/api/velocity/pitch",
            get(velocity::list_pitch_velocity).post(velocity::create_pitch_velocity),
        )
        .route(
            "/api/velocity/exit",
            get(velocity::list_exit_velocity).post(velocity::create_exit_velocity),
        )
        .route(
            "/api/velocity/pulldown",
            get(velocity::list_pulldown_velocity).post(velocity::create_pulldown_velocity),
        )
        .route(
            "/api/velocity/pitch/member/{member_id}",
            get(velocity::pitch_velocity_by_member),
        )
        .route(
            "/api/velocity/exit/member/{member_id}",
            get(velocity::exit_velocity_by_member),
        )
        .route(
            "/api/velocity/pulldown/member/{member_id}",
            get(velocity::pulldown_velocity_by_member),
        )
        .route(
            "/api/physical",
            get(physical::list_physical).post(physical::create_physical),
        )
        .route(
            "/api/physical/member/{member_id}",
            get(physical::physical_by_member),
        )
        .route(
            "/api/physical/member/{member_id}/scores",
            get(physical::physical_scores),
        )
        .route(
            "/api/game-results",
            get(game_result::list_game_results).post(game_result::create_game_result),
        )
        .route(
            "/api/game-results/{id}",
            put(game_result::update_game_result).delete(game_result::delete_game_result),
        )
        .route(
            "/api/team-stats",
            get(team::get_team_stats).put(team::upsert_team_stats),
        )
        .route("/api/team-stats/monthly-trend", get(team::monthly_trend))
        .route("/api/compare", post(compare::compare_members))
        .route(
            "/api/absences",
            get(absence::list_absences).post(absence::create_absence),
        )
        .route(
            "/api/absences/{id}/status",
            put(absence::update_absence_status),
        )
        .route("/api/reminders/check-tomorrow", post(reminder::check_tomorrow))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
}
