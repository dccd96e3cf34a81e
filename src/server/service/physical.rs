//! Physical percentile scoring against fixed league averages.

use entity::physical_measurement::PhysicalCategory;
use sea_orm::DatabaseConnection;

use crate::{
    model::physical::PhysicalScoreDto,
    server::{data::physical::PhysicalRepository, error::AppError},
};

/// League-average reference values the scores normalize against.
const LEAGUE_AVERAGES: [(PhysicalCategory, f64); 4] = [
    (PhysicalCategory::Sprint27m, 3.8),
    (PhysicalCategory::BenchPress, 60.0),
    (PhysicalCategory::Clean, 55.0),
    (PhysicalCategory::Deadlift, 120.0),
];

/// Normalizes a measurement to a 100-point scale against the league average.
///
/// Sprint time inverts the ratio since lower is better there. A missing or
/// non-positive value scores zero.
pub fn score_against_average(category: PhysicalCategory, value: Option<f64>) -> i32 {
    let Some(value) = value.filter(|v| *v > 0.0) else {
        return 0;
    };

    let average = LEAGUE_AVERAGES
        .iter()
        .find(|(cat, _)| *cat == category)
        .map(|(_, avg)| *avg)
        .unwrap_or(0.0);
    if average <= 0.0 {
        return 0;
    }

    let ratio = match category {
        PhysicalCategory::Sprint27m => average / value,
        _ => value / average,
    };

    (ratio * 100.0).round() as i32
}

pub struct PhysicalService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PhysicalService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Scores the member's latest measurement in every category.
    ///
    /// Recomputed from raw values on every call; categories never measured
    /// come back with a zero score so radar charts always have four axes.
    pub async fn scores(&self, member_id: i32) -> Result<Vec<PhysicalScoreDto>, AppError> {
        let history = PhysicalRepository::new(self.db)
            .by_member(member_id, None)
            .await?;

        let scores = LEAGUE_AVERAGES
            .iter()
            .map(|(category, _)| {
                // History is in ascending date order, so the last match is
                // the latest measurement.
                let latest = history.iter().rev().find(|m| m.category == *category);
                PhysicalScoreDto {
                    category: *category,
                    value: latest.and_then(|m| m.value),
                    measured_on: latest.map(|m| m.measure_date),
                    score: score_against_average(*category, latest.and_then(|m| m.value)),
                }
            })
            .collect();

        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_categories_scale_up_with_value() {
        // 60 kg bench press is exactly league average.
        assert_eq!(score_against_average(PhysicalCategory::BenchPress, Some(60.0)), 100);
        assert_eq!(score_against_average(PhysicalCategory::BenchPress, Some(75.0)), 125);
        assert_eq!(score_against_average(PhysicalCategory::Deadlift, Some(90.0)), 75);
    }

    #[test]
    fn sprint_inverts_because_lower_is_better() {
        assert_eq!(score_against_average(PhysicalCategory::Sprint27m, Some(3.8)), 100);
        // Faster than average scores above 100.
        assert!(score_against_average(PhysicalCategory::Sprint27m, Some(3.4)) > 100);
        // Slower scores below.
        assert!(score_against_average(PhysicalCategory::Sprint27m, Some(4.2)) < 100);
    }

    #[test]
    fn missing_or_zero_values_score_zero() {
        assert_eq!(score_against_average(PhysicalCategory::Clean, None), 0);
        assert_eq!(score_against_average(PhysicalCategory::Sprint27m, Some(0.0)), 0);
    }
}
