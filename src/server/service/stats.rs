//! Derived baseball metrics.
//!
//! Every rate the API reports is computed here from counting stats, with an
//! explicit guard on the denominator: a rate whose denominator is zero is
//! `None`, never NaN or infinity, and the client renders a placeholder.
//!
//! The walks columns throughout the schema count walks plus hit-by-pitch
//! together, matching how the club keeps score.

/// `numerator / denominator`, or `None` when the denominator is not positive.
fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator > 0.0 {
        Some(numerator / denominator)
    } else {
        None
    }
}

/// Batting average: hits per at-bat.
pub fn batting_average(hits: i64, at_bats: i64) -> Option<f64> {
    ratio(hits as f64, at_bats as f64)
}

/// On-base percentage: times on base per plate appearance counted here as
/// `(hits + walks) / (at_bats + walks)`.
pub fn on_base_percentage(hits: i64, walks: i64, at_bats: i64) -> Option<f64> {
    ratio((hits + walks) as f64, (at_bats + walks) as f64)
}

/// Slugging percentage: total bases per at-bat.
pub fn slugging(total_bases: i64, at_bats: i64) -> Option<f64> {
    ratio(total_bases as f64, at_bats as f64)
}

/// On-base plus slugging; `None` unless both components exist.
pub fn ops(on_base: Option<f64>, slugging: Option<f64>) -> Option<f64> {
    match (on_base, slugging) {
        (Some(obp), Some(slg)) => Some(obp + slg),
        _ => None,
    }
}

/// Total bases from a hit breakdown; `hits` includes the extra-base hits.
pub fn total_bases(hits: i64, doubles: i64, triples: i64, home_runs: i64) -> i64 {
    hits + doubles + 2 * triples + 3 * home_runs
}

/// Earned-run average per nine innings.
pub fn era(earned_runs: i64, innings_pitched: f64) -> Option<f64> {
    ratio(9.0 * earned_runs as f64, innings_pitched)
}

/// Walks plus hits per inning pitched.
pub fn whip(walks: i64, hits_allowed: i64, innings_pitched: f64) -> Option<f64> {
    ratio((walks + hits_allowed) as f64, innings_pitched)
}

/// Strikeouts per nine innings.
pub fn strikeout_rate(strikeouts: i64, innings_pitched: f64) -> Option<f64> {
    ratio(9.0 * strikeouts as f64, innings_pitched)
}

/// `part` as a percentage of `total`, e.g. K% of batters faced.
pub fn percentage(part: i64, total: i64) -> Option<f64> {
    ratio(100.0 * part as f64, total as f64)
}

/// Wins per game played.
pub fn win_rate(wins: i64, games: i64) -> Option<f64> {
    ratio(wins as f64, games as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batting_average_divides_hits_by_at_bats() {
        assert_eq!(batting_average(10, 40), Some(0.25));
        assert_eq!(batting_average(20, 50), Some(0.4));
    }

    #[test]
    fn zero_at_bats_yields_no_average() {
        assert_eq!(batting_average(0, 0), None);
        assert_eq!(batting_average(5, 0), None);
    }

    #[test]
    fn on_base_counts_walks_on_both_sides() {
        // 10 hits + 5 walks over 40 at-bats + 5 walks = 15/45
        let obp = on_base_percentage(10, 5, 40).unwrap();
        assert!((obp - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(on_base_percentage(0, 0, 0), None);
    }

    #[test]
    fn ops_requires_both_components() {
        assert_eq!(ops(Some(0.4), Some(0.5)), Some(0.9));
        assert_eq!(ops(None, Some(0.5)), None);
        assert_eq!(ops(Some(0.4), None), None);
    }

    #[test]
    fn total_bases_weights_extra_base_hits() {
        // 10 hits of which 2 doubles, 1 triple, 1 homer:
        // 10 + 2 + 2*1 + 3*1 = 17
        assert_eq!(total_bases(10, 2, 1, 1), 17);
    }

    #[test]
    fn era_scales_to_nine_innings() {
        assert_eq!(era(3, 9.0), Some(3.0));
        assert_eq!(era(4, 18.0), Some(2.0));
        assert_eq!(era(0, 0.0), None);
    }

    #[test]
    fn whip_sums_walks_and_hits() {
        assert_eq!(whip(10, 20, 30.0), Some(1.0));
        assert_eq!(whip(1, 1, 0.0), None);
    }

    #[test]
    fn percentages_guard_zero_totals() {
        assert_eq!(percentage(30, 120), Some(25.0));
        assert_eq!(percentage(30, 0), None);
    }

    #[test]
    fn win_rate_is_wins_over_games() {
        assert_eq!(win_rate(3, 4), Some(0.75));
        assert_eq!(win_rate(0, 0), None);
    }
}
