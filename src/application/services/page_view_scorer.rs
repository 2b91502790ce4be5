//! Popularity scores derived from weekly page views.
//!
//! Each restaurant's average weekly views are blended with the system-wide
//! average, weighted by its latest weekly count against [`MINIMUM_VIEWS`]:
//!
//! ```text
//! raw = latest / (latest + m) * restaurant_avg + m / (latest + m) * system_avg
//! ```
//!
//! Raw scores are then standardized (z-score, sample deviation) and min-max
//! normalized into `0.0..=1.0`.

use crate::domain::entities::{RestaurantPageViews, RestaurantScore};

use super::page_view_aligner::total_views;

/// Weight `m` of the system average in the blend.
pub const MINIMUM_VIEWS: f64 = 10.0;

/// Score every series that has at least one record, in input order.
///
/// Series without records carry no signal and are left out. When all raw
/// scores are equal (including a single restaurant) there is no spread to
/// normalize and every score is `0.5`.
pub fn scores(series: &[RestaurantPageViews]) -> Vec<RestaurantScore> {
    let scored: Vec<&RestaurantPageViews> = series
        .iter()
        .filter(|restaurant| !restaurant.page_views.is_empty())
        .collect();

    let Some(system_average) = system_average(&scored) else {
        return Vec::new();
    };

    let raw: Vec<f64> = scored
        .iter()
        .map(|restaurant| raw_score(restaurant, system_average))
        .collect();

    scored
        .iter()
        .zip(normalize(&standardize(&raw)))
        .map(|(restaurant, score)| RestaurantScore {
            restaurant_name: restaurant.name.clone(),
            restaurant_key: restaurant.id.clone(),
            score,
        })
        .collect()
}

fn system_average(series: &[&RestaurantPageViews]) -> Option<f64> {
    let buckets: usize = series.iter().map(|restaurant| restaurant.page_views.len()).sum();
    if buckets == 0 {
        return None;
    }

    let total: u128 = series.iter().map(|restaurant| total_views(restaurant)).sum();
    Some(total as f64 / buckets as f64)
}

/// Bayesian blend of one non-empty series with the system average.
fn raw_score(restaurant: &RestaurantPageViews, system_average: f64) -> f64 {
    let average = total_views(restaurant) as f64 / restaurant.page_views.len() as f64;
    let latest = restaurant
        .page_views
        .last()
        .map_or(0.0, |record| record.count as f64);

    let weight = latest + MINIMUM_VIEWS;
    latest / weight * average + MINIMUM_VIEWS / weight * system_average
}

/// Z-scores with the sample standard deviation; all zeros without spread.
fn standardize(raw: &[f64]) -> Vec<f64> {
    if raw.len() < 2 {
        return vec![0.0; raw.len()];
    }

    let n = raw.len() as f64;
    let mean = raw.iter().sum::<f64>() / n;
    let variance = raw.iter().map(|score| (score - mean).powi(2)).sum::<f64>() / (n - 1.0);
    let deviation = variance.sqrt();

    if deviation == 0.0 || !deviation.is_finite() {
        return vec![0.0; raw.len()];
    }

    raw.iter().map(|score| (score - mean) / deviation).collect()
}

/// Min-max normalization into `0.0..=1.0`; `0.5` everywhere without spread.
fn normalize(scores: &[f64]) -> Vec<f64> {
    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if range <= 0.0 || !range.is_finite() {
        return vec![0.5; scores.len()];
    }

    scores.iter().map(|score| (score - min) / range).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::WeeklyCount;

    fn restaurant(name: &str, counts: &[u64]) -> RestaurantPageViews {
        RestaurantPageViews::new(
            name,
            counts
                .iter()
                .zip(4..)
                .map(|(&count, week)| WeeklyCount::new(week, 2015, count))
                .collect(),
        )
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_raw_score_blends_with_system_average() {
        // System average over 10, 20, 30, 40, 50 is 30.
        let first = restaurant("1", &[10, 20, 30]);
        let second = restaurant("2", &[40, 50]);

        assert!(approx(raw_score(&first, 30.0), 22.5));
        assert!(approx(raw_score(&second, 30.0), 42.5));
        assert_eq!(system_average(&[&first, &second]), Some(30.0));
    }

    #[test]
    fn test_scores_two_restaurants() {
        let series = vec![
            restaurant("1", &[10, 20, 30]).with_id("1"),
            restaurant("2", &[40, 50]).with_id("2"),
        ];

        let scored = scores(&series);

        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].restaurant_key.as_deref(), Some("1"));
        assert!(approx(scored[0].score, 0.0));
        assert!(approx(scored[1].score, 1.0));
    }

    #[test]
    fn test_scores_stay_in_unit_range() {
        let series = vec![
            restaurant("Wildfire", &[2, 10]),
            restaurant("Poke Doke", &[8]),
            restaurant("Clucker's", &[8, 0, 18]),
            restaurant("The Goog Noodle", &[2]),
        ];

        let scored = scores(&series);

        assert_eq!(scored.len(), 4);
        assert!(scored.iter().all(|s| (0.0..=1.0).contains(&s.score)));
        assert!(scored.iter().any(|s| approx(s.score, 0.0)));
        assert!(scored.iter().any(|s| approx(s.score, 1.0)));
    }

    #[test]
    fn test_scores_single_restaurant() {
        let scored = scores(&[restaurant("Wildfire", &[2, 10])]);

        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].score, 0.5);
    }

    #[test]
    fn test_scores_without_spread() {
        let scored = scores(&[restaurant("Wildfire", &[5]), restaurant("Poke Doke", &[5])]);

        assert!(scored.iter().all(|s| s.score == 0.5));
    }

    #[test]
    fn test_scores_skip_empty_series() {
        assert!(scores(&[]).is_empty());
        assert!(scores(&[restaurant("Empty", &[])]).is_empty());

        let scored = scores(&[restaurant("Empty", &[]), restaurant("Wildfire", &[3])]);
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].restaurant_name, "Wildfire");
    }

    #[test]
    fn test_scores_with_large_counts() {
        let scored = scores(&[
            restaurant("Wildfire", &[u64::MAX, u64::MAX]),
            restaurant("Poke Doke", &[1]),
        ]);

        assert!(approx(scored[0].score, 1.0));
        assert!(approx(scored[1].score, 0.0));
    }
}
