use std::collections::BTreeMap;

use crate::snapshot::ThCount;

/// Highest town-hall level that has its own colour token.
pub const MAX_TOKENED_TH: i64 = 16;

/// One bucket of the dense TH distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThBucket {
    pub th: i64,
    pub count: f64,
}

/// Render-ready histogram column.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBar {
    pub th: i64,
    pub count: f64,
    /// Column height relative to the tallest column, 0-100.
    pub height_pct: f64,
    pub empty: bool,
    pub color_token: String,
}

/// Densify a sparse TH distribution over `[min(th), max(th)]`.
///
/// Duplicate levels overwrite earlier ones, entries without an integral numeric
/// `th` are dropped, and a missing `count` reads as 0. Levels absent from the
/// input are filled with zero.
pub fn normalize_th_distribution(distribution: &[ThCount]) -> Vec<ThBucket> {
    let mut counts: BTreeMap<i64, f64> = BTreeMap::new();
    for item in distribution {
        let Some(th) = item.th.and_then(integral_level) else {
            continue;
        };
        counts.insert(th, item.count.unwrap_or(0.0));
    }

    let (Some((&min_th, _)), Some((&max_th, _))) =
        (counts.first_key_value(), counts.last_key_value())
    else {
        return Vec::new();
    };

    (min_th..=max_th)
        .map(|th| ThBucket {
            th,
            count: counts.get(&th).copied().unwrap_or(0.0),
        })
        .collect()
}

/// Normalize and scale a TH distribution into histogram columns.
pub fn build_th_histogram(distribution: &[ThCount]) -> Vec<HistogramBar> {
    let buckets = normalize_th_distribution(distribution);
    let max = buckets.iter().map(|b| b.count).fold(1.0_f64, f64::max);

    buckets
        .into_iter()
        .map(|bucket| HistogramBar {
            th: bucket.th,
            count: bucket.count,
            height_pct: bucket.count / max * 100.0,
            empty: bucket.count == 0.0,
            color_token: th_color_token(bucket.th),
        })
        .collect()
}

/// CSS custom property holding the colour of a TH level.
pub fn th_color_token(th: i64) -> String {
    if (1..=MAX_TOKENED_TH).contains(&th) {
        format!("--th-{th}")
    } else {
        "--heat-mid".to_string()
    }
}

fn integral_level(th: f64) -> Option<i64> {
    // Beyond 2^53 an f64 no longer addresses every integer.
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if !th.is_finite() || th.fract() != 0.0 || th.abs() > MAX_EXACT {
        return None;
    }
    Some(th as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(th: Option<f64>, count: Option<f64>) -> ThCount {
        ThCount { th, count }
    }

    fn ths(buckets: &[ThBucket]) -> Vec<i64> {
        buckets.iter().map(|b| b.th).collect()
    }

    #[test]
    fn fills_gaps_between_min_and_max() {
        let input = vec![
            entry(Some(14.0), Some(3.0)),
            entry(Some(11.0), Some(1.0)),
            entry(Some(13.0), None),
        ];
        let buckets = normalize_th_distribution(&input);
        assert_eq!(ths(&buckets), vec![11, 12, 13, 14]);
        let counts: Vec<f64> = buckets.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![1.0, 0.0, 0.0, 3.0]);
    }

    #[test]
    fn output_is_contiguous_without_duplicates() {
        let input = vec![
            entry(Some(9.0), Some(1.0)),
            entry(Some(3.0), Some(2.0)),
            entry(Some(9.0), Some(5.0)),
            entry(Some(6.0), Some(1.0)),
        ];
        let buckets = normalize_th_distribution(&input);
        let levels = ths(&buckets);
        assert_eq!(levels.first(), Some(&3));
        assert_eq!(levels.last(), Some(&9));
        assert!(levels.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn duplicates_overwrite() {
        let input = vec![entry(Some(12.0), Some(2.0)), entry(Some(12.0), Some(7.0))];
        assert_eq!(
            normalize_th_distribution(&input),
            vec![ThBucket { th: 12, count: 7.0 }]
        );
    }

    #[test]
    fn drops_non_numeric_and_fractional_levels() {
        let input = vec![
            entry(None, Some(4.0)),
            entry(Some(12.5), Some(4.0)),
            entry(Some(10.0), Some(2.0)),
        ];
        assert_eq!(
            normalize_th_distribution(&input),
            vec![ThBucket { th: 10, count: 2.0 }]
        );
    }

    #[test]
    fn no_valid_levels_yields_empty() {
        assert!(normalize_th_distribution(&[]).is_empty());
        assert!(normalize_th_distribution(&[entry(None, Some(3.0))]).is_empty());
    }

    #[test]
    fn histogram_scales_against_tallest_bar() {
        let input = vec![entry(Some(1.0), Some(2.0)), entry(Some(3.0), Some(4.0))];
        let bars = build_th_histogram(&input);
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0].height_pct, 50.0);
        assert!(bars[1].empty);
        assert_eq!(bars[1].height_pct, 0.0);
        assert_eq!(bars[2].height_pct, 100.0);
        assert_eq!(bars[0].color_token, "--th-1");
    }

    #[test]
    fn all_zero_counts_do_not_divide_by_zero() {
        let bars = build_th_histogram(&[entry(Some(5.0), Some(0.0))]);
        assert_eq!(bars[0].height_pct, 0.0);
        assert!(bars[0].empty);
    }

    #[test]
    fn color_token_falls_back_outside_known_levels() {
        assert_eq!(th_color_token(16), "--th-16");
        assert_eq!(th_color_token(17), "--heat-mid");
        assert_eq!(th_color_token(0), "--heat-mid");
    }
}
