//! Summary statistics shared by the reports.
//!
//! Counts arrive as key-ordered sequences; every function here is total and
//! returns 0 rather than NaN for empty or degenerate input.

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `total / groups`, or 0 with no groups.
pub fn average(total: u64, groups: usize) -> f64 {
    if groups == 0 {
        0.0
    } else {
        total as f64 / groups as f64
    }
}

/// Percent change from the first to the last count.
///
/// 0 for fewer than two counts or a first count of zero.
pub fn trend_percent(counts: &[u64]) -> f64 {
    match counts {
        [first, .., last] if *first > 0 => (*last as f64 - *first as f64) / *first as f64 * 100.0,
        _ => 0.0,
    }
}

/// Key with the highest count; the first one wins ties.
pub fn peak<K, I>(items: I) -> Option<(K, u64)>
where
    I: IntoIterator<Item = (K, u64)>,
{
    extremum(items, |candidate, best| candidate > best)
}

/// Key with the lowest count; the first one wins ties.
pub fn low<K, I>(items: I) -> Option<(K, u64)>
where
    I: IntoIterator<Item = (K, u64)>,
{
    extremum(items, |candidate, best| candidate < best)
}

fn extremum<K, I>(items: I, better: impl Fn(u64, u64) -> bool) -> Option<(K, u64)>
where
    I: IntoIterator<Item = (K, u64)>,
{
    let mut best: Option<(K, u64)> = None;
    for (key, count) in items {
        match &best {
            Some((_, best_count)) if !better(count, *best_count) => {}
            _ => best = Some((key, count)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_needs_two_points_and_a_nonzero_start() {
        assert_eq!(trend_percent(&[]), 0.0);
        assert_eq!(trend_percent(&[7]), 0.0);
        assert_eq!(trend_percent(&[0, 10]), 0.0);
        assert_eq!(trend_percent(&[10, 4, 15]), 50.0);
        assert_eq!(trend_percent(&[20, 5]), -75.0);
    }

    #[test]
    fn ties_go_to_first_occurrence() {
        let counts = [("a", 3), ("b", 9), ("c", 9), ("d", 1), ("e", 1)];
        assert_eq!(peak(counts), Some(("b", 9)));
        assert_eq!(low(counts), Some(("d", 1)));
        assert_eq!(peak(Vec::<(i32, u64)>::new()), None);
    }

    #[test]
    fn steady_growth_series() {
        let years = [2020, 2021, 2022];
        let counts = [10, 20, 30];
        assert_eq!(average(counts.iter().sum(), counts.len()), 20.0);
        assert_eq!(trend_percent(&counts), 200.0);
        assert_eq!(peak(years.into_iter().zip(counts)), Some((2022, 30)));
    }

    #[test]
    fn averages_round_to_one_decimal() {
        assert_eq!(average(0, 0), 0.0);
        assert_eq!(round1(average(10, 3)), 3.3);
        assert_eq!(round1(average(20, 3)), 6.7);
    }
}
