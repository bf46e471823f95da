use proptest::prelude::*;
use zoonosis_report::stats::{average, low, peak, round1, trend_percent};

proptest! {
    #[test]
    fn peak_is_the_first_maximum(counts in prop::collection::vec(0u64..50, 1..30)) {
        let (index, count) = peak(counts.iter().copied().enumerate()).unwrap();
        let max = *counts.iter().max().unwrap();
        prop_assert_eq!(count, max);
        prop_assert!(counts[..index].iter().all(|c| *c < max));
    }

    #[test]
    fn low_is_the_first_minimum(counts in prop::collection::vec(0u64..50, 1..30)) {
        let (index, count) = low(counts.iter().copied().enumerate()).unwrap();
        let min = *counts.iter().min().unwrap();
        prop_assert_eq!(count, min);
        prop_assert!(counts[..index].iter().all(|c| *c > min));
    }

    #[test]
    fn zero_start_means_no_trend(rest in prop::collection::vec(0u64..1000, 0..10)) {
        let mut counts = vec![0];
        counts.extend(rest);
        prop_assert_eq!(trend_percent(&counts), 0.0);
    }

    #[test]
    fn average_stays_within_bounds(total in 0u64..100_000, groups in 1usize..500) {
        let avg = round1(average(total, groups));
        prop_assert!(avg >= 0.0);
        prop_assert!(avg <= total as f64);
    }
}
