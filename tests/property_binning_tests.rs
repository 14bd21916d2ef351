use std::num::NonZeroU32;

use proptest::prelude::*;
use sentiplot_rs::core::bin_series;

proptest! {
    #[test]
    fn every_value_is_counted_or_dropped(
        values in prop::collection::vec(-3.0f64..3.0, 0..200),
        bins in 1u32..64
    ) {
        let bins = NonZeroU32::new(bins).expect("non-zero");
        let binned = bin_series(&values, -1.0, 1.0, bins).expect("bin");

        prop_assert_eq!(binned.counts.len(), bins.get() as usize);
        prop_assert_eq!(binned.total() + binned.dropped_below, values.len());

        let below = values.iter().filter(|&&v| v < -1.0).count();
        prop_assert_eq!(binned.dropped_below, below);
    }

    #[test]
    fn in_domain_values_are_never_dropped(
        values in prop::collection::vec(-1.0f64..1.0, 0..200),
        bins in 1u32..64
    ) {
        let bins = NonZeroU32::new(bins).expect("non-zero");
        let binned = bin_series(&values, -1.0, 1.0, bins).expect("bin");

        prop_assert_eq!(binned.dropped_below, 0);
        prop_assert_eq!(binned.total(), values.len());
    }

    #[test]
    fn binning_is_deterministic(
        values in prop::collection::vec(-2.0f64..2.0, 0..100),
        bins in 1u32..48
    ) {
        let bins = NonZeroU32::new(bins).expect("non-zero");
        let first = bin_series(&values, -1.0, 1.0, bins).expect("first");
        let second = bin_series(&values, -1.0, 1.0, bins).expect("second");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn above_domain_values_clamp_into_the_last_bucket(
        values in prop::collection::vec(1.0f64..5.0, 1..50),
        bins in 1u32..32
    ) {
        let bins = NonZeroU32::new(bins).expect("non-zero");
        let binned = bin_series(&values, -1.0, 1.0, bins).expect("bin");

        let last = binned.counts.len() - 1;
        prop_assert_eq!(binned.counts[last], values.len());
    }
}
