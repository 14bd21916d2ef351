use proptest::prelude::*;
use sentiplot_rs::core::AxisScale;

proptest! {
    #[test]
    fn scale_round_trip_property(
        domain_start in -1_000.0f64..1_000.0,
        domain_span in 0.001f64..1_000.0,
        value_factor in 0.0f64..1.0,
        px_start in 0.0f64..2_000.0,
        px_span in 1.0f64..2_000.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;

        let scale = AxisScale::new(domain_start, domain_end, px_start, px_start + px_span)
            .expect("valid scale");

        let px = scale.value_to_pixel(value).expect("to pixel");
        let recovered = scale.pixel_to_value(px).expect("from pixel");

        prop_assert!((recovered - value).abs() <= 1e-6 * domain_span.max(1.0));
    }

    #[test]
    fn inverted_round_trip_property(
        domain_start in -1_000.0f64..1_000.0,
        domain_span in 0.001f64..1_000.0,
        value_factor in 0.0f64..1.0,
        px_bottom in 100.0f64..2_000.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;

        // Y-style scale: pixel range runs from bottom down to zero.
        let scale = AxisScale::new(domain_start, domain_end, px_bottom, 0.0)
            .expect("valid scale");

        let px = scale.value_to_pixel(value).expect("to pixel");
        let recovered = scale.pixel_to_value(px).expect("from pixel");

        prop_assert!((recovered - value).abs() <= 1e-6 * domain_span.max(1.0));
    }
}
