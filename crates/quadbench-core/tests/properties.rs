//! Property-based tests for the quadrature rules and reductions.

use proptest::prelude::*;

use quadbench_core::{
    integrate_simpson, integrate_trapezoidal, Accumulation, QuadratureConfig, Rule,
};

fn build(a: f64, b: f64, c: f64, begin: f64, end: f64, count: u32) -> QuadratureConfig {
    QuadratureConfig::builder()
        .function(a, b, c)
        .range(begin, end)
        .step_count(f64::from(count))
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Trapezoidal integration of a constant is exact.
    #[test]
    fn trapezoidal_constant_is_exact(
        c in -100.0f64..100.0,
        begin in -50.0f64..50.0,
        width in -50.0f64..50.0,
        count in 1u32..500,
    ) {
        let cfg = build(0.0, 0.0, c, begin, begin + width, count);
        let expected = c * width;
        let value = integrate_trapezoidal(&cfg, Accumulation::PartialSums);
        let tolerance = 1e-9 * (1.0 + expected.abs());
        prop_assert!((value - expected).abs() < tolerance, "{} != {}", value, expected);
    }

    /// Every accumulation strategy agrees with the sequential reference.
    #[test]
    fn strategies_match_sequential(
        a in -5.0f64..5.0,
        b in -5.0f64..5.0,
        c in -5.0f64..5.0,
        begin in -10.0f64..10.0,
        width in 0.1f64..10.0,
        count in 1u32..2_000,
    ) {
        let cfg = build(a, b, c, begin, begin + width, count);
        for rule in [Rule::Midpoint, Rule::Trapezoidal] {
            let reference = rule.integrate(&cfg, Accumulation::Sequential);
            for strategy in Accumulation::ALL {
                let value = rule.integrate(&cfg, strategy);
                let tolerance = 1e-9 * (1.0 + reference.abs());
                prop_assert!(
                    (value - reference).abs() < tolerance,
                    "{} with {}: {} vs {}", rule, strategy, value, reference
                );
            }
        }
    }

    /// Simpson results are always whole numbers.
    #[test]
    fn simpson_is_integer_valued(
        a in -5.0f64..5.0,
        b in -5.0f64..5.0,
        c in -5.0f64..5.0,
        begin in -10.0f64..10.0,
        width in -10.0f64..10.0,
        count in 1u32..300,
    ) {
        let cfg = build(a, b, c, begin, begin + width, count);
        let value = integrate_simpson(&cfg, Accumulation::PartialSums);
        prop_assert_eq!(value, value.floor());
    }

    /// Step size and step count stay reconciled.
    #[test]
    fn spacing_invariant(
        begin in -100.0f64..100.0,
        width in 0.5f64..100.0,
        step in 0.01f64..5.0,
    ) {
        let cfg = QuadratureConfig::builder()
            .range(begin, begin + width)
            .step(step)
            .build()
            .unwrap();
        let drift = (cfg.step_count() * cfg.step() - width).abs();
        prop_assert!(drift < 1e-9 * (1.0 + width));
    }
}
