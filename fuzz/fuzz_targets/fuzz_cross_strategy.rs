#![no_main]

use libfuzzer_sys::fuzz_target;

use quadbench_core::{Accumulation, QuadratureConfig, Rule};

fuzz_target!(|data: &[u8]| {
    if data.len() < 6 {
        return;
    }
    // Small integer coefficients and bounds keep every strategy within rounding of the others
    let coeff = |byte: u8| f64::from(i8::from_le_bytes([byte]));
    let (a, b, c) = (coeff(data[0]), coeff(data[1]), coeff(data[2]));
    let (begin, end) = (coeff(data[3]) / 8.0, coeff(data[4]) / 8.0);
    let count = f64::from(u16::from(data[5]) + 1);

    let Ok(config) = QuadratureConfig::builder()
        .function(a, b, c)
        .range(begin, end)
        .step_count(count)
        .build()
    else {
        return;
    };

    for rule in [Rule::Midpoint, Rule::Trapezoidal] {
        let reference = rule.integrate(&config, Accumulation::Sequential);
        for accumulation in Accumulation::ALL {
            let value = rule.integrate(&config, accumulation);
            let tolerance = 1e-9 * reference.abs().max(1.0);
            assert!(
                (value - reference).abs() <= tolerance,
                "{rule}/{accumulation}: {value} != {reference}"
            );
        }
    }
});
