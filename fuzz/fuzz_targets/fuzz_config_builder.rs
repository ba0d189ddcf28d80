#![no_main]

use libfuzzer_sys::fuzz_target;

use quadbench_core::{Accumulation, QuadratureConfig, Rule};

fn f64_at(data: &[u8], i: usize) -> f64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&data[i * 8..i * 8 + 8]);
    f64::from_le_bytes(bytes)
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 49 {
        return;
    }
    let (a, b, c) = (f64_at(data, 0), f64_at(data, 1), f64_at(data, 2));
    let (begin, end, spacing) = (f64_at(data, 3), f64_at(data, 4), f64_at(data, 5));

    let builder = QuadratureConfig::builder().function(a, b, c).range(begin, end);
    let builder = if data[48] & 1 == 0 {
        builder.step(spacing)
    } else {
        builder.step_count(spacing)
    };

    // Must never panic, only reject
    let Ok(config) = builder.build() else {
        return;
    };
    assert!(config.step() != 0.0);
    assert!(config.step().is_finite() && config.step_count().is_finite());

    // Keep the integration itself cheap
    if config.whole_steps() > 10_000 {
        return;
    }
    for rule in Rule::ALL {
        let _ = rule.integrate(&config, Accumulation::Sequential);
    }
});
