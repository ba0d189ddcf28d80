#![no_main]

use libfuzzer_sys::fuzz_target;

use quadbench_core::ProgressBar;

fuzz_target!(|data: &[u8]| {
    if data.len() < 10 {
        return;
    }
    let width = usize::from(data[0]);
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&data[1..9]);
    let fraction = f64::from_le_bytes(bytes);
    let label = String::from_utf8_lossy(&data[9..]);

    let Ok(mut bar) = ProgressBar::new(Vec::new(), width, &label, None) else {
        return;
    };
    bar.render(fraction).unwrap();
    let out = bar.finish().unwrap();

    // Exactly one line break after the bar
    let text = String::from_utf8(out).unwrap();
    assert!(text.ends_with("%] \n"));
});
