#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the detections JSON parser.
///
/// Feeds arbitrary UTF-8 strings to `parse_detections_str`, then analyzes
/// whatever it accepts.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(input) = stride_tools::parse_detections_str(s) {
            let config = stride_tools::AppConfig::default();
            let names = input.component_names(&config.analysis);
            let report = stride_tools::StrideEngine::new().analyze_architecture(&names);
            assert!((0.0..=100.0).contains(&report.risk_score));
        }
    }
});
