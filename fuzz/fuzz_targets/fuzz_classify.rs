#![no_main]
use libfuzzer_sys::fuzz_target;
use stride_tools::{Category, CategoryClassifier, StrideEngine};

/// Fuzz classification and single-component analysis.
///
/// Every UTF-8 name must classify to a known category, and analysis must
/// agree with classification.
fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        let category = CategoryClassifier::new().classify(name);
        assert!(Category::ALL.contains(&category));
        if let Some(analysis) = StrideEngine::new().analyze(name) {
            assert_eq!(analysis.category, category);
            assert!(!analysis.risks.is_empty());
        }
    }
});
