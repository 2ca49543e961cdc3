#![no_main]

use libfuzzer_sys::fuzz_target;

use extraction_client::{fallback, simplify};

fuzz_target!(|data: &[u8]| {
    // Convert raw bytes to string, handling invalid UTF-8 gracefully
    let input = String::from_utf8_lossy(data);

    let simplified = simplify(&input);
    assert!(!simplified.contains("\n\n\n"));

    // The same bytes interpreted as a URL must always yield a placeholder
    let placeholder = fallback(&input);
    assert_eq!(placeholder.source_url, input);
    assert!(!placeholder.title.is_empty());
    assert!(!placeholder.content.is_empty());
});
