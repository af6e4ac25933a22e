#![no_main]

use libfuzzer_sys::fuzz_target;
use navmenu::markup::{esc, strip_tags};

fuzz_target!(|data: &[u8]| {
    if let Ok(html) = std::str::from_utf8(data) {
        let stripped = strip_tags(html);
        assert!(!stripped.contains('<'));
        let _ = esc(&stripped);
    }
});
