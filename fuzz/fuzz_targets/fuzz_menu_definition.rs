#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use navmenu::config::{parse_with_warnings, DefinitionFormat};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and rendering any definition should never panic
        for format in [
            DefinitionFormat::Toml,
            DefinitionFormat::Yaml,
            DefinitionFormat::Json,
        ] {
            if let Ok((definition, _)) = parse_with_warnings(content, format, Path::new("fuzz")) {
                let _ = definition.build().render();
            }
        }
    }
});
