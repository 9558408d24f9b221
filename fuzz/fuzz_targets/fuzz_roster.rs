#![no_main]

use std::path::Path;

use docent::application::RosterFormat;
use docent::Roster;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let path = Path::new("fuzz-roster");
    for format in [RosterFormat::Toml, RosterFormat::Json, RosterFormat::Yaml] {
        if let Ok(roster) = Roster::parse(content, format, path) {
            // Validation reports errors, it never panics
            let _ = roster.validate(path);
        }
    }
});
