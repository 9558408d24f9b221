#![no_main]

use docent::CommaList;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let parsed = CommaList::parse(text);
        // Canonical text is a fixed point of parse/join
        let joined = CommaList::join(parsed.as_slice());
        assert_eq!(CommaList::parse(&joined), parsed);
    }
});
