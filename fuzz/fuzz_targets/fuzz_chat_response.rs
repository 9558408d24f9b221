#![no_main]

use docent::infrastructure::generator::{decode_chat_response, decode_schedule};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(body) = std::str::from_utf8(data) {
        let _ = decode_chat_response(body);
        let _ = decode_schedule(body);
    }
});
