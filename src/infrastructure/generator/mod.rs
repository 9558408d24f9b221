//! Schedule generator adapters

mod http;
mod response;

pub use http::HttpScheduleGenerator;
pub use response::{decode_chat_response, decode_schedule};
