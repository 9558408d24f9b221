//! Shared roster and response fixtures.

/// Two faculty members, two halls
pub const SMALL_ROSTER_TOML: &str = r#"
[[faculty]]
name = "Dr. X"
department = "CS"
preferredHalls = ["Hall A", "Hall B"]
preferredTimeSlots = ["9-10"]
maxClasses = 1

[[faculty]]
name = "Dr. Y"
department = "Math"
preferredHalls = ["Hall B"]
preferredTimeSlots = ["10-11"]
maxClasses = 2

[[halls]]
name = "Hall A"
capacity = 50
availableTimes = ["9-10"]
equipment = ["Projector"]

[[halls]]
name = "Hall B"
capacity = 30
availableTimes = ["9-10", "10-11"]
equipment = ["Whiteboard"]
"#;

/// Schedule payload that fits `SMALL_ROSTER_TOML`
pub const VALID_SCHEDULE_JSON: &str = r#"{"schedule":[{"facultyName":"Dr. X","hallName":"Hall A","timeSlot":"9-10","courseName":"CS101"},{"facultyName":"Dr. Y","hallName":"Hall B","timeSlot":"10-11","courseName":"MATH201"}],"summary":"All faculty assigned without conflicts."}"#;

/// Wrap schedule text the way a chat-completions endpoint returns it
pub fn chat_completion(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

/// `docent.toml` pointing the generator at `endpoint` without auth
pub fn stub_config(endpoint: &str) -> String {
    format!(
        "[generator]\nendpoint = \"{}\"\nmodel = \"stub-model\"\napi_key_env = \"\"\ntimeout_secs = 10\n",
        endpoint
    )
}

/// An endpoint on a port nothing listens on
pub fn closed_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}/v1/chat/completions", port)
}
