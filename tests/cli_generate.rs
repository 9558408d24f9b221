mod common;

use common::*;

const GENERIC_FAILURE: &str = "Failed to generate schedule. Please try again.";

fn env_with_endpoint(endpoint: &str) -> TestEnv {
    let env = TestEnv::new();
    env.write("docent.toml", &stub_config(endpoint));
    env.write("roster.toml", SMALL_ROSTER_TOML);
    env
}

#[test]
fn test_generate_prints_schedule_from_service() {
    let server = StubServer::start(200, chat_completion(VALID_SCHEDULE_JSON));
    let env = env_with_endpoint(&server.endpoint);

    let result = env.run(&[
        "generate",
        "--roster",
        "roster.toml",
        "-c",
        "No classes on Friday",
    ]);
    let request = server.finish();

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("Schedule Dashboard"));
    assert!(result.stdout.contains("Entries: 2"));
    assert!(result.stdout.contains("CS101"));
    assert!(result.stdout.contains("MATH201"));
    assert!(result
        .stdout
        .contains("All faculty assigned without conflicts."));
    assert!(!result.stdout.contains("schedule issue"));
    assert!(result.stderr.contains("Schedule Generated!"), "{}", result.stderr);

    assert!(request.request_line.starts_with("POST /v1/chat/completions"));
    assert!(request.header("authorization").is_none());
    let body = request.json();
    assert_eq!(body["model"], "stub-model");
    assert_eq!(body["response_format"]["type"], "json_object");
    let prompt = body["messages"][1]["content"].as_str().unwrap();
    assert!(prompt.contains("Name: Dr. Y, Department: Math"));
    assert!(prompt.contains("Constraints: No classes on Friday"));
}

#[test]
fn test_generate_sends_bearer_token_from_configured_var() {
    let server = StubServer::start(200, chat_completion(VALID_SCHEDULE_JSON));
    let env = TestEnv::new();
    env.write(
        "docent.toml",
        &format!(
            "[generator]\nendpoint = \"{}\"\napi_key_env = \"DOCENT_TEST_KEY\"\n",
            server.endpoint
        ),
    );

    let result = env.run_with_env(&["generate", "--sample"], &[("DOCENT_TEST_KEY", "sk-test")]);
    let request = server.finish();

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(request.header("authorization"), Some("Bearer sk-test"));
}

#[test]
fn test_generate_missing_api_key_is_a_setup_error() {
    let env = TestEnv::new();
    env.write(
        "docent.toml",
        "[generator]\napi_key_env = \"DOCENT_TEST_KEY\"\n",
    );

    let result = env.run(&["generate", "--sample"]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result
            .stderr
            .contains("API key not set (expected environment variable DOCENT_TEST_KEY)"),
        "{}",
        result.stderr
    );
    assert!(result.stderr.contains("hint: Export DOCENT_TEST_KEY"));
    assert!(!result.stderr.contains(GENERIC_FAILURE));
}

#[test]
fn test_generate_unreachable_service_shows_generic_failure() {
    let env = env_with_endpoint(&closed_endpoint());

    let result = env.run(&["generate", "--roster", "roster.toml"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains(GENERIC_FAILURE), "{}", result.stderr);
    assert!(!result.stderr.contains("could not reach"));
    assert!(!result.stdout.contains("Schedule Dashboard"));
}

#[test]
fn test_generate_failure_cause_visible_at_debug_verbosity() {
    let env = env_with_endpoint(&closed_endpoint());

    let result = env.run(&["-vv", "generate", "--roster", "roster.toml"]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result
            .stderr
            .contains("Cause: could not reach generation service"),
        "{}",
        result.stderr
    );
    assert!(result.stderr.contains("Request requesting"));
    assert!(result.stderr.contains("Request failed"));
    assert!(result.stderr.contains("Faculty Preferences:"));
}

#[test]
fn test_generate_service_error_status() {
    let server = StubServer::start(500, r#"{"error":{"message":"overloaded"}}"#);
    let env = env_with_endpoint(&server.endpoint);

    let result = env.run(&["--json", "generate", "--roster", "roster.toml"]);
    server.finish();

    assert_eq!(result.exit_code, 1);
    let events = result.events();
    let statuses: Vec<&str> = events
        .iter()
        .filter(|e| e["event"] == "status")
        .map(|e| e["status"].as_str().unwrap())
        .collect();
    assert_eq!(statuses, ["requesting", "failed"]);

    let notification = events
        .iter()
        .find(|e| e["event"] == "notification")
        .expect("notification event");
    assert_eq!(notification["title"], "Error");
    assert_eq!(notification["description"], GENERIC_FAILURE);

    let error = events
        .iter()
        .find(|e| e["event"] == "error")
        .expect("error event");
    assert_eq!(error["message"], GENERIC_FAILURE);
    assert!(error["cause"].as_str().unwrap().contains("HTTP 500"));

    let complete = events.last().unwrap();
    assert_eq!(complete["event"], "complete");
    assert_eq!(complete["success"], false);
}

#[test]
fn test_generate_malformed_content_is_a_failure() {
    let server = StubServer::start(200, chat_completion("I could not build a schedule."));
    let env = env_with_endpoint(&server.endpoint);

    let result = env.run(&["generate", "--roster", "roster.toml"]);
    server.finish();

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains(GENERIC_FAILURE), "{}", result.stderr);
}

#[test]
fn test_generate_fenced_response_and_integrity_warnings() {
    let content = "```json\n{\"schedule\":[{\"facultyName\":\"Dr. Z\",\"hallName\":\"Hall A\",\"timeSlot\":\"9-10\",\"courseName\":\"BIO100\"}],\"summary\":\"Dr. Z covers biology.\"}\n```";
    let server = StubServer::start(200, chat_completion(content));
    let env = env_with_endpoint(&server.endpoint);

    let result = env.run(&["generate", "--roster", "roster.toml"]);
    server.finish();

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("BIO100"));
    assert!(result.stdout.contains("1 schedule issue"), "{}", result.stdout);
    assert!(result.stdout.contains("entry 1: unknown faculty 'Dr. Z'"));
}

#[test]
fn test_generate_integrity_check_can_be_disabled() {
    let content = r#"{"schedule":[{"facultyName":"Dr. Z","hallName":"Hall Q","timeSlot":"9-10","courseName":"BIO100"}],"summary":""}"#;
    let server = StubServer::start(200, chat_completion(content));
    let env = TestEnv::new();
    env.write(
        "docent.toml",
        &format!("{}check_integrity = false\n", stub_config(&server.endpoint)),
    );

    let result = env.run(&["generate"]);
    server.finish();

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("BIO100"));
    assert!(!result.stdout.contains("schedule issue"));
}

#[test]
fn test_generate_json_success_events() {
    let server = StubServer::start(200, chat_completion(VALID_SCHEDULE_JSON));
    let env = env_with_endpoint(&server.endpoint);

    let result = env.run(&["--json", "generate", "--roster", "roster.toml"]);
    server.finish();

    assert!(result.success, "{}", result.combined_output());
    let events = result.events();
    assert_eq!(events[0]["event"], "start");
    assert_eq!(events[0]["command"], "generate");

    let statuses: Vec<&str> = events
        .iter()
        .filter(|e| e["event"] == "status")
        .map(|e| e["status"].as_str().unwrap())
        .collect();
    assert_eq!(statuses, ["requesting", "succeeded"]);

    let notification = events
        .iter()
        .find(|e| e["event"] == "notification")
        .expect("notification event");
    assert_eq!(notification["title"], "Schedule Generated!");
    assert_eq!(notification["kind"], "success");

    let schedule = events
        .iter()
        .find(|e| e["event"] == "data" && e["kind"] == "schedule")
        .expect("schedule data");
    assert_eq!(schedule["data"]["schedule"][1]["courseName"], "MATH201");
    assert_eq!(
        schedule["data"]["summary"],
        "All faculty assigned without conflicts."
    );

    let integrity = events
        .iter()
        .find(|e| e["event"] == "data" && e["kind"] == "integrity")
        .expect("integrity data");
    assert_eq!(integrity["data"].as_array().unwrap().len(), 0);

    let complete = events.last().unwrap();
    assert_eq!(complete["event"], "complete");
    assert_eq!(complete["success"], true);
    assert!(complete["duration_ms"].is_u64());
}
