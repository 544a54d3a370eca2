use access_gate::{AccessGate, AccessOutcome, AccessSecret, LambdaConfig, ServerConfig};
use serde_json::json;

fn default_gate() -> AccessGate {
    AccessGate::from_config(&ServerConfig::default())
}

#[test]
fn test_default_code_is_granted() {
    let gate = default_gate();
    let outcome = gate.handle(br#"{"accessCode": "demo2024"}"#);

    assert_eq!(outcome, AccessOutcome::Granted);
    assert_eq!(outcome.status_code(), 200);
    assert_eq!(
        outcome.body(),
        json!({"message": "Access granted", "accessGranted": true})
    );
}

#[test]
fn test_wrong_code_is_denied() {
    let gate = default_gate();
    let outcome = gate.handle(br#"{"accessCode": "wrong"}"#);

    assert_eq!(outcome.status_code(), 401);
    assert_eq!(
        outcome.body(),
        json!({"error": "Invalid access code", "accessGranted": false})
    );
}

#[test]
fn test_comparison_is_case_sensitive() {
    let gate = default_gate();
    for code in ["DEMO2024", "Demo2024", "demo2024 ", " demo2024"] {
        let body = json!({ "accessCode": code }).to_string();
        assert_eq!(gate.handle(body.as_bytes()), AccessOutcome::Denied, "{code:?}");
    }
}

#[test]
fn test_missing_code_variants() {
    let gate = default_gate();
    let bodies: [&[u8]; 4] = [
        b"{}",
        br#"{"accessCode": null}"#,
        br#"{"accessCode": ""}"#,
        br#"{"somethingElse": "demo2024"}"#,
    ];

    for body in bodies {
        let outcome = gate.handle(body);
        assert_eq!(outcome, AccessOutcome::MissingCode);
        assert_eq!(outcome.status_code(), 400);
        assert_eq!(outcome.body(), json!({"error": "Access code is required"}));
    }
}

#[test]
fn test_malformed_body_is_internal_error() {
    let gate = default_gate();
    let outcome = gate.handle(b"not json");

    assert_eq!(outcome, AccessOutcome::InternalError);
    assert_eq!(outcome.status_code(), 500);
    assert_eq!(outcome.body(), json!({"error": "Internal server error"}));

    assert_eq!(gate.handle(b""), AccessOutcome::InternalError);
    assert_eq!(gate.handle(br#"{"accessCode": "demo2024""#), AccessOutcome::InternalError);
}

#[test]
fn test_configured_secret_replaces_default() {
    let config = ServerConfig::resolve(Some("secretXYZ".to_string()), None, None);
    let gate = AccessGate::from_config(&config);

    assert_eq!(
        gate.handle(br#"{"accessCode": "secretXYZ"}"#),
        AccessOutcome::Granted
    );
    assert_eq!(
        gate.handle(br#"{"accessCode": "demo2024"}"#),
        AccessOutcome::Denied
    );
}

#[test]
fn test_lambda_environment_secret() {
    let config = LambdaConfig::from_lookup(|key| match key {
        "DEMO_ACCESS_CODE" => Some("secretXYZ".to_string()),
        _ => None,
    });
    let gate = AccessGate::from_config(&config);

    assert!(gate.handle(br#"{"accessCode": "secretXYZ"}"#).is_granted());
    assert!(!gate.handle(br#"{"accessCode": "demo2024"}"#).is_granted());
}

#[test]
fn test_repeated_requests_yield_same_outcome() {
    let gate = AccessGate::new(AccessSecret::new("secretXYZ"));
    let bodies: [&[u8]; 4] = [
        br#"{"accessCode": "secretXYZ"}"#,
        br#"{"accessCode": "nope"}"#,
        b"{}",
        b"not json",
    ];

    for body in bodies {
        let first = gate.handle(body);
        let second = gate.handle(body);
        assert_eq!(first, second);
        assert_eq!(first.body(), second.body());
    }
}

#[test]
fn test_gate_is_shareable_across_tasks() {
    let gate = std::sync::Arc::new(default_gate());

    let outcomes = tokio_test::block_on(async {
        let mut handles = Vec::new();
        for i in 0..16 {
            let gate = std::sync::Arc::clone(&gate);
            handles.push(tokio::spawn(async move {
                let code = if i % 2 == 0 { "demo2024" } else { "wrong" };
                let body = json!({ "accessCode": code }).to_string();
                (i, gate.handle(body.as_bytes()))
            }));
        }

        let mut outcomes = Vec::new();
        for handle in handles {
            outcomes.push(handle.await.unwrap());
        }
        outcomes
    });

    for (i, outcome) in outcomes {
        let expected = if i % 2 == 0 {
            AccessOutcome::Granted
        } else {
            AccessOutcome::Denied
        };
        assert_eq!(outcome, expected);
    }
}
