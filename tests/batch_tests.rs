//! Batch creation behavior against a mock server: per-item failure
//! isolation, ordering, and group sizing.

mod common;

use common::client_for;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn person(index: usize) -> Value {
    json!({"values": {"name": [{"value": format!("Person {index}")}]}})
}

#[tokio::test]
async fn one_validation_failure_leaves_the_rest_untouched() {
    let payloads: Vec<Value> = (0..5).map(person).collect();

    let server = MockServer::start().await;
    for (index, payload) in payloads.iter().enumerate() {
        let response = if index == 3 {
            ResponseTemplate::new(422).set_body_json(json!({"message": "Validation error"}))
        } else {
            ResponseTemplate::new(200).set_body_json(json!({
                "data": {"id": {"record_id": format!("rec_{index}")}}
            }))
        };
        Mock::given(method("POST"))
            .and(path("/objects/people/records"))
            .and(body_json(payload))
            .respond_with(response)
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    let outcomes = client
        .batch_create_records("people", payloads.clone(), Some(2))
        .await;

    assert_eq!(outcomes.len(), 5, "one outcome per input payload");
    for (index, outcome) in outcomes.iter().enumerate() {
        if index == 3 {
            let (error, payload) = outcome.failure().expect("index 3 must fail");
            assert_eq!(error, "Unprocessable Entity (422): Validation error");
            assert_eq!(payload, &payloads[3]);
        } else {
            let response = outcome.created().expect("other indices must succeed");
            assert_eq!(
                response["data"]["id"]["record_id"],
                format!("rec_{index}").as_str()
            );
        }
    }

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 5, "the failure must not stop the batch");
    let sent: Vec<Value> = requests
        .iter()
        .map(|request| serde_json::from_slice(&request.body).unwrap())
        .collect();
    assert_eq!(sent, payloads, "creates must run in input order");
}

#[tokio::test]
async fn empty_input_issues_no_calls() {
    let server = MockServer::start().await;

    let client = client_for(&server);
    let outcomes = client
        .batch_create_records("people", Vec::new(), None)
        .await;

    assert!(outcomes.is_empty());
    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn results_preserve_input_order() {
    let payloads: Vec<Value> = (0..3).map(person).collect();

    let server = MockServer::start().await;
    for (index, payload) in payloads.iter().enumerate() {
        Mock::given(method("POST"))
            .and(path("/objects/people/records"))
            .and(body_json(payload))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"id": {"record_id": format!("rec_{index}")}}
            })))
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    let outcomes = client.batch_create_records("people", payloads, None).await;

    let ids: Vec<&str> = outcomes
        .iter()
        .map(|outcome| {
            outcome.created().unwrap()["data"]["id"]["record_id"]
                .as_str()
                .unwrap()
        })
        .collect();
    assert_eq!(ids, ["rec_0", "rec_1", "rec_2"]);
}

#[tokio::test]
async fn failures_never_abort_the_batch() {
    let payloads: Vec<Value> = (0..3).map(person).collect();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/objects/people/records"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let outcomes = client
        .batch_create_records("people", payloads.clone(), Some(2))
        .await;

    assert_eq!(outcomes.len(), 3);
    for (outcome, payload) in outcomes.iter().zip(&payloads) {
        let (error, echoed) = outcome.failure().expect("every create must fail");
        assert_eq!(error, "Server Error (500): boom");
        assert_eq!(echoed, payload);
    }
}

#[tokio::test]
async fn zero_group_size_still_processes_everything() {
    let payloads: Vec<Value> = (0..2).map(person).collect();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/objects/people/records"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let outcomes = client
        .batch_create_records("people", payloads, Some(0))
        .await;

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|outcome| outcome.is_created()));
}
