use super::*;
use crate::{from_value, to_value};
use serde_json::json;

#[test]
fn test_response_new_defaults() {
    let response = AIResponse::new("Hello!");
    assert_eq!(response.content, "Hello!");
    assert!(response.usage.is_none());
    assert!(response.model.is_none());
    assert!(response.finish_reason.is_none());
}

#[test]
fn test_empty_mapping_fails() {
    let err = from_value::<AIResponse>(json!({})).unwrap_err();
    assert!(err.to_string().contains("content"));
}

#[test]
fn test_from_provider_mapping() {
    let response: AIResponse = from_value(json!({
        "content": "Hi there",
        "usage": {"prompt_tokens": 10, "completion_tokens": 3},
        "model": "gpt-4",
        "finish_reason": "stop"
    }))
    .unwrap();
    assert_eq!(response.content, "Hi there");
    assert_eq!(response.usage.as_ref().unwrap()["prompt_tokens"], 10);
    assert_eq!(response.model, Some("gpt-4".to_string()));
    assert_eq!(response.finish_reason, Some("stop".to_string()));
}

#[test]
fn test_usage_values_must_be_integers() {
    let result = from_value::<AIResponse>(json!({
        "content": "Hi",
        "usage": {"prompt_tokens": 10.5}
    }));
    assert!(result.is_err());
}

#[test]
fn test_builder_chain() {
    let usage: TokenCounts = [("total_tokens".to_string(), 13)].into_iter().collect();
    let response = AIResponse::new("done")
        .with_usage(usage)
        .with_model("claude-3-5-sonnet")
        .with_finish_reason("end_turn");
    assert_eq!(response.usage.as_ref().unwrap()["total_tokens"], 13);
    assert_eq!(response.finish_reason, Some("end_turn".to_string()));
}

#[test]
fn test_roundtrip() {
    let usage: TokenCounts = [
        ("prompt_tokens".to_string(), 10),
        ("completion_tokens".to_string(), 3),
    ]
    .into_iter()
    .collect();
    let response = AIResponse::new("Hi").with_usage(usage).with_model("gpt-4");
    let parsed: AIResponse = from_value(to_value(&response).unwrap()).unwrap();
    assert_eq!(parsed, response);
}

#[test]
fn test_serialization_skips_unset_optionals() {
    let json = to_value(&AIResponse::new("Hi")).unwrap();
    assert_eq!(json["content"], "Hi");
    assert!(json.get("usage").is_none());
    assert!(json.get("model").is_none());
    assert!(json.get("finish_reason").is_none());
}
