//! Builder configuration and executor hand-off

use std::collections::HashMap;

use ssm_request::options::GetParameterOptions;
use ssm_request::{BuilderConfig, Error, RequestBuilder};

#[test]
fn test_yaml_config_applies_to_descriptors() {
    let config = BuilderConfig::from_yaml_str(
        r#"
target_prefix: AmazonSSM
region: eu-central-1
"#,
    )
    .unwrap();
    let builder = RequestBuilder::new(config).unwrap();
    let req = builder.get_parameter("/x", &GetParameterOptions::default());
    assert_eq!(
        req.endpoint.as_deref(),
        Some("https://ssm.eu-central-1.amazonaws.com/")
    );
    assert_eq!(req.target(), Some("AmazonSSM.GetParameter"));
}

#[test]
fn test_env_config_endpoint_override() {
    let vars: HashMap<&str, &str> = [
        ("SSM_REQUEST_REGION", "us-east-1"),
        ("SSM_REQUEST_ENDPOINT", "http://localhost:4566"),
    ]
    .into_iter()
    .collect();
    let config = BuilderConfig::from_env_with(|k| vars.get(k).map(|v| v.to_string())).unwrap();
    let builder = RequestBuilder::new(config).unwrap();
    assert_eq!(builder.endpoint(), Some("http://localhost:4566/"));
}

#[test]
fn test_env_config_rejects_bad_endpoint() {
    let err = BuilderConfig::from_env_with(|k| {
        (k == "SSM_REQUEST_ENDPOINT").then(|| "localhost without scheme".to_string())
    })
    .unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_reqwest_handoff() {
    let builder =
        RequestBuilder::new(BuilderConfig::new().with_endpoint("http://localhost:4566/")).unwrap();
    let req = builder.get_parameter("/db/pw", &GetParameterOptions::new().with_decryption(true));

    let client = reqwest::Client::new();
    let http = req.to_reqwest(&client).unwrap().build().unwrap();
    assert_eq!(http.method(), &reqwest::Method::POST);
    assert_eq!(http.url().as_str(), "http://localhost:4566/");
    assert_eq!(
        http.headers().get("x-amz-target").unwrap(),
        "AmazonSSM.GetParameter"
    );
    assert_eq!(
        http.headers().get("content-type").unwrap(),
        "application/x-amz-json-1.1"
    );

    let body = http.body().and_then(|b| b.as_bytes()).unwrap();
    let decoded: serde_json::Value = serde_json::from_slice(body).unwrap();
    assert_eq!(decoded, req.body());
}

#[test]
fn test_reqwest_handoff_requires_endpoint() {
    let req = RequestBuilder::default().delete_parameter("/x");
    let err = req.to_reqwest(&reqwest::Client::new()).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}
