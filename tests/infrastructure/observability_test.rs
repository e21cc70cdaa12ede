use pedidos::infrastructure::observability::{
    DEFAULT_FILTER, REQUEST_ID_HEADER, RequestId, TracingConfig, init_tracing,
};

#[test]
fn given_request_id_header_constant_when_accessed_then_returns_correct_value() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
}

#[test]
fn given_request_id_when_cloned_then_equals_original() {
    let original = RequestId("abc".to_string());
    let cloned = original.clone();
    assert_eq!(original.0, cloned.0);
}

#[test]
fn given_explicit_values_when_creating_config_then_keeps_them() {
    let config = TracingConfig::new("prod", true);
    assert_eq!(config.environment, "prod");
    assert!(config.json_format);
}

#[test]
fn given_default_config_when_created_then_environment_is_set() {
    let config = TracingConfig::default();
    assert!(!config.environment.is_empty());
}

#[test]
fn given_new_config_when_created_then_uses_crate_filter() {
    let config = TracingConfig::new("test", false);
    assert_eq!(config.default_filter, DEFAULT_FILTER);
    assert!(DEFAULT_FILTER.contains("pedidos=debug"));
}

#[test]
fn given_installed_subscriber_when_initializing_again_then_returns_error() {
    let config = TracingConfig::new("test", true);
    let _ = init_tracing(&config, 3000);

    assert!(init_tracing(&config, 3000).is_err());
}
