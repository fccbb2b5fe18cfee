// ==========================================
// ClassificationApi 集成测试
// ==========================================
// 测试目标: 验证宿主调用路径 (配置 -> 归一化 -> 分类 -> JSON)
// ==========================================

use ic_csc::api::{ApiError, ClassificationApi, ClassificationResponse, ClassifyRequest};
use ic_csc::config::{config_keys, EngineConfig, InputMode};
use ic_csc::domain::types::Axis;
use ic_csc::logging;
use serde_json::Value;

// ==========================================
// 测试辅助函数
// ==========================================

fn create_api(locale: &str, input_mode: InputMode) -> ClassificationApi {
    logging::init_test();
    ClassificationApi::new(EngineConfig {
        locale: locale.to_string(),
        input_mode,
    })
    .expect("valid config")
}

// ==========================================
// 测试用例
// ==========================================

#[test]
fn test_classify_json_round_trip() {
    let api = create_api("en", InputMode::Code);

    let request = r#"{"temporal":"T1","activity":"A0","extension":"E1","risk":"R0"}"#;
    let raw = api.classify_json(request).unwrap();
    let value: Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value["code"], "T1-A0-E1-R0");
    assert_eq!(value["locale"], "en");

    let recs = value["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 4);
    let axes: Vec<&str> = recs.iter().map(|r| r["axis"].as_str().unwrap()).collect();
    assert_eq!(axes, vec!["temporal", "activity", "extension", "risk"]);
    let severities: Vec<&str> = recs.iter().map(|r| r["severity"].as_str().unwrap()).collect();
    assert_eq!(severities, vec!["T1", "A0", "E1", "R0"]);

    let response: ClassificationResponse = serde_json::from_str(&raw).unwrap();
    assert_eq!(response.code, "T1-A0-E1-R0");
}

#[test]
fn test_classify_json_invalid_value_produces_no_result() {
    let api = create_api("en", InputMode::Code);

    let request = r#"{"temporal":"T3","activity":"A0","extension":"E1","risk":"R0"}"#;
    match api.classify_json(request) {
        Err(ApiError::InvalidAxisValue { axis, value }) => {
            assert_eq!(axis, Axis::Temporal);
            assert_eq!(value, "T3");
        }
        other => panic!("Expected InvalidAxisValue, got {:?}", other),
    }
}

#[test]
fn test_classify_json_malformed_request() {
    let api = create_api("en", InputMode::Code);

    let result = api.classify_json(r#"{"temporal":"T0"}"#);
    assert!(matches!(result, Err(ApiError::InvalidInput(_))));

    let result = api.classify_json("not json");
    assert!(matches!(result, Err(ApiError::InvalidInput(_))));
}

#[test]
fn test_label_mode_from_config_lookup() {
    logging::init_test();
    let config = EngineConfig::from_lookup(|key| match key {
        k if k == config_keys::INPUT_MODE => Some("label".to_string()),
        k if k == config_keys::LOCALE => Some("es".to_string()),
        _ => None,
    })
    .unwrap();
    let api = ClassificationApi::new(config).unwrap();

    let response = api
        .classify(&ClassifyRequest::new(
            "T2 (Chronic)",
            "A2 (Severe)",
            "E2 (Extensive/Chronic Changes)",
            "R2 (High)",
        ))
        .unwrap();

    assert_eq!(response.code, "T2-A2-E2-R2");
    assert_eq!(response.locale, "es");
    assert!(response.recommendations[0].text.contains("fotodinámica"));
    assert!(response.disclaimer.contains("educativo"));
}

#[test]
fn test_options_catalogue_matches_labels_accepted_by_label_mode() {
    let api = create_api("en", InputMode::Label);

    let catalogue = api.list_all_options(None).unwrap();
    assert_eq!(catalogue.len(), 4);

    // 每轴默认选项组合 = T0-A0-E0-R0
    let defaults: Vec<String> = catalogue
        .iter()
        .map(|info| info.options[0].label.clone())
        .collect();
    let response = api
        .classify(&ClassifyRequest::new(&defaults[0], &defaults[1], &defaults[2], &defaults[3]))
        .unwrap();
    assert_eq!(response.code, "T0-A0-E0-R0");

    // 本地化标签同样可被解析
    let es = api.list_all_options(Some("es")).unwrap();
    let last: Vec<String> = es.iter().map(|info| info.options[2].label.clone()).collect();
    let response = api
        .classify(&ClassifyRequest::new(&last[0], &last[1], &last[2], &last[3]))
        .unwrap();
    assert_eq!(response.code, "T2-A2-E2-R2");
}
