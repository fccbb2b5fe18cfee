// ==========================================
// IC-CSC 分类计算器 - 分类 API
// ==========================================
// 职责: 宿主界面调用入口 (请求归一化、语言选择、JSON 编解码)
// ==========================================

use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::config::{EngineConfig, InputMode};
use crate::domain::classification::{AxisOption, ClassificationInput, Recommendation};
use crate::domain::types::Axis;
use crate::engine::{parse_input_codes, parse_input_labels, ClassificationEngine};

// ==========================================
// 请求/响应 DTO
// ==========================================

/// 分类请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub temporal: String,
    pub activity: String,
    pub extension: String,
    pub risk: String,
    /// 覆写配置语言（可选）
    #[serde(default)]
    pub locale: Option<String>,
}

impl ClassifyRequest {
    pub fn new(temporal: &str, activity: &str, extension: &str, risk: &str) -> Self {
        Self {
            temporal: temporal.to_string(),
            activity: activity.to_string(),
            extension: extension.to_string(),
            risk: risk.to_string(),
            locale: None,
        }
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = Some(locale.to_string());
        self
    }
}

/// 分类响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResponse {
    /// 分类代码 "T?-A?-E?-R?"
    pub code: String,
    /// 逐轴建议 (T-A-E-R)
    pub recommendations: Vec<Recommendation>,
    /// 实际使用的语言
    pub locale: String,
    /// 教学用途声明
    pub disclaimer: String,
}

/// 某轴的选项列表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisOptionsInfo {
    pub axis: Axis,
    pub title: String,
    pub options: Vec<AxisOption>,
    /// 默认选项代码 (index 0)
    pub default_code: String,
}

// ==========================================
// ClassificationApi - 分类 API
// ==========================================

/// 分类API
///
/// 职责：
/// 1. 按输入模式归一化四轴取值
/// 2. 选择语言并调用分类引擎
/// 3. 提供宿主界面所需的选项目录
pub struct ClassificationApi {
    config: EngineConfig,
    engine: ClassificationEngine,
}

impl ClassificationApi {
    /// 创建新的ClassificationApi实例
    pub fn new(config: EngineConfig) -> ApiResult<Self> {
        config.validate()?;
        let engine = ClassificationEngine::with_locale(&config.locale)?;
        Ok(Self { config, engine })
    }

    /// 使用环境变量配置创建
    pub fn from_env() -> ApiResult<Self> {
        Self::new(EngineConfig::from_env()?)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// 分类
    ///
    /// # 返回
    /// - Ok(ClassificationResponse): 分类结果
    /// - Err(ApiError::InvalidAxisValue): 任一轴取值无效（不返回部分结果）
    /// - Err(ApiError::UnsupportedLocale): 请求语言未加载
    pub fn classify(&self, request: &ClassifyRequest) -> ApiResult<ClassificationResponse> {
        let input = self.normalize(request).map_err(|e| {
            tracing::warn!(
                error = %e,
                input_mode = %self.config.input_mode,
                "分类请求被拒绝"
            );
            e
        })?;

        let engine = self.engine_for(request.locale.as_deref()).map_err(|e| {
            tracing::warn!(error = %e, "分类请求被拒绝");
            e
        })?;
        let result = engine.classify(&input);

        tracing::debug!(code = %result.code, locale = engine.locale(), "分类完成");

        Ok(ClassificationResponse {
            code: result.code,
            recommendations: result.recommendations,
            locale: engine.locale().to_string(),
            disclaimer: engine.disclaimer(),
        })
    }

    /// 分类 (JSON 入/出)
    pub fn classify_json(&self, request_json: &str) -> ApiResult<String> {
        let request: ClassifyRequest = serde_json::from_str(request_json)
            .map_err(|e| ApiError::InvalidInput(format!("请求格式错误: {}", e)))?;
        let response = self.classify(&request)?;
        Ok(serde_json::to_string(&response)?)
    }

    /// 查询某轴选项
    pub fn list_axis_options(&self, axis: Axis, locale: Option<&str>) -> ApiResult<AxisOptionsInfo> {
        let engine = self.engine_for(locale)?;
        let options = engine.axis_options(axis);
        let default_code = options
            .first()
            .map(|o| o.code.clone())
            .unwrap_or_default();

        Ok(AxisOptionsInfo {
            axis,
            title: engine.axis_title(axis),
            options,
            default_code,
        })
    }

    /// 查询全部四轴选项 (T-A-E-R)
    pub fn list_all_options(&self, locale: Option<&str>) -> ApiResult<Vec<AxisOptionsInfo>> {
        Axis::ALL
            .iter()
            .map(|axis| self.list_axis_options(*axis, locale))
            .collect()
    }

    // ==========================================
    // 内部方法
    // ==========================================

    fn normalize(&self, request: &ClassifyRequest) -> ApiResult<ClassificationInput> {
        let input = match self.config.input_mode {
            InputMode::Code => parse_input_codes(
                &request.temporal,
                &request.activity,
                &request.extension,
                &request.risk,
            )?,
            InputMode::Label => parse_input_labels(
                &request.temporal,
                &request.activity,
                &request.extension,
                &request.risk,
            )?,
        };
        Ok(input)
    }

    fn engine_for(&self, locale: Option<&str>) -> ApiResult<ClassificationEngine> {
        match locale {
            Some(l) if l != self.engine.locale() => Ok(ClassificationEngine::with_locale(l)?),
            _ => Ok(self.engine.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    fn api(input_mode: InputMode) -> ClassificationApi {
        ClassificationApi::new(EngineConfig {
            locale: "en".to_string(),
            input_mode,
        })
        .unwrap()
    }

    #[test]
    fn test_code_mode_rejects_labels() {
        let api = api(InputMode::Code);
        let request = ClassifyRequest::new("T0 (Acute)", "A0", "E0", "R0");
        match api.classify(&request) {
            Err(ApiError::InvalidAxisValue { axis, value }) => {
                assert_eq!(axis, Axis::Temporal);
                assert_eq!(value, "T0 (Acute)");
            }
            other => panic!("Expected InvalidAxisValue, got {:?}", other),
        }
    }

    #[test]
    fn test_label_mode_accepts_labels() {
        let api = api(InputMode::Label);
        let request = ClassifyRequest::new(
            "T1 (Recurrent)",
            "A0 (Inactive)",
            "E1 (Multifocal/Diffuse)",
            "R0 (No/Minimal)",
        );
        let response = api.classify(&request).unwrap();
        assert_eq!(response.code, "T1-A0-E1-R0");
        assert_eq!(response.locale, "en");
        assert!(!response.disclaimer.is_empty());
    }

    #[test]
    fn test_request_locale_override() {
        let api = api(InputMode::Code);
        let request = ClassifyRequest::new("T0", "A0", "E0", "R0").with_locale("es");
        let response = api.classify(&request).unwrap();
        assert_eq!(response.locale, "es");
        assert!(response.recommendations[0].text.contains("observación"));

        let bad = ClassifyRequest::new("T0", "A0", "E0", "R0").with_locale("fr");
        assert!(matches!(api.classify(&bad), Err(ApiError::UnsupportedLocale(_))));
    }

    /// 捕获 WARN 及以上日志的内存写入器
    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLog {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
        }
    }

    fn classify_with_captured_log(
        api: &ClassificationApi,
        request: &ClassifyRequest,
    ) -> (ApiResult<ClassificationResponse>, String) {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let result = tracing::subscriber::with_default(subscriber, || api.classify(request));
        (result, log.contents())
    }

    #[test]
    fn test_rejections_are_logged_at_warn() {
        let api = api(InputMode::Code);

        // 非法轴取值
        let (result, log) =
            classify_with_captured_log(&api, &ClassifyRequest::new("T3", "A0", "E0", "R0"));
        assert!(matches!(result, Err(ApiError::InvalidAxisValue { .. })));
        assert!(log.contains("WARN"));
        assert!(log.contains("T3"));

        // 未加载的语言
        let request = ClassifyRequest::new("T0", "A0", "E0", "R0").with_locale("fr");
        let (result, log) = classify_with_captured_log(&api, &request);
        assert!(matches!(result, Err(ApiError::UnsupportedLocale(_))));
        assert!(log.contains("WARN"));
        assert!(log.contains("fr"));

        // 成功路径不产生 WARN
        let (result, log) =
            classify_with_captured_log(&api, &ClassifyRequest::new("T0", "A0", "E0", "R0"));
        assert!(result.is_ok());
        assert!(!log.contains("WARN"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = ClassificationApi::new(EngineConfig {
            locale: "xx".to_string(),
            input_mode: InputMode::Code,
        });
        assert!(matches!(result, Err(ApiError::UnsupportedLocale(_))));
    }

    #[test]
    fn test_axis_options_default_is_index_zero() {
        let api = api(InputMode::Code);
        let info = api.list_axis_options(Axis::Risk, None).unwrap();
        assert_eq!(info.default_code, "R0");
        assert_eq!(info.title, "Risk (R)");
        assert_eq!(info.options.len(), 3);

        let all = api.list_all_options(Some("zh-CN")).unwrap();
        let axes: Vec<Axis> = all.iter().map(|i| i.axis).collect();
        assert_eq!(axes, Axis::ALL.to_vec());
    }
}
