// ==========================================
// IC-CSC 分类计算器 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换引擎/配置错误为宿主可读的错误消息
// ==========================================

use crate::config::ConfigError;
use crate::domain::types::Axis;
use crate::engine::ClassificationError;
use thiserror::Error;

/// API层错误类型
/// 所有错误信息必须包含显式原因
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    /// 轴取值不在规范代码集合内 (集成缺陷,非终端用户输入)
    #[error("无效的轴取值: axis={axis}, value={value:?}")]
    InvalidAxisValue { axis: Axis, value: String },

    #[error("不支持的语言: {0}")]
    UnsupportedLocale(String),

    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ==========================================
    // 配置与序列化错误
    // ==========================================
    #[error("配置错误: {0}")]
    Config(String),

    #[error("序列化失败: {0}")]
    Serialization(String),
}

// ==========================================
// 从 ClassificationError 转换
// ==========================================
impl From<ClassificationError> for ApiError {
    fn from(err: ClassificationError) -> Self {
        match err {
            ClassificationError::InvalidAxisValue { axis, value } => {
                ApiError::InvalidAxisValue { axis, value }
            }
            ClassificationError::UnsupportedLocale(locale) => ApiError::UnsupportedLocale(locale),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::UnsupportedLocale { value, .. } => ApiError::UnsupportedLocale(value),
            other => ApiError::Config(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_error_conversion() {
        let err: ApiError = ClassificationError::InvalidAxisValue {
            axis: Axis::Temporal,
            value: "T3".to_string(),
        }
        .into();
        match err {
            ApiError::InvalidAxisValue { axis, value } => {
                assert_eq!(axis, Axis::Temporal);
                assert_eq!(value, "T3");
            }
            _ => panic!("Expected InvalidAxisValue"),
        }

        let err: ApiError = ClassificationError::UnsupportedLocale("fr".to_string()).into();
        assert!(matches!(err, ApiError::UnsupportedLocale(ref l) if l == "fr"));
    }

    #[test]
    fn test_config_error_conversion() {
        let err: ApiError = ConfigError::InvalidInputMode {
            key: "IC_CSC_INPUT_MODE".to_string(),
            value: "free".to_string(),
        }
        .into();
        match err {
            ApiError::Config(msg) => assert!(msg.contains("free")),
            _ => panic!("Expected Config"),
        }

        let err: ApiError = ConfigError::UnsupportedLocale {
            key: "IC_CSC_LOCALE".to_string(),
            value: "fr".to_string(),
        }
        .into();
        assert!(matches!(err, ApiError::UnsupportedLocale(ref l) if l == "fr"));
    }

    #[test]
    fn test_serde_error_conversion() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ApiError = serde_err.into();
        match err {
            ApiError::Serialization(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected Serialization"),
        }
    }

    #[test]
    fn test_error_message_names_axis_and_value() {
        let err = ApiError::InvalidAxisValue {
            axis: Axis::Risk,
            value: "R9".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("risk"));
        assert!(msg.contains("R9"));
    }
}
