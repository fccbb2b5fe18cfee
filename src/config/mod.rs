// ==========================================
// IC-CSC 分类计算器 - 配置层
// ==========================================
// 职责: 引擎配置,支持环境变量覆写
// ==========================================

pub mod engine_config;

// 重导出核心配置
pub use engine_config::{config_keys, ConfigError, ConfigResult, EngineConfig, InputMode};
