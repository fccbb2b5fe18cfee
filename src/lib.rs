// ==========================================
// IC-CSC 分类计算器 - 核心库
// ==========================================
// 中心性浆液性脉络膜视网膜病变 (CSC) 国际分类
// 四轴: T(病程) A(活动度) E(范围) R(风险)
// 系统定位: 决策支持 (建议仅供参考,临床医生最终决定)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 分类规则
pub mod engine;

// 配置层 - 引擎配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 宿主接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ActivityCode, Axis, AxisLevel, ExtensionCode, RiskCode, TemporalCode};

// 领域实体
pub use domain::{AxisOption, ClassificationInput, ClassificationResult, Recommendation};

// 引擎
pub use engine::{ClassificationEngine, ClassificationError};

// 配置
pub use config::{EngineConfig, InputMode};

// API
pub use api::{ApiError, ClassificationApi, ClassifyRequest};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "IC-CSC Calculator";
