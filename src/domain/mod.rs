// ==========================================
// IC-CSC 分类计算器 - 领域模型层
// ==========================================
// 职责: 定义分类轴、等级、输入与结果实体
// 红线: 不含引擎逻辑,不含界面逻辑
// ==========================================

pub mod classification;
pub mod types;

// 重导出核心类型
pub use classification::{AxisOption, ClassificationInput, ClassificationResult, Recommendation};
pub use types::{ActivityCode, Axis, AxisLevel, ExtensionCode, RiskCode, TemporalCode};
