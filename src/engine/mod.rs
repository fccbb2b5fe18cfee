// ==========================================
// IC-CSC 分类计算器 - 引擎层
// ==========================================
// 职责: 实现分类规则引擎
// 红线: 引擎无副作用,每条建议必须可追溯到 (轴, 等级)
// ==========================================

pub mod classification;
pub mod error;

// 重导出核心引擎
pub use classification::{
    assemble_code, parse_code, parse_input_codes, parse_input_labels, parse_label, rule_key,
    ClassificationEngine, CODE_SEPARATOR,
};
pub use error::{ClassificationError, EngineResult};
