// ==========================================
// IC-CSC 分类计算器 - 引擎错误类型
// ==========================================
// 红线: 非法输入直接拒绝,不做默认值替换
// ==========================================

use crate::domain::types::Axis;
use thiserror::Error;

/// 分类引擎错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassificationError {
    /// 轴取值不在该轴的三个规范代码之内
    #[error("无效的轴取值: axis={axis}, value={value:?}")]
    InvalidAxisValue { axis: Axis, value: String },

    /// 未加载的语言
    #[error("不支持的语言: {0}")]
    UnsupportedLocale(String),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, ClassificationError>;
