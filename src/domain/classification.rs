// ==========================================
// IC-CSC 分类计算器 - 分类输入/结果实体
// ==========================================
// 职责: 定义一次分类调用的输入元组与输出值
// 红线: 不含引擎逻辑,结果一经生成不可变更
// ==========================================

use crate::domain::types::{
    ActivityCode, Axis, AxisLevel, ExtensionCode, RiskCode, TemporalCode,
};
use serde::{Deserialize, Serialize};

// ==========================================
// ClassificationInput - 分类输入
// ==========================================
// 每轴恰好一个等级,顺序固定 T-A-E-R
// 默认值为各轴最低等级 (T0-A0-E0-R0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ClassificationInput {
    pub temporal: TemporalCode,
    pub activity: ActivityCode,
    pub extension: ExtensionCode,
    pub risk: RiskCode,
}

impl ClassificationInput {
    pub fn new(
        temporal: TemporalCode,
        activity: ActivityCode,
        extension: ExtensionCode,
        risk: RiskCode,
    ) -> Self {
        Self {
            temporal,
            activity,
            extension,
            risk,
        }
    }

    /// 指定轴的规范代码
    pub fn code_of(&self, axis: Axis) -> &'static str {
        match axis {
            Axis::Temporal => self.temporal.code(),
            Axis::Activity => self.activity.code(),
            Axis::Extension => self.extension.code(),
            Axis::Risk => self.risk.code(),
        }
    }

    /// 指定轴的序数
    pub fn index_of(&self, axis: Axis) -> usize {
        match axis {
            Axis::Temporal => self.temporal.index(),
            Axis::Activity => self.activity.index(),
            Axis::Extension => self.extension.index(),
            Axis::Risk => self.risk.index(),
        }
    }

    /// 枚举全部 3x3x3x3 = 81 种组合 (T 最外层, R 最内层)
    pub fn all_combinations() -> Vec<ClassificationInput> {
        let mut out = Vec::with_capacity(81);
        for t in TemporalCode::ALL {
            for a in ActivityCode::ALL {
                for e in ExtensionCode::ALL {
                    for r in RiskCode::ALL {
                        out.push(ClassificationInput::new(t, a, e, r));
                    }
                }
            }
        }
        out
    }
}

// ==========================================
// Recommendation - 单轴建议
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// 来源轴
    pub axis: Axis,
    /// 该轴的规范代码 (如 "E1")
    pub severity: String,
    /// 建议文本 (已按语言解析)
    pub text: String,
}

// ==========================================
// ClassificationResult - 分类结果
// ==========================================
// code: "T?-A?-E?-R?"
// recommendations: 每轴恰好一条,顺序 T-A-E-R
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub code: String,
    pub recommendations: Vec<Recommendation>,
}

impl ClassificationResult {
    /// 纯文本建议列表 (保持 T-A-E-R 顺序)
    pub fn recommendation_texts(&self) -> Vec<&str> {
        self.recommendations.iter().map(|r| r.text.as_str()).collect()
    }

    /// 指定轴的建议
    pub fn recommendation_for(&self, axis: Axis) -> Option<&Recommendation> {
        self.recommendations.iter().find(|r| r.axis == axis)
    }

    /// 代码分段 (T-A-E-R)
    pub fn code_segments(&self) -> Vec<&str> {
        self.code.split('-').collect()
    }
}

// ==========================================
// AxisOption - 宿主界面的可选项
// ==========================================
// label 形如 "T0 (Acute)": 代码 + 空格 + 括号描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisOption {
    pub axis: Axis,
    pub code: String,
    pub label: String,
}
