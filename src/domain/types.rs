// ==========================================
// IC-CSC 分类计算器 - 领域类型定义
// ==========================================
// 四个分类轴: T(病程) / A(活动度) / E(范围) / R(风险)
// 每轴三个有序等级,以轴前缀码表示 (T0..T2, A0..A2, E0..E2, R0..R2)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 分类轴 (Axis)
// ==========================================
// 顺序固定: T -> A -> E -> R,代码拼接与建议列表均按此顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Temporal,  // 病程
    Activity,  // 活动度
    Extension, // 范围
    Risk,      // 风险
}

impl Axis {
    /// 全部分类轴 (T-A-E-R 顺序)
    pub const ALL: [Axis; 4] = [Axis::Temporal, Axis::Activity, Axis::Extension, Axis::Risk];

    /// 轴在 T-A-E-R 顺序中的位置
    pub fn index(&self) -> usize {
        match self {
            Axis::Temporal => 0,
            Axis::Activity => 1,
            Axis::Extension => 2,
            Axis::Risk => 3,
        }
    }

    /// 代码前缀 (T/A/E/R)
    pub fn prefix(&self) -> char {
        match self {
            Axis::Temporal => 'T',
            Axis::Activity => 'A',
            Axis::Extension => 'E',
            Axis::Risk => 'R',
        }
    }

    /// 小写名称 (与序列化格式一致)
    pub fn name(&self) -> &'static str {
        match self {
            Axis::Temporal => "temporal",
            Axis::Activity => "activity",
            Axis::Extension => "extension",
            Axis::Risk => "risk",
        }
    }

    /// 从名称解析 (接受全名或单字母前缀,不区分大小写)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "temporal" | "t" => Some(Axis::Temporal),
            "activity" | "a" => Some(Axis::Activity),
            "extension" | "e" => Some(Axis::Extension),
            "risk" | "r" => Some(Axis::Risk),
            _ => None,
        }
    }

    /// 轴标题的国际化键
    pub fn title_key(&self) -> &'static str {
        match self {
            Axis::Temporal => "axis.temporal",
            Axis::Activity => "axis.activity",
            Axis::Extension => "axis.extension",
            Axis::Risk => "axis.risk",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ==========================================
// 轴等级 (AxisLevel)
// ==========================================
// 四个等级枚举的共同接口
// 红线: 每轴恰好三个等级,index 0 为默认选择
pub trait AxisLevel: Copy + Eq + fmt::Debug + fmt::Display + Default + 'static {
    /// 所属分类轴
    const AXIS: Axis;

    /// 全部等级 (按序数排列)
    const ALL: [Self; 3];

    /// 序数 (0..=2)
    fn index(&self) -> usize;

    /// 规范代码 (如 "T0")
    fn code(&self) -> &'static str;

    /// 描述文本的国际化键 (如 "severity.t0")
    fn description_key(&self) -> &'static str;

    /// 从规范代码解析
    ///
    /// 精确匹配,区分大小写,不做裁剪
    fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|level| level.code() == code)
    }
}

// ==========================================
// 病程 (Temporal)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum TemporalCode {
    #[default]
    T0, // 急性
    T1, // 复发
    T2, // 慢性
}

impl AxisLevel for TemporalCode {
    const AXIS: Axis = Axis::Temporal;
    const ALL: [Self; 3] = [TemporalCode::T0, TemporalCode::T1, TemporalCode::T2];

    fn index(&self) -> usize {
        *self as usize
    }

    fn code(&self) -> &'static str {
        match self {
            TemporalCode::T0 => "T0",
            TemporalCode::T1 => "T1",
            TemporalCode::T2 => "T2",
        }
    }

    fn description_key(&self) -> &'static str {
        match self {
            TemporalCode::T0 => "severity.t0",
            TemporalCode::T1 => "severity.t1",
            TemporalCode::T2 => "severity.t2",
        }
    }
}

impl fmt::Display for TemporalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ==========================================
// 活动度 (Activity)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum ActivityCode {
    #[default]
    A0, // 静止
    A1, // 轻/中度
    A2, // 重度
}

impl AxisLevel for ActivityCode {
    const AXIS: Axis = Axis::Activity;
    const ALL: [Self; 3] = [ActivityCode::A0, ActivityCode::A1, ActivityCode::A2];

    fn index(&self) -> usize {
        *self as usize
    }

    fn code(&self) -> &'static str {
        match self {
            ActivityCode::A0 => "A0",
            ActivityCode::A1 => "A1",
            ActivityCode::A2 => "A2",
        }
    }

    fn description_key(&self) -> &'static str {
        match self {
            ActivityCode::A0 => "severity.a0",
            ActivityCode::A1 => "severity.a1",
            ActivityCode::A2 => "severity.a2",
        }
    }
}

impl fmt::Display for ActivityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ==========================================
// 范围 (Extension)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum ExtensionCode {
    #[default]
    E0, // 局灶
    E1, // 多灶/弥漫
    E2, // 广泛/慢性改变
}

impl AxisLevel for ExtensionCode {
    const AXIS: Axis = Axis::Extension;
    const ALL: [Self; 3] = [ExtensionCode::E0, ExtensionCode::E1, ExtensionCode::E2];

    fn index(&self) -> usize {
        *self as usize
    }

    fn code(&self) -> &'static str {
        match self {
            ExtensionCode::E0 => "E0",
            ExtensionCode::E1 => "E1",
            ExtensionCode::E2 => "E2",
        }
    }

    fn description_key(&self) -> &'static str {
        match self {
            ExtensionCode::E0 => "severity.e0",
            ExtensionCode::E1 => "severity.e1",
            ExtensionCode::E2 => "severity.e2",
        }
    }
}

impl fmt::Display for ExtensionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ==========================================
// 风险 (Risk)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum RiskCode {
    #[default]
    R0, // 无/极低
    R1, // 中等
    R2, // 高
}

impl AxisLevel for RiskCode {
    const AXIS: Axis = Axis::Risk;
    const ALL: [Self; 3] = [RiskCode::R0, RiskCode::R1, RiskCode::R2];

    fn index(&self) -> usize {
        *self as usize
    }

    fn code(&self) -> &'static str {
        match self {
            RiskCode::R0 => "R0",
            RiskCode::R1 => "R1",
            RiskCode::R2 => "R2",
        }
    }

    fn description_key(&self) -> &'static str {
        match self {
            RiskCode::R0 => "severity.r0",
            RiskCode::R1 => "severity.r1",
            RiskCode::R2 => "severity.r2",
        }
    }
}

impl fmt::Display for RiskCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
