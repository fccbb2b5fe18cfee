// ==========================================
// IC-CSC 分类计算器 - 分类引擎
// ==========================================
// 职责: 四轴输入 -> 分类代码 + 逐轴建议
// 输入: ClassificationInput (或规范代码/界面标签)
// 输出: ClassificationResult
// ==========================================
// 红线: 纯函数,无 I/O,无全局可变状态
// 红线: 各轴规则相互独立,不存在跨轴组合规则
// ==========================================

use crate::domain::classification::{
    AxisOption, ClassificationInput, ClassificationResult, Recommendation,
};
use crate::domain::types::{
    ActivityCode, Axis, AxisLevel, ExtensionCode, RiskCode, TemporalCode,
};
use crate::engine::error::{ClassificationError, EngineResult};
use crate::i18n;

/// 代码分隔符
pub const CODE_SEPARATOR: &str = "-";

// ==========================================
// 规则表 (4 轴 x 3 等级)
// ==========================================
// 行: T-A-E-R; 列: 等级序数
// 存放国际化键,文本在分类时按语言解析
static RULE_TABLE: [[&str; 3]; 4] = [
    [
        "recommendation.temporal.t0",
        "recommendation.temporal.t1",
        "recommendation.temporal.t2",
    ],
    [
        "recommendation.activity.a0",
        "recommendation.activity.a1",
        "recommendation.activity.a2",
    ],
    [
        "recommendation.extension.e0",
        "recommendation.extension.e1",
        "recommendation.extension.e2",
    ],
    [
        "recommendation.risk.r0",
        "recommendation.risk.r1",
        "recommendation.risk.r2",
    ],
];

/// 查询 (轴, 等级) 对应的建议键
///
/// 类型化等级的序数恒在 0..=2,查表不会越界
pub fn rule_key<L: AxisLevel>(level: L) -> &'static str {
    RULE_TABLE[L::AXIS.index()][level.index()]
}

/// 拼接分类代码: "T?-A?-E?-R?"
pub fn assemble_code(input: &ClassificationInput) -> String {
    Axis::ALL
        .iter()
        .map(|axis| input.code_of(*axis))
        .collect::<Vec<_>>()
        .join(CODE_SEPARATOR)
}

// ==========================================
// 输入解析
// ==========================================

/// 解析单轴规范代码
///
/// # 返回
/// - Ok(L): 识别的等级
/// - Err(InvalidAxisValue): 不在该轴三个代码之内
pub fn parse_code<L: AxisLevel>(value: &str) -> EngineResult<L> {
    L::from_code(value).ok_or_else(|| ClassificationError::InvalidAxisValue {
        axis: L::AXIS,
        value: value.to_string(),
    })
}

/// 解析单轴界面标签 (如 "T0 (Acute)")
///
/// 取第一个空白分隔的片段作为代码
pub fn parse_label<L: AxisLevel>(label: &str) -> EngineResult<L> {
    match label.split_whitespace().next() {
        Some(token) => parse_code::<L>(token).map_err(|_| ClassificationError::InvalidAxisValue {
            axis: L::AXIS,
            value: label.to_string(),
        }),
        None => Err(ClassificationError::InvalidAxisValue {
            axis: L::AXIS,
            value: label.to_string(),
        }),
    }
}

/// 从四个规范代码构造输入 (按 T-A-E-R 顺序报告第一个错误)
pub fn parse_input_codes(
    temporal: &str,
    activity: &str,
    extension: &str,
    risk: &str,
) -> EngineResult<ClassificationInput> {
    Ok(ClassificationInput::new(
        parse_code::<TemporalCode>(temporal)?,
        parse_code::<ActivityCode>(activity)?,
        parse_code::<ExtensionCode>(extension)?,
        parse_code::<RiskCode>(risk)?,
    ))
}

/// 从四个界面标签构造输入
pub fn parse_input_labels(
    temporal: &str,
    activity: &str,
    extension: &str,
    risk: &str,
) -> EngineResult<ClassificationInput> {
    Ok(ClassificationInput::new(
        parse_label::<TemporalCode>(temporal)?,
        parse_label::<ActivityCode>(activity)?,
        parse_label::<ExtensionCode>(extension)?,
        parse_label::<RiskCode>(risk)?,
    ))
}

// ==========================================
// ClassificationEngine - 分类引擎
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationEngine {
    // 建议文本所用语言,构造后不变
    locale: String,
}

impl Default for ClassificationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassificationEngine {
    /// 构造函数 (默认英文)
    pub fn new() -> Self {
        Self {
            locale: i18n::DEFAULT_LOCALE.to_string(),
        }
    }

    /// 指定语言构造
    ///
    /// # 返回
    /// - Err(UnsupportedLocale): 语言目录未加载
    pub fn with_locale(locale: &str) -> EngineResult<Self> {
        if !i18n::is_supported_locale(locale) {
            return Err(ClassificationError::UnsupportedLocale(locale.to_string()));
        }
        Ok(Self {
            locale: locale.to_string(),
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 分类 (类型化输入)
    ///
    /// 1. 按 T-A-E-R 顺序拼接代码
    /// 2. 每轴独立查表得到一条建议
    pub fn classify(&self, input: &ClassificationInput) -> ClassificationResult {
        let recommendations = vec![
            self.recommend(input.temporal),
            self.recommend(input.activity),
            self.recommend(input.extension),
            self.recommend(input.risk),
        ];

        ClassificationResult {
            code: assemble_code(input),
            recommendations,
        }
    }

    /// 分类 (规范代码输入)
    pub fn classify_codes(
        &self,
        temporal: &str,
        activity: &str,
        extension: &str,
        risk: &str,
    ) -> EngineResult<ClassificationResult> {
        let input = parse_input_codes(temporal, activity, extension, risk)?;
        Ok(self.classify(&input))
    }

    /// 分类 (界面标签输入,如 "T0 (Acute)")
    pub fn classify_labels(
        &self,
        temporal: &str,
        activity: &str,
        extension: &str,
        risk: &str,
    ) -> EngineResult<ClassificationResult> {
        let input = parse_input_labels(temporal, activity, extension, risk)?;
        Ok(self.classify(&input))
    }

    // ==========================================
    // 界面辅助
    // ==========================================

    /// 某轴的三个可选项 (序数顺序,index 0 为默认)
    pub fn axis_options(&self, axis: Axis) -> Vec<AxisOption> {
        match axis {
            Axis::Temporal => self.options_of::<TemporalCode>(),
            Axis::Activity => self.options_of::<ActivityCode>(),
            Axis::Extension => self.options_of::<ExtensionCode>(),
            Axis::Risk => self.options_of::<RiskCode>(),
        }
    }

    /// 界面标签: "<代码> (<描述>)"
    pub fn label_of<L: AxisLevel>(&self, level: L) -> String {
        format!(
            "{} ({})",
            level.code(),
            i18n::t(level.description_key(), &self.locale)
        )
    }

    /// 轴标题
    pub fn axis_title(&self, axis: Axis) -> String {
        i18n::t(axis.title_key(), &self.locale)
    }

    /// 教学用途声明
    pub fn disclaimer(&self) -> String {
        i18n::t("ui.disclaimer", &self.locale)
    }

    fn options_of<L: AxisLevel>(&self) -> Vec<AxisOption> {
        L::ALL
            .iter()
            .map(|level| AxisOption {
                axis: L::AXIS,
                code: level.code().to_string(),
                label: self.label_of(*level),
            })
            .collect()
    }

    fn recommend<L: AxisLevel>(&self, level: L) -> Recommendation {
        Recommendation {
            axis: L::AXIS,
            severity: level.code().to_string(),
            text: i18n::t(rule_key(level), &self.locale),
        }
    }
}
