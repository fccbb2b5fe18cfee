// ==========================================
// IC-CSC 分类计算器 - 引擎配置
// ==========================================
// 职责: 配置加载 (默认值 + 环境变量覆写) 与校验
// 存储: 无持久化,进程内只读
// ==========================================

use crate::i18n;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ==========================================
// 配置键 (环境变量名)
// ==========================================
pub mod config_keys {
    // 建议文本语言
    pub const LOCALE: &str = "IC_CSC_LOCALE";

    // 输入模式 (code / label)
    pub const INPUT_MODE: &str = "IC_CSC_INPUT_MODE";
}

/// 配置错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("不支持的语言: {key}={value}")]
    UnsupportedLocale { key: String, value: String },

    #[error("无效的输入模式: {key}={value} (可选: code, label)")]
    InvalidInputMode { key: String, value: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// 输入模式 (Input Mode)
// ==========================================
// Code: 宿主直接传入规范代码 (推荐)
// Label: 宿主传入界面标签,取首个空白分隔片段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Code,
    Label,
}

impl InputMode {
    /// 从字符串解析 (不区分大小写)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "code" => Some(InputMode::Code),
            "label" => Some(InputMode::Label),
            _ => None,
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputMode::Code => write!(f, "code"),
            InputMode::Label => write!(f, "label"),
        }
    }
}

// ==========================================
// EngineConfig - 引擎配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// 建议文本语言 (en / es / zh-CN)
    #[serde(default = "default_locale")]
    pub locale: String,

    /// 输入模式
    #[serde(default)]
    pub input_mode: InputMode,
}

fn default_locale() -> String {
    i18n::DEFAULT_LOCALE.to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            input_mode: InputMode::default(),
        }
    }
}

impl EngineConfig {
    /// 从环境变量加载
    ///
    /// # 环境变量
    /// - IC_CSC_LOCALE: 语言（默认: en）
    /// - IC_CSC_INPUT_MODE: code | label（默认: code）
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源加载 (空值视为未设置)
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(locale) = lookup(config_keys::LOCALE).filter(|v| !v.trim().is_empty()) {
            config.locale = locale.trim().to_string();
        }

        if let Some(raw) = lookup(config_keys::INPUT_MODE).filter(|v| !v.trim().is_empty()) {
            config.input_mode =
                InputMode::from_str(&raw).ok_or_else(|| ConfigError::InvalidInputMode {
                    key: config_keys::INPUT_MODE.to_string(),
                    value: raw.clone(),
                })?;
        }

        config.validate()?;

        tracing::debug!(
            locale = %config.locale,
            input_mode = %config.input_mode,
            "引擎配置已加载"
        );

        Ok(config)
    }

    /// 校验配置
    pub fn validate(&self) -> ConfigResult<()> {
        if !i18n::is_supported_locale(&self.locale) {
            return Err(ConfigError::UnsupportedLocale {
                key: config_keys::LOCALE.to_string(),
                value: self.locale.clone(),
            });
        }
        Ok(())
    }
}
