// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持英文（默认）、西班牙文、中文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// 所有查询均显式传入 locale,不读写全局语言状态
// ==========================================

/// 默认语言
pub const DEFAULT_LOCALE: &str = "en";

/// 已加载的语言列表
pub fn available_locales() -> Vec<&'static str> {
    rust_i18n::available_locales!()
}

/// 语言是否受支持
pub fn is_supported_locale(locale: &str) -> bool {
    available_locales().iter().any(|l| *l == locale)
}

/// 翻译消息（指定语言）
///
/// # 示例
/// ```no_run
/// use ic_csc::i18n::t;
/// let msg = t("ui.disclaimer", "es");
/// ```
pub fn t(key: &str, locale: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}

/// 键能否解析出文本
///
/// rust-i18n 对所有目录都缺失的键返回键本身（或带语言前缀的键）。
/// 注意: 非默认语言缺失的键会回退到英文目录,此处仍返回 true;
/// 是否存在本语言译文需与默认语言文本比对。
pub fn has_translation(key: &str, locale: &str) -> bool {
    let text = t(key, locale);
    !text.is_empty() && text != key && text != format!("{}.{}", locale, key)
}
