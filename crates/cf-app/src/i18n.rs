//! Locale selection and the user-facing strings the feed layer emits.

use cf_core::clipboard::Payload;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "en")]
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::ZhCn => "zh-CN",
            Locale::En => "en",
        }
    }

    /// Exact match on a stored locale code.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "zh-CN" => Some(Locale::ZhCn),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// Picks a locale from a system language tag such as `zh-TW`, `en-US`
    /// or the POSIX form `zh_CN.UTF-8`.
    pub fn detect(lang_tag: &str) -> Self {
        if lang_tag.starts_with("zh") {
            Locale::ZhCn
        } else {
            Locale::En
        }
    }

    /// The stored code when it is known, else the system language, else the
    /// default.
    pub fn resolve(code: &str, system_tag: &str) -> Self {
        if let Some(locale) = Self::parse(code) {
            return locale;
        }
        if system_tag.is_empty() {
            return Self::default();
        }
        Self::detect(system_tag)
    }

    pub fn messages(&self) -> &'static Messages {
        match self {
            Locale::ZhCn => &ZH_CN,
            Locale::En => &EN,
        }
    }
}

#[derive(Debug)]
pub struct Messages {
    pub copied_to_clipboard: &'static str,
    pub copy_failed: &'static str,
    pub load_failed: &'static str,
    pub search_failed: &'static str,
    pub pin_failed: &'static str,
    pub delete_failed: &'static str,
    /// Template with a `{count}` placeholder.
    pub history_cleared: &'static str,
    pub clear_failed: &'static str,
    pub save_settings_failed: &'static str,
    pub binary_file_data: &'static str,
    pub decode_failed: &'static str,
    pub empty_content: &'static str,
}

static ZH_CN: Messages = Messages {
    copied_to_clipboard: "已复制到剪贴板",
    copy_failed: "复制失败",
    load_failed: "加载历史记录失败",
    search_failed: "搜索失败",
    pin_failed: "置顶失败",
    delete_failed: "删除失败",
    history_cleared: "已清除 {count} 条记录",
    clear_failed: "清除失败",
    save_settings_failed: "保存失败",
    binary_file_data: "[二进制文件数据]",
    decode_failed: "[解码失败]",
    empty_content: "[内容为空]",
};

static EN: Messages = Messages {
    copied_to_clipboard: "Copied to clipboard",
    copy_failed: "Copy failed",
    load_failed: "Failed to load history",
    search_failed: "Search failed",
    pin_failed: "Failed to pin",
    delete_failed: "Failed to delete",
    history_cleared: "Cleared {count} items",
    clear_failed: "Failed to clear history",
    save_settings_failed: "Failed to save",
    binary_file_data: "[Binary file data]",
    decode_failed: "[Decode failed]",
    empty_content: "[Empty content]",
};

impl Messages {
    /// One-line label for a clip: the text preview, or a marker for binary,
    /// empty and undecodable content.
    pub fn describe(&self, payload: &Payload, max_chars: usize) -> String {
        match payload {
            Payload::Text(text) if text.trim().is_empty() => self.empty_content.to_string(),
            Payload::Binary => self.binary_file_data.to_string(),
            Payload::Undecodable => self.decode_failed.to_string(),
            Payload::Text(_) => payload.preview(max_chars).unwrap_or_default(),
        }
    }
}

/// Language tag of the process environment, first of `LC_ALL`,
/// `LC_MESSAGES` and `LANG` that is set. Empty when none is.
pub fn system_language() -> String {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty() && value != "C" && value != "POSIX")
        .unwrap_or_default()
}

/// Replaces every `{key}` in `template` with its value.
pub fn format(template: &str, params: &[(&str, &str)]) -> String {
    params
        .iter()
        .fold(template.to_string(), |acc, (key, value)| {
            acc.replace(&format!("{{{}}}", key), value)
        })
}
