use serde::{Deserialize, Serialize};

/// 网关错误响应体（`{"ok": false, "error": ..., "message": ...}`）。
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ApiErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ok: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// 从响应文本解析错误体；非 JSON 对象时返回 `None`。
    #[must_use]
    pub fn parse(body: &str) -> Option<Self> {
        let parsed: Self = serde_json::from_str(body).ok()?;
        if parsed.error.is_none() && parsed.message.is_none() {
            return None;
        }
        Some(parsed)
    }

    /// 可读的错误描述，优先使用 `message`。
    #[must_use]
    pub fn describe(&self) -> String {
        match (&self.error, &self.message) {
            (Some(error), Some(message)) => format!("{error}: {message}"),
            (None, Some(message)) => message.clone(),
            (Some(error), None) => error.clone(),
            (None, None) => String::new(),
        }
    }
}
