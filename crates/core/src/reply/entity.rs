//! # 回复消息结构
//!
//! Slack 附件消息以及 webhook 回复信封。字段名与下游平台的 JSON 协议保持一致。

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Slack 附件中的单个字段，三项皆空时序列化为 `{}` (用作占位分隔)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SlackField {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Bitcoin")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "미화 6,492.27 달러\n한화 7,262,372 원")]
    pub value: Option<String>,
    /// 是否允许与相邻字段并排显示
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short: Option<bool>,
}

impl SlackField {
    pub fn new(title: impl Into<String>, value: impl Into<String>, short: bool) -> Self {
        Self {
            title: Some(title.into()),
            value: Some(value.into()),
            short: Some(short),
        }
    }

    /// 空白占位字段
    pub fn spacer() -> Self {
        Self::default()
    }
}

/// Slack 消息附件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SlackAttachment {
    #[schema(example = "가상화폐 가격")]
    pub title: String,
    #[schema(example = "https://coinmarketcap.com")]
    pub title_link: String,
    #[schema(example = "#36a64f")]
    pub color: String,
    pub fields: Vec<SlackField>,
}

/// Slack 消息体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SlackMessage {
    pub text: String,
    pub attachments: Vec<SlackAttachment>,
}

/// 平台相关数据块，目前仅支持 Slack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlatformData {
    pub slack: SlackMessage,
}

/// # Summary
/// Webhook 回复信封。
///
/// # Invariants
/// - `speech` 与 `display_text` 始终为同一句固定文案。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WebhookReply {
    #[schema(example = "문의하신 가상화폐 가격은 다음과 같습니다.")]
    pub speech: String,
    pub display_text: String,
    pub data: PlatformData,
    #[schema(example = "coinbot-webhook")]
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacer_serializes_to_empty_object() {
        let json = serde_json::to_string(&SlackField::spacer()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_reply_uses_camel_case_display_text() {
        let reply = WebhookReply {
            speech: "s".to_string(),
            display_text: "s".to_string(),
            data: PlatformData {
                slack: SlackMessage {
                    text: "s".to_string(),
                    attachments: vec![],
                },
            },
            source: "coinbot-webhook".to_string(),
        };
        let value = serde_json::to_value(&reply).unwrap();
        assert_eq!(value["displayText"], "s");
        assert!(value["data"]["slack"]["attachments"].is_array());
    }
}
