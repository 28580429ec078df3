//! # `coinbot-reply` - 回复格式化
//!
//! 将筛选后的行情记录美化为本地化数字，并渲染为 Slack 附件消息与 webhook 回复信封。

pub mod beautify;
pub mod slack;
