//! # `coinbot-query` - 查询解析
//!
//! 将自然语言中的币种称呼解析为规范 ID，并据此从行情快照中筛选记录。

pub mod alias;
pub mod processor;
