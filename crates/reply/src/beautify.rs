//! # 数值美化
//!
//! 按字段名选择格式化规则。无法解析的数值字段直接从结果中丢弃，不视为错误。

use chrono::{Local, TimeZone};
use coinbot_core::ticker::entity::{CoinRecord, RawNumber};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;

/// 被丢弃字段在消息中的占位符
pub const MISSING: &str = "-";

/// # Summary
/// 字段格式化规则。
///
/// # Invariants
/// - 规则按声明顺序匹配，先命中者生效 (如 `24h_volume_usd` 归入 `Usd` 而非 `Amount`)。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    // 8 位小数
    Btc,
    // 2 位小数
    Usd,
    // 整数
    Krw,
    // 市值、成交量、供应量，2 位小数
    Amount,
    // Unix 时间戳转本地时间
    Timestamp,
    Passthrough,
}

impl FieldRule {
    pub fn for_key(key: &str) -> Self {
        if key.contains("price_btc") {
            FieldRule::Btc
        } else if key.contains("usd") {
            FieldRule::Usd
        } else if key.contains("krw") {
            FieldRule::Krw
        } else if ["market_cap", "volume", "supply"]
            .iter()
            .any(|s| key.contains(s))
        {
            FieldRule::Amount
        } else if key == "last_updated" {
            FieldRule::Timestamp
        } else {
            FieldRule::Passthrough
        }
    }

    /// 应用规则，失败返回 `None`
    pub fn apply(self, raw: &RawNumber) -> Option<String> {
        match self {
            FieldRule::Btc => group_number(raw, 8),
            FieldRule::Usd | FieldRule::Amount => group_number(raw, 2),
            FieldRule::Krw => group_number(raw, 0),
            FieldRule::Timestamp => raw.to_i64().and_then(local_time),
            FieldRule::Passthrough => Some(raw.as_text().into_owned()),
        }
    }
}

/// # Summary
/// 把原始数值格式化为带千分位的定点小数。
///
/// # Logic
/// 1. 能以 `Decimal` 表示时走 [`group_decimal`]。
/// 2. 超出 `Decimal` 范围 (约 7.9e28) 的值退回 `f64` 格式化。
fn group_number(raw: &RawNumber, dp: u32) -> Option<String> {
    match raw.to_decimal() {
        Some(d) => Some(group_decimal(d, dp)),
        None => raw.to_f64().map(|f| {
            let width = usize::try_from(dp).unwrap_or_default();
            insert_separators(&format!("{:.*}", width, f))
        }),
    }
}

/// # Summary
/// 四舍五入到指定小数位并插入千分位分隔符。
///
/// # Logic
/// 1. 以 "远离零的四舍五入" 截断小数位 (`1234.5` -> `1235`)。
/// 2. 补齐小数位后对整数部分每三位插入逗号。
pub fn group_decimal(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let width = usize::try_from(dp).unwrap_or_default();
    insert_separators(&format!("{:.*}", width, rounded))
}

// 对定点小数文本的整数部分每三位插入逗号
fn insert_separators(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(text.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

fn local_time(ts: i64) -> Option<String> {
    Local
        .timestamp_opt(ts, 0)
        .single()
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
}

/// # Summary
/// 美化后的单币种记录。
///
/// # Invariants
/// - 只包含格式化成功的字段，缺失字段通过 `get` 读取时返回占位符。
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedCoin {
    fields: BTreeMap<&'static str, String>,
    // 排序用的整数排名
    rank: Option<i64>,
}

impl FormattedCoin {
    /// 读取字段，缺失时返回 [`MISSING`]
    pub fn get(&self, key: &str) -> &str {
        self.fields.get(key).map_or(MISSING, String::as_str)
    }

    /// 字段是否格式化成功
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn rank(&self) -> Option<i64> {
        self.rank
    }
}

/// # Summary
/// 美化一条行情记录。
///
/// # Logic
/// 1. `id`/`symbol`/`name` 原样保留。
/// 2. 其余字段按 [`FieldRule::for_key`] 选择规则，失败或缺失的字段被丢弃。
pub fn beautify(record: &CoinRecord) -> FormattedCoin {
    let mut fields = BTreeMap::new();
    fields.insert("id", record.id.clone());
    fields.insert("symbol", record.symbol.clone());
    fields.insert("name", record.name.clone());

    for (key, raw) in record.numeric_fields() {
        if let Some(value) = raw.and_then(|r| FieldRule::for_key(key).apply(r)) {
            fields.insert(key, value);
        }
    }

    FormattedCoin {
        fields,
        rank: record.rank_value(),
    }
}
