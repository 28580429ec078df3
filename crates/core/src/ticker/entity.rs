use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;

/// # Summary
/// 上游返回的数值字段原始形态。
///
/// # Invariants
/// - 上游通常以字符串形式下发数值 (如 `"1234.5"`)，但也可能是原生 JSON 数字。
/// - 解析失败不是错误，调用方得到 `None` 后自行决定是否丢弃该字段。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    // 字符串形式的数值
    Text(String),
    // 原生 JSON 数字
    Number(serde_json::Number),
}

impl RawNumber {
    /// 原样输出的文本形式
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            RawNumber::Text(s) => Cow::Borrowed(s.as_str()),
            RawNumber::Number(n) => Cow::Owned(n.to_string()),
        }
    }

    /// # Summary
    /// 解析为十进制定点数。
    ///
    /// # Logic
    /// 1. 先按普通小数解析。
    /// 2. 失败时再尝试科学计数法 (如 `1e-8`)。
    ///
    /// # Returns
    /// 无法解析或超出 `Decimal` 表示范围时返回 `None`。
    pub fn to_decimal(&self) -> Option<Decimal> {
        let text = self.as_text();
        let text = text.trim();
        Decimal::from_str(text)
            .or_else(|_| Decimal::from_scientific(text))
            .ok()
    }

    /// # Summary
    /// 解析为浮点数，用于超出 `Decimal` 范围的数值。
    ///
    /// # Returns
    /// 非有限值 (`NaN`、`inf`) 视为无法解析。
    pub fn to_f64(&self) -> Option<f64> {
        let value = match self {
            RawNumber::Text(s) => s.trim().parse::<f64>().ok()?,
            RawNumber::Number(n) => n.as_f64()?,
        };
        value.is_finite().then_some(value)
    }

    /// # Summary
    /// 解析为整数。
    ///
    /// # Logic
    /// 1. 优先按整数字面量解析。
    /// 2. 否则接受小数部分为零的数值 (如 `1510000000.0`)。
    pub fn to_i64(&self) -> Option<i64> {
        let direct = match self {
            RawNumber::Text(s) => s.trim().parse().ok(),
            RawNumber::Number(n) => n.as_i64(),
        };
        direct.or_else(|| {
            self.to_decimal()
                .filter(|d| d.fract().is_zero())
                .and_then(|d| d.to_i64())
        })
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        RawNumber::Text(value.to_string())
    }
}

/// # Summary
/// 单个币种的行情快照 (Ticker Record)。
///
/// # Invariants
/// - 拉取后不可变，缓存刷新时整体替换。
/// - 数值字段保留上游原始形态，格式化阶段再做容错解析。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoinRecord {
    // 规范化币种 ID (例如: bitcoin)
    #[serde(default)]
    pub id: String,
    // 交易代码 (例如: BTC)
    #[serde(default)]
    pub symbol: String,
    // 展示名称 (例如: Bitcoin)
    #[serde(default)]
    pub name: String,
    // 市值排名
    pub rank: Option<RawNumber>,
    pub price_usd: Option<RawNumber>,
    pub price_krw: Option<RawNumber>,
    pub price_btc: Option<RawNumber>,
    #[serde(rename = "24h_volume_usd")]
    pub volume_24h_usd: Option<RawNumber>,
    #[serde(rename = "24h_volume_krw")]
    pub volume_24h_krw: Option<RawNumber>,
    pub market_cap_usd: Option<RawNumber>,
    pub market_cap_krw: Option<RawNumber>,
    pub percent_change_1h: Option<RawNumber>,
    pub percent_change_24h: Option<RawNumber>,
    pub percent_change_7d: Option<RawNumber>,
    pub total_supply: Option<RawNumber>,
    pub available_supply: Option<RawNumber>,
    // Unix 时间戳 (秒)
    pub last_updated: Option<RawNumber>,
}

impl CoinRecord {
    /// # Summary
    /// 以上游字段名列出所有数值类字段。
    ///
    /// # Logic
    /// 返回 (线上字段名, 原始值) 的有序列表，供格式化器按字段名规则处理。
    pub fn numeric_fields(&self) -> [(&'static str, Option<&RawNumber>); 14] {
        [
            ("rank", self.rank.as_ref()),
            ("price_usd", self.price_usd.as_ref()),
            ("price_krw", self.price_krw.as_ref()),
            ("price_btc", self.price_btc.as_ref()),
            ("24h_volume_usd", self.volume_24h_usd.as_ref()),
            ("24h_volume_krw", self.volume_24h_krw.as_ref()),
            ("market_cap_usd", self.market_cap_usd.as_ref()),
            ("market_cap_krw", self.market_cap_krw.as_ref()),
            ("percent_change_1h", self.percent_change_1h.as_ref()),
            ("percent_change_24h", self.percent_change_24h.as_ref()),
            ("percent_change_7d", self.percent_change_7d.as_ref()),
            ("total_supply", self.total_supply.as_ref()),
            ("available_supply", self.available_supply.as_ref()),
            ("last_updated", self.last_updated.as_ref()),
        ]
    }

    /// 整数排名，无法解析时为 `None`
    pub fn rank_value(&self) -> Option<i64> {
        self.rank.as_ref().and_then(RawNumber::to_i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_deserialize_upstream_record() {
        let json = r#"{
            "id": "bitcoin",
            "name": "Bitcoin",
            "symbol": "BTC",
            "rank": "1",
            "price_usd": "6492.27",
            "price_btc": "1.0",
            "24h_volume_usd": 3562510000.0,
            "market_cap_usd": "108214898553",
            "available_supply": null,
            "percent_change_1h": "-0.19",
            "last_updated": "1510000000",
            "price_krw": "7262371.72"
        }"#;
        let record: CoinRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, "bitcoin");
        assert_eq!(record.rank_value(), Some(1));
        assert_eq!(record.price_usd.as_ref().unwrap().to_decimal(), Some(dec("6492.27")));
        assert_eq!(
            record.volume_24h_usd.as_ref().unwrap().to_decimal(),
            Some(dec("3562510000"))
        );
        assert!(record.available_supply.is_none());
        assert!(record.market_cap_krw.is_none());
        assert_eq!(record.last_updated.as_ref().unwrap().to_i64(), Some(1_510_000_000));
    }

    #[test]
    fn test_raw_number_parsing() {
        assert_eq!(RawNumber::from("1e-8").to_decimal(), Some(dec("0.00000001")));
        assert_eq!(RawNumber::from(" 42 ").to_i64(), Some(42));
        assert!(RawNumber::from("n/a").to_decimal().is_none());
        assert!(RawNumber::from("1.5").to_i64().is_none());
        assert_eq!(RawNumber::from("2.0").to_i64(), Some(2));
        assert!(RawNumber::from("nan").to_f64().is_none());
        assert_eq!(RawNumber::from("1e30").to_f64(), Some(1e30));
        assert_eq!(RawNumber::from("0.5").as_text(), "0.5");
    }

    #[test]
    fn test_integral_native_numbers() {
        let ts: RawNumber = serde_json::from_str("1510000000.0").unwrap();
        assert_eq!(ts.to_i64(), Some(1_510_000_000));

        let rank: RawNumber = serde_json::from_str("1.0").unwrap();
        assert_eq!(rank.to_i64(), Some(1));

        let fractional: RawNumber = serde_json::from_str("1.5").unwrap();
        assert!(fractional.to_i64().is_none());

        // 超出 Decimal 范围
        let huge: RawNumber = serde_json::from_str("1e30").unwrap();
        assert!(huge.to_decimal().is_none());
        assert!(huge.to_i64().is_none());
    }
}
