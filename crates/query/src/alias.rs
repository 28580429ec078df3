//! # 币种别名解析

use std::fmt;

/// 无法识别具体币种时的哨兵值
pub const ALL: &str = "all";

/// # Summary
/// 别名解析结果。
///
/// # Invariants
/// - `All` 表示未识别出具体币种，调用方应返回全量列表。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoinId {
    Known(String),
    All,
}

impl CoinId {
    pub fn as_str(&self) -> &str {
        match self {
            CoinId::Known(id) => id,
            CoinId::All => ALL,
        }
    }
}

impl fmt::Display for CoinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// # Summary
/// 静态别名表：规范币种 ID -> 已知别名 (交易代码、韩文俗称)。
///
/// # Invariants
/// - 初始化后只读。
/// - 匹配区分大小写，不做任何归一化或模糊匹配。
#[derive(Debug, Clone)]
pub struct AliasResolver {
    table: Vec<(String, Vec<String>)>,
}

impl AliasResolver {
    /// 使用自定义别名表
    pub fn new<I, A, S>(table: I) -> Self
    where
        I: IntoIterator<Item = (S, A)>,
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            table: table
                .into_iter()
                .map(|(id, aliases)| (id.into(), aliases.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }

    /// # Summary
    /// 将输入文本解析为规范币种 ID。
    ///
    /// # Logic
    /// 1. 按表顺序查找别名集合中与输入逐字相等的项。
    /// 2. 均未命中时返回 `CoinId::All`。
    pub fn resolve(&self, text: &str) -> CoinId {
        self.table
            .iter()
            .find(|(_, aliases)| aliases.iter().any(|alias| alias == text))
            .map(|(id, _)| CoinId::Known(id.clone()))
            .unwrap_or(CoinId::All)
    }

    /// 表中全部 (ID, 别名) 对
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.table.iter().flat_map(|(id, aliases)| {
            aliases.iter().map(move |alias| (id.as_str(), alias.as_str()))
        })
    }
}

impl Default for AliasResolver {
    fn default() -> Self {
        Self::new([
            ("bitcoin", vec!["비트코인", "BTC", "XBT"]),
            ("ethereum", vec!["이더리움", "이시리움", "이더", "ETH"]),
            ("ethereum-classic", vec!["이더리움클래식", "이클", "ETC"]),
            ("digibyte", vec!["디지바이트", "대구은행", "DGB"]),
        ])
    }
}
