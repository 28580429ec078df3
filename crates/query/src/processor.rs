//! # 查询处理器
//!
//! 根据意图与币种参数从行情快照中筛选记录。筛选结果一律立即物化，
//! 空判断基于实际长度。

use crate::alias::{AliasResolver, CoinId};
use coinbot_core::ticker::entity::CoinRecord;
use tracing::debug;

/// 唯一受支持的意图名称
pub const QUERY_COIN_PRICE: &str = "QueryCoinPrice";

/// 请求意图
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    // 查询币价
    QueryCoinPrice,
    // 其余意图一律视为无操作
    Other(String),
}

impl Intent {
    pub fn from_action(action: &str) -> Self {
        if action == QUERY_COIN_PRICE {
            Intent::QueryCoinPrice
        } else {
            Intent::Other(action.to_string())
        }
    }
}

/// # Summary
/// 已解析的价格查询。
///
/// # Invariants
/// - `coin` 缺省时为空字符串，空字符串会被解析为全量列表。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuery {
    pub intent: Intent,
    pub coin: String,
}

/// # Summary
/// 查询处理器，组合别名解析与快照筛选。
#[derive(Debug, Clone, Default)]
pub struct QueryProcessor {
    resolver: AliasResolver,
}

impl QueryProcessor {
    pub fn new(resolver: AliasResolver) -> Self {
        Self { resolver }
    }

    /// # Summary
    /// 执行一次查询。
    ///
    /// # Logic
    /// 1. 非 `QueryCoinPrice` 意图直接返回空结果。
    /// 2. 按 `symbol` 精确匹配。
    /// 3. 无命中时经别名解析：`All` 返回全量，否则按 `id` 精确匹配。
    ///
    /// # Arguments
    /// * `query`: 已解析的请求。
    /// * `records`: 当前行情快照。
    ///
    /// # Returns
    /// 命中的记录 (可能为空)，顺序与快照一致。
    pub fn process(&self, query: &PriceQuery, records: &[CoinRecord]) -> Vec<CoinRecord> {
        if query.intent != Intent::QueryCoinPrice {
            debug!("Ignoring intent {:?}", query.intent);
            return Vec::new();
        }

        let by_symbol: Vec<CoinRecord> = records
            .iter()
            .filter(|c| c.symbol == query.coin)
            .cloned()
            .collect();
        if !by_symbol.is_empty() {
            return by_symbol;
        }

        match self.resolver.resolve(&query.coin) {
            CoinId::All => {
                debug!("Coin {:?} not recognized, returning full list", query.coin);
                records.to_vec()
            }
            CoinId::Known(id) => records.iter().filter(|c| c.id == id).cloned().collect(),
        }
    }
}
