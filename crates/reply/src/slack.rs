//! # Slack 消息渲染
//!
//! 多币种结果渲染为按排名排序的简表，单币种结果渲染为详细行情卡片。

use crate::beautify::{FormattedCoin, beautify};
use coinbot_core::reply::entity::{
    PlatformData, SlackAttachment, SlackField, SlackMessage, WebhookReply,
};
use coinbot_core::ticker::entity::CoinRecord;
use tracing::{debug, warn};

/// 固定回复文案
pub const SPEECH: &str = "문의하신 가상화폐 가격은 다음과 같습니다.";
/// 回复信封中的来源标记
pub const SOURCE: &str = "coinbot-webhook";
/// 简表最多展示的币种数
pub const MAX_LISTED: usize = 10;

const COLOR: &str = "#36a64f";
const SITE: &str = "https://coinmarketcap.com";

/// # Summary
/// 将查询结果格式化为 webhook 回复。
///
/// # Logic
/// 1. 结果为空时返回 `None`，由调用方输出空对象 `{}`。
/// 2. 逐条美化数值字段。
/// 3. 多于一条时渲染简表，否则渲染详情卡片。
/// 4. 包装进回复信封。
///
/// # Returns
/// 回复信封，结果为空时为 `None`。
pub fn format(results: &[CoinRecord]) -> Option<WebhookReply> {
    if results.is_empty() {
        return None;
    }

    let coins: Vec<FormattedCoin> = results.iter().map(beautify).collect();
    let message = if coins.len() == 1 {
        render_detail(&coins[0])
    } else {
        render_list(coins)
    };

    match serde_json::to_string(&message) {
        Ok(json) => debug!("Outbound slack message: {}", json),
        Err(e) => warn!("Failed to serialize slack message for logging: {}", e),
    }

    Some(WebhookReply {
        speech: SPEECH.to_string(),
        display_text: SPEECH.to_string(),
        data: PlatformData { slack: message },
        source: SOURCE.to_string(),
    })
}

fn bilingual(coin: &FormattedCoin, usd_key: &str, krw_key: &str) -> String {
    format!(
        "미화 {} 달러\n한화 {} 원",
        coin.get(usd_key),
        coin.get(krw_key)
    )
}

/// # Summary
/// 多币种简表。
///
/// # Logic
/// 1. 按整数排名升序排序 (排名缺失的排在最后，稳定排序)。
/// 2. 取前 [`MAX_LISTED`] 个，每个币种一个并排字段。
fn render_list(mut coins: Vec<FormattedCoin>) -> SlackMessage {
    coins.sort_by_key(|c| c.rank().map_or((1, 0), |r| (0, r)));

    let fields = coins
        .iter()
        .take(MAX_LISTED)
        .map(|coin| SlackField::new(coin.get("name"), bilingual(coin, "price_usd", "price_krw"), true))
        .collect();

    SlackMessage {
        text: SPEECH.to_string(),
        attachments: vec![SlackAttachment {
            title: "가상화폐 가격".to_string(),
            title_link: SITE.to_string(),
            color: COLOR.to_string(),
            fields,
        }],
    }
}

/// 单币种详情卡片
fn render_detail(coin: &FormattedCoin) -> SlackMessage {
    let symbol = coin.get("symbol");
    let fields = vec![
        SlackField::new(
            format!("시세 (= {} Bitcoin)", coin.get("price_btc")),
            bilingual(coin, "price_usd", "price_krw"),
            false,
        ),
        SlackField::spacer(),
        SlackField::new(
            format!("시장규모 ({}위)", coin.get("rank")),
            bilingual(coin, "market_cap_usd", "market_cap_krw"),
            false,
        ),
        SlackField::new(
            "가격 변동",
            format!(
                "최근 7일간 {} %\n최근 24시간 {} %\n최근 1시간 {} %",
                coin.get("percent_change_7d"),
                coin.get("percent_change_24h"),
                coin.get("percent_change_1h")
            ),
            false,
        ),
        SlackField::new(
            "거래량 (최근 24시간)",
            bilingual(coin, "24h_volume_usd", "24h_volume_krw"),
            false,
        ),
        SlackField::new(
            "통화량",
            format!(
                "전체 통화량 {} {}\n거래 통화량 {} {}",
                coin.get("total_supply"),
                symbol,
                coin.get("available_supply"),
                symbol
            ),
            false,
        ),
    ];

    SlackMessage {
        text: SPEECH.to_string(),
        attachments: vec![SlackAttachment {
            title: format!(
                "{}({}) - {} 기준",
                coin.get("name"),
                symbol,
                coin.get("last_updated")
            ),
            title_link: format!("{}/currencies/{}", SITE, coin.get("id")),
            color: COLOR.to_string(),
            fields,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use coinbot_core::testing::{bitcoin, coin};

    #[test]
    fn test_empty_results_yield_no_reply() {
        assert!(format(&[]).is_none());
    }

    #[test]
    fn test_list_keeps_top_ten_by_rank() {
        // 排名乱序的 15 个币种
        let ranks = [9, 3, 15, 1, 12, 7, 5, 14, 2, 11, 8, 4, 13, 10, 6];
        let records: Vec<CoinRecord> = ranks
            .iter()
            .map(|r| coin(&format!("coin-{r}"), &format!("C{r}"), &format!("Coin {r}"), *r))
            .collect();

        let reply = format(&records).unwrap();
        let attachment = &reply.data.slack.attachments[0];
        assert_eq!(attachment.title, "가상화폐 가격");
        assert_eq!(attachment.fields.len(), MAX_LISTED);

        let titles: Vec<&str> = attachment
            .fields
            .iter()
            .map(|f| f.title.as_deref().unwrap())
            .collect();
        let expected: Vec<String> = (1..=10).map(|r| format!("Coin {r}")).collect();
        assert_eq!(titles, expected);

        let first = &attachment.fields[0];
        assert_eq!(first.value.as_deref(), Some("미화 100.50 달러\n한화 112,000 원"));
        assert_eq!(first.short, Some(true));
    }

    #[test]
    fn test_list_puts_unranked_coins_last() {
        let mut unranked = coin("mystery", "MYS", "Mystery", 0);
        unranked.rank = Some("unknown".into());
        let records = vec![unranked, coin("ethereum", "ETH", "Ethereum", 2)];

        let reply = format(&records).unwrap();
        let fields = &reply.data.slack.attachments[0].fields;
        assert_eq!(fields[0].title.as_deref(), Some("Ethereum"));
        assert_eq!(fields[1].title.as_deref(), Some("Mystery"));
    }

    #[test]
    fn test_list_sorts_integral_float_ranks() {
        let mut ethereum = coin("ethereum", "ETH", "Ethereum", 0);
        ethereum.rank = Some(serde_json::from_str("2.0").unwrap());
        let records = vec![
            coin("digibyte", "DGB", "DigiByte", 3),
            ethereum,
            coin("bitcoin", "BTC", "Bitcoin", 1),
        ];

        let reply = format(&records).unwrap();
        let titles: Vec<&str> = reply.data.slack.attachments[0]
            .fields
            .iter()
            .map(|f| f.title.as_deref().unwrap())
            .collect();
        assert_eq!(titles, ["Bitcoin", "Ethereum", "DigiByte"]);
    }

    #[test]
    fn test_single_coin_detail_card() {
        let reply = format(&[bitcoin()]).unwrap();
        assert_eq!(reply.speech, SPEECH);
        assert_eq!(reply.display_text, SPEECH);
        assert_eq!(reply.source, SOURCE);

        let updated = Local
            .timestamp_opt(1_510_000_000, 0)
            .unwrap()
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
        let attachment = &reply.data.slack.attachments[0];
        assert_eq!(attachment.title, format!("Bitcoin(BTC) - {updated} 기준"));
        assert_eq!(attachment.title_link, "https://coinmarketcap.com/currencies/bitcoin");
        assert_eq!(attachment.color, "#36a64f");

        let fields = &attachment.fields;
        assert_eq!(fields.len(), 6);
        assert_eq!(fields[0].title.as_deref(), Some("시세 (= 1.00000000 Bitcoin)"));
        assert_eq!(
            fields[0].value.as_deref(),
            Some("미화 6,492.27 달러\n한화 7,262,372 원")
        );
        assert_eq!(fields[1], SlackField::spacer());
        assert_eq!(fields[2].title.as_deref(), Some("시장규모 (1위)"));
        assert_eq!(
            fields[2].value.as_deref(),
            Some("미화 108,214,898,553.00 달러\n한화 121,049,216,049,000 원")
        );
        assert_eq!(
            fields[3].value.as_deref(),
            Some("최근 7일간 13.67 %\n최근 24시간 1.34 %\n최근 1시간 -0.19 %")
        );
        assert_eq!(
            fields[4].value.as_deref(),
            Some("미화 3,562,510,000.00 달러\n한화 3,985,031,611,000 원")
        );
        assert_eq!(
            fields[5].value.as_deref(),
            Some("전체 통화량 16,668,450.00 BTC\n거래 통화량 16,668,450.00 BTC")
        );
        assert!(fields.iter().skip(2).all(|f| f.short == Some(false)));
    }

    #[test]
    fn test_single_coin_with_missing_values_uses_placeholder() {
        let mut record = coin("ethereum", "ETH", "Ethereum", 2);
        record.price_usd = Some("not-a-number".into());

        let reply = format(&[record]).unwrap();
        let fields = &reply.data.slack.attachments[0].fields;
        assert_eq!(fields[0].value.as_deref(), Some("미화 - 달러\n한화 112,000 원"));
        assert_eq!(fields[2].value.as_deref(), Some("미화 - 달러\n한화 - 원"));
    }
}
