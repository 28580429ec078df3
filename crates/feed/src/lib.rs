//! # `coinbot-feed` - 上游行情源适配器

pub mod coinmarketcap;
