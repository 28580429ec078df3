use config::{Config, ConfigError, Environment, File};
use coinbot_core::config::AppConfig;

/// 默认配置文件名 (可省略扩展名，文件不存在时忽略)
pub const CONFIG_FILE: &str = "coinbot";

/// # Summary
/// 加载分层配置。
///
/// # Logic
/// 1. 以 `AppConfig::default()` 作为最底层。
/// 2. 叠加可选的配置文件。
/// 3. 叠加 `COINBOT__` 前缀的环境变量 (如 `COINBOT__TICKER__TTL_SECS=30`)。
/// 4. 平台注入的 `PORT` 最后覆盖监听端口。
///
/// # Arguments
/// * `config_file` - 配置文件路径或名称。
/// * `port` - `PORT` 环境变量的值。
///
/// # Returns
/// 合并后的配置，任一层格式错误时返回 `ConfigError`。
pub fn load(config_file: &str, port: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder()
        .add_source(Config::try_from(&AppConfig::default())?)
        .add_source(File::with_name(config_file).required(false))
        .add_source(
            Environment::with_prefix("COINBOT")
                .prefix_separator("__")
                .separator("__"),
        );

    if let Some(port) = port {
        builder = builder.set_override("server.port", port)?;
    }

    builder.build()?.try_deserialize()
}
