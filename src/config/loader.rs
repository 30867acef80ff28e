//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `VOXWRITE_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `VOXWRITE_TTS__ENGINE=fishaudio`
/// - `VOXWRITE_TTS__OPENAI_API_KEY=sk-...`
/// - `VOXWRITE_TTS__OPENAI_API_URL=http://localhost:8880/v1`
/// - `VOXWRITE_LOG__LEVEL=debug`
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("tts.engine", "openai")?
        .set_default("tts.timeout_secs", 120)?
        .set_default("tts.enforce_max_chars", true)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: VOXWRITE_TTS__OPENAI_API_KEY=sk-...
    // 值保持字符串，API key 和音色 ID 不做数字转换；数值字段在反序列化时解析
    builder = builder.add_source(
        Environment::with_prefix("VOXWRITE")
            .prefix_separator("_")
            .separator("__"),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.tts.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "TTS timeout cannot be 0".to_string(),
        ));
    }

    if config.log.level.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Log level cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志），不输出 API key
pub fn print_config(config: &AppConfig) {
    let tts = &config.tts;
    tracing::info!("=== Application Configuration ===");
    tracing::info!("TTS Engine: {}", tts.engine);
    tracing::info!("TTS Timeout: {}s", tts.timeout_secs);
    tracing::info!("Enforce Max Chars: {}", tts.enforce_max_chars);
    tracing::info!(
        "OpenAI: url={:?}, voice={:?}, model={:?}, key_set={}",
        tts.openai_api_url,
        tts.openai_voice_name,
        tts.openai_model,
        tts.openai_api_key.is_some()
    );
    tracing::info!(
        "Fish Audio: url={:?}, voice={:?}, model={:?}, key_set={}",
        tts.fishaudio_api_url,
        tts.fishaudio_voice,
        tts.fishaudio_model,
        tts.fishaudio_api_key.is_some()
    );
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TtsEngineKind;
    use std::sync::Mutex;
    use tempfile::tempdir;

    // 环境变量是进程级的，读取配置的测试串行执行
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    #[test]
    fn test_validation_passes_for_default_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_timeout() {
        let mut config = AppConfig::default();
        config.tts.timeout_secs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let _guard = env_lock();
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("voxwrite.toml");
        std::fs::write(
            &path,
            r#"
[tts]
engine = "fishaudio"
fishaudio_api_key = "fish-key"
fishaudio_voice = "933563129e564b19a115bedd57b7406a"
openai_api_url = "http://localhost:8880/v1/"
timeout_secs = 30
"#,
        )
        .unwrap();

        let config = load_config_from_path(Some(&path)).unwrap();
        assert_eq!(config.tts.engine, TtsEngineKind::FishAudio);
        assert_eq!(config.tts.fishaudio_api_key.as_deref(), Some("fish-key"));
        assert_eq!(
            config.tts.fishaudio_voice.as_deref(),
            Some("933563129e564b19a115bedd57b7406a")
        );
        assert_eq!(
            config.tts.openai_api_url.as_deref(),
            Some("http://localhost:8880/v1/")
        );
        assert!(config.tts.openai_voice_name.is_none());
        assert_eq!(config.tts.timeout_secs, 30);
        assert!(config.tts.enforce_max_chars);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let _guard = env_lock();
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("missing.toml");
        assert!(load_config_from_path(Some(&path)).is_err());
    }

    #[test]
    fn test_unknown_engine_is_parse_error() {
        let _guard = env_lock();
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("voxwrite.toml");
        std::fs::write(&path, "[tts]\nengine = \"espeak\"\n").unwrap();

        let result = load_config_from_path(Some(&path));
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_env_overrides_file_and_keeps_values_verbatim() {
        let _guard = env_lock();
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("voxwrite.toml");
        std::fs::write(
            &path,
            r#"
[tts]
engine = "openai"
openai_api_key = "from-file"
fishaudio_voice = "from-file"
timeout_secs = 30
"#,
        )
        .unwrap();

        let vars = [
            ("VOXWRITE_TTS__ENGINE", "fishaudio"),
            ("VOXWRITE_TTS__OPENAI_API_KEY", "0012345"),
            ("VOXWRITE_TTS__FISHAUDIO_VOICE", "000123"),
            ("VOXWRITE_TTS__TIMEOUT_SECS", "45"),
            ("VOXWRITE_TTS__ENFORCE_MAX_CHARS", "false"),
        ];
        for (key, value) in vars {
            std::env::set_var(key, value);
        }
        let result = load_config_from_path(Some(&path));
        for (key, _) in vars {
            std::env::remove_var(key);
        }

        let config = result.unwrap();
        assert_eq!(config.tts.engine, TtsEngineKind::FishAudio);
        assert_eq!(config.tts.openai_api_key.as_deref(), Some("0012345"));
        assert_eq!(config.tts.fishaudio_voice.as_deref(), Some("000123"));
        assert_eq!(config.tts.timeout_secs, 45);
        assert!(!config.tts.enforce_max_chars);
    }
}
