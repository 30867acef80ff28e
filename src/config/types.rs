//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// TTS 引擎配置
    #[serde(default)]
    pub tts: TtsConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 使用哪个 TTS 服务
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TtsEngineKind {
    #[default]
    #[serde(alias = "openai_tts")]
    OpenAi,
    #[serde(alias = "fish_audio", alias = "fish")]
    FishAudio,
}

impl std::fmt::Display for TtsEngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OpenAi => write!(f, "openai"),
            Self::FishAudio => write!(f, "fishaudio"),
        }
    }
}

/// TTS 引擎配置（`[tts]` 段）
///
/// 所有服务相关字段都是可选的，默认值由对应的客户端决定：
/// - `openai_api_url`: `https://api.openai.com/v1`
/// - `openai_voice_name`: `alloy`
/// - `openai_model`: `tts-1`
/// - `fishaudio_api_url`: `https://api.fish.audio`
/// - `fishaudio_voice`: 预置音色目录中的第一个
/// - `fishaudio_model`: `s1`
///
/// API key 缺失时在创建客户端时报错。
#[derive(Debug, Clone, Deserialize)]
pub struct TtsConfig {
    #[serde(default)]
    pub engine: TtsEngineKind,

    #[serde(default)]
    pub fishaudio_api_key: Option<String>,
    #[serde(default)]
    pub fishaudio_voice: Option<String>,
    #[serde(default)]
    pub fishaudio_api_url: Option<String>,
    #[serde(default)]
    pub fishaudio_model: Option<String>,

    #[serde(default)]
    pub openai_api_key: Option<String>,
    #[serde(default)]
    pub openai_api_url: Option<String>,
    #[serde(default)]
    pub openai_voice_name: Option<String>,
    #[serde(default)]
    pub openai_model: Option<String>,

    /// 请求超时时间（秒）
    #[serde(default = "default_tts_timeout")]
    pub timeout_secs: u64,

    /// 超出服务字符上限时在请求前报错
    #[serde(default = "default_enforce_max_chars")]
    pub enforce_max_chars: bool,
}

fn default_tts_timeout() -> u64 {
    120
}

fn default_enforce_max_chars() -> bool {
    true
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            engine: TtsEngineKind::default(),
            fishaudio_api_key: None,
            fishaudio_voice: None,
            fishaudio_api_url: None,
            fishaudio_model: None,
            openai_api_key: None,
            openai_api_url: None,
            openai_voice_name: None,
            openai_model: None,
            timeout_secs: default_tts_timeout(),
            enforce_max_chars: default_enforce_max_chars(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
