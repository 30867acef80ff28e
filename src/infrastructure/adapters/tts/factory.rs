//! 按配置创建 TTS 引擎

use std::sync::Arc;

use super::{FishAudioClient, FishAudioClientConfig, OpenAiTtsClient, OpenAiTtsClientConfig};
use crate::application::ports::{TtsEnginePort, TtsError};
use crate::config::{TtsConfig, TtsEngineKind};

/// 根据 `tts.engine` 创建对应的 TTS 引擎
///
/// 只读取配置，不发起网络请求；所选服务缺少 API key 时返回
/// `TtsError::ConfigurationError`
pub fn build_tts_engine(config: &TtsConfig) -> Result<Arc<dyn TtsEnginePort>, TtsError> {
    let engine: Arc<dyn TtsEnginePort> = match config.engine {
        TtsEngineKind::OpenAi => Arc::new(OpenAiTtsClient::new(OpenAiTtsClientConfig {
            api_key: config.openai_api_key.clone(),
            base_url: config.openai_api_url.clone(),
            voice: config.openai_voice_name.clone(),
            model: config.openai_model.clone(),
            timeout_secs: config.timeout_secs,
        })?),
        TtsEngineKind::FishAudio => Arc::new(FishAudioClient::new(FishAudioClientConfig {
            api_key: config.fishaudio_api_key.clone(),
            base_url: config.fishaudio_api_url.clone(),
            voice: config.fishaudio_voice.clone(),
            model: config.fishaudio_model.clone(),
            timeout_secs: config.timeout_secs,
        })?),
    };

    tracing::info!(
        engine = engine.name(),
        max_chars = engine.text_limit().max_chars(),
        "TTS engine created"
    );

    Ok(engine)
}
