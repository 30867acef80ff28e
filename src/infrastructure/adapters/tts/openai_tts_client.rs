//! OpenAI TTS Client - 调用 OpenAI 兼容的 TTS HTTP 接口
//!
//! 实现 TtsEnginePort trait
//!
//! 外部 TTS API:
//! POST {base_url}/audio/speech
//! Headers: Authorization: Bearer <api_key>, Content-Type: application/json
//! Request: {"model": "tts-1", "voice": "alloy", "input": "...", "response_format": "mp3"}
//! Response: 200 + 音频二进制

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use super::{endpoint_url, read_audio_response};
use crate::application::ports::{InferRequest, InferResponse, TtsEnginePort, TtsError};
use crate::domain::voice::{VoiceCase, VoiceCatalog, VoiceSelector};
use crate::domain::TextLimit;

pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const OPENAI_DEFAULT_MODEL: &str = "tts-1";
pub const OPENAI_DEFAULT_VOICE: &str = "alloy";
/// 单次请求最多 4096 字符
pub const OPENAI_MAX_CHARS: usize = 4096;
pub const OPENAI_VOICES: &[&str] = &[
    "alloy", "ash", "coral", "echo", "fable", "onyx", "nova", "sage", "shimmer",
];

const SPEECH_PATH: &str = "/audio/speech";
/// 可选: mp3, aac, opus, flac, pcm, wav
const RESPONSE_FORMAT: &str = "mp3";

/// TTS 推理请求体 (JSON)
#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    voice: &'a str,
    input: &'a str,
    response_format: &'a str,
}

/// OpenAI TTS 客户端配置
#[derive(Debug, Clone)]
pub struct OpenAiTtsClientConfig {
    pub api_key: Option<String>,
    /// 服务基础 URL，末尾的 `/` 会被去掉
    pub base_url: Option<String>,
    /// 默认音色
    pub voice: Option<String>,
    pub model: Option<String>,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for OpenAiTtsClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            voice: None,
            model: None,
            timeout_secs: 120,
        }
    }
}

impl OpenAiTtsClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// OpenAI TTS 客户端
pub struct OpenAiTtsClient {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    selector: VoiceSelector,
}

impl std::fmt::Debug for OpenAiTtsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiTtsClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl OpenAiTtsClient {
    /// 创建客户端，缺少 API key 时直接失败，不发起网络请求
    pub fn new(config: OpenAiTtsClientConfig) -> Result<Self, TtsError> {
        let api_key = config
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                TtsError::configuration(
                    "No OpenAI API key provided in settings! Please set 'openai_api_key' in your config.",
                )
            })?;

        let endpoint = endpoint_url(
            config.base_url.as_deref().unwrap_or(OPENAI_DEFAULT_BASE_URL),
            SPEECH_PATH,
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;

        let catalog = VoiceCatalog::from_ids(OPENAI_VOICES.iter().copied())
            .map_err(|e| TtsError::configuration(e.to_string()))?;
        let default_voice = config
            .voice
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| OPENAI_DEFAULT_VOICE.to_string());
        let selector = VoiceSelector::new(catalog, default_voice).with_case(VoiceCase::Lowercase);

        let model = config
            .model
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| OPENAI_DEFAULT_MODEL.to_string());

        tracing::debug!(endpoint = %endpoint, model = %model, "OpenAI TTS client configured");

        Ok(Self {
            client,
            api_key,
            endpoint,
            model,
            selector,
        })
    }

    /// 最终请求 URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TtsEnginePort for OpenAiTtsClient {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn text_limit(&self) -> TextLimit {
        TextLimit::new(OPENAI_MAX_CHARS)
    }

    fn voice_selector(&self) -> &VoiceSelector {
        &self.selector
    }

    async fn infer(&self, request: InferRequest) -> Result<InferResponse, TtsError> {
        let model = request.model.as_deref().unwrap_or(&self.model);
        let body = SpeechRequest {
            model,
            voice: &request.voice,
            input: &request.text,
            response_format: RESPONSE_FORMAT,
        };

        tracing::debug!(
            url = %self.endpoint,
            text_len = request.text.len(),
            voice = %request.voice,
            model = %model,
            "Sending OpenAI TTS request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(TtsError::from_transport)?;

        let audio_data = read_audio_response(response).await?;

        tracing::info!(
            voice = %request.voice,
            audio_size = audio_data.len(),
            "OpenAI TTS inference completed"
        );

        Ok(InferResponse { audio_data })
    }
}
