//! Fish Audio TTS Client - 调用 Fish Audio TTS HTTP 接口
//!
//! 外部 TTS API:
//! POST {base_url}/v1/tts
//! Headers: Authorization: Bearer <api_key>, model: <model>
//! Request: {"text": "...", "reference_id": "<voice model id>", "format": "mp3"}
//! Response: 200 + 音频二进制
//!
//! HTTP 客户端在第一次推理时才创建，之后复用

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tokio::sync::OnceCell;

use super::{endpoint_url, read_audio_response};
use crate::application::ports::{InferRequest, InferResponse, TtsEnginePort, TtsError};
use crate::domain::voice::{VoiceCatalog, VoicePreset, VoiceSelector};
use crate::domain::TextLimit;

pub const FISH_AUDIO_DEFAULT_BASE_URL: &str = "https://api.fish.audio";
pub const FISH_AUDIO_DEFAULT_MODEL: &str = "s1";
/// 单次请求最多 5000 字符
pub const FISH_AUDIO_MAX_CHARS: usize = 5000;

/// 预置音色 (reference_id, 名称)
pub const FISH_AUDIO_VOICES: &[(&str, &str)] = &[
    ("8ef4a238714b45718ce04243307c57a7", "E-girl"),
    ("802e3bc2b27e49c2995d23ef70e6ac89", "Energetic Male"),
    ("933563129e564b19a115bedd57b7406a", "Sarah"),
    ("bf322df2096a46f18c579d0baa36f41d", "Adrian"),
    ("b347db033a6549378b48d00acb0d06cd", "Selene"),
    ("536d3a5e000945adb7038665781a4aca", "Ethan"),
];

const TTS_PATH: &str = "/v1/tts";
const AUDIO_FORMAT: &str = "mp3";

#[derive(Debug, Serialize)]
struct FishTtsRequest<'a> {
    text: &'a str,
    reference_id: &'a str,
    format: &'a str,
}

/// Fish Audio 客户端配置
#[derive(Debug, Clone)]
pub struct FishAudioClientConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    /// 默认音色（reference_id），未设置时使用目录中的第一个
    pub voice: Option<String>,
    pub model: Option<String>,
    pub timeout_secs: u64,
}

impl Default for FishAudioClientConfig {
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

impl FishAudioClientConfig {
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

    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }
}

/// Fish Audio TTS 客户端
pub struct FishAudioClient {
    client: OnceCell<Client>,
    api_key: String,
    endpoint: String,
    model: String,
    timeout: Duration,
    selector: VoiceSelector,
}

impl std::fmt::Debug for FishAudioClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FishAudioClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}

impl FishAudioClient {
    /// 创建客户端，缺少 API key 时直接失败
    pub fn new(config: FishAudioClientConfig) -> Result<Self, TtsError> {
        let api_key = config
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                TtsError::configuration(
                    "You didn't set a Fish Audio API key! Please set the config variable fishaudio_api_key to a valid API key.",
                )
            })?;

        let endpoint = endpoint_url(
            config.base_url.as_deref().unwrap_or(FISH_AUDIO_DEFAULT_BASE_URL),
            TTS_PATH,
        );

        let catalog = VoiceCatalog::new(
            FISH_AUDIO_VOICES
                .iter()
                .map(|(id, label)| VoicePreset::new(*id, *label))
                .collect(),
        )
        .map_err(|e| TtsError::configuration(e.to_string()))?;
        let default_voice = config
            .voice
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| catalog.first().id().to_string());

        let model = config
            .model
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| FISH_AUDIO_DEFAULT_MODEL.to_string());

        Ok(Self {
            client: OnceCell::new(),
            api_key,
            endpoint,
            model,
            timeout: Duration::from_secs(config.timeout_secs),
            selector: VoiceSelector::new(catalog, default_voice),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// HTTP 客户端是否已创建
    pub fn is_initialized(&self) -> bool {
        self.client.initialized()
    }

    /// 获取 HTTP 客户端，首次调用时创建；并发的首次调用只会创建一次
    async fn ensure_client(&self) -> Result<&Client, TtsError> {
        self.client
            .get_or_try_init(|| async {
                tracing::debug!(endpoint = %self.endpoint, "Initializing Fish Audio client");
                Client::builder()
                    .timeout(self.timeout)
                    .build()
                    .map_err(|e| TtsError::NetworkError(e.to_string()))
            })
            .await
    }
}

#[async_trait]
impl TtsEnginePort for FishAudioClient {
    fn name(&self) -> &'static str {
        "fishaudio"
    }

    fn text_limit(&self) -> TextLimit {
        TextLimit::new(FISH_AUDIO_MAX_CHARS)
    }

    fn voice_selector(&self) -> &VoiceSelector {
        &self.selector
    }

    async fn infer(&self, request: InferRequest) -> Result<InferResponse, TtsError> {
        let client = self.ensure_client().await?;
        let model = request.model.as_deref().unwrap_or(&self.model);

        let body = FishTtsRequest {
            text: &request.text,
            reference_id: &request.voice,
            format: AUDIO_FORMAT,
        };

        tracing::debug!(
            url = %self.endpoint,
            text_len = request.text.len(),
            reference_id = %request.voice,
            model = %model,
            "Sending Fish Audio TTS request"
        );

        let response = client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header("model", model)
            .json(&body)
            .send()
            .await
            .map_err(TtsError::from_transport)?;

        let audio_data = read_audio_response(response).await?;

        tracing::info!(
            reference_id = %request.voice,
            audio_size = audio_data.len(),
            "Fish Audio TTS inference completed"
        );

        Ok(InferResponse { audio_data })
    }
}
