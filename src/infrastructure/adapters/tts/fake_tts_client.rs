//! Fake TTS Client - 用于测试的 TTS 客户端
//!
//! 始终返回固定的音频数据（或固定的错误），不实际调用 TTS 服务，
//! 并记录收到的请求供断言使用

use async_trait::async_trait;
use std::sync::Mutex;

use super::openai_tts_client::{OPENAI_DEFAULT_VOICE, OPENAI_MAX_CHARS, OPENAI_VOICES};
use crate::application::ports::{InferRequest, InferResponse, TtsEnginePort, TtsError};
use crate::domain::voice::{VoiceCase, VoiceCatalog, VoiceSelector};
use crate::domain::TextLimit;

/// Fake TTS Client 配置
#[derive(Debug, Clone)]
pub struct FakeTtsClientConfig {
    /// 固定返回的音频数据
    pub audio_data: Vec<u8>,
    /// 音色目录
    pub voices: Vec<String>,
    pub default_voice: String,
    pub max_chars: usize,
    /// 设置后每次推理都返回该状态码和响应体
    pub failure: Option<(u16, String)>,
}

impl Default for FakeTtsClientConfig {
    fn default() -> Self {
        Self {
            audio_data: vec![0x00, 0x01, 0x02],
            voices: OPENAI_VOICES.iter().map(|v| v.to_string()).collect(),
            default_voice: OPENAI_DEFAULT_VOICE.to_string(),
            max_chars: OPENAI_MAX_CHARS,
            failure: None,
        }
    }
}

/// Fake TTS Client
pub struct FakeTtsClient {
    config: FakeTtsClientConfig,
    selector: VoiceSelector,
    requests: Mutex<Vec<InferRequest>>,
}

impl FakeTtsClient {
    pub fn new(config: FakeTtsClientConfig) -> Result<Self, TtsError> {
        let catalog = VoiceCatalog::from_ids(config.voices.clone())
            .map_err(|e| TtsError::configuration(e.to_string()))?;
        let selector =
            VoiceSelector::new(catalog, config.default_voice.clone()).with_case(VoiceCase::Lowercase);

        tracing::info!(
            audio_size = config.audio_data.len(),
            voices = config.voices.len(),
            "FakeTtsClient initialized"
        );

        Ok(Self {
            config,
            selector,
            requests: Mutex::new(Vec::new()),
        })
    }

    /// 已收到的请求
    pub fn requests(&self) -> Vec<InferRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl TtsEnginePort for FakeTtsClient {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn text_limit(&self) -> TextLimit {
        TextLimit::new(self.config.max_chars)
    }

    fn voice_selector(&self) -> &VoiceSelector {
        &self.selector
    }

    async fn infer(&self, request: InferRequest) -> Result<InferResponse, TtsError> {
        tracing::debug!(
            text_len = request.text.len(),
            voice = %request.voice,
            "FakeTtsClient: returning fixed audio"
        );

        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request);

        if let Some((status, body)) = &self.config.failure {
            return Err(TtsError::ServiceError {
                status: *status,
                body: body.clone(),
            });
        }

        Ok(InferResponse {
            audio_data: self.config.audio_data.clone(),
        })
    }
}
