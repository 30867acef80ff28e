//! Synthesize Command Handlers

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::commands::SynthesizeSpeech;
use crate::application::error::ApplicationError;
use crate::application::ports::{AudioStoragePort, InferRequest, TtsEnginePort};

/// 合成结果
#[derive(Debug, Clone)]
pub struct SynthesizeSpeechResponse {
    pub output_path: PathBuf,
    /// 实际使用的音色
    pub voice: String,
    pub text_len: usize,
    pub bytes_written: u64,
}

/// SynthesizeSpeech Handler
///
/// 流程：解析音色 → 校验长度 → 调用 TTS 引擎 → 写入文件。
/// 每次调用互相独立，任一步骤失败即中止，不会写入文件。
pub struct SynthesizeSpeechHandler {
    tts_engine: Arc<dyn TtsEnginePort>,
    audio_storage: Arc<dyn AudioStoragePort>,
    enforce_max_chars: bool,
}

impl SynthesizeSpeechHandler {
    pub fn new(
        tts_engine: Arc<dyn TtsEnginePort>,
        audio_storage: Arc<dyn AudioStoragePort>,
    ) -> Self {
        Self {
            tts_engine,
            audio_storage,
            enforce_max_chars: true,
        }
    }

    /// 关闭字符上限校验，超长文本交由服务端处理
    pub fn with_enforce_max_chars(mut self, enforce: bool) -> Self {
        self.enforce_max_chars = enforce;
        self
    }

    pub async fn handle(
        &self,
        command: SynthesizeSpeech,
    ) -> Result<SynthesizeSpeechResponse, ApplicationError> {
        let engine = self.tts_engine.name();

        if command.text.trim().is_empty() {
            return Err(ApplicationError::validation("Text cannot be empty"));
        }

        let voice = self
            .tts_engine
            .voice_selector()
            .select(command.voice.as_deref(), command.random_voice);

        let text_len = if self.enforce_max_chars {
            self.tts_engine.text_limit().check(&command.text)?
        } else {
            command.text.chars().count()
        };

        tracing::debug!(
            engine = engine,
            voice = %voice,
            text_len = text_len,
            random_voice = command.random_voice,
            "Synthesizing speech"
        );

        let response = self
            .tts_engine
            .infer(InferRequest {
                text: command.text,
                voice: voice.clone(),
                model: command.model,
            })
            .await
            .map_err(|e| ApplicationError::from_tts(engine, e))?;

        let bytes_written = self
            .audio_storage
            .write_audio(&command.output_path, &response.audio_data)
            .await?;

        tracing::info!(
            engine = engine,
            voice = %voice,
            path = %command.output_path.display(),
            audio_size = bytes_written,
            "Speech written"
        );

        Ok(SynthesizeSpeechResponse {
            output_path: command.output_path,
            voice,
            text_len,
            bytes_written,
        })
    }
}
