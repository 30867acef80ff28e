//! TTS Engine Port - TTS 推理引擎抽象
//!
//! 定义 TTS 推理的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::voice::VoiceSelector;
use crate::domain::TextLimit;

/// TTS 错误
#[derive(Debug, Error)]
pub enum TtsError {
    /// 构造阶段的配置错误（缺少 API key 等），不会发起任何网络请求
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    /// 服务返回非 200 状态码
    #[error("Error from TTS API: {status} {body}")]
    ServiceError { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl TtsError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError(message.into())
    }

    /// 将 reqwest 错误归类为超时或网络错误
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TtsError::Timeout
        } else if err.is_connect() {
            TtsError::NetworkError(format!("Cannot connect to TTS service: {}", err))
        } else {
            TtsError::NetworkError(err.to_string())
        }
    }
}

/// TTS 推理请求
#[derive(Debug, Clone)]
pub struct InferRequest {
    /// 要合成的文本内容
    pub text: String,
    /// 已解析的音色标识
    pub voice: String,
    /// 模型名，None 时使用引擎配置的模型
    pub model: Option<String>,
}

/// TTS 推理响应
#[derive(Debug, Clone)]
pub struct InferResponse {
    /// 原始音频数据，原样写入目标文件
    pub audio_data: Vec<u8>,
}

/// TTS Engine Port
///
/// 外部 TTS 服务的抽象接口
#[async_trait]
pub trait TtsEnginePort: Send + Sync {
    /// 引擎名称（用于日志）
    fn name(&self) -> &'static str;

    /// 单次请求的字符上限
    fn text_limit(&self) -> TextLimit;

    /// 该引擎的音色选择器
    fn voice_selector(&self) -> &VoiceSelector;

    /// 执行 TTS 推理
    ///
    /// 单次请求，不重试；非 200 响应返回 `TtsError::ServiceError`
    async fn infer(&self, request: InferRequest) -> Result<InferResponse, TtsError>;
}
