//! 应用层错误定义
//!
//! 统一的命令错误类型

use thiserror::Error;

use crate::application::ports::{AudioStorageError, TtsError};
use crate::domain::TextTooLong;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// TTS 请求失败（非 200 响应或传输层异常）
    #[error("Failed to generate audio with {engine} TTS API: {source}")]
    TtsRequestError {
        engine: &'static str,
        #[source]
        source: TtsError,
    },

    /// 音频文件写入失败
    #[error("Failed to write audio file: {0}")]
    IoError(#[from] AudioStorageError),

    /// 文本超出服务单次请求的字符上限
    #[error("Text too long: {len} characters exceeds the limit of {max}")]
    TextTooLong { len: usize, max: usize },

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 包装推理阶段的引擎错误
    pub fn from_tts(engine: &'static str, source: TtsError) -> Self {
        Self::TtsRequestError { engine, source }
    }
}

impl From<TextTooLong> for ApplicationError {
    fn from(err: TextTooLong) -> Self {
        Self::TextTooLong {
            len: err.len,
            max: err.max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_keeps_status_and_body() {
        let err = ApplicationError::from_tts(
            "openai",
            TtsError::ServiceError {
                status: 500,
                body: "server error".to_string(),
            },
        );
        let message = err.to_string();
        assert!(message.contains("500"), "{}", message);
        assert!(message.contains("server error"), "{}", message);
    }
}
