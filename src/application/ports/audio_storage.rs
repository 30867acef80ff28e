//! Audio Storage Port - 出站端口
//!
//! 定义音频文件写入的抽象接口

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// 音频存储错误
#[derive(Debug, Error)]
pub enum AudioStorageError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Audio Storage Port - 出站端口
#[async_trait]
pub trait AudioStoragePort: Send + Sync {
    /// 将音频数据完整写入 `path`，已存在的文件会被覆盖
    ///
    /// 返回写入的字节数
    async fn write_audio(&self, path: &Path, data: &[u8]) -> Result<u64, AudioStorageError>;
}
