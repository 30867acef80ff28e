//! File Storage - 文件系统音频写入实现
//!
//! 实现 AudioStoragePort trait

use async_trait::async_trait;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::application::ports::{AudioStorageError, AudioStoragePort};

/// 文件系统音频写入
///
/// 将音频数据原样写入调用方给定的路径，不创建父目录，不校验音频格式
#[derive(Debug, Clone, Default)]
pub struct FileAudioWriter;

impl FileAudioWriter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AudioStoragePort for FileAudioWriter {
    async fn write_audio(&self, path: &Path, data: &[u8]) -> Result<u64, AudioStorageError> {
        // 文件句柄在离开作用域时关闭，写入失败也一样
        let mut file = File::create(path).await?;
        file.write_all(data).await?;
        file.flush().await?;

        tracing::debug!(
            path = %path.display(),
            size = data.len(),
            "Saved audio"
        );

        Ok(data.len() as u64)
    }
}
