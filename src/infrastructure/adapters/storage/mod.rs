//! Storage Adapter - 音频文件写入

mod file_storage;

pub use file_storage::FileAudioWriter;
