//! Voxwrite - 文本转语音文件
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Voice Context: 音色目录与音色选择
//! - 文本长度限制
//!
//! 应用层 (application/):
//! - Ports: 端口定义（TtsEngine, AudioStorage）
//! - Commands: SynthesizeSpeech 命令及处理器
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: OpenAI / Fish Audio TTS Client, 文件写入

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config_from_path, AppConfig};
