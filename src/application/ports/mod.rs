//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod audio_storage;
mod tts_engine;

pub use audio_storage::{AudioStorageError, AudioStoragePort};
pub use tts_engine::{InferRequest, InferResponse, TtsEnginePort, TtsError};
