//! Voice Context - 音色限界上下文
//!
//! 职责:
//! - 各 TTS 服务的预置音色目录
//! - 音色选择（配置 / 显式 / 随机）

mod errors;
mod selector;
mod value_objects;

pub use errors::VoiceError;
pub use selector::{VoiceCase, VoiceSelector};
pub use value_objects::{VoiceCatalog, VoicePreset};
