//! Voice Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VoiceError {
    #[error("音色目录不能为空")]
    EmptyCatalog,
}
