//! Domain Layer - 领域层
//!
//! - Voice Context: 音色目录与音色选择
//! - 文本长度限制

pub mod voice;

mod text_limit;

pub use text_limit::{TextLimit, TextTooLong};
