//! Synthesize Commands

use std::path::PathBuf;

/// 合成语音并写入文件
#[derive(Debug, Clone)]
pub struct SynthesizeSpeech {
    /// 要合成的文本
    pub text: String,
    /// 输出文件路径（覆盖已存在的文件）
    pub output_path: PathBuf,
    /// 从音色目录中随机选择音色
    pub random_voice: bool,
    /// 显式指定的音色，None 时使用配置的默认音色
    pub voice: Option<String>,
    /// 覆盖引擎配置的模型
    pub model: Option<String>,
}

impl SynthesizeSpeech {
    pub fn new(text: impl Into<String>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            text: text.into(),
            output_path: output_path.into(),
            random_voice: false,
            voice: None,
            model: None,
        }
    }

    pub fn with_random_voice(mut self, random_voice: bool) -> Self {
        self.random_voice = random_voice;
        self
    }

    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }
}
