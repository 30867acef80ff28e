//! Voice Context - Value Objects

use super::VoiceError;

/// 预置音色
///
/// `id` 是发送给 TTS 服务的标识（OpenAI 为音色名，Fish Audio 为 reference_id），
/// `label` 仅用于日志和展示。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoicePreset {
    id: String,
    label: String,
}

impl VoicePreset {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl std::fmt::Display for VoicePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label, self.id)
    }
}

/// 音色目录 - 每个 TTS 服务一份固定的音色列表
///
/// 不变量:
/// - 至少包含一个音色
/// - 构造后不可变，顺序保持
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceCatalog {
    presets: Vec<VoicePreset>,
}

impl VoiceCatalog {
    pub fn new(presets: Vec<VoicePreset>) -> Result<Self, VoiceError> {
        if presets.is_empty() {
            return Err(VoiceError::EmptyCatalog);
        }
        Ok(Self { presets })
    }

    /// 由一组音色 ID 构造，label 与 id 相同
    pub fn from_ids<I, S>(ids: I) -> Result<Self, VoiceError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let presets = ids
            .into_iter()
            .map(|id| {
                let id = id.into();
                VoicePreset::new(id.clone(), id)
            })
            .collect();
        Self::new(presets)
    }

    pub fn presets(&self) -> &[VoicePreset] {
        &self.presets
    }

    /// 第一个音色（目录非空，始终存在）
    pub fn first(&self) -> &VoicePreset {
        &self.presets[0]
    }

    pub fn contains(&self, id: &str) -> bool {
        self.presets.iter().any(|p| p.id == id)
    }

    /// 音色数量（至少为 1）
    pub(crate) fn len(&self) -> usize {
        self.presets.len()
    }
}
