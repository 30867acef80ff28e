//! Voice Selector - 音色选择
//!
//! 选择规则:
//! 1. `random = true` 时从音色目录中均匀随机选取（每次独立，不做去重）
//! 2. 否则使用显式指定的音色
//! 3. 未指定时回退到服务的默认音色

use rand::Rng;

use super::VoiceCatalog;

/// 音色标识的大小写处理
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoiceCase {
    /// 原样发送（Fish Audio 的 reference_id）
    #[default]
    Preserve,
    /// 转为小写（OpenAI 的音色名区分大小写）
    Lowercase,
}

#[derive(Debug, Clone)]
pub struct VoiceSelector {
    catalog: VoiceCatalog,
    default_voice: String,
    case: VoiceCase,
}

impl VoiceSelector {
    pub fn new(catalog: VoiceCatalog, default_voice: impl Into<String>) -> Self {
        Self {
            catalog,
            default_voice: default_voice.into(),
            case: VoiceCase::Preserve,
        }
    }

    pub fn with_case(mut self, case: VoiceCase) -> Self {
        self.case = case;
        self
    }

    pub fn catalog(&self) -> &VoiceCatalog {
        &self.catalog
    }

    pub fn default_voice(&self) -> &str {
        &self.default_voice
    }

    /// 选择音色，随机模式使用线程本地 RNG
    pub fn select(&self, explicit_voice: Option<&str>, random: bool) -> String {
        self.select_with_rng(explicit_voice, random, &mut rand::thread_rng())
    }

    pub fn select_with_rng<R: Rng + ?Sized>(
        &self,
        explicit_voice: Option<&str>,
        random: bool,
        rng: &mut R,
    ) -> String {
        if random {
            let index = rng.gen_range(0..self.catalog.len());
            return self.catalog.presets()[index].id().to_string();
        }

        let voice = explicit_voice
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(&self.default_voice);

        match self.case {
            VoiceCase::Preserve => voice.to_string(),
            VoiceCase::Lowercase => voice.to_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn openai_selector() -> VoiceSelector {
        let catalog = VoiceCatalog::from_ids([
            "alloy", "ash", "coral", "echo", "fable", "onyx", "nova", "sage", "shimmer",
        ])
        .unwrap();
        VoiceSelector::new(catalog, "alloy").with_case(VoiceCase::Lowercase)
    }

    #[test]
    fn test_random_voice_is_always_in_catalog() {
        let selector = openai_selector();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let voice = selector.select_with_rng(None, true, &mut rng);
            assert!(selector.catalog().contains(&voice), "unexpected voice {}", voice);
        }
    }

    #[test]
    fn test_random_ignores_explicit_voice() {
        let catalog = VoiceCatalog::from_ids(["only"]).unwrap();
        let selector = VoiceSelector::new(catalog, "only");
        assert_eq!(selector.select(Some("someone-else"), true), "only");
    }

    #[test]
    fn test_single_voice_catalog_is_stable() {
        let catalog = VoiceCatalog::from_ids(["8ef4a238714b45718ce04243307c57a7"]).unwrap();
        let selector = VoiceSelector::new(catalog, "unused");
        let first = selector.select(None, true);
        let second = selector.select(None, true);
        assert_eq!(first, "8ef4a238714b45718ce04243307c57a7");
        assert_eq!(first, second);
    }

    #[test]
    fn test_default_voice_used_verbatim() {
        let selector = openai_selector();
        assert_eq!(selector.select(None, false), "alloy");
    }

    #[test]
    fn test_blank_explicit_voice_falls_back_to_default() {
        let selector = openai_selector();
        assert_eq!(selector.select(Some("   "), false), "alloy");
        assert_eq!(selector.select(Some(""), false), "alloy");
    }

    #[test]
    fn test_explicit_voice_is_lowercased() {
        let selector = openai_selector();
        assert_eq!(selector.select(Some("Nova"), false), "nova");
    }

    #[test]
    fn test_preserve_case_keeps_reference_id() {
        let catalog = VoiceCatalog::from_ids(["AbC"]).unwrap();
        let selector = VoiceSelector::new(catalog, "AbC");
        assert_eq!(selector.select(Some("XyZ"), false), "XyZ");
        assert_eq!(selector.select(None, false), "AbC");
    }

    #[test]
    fn test_random_covers_catalog() {
        let selector = openai_selector();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(selector.select_with_rng(None, true, &mut rng));
        }
        assert_eq!(seen.len(), selector.catalog().len());
    }
}
