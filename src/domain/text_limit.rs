//! 文本长度限制
//!
//! 每个 TTS 服务单次请求接受的字符数有上限，超出时在发送请求前拒绝。
//! 字符数按 Unicode 标量值计算，与服务端计数方式一致。

/// 文本超出服务的字符上限
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextTooLong {
    pub len: usize,
    pub max: usize,
}

/// 单次请求的字符上限
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLimit {
    max_chars: usize,
}

impl TextLimit {
    pub const fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// 校验文本长度，成功时返回字符数
    pub fn check(&self, text: &str) -> Result<usize, TextTooLong> {
        let len = text.chars().count();
        if len > self.max_chars {
            return Err(TextTooLong {
                len,
                max: self.max_chars,
            });
        }
        Ok(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_within_limit() {
        let limit = TextLimit::new(5);
        assert_eq!(limit.check("hello"), Ok(5));
        assert_eq!(limit.check(""), Ok(0));
    }

    #[test]
    fn test_text_over_limit() {
        let limit = TextLimit::new(4);
        assert_eq!(limit.check("hello"), Err(TextTooLong { len: 5, max: 4 }));
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        // 4 个汉字占 12 字节
        let limit = TextLimit::new(4);
        assert_eq!(limit.check("你好世界"), Ok(4));
    }
}
