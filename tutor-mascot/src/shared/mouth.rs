//! 口型帧 - 将朗读文本转换为吉祥物的口型序列
//!
//! 英文按字母映射元音口型，汉字先用 pinyin 转成拼音再取韵母

use pinyin::ToPinyin;

/// 口型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouthShape {
    /// 张大嘴
    A,
    /// 半开嘴
    E,
    /// 扁嘴
    I,
    /// 圆嘴
    O,
    /// 嘟嘴
    U,
    /// 闭嘴（停顿、标点、空白）
    #[default]
    Closed,
}

impl MouthShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            MouthShape::A => "A",
            MouthShape::E => "E",
            MouthShape::I => "I",
            MouthShape::O => "O",
            MouthShape::U => "U",
            MouthShape::Closed => "closed",
        }
    }

    /// 终端上的口型字符
    pub fn glyph(&self) -> &'static str {
        match self {
            MouthShape::A => "( D )",
            MouthShape::E => "( = )",
            MouthShape::I => "( - )",
            MouthShape::O => "( O )",
            MouthShape::U => "( o )",
            MouthShape::Closed => "( _ )",
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, MouthShape::Closed)
    }
}

/// 拼音（不带声调）映射到口型
fn syllable_to_shape(syllable: &str) -> MouthShape {
    let letters: String = syllable
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    if letters.starts_with("wu") || letters.starts_with('u') || letters.contains("ue") {
        MouthShape::U
    } else if letters.contains('a') {
        MouthShape::A
    } else if letters.starts_with('o') || letters.ends_with("ong") || letters.ends_with("ou") {
        MouthShape::O
    } else if letters.contains('e') && !letters.contains("ie") {
        MouthShape::E
    } else if letters.contains('i') || letters.starts_with('y') {
        MouthShape::I
    } else {
        MouthShape::A
    }
}

fn char_to_shape(c: char) -> Option<MouthShape> {
    if c.is_whitespace() || c.is_ascii_punctuation() || matches!(c, '，' | '。' | '！' | '？' | '、' | '；' | '：') {
        return Some(MouthShape::Closed);
    }

    match c.to_ascii_lowercase() {
        'a' => return Some(MouthShape::A),
        'e' => return Some(MouthShape::E),
        'i' | 'y' => return Some(MouthShape::I),
        'o' => return Some(MouthShape::O),
        'u' | 'w' => return Some(MouthShape::U),
        _ => {}
    }

    if c.is_ascii() {
        // 辅音不单独成帧
        return None;
    }

    c.to_pinyin()
        .map(|pinyin| syllable_to_shape(pinyin.plain()))
}

/// 将文本转换为口型帧序列，相邻重复帧合并
pub fn mouth_frames(text: &str) -> Vec<MouthShape> {
    let mut frames: Vec<MouthShape> = Vec::new();

    for shape in text.chars().filter_map(char_to_shape) {
        if frames.last() != Some(&shape) {
            frames.push(shape);
        }
    }

    // 以闭嘴结束
    if frames.last().is_some_and(MouthShape::is_open) {
        frames.push(MouthShape::Closed);
    }

    frames
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_vowels() {
        let frames = mouth_frames("Hello");
        assert_eq!(frames, vec![MouthShape::E, MouthShape::O, MouthShape::Closed]);
    }

    #[test]
    fn test_punctuation_closes_mouth() {
        assert_eq!(mouth_frames("。"), vec![MouthShape::Closed]);
        assert!(mouth_frames("").is_empty());

        let frames = mouth_frames("a, b");
        assert_eq!(frames, vec![MouthShape::A, MouthShape::Closed]);
    }

    #[test]
    fn test_chinese_finals() {
        let cases = [
            ("啊", MouthShape::A),
            ("哦", MouthShape::O),
            ("呃", MouthShape::E),
            ("衣", MouthShape::I),
            ("乌", MouthShape::U),
        ];

        for (text, expected) in cases {
            let frames = mouth_frames(text);
            assert_eq!(frames[0], expected, "unexpected shape for {text}: {frames:?}");
        }
    }

    #[test]
    fn test_glyphs_distinct() {
        let shapes = [
            MouthShape::A,
            MouthShape::E,
            MouthShape::I,
            MouthShape::O,
            MouthShape::U,
            MouthShape::Closed,
        ];
        let glyphs: std::collections::HashSet<_> = shapes.iter().map(MouthShape::glyph).collect();
        assert_eq!(glyphs.len(), shapes.len());
        assert_eq!(MouthShape::default().as_str(), "closed");
    }
}
