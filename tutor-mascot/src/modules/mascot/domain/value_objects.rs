// Mascot Value Objects
//
// 吉祥物外观相关的值对象

use serde::Serialize;

use crate::modules::chat::domain::{EmotionTag, KnownEmotion};

/// 吉祥物外观变体
///
/// 情感标签是开放的字符串；已知标签对应专门的表情，其余一律使用默认表情
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MascotVariant {
    Explaining,
    Happy,
    Thinking,
    Excited,
    #[default]
    Default,
}

impl MascotVariant {
    pub fn from_emotion(emotion: &EmotionTag) -> Self {
        match emotion.known() {
            Some(KnownEmotion::Explaining) => MascotVariant::Explaining,
            Some(KnownEmotion::Happy) => MascotVariant::Happy,
            Some(KnownEmotion::Thinking) => MascotVariant::Thinking,
            Some(KnownEmotion::Excited) => MascotVariant::Excited,
            None => MascotVariant::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MascotVariant::Explaining => "explaining",
            MascotVariant::Happy => "happy",
            MascotVariant::Thinking => "thinking",
            MascotVariant::Excited => "excited",
            MascotVariant::Default => "default",
        }
    }

    /// 眉毛
    pub fn brows(&self) -> &'static str {
        match self {
            MascotVariant::Explaining => "  -     -  ",
            MascotVariant::Happy => "  ^     ^  ",
            MascotVariant::Thinking => "  ~     -  ",
            MascotVariant::Excited => "  \\     /  ",
            MascotVariant::Default => "           ",
        }
    }

    /// 不说话时的嘴
    pub fn resting_mouth(&self) -> &'static str {
        match self {
            MascotVariant::Explaining => "( - )",
            MascotVariant::Happy => "\\___/",
            MascotVariant::Thinking => "( ~ )",
            MascotVariant::Excited => "\\_O_/",
            MascotVariant::Default => "( _ )",
        }
    }
}

/// 视线偏移
///
/// 纯装饰，由指针位置换算，不影响会话状态
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct GazeOffset {
    pub dx: f32,
    pub dy: f32,
    pub amplitude: f32,
}

impl GazeOffset {
    pub fn centered(amplitude: f32) -> Self {
        Self {
            dx: 0.0,
            dy: 0.0,
            amplitude,
        }
    }

    /// 指针在区域内的位置换算为偏移：(比例 - 0.5) * 幅度
    pub fn from_pointer(x: f32, y: f32, width: f32, height: f32, amplitude: f32) -> Self {
        Self {
            dx: (fraction(x, width) - 0.5) * amplitude,
            dy: (fraction(y, height) - 0.5) * amplitude,
            amplitude,
        }
    }

    /// 瞳孔在眼眶内的列，-1 / 0 / 1
    pub fn column(&self) -> i8 {
        step(self.dx, self.amplitude)
    }

    /// 瞳孔在眼眶内的行，-1 / 0 / 1
    pub fn row(&self) -> i8 {
        step(self.dy, self.amplitude)
    }
}

fn fraction(position: f32, extent: f32) -> f32 {
    if extent <= 0.0 || !position.is_finite() {
        return 0.5;
    }
    (position / extent).clamp(0.0, 1.0)
}

// 超过幅度的四分之一才移动一格
fn step(offset: f32, amplitude: f32) -> i8 {
    let threshold = amplitude.abs() / 4.0;
    if threshold == 0.0 {
        0
    } else if offset > threshold {
        1
    } else if offset < -threshold {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_from_emotion() {
        assert_eq!(
            MascotVariant::from_emotion(&EmotionTag::new("excited")),
            MascotVariant::Excited
        );
        assert_eq!(
            MascotVariant::from_emotion(&EmotionTag::new("thinking")),
            MascotVariant::Thinking
        );
        // 大小写不做转换
        assert_eq!(
            MascotVariant::from_emotion(&EmotionTag::new("Happy")),
            MascotVariant::Default
        );
        assert_eq!(
            MascotVariant::from_emotion(&EmotionTag::new("confused")),
            MascotVariant::Default
        );
        assert_eq!(
            MascotVariant::from_emotion(&EmotionTag::new("")),
            MascotVariant::Default
        );
    }

    #[test]
    fn test_gaze_from_pointer() {
        let gaze = GazeOffset::from_pointer(100.0, 25.0, 100.0, 100.0, 8.0);
        assert_eq!(gaze.dx, 4.0);
        assert_eq!(gaze.dy, -2.0);

        let centered = GazeOffset::from_pointer(50.0, 50.0, 100.0, 100.0, 8.0);
        assert_eq!(centered, GazeOffset::centered(8.0));
    }

    #[test]
    fn test_gaze_clamps_outside_pointer() {
        let gaze = GazeOffset::from_pointer(-40.0, 500.0, 100.0, 100.0, 8.0);
        assert_eq!(gaze.dx, -4.0);
        assert_eq!(gaze.dy, 4.0);

        let empty_area = GazeOffset::from_pointer(10.0, 10.0, 0.0, 0.0, 8.0);
        assert_eq!(empty_area.dx, 0.0);
        assert_eq!(empty_area.dy, 0.0);
    }

    #[test]
    fn test_gaze_cells() {
        let gaze = GazeOffset::from_pointer(100.0, 50.0, 100.0, 100.0, 8.0);
        assert_eq!((gaze.column(), gaze.row()), (1, 0));

        let gaze = GazeOffset::from_pointer(0.0, 0.0, 100.0, 100.0, 8.0);
        assert_eq!((gaze.column(), gaze.row()), (-1, -1));

        assert_eq!(GazeOffset::from_pointer(0.0, 0.0, 100.0, 100.0, 0.0).column(), 0);
    }
}
