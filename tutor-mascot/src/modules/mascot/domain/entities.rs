// Mascot Entities

use serde::Serialize;

use super::value_objects::{GazeOffset, MascotVariant};
use crate::modules::chat::domain::EmotionTag;
use crate::shared::MouthShape;

/// 吉祥物渲染模型
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MascotFace {
    pub emotion: EmotionTag,
    pub variant: MascotVariant,
    pub speaking: bool,
    pub listening: bool,
    pub gaze: GazeOffset,
    #[serde(skip)]
    pub mouth: MouthShape,
}

impl MascotFace {
    pub fn new(emotion: EmotionTag, gaze: GazeOffset) -> Self {
        Self {
            variant: MascotVariant::from_emotion(&emotion),
            emotion,
            speaking: false,
            listening: false,
            gaze,
            mouth: MouthShape::Closed,
        }
    }

    /// 样式键，即原始情感标签
    pub fn style_key(&self) -> &str {
        self.emotion.as_str()
    }

    pub fn mouth_glyph(&self) -> &'static str {
        if self.speaking {
            self.mouth.glyph()
        } else {
            self.variant.resting_mouth()
        }
    }
}
