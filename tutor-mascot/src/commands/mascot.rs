// Mascot Commands

use std::io::Write;

use crate::commands::chat_snapshot;
use crate::infrastructure::AppState;
use crate::modules::mascot::{MascotFace, TerminalRenderer};
use crate::shared::AppResult;

/// 指针移动，只影响视线
pub async fn mascot_look(state: &AppState, x: f32, y: f32) -> MascotFace {
    let mut mascot = state.mascot.lock().await;
    mascot.look_at(x, y);
    mascot.face().clone()
}

/// 重绘整个界面，说话时顺带推进一帧口型
pub async fn mascot_render<W: Write>(
    state: &AppState,
    renderer: &mut TerminalRenderer<W>,
) -> AppResult<()> {
    let snapshot = chat_snapshot(state).await?;
    let face = {
        let mut mascot = state.mascot.lock().await;
        mascot.sync(
            &snapshot.emotion,
            state.speech.output().is_speaking(),
            state.speech.input().is_recognizing(),
        );
        mascot.advance_mouth();
        mascot.face().clone()
    };

    renderer.render_snapshot(&snapshot, &face)?;
    Ok(())
}
