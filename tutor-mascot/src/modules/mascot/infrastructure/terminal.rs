use std::io::{self, Write};

use crate::modules::chat::application::{ExchangeState, SessionSnapshot};
use crate::modules::chat::domain::{Message, SessionId};
use crate::modules::mascot::domain::{GazeOffset, MascotFace};

const HELP: &str = "\
commands:
  <text>            replace the pending input
  /query [text]     ask a standalone question
  /chat [text]      send a message in this session
  /mic              capture one utterance as pending input
  /look <x> <y>     move the pointer (0-100 on both axes)
  /health           probe the remote service
  /show             redraw the screen
  /help             show this help
  /quit             exit";

/// 终端渲染器
///
/// 把会话快照和吉祥物画到任意 `Write` 上
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn render_header(&mut self, session_id: &SessionId) -> io::Result<()> {
        writeln!(self.out, "=== tutor mascot · session {} ===", session_id)
    }

    pub fn render_face(&mut self, face: &MascotFace) -> io::Result<()> {
        let eye = eye(&face.gaze);
        writeln!(self.out, "{}", face.variant.brows())?;
        writeln!(self.out, " {} {}", eye, eye)?;
        writeln!(self.out, "   {}", face.mouth_glyph())?;

        write!(self.out, "emotion: {}", face.style_key())?;
        if face.speaking {
            write!(self.out, " • speaking...")?;
        }
        writeln!(self.out)?;

        if face.listening {
            writeln!(self.out, "listening...")?;
        }
        Ok(())
    }

    pub fn render_message(&mut self, message: &Message) -> io::Result<()> {
        writeln!(
            self.out,
            "{}: {}",
            message.role().as_str().to_uppercase(),
            message.content()
        )?;
        if !message.sources().is_empty() {
            writeln!(self.out, "  sources: {}", message.sources().join(", "))?;
        }
        Ok(())
    }

    pub fn render_status(&mut self, snapshot: &SessionSnapshot) -> io::Result<()> {
        if snapshot.state == ExchangeState::AwaitingResponse {
            writeln!(self.out, "(waiting for the tutor...)")?;
        }
        writeln!(self.out, "> {}", snapshot.pending_input)
    }

    /// 完整重绘
    pub fn render_snapshot(&mut self, snapshot: &SessionSnapshot, face: &MascotFace) -> io::Result<()> {
        writeln!(self.out)?;
        self.render_header(&snapshot.session_id)?;
        self.render_face(face)?;
        writeln!(self.out, "---")?;
        for message in &snapshot.messages {
            self.render_message(message)?;
        }
        writeln!(self.out, "---")?;
        self.render_status(snapshot)?;
        self.out.flush()
    }

    pub fn notice(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "! {}", text)?;
        self.out.flush()
    }

    pub fn render_help(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", HELP)?;
        self.out.flush()
    }
}

// 三格眼眶，瞳孔按视线左右移动，上下用不同字符表示
fn eye(gaze: &GazeOffset) -> String {
    let pupil = match gaze.row() {
        -1 => '°',
        1 => '.',
        _ => 'o',
    };
    let mut cells = [' '; 3];
    cells[(gaze.column() + 1) as usize] = pupil;
    format!("[{}{}{}]", cells[0], cells[1], cells[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::chat::application::ConversationSession;
    use crate::modules::chat::domain::EmotionTag;

    fn render(snapshot: &SessionSnapshot, face: &MascotFace) -> String {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.render_snapshot(snapshot, face).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_render_transcript_with_sources() {
        let mut session = ConversationSession::new(
            SessionId::from_string("abc123"),
            "",
            EmotionTag::default(),
        );
        let user = session.append_user("Explain a^2 + b^2 = c^2");
        session.append_assistant(
            user.exchange(),
            "Pythagoras...",
            vec!["wiki".to_string(), "book".to_string()],
            EmotionTag::new("excited"),
        );
        let face = MascotFace::new(EmotionTag::new("excited"), GazeOffset::centered(8.0));

        let output = render(&session.snapshot(), &face);
        assert!(output.contains("session abc123"));
        assert!(output.contains("USER: Explain a^2 + b^2 = c^2"));
        assert!(output.contains("ASSISTANT: Pythagoras..."));
        assert!(output.contains("sources: wiki, book"));
        assert!(output.contains("emotion: excited\n"));
    }

    #[test]
    fn test_render_speaking_and_listening() {
        let session = ConversationSession::new(SessionId::from_string("s"), "draft", EmotionTag::default());
        let mut face = MascotFace::new(EmotionTag::default(), GazeOffset::centered(8.0));
        face.speaking = true;
        face.listening = true;

        let output = render(&session.snapshot(), &face);
        assert!(output.contains("emotion: explaining • speaking..."));
        assert!(output.contains("listening..."));
        assert!(output.contains("> draft"));
        assert!(!output.contains("sources:"));
    }

    #[test]
    fn test_eye_follows_gaze() {
        assert_eq!(eye(&GazeOffset::centered(8.0)), "[ o ]");
        assert_eq!(eye(&GazeOffset::from_pointer(100.0, 50.0, 100.0, 100.0, 8.0)), "[  o]");
        assert_eq!(eye(&GazeOffset::from_pointer(0.0, 100.0, 100.0, 100.0, 8.0)), "[.  ]");
    }
}
