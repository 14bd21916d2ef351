use crate::error::VizResult;
use crate::render::{PreparedSurface, RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub clears: usize,
    pub last_line_count: usize,
    pub last_rect_count: usize,
    pub last_circle_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn clear(&mut self, _surface: &PreparedSurface) -> VizResult<()> {
        self.clears += 1;
        Ok(())
    }

    fn render(&mut self, frame: &RenderFrame) -> VizResult<()> {
        frame.validate()?;
        self.clear(&frame.surface)?;
        self.last_line_count = frame.lines.len();
        self.last_rect_count = frame.rects.len();
        self.last_circle_count = frame.circles.len();
        self.last_text_count = frame.texts.len();
        Ok(())
    }
}
