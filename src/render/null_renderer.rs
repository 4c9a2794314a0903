use crate::error::ChartResult;
use crate::render::{FrameStats, RenderFrame, Renderer};

/// No-op renderer used by tests and headless runs.
///
/// It still validates frame content so invalid geometry is caught without a
/// real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_stats: FrameStats,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_stats = frame.stats();
        self.frames_rendered += 1;
        Ok(())
    }
}
