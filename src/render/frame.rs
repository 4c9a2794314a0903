use serde::{Deserialize, Serialize};

use crate::core::PlotArea;
use crate::error::{ChartError, ChartResult};
use crate::render::{BandPrimitive, DrawCommand, LinePrimitive, RectPrimitive, TextPrimitive};

/// Per-kind command totals of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrameStats {
    pub rects: usize,
    pub segments: usize,
    pub bands: usize,
    pub texts: usize,
}

/// Backend-agnostic ordered draw list for one chart.
///
/// Commands are painted in insertion order, later ones on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub area: PlotArea,
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(area: PlotArea) -> Self {
        Self {
            area,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn push_rect(&mut self, rect: RectPrimitive) {
        self.push(DrawCommand::FillRect(rect));
    }

    pub fn push_line(&mut self, line: LinePrimitive) {
        self.push(DrawCommand::DrawSegment(line));
    }

    pub fn push_band(&mut self, band: BandPrimitive) {
        self.push(DrawCommand::DrawBand(band));
    }

    pub fn push_text(&mut self, text: TextPrimitive) {
        self.push(DrawCommand::DrawText(text));
    }

    #[must_use]
    pub fn stats(&self) -> FrameStats {
        self.commands
            .iter()
            .fold(FrameStats::default(), |mut stats, command| {
                match command {
                    DrawCommand::FillRect(_) => stats.rects += 1,
                    DrawCommand::DrawSegment(_) => stats.segments += 1,
                    DrawCommand::DrawBand(_) => stats.bands += 1,
                    DrawCommand::DrawText(_) => stats.texts += 1,
                }
                stats
            })
    }

    pub fn segments(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::DrawSegment(line) => Some(line),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::DrawText(text) => Some(text),
            _ => None,
        })
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.area.is_valid() {
            return Err(ChartError::InvalidConfig(format!(
                "frame area {}x{} with padding {} is not drawable",
                self.area.width, self.area.height, self.area.padding
            )));
        }
        for command in &self.commands {
            command.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Serializes the draw list to pretty JSON for debugging.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize frame: {e}")))
    }
}
