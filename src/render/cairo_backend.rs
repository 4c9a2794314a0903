use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use cairo::{Antialias, Context, Format, ImageSurface, Operator};
use pango::FontDescription;
use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, DrawCommand, FrameStats, RectPrimitive, RenderFrame, Renderer, TextHAlign,
};

/// Offscreen Cairo + Pango renderer encoding to PNG.
///
/// `render` paints into an ARGB32 image surface; `commit` encodes it to a
/// temporary file and renames it into place, so a failed write never leaves
/// a truncated chart at the destination.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    last_stats: FrameStats,
}

impl CairoRenderer {
    pub fn new(width: u32, height: u32) -> ChartResult<Self> {
        let (Ok(width), Ok(height)) = (i32::try_from(width), i32::try_from(height)) else {
            return Err(ChartError::Backend(
                "cairo surface size overflows i32".to_owned(),
            ));
        };
        if width <= 0 || height <= 0 {
            return Err(ChartError::Backend(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            last_stats: FrameStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    /// Encodes the rendered surface as PNG at `path`.
    pub fn commit(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let staging = path.with_extension("png.partial");
        let written = File::create(&staging)
            .map_err(ChartError::from)
            .and_then(|file| {
                let mut writer = BufWriter::new(file);
                self.surface.write_to_png(&mut writer).map_err(|err| {
                    ChartError::Backend(format!("failed to encode png: {err}"))
                })?;
                writer.flush().map_err(ChartError::from)
            });
        if let Err(err) = written {
            let _ = fs::remove_file(&staging);
            return Err(err);
        }

        fs::rename(&staging, path)?;
        debug!(path = %path.display(), "committed chart png");
        Ok(())
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        context.set_antialias(Antialias::None);

        context.set_operator(Operator::Source);
        apply_color(context, Color::TRANSPARENT);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        context.set_operator(Operator::Over);

        for command in &frame.commands {
            match command {
                DrawCommand::FillRect(rect) => draw_rect(context, *rect)?,
                DrawCommand::DrawSegment(line) => {
                    apply_color(context, line.color);
                    context.set_line_width(line.stroke_width);
                    context.move_to(line.x1 + 0.5, line.y1 + 0.5);
                    context.line_to(line.x2 + 0.5, line.y2 + 0.5);
                    context
                        .stroke()
                        .map_err(|err| map_backend_error("failed to stroke line", err))?;
                }
                DrawCommand::DrawBand(band) => {
                    for pixel in &band.pixels {
                        apply_color(context, pixel.color);
                        context.rectangle(f64::from(band.x), f64::from(pixel.y), 1.0, 1.0);
                        context
                            .fill()
                            .map_err(|err| map_backend_error("failed to fill band pixel", err))?;
                    }
                }
                DrawCommand::DrawText(text) => {
                    let layout = pangocairo::functions::create_layout(context);
                    let font_description =
                        FontDescription::from_string(&format!("Sans {}", text.font_size_px));
                    layout.set_font_description(Some(&font_description));
                    layout.set_text(&text.text);

                    let (text_width, _text_height) = layout.pixel_size();
                    let x = match text.h_align {
                        TextHAlign::Left => text.x,
                        TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                        TextHAlign::Right => text.x - f64::from(text_width),
                    };

                    apply_color(context, text.color);
                    context.move_to(x, text.y);
                    pangocairo::functions::show_layout(context, &layout);
                }
            }
        }

        self.last_stats = frame.stats();
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn draw_rect(context: &Context, rect: RectPrimitive) -> ChartResult<()> {
    context.rectangle(rect.x, rect.y, rect.width, rect.height);
    apply_color(context, rect.fill_color);
    if rect.border_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        apply_color(context, rect.border_color);
        context.set_line_width(rect.border_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke rectangle border", err))
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
