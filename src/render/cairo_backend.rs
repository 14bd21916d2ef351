use std::f64::consts::{FRAC_PI_2, PI};
use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface, Operator};
use pango::FontDescription;

use crate::error::{VizError, VizResult};
use crate::render::{
    Color, LineStrokeStyle, PreparedSurface, RenderFrame, Renderer, TextHAlign, TextOrientation,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// The backing `ImageSurface` is allocated at the prepared surface's physical
/// pixel size and re-allocated whenever that size changes, which discards
/// prior content. Draw commands are issued in logical units under a density
/// scale transform so output stays crisp on high-density displays.
#[derive(Debug, Default)]
pub struct CairoRenderer {
    surface: Option<ImageSurface>,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    /// Backing store of the most recent non-degenerate clear or render.
    #[must_use]
    pub fn surface(&self) -> Option<&ImageSurface> {
        self.surface.as_ref()
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Exports the current backing store as a PNG file.
    pub fn write_png(&self, path: impl AsRef<Path>) -> VizResult<()> {
        let Some(surface) = self.surface.as_ref() else {
            return Err(VizError::InvalidData(
                "no rendered surface to export".to_owned(),
            ));
        };

        let mut file = File::create(path.as_ref())
            .map_err(|err| VizError::InvalidData(format!("failed to create png file: {err}")))?;
        surface
            .write_to_png(&mut file)
            .map_err(|err| VizError::InvalidData(format!("failed to write png: {err}")))?;
        Ok(())
    }

    /// Returns `false` when the prepared surface is degenerate and there is
    /// nothing to draw into.
    fn ensure_backing(&mut self, prepared: PreparedSurface) -> VizResult<bool> {
        if prepared.is_degenerate() {
            self.surface = None;
            return Ok(false);
        }

        let width = i32::try_from(prepared.physical_width()).map_err(|_| {
            VizError::InvalidData("surface width exceeds the cairo pixel limit".to_owned())
        })?;
        let height = i32::try_from(prepared.physical_height()).map_err(|_| {
            VizError::InvalidData("surface height exceeds the cairo pixel limit".to_owned())
        })?;

        let reusable = self
            .surface
            .as_ref()
            .is_some_and(|surface| surface.width() == width && surface.height() == height);
        if !reusable {
            let surface = ImageSurface::create(Format::ARgb32, width, height)
                .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
            self.surface = Some(surface);
        }

        Ok(true)
    }
}

impl Renderer for CairoRenderer {
    fn clear(&mut self, surface: &PreparedSurface) -> VizResult<()> {
        if !self.ensure_backing(*surface)? {
            return Ok(());
        }
        let Some(backing) = self.surface.as_ref() else {
            return Ok(());
        };

        let context = Context::new(backing)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        wipe(&context)
    }

    fn render(&mut self, frame: &RenderFrame) -> VizResult<()> {
        frame.validate()?;

        if !self.ensure_backing(frame.surface)? {
            self.last_stats = CairoRenderStats::default();
            return Ok(());
        }
        let Some(backing) = self.surface.as_ref() else {
            return Ok(());
        };

        let context = Context::new(backing)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.last_stats = draw_frame(&context, frame)?;
        Ok(())
    }
}

fn draw_frame(context: &Context, frame: &RenderFrame) -> VizResult<CairoRenderStats> {
    wipe(context)?;

    let density = frame.surface.density();
    context.scale(density, density);

    let mut stats = CairoRenderStats::default();

    for line in &frame.lines {
        apply_color(context, line.color);
        context.set_line_width(line.stroke_width);
        match line.style {
            LineStrokeStyle::Solid => context.set_dash(&[], 0.0),
            LineStrokeStyle::Dashed { dash_px, gap_px } => {
                context.set_dash(&[dash_px, gap_px], 0.0);
            }
        }
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
        stats.lines_drawn += 1;
    }
    context.set_dash(&[], 0.0);

    for rect in &frame.rects {
        apply_color(context, rect.fill_color);
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        stats.rects_drawn += 1;
    }

    for circle in &frame.circles {
        context.arc(circle.cx, circle.cy, circle.radius, 0.0, 2.0 * PI);
        apply_color(context, circle.fill_color);
        if circle.outline_width > 0.0 {
            context
                .fill_preserve()
                .map_err(|err| map_backend_error("failed to fill circle", err))?;
            apply_color(context, circle.outline_color);
            context.set_line_width(circle.outline_width);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke circle outline", err))?;
        } else {
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill circle", err))?;
        }
        stats.circles_drawn += 1;
    }

    for text in &frame.texts {
        let layout = pangocairo::functions::create_layout(context);
        let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, _text_height) = layout.pixel_size();
        let aligned_x = match text.h_align {
            TextHAlign::Left => 0.0,
            TextHAlign::Center => -f64::from(text_width) / 2.0,
            TextHAlign::Right => -f64::from(text_width),
        };

        apply_color(context, text.color);
        match text.orientation {
            TextOrientation::Horizontal => {
                context.move_to(text.x + aligned_x, text.y);
                pangocairo::functions::show_layout(context, &layout);
            }
            TextOrientation::RotatedLeft => {
                context
                    .save()
                    .map_err(|err| map_backend_error("failed to save context", err))?;
                context.translate(text.x, text.y);
                context.rotate(-FRAC_PI_2);
                context.move_to(aligned_x, 0.0);
                pangocairo::functions::show_layout(context, &layout);
                context
                    .restore()
                    .map_err(|err| map_backend_error("failed to restore context", err))?;
            }
        }
        stats.texts_drawn += 1;
    }

    Ok(stats)
}

fn wipe(context: &Context) -> VizResult<()> {
    context.set_operator(Operator::Clear);
    context
        .paint()
        .map_err(|err| map_backend_error("failed to clear surface", err))?;
    context.set_operator(Operator::Over);
    Ok(())
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> VizError {
    VizError::InvalidData(format!("{prefix}: {err}"))
}
