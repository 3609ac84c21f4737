use gtk4::pango;

use super::geometry::{Point, Rect};
use super::palette::Color;
use super::render::{DrawResult, Surface};

const FONT_FAMILY: &str = "Arial, Cantarell, Noto Sans, sans";

pub struct CairoSurface<'a> {
    cr: &'a cairo::Context,
}

impl<'a> CairoSurface<'a> {
    pub fn new(cr: &'a cairo::Context) -> Self {
        cr.set_antialias(cairo::Antialias::Best);
        CairoSurface { cr }
    }

    fn set_color(&self, color: Color) {
        let (red, green, blue, alpha) = color.components();
        self.cr.set_source_rgba(red, green, blue, alpha);
    }

    fn trace_rect(&self, rect: Rect) {
        self.cr.rectangle(rect.x, rect.y, rect.width, rect.height);
    }
}

impl Surface for CairoSurface<'_> {
    fn clear(&mut self, rect: Rect) -> DrawResult {
        self.cr.save()?;
        self.cr.set_operator(cairo::Operator::Clear);
        self.trace_rect(rect);
        self.cr.fill()?;
        self.cr.restore()
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> DrawResult {
        self.set_color(color);
        self.trace_rect(rect);
        self.cr.fill()
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) -> DrawResult {
        self.set_color(color);
        self.cr.set_line_width(1.0);
        self.trace_rect(rect);
        self.cr.stroke()
    }

    fn fill_text(&mut self, text: &str, anchor: Point, size_px: f64, color: Color) -> DrawResult {
        let layout = pangocairo::functions::create_layout(self.cr);
        let mut font_desc = pango::FontDescription::new();
        font_desc.set_family(FONT_FAMILY);
        font_desc.set_absolute_size(size_px * pango::SCALE as f64);
        layout.set_font_description(Some(&font_desc));
        layout.set_text(text);

        let (text_width, _) = layout.pixel_size();
        let baseline = layout.baseline() as f64 / pango::SCALE as f64;

        self.set_color(color);
        self.cr
            .move_to(anchor.x - text_width as f64 / 2.0, anchor.y - baseline);
        pangocairo::functions::show_layout(self.cr, &layout);
        Ok(())
    }

    fn fill_polygon(
        &mut self,
        origin: Point,
        rotation: f64,
        points: &[Point],
        color: Color,
    ) -> DrawResult {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };
        self.cr.save()?;
        self.cr.translate(origin.x, origin.y);
        self.cr.rotate(rotation);
        self.set_color(color);
        self.cr.move_to(first.x, first.y);
        for point in rest {
            self.cr.line_to(point.x, point.y);
        }
        self.cr.close_path();
        self.cr.fill()?;
        self.cr.restore()
    }
}
