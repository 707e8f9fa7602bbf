// ============================================================================
// DRAWING PRIMITIVES
// ============================================================================

use rusttype::{point, Font, PositionedGlyph, Scale};

use crate::config::Color;
use crate::geometry::Point;

/// RGBA8 frame plus the font used for labels.
///
/// Without a font, text commands are skipped and everything else still draws.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
    font: Option<&'a Font<'static>>,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: usize, height: usize) -> Self {
        Self {
            frame,
            width,
            height,
            font: None,
        }
    }

    pub fn with_font(mut self, font: Option<&'a Font<'static>>) -> Self {
        self.font = font;
        self
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        self.frame
            .get(idx..idx + 3)
            .map(|px| Color::new(px[0], px[1], px[2]))
    }

    pub fn clear(&mut self, color: Color) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[color.r, color.g, color.b, 0xff]);
        }
    }

    fn blend(&mut self, x: i64, y: i64, color: Color, alpha: f64) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 4;
        let Some(dst) = self.frame.get_mut(idx..idx + 4) else {
            return;
        };
        let a = alpha.clamp(0.0, 1.0);
        let mix = |src: u8, dst: u8| (src as f64 * a + dst as f64 * (1.0 - a)).round() as u8;
        dst[0] = mix(color.r, dst[0]);
        dst[1] = mix(color.g, dst[1]);
        dst[2] = mix(color.b, dst[2]);
        dst[3] = 0xff;
    }

    /// Iterate pixel centers inside a bounding box, clipped to the frame.
    fn for_each_in(&mut self, min: Point, max: Point, mut f: impl FnMut(&mut Self, i64, i64)) {
        let x0 = (min.x.floor() as i64).max(0);
        let y0 = (min.y.floor() as i64).max(0);
        let x1 = (max.x.ceil() as i64).min(self.width as i64 - 1);
        let y1 = (max.y.ceil() as i64).min(self.height as i64 - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                f(self, x, y);
            }
        }
    }

    pub fn fill_disc(&mut self, center: Point, radius: f64, color: Color) {
        let pad = Point::new(radius + 1.0, radius + 1.0);
        self.for_each_in(center - pad, center + pad, |canvas, x, y| {
            let dist = (Point::new(x as f64 + 0.5, y as f64 + 0.5) - center).length();
            let aa = (radius - dist + 0.5).clamp(0.0, 1.0);
            if aa > 0.0 {
                canvas.blend(x, y, color, aa);
            }
        });
    }

    /// Ring whose outer edge sits on `radius`.
    pub fn stroke_ring(&mut self, center: Point, radius: f64, width: f64, color: Color) {
        let inner = radius - width;
        let pad = Point::new(radius + 1.0, radius + 1.0);
        self.for_each_in(center - pad, center + pad, |canvas, x, y| {
            let dist = (Point::new(x as f64 + 0.5, y as f64 + 0.5) - center).length();
            let aa = ((radius - dist + 0.5).min(dist - inner + 0.5)).clamp(0.0, 1.0);
            if aa > 0.0 {
                canvas.blend(x, y, color, aa);
            }
        });
    }

    /// Rectangle with square ends spanning `from`..`to`.
    pub fn fill_bar(&mut self, from: Point, to: Point, thickness: f64, color: Color) {
        let axis = to - from;
        let length = axis.length();
        if length <= f64::EPSILON {
            return;
        }
        let (ux, uy) = (axis.x / length, axis.y / length);
        let half = thickness / 2.0;
        let pad = half + 1.0;
        let min = Point::new(from.x.min(to.x) - pad, from.y.min(to.y) - pad);
        let max = Point::new(from.x.max(to.x) + pad, from.y.max(to.y) + pad);
        self.for_each_in(min, max, |canvas, x, y| {
            let p = Point::new(x as f64 + 0.5, y as f64 + 0.5) - from;
            let along = p.x * ux + p.y * uy;
            let across = (p.y * ux - p.x * uy).abs();
            let aa_along = (along.min(length - along) + 0.5).clamp(0.0, 1.0);
            let aa_across = (half - across + 0.5).clamp(0.0, 1.0);
            let aa = aa_along * aa_across;
            if aa > 0.01 {
                canvas.blend(x, y, color, aa);
            }
        });
    }

    /// Text centered on `center`.
    pub fn draw_text(&mut self, center: Point, text: &str, font_size: f64, color: Color) {
        let Some(font) = self.font else {
            return;
        };
        let scale = Scale::uniform(font_size as f32);
        let v_metrics = font.v_metrics(scale);
        let glyphs: Vec<PositionedGlyph> = font
            .layout(text, scale, point(0.0, v_metrics.ascent))
            .collect();

        // Bounding box for the whole string
        let Some((min_x, max_x, min_y, max_y)) = glyphs
            .iter()
            .filter_map(|g| g.pixel_bounding_box())
            .map(|bb| (bb.min.x, bb.max.x, bb.min.y, bb.max.y))
            .reduce(|a, b| (a.0.min(b.0), a.1.max(b.1), a.2.min(b.2), a.3.max(b.3)))
        else {
            return;
        };
        let offset_x = center.x.round() as i64 - ((max_x - min_x) / 2) as i64;
        let offset_y = center.y.round() as i64 - ((max_y - min_y) / 2) as i64;

        for glyph in &glyphs {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, v| {
                    let px = offset_x + (gx as i32 + bb.min.x - min_x) as i64;
                    let py = offset_y + (gy as i32 + bb.min.y - min_y) as i64;
                    self.blend(px, py, color, v as f64);
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::new(0xff, 0x00, 0x00);

    fn frame(width: usize, height: usize) -> Vec<u8> {
        vec![0; width * height * 4]
    }

    #[test]
    fn test_clear_sets_opaque_color() {
        let mut buf = frame(4, 3);
        let mut canvas = Canvas::new(&mut buf, 4, 3);
        canvas.clear(Color::new(1, 2, 3));
        assert_eq!(canvas.pixel(3, 2), Some(Color::new(1, 2, 3)));
        assert_eq!(canvas.pixel(4, 0), None);
        assert!(buf.chunks_exact(4).all(|px| px == [1, 2, 3, 0xff]));
    }

    #[test]
    fn test_disc_covers_center_not_corner() {
        let mut buf = frame(21, 21);
        let mut canvas = Canvas::new(&mut buf, 21, 21);
        canvas.clear(Color::BLACK);
        canvas.fill_disc(Point::new(10.5, 10.5), 5.0, RED);
        assert_eq!(canvas.pixel(10, 10), Some(RED));
        assert_eq!(canvas.pixel(0, 0), Some(Color::BLACK));
    }

    #[test]
    fn test_ring_leaves_middle_empty() {
        let mut buf = frame(41, 41);
        let mut canvas = Canvas::new(&mut buf, 41, 41);
        canvas.clear(Color::BLACK);
        canvas.stroke_ring(Point::new(20.5, 20.5), 18.0, 3.0, RED);
        assert_eq!(canvas.pixel(20, 20), Some(Color::BLACK));
        // (20 + 16.5) sits inside the stroke
        assert_eq!(canvas.pixel(36, 20), Some(RED));
    }

    #[test]
    fn test_bar_has_square_ends() {
        let mut buf = frame(30, 10);
        let mut canvas = Canvas::new(&mut buf, 30, 10);
        canvas.clear(Color::BLACK);
        canvas.fill_bar(Point::new(5.0, 5.0), Point::new(25.0, 5.0), 4.0, RED);
        assert_eq!(canvas.pixel(15, 4), Some(RED));
        assert_eq!(canvas.pixel(2, 4), Some(Color::BLACK));
        assert_eq!(canvas.pixel(27, 4), Some(Color::BLACK));
        assert_eq!(canvas.pixel(15, 0), Some(Color::BLACK));
    }

    #[test]
    fn test_shapes_clip_at_frame_edges() {
        let mut buf = frame(8, 8);
        let mut canvas = Canvas::new(&mut buf, 8, 8);
        canvas.fill_disc(Point::new(-3.0, 100.0), 50.0, RED);
        canvas.fill_bar(Point::new(-10.0, -10.0), Point::new(20.0, 20.0), 2.0, RED);
        assert_eq!(canvas.pixel(4, 4), Some(RED));
    }

    #[test]
    fn test_text_without_font_is_skipped() {
        let mut buf = frame(8, 8);
        let mut canvas = Canvas::new(&mut buf, 8, 8);
        canvas.clear(Color::BLACK);
        canvas.draw_text(Point::new(4.0, 4.0), "10", 12.0, RED);
        assert!(buf.chunks_exact(4).all(|px| px == [0, 0, 0, 0xff]));
    }
}
