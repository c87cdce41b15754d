//! Drawing primitives layered on [`Canvas`] pixel access.
//!
//! Everything here goes through [`Canvas::set`], so clipping falls out of the
//! permissive out-of-bounds policy and none of these operations can fail.

use crate::canvas::Canvas;
use crate::pixel::Rgba;

impl Canvas {
    /// Set every pixel to `color`.
    pub fn clear(&mut self, color: Rgba) {
        for x in 0..self.width() as i32 {
            for y in 0..self.height() as i32 {
                self.set(x, y, color);
            }
        }
    }

    /// Fill the rectangle `[x, x+w) x [y, y+h)` with `color`.
    ///
    /// Pixels outside the canvas are dropped by [`Canvas::set`]. A
    /// non-positive `w` or `h` is an empty region, not an error.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
        for i in 0..w {
            for j in 0..h {
                self.set(x.saturating_add(i), y.saturating_add(j), color);
            }
        }
    }

    /// Draw a straight line from `(x1, y1)` to `(x2, y2)` by fixed-step
    /// interpolation, stamping a `thickness x thickness` square (top-left
    /// corner at the cursor) at each step.
    ///
    /// The start point itself is not stamped, and the whole line stops the
    /// first time the interpolation cursor leaves `[0, width] x [0, height]`
    /// on either axis; squares already stamped are kept. A zero-length line
    /// draws nothing.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, thickness: i32, color: Rgba) {
        let dx = (i64::from(x2) - i64::from(x1)) as f64;
        let dy = (i64::from(y2) - i64::from(y1)) as f64;
        let steps = dx.abs().max(dy.abs());

        let mut cx = f64::from(x1);
        let mut cy = f64::from(y1);

        for _ in 0..steps as i64 {
            cx += dx / steps;
            cy += dy / steps;
            if cx < 0.0 || cy < 0.0 || cx > f64::from(self.width()) || cy > f64::from(self.height())
            {
                return;
            }
            self.fill_rect(cx as i32, cy as i32, thickness, thickness, color);
        }
    }
}
