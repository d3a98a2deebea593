//! Drawing primitives
//!
//! Every primitive is provided by the [`Draw`] extension trait, which is
//! implemented for all [`Surface`] types. The algorithms only use
//! [`Surface::set_pixel`], so they never depend on buffer layout. Callers
//! need no pre-checks: pixels that land outside the surface are dropped by
//! the surface itself, and the loops skip runs that cannot reach it.
//!
//! Line lengths are inclusive. A horizontal line of length `0` draws one
//! pixel, a line of length `L` draws `L + 1` pixels. Rectangles are also
//! inclusive of their `max` corner.
//!
//! ## Example
//!
//! ```
//! use epd_mono::{Canvas, Color, Draw, Point, Rect};
//!
//! let mut canvas = match Canvas::new(16, 16) {
//!     Ok(canvas) => canvas,
//!     Err(_) => return,
//! };
//! canvas.clear(Color::White);
//! canvas.fill_rect(Color::Black, Rect::new(Point::new(4, 4), Point::new(11, 11)));
//! canvas.draw_line(Color::White, Point::new(0, 0), Point::new(15, 15));
//!
//! assert_eq!(canvas.get(4, 11), Some(Color::Black));
//! assert_eq!(canvas.get(5, 5), Some(Color::White));
//! ```

use crate::canvas::Surface;
use crate::color::Color;

/// Integer pixel coordinate
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl core::ops::Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

/// Axis-aligned rectangle with inclusive corners
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Top-left corner
    pub min: Point,
    /// Bottom-right corner (inclusive)
    pub max: Point,
}

impl Rect {
    /// Create a rectangle spanning two opposite corners in any order
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Shrink by `by` pixels on every side
    ///
    /// Returns `None` when nothing is left.
    pub fn inset(self, by: i32) -> Option<Self> {
        let min = Point::new(self.min.x.saturating_add(by), self.min.y.saturating_add(by));
        let max = Point::new(self.max.x.saturating_sub(by), self.max.y.saturating_sub(by));
        (min.x <= max.x && min.y <= max.y).then_some(Self { min, max })
    }
}

/// Clamp an inclusive run `[start, start + length]` to `[0, limit)`
fn clamp_run(start: i32, length: u32, limit: u32) -> Option<(i32, i32)> {
    let end = i64::from(start) + i64::from(length);
    let first = i64::from(start).max(0);
    let last = end.min(i64::from(limit) - 1);
    (first <= last).then_some((first as i32, last as i32))
}

/// Drawing primitives for any [`Surface`]
pub trait Draw: Surface {
    /// Draw `length + 1` pixels to the right of `start`, `start` included
    fn draw_horizontal_line(&mut self, color: Color, start: Point, length: u32) {
        if start.y < 0 || i64::from(start.y) >= i64::from(self.height()) {
            return;
        }
        if let Some((first, last)) = clamp_run(start.x, length, self.width()) {
            for x in first..=last {
                self.set_pixel(x, start.y, color);
            }
        }
    }

    /// Draw `length + 1` pixels downwards from `start`, `start` included
    fn draw_vertical_line(&mut self, color: Color, start: Point, length: u32) {
        if start.x < 0 || i64::from(start.x) >= i64::from(self.width()) {
            return;
        }
        if let Some((first, last)) = clamp_run(start.y, length, self.height()) {
            for y in first..=last {
                self.set_pixel(start.x, y, color);
            }
        }
    }

    /// Draw a straight line between two points, both endpoints included
    ///
    /// Uses Bresenham's algorithm. Shallow lines (`|dy| <= |dx|`) step along
    /// x, steep lines step along y. Endpoints are normalized so the driving
    /// axis always increases, which makes the result independent of the
    /// argument order.
    fn draw_line(&mut self, color: Color, p0: Point, p1: Point) {
        let dx = (i64::from(p1.x) - i64::from(p0.x)).abs();
        let dy = (i64::from(p1.y) - i64::from(p0.y)).abs();
        if dy <= dx {
            if p0.x > p1.x {
                line_low(self, color, p1, p0);
            } else {
                line_low(self, color, p0, p1);
            }
        } else if p0.y > p1.y {
            line_high(self, color, p1, p0);
        } else {
            line_high(self, color, p0, p1);
        }
    }

    /// Draw the outline of a rectangle
    fn stroke_rect(&mut self, color: Color, rect: Rect) {
        let Some((width, height)) = rect_extent(rect) else {
            return;
        };
        self.draw_horizontal_line(color, rect.min, width);
        self.draw_horizontal_line(color, Point::new(rect.min.x, rect.max.y), width);
        self.draw_vertical_line(color, rect.min, height);
        self.draw_vertical_line(color, Point::new(rect.max.x, rect.min.y), height);
    }

    /// Fill a rectangle, both corners included
    fn fill_rect(&mut self, color: Color, rect: Rect) {
        let Some((width, _)) = rect_extent(rect) else {
            return;
        };
        let top = rect.min.y.max(0);
        let bottom = i64::from(rect.max.y).min(i64::from(self.height()) - 1);
        if i64::from(top) > bottom {
            return;
        }
        for y in top..=bottom as i32 {
            self.draw_horizontal_line(color, Point::new(rect.min.x, y), width);
        }
    }

    /// Draw the outline of a circle with the midpoint circle algorithm
    fn stroke_circle(&mut self, color: Color, center: Point, radius: u32) {
        let mut x = i64::from(radius);
        let mut y = 0i64;
        let mut err = 1 - x;
        let (cx, cy) = (i64::from(center.x), i64::from(center.y));

        while x >= y {
            for (px, py) in [
                (cx + x, cy + y),
                (cx + y, cy + x),
                (cx - y, cy + x),
                (cx - x, cy + y),
                (cx - x, cy - y),
                (cx - y, cy - x),
                (cx + y, cy - x),
                (cx + x, cy - y),
            ] {
                plot(self, color, px, py);
            }
            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }

    /// Fill a circle: every point with `dx² + dy² <= radius²`
    ///
    /// Only offsets that can land on the surface are visited, so the cost is
    /// bounded by the surface area whatever the radius.
    fn fill_circle(&mut self, color: Color, center: Point, radius: u32) {
        let r = u64::from(radius);
        let Some((dx_first, dx_last)) = offset_span(center.x, self.width(), r) else {
            return;
        };
        let Some((dy_first, dy_last)) = offset_span(center.y, self.height(), r) else {
            return;
        };
        let (cx, cy) = (i64::from(center.x), i64::from(center.y));
        for dx in dx_first..=dx_last {
            // dx <= r, so neither square nor the difference can overflow
            let budget = r * r - dx * dx;
            for dy in dy_first..=dy_last {
                if dy * dy > budget {
                    break;
                }
                let (dx, dy) = (dx as i64, dy as i64);
                plot(self, color, cx + dx, cy + dy);
                plot(self, color, cx - dx, cy + dy);
                plot(self, color, cx + dx, cy - dy);
                plot(self, color, cx - dx, cy - dy);
            }
        }
    }
}

impl<S: Surface + ?Sized> Draw for S {}

/// Width and height of a rectangle as inclusive line lengths
fn rect_extent(rect: Rect) -> Option<(u32, u32)> {
    let width = i64::from(rect.max.x) - i64::from(rect.min.x);
    let height = i64::from(rect.max.y) - i64::from(rect.min.y);
    (width >= 0 && height >= 0).then_some((width as u32, height as u32))
}

/// Forward a 64-bit coordinate, dropping anything that cannot be a pixel
fn plot<S: Surface + ?Sized>(surface: &mut S, color: Color, x: i64, y: i64) {
    if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
        surface.set_pixel(x, y, color);
    }
}

/// Offsets `d <= radius` for which `center + d` or `center - d` lies in `[0, limit)`
fn offset_span(center: i32, limit: u32, radius: u64) -> Option<(u64, u64)> {
    if limit == 0 {
        return None;
    }
    let center = i64::from(center);
    let last_pixel = i64::from(limit) - 1;
    let near = if center < 0 {
        center.unsigned_abs()
    } else if center > last_pixel {
        (center - last_pixel).unsigned_abs()
    } else {
        0
    };
    let far = center.unsigned_abs().max((last_pixel - center).unsigned_abs());
    let far = far.min(radius);
    (near <= far).then_some((near, far))
}

/// Steps `k` of a run `start + k`, `k` in `[0, delta]`, that land in `[0, limit)`
fn visible_steps(start: i32, delta: i64, limit: u32) -> Option<(i64, i64)> {
    let start = i64::from(start);
    let first = (-start).max(0);
    let last = delta.min(i64::from(limit) - 1 - start);
    (first <= last).then_some((first, last))
}

/// Bresenham state after `k` steps along the driving axis
///
/// Returns the number of minor-axis increments taken so far and the decision
/// variable, exactly as if the stepper had run from step 0. Requires
/// `minor <= major` and `k <= major`.
fn resume_at(k: i64, major: i64, minor: i64) -> (i64, i64) {
    if k == 0 {
        return (0, 2 * minor - major);
    }
    let (k, major, minor) = (i128::from(k), i128::from(major), i128::from(minor));
    // Smallest m with 2 * major * m >= 2 * k * minor - major
    let threshold = 2 * k * minor - major;
    let taken = -((-threshold).div_euclid(2 * major));
    let err = 2 * (k + 1) * minor - major - 2 * major * taken;
    (taken as i64, err as i64)
}

/// Bresenham stepper driven by x, requires `a.x <= b.x`
///
/// Steps outside the surface columns are skipped without being walked.
fn line_low<S: Surface + ?Sized>(surface: &mut S, color: Color, a: Point, b: Point) {
    let dx = i64::from(b.x) - i64::from(a.x);
    let mut dy = i64::from(b.y) - i64::from(a.y);
    let step = if dy < 0 { -1 } else { 1 };
    dy = dy.abs();

    let Some((first, last)) = visible_steps(a.x, dx, surface.width()) else {
        return;
    };
    let (taken, mut err) = resume_at(first, dx, dy);
    let mut y = i64::from(a.y) + step * taken;
    for k in first..=last {
        plot(surface, color, i64::from(a.x) + k, y);
        if err > 0 {
            y += step;
            err -= 2 * dx;
        }
        err += 2 * dy;
    }
}

/// Bresenham stepper driven by y, requires `a.y <= b.y`
///
/// Steps outside the surface rows are skipped without being walked.
fn line_high<S: Surface + ?Sized>(surface: &mut S, color: Color, a: Point, b: Point) {
    let mut dx = i64::from(b.x) - i64::from(a.x);
    let dy = i64::from(b.y) - i64::from(a.y);
    let step = if dx < 0 { -1 } else { 1 };
    dx = dx.abs();

    let Some((first, last)) = visible_steps(a.y, dy, surface.height()) else {
        return;
    };
    let (taken, mut err) = resume_at(first, dy, dx);
    let mut x = i64::from(a.x) + step * taken;
    for k in first..=last {
        plot(surface, color, x, i64::from(a.y) + k);
        if err > 0 {
            x += step;
            err -= 2 * dy;
        }
        err += 2 * dx;
    }
}
