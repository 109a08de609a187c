//! Rectangle and melee-arc geometry
//!
//! Every actor carries two integer rectangles: the sprite bound the renderer
//! blits and a smaller hitbox used for gameplay. Positions are simulated in
//! floating point and the rectangles are derived from them once per tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned integer rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    /// Always >= 0
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            x,
            y,
            w: w.max(0),
            h: h.max(0),
        }
    }

    /// Rectangle of the given size centered on a float position
    pub fn from_center(center: Vec2, w: i32, h: i32) -> Self {
        let mut rect = Self::new(0, 0, w, h);
        rect.set_center(center);
        rect
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[inline]
    pub fn centerx(&self) -> i32 {
        self.x + self.w / 2
    }

    #[inline]
    pub fn centery(&self) -> i32 {
        self.y + self.h / 2
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.centerx() as f32, self.centery() as f32)
    }

    /// Move so the center lands on `center` (truncated to whole pixels)
    pub fn set_center(&mut self, center: Vec2) {
        self.x = center.x as i32 - self.w / 2;
        self.y = center.y as i32 - self.h / 2;
    }

    /// Same center, size scaled per axis
    pub fn scale_by(&self, sx: f32, sy: f32) -> Self {
        let w = (self.w as f32 * sx) as i32;
        let h = (self.h as f32 * sy) as i32;
        let mut scaled = Self::new(0, 0, w, h);
        scaled.x = self.centerx() - scaled.w / 2;
        scaled.y = self.centery() - scaled.h / 2;
        scaled
    }

    /// True when the two rectangles share interior area. Empty rectangles
    /// never collide.
    pub fn colliderect(&self, other: &Rect) -> bool {
        if self.w == 0 || self.h == 0 || other.w == 0 || other.h == 0 {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Point of the rectangle nearest to `p`
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.x as f32, self.right() as f32),
            p.y.clamp(self.y as f32, self.bottom() as f32),
        )
    }

    pub fn corners(&self) -> [Vec2; 4] {
        let (l, r) = (self.x as f32, self.right() as f32);
        let (t, b) = (self.y as f32, self.bottom() as f32);
        [Vec2::new(l, t), Vec2::new(r, t), Vec2::new(r, b), Vec2::new(l, b)]
    }

    /// Segment-vs-rectangle test (Liang-Barsky clipping)
    pub fn intersects_segment(&self, a: Vec2, b: Vec2) -> bool {
        let d = b - a;
        let mut t0 = 0.0_f32;
        let mut t1 = 1.0_f32;
        let checks = [
            (-d.x, a.x - self.x as f32),
            (d.x, self.right() as f32 - a.x),
            (-d.y, a.y - self.y as f32),
            (d.y, self.bottom() as f32 - a.y),
        ];
        for (p, q) in checks {
            if p == 0.0 {
                if q < 0.0 {
                    return false;
                }
                continue;
            }
            let t = q / p;
            if p < 0.0 {
                t0 = t0.max(t);
            } else {
                t1 = t1.min(t);
            }
            if t0 > t1 {
                return false;
            }
        }
        true
    }
}

/// Quarter-circle melee sector in front of the player
///
/// Screen space: +x right, +y down. `direction` is the unit vector the
/// sector opens toward; the sector spans ±45° around it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwingArc {
    pub center: Vec2,
    pub radius: f32,
    pub direction: Vec2,
}

impl SwingArc {
    /// Half of the sector's angular width
    pub const HALF_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    pub fn new(center: Vec2, radius: f32, direction: Vec2) -> Self {
        Self {
            center,
            radius,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        let offset = p - self.center;
        let dist = offset.length();
        if dist > self.radius {
            return false;
        }
        if dist == 0.0 {
            return true;
        }
        offset.dot(self.direction) / dist >= Self::HALF_ANGLE.cos() - 1e-6
    }

    /// The two straight edges of the sector as (start, end) segments
    pub fn edges(&self) -> [(Vec2, Vec2); 2] {
        let left = Vec2::from_angle(-Self::HALF_ANGLE).rotate(self.direction);
        let right = Vec2::from_angle(Self::HALF_ANGLE).rotate(self.direction);
        [
            (self.center, self.center + left * self.radius),
            (self.center, self.center + right * self.radius),
        ]
    }

    /// Sector-vs-rectangle overlap.
    ///
    /// Overlap happens iff a rect corner lies in the sector, a straight sector
    /// edge crosses the rect, or the rect point nearest the center lies in
    /// the sector (covers the rect touching only the curved boundary).
    pub fn overlaps_rect(&self, rect: &Rect) -> bool {
        if rect.w == 0 || rect.h == 0 {
            return false;
        }
        if self.contains_point(rect.closest_point(self.center)) {
            return true;
        }
        if rect.corners().iter().any(|&c| self.contains_point(c)) {
            return true;
        }
        self.edges()
            .iter()
            .any(|&(a, b)| rect.intersects_segment(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
        assert_eq!(r.centerx(), 25);
        assert_eq!(r.centery(), 40);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn test_negative_size_clamped() {
        let r = Rect::new(0, 0, -5, 10);
        assert_eq!(r.w, 0);
        assert!(!r.colliderect(&Rect::new(0, 0, 10, 10)));
    }

    #[test]
    fn test_from_center_and_scale() {
        let r = Rect::from_center(Vec2::new(100.0, 100.0), 128, 128);
        assert_eq!(r.x, 36);
        assert_eq!(r.center(), Vec2::new(100.0, 100.0));
        let hb = r.scale_by(0.55, 0.75);
        assert_eq!(hb.w, 70);
        assert_eq!(hb.h, 96);
        assert_eq!(hb.center(), r.center());
    }

    #[test]
    fn test_colliderect_edges_touching() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.colliderect(&Rect::new(5, 5, 10, 10)));
        // Sharing an edge is not an overlap
        assert!(!a.colliderect(&Rect::new(10, 0, 10, 10)));
        assert!(!a.colliderect(&Rect::new(0, 20, 10, 10)));
    }

    #[test]
    fn test_segment_intersection() {
        let r = Rect::new(10, 10, 10, 10);
        assert!(r.intersects_segment(Vec2::new(0.0, 15.0), Vec2::new(30.0, 15.0)));
        assert!(r.intersects_segment(Vec2::new(12.0, 12.0), Vec2::new(13.0, 13.0)));
        assert!(!r.intersects_segment(Vec2::new(0.0, 0.0), Vec2::new(5.0, 30.0)));
    }

    #[test]
    fn test_arc_contains_point_by_facing() {
        let arc = SwingArc::new(Vec2::ZERO, 50.0, Vec2::X);
        assert!(arc.contains_point(Vec2::new(40.0, 0.0)));
        assert!(arc.contains_point(Vec2::new(30.0, 29.0)));
        assert!(!arc.contains_point(Vec2::new(-40.0, 0.0)));
        assert!(!arc.contains_point(Vec2::new(10.0, 40.0)));
        assert!(!arc.contains_point(Vec2::new(60.0, 0.0)));

        let flipped = SwingArc::new(Vec2::ZERO, 50.0, Vec2::NEG_X);
        assert!(flipped.contains_point(Vec2::new(-40.0, 0.0)));
    }

    #[test]
    fn test_arc_overlaps_rect() {
        let arc = SwingArc::new(Vec2::new(100.0, 100.0), 50.0, Vec2::X);
        // In front
        assert!(arc.overlaps_rect(&Rect::new(130, 90, 40, 20)));
        // Behind
        assert!(!arc.overlaps_rect(&Rect::new(40, 90, 20, 20)));
        // Out of reach
        assert!(!arc.overlaps_rect(&Rect::new(160, 90, 20, 20)));
        // Huge rect containing the whole sector
        assert!(arc.overlaps_rect(&Rect::new(0, 0, 300, 300)));
        // Thin bar crossing the sector with no corner inside it
        assert!(arc.overlaps_rect(&Rect::new(90, 80, 60, 2)));
    }
}
