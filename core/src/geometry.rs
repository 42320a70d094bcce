use serde::{Deserialize, Serialize};

/// Axis-aligned box. Origin is the top-left corner, y grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Box centered on (cx, cy).
    pub fn centered(cx: f64, cy: f64, width: f64, height: f64) -> Rect {
        Rect {
            x: cx - width / 2.0,
            y: cy - height / 2.0,
            width,
            height,
        }
    }
}

/// Strict AABB overlap test. Boxes that only touch edges do not overlap.
pub fn aabb_overlap(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}
