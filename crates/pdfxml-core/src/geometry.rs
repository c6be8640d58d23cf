/// Integer bounding box with top-left origin coordinate system.
///
/// Coordinates follow the pdftohtml XML convention:
/// - `left`: left edge
/// - `top`: top edge (distance from top of page)
/// - `right`: right edge (`left + width`)
/// - `bottom`: bottom edge (`top + height`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntBox {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl IntBox {
    pub fn new(left: i64, top: i64, right: i64, bottom: i64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Build a box from an origin and its extent.
    pub fn from_extent(left: i64, top: i64, width: i64, height: i64) -> Self {
        Self::new(left, top, left + width, top + height)
    }

    /// Width of the bounding box.
    pub fn width(&self) -> i64 {
        self.right - self.left
    }

    /// Height of the bounding box.
    pub fn height(&self) -> i64 {
        self.bottom - self.top
    }

    /// Compute the union of two bounding boxes.
    pub fn union(&self, other: &IntBox) -> IntBox {
        IntBox {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}
