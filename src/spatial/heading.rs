//! Unit headings on the canvas grid

/// One of the four axis-aligned unit directions
///
/// `y` grows downwards, so [`Heading::UP`] is `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Heading {
    /// Horizontal step
    pub dx: i32,
    /// Vertical step
    pub dy: i32,
}

impl Heading {
    /// Towards the top edge
    pub const UP: Self = Self { dx: 0, dy: -1 };
    /// Towards the bottom edge
    pub const DOWN: Self = Self { dx: 0, dy: 1 };
    /// Towards the left edge
    pub const LEFT: Self = Self { dx: -1, dy: 0 };
    /// Towards the right edge
    pub const RIGHT: Self = Self { dx: 1, dy: 0 };

    /// Quarter turn: `(dx, dy) -> (-dy, dx)`
    pub const fn rotated(self) -> Self {
        Self {
            dx: -self.dy,
            dy: self.dx,
        }
    }

    /// Half turn
    pub const fn reversed(self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }

    /// Position one step ahead of `(x, y)`
    pub const fn step_from(self, x: i32, y: i32) -> (i32, i32) {
        (x + self.dx, y + self.dy)
    }

    /// The two cells flanking `(x, y)` perpendicular to this heading
    pub const fn flanks(self, x: i32, y: i32) -> [(i32, i32); 2] {
        [(x + self.dy, y + self.dx), (x - self.dy, y - self.dx)]
    }
}
