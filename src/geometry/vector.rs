//! 3D points and the rigid transforms applied to them.
//!
//! `Point3` is an immutable value type: every transform returns a new point.

/// A point in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// The coordinate origin.
    pub const ORIGIN: Point3 = Point3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Rotate about the X axis, then the Y axis, then the Z axis.
    ///
    /// Angles are in radians and may take any real value.
    ///
    /// # Arguments
    /// * `ax` - Angle about the X axis
    /// * `ay` - Angle about the Y axis
    /// * `az` - Angle about the Z axis
    pub fn rotate(self, ax: f64, ay: f64, az: f64) -> Self {
        self.rotate_x(ax).rotate_y(ay).rotate_z(az)
    }

    /// Undo [`Point3::rotate`] with the same angles.
    ///
    /// Applies the negated angles in reverse axis order (Z, then Y, then X).
    pub fn unrotate(self, ax: f64, ay: f64, az: f64) -> Self {
        self.rotate_z(-az).rotate_y(-ay).rotate_x(-ax)
    }

    /// Rotate about the X axis.
    pub fn rotate_x(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x,
            y: self.y * cos - self.z * sin,
            z: self.y * sin + self.z * cos,
        }
    }

    /// Rotate about the Y axis.
    pub fn rotate_y(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos + self.z * sin,
            y: self.y,
            z: -self.x * sin + self.z * cos,
        }
    }

    /// Rotate about the Z axis.
    pub fn rotate_z(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
            z: self.z,
        }
    }

    /// Component-wise multiply.
    pub fn scale(self, sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            x: self.x * sx,
            y: self.y * sy,
            z: self.z * sz,
        }
    }

    /// Component-wise add.
    pub fn translate(self, dx: f64, dy: f64, dz: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// Distance to another point.
    pub fn distance(self, other: Point3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Rotate `p` about the X, Y and Z axes in that order.
pub fn rotate(p: Point3, ax: f64, ay: f64, az: f64) -> Point3 {
    p.rotate(ax, ay, az)
}

/// Multiply each component of `p` by the matching factor.
pub fn scale(p: Point3, sx: f64, sy: f64, sz: f64) -> Point3 {
    p.scale(sx, sy, sz)
}

/// Add the offsets to each component of `p`.
pub fn translate(p: Point3, dx: f64, dy: f64, dz: f64) -> Point3 {
    p.translate(dx, dy, dz)
}
