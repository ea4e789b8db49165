//! 2D affine transforms.
//!
//! The matrix uses the row-vector layout of Direct2D's `Matrix3x2F`:
//!
//! ```text
//! [ a  b ]     x' = a*x + c*y + tx
//! [ c  d ]     y' = b*x + d*y + ty
//! [tx ty]
//! ```
//!
//! With row vectors, `p * (M1 * M2)` applies `M1` first. [`Transform::then`]
//! and the `*` operator follow that reading order.

use std::ops::{Mul, MulAssign};

use glam::{Affine2, Mat2, Vec2};

/// An affine map of the plane, stored as six scalars
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    #[inline]
    pub const fn new(a: f32, b: f32, c: f32, d: f32, tx: f32, ty: f32) -> Self {
        Transform { a, b, c, d, tx, ty }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    pub const fn translation(dx: f32, dy: f32) -> Self {
        Transform::new(1.0, 0.0, 0.0, 1.0, dx, dy)
    }

    /// Scale about the origin
    pub const fn scaling(sx: f32, sy: f32) -> Self {
        Transform::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Scale about `pivot`; the pivot maps to itself.
    pub fn scaling_about(sx: f32, sy: f32, pivot: Vec2) -> Self {
        Transform::new(
            sx,
            0.0,
            0.0,
            sy,
            pivot.x - sx * pivot.x,
            pivot.y - sy * pivot.y,
        )
    }

    /// Rotate about the origin by `angle` degrees
    pub fn rotation(angle: f32) -> Self {
        Self::rotation_about(angle, Vec2::ZERO)
    }

    /// Rotate by `angle` degrees about `pivot`; the pivot maps to itself.
    ///
    /// Positive angles turn clockwise on a y-down surface.
    pub fn rotation_about(angle: f32, pivot: Vec2) -> Self {
        let (sin, cos) = angle.to_radians().sin_cos();
        Transform::new(
            cos,
            sin,
            -sin,
            cos,
            pivot.x - pivot.x * cos + pivot.y * sin,
            pivot.y - pivot.x * sin - pivot.y * cos,
        )
    }

    /// Matrix product: the result applies `self` first, then `other`.
    pub fn then(&self, other: &Transform) -> Transform {
        Transform {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            tx: self.tx * other.a + self.ty * other.c + other.tx,
            ty: self.tx * other.b + self.ty * other.d + other.ty,
        }
    }

    /// Alias of [`Transform::then`]
    #[inline]
    pub fn compose(&self, other: &Transform) -> Transform {
        self.then(other)
    }

    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }

    /// Exact comparison against the identity matrix
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Component-wise comparison within `eps`
    pub fn approx_eq(&self, other: &Transform, eps: f32) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array())
            .all(|(l, r)| (l - r).abs() <= eps)
    }

    pub fn determinant(&self) -> f32 {
        self.a * self.d - self.b * self.c
    }

    /// Inverse map, or `None` for a degenerate (zero-determinant) matrix
    pub fn invert(&self) -> Option<Transform> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let inv = 1.0 / det;
        let a = self.d * inv;
        let b = -self.b * inv;
        let c = -self.c * inv;
        let d = self.a * inv;
        Some(Transform {
            a,
            b,
            c,
            d,
            tx: -(self.tx * a + self.ty * c),
            ty: -(self.tx * b + self.ty * d),
        })
    }

    /// `[a, b, c, d, tx, ty]`, the order SVG's `matrix()` expects
    pub fn to_array(&self) -> [f32; 6] {
        [self.a, self.b, self.c, self.d, self.tx, self.ty]
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        self.then(&rhs)
    }
}

impl MulAssign for Transform {
    fn mul_assign(&mut self, rhs: Transform) {
        *self = self.then(&rhs);
    }
}

impl From<Transform> for Affine2 {
    fn from(t: Transform) -> Self {
        Affine2::from_mat2_translation(
            Mat2::from_cols(Vec2::new(t.a, t.b), Vec2::new(t.c, t.d)),
            Vec2::new(t.tx, t.ty),
        )
    }
}

impl From<Affine2> for Transform {
    fn from(m: Affine2) -> Self {
        Transform {
            a: m.matrix2.x_axis.x,
            b: m.matrix2.x_axis.y,
            c: m.matrix2.y_axis.x,
            d: m.matrix2.y_axis.y,
            tx: m.translation.x,
            ty: m.translation.y,
        }
    }
}
