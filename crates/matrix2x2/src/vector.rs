//! 2-component vector (generic precision).

use num_traits::Float;
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

/// 2-component vector over a floating point element type.
///
/// Used as the operand of matrix-vector products and as the row/column
/// argument of [`crate::Matrix2x2::set_row`] and [`crate::Matrix2x2::set_column`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Vector2<T: Float> {
    /// First component.
    pub x: T,
    /// Second component.
    pub y: T,
}

impl<T: Float> Vector2<T> {
    /// Create a new vector from its components.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Create a vector from an array.
    #[inline]
    pub fn from_array(arr: [T; 2]) -> Self {
        let [x, y] = arr;
        Self { x, y }
    }

    /// Convert the vector to an array.
    #[inline]
    pub fn to_array(self) -> [T; 2] {
        [self.x, self.y]
    }

    /// Zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Dot product between two vectors.
    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        self.x * rhs.x + self.y * rhs.y
    }

    /// Euclidean length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> T {
        self.x.hypot(self.y)
    }

    /// Returns true if both components differ by no more than `tol`.
    pub fn is_similar(&self, other: &Self, tol: T) -> bool {
        (self.x - other.x).abs() <= tol && (self.y - other.y).abs() <= tol
    }
}

impl<T: Float> Default for Vector2<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Float> From<[T; 2]> for Vector2<T> {
    #[inline]
    fn from(arr: [T; 2]) -> Self {
        Self::from_array(arr)
    }
}

impl<T: Float> From<Vector2<T>> for [T; 2] {
    #[inline]
    fn from(v: Vector2<T>) -> Self {
        v.to_array()
    }
}

impl<T: Float> Index<usize> for Vector2<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("index {i} out of range for a 2-component vector"),
        }
    }
}

impl<T: Float> IndexMut<usize> for Vector2<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("index {i} out of range for a 2-component vector"),
        }
    }
}

impl<T: Float> Add for Vector2<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Float> Sub for Vector2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Float> Mul<T> for Vector2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Float> Div<T> for Vector2<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl<T: Float> Neg for Vector2<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($scalar:ty),+) => {
        $(
            impl Mul<Vector2<$scalar>> for $scalar {
                type Output = Vector2<$scalar>;

                #[inline]
                fn mul(self, rhs: Vector2<$scalar>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}

impl_scalar_lhs_mul!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector2_basic() {
        let v = Vector2::new(1.0f32, 2.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
        assert_eq!(Vector2::<f64>::default(), Vector2::zero());
    }

    #[test]
    fn test_vector2_from_array() {
        let v = Vector2::from_array([1.0, 2.0]);
        assert_eq!(v.to_array(), [1.0, 2.0]);
        let arr: [f64; 2] = Vector2::from([3.0, 4.0]).into();
        assert_eq!(arr, [3.0, 4.0]);
    }

    #[test]
    fn test_vector2_arithmetic() {
        let v1 = Vector2::new(1.0, 2.0);
        let v2 = Vector2::new(3.0, 4.0);
        assert_eq!(v1 + v2, Vector2::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vector2::new(2.0, 2.0));
        assert_eq!(v1 * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(2.0 * v1, Vector2::new(2.0, 4.0));
        assert_eq!(v2 / 2.0, Vector2::new(1.5, 2.0));
        assert_eq!(-v1, Vector2::new(-1.0, -2.0));
    }

    #[test]
    fn test_vector2_dot_length() {
        let v = Vector2::new(3.0f64, 4.0);
        assert_eq!(v.dot(Vector2::new(1.0, 1.0)), 7.0);
        assert_eq!(v.length(), 5.0);
    }

    #[test]
    #[should_panic]
    fn test_vector2_index_out_of_range() {
        let v = Vector2::new(1.0f64, 2.0);
        let _ = v[2];
    }
}
