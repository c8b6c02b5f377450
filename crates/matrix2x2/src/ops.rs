//! Operator overloads for [`Matrix2x2`].
//!
//! Every operator delegates to the named method of the same operation so both
//! spellings stay in sync.

use crate::matrix::Matrix2x2;
use crate::vector::Vector2;
use num_traits::Float;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

impl<T: Float> Index<usize> for Matrix2x2<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data()[i]
    }
}

impl<T: Float> IndexMut<usize> for Matrix2x2<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data_mut()[i]
    }
}

impl<T: Float> Index<(usize, usize)> for Matrix2x2<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < 2 && col < 2,
            "index ({row}, {col}) out of range for a 2x2 matrix"
        );
        &self.data()[2 * row + col]
    }
}

impl<T: Float> IndexMut<(usize, usize)> for Matrix2x2<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < 2 && col < 2,
            "index ({row}, {col}) out of range for a 2x2 matrix"
        );
        &mut self.data_mut()[2 * row + col]
    }
}

impl<T: Float> Neg for Matrix2x2<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.mul_scalar(-T::one())
    }
}

impl<T: Float> Add for Matrix2x2<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.add_matrix(&rhs)
    }
}

impl<T: Float> Add<T> for Matrix2x2<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: T) -> Self::Output {
        self.add_scalar(rhs)
    }
}

impl<T: Float> Sub for Matrix2x2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_matrix(&rhs)
    }
}

impl<T: Float> Sub<T> for Matrix2x2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: T) -> Self::Output {
        self.sub_scalar(rhs)
    }
}

// Matrix-matrix multiplication.
impl<T: Float> Mul for Matrix2x2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_matrix(&rhs)
    }
}

// Matrix-vector multiplication.
impl<T: Float> Mul<Vector2<T>> for Matrix2x2<T> {
    type Output = Vector2<T>;

    #[inline]
    fn mul(self, rhs: Vector2<T>) -> Self::Output {
        self.mul_vector(&rhs)
    }
}

impl<T: Float> Mul<T> for Matrix2x2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.mul_scalar(rhs)
    }
}

impl<T: Float> Div<T> for Matrix2x2<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        self.div_scalar(rhs)
    }
}

impl<T: Float> AddAssign for Matrix2x2<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.iadd_matrix(&rhs);
    }
}

impl<T: Float> AddAssign<T> for Matrix2x2<T> {
    #[inline]
    fn add_assign(&mut self, rhs: T) {
        self.iadd_scalar(rhs);
    }
}

impl<T: Float> SubAssign for Matrix2x2<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.isub_matrix(&rhs);
    }
}

impl<T: Float> SubAssign<T> for Matrix2x2<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: T) {
        self.isub_scalar(rhs);
    }
}

impl<T: Float> MulAssign for Matrix2x2<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        self.imul_matrix(&rhs);
    }
}

impl<T: Float> MulAssign<T> for Matrix2x2<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.imul_scalar(rhs);
    }
}

impl<T: Float> DivAssign<T> for Matrix2x2<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.idiv_scalar(rhs);
    }
}

// Scalar on the left hand side. Coherence rules only allow this for concrete
// scalar types.
macro_rules! impl_scalar_lhs_ops {
    ($($scalar:ty),+) => {
        $(
            impl Add<Matrix2x2<$scalar>> for $scalar {
                type Output = Matrix2x2<$scalar>;

                #[inline]
                fn add(self, rhs: Matrix2x2<$scalar>) -> Self::Output {
                    rhs.radd_scalar(self)
                }
            }

            impl Sub<Matrix2x2<$scalar>> for $scalar {
                type Output = Matrix2x2<$scalar>;

                #[inline]
                fn sub(self, rhs: Matrix2x2<$scalar>) -> Self::Output {
                    rhs.rsub_scalar(self)
                }
            }

            impl Mul<Matrix2x2<$scalar>> for $scalar {
                type Output = Matrix2x2<$scalar>;

                #[inline]
                fn mul(self, rhs: Matrix2x2<$scalar>) -> Self::Output {
                    rhs.rmul_scalar(self)
                }
            }

            impl Div<Matrix2x2<$scalar>> for $scalar {
                type Output = Matrix2x2<$scalar>;

                #[inline]
                fn div(self, rhs: Matrix2x2<$scalar>) -> Self::Output {
                    rhs.rdiv_scalar(self)
                }
            }
        )+
    };
}

impl_scalar_lhs_ops!(f32, f64);

#[cfg(test)]
mod tests {
    use crate::{Matrix2x2, Vector2};

    #[test]
    fn test_index_linear() {
        let mut m = Matrix2x2::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m[0], 1.0);
        assert_eq!(m[3], 4.0);
        m[1] = 5.0;
        assert_eq!(m, Matrix2x2::new(1.0, 5.0, 3.0, 4.0));
    }

    #[test]
    fn test_index_row_col() {
        let mut m = Matrix2x2::new(1.0f32, 2.0, 3.0, 4.0);
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(1, 0)], 3.0);
        m[(1, 1)] = -1.0;
        assert_eq!(m[3], -1.0);
    }

    #[test]
    #[should_panic]
    fn test_index_col_out_of_range() {
        let m = Matrix2x2::<f64>::identity();
        // (0, 2) would alias (1, 0) in the flat buffer
        let _ = m[(0, 2)];
    }

    #[test]
    #[should_panic]
    fn test_index_linear_out_of_range() {
        let m = Matrix2x2::<f64>::identity();
        let _ = m[4];
    }

    #[test]
    fn test_operators() {
        let m = Matrix2x2::new(1.0, 2.0, 3.0, 4.0);
        let n = Matrix2x2::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(-m, Matrix2x2::new(-1.0, -2.0, -3.0, -4.0));
        assert_eq!(m + n, m.add_matrix(&n));
        assert_eq!(m + 1.0, m.add_scalar(1.0));
        assert_eq!(m - n, m.sub_matrix(&n));
        assert_eq!(m - 1.0, m.sub_scalar(1.0));
        assert_eq!(m * n, Matrix2x2::new(19.0, 22.0, 43.0, 50.0));
        assert_eq!(m * 2.0, m.mul_scalar(2.0));
        assert_eq!(m * Vector2::new(1.0, 0.0), Vector2::new(1.0, 3.0));
        assert_eq!(m / 2.0, m.div_scalar(2.0));
    }

    #[test]
    fn test_scalar_lhs_operators() {
        let m = Matrix2x2::new(1.0f32, 2.0, 4.0, 8.0);
        assert_eq!(1.0 + m, Matrix2x2::new(2.0, 3.0, 5.0, 9.0));
        assert_eq!(1.0 - m, Matrix2x2::new(0.0, -1.0, -3.0, -7.0));
        assert_eq!(2.0 * m, Matrix2x2::new(2.0, 4.0, 8.0, 16.0));
        assert_eq!(8.0 / m, Matrix2x2::new(8.0, 4.0, 2.0, 1.0));
    }

    #[test]
    fn test_assign_operators() {
        let mut m = Matrix2x2::new(1.0, 2.0, 3.0, 4.0);
        m += 1.0;
        m -= Matrix2x2::from_scalar(1.0);
        assert_eq!(m, Matrix2x2::new(1.0, 2.0, 3.0, 4.0));
        m *= 2.0;
        m /= 2.0;
        assert_eq!(m, Matrix2x2::new(1.0, 2.0, 3.0, 4.0));
        m += Matrix2x2::identity();
        m -= 1.0;
        assert_eq!(m, Matrix2x2::new(1.0, 1.0, 2.0, 4.0));
        m *= Matrix2x2::identity();
        assert_eq!(m, Matrix2x2::new(1.0, 1.0, 2.0, 4.0));
    }
}
