//! 2x2 matrix (generic precision, row-major).

use crate::error::MatrixError;
use crate::vector::Vector2;
use num_traits::{AsPrimitive, Float, ToPrimitive};

/// Default absolute tolerance used by [`Matrix2x2::is_similar_default`].
pub const DEFAULT_TOLERANCE: f64 = f64::EPSILON;

/// 2x2 matrix over a floating point element type.
///
/// The four elements are stored contiguously in row-major order, i.e.
/// `(0, 0)`, `(0, 1)`, `(1, 0)` and `(1, 1)`. The layout is `#[repr(C)]` so
/// [`Matrix2x2::data`] can be handed to any consumer expecting a flat buffer.
///
/// The default value is the identity matrix.
///
/// Only floating point element types are accepted:
///
/// ```compile_fail
/// use matrix2x2::Matrix2x2;
///
/// let m = Matrix2x2::<i32>::new(1, 2, 3, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Matrix2x2<T: Float> {
    elements: [T; 4],
}

impl<T: Float> Default for Matrix2x2<T> {
    fn default() -> Self {
        Self::identity()
    }
}

// Construction
impl<T: Float> Matrix2x2<T> {
    /// Create a new matrix from its elements in row-major order.
    #[inline]
    pub fn new(m00: T, m01: T, m10: T, m11: T) -> Self {
        Self {
            elements: [m00, m01, m10, m11],
        }
    }

    /// Create a matrix with every element set to `s`.
    #[inline]
    pub fn from_scalar(s: T) -> Self {
        Self { elements: [s; 4] }
    }

    /// Create a matrix from a row-major array.
    #[inline]
    pub fn from_array(arr: &[T; 4]) -> Self {
        Self { elements: *arr }
    }

    /// Create a matrix from two rows, converting each element to `T`.
    ///
    /// # Example
    ///
    /// ```
    /// use matrix2x2::Matrix2x2D;
    ///
    /// let m = Matrix2x2D::from_rows([[1, 2], [9, 3]]);
    /// assert_eq!(m, Matrix2x2D::new(1.0, 2.0, 9.0, 3.0));
    /// ```
    pub fn from_rows<U>(rows: [[U; 2]; 2]) -> Self
    where
        T: 'static,
        U: AsPrimitive<T>,
    {
        let [[m00, m01], [m10, m11]] = rows;
        Self::new(m00.as_(), m01.as_(), m10.as_(), m11.as_())
    }

    /// Create a matrix by copying a contiguous row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidBufferLength`] if `buf` does not hold exactly four elements.
    pub fn from_slice(buf: &[T]) -> Result<Self, MatrixError> {
        let elements: [T; 4] = buf
            .try_into()
            .map_err(|_| MatrixError::InvalidBufferLength(buf.len()))?;
        Ok(Self { elements })
    }

    /// Matrix with all elements set to zero.
    #[inline]
    pub fn zero() -> Self {
        Self::from_scalar(T::zero())
    }

    /// Identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::one())
    }

    /// Alias of [`Matrix2x2::zero`].
    #[inline]
    pub fn make_zero() -> Self {
        Self::zero()
    }

    /// Alias of [`Matrix2x2::identity`].
    #[inline]
    pub fn make_identity() -> Self {
        Self::identity()
    }

    /// Scale matrix with `sx` and `sy` on the diagonal.
    #[inline]
    pub fn make_scale_matrix(sx: T, sy: T) -> Self {
        Self::new(sx, T::zero(), T::zero(), sy)
    }

    /// Scale matrix with the components of `s` on the diagonal.
    #[inline]
    pub fn make_scale_matrix_from_vector(s: Vector2<T>) -> Self {
        Self::make_scale_matrix(s.x, s.y)
    }

    /// Counter-clockwise rotation matrix `[[cos, -sin], [sin, cos]]`.
    ///
    /// The angle is expected in radians.
    #[inline]
    pub fn make_rotation_matrix(rad: T) -> Self {
        let (s, c) = rad.sin_cos();
        Self::new(c, -s, s, c)
    }
}

// Setters
impl<T: Float> Matrix2x2<T> {
    /// Set every element to `s`.
    pub fn set_scalar(&mut self, s: T) {
        self.elements = [s; 4];
    }

    /// Set the elements in row-major order.
    pub fn set(&mut self, m00: T, m01: T, m10: T, m11: T) {
        self.elements = [m00, m01, m10, m11];
    }

    /// Set the elements from two rows, converting each element to `T`.
    pub fn set_rows<U>(&mut self, rows: [[U; 2]; 2])
    where
        T: 'static,
        U: AsPrimitive<T>,
    {
        *self = Self::from_rows(rows);
    }

    /// Copy the elements from a contiguous row-major buffer.
    ///
    /// The matrix is left untouched when the buffer length is wrong.
    pub fn set_from_slice(&mut self, buf: &[T]) -> Result<(), MatrixError> {
        *self = Self::from_slice(buf)?;
        Ok(())
    }

    /// Set both diagonal elements to `s`.
    pub fn set_diagonal(&mut self, s: T) {
        self.elements[0] = s;
        self.elements[3] = s;
    }

    /// Set both off-diagonal elements to `s`.
    pub fn set_off_diagonal(&mut self, s: T) {
        self.elements[1] = s;
        self.elements[2] = s;
    }

    /// Replace the `i`-th row.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not 0 or 1.
    pub fn set_row(&mut self, i: usize, row: Vector2<T>) {
        assert!(i < 2, "row {i} out of range for a 2x2 matrix");
        self.elements[2 * i] = row.x;
        self.elements[2 * i + 1] = row.y;
    }

    /// Replace the `i`-th column.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not 0 or 1.
    pub fn set_column(&mut self, i: usize, col: Vector2<T>) {
        assert!(i < 2, "column {i} out of range for a 2x2 matrix");
        self.elements[i] = col.x;
        self.elements[i + 2] = col.y;
    }
}

// Basic getters
impl<T: Float> Matrix2x2<T> {
    /// Returns true if every pair of elements differs by at most `tol`.
    ///
    /// The comparison is done in double precision.
    pub fn is_similar(&self, other: &Self, tol: f64) -> bool {
        self.elements
            .iter()
            .zip(other.elements.iter())
            .all(|(a, b)| (*a - *b).abs().to_f64().is_some_and(|d| d <= tol))
    }

    /// [`Matrix2x2::is_similar`] with [`DEFAULT_TOLERANCE`].
    pub fn is_similar_default(&self, other: &Self) -> bool {
        self.is_similar(other, DEFAULT_TOLERANCE)
    }

    /// Always true.
    #[inline]
    pub fn is_square(&self) -> bool {
        true
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        2
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        2
    }

    /// Borrow the row-major element buffer.
    #[inline]
    pub fn data(&self) -> &[T; 4] {
        &self.elements
    }

    /// Mutably borrow the row-major element buffer.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T; 4] {
        &mut self.elements
    }

    /// Borrow the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Copy the elements into a row-major array.
    #[inline]
    pub fn to_array(&self) -> [T; 4] {
        self.elements
    }

    /// Element at `(row, col)`, or `None` when out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        (row < 2 && col < 2).then(|| self.elements[2 * row + col])
    }

    /// Element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] when `row` or `col` is not 0 or 1.
    pub fn try_get(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        self.get(row, col)
            .ok_or(MatrixError::IndexOutOfBounds(row, col))
    }

    /// Write `value` at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] when `row` or `col` is not 0 or 1.
    pub fn try_set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatrixError> {
        if row >= 2 || col >= 2 {
            return Err(MatrixError::IndexOutOfBounds(row, col));
        }
        self.elements[2 * row + col] = value;
        Ok(())
    }

    /// The `i`-th row as a vector.
    pub fn row(&self, i: usize) -> Vector2<T> {
        assert!(i < 2, "row {i} out of range for a 2x2 matrix");
        Vector2::new(self.elements[2 * i], self.elements[2 * i + 1])
    }

    /// The `i`-th column as a vector.
    pub fn column(&self, i: usize) -> Vector2<T> {
        assert!(i < 2, "column {i} out of range for a 2x2 matrix");
        Vector2::new(self.elements[i], self.elements[i + 2])
    }
}

// Binary operations: new instance = self (op) input
impl<T: Float> Matrix2x2<T> {
    #[inline]
    fn map(&self, f: impl Fn(T) -> T) -> Self {
        Self {
            elements: self.elements.map(f),
        }
    }

    #[inline]
    fn zip_map(&self, other: &Self, f: impl Fn(T, T) -> T) -> Self {
        let [a0, a1, a2, a3] = self.elements;
        let [b0, b1, b2, b3] = other.elements;
        Self::new(f(a0, b0), f(a1, b1), f(a2, b2), f(a3, b3))
    }

    /// `self + s` for every element.
    pub fn add_scalar(&self, s: T) -> Self {
        self.map(|e| e + s)
    }

    /// Element-wise `self + m`.
    pub fn add_matrix(&self, m: &Self) -> Self {
        self.zip_map(m, |a, b| a + b)
    }

    /// `self - s` for every element.
    pub fn sub_scalar(&self, s: T) -> Self {
        self.map(|e| e - s)
    }

    /// Element-wise `self - m`.
    pub fn sub_matrix(&self, m: &Self) -> Self {
        self.zip_map(m, |a, b| a - b)
    }

    /// `self * s` for every element.
    pub fn mul_scalar(&self, s: T) -> Self {
        self.map(|e| e * s)
    }

    /// Matrix-vector product `self * v`.
    pub fn mul_vector(&self, v: &Vector2<T>) -> Vector2<T> {
        let [m00, m01, m10, m11] = self.elements;
        Vector2::new(m00 * v.x + m01 * v.y, m10 * v.x + m11 * v.y)
    }

    /// Matrix product `self * m`.
    pub fn mul_matrix(&self, m: &Self) -> Self {
        let [a00, a01, a10, a11] = self.elements;
        let [b00, b01, b10, b11] = m.elements;
        Self::new(
            a00 * b00 + a01 * b10,
            a00 * b01 + a01 * b11,
            a10 * b00 + a11 * b10,
            a10 * b01 + a11 * b11,
        )
    }

    /// `self / s` for every element.
    pub fn div_scalar(&self, s: T) -> Self {
        self.map(|e| e / s)
    }
}

// Binary operations: new instance = input (op) self
impl<T: Float> Matrix2x2<T> {
    /// `s + self` for every element.
    pub fn radd_scalar(&self, s: T) -> Self {
        self.map(|e| s + e)
    }

    /// Element-wise `m + self`.
    pub fn radd_matrix(&self, m: &Self) -> Self {
        m.add_matrix(self)
    }

    /// `s - self` for every element.
    pub fn rsub_scalar(&self, s: T) -> Self {
        self.map(|e| s - e)
    }

    /// Element-wise `m - self`.
    pub fn rsub_matrix(&self, m: &Self) -> Self {
        m.sub_matrix(self)
    }

    /// `s * self` for every element.
    pub fn rmul_scalar(&self, s: T) -> Self {
        self.map(|e| s * e)
    }

    /// Matrix product `m * self`.
    pub fn rmul_matrix(&self, m: &Self) -> Self {
        m.mul_matrix(self)
    }

    /// `s / self` for every element.
    ///
    /// This is an element-wise division, not `s * self.inverse()`.
    pub fn rdiv_scalar(&self, s: T) -> Self {
        self.map(|e| s / e)
    }
}

// Augmented operations: self (op)= input
impl<T: Float> Matrix2x2<T> {
    /// Add `s` to every element.
    pub fn iadd_scalar(&mut self, s: T) {
        *self = self.add_scalar(s);
    }

    /// Element-wise add `m`.
    pub fn iadd_matrix(&mut self, m: &Self) {
        *self = self.add_matrix(m);
    }

    /// Subtract `s` from every element.
    pub fn isub_scalar(&mut self, s: T) {
        *self = self.sub_scalar(s);
    }

    /// Element-wise subtract `m`.
    pub fn isub_matrix(&mut self, m: &Self) {
        *self = self.sub_matrix(m);
    }

    /// Multiply every element by `s`.
    pub fn imul_scalar(&mut self, s: T) {
        *self = self.mul_scalar(s);
    }

    /// Replace `self` with `self * m`.
    pub fn imul_matrix(&mut self, m: &Self) {
        *self = self.mul_matrix(m);
    }

    /// Divide every element by `s`.
    pub fn idiv_scalar(&mut self, s: T) {
        *self = self.div_scalar(s);
    }
}

// Modifiers
impl<T: Float> Matrix2x2<T> {
    /// Transpose in place.
    pub fn transpose(&mut self) {
        self.elements.swap(1, 2);
    }

    /// Invert in place as `adj(self) / det(self)`.
    ///
    /// A singular matrix is not rejected: the division by a zero determinant
    /// leaves infinities or NaNs in the elements. Use [`Matrix2x2::try_inverse`]
    /// to detect that case.
    pub fn invert(&mut self) {
        let det = self.determinant();
        if det == T::zero() {
            log::debug!("inverting a 2x2 matrix with zero determinant, elements will not be finite");
        }
        let [m00, m01, m10, m11] = self.elements;
        self.elements = [m11, -m01, -m10, m00];
        self.idiv_scalar(det);
    }
}

// Complex getters
impl<T: Float> Matrix2x2<T> {
    /// Sum of all elements.
    pub fn sum(&self) -> T {
        self.elements.iter().fold(T::zero(), |acc, &e| acc + e)
    }

    /// Average of all elements.
    pub fn avg(&self) -> T {
        let two = T::one() + T::one();
        self.sum() / (two * two)
    }

    /// Smallest element.
    pub fn min(&self) -> T {
        let [a, b, c, d] = self.elements;
        a.min(b).min(c.min(d))
    }

    /// Largest element.
    pub fn max(&self) -> T {
        let [a, b, c, d] = self.elements;
        a.max(b).max(c.max(d))
    }

    /// Element with the smallest magnitude, sign preserved.
    pub fn absmin(&self) -> T {
        let closer = |x: T, y: T| if x.abs() <= y.abs() { x } else { y };
        let [a, b, c, d] = self.elements;
        closer(closer(a, b), closer(c, d))
    }

    /// Element with the largest magnitude, sign preserved.
    pub fn absmax(&self) -> T {
        let farther = |x: T, y: T| if x.abs() >= y.abs() { x } else { y };
        let [a, b, c, d] = self.elements;
        farther(farther(a, b), farther(c, d))
    }

    /// Sum of the diagonal elements.
    pub fn trace(&self) -> T {
        self.elements[0] + self.elements[3]
    }

    /// Determinant `m00 * m11 - m01 * m10`.
    pub fn determinant(&self) -> T {
        let [m00, m01, m10, m11] = self.elements;
        m00 * m11 - m01 * m10
    }

    /// Diagonal part, zero elsewhere.
    pub fn diagonal(&self) -> Self {
        let z = T::zero();
        Self::new(self.elements[0], z, z, self.elements[3])
    }

    /// Off-diagonal part, zero on the diagonal.
    pub fn off_diagonal(&self) -> Self {
        let z = T::zero();
        Self::new(z, self.elements[1], self.elements[2], z)
    }

    /// Part strictly below the diagonal.
    pub fn strict_lower_tri(&self) -> Self {
        let z = T::zero();
        Self::new(z, z, self.elements[2], z)
    }

    /// Part strictly above the diagonal.
    pub fn strict_upper_tri(&self) -> Self {
        let z = T::zero();
        Self::new(z, self.elements[1], z, z)
    }

    /// Lower triangle including the diagonal.
    pub fn lower_tri(&self) -> Self {
        let [m00, _, m10, m11] = self.elements;
        Self::new(m00, T::zero(), m10, m11)
    }

    /// Upper triangle including the diagonal.
    pub fn upper_tri(&self) -> Self {
        let [m00, m01, _, m11] = self.elements;
        Self::new(m00, m01, T::zero(), m11)
    }

    /// Transposed copy.
    pub fn transposed(&self) -> Self {
        let mut m = *self;
        m.transpose();
        m
    }

    /// Inverse copy. See [`Matrix2x2::invert`] for the singular case.
    pub fn inverse(&self) -> Self {
        let mut m = *self;
        m.invert();
        m
    }

    /// Inverse copy, rejecting singular matrices.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Singular`] if the determinant is zero or not finite.
    ///
    /// # Example
    ///
    /// ```
    /// use matrix2x2::{Matrix2x2D, MatrixError};
    ///
    /// let singular = Matrix2x2D::new(1.0, 2.0, 2.0, 4.0);
    /// assert_eq!(singular.try_inverse(), Err(MatrixError::Singular(0.0)));
    /// ```
    pub fn try_inverse(&self) -> Result<Self, MatrixError> {
        let det = self.determinant();
        if det == T::zero() || !det.is_finite() {
            return Err(MatrixError::Singular(det.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(self.inverse())
    }

    /// Copy with every element converted to `U`.
    pub fn cast<U>(&self) -> Matrix2x2<U>
    where
        U: Float + 'static,
        T: AsPrimitive<U>,
    {
        Matrix2x2 {
            elements: self.elements.map(|e| e.as_()),
        }
    }
}

impl<T: Float> From<[T; 4]> for Matrix2x2<T> {
    #[inline]
    fn from(arr: [T; 4]) -> Self {
        Self { elements: arr }
    }
}

impl<T: Float> From<[[T; 2]; 2]> for Matrix2x2<T> {
    #[inline]
    fn from(rows: [[T; 2]; 2]) -> Self {
        let [[m00, m01], [m10, m11]] = rows;
        Self::new(m00, m01, m10, m11)
    }
}

impl<T: Float> From<Matrix2x2<T>> for [T; 4] {
    #[inline]
    fn from(m: Matrix2x2<T>) -> Self {
        m.elements
    }
}

impl<T: Float> TryFrom<&[T]> for Matrix2x2<T> {
    type Error = MatrixError;

    fn try_from(buf: &[T]) -> Result<Self, Self::Error> {
        Self::from_slice(buf)
    }
}
