//! Conversions to and from `glam`.
//!
//! `glam` stores matrices column-major, so the element buffer is transposed on
//! the way in and out. The mathematical matrix is preserved.

use crate::matrix::Matrix2x2;
use crate::vector::Vector2;

macro_rules! impl_glam_conversions {
    ($scalar:ty, $glam_mat:ty, $glam_vec:ty) => {
        impl From<$glam_mat> for Matrix2x2<$scalar> {
            #[inline]
            fn from(m: $glam_mat) -> Self {
                Self::from(m.transpose().to_cols_array())
            }
        }

        impl From<Matrix2x2<$scalar>> for $glam_mat {
            #[inline]
            fn from(m: Matrix2x2<$scalar>) -> Self {
                <$glam_mat>::from_cols_array(m.data()).transpose()
            }
        }

        impl From<$glam_vec> for Vector2<$scalar> {
            #[inline]
            fn from(v: $glam_vec) -> Self {
                Self::new(v.x, v.y)
            }
        }

        impl From<Vector2<$scalar>> for $glam_vec {
            #[inline]
            fn from(v: Vector2<$scalar>) -> Self {
                <$glam_vec>::new(v.x, v.y)
            }
        }
    };
}

impl_glam_conversions!(f32, glam::Mat2, glam::Vec2);
impl_glam_conversions!(f64, glam::DMat2, glam::DVec2);

#[cfg(test)]
mod tests {
    use crate::{Matrix2x2, Vector2};

    #[test]
    fn test_from_glam_keeps_rows() {
        // columns (1, 3) and (2, 4)
        let g = glam::Mat2::from_cols(glam::Vec2::new(1.0, 3.0), glam::Vec2::new(2.0, 4.0));
        let m = Matrix2x2::from(g);
        assert_eq!(m, Matrix2x2::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(glam::Mat2::from(m), g);
    }

    #[test]
    fn test_product_matches_glam() {
        let a = Matrix2x2::new(1.0f64, 2.0, 3.0, 4.0);
        let b = Matrix2x2::new(-1.0f64, 0.5, 2.0, 3.0);
        let ga = glam::DMat2::from(a);
        let gb = glam::DMat2::from(b);
        assert_eq!(Matrix2x2::from(ga * gb), a * b);

        let v = Vector2::new(0.25, -2.0);
        let gv = ga * glam::DVec2::from(v);
        assert_eq!(Vector2::from(gv), a * v);
    }

    #[test]
    fn test_rotation_matches_glam() {
        let angle = 0.3f32;
        let m = Matrix2x2::make_rotation_matrix(angle);
        let g = glam::Mat2::from_angle(angle);
        assert!(m.is_similar(&Matrix2x2::from(g), 1e-6));
    }
}
