//! 단위 구면 S^d 구현
//!
//! 기준점을 `align_reverse` 로 마지막 축 e_d 에 보내는 회전 R 을 보관하고,
//! 로그/지수 맵은 이 표준 좌표계에서 계산한다.

use super::Manifold;
use crate::config::constants::Constants;
use crate::config::Tolerances;
use crate::error::Result;
use crate::maps;
use crate::rotation::align_reverse;
use crate::utils::numeric::{ensure_min_dim, ensure_same_dim, ensure_unit, Scalar};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use tracing::debug;

/// 기준점에 고정된 단위 구면
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere<F> {
    /// 기준점 (단위 벡터, 차원 d + 1)
    reference: Array1<F>,
    /// R·reference = e_d 를 만족하는 회전
    rotation: Array2<F>,
    /// e_d
    canonical: Array1<F>,
    tolerances: Tolerances,
}

impl<F: Scalar> Sphere<F> {
    /// e_d 에 고정된 S^d (회전 = 항등)
    pub fn canonical(dim: usize) -> Result<Self> {
        let n = dim + 1;
        ensure_min_dim(n, Constants::MIN_AMBIENT_DIM)?;
        let canonical = maps::canonical_point(n)?;
        Ok(Sphere {
            reference: canonical.clone(),
            rotation: Array2::eye(n),
            canonical,
            tolerances: Tolerances::default(),
        })
    }

    /// 임의의 단위 벡터에 고정된 구면
    pub fn anchored_at(reference: ArrayView1<F>) -> Result<Self> {
        Self::anchored_with(reference, Tolerances::default())
    }

    pub fn anchored_with(reference: ArrayView1<F>, tolerances: Tolerances) -> Result<Self> {
        let n = reference.len();
        ensure_min_dim(n, Constants::MIN_AMBIENT_DIM)?;
        ensure_unit(reference, &tolerances)?;
        let (rotation, _) = align_reverse(reference)?;
        debug!(dim = n - 1, "anchored tangent frame");
        Ok(Sphere {
            reference: reference.to_owned(),
            rotation,
            canonical: maps::canonical_point(n)?,
            tolerances,
        })
    }

    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// 구면 차원 d
    pub fn dim(&self) -> usize {
        self.reference.len() - 1
    }

    pub fn reference(&self) -> ArrayView1<F> {
        self.reference.view()
    }

    pub fn rotation(&self) -> ArrayView2<F> {
        self.rotation.view()
    }

    pub fn tolerances(&self) -> &Tolerances {
        &self.tolerances
    }

    /// 외부 좌표 → 기준점이 e_d 인 좌표 (R·x)
    pub fn to_canonical(&self, x: ArrayView1<F>) -> Result<Array1<F>> {
        ensure_same_dim(self.reference.len(), x.len())?;
        Ok(self.rotation.dot(&x))
    }

    /// 표준 좌표 → 외부 좌표 (Rᵀ·y)
    pub fn from_canonical(&self, y: ArrayView1<F>) -> Result<Array1<F>> {
        ensure_same_dim(self.reference.len(), y.len())?;
        Ok(self.rotation.t().dot(&y))
    }
}

impl<F: Scalar> Manifold<F> for Sphere<F> {
    fn ambient_dim(&self) -> usize {
        self.reference.len()
    }

    fn tangent_dim(&self) -> usize {
        self.dim()
    }

    fn exp_map(&self, v: ArrayView1<F>) -> Result<Array1<F>> {
        ensure_same_dim(self.dim(), v.len())?;
        let y = maps::exp_map(v)?;
        self.from_canonical(y.view())
    }

    fn log_map(&self, x: ArrayView1<F>) -> Result<Array1<F>> {
        ensure_unit(x, &self.tolerances)?;
        let y = self.to_canonical(x)?;
        maps::log_map_with(self.canonical.view(), y.view(), &self.tolerances)
    }

    fn dist(&self, u: ArrayView1<F>, v: ArrayView1<F>) -> Result<F> {
        ensure_same_dim(self.ambient_dim(), u.len())?;
        maps::geodesic_distance_with(u, v, &self.tolerances)
    }

    fn geodesic(&self, u: ArrayView1<F>, v: ArrayView1<F>, t: F) -> Result<Array1<F>> {
        ensure_same_dim(self.ambient_dim(), u.len())?;
        maps::geodesic_with(u, v, t, &self.tolerances)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn anchored_rotation_sends_reference_to_last_axis() {
        let h = 0.5_f64.sqrt();
        let sphere = Sphere::anchored_at(array![h, 0.0, h].view()).unwrap();
        let y = sphere.to_canonical(sphere.reference()).unwrap();
        assert_abs_diff_eq!(y[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y[1], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y[2], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn log_of_reference_is_zero() {
        let sphere = Sphere::anchored_at(array![0.6_f64, 0.8, 0.0].view()).unwrap();
        let v = sphere.log_map(sphere.reference()).unwrap();
        assert_eq!(v.len(), 2);
        for c in v.iter() {
            assert_abs_diff_eq!(*c, 0.0, epsilon = 1e-7);
        }
    }

    #[test]
    fn exp_of_zero_is_reference() {
        let sphere = Sphere::anchored_at(array![0.0_f64, 0.6, 0.8].view()).unwrap();
        let x = sphere.exp_map(array![0.0, 0.0].view()).unwrap();
        assert_abs_diff_eq!(x[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x[1], 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(x[2], 0.8, epsilon = 1e-12);
    }

    #[test]
    fn canonical_sphere_rejects_zero_dimension() {
        assert!(Sphere::<f64>::canonical(0).is_err());
    }

    #[test]
    fn anchored_rejects_non_unit_reference() {
        assert!(Sphere::anchored_at(array![1.0_f64, 1.0].view()).is_err());
    }
}
