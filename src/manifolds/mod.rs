//! 다양체(manifold) 인터페이스와 구면 구현

mod sphere;

pub use sphere::Sphere;

use crate::error::Result;
use crate::utils::batch::map_rows;
use crate::utils::numeric::Scalar;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// 기준점에서의 접공간을 가진 다양체의 핵심 트레이트
pub trait Manifold<F: Scalar> {
    /// 외부 공간 차원 (d + 1)
    fn ambient_dim(&self) -> usize;

    /// 접공간 차원 (d)
    fn tangent_dim(&self) -> usize;

    /// 지수 맵(exp map): 접공간 → 다양체
    fn exp_map(&self, v: ArrayView1<F>) -> Result<Array1<F>>;

    /// 로그 맵(log map): 다양체 → 접공간
    fn log_map(&self, x: ArrayView1<F>) -> Result<Array1<F>>;

    /// 두 점 사이의 거리 계산
    fn dist(&self, u: ArrayView1<F>, v: ArrayView1<F>) -> Result<F>;

    /// 측지선(geodesic) 보간법
    fn geodesic(&self, u: ArrayView1<F>, v: ArrayView1<F>, t: F) -> Result<Array1<F>>;

    /// 행마다 지수 맵 적용
    fn exp_map_rows(&self, vs: ArrayView2<F>) -> Result<Array2<F>>
    where
        Self: Sync,
    {
        map_rows(vs, self.ambient_dim(), |v| self.exp_map(v))
    }

    /// 행마다 로그 맵 적용
    fn log_map_rows(&self, xs: ArrayView2<F>) -> Result<Array2<F>>
    where
        Self: Sync,
    {
        map_rows(xs, self.tangent_dim(), |x| self.log_map(x))
    }
}
