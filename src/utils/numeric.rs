//! 수치 계산 유틸리티 함수들

use crate::config::Tolerances;
use crate::error::{GeometryError, Result};
use ndarray::{ArrayView1, LinalgScalar, ScalarOperand};
use num::Float;
use std::fmt::{Debug, Display};

/// 크레이트 전체에서 쓰는 실수 스칼라 (f32, f64)
pub trait Scalar:
    Float + LinalgScalar + ScalarOperand + Debug + Display + Send + Sync
{
    /// f64 상수를 이 타입으로 변환
    fn of(x: f64) -> Self;

    /// 오류 보고용 f64 변환
    fn as_f64(self) -> f64;
}

macro_rules! impl_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn of(x: f64) -> Self {
                    x as $t
                }

                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_scalar!(f32, f64);

/// L2 노름 (hypot 누적, 제곱 오버플로우 없음)
pub fn l2_norm<F: Scalar>(x: ArrayView1<F>) -> F {
    x.iter().fold(F::zero(), |acc, &v| acc.hypot(v))
}

/// [-1, 1] 로 잘라낸 내적의 arccos (두 단위 벡터 사이의 각도)
pub fn clamped_angle<F: Scalar>(u: ArrayView1<F>, v: ArrayView1<F>) -> F {
    let one = F::one();
    u.dot(&v).max(-one).min(one).acos()
}

/// sin(r)/r, r = 0 에서는 극한값 1
pub fn sinc<F: Scalar>(r: F) -> F {
    if r > F::zero() {
        r.sin() / r
    } else {
        F::one()
    }
}

/// 모든 성분이 유한한지 확인
pub fn ensure_finite<F: Scalar>(x: ArrayView1<F>) -> Result<()> {
    match x.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(GeometryError::NonFinite { index }),
        None => Ok(()),
    }
}

/// 최소 차원 확인
pub fn ensure_min_dim(actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(GeometryError::DimensionTooSmall { min, actual });
    }
    Ok(())
}

/// 두 차원이 같은지 확인
pub fn ensure_same_dim(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(GeometryError::DimensionMismatch { expected, actual });
    }
    Ok(())
}

/// 유한하고 단위 노름인 구면 점인지 확인
pub fn ensure_unit<F: Scalar>(x: ArrayView1<F>, tol: &Tolerances) -> Result<()> {
    ensure_finite(x)?;
    let norm = l2_norm(x).as_f64();
    if (norm - 1.0).abs() > tol.unit_norm {
        return Err(GeometryError::NotUnitNorm {
            norm,
            tolerance: tol.unit_norm,
        });
    }
    Ok(())
}
