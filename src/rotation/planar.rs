//! 2x2 평면 회전 계산

use super::AlignDirection;
use crate::error::Result;
use crate::utils::numeric::{ensure_same_dim, Scalar};
use ndarray::{array, Array2, ArrayView1};

/// [[cos, -sin], [sin, cos]] 형태의 평면 회전
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarRotation<F> {
    pub cos: F,
    pub sin: F,
}

impl<F: Scalar> PlanarRotation<F> {
    /// 항등 회전
    pub fn identity() -> Self {
        Self {
            cos: F::one(),
            sin: F::zero(),
        }
    }

    /// 2x2 행렬 형태
    pub fn matrix(&self) -> Array2<F> {
        array![[self.cos, -self.sin], [self.sin, self.cos]]
    }

    /// (a0, a1) 에 회전 적용
    #[inline]
    pub fn apply(&self, a0: F, a1: F) -> (F, F) {
        (
            self.cos * a0 - self.sin * a1,
            self.sin * a0 + self.cos * a1,
        )
    }
}

/// 크기가 0인 2-벡터 (회전각이 정의되지 않는 부분공간)
#[inline]
pub fn is_degenerate_pair<F: Scalar>(a0: F, a1: F) -> bool {
    !(a0.hypot(a1) > F::zero())
}

/// (a0, a1) 의 한 성분을 0으로 만드는 회전
///
/// `Forward` 는 (h, 0), `Reverse` 는 (0, h) 를 만든다 (h = hypot(a0, a1)).
/// 영벡터는 오류가 아니라 `Forward` 에서 항등, `Reverse` 에서 (cos, sin) = (0, 1) 이다.
pub fn planar_rotation<F: Scalar>(a0: F, a1: F, direction: AlignDirection) -> PlanarRotation<F> {
    let h = a0.hypot(a1);
    let degenerate = is_degenerate_pair(a0, a1);
    match direction {
        AlignDirection::Forward if degenerate => PlanarRotation::identity(),
        AlignDirection::Forward => PlanarRotation {
            cos: a0 / h,
            sin: -a1 / h,
        },
        AlignDirection::Reverse if degenerate => PlanarRotation {
            cos: F::zero(),
            sin: F::one(),
        },
        AlignDirection::Reverse => PlanarRotation {
            cos: a1 / h,
            sin: a0 / h,
        },
    }
}

/// 2-벡터 `a` 에서 `target_index` 성분만 남기는 회전
pub fn solve_planar<F: Scalar>(a: ArrayView1<F>, target_index: usize) -> Result<PlanarRotation<F>> {
    ensure_same_dim(2, a.len())?;
    let direction = AlignDirection::from_target_index(target_index)?;
    Ok(planar_rotation(a[0], a[1], direction))
}
