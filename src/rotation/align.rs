//! 축 정렬 엔진
//!
//! 입력 벡터 x 에 대해 N = n - 1 개의 기븐스 회전을 차례로 합성하여
//! R·x 가 한 좌표축 위에 놓이도록 하는 회전 행렬 R 을 구한다.

use super::{is_degenerate_pair, planar_rotation, AlignDirection, GivensRotation};
use crate::config::constants::Constants;
use crate::error::Result;
use crate::utils::batch::try_map_rows;
use crate::utils::numeric::{ensure_finite, ensure_min_dim, Scalar};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use tracing::trace;

/// 정렬 결과
#[derive(Debug, Clone, PartialEq)]
pub struct Alignment<F> {
    /// 직교 회전 행렬 R (det = 1)
    pub rotation: Array2<F>,
    /// R·x
    pub aligned: Array1<F>,
    /// 적용 순서대로의 기븐스 회전
    pub steps: Vec<GivensRotation<F>>,
    pub direction: AlignDirection,
}

impl<F: Scalar> Alignment<F> {
    /// 값이 남는 축
    pub fn target_axis(&self) -> usize {
        self.direction.target_axis(self.aligned.len())
    }

    /// (R, R·x)
    pub fn into_parts(self) -> (Array2<F>, Array1<F>) {
        (self.rotation, self.aligned)
    }
}

/// x 를 `direction` 이 가리키는 축으로 보내는 회전 계산
pub fn align<F: Scalar>(x: ArrayView1<F>, direction: AlignDirection) -> Result<Alignment<F>> {
    let n = x.len();
    ensure_min_dim(n, Constants::MIN_AMBIENT_DIM)?;
    ensure_finite(x)?;

    let mut rotation = Array2::eye(n);
    let mut aligned = x.to_owned();
    let mut steps = Vec::with_capacity(n - 1);

    for k in direction.pair_order(n) {
        let (a0, a1) = (aligned[k], aligned[k + 1]);
        if is_degenerate_pair(a0, a1) {
            trace!(pair = k, ?direction, "degenerate 2-subspace, using fallback rotation");
        }
        let step = GivensRotation::new(k, planar_rotation(a0, a1, direction));
        step.apply_to_vector(&mut aligned);
        step.apply_to_rows(&mut rotation);
        steps.push(step);
    }

    Ok(Alignment {
        rotation,
        aligned,
        steps,
        direction,
    })
}

/// 0번 축 정렬: R·x = (‖x‖, 0, …, 0)
pub fn align_forward<F: Scalar>(x: ArrayView1<F>) -> Result<(Array2<F>, Array1<F>)> {
    align(x, AlignDirection::Forward).map(Alignment::into_parts)
}

/// 마지막 축 정렬: R·x = (0, …, 0, ‖x‖)
pub fn align_reverse<F: Scalar>(x: ArrayView1<F>) -> Result<(Array2<F>, Array1<F>)> {
    align(x, AlignDirection::Reverse).map(Alignment::into_parts)
}

/// 각 행을 독립적으로 정렬
pub fn align_rows<F: Scalar>(
    xs: ArrayView2<F>,
    direction: AlignDirection,
) -> Result<Vec<Alignment<F>>> {
    try_map_rows(xs, |row| align(row, direction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryError;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn rejects_one_dimensional_input() {
        let x = array![2.0_f64];
        assert_eq!(
            align_forward(x.view()).unwrap_err(),
            GeometryError::DimensionTooSmall { min: 2, actual: 1 }
        );
    }

    #[test]
    fn rejects_non_finite_input() {
        let x = array![1.0_f64, f64::NAN, 0.0];
        assert_eq!(
            align_reverse(x.view()).unwrap_err(),
            GeometryError::NonFinite { index: 1 }
        );
    }

    #[test]
    fn records_one_step_per_pair() {
        let x = array![1.0_f64, 2.0, 3.0, 4.0];
        let forward = align(x.view(), AlignDirection::Forward).unwrap();
        let indices: Vec<usize> = forward.steps.iter().map(|g| g.index).collect();
        assert_eq!(indices, vec![2, 1, 0]);
        assert_eq!(forward.target_axis(), 0);

        let reverse = align(x.view(), AlignDirection::Reverse).unwrap();
        let indices: Vec<usize> = reverse.steps.iter().map(|g| g.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(reverse.target_axis(), 3);
    }

    #[test]
    fn zero_vector_aligns_to_zero() {
        let x = Array1::<f64>::zeros(3);
        let (r, aligned) = align_reverse(x.view()).unwrap();
        assert!(aligned.iter().all(|v| *v == 0.0));
        let rrt = r.dot(&r.t());
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(rrt[[i, j]], expected, epsilon = 1e-15);
            }
        }
    }
}
