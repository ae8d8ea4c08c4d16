//! n 차원에 삽입된 기븐스 회전

use super::PlanarRotation;
use crate::error::Result;
use crate::utils::numeric::{ensure_min_dim, Scalar};
use ndarray::{s, Array2, ArrayBase, DataMut, Ix1, Ix2, Zip};

/// 행/열 {index, index + 1} 에 평면 회전을 둔 기븐스 회전 G(k, θ)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GivensRotation<F> {
    pub index: usize,
    pub rotation: PlanarRotation<F>,
}

impl<F: Scalar> GivensRotation<F> {
    pub fn new(index: usize, rotation: PlanarRotation<F>) -> Self {
        Self { index, rotation }
    }

    /// n x n 행렬로 구체화
    pub fn matrix(&self, n: usize) -> Result<Array2<F>> {
        ensure_min_dim(n, self.index + 2)?;
        let mut g = Array2::eye(n);
        g.slice_mut(s![self.index..self.index + 2, self.index..self.index + 2])
            .assign(&self.rotation.matrix());
        Ok(g)
    }

    /// x ← G·x (두 성분만 갱신)
    pub fn apply_to_vector<S>(&self, x: &mut ArrayBase<S, Ix1>)
    where
        S: DataMut<Elem = F>,
    {
        let k = self.index;
        let (y0, y1) = self.rotation.apply(x[k], x[k + 1]);
        x[k] = y0;
        x[k + 1] = y1;
    }

    /// M ← G·M (두 행만 갱신)
    pub fn apply_to_rows<S>(&self, m: &mut ArrayBase<S, Ix2>)
    where
        S: DataMut<Elem = F>,
    {
        let k = self.index;
        let rotation = self.rotation;
        let (top, bottom) = m.multi_slice_mut((s![k, ..], s![k + 1, ..]));
        Zip::from(top).and(bottom).for_each(|a, b| {
            let (y0, y1) = rotation.apply(*a, *b);
            *a = y0;
            *b = y1;
        });
    }
}

/// 단계별 기븐스 행렬을 밀집 행렬곱으로 합성: G_N ··· G_1
///
/// 정렬 엔진의 제자리 갱신 결과를 검증할 때 쓴다.
pub fn compose_dense<F: Scalar>(steps: &[GivensRotation<F>], n: usize) -> Result<Array2<F>> {
    steps.iter().try_fold(Array2::eye(n), |r, step| {
        Ok(step.matrix(n)?.dot(&r))
    })
}
