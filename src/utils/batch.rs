//! 행 단위 배치 실행
//!
//! `parallel` 기능이 켜져 있으면 rayon 으로 행을 병렬 처리한다.
//! 결과는 순차 실행과 동일하다.

use crate::error::Result;
use crate::utils::numeric::{ensure_same_dim, Scalar};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// 각 행에 `op` 을 적용하고 첫 번째 오류에서 중단
pub fn try_map_rows<F, T, Op>(xs: ArrayView2<F>, op: Op) -> Result<Vec<T>>
where
    F: Scalar,
    T: Send,
    Op: Fn(ArrayView1<F>) -> Result<T> + Send + Sync,
{
    let rows: Vec<ArrayView1<F>> = xs.outer_iter().collect();

    #[cfg(feature = "parallel")]
    let out = rows.into_par_iter().map(&op).collect();

    #[cfg(not(feature = "parallel"))]
    let out = rows.into_iter().map(&op).collect();

    out
}

/// 각 행을 길이 `width` 의 벡터로 보내 2D 배열로 다시 쌓는다
pub fn map_rows<F, Op>(xs: ArrayView2<F>, width: usize, op: Op) -> Result<Array2<F>>
where
    F: Scalar,
    Op: Fn(ArrayView1<F>) -> Result<Array1<F>> + Send + Sync,
{
    let rows = try_map_rows(xs, op)?;
    let mut result = Array2::zeros((rows.len(), width));
    for (mut dst, src) in result.outer_iter_mut().zip(rows.iter()) {
        ensure_same_dim(width, src.len())?;
        dst.assign(src);
    }
    Ok(result)
}
