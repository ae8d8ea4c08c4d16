//! 기븐스 회전을 이용한 축 정렬 모듈

mod align;
mod givens;
mod planar;

pub use align::{align, align_forward, align_reverse, align_rows, Alignment};
pub use givens::{compose_dense, GivensRotation};
pub use planar::{is_degenerate_pair, planar_rotation, solve_planar, PlanarRotation};

use crate::error::{GeometryError, Result};

/// 정렬 방향
///
/// `Forward` 는 0번 축으로, `Reverse` 는 마지막 축으로 벡터를 보낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlignDirection {
    /// 0번 축 정렬 (마지막 2차원 쌍부터 처리)
    Forward,
    /// 마지막 축 정렬 (첫 2차원 쌍부터 처리)
    Reverse,
}

impl AlignDirection {
    /// 2-벡터에서 남겨둘 성분 인덱스로부터 방향 결정
    pub fn from_target_index(target_index: usize) -> Result<Self> {
        match target_index {
            0 => Ok(AlignDirection::Forward),
            1 => Ok(AlignDirection::Reverse),
            other => Err(GeometryError::InvalidTargetIndex(other)),
        }
    }

    /// n 차원에서 값이 남는 축
    pub fn target_axis(self, n: usize) -> usize {
        match self {
            AlignDirection::Forward => 0,
            AlignDirection::Reverse => n.saturating_sub(1),
        }
    }

    /// 처리할 쌍 (k, k+1) 의 k 를 처리 순서대로 반환
    pub fn pair_order(self, n: usize) -> impl Iterator<Item = usize> {
        let pairs = n.saturating_sub(1);
        (0..pairs).map(move |i| match self {
            AlignDirection::Forward => pairs - 1 - i,
            AlignDirection::Reverse => i,
        })
    }
}
