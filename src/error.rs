//! 구면 기하 연산의 오류 타입

use thiserror::Error;

/// 회전 정렬과 로그/지수 맵에서 발생하는 오류
///
/// 퇴화된 2차원 부분공간이나 r = 0 특이점처럼 극한값이 정의된 경우는
/// 오류가 아니며 여기에 나타나지 않는다.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GeometryError {
    /// 두 입력의 차원이 다름
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// 연산에 필요한 최소 차원보다 작음
    #[error("dimension {actual} is too small: at least {min} components are required")]
    DimensionTooSmall { min: usize, actual: usize },

    /// NaN 또는 무한대 성분
    #[error("component {index} is not finite")]
    NonFinite { index: usize },

    /// NaN 또는 무한대 스칼라 인자
    #[error("parameter `{name}` is not finite")]
    NonFiniteParameter { name: &'static str },

    /// 단위 구면 위의 점이 아님
    #[error("point is not on the unit sphere: norm {norm} deviates from 1 by more than {tolerance}")]
    NotUnitNorm { norm: f64, tolerance: f64 },

    /// 기준점이 마지막 축에 정렬되어 있지 않음
    #[error("reference point is not aligned to the last axis: off-axis magnitude {residual}")]
    ReferenceNotAligned { residual: f64 },

    /// 대척점: 접방향이 유일하지 않음
    #[error("undefined tangent direction: points are antipodal (geodesic angle {angle})")]
    AntipodalPoints { angle: f64 },

    /// 평면 회전의 목표 인덱스는 0 또는 1
    #[error("planar rotation target index must be 0 or 1, got {0}")]
    InvalidTargetIndex(usize),
}

/// 크레이트 전역 결과 타입
pub type Result<T> = std::result::Result<T, GeometryError>;
