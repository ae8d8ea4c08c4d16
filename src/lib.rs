//! GivensSphere: 구면 방향 데이터 통계를 위한 기하 도구 Rust 라이브러리
//!
//! 이 라이브러리는 기븐스 회전의 합성으로 벡터를 좌표축에 정렬하는
//! 회전 행렬과, 단위 구면 S^d 와 접평면 사이를 오가는
//! 로그/지수 맵을 제공합니다.

pub mod config;
pub mod error;
pub mod manifolds;
pub mod maps;
pub mod rotation;
pub mod utils;

#[cfg(feature = "python")]
pub mod python;

pub use config::Tolerances;
pub use error::{GeometryError, Result};
pub use manifolds::{Manifold, Sphere};
pub use maps::{canonical_point, exp_map, geodesic, geodesic_distance, log_map, log_map_with};
pub use rotation::{
    align, align_forward, align_reverse, align_rows, compose_dense, planar_rotation,
    solve_planar, AlignDirection, Alignment, GivensRotation, PlanarRotation,
};
pub use utils::numeric::Scalar;

/// 자주 사용되는 핵심 기능들을 쉽게 가져올 수 있는 prelude 모듈
pub mod prelude {
    pub use crate::{
        align, align_forward, align_reverse, exp_map, log_map, AlignDirection, Alignment,
        GeometryError, Manifold, Scalar, Sphere, Tolerances,
    };
}
