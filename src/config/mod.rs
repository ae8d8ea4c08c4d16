//! 허용 오차 설정

pub mod constants;

use constants::Constants;

/// 맵과 검증에 쓰이는 허용 오차 묶음
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerances {
    /// 구면 위의 점으로 인정하는 노름 오차
    pub unit_norm: f64,
    /// 로그 맵에서 영벡터를 반환하는 각도 임계값
    pub small_angle: f64,
    /// 대척점 판정 임계값 (π - r)
    pub antipodal: f64,
    /// 기준점의 비축 성분 허용 크기
    pub alignment: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            unit_norm: Constants::UNIT_NORM_EPS,
            small_angle: Constants::SMALL_ANGLE_EPS,
            antipodal: Constants::ANTIPODAL_EPS,
            alignment: Constants::ALIGNMENT_EPS,
        }
    }
}
