//! 수치 안정성을 위한 상수값 정의

/// 구면 기하 연산의 수치 안정성을 위한 상수들
pub struct Constants;

impl Constants {
    /// 단위 노름 판정 허용 오차 (|‖v‖ - 1|)
    pub const UNIT_NORM_EPS: f64 = 1e-6;

    /// 이 값보다 작은 측지 각도는 0으로 간주
    pub const SMALL_ANGLE_EPS: f64 = 1e-12;

    /// π 와의 차이가 이 값보다 작으면 대척점으로 간주
    pub const ANTIPODAL_EPS: f64 = 1e-9;

    /// 기준점이 마지막 축에 정렬되었다고 볼 수 있는 비축 성분 크기
    pub const ALIGNMENT_EPS: f64 = 1e-9;

    /// 정렬에 필요한 최소 차원 (n = d + 1 >= 2)
    pub const MIN_AMBIENT_DIM: usize = 2;
}
