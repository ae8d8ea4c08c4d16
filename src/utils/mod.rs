//! 공용 수치 유틸리티와 배치 실행 도우미

pub mod batch;
pub mod numeric;
