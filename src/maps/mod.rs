//! 구면 로그 맵과 지수 맵
//!
//! 기준점은 마지막 축 e_d 에 정렬되어 있다고 가정한다.
//! 임의의 기준점에서는 [`crate::manifolds::Sphere::anchored_at`] 을 사용한다.

use crate::config::constants::Constants;
use crate::config::Tolerances;
use crate::error::{GeometryError, Result};
use crate::utils::numeric::{
    clamped_angle, ensure_finite, ensure_min_dim, ensure_same_dim, ensure_unit, l2_norm, sinc,
    Scalar,
};
use ndarray::{s, Array1, ArrayView1};
use tracing::{debug, trace};

/// n 차원의 표준 기준점 e_{n-1} = (0, …, 0, 1)
pub fn canonical_point<F: Scalar>(n: usize) -> Result<Array1<F>> {
    ensure_min_dim(n, 1)?;
    let mut e = Array1::zeros(n);
    e[n - 1] = F::one();
    Ok(e)
}

/// 로그 맵: 구면 점 p → 기준점 q 에서의 접벡터 (차원 d)
pub fn log_map<F: Scalar>(q: ArrayView1<F>, p: ArrayView1<F>) -> Result<Array1<F>> {
    log_map_with(q, p, &Tolerances::default())
}

/// 허용 오차를 지정하는 로그 맵
pub fn log_map_with<F: Scalar>(
    q: ArrayView1<F>,
    p: ArrayView1<F>,
    tol: &Tolerances,
) -> Result<Array1<F>> {
    let n = q.len();
    ensure_min_dim(n, Constants::MIN_AMBIENT_DIM)?;
    ensure_same_dim(n, p.len())?;
    ensure_unit(q, tol)?;
    ensure_unit(p, tol)?;
    ensure_aligned(q, tol)?;

    let d = n - 1;
    let r = clamped_angle(q, p);
    if r.as_f64() <= tol.small_angle {
        trace!(angle = ?r, "coincident points, zero tangent vector");
        return Ok(Array1::zeros(d));
    }
    let pi = F::of(std::f64::consts::PI);
    if (pi - r).as_f64() <= tol.antipodal {
        debug!(angle = ?r, "antipodal points, log map undefined");
        return Err(GeometryError::AntipodalPoints { angle: r.as_f64() });
    }

    let scale = r / r.sin();
    Ok(p.slice(s![..d]).mapv(|v| v * scale))
}

/// 지수 맵: 접벡터 p (차원 d) → e_d 기준 구면 점 (차원 d + 1)
pub fn exp_map<F: Scalar>(p: ArrayView1<F>) -> Result<Array1<F>> {
    let d = p.len();
    ensure_min_dim(d, 1)?;
    ensure_finite(p)?;

    let r = l2_norm(p);
    if !r.is_finite() {
        return Err(GeometryError::NonFiniteParameter { name: "norm" });
    }
    let m = sinc(r);
    let mut out = Array1::zeros(d + 1);
    out.slice_mut(s![..d]).assign(&p.mapv(|v| v * m));
    out[d] = r.cos();
    Ok(out)
}

/// 두 단위 벡터 사이의 측지 거리 (라디안)
pub fn geodesic_distance<F: Scalar>(u: ArrayView1<F>, v: ArrayView1<F>) -> Result<F> {
    geodesic_distance_with(u, v, &Tolerances::default())
}

pub fn geodesic_distance_with<F: Scalar>(
    u: ArrayView1<F>,
    v: ArrayView1<F>,
    tol: &Tolerances,
) -> Result<F> {
    ensure_same_dim(u.len(), v.len())?;
    ensure_unit(u, tol)?;
    ensure_unit(v, tol)?;
    Ok(clamped_angle(u, v))
}

/// 측지선 보간: t = 0 에서 u, t = 1 에서 v
pub fn geodesic<F: Scalar>(u: ArrayView1<F>, v: ArrayView1<F>, t: F) -> Result<Array1<F>> {
    geodesic_with(u, v, t, &Tolerances::default())
}

pub fn geodesic_with<F: Scalar>(
    u: ArrayView1<F>,
    v: ArrayView1<F>,
    t: F,
    tol: &Tolerances,
) -> Result<Array1<F>> {
    if !t.is_finite() {
        return Err(GeometryError::NonFiniteParameter { name: "t" });
    }
    let angle = geodesic_distance_with(u, v, tol)?;
    if angle.as_f64() <= tol.small_angle {
        return Ok(u.to_owned());
    }
    let pi = F::of(std::f64::consts::PI);
    if (pi - angle).as_f64() <= tol.antipodal {
        return Err(GeometryError::AntipodalPoints {
            angle: angle.as_f64(),
        });
    }

    let sin_angle = angle.sin();
    let u_coef = ((F::one() - t) * angle).sin() / sin_angle;
    let v_coef = (t * angle).sin() / sin_angle;
    Ok(&u.mapv(|x| x * u_coef) + &v.mapv(|x| x * v_coef))
}

/// q 가 마지막 축 방향 (q_d > 0, 나머지 ≈ 0) 인지 확인
fn ensure_aligned<F: Scalar>(q: ArrayView1<F>, tol: &Tolerances) -> Result<()> {
    let d = q.len() - 1;
    let residual = l2_norm(q.slice(s![..d])).as_f64();
    if residual > tol.alignment || q[d] <= F::zero() {
        return Err(GeometryError::ReferenceNotAligned { residual });
    }
    Ok(())
}
