//! 파이썬 바인딩 (f64 배열)

use crate::error::GeometryError;
use numpy::{IntoPyArray, PyArray1, PyArray2, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

impl From<GeometryError> for PyErr {
    fn from(err: GeometryError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// (R, R·x), R·x = (‖x‖, 0, …, 0)
#[pyfunction]
fn align_forward<'py>(
    py: Python<'py>,
    x: PyReadonlyArray1<'py, f64>,
) -> PyResult<(&'py PyArray2<f64>, &'py PyArray1<f64>)> {
    let (r, aligned) = crate::rotation::align_forward(x.as_array())?;
    Ok((r.into_pyarray(py), aligned.into_pyarray(py)))
}

/// (R, R·x), R·x = (0, …, 0, ‖x‖)
#[pyfunction]
fn align_reverse<'py>(
    py: Python<'py>,
    x: PyReadonlyArray1<'py, f64>,
) -> PyResult<(&'py PyArray2<f64>, &'py PyArray1<f64>)> {
    let (r, aligned) = crate::rotation::align_reverse(x.as_array())?;
    Ok((r.into_pyarray(py), aligned.into_pyarray(py)))
}

#[pyfunction]
fn log_map<'py>(
    py: Python<'py>,
    q: PyReadonlyArray1<'py, f64>,
    p: PyReadonlyArray1<'py, f64>,
) -> PyResult<&'py PyArray1<f64>> {
    let v = crate::maps::log_map(q.as_array(), p.as_array())?;
    Ok(v.into_pyarray(py))
}

#[pyfunction]
fn exp_map<'py>(py: Python<'py>, p: PyReadonlyArray1<'py, f64>) -> PyResult<&'py PyArray1<f64>> {
    let x = crate::maps::exp_map(p.as_array())?;
    Ok(x.into_pyarray(py))
}

#[pymodule]
fn givens_sphere(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(align_forward, m)?)?;
    m.add_function(wrap_pyfunction!(align_reverse, m)?)?;
    m.add_function(wrap_pyfunction!(log_map, m)?)?;
    m.add_function(wrap_pyfunction!(exp_map, m)?)?;
    Ok(())
}
