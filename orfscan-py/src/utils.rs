use pyo3::exceptions::{PyIOError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyString;

use orfscan_core::error::OrfError;
use orfscan_core::orf::{FrameMask, ScanParams, StartMode};

pub fn to_py_err(err: OrfError) -> PyErr {
    match err {
        OrfError::FastaIo(io) => PyIOError::new_err(io.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

pub fn extract_seq_bytes(obj: &Bound<'_, PyAny>) -> PyResult<Vec<u8>> {
    if let Ok(s) = obj.downcast::<PyString>() {
        return Ok(s.to_str()?.as_bytes().to_vec());
    }

    obj.extract::<Vec<u8>>()
        .map_err(|_| PyTypeError::new_err("expected str or bytes-like object"))
}

pub fn parse_start_mode(obj: &Bound<'_, PyAny>) -> PyResult<StartMode> {
    if let Ok(s) = obj.downcast::<PyString>() {
        return s.to_str()?.parse().map_err(to_py_err);
    }

    if let Ok(n) = obj.extract::<u32>() {
        return StartMode::try_from(n).map_err(to_py_err);
    }

    Err(PyValueError::new_err(
        "start_mode must be 0, 1, 2, \"start-to-stop\", \"any-to-stop\", or \"last-start-to-stop\"",
    ))
}

/// Frames as a bit mask int, a comma list such as `"1,3"`, or a sequence
/// of 1-based frame numbers.
pub fn parse_frames(obj: &Bound<'_, PyAny>) -> PyResult<FrameMask> {
    if let Ok(s) = obj.downcast::<PyString>() {
        return s.to_str()?.parse().map_err(to_py_err);
    }

    if let Ok(n) = obj.extract::<u32>() {
        return FrameMask::try_from(n).map_err(to_py_err);
    }

    if let Ok(frames) = obj.extract::<Vec<u32>>() {
        let mut mask = FrameMask::NONE;
        for frame in frames {
            mask = mask
                | match frame {
                    1 => FrameMask::FRAME_1,
                    2 => FrameMask::FRAME_2,
                    3 => FrameMask::FRAME_3,
                    _ => return Err(PyValueError::new_err("frames must be 1, 2, or 3")),
                };
        }
        return Ok(mask);
    }

    Err(PyValueError::new_err(
        "frames must be a bit mask int, a comma list str, or a list of 1, 2, 3",
    ))
}

pub fn build_scan_params(
    min_length: usize,
    max_length: usize,
    max_gaps: Option<usize>,
    forward_frames: Option<&Bound<'_, PyAny>>,
    reverse_frames: Option<&Bound<'_, PyAny>>,
    start_mode: Option<&Bound<'_, PyAny>>,
) -> PyResult<ScanParams> {
    let mut params = ScanParams::new(min_length, max_length, max_gaps.unwrap_or(usize::MAX));

    let forward = forward_frames
        .map(parse_frames)
        .transpose()?
        .unwrap_or(FrameMask::ALL);
    let reverse = reverse_frames
        .map(parse_frames)
        .transpose()?
        .unwrap_or(FrameMask::ALL);
    params = params.with_frames(forward, reverse);

    if let Some(mode) = start_mode {
        params = params.with_start_mode(parse_start_mode(mode)?);
    }
    Ok(params)
}
