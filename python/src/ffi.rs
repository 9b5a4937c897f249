//! ffi.rs
//! dict <-> DeviceAppsRecord conversion and the `pb` module functions.
//!
//! Accepted record shape (every key optional, `None` counts as absent):
//! `{"device": {"type": str, "id": str}, "lat": float|int, "lon": float|int, "apps": [int]}`

use pyo3::exceptions::{PyIOError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use deviceapps_core::constants::{keys, DEVICE_APPS_TYPE, MAGIC};
use deviceapps_core::records::{Device, DeviceAppsRecord};
use deviceapps_core::{PbError, RecordStream};

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("MAGIC", MAGIC)?;
    m.add("DEVICE_APPS_TYPE", DEVICE_APPS_TYPE)?;
    m.add_class::<DeviceAppsIter>()?;
    m.add_function(wrap_pyfunction!(deviceapps_xwrite_pb, m)?)?;
    m.add_function(wrap_pyfunction!(deviceapps_xread_pb, m)?)?;
    Ok(())
}

/// Write serialized protobuf to file from an iterable of dicts.
/// Returns the number of uncompressed bytes written.
#[pyfunction]
fn deviceapps_xwrite_pb(py: Python<'_>, records: &Bound<'_, PyAny>, path: &str) -> PyResult<usize> {
    let mut parsed = Vec::new();
    for (index, item) in records.iter()?.enumerate() {
        let item = item?;
        let dict = item.downcast::<PyDict>().map_err(|_| {
            PyTypeError::new_err(format!("record {index}: expected dict, got {}", item.get_type()))
        })?;
        parsed.push(record_from_dict(dict, index)?);
    }

    py.allow_threads(|| deviceapps_core::write(&parsed, path))
        .map_err(to_py_err)
}

/// Deserialize protobuf from file, return iterator of dicts.
#[pyfunction]
fn deviceapps_xread_pb(path: &str) -> PyResult<DeviceAppsIter> {
    let inner = deviceapps_core::read(path).map_err(to_py_err)?;
    Ok(DeviceAppsIter { inner })
}

#[pyclass(module = "pb")]
pub struct DeviceAppsIter {
    inner: RecordStream,
}

#[pymethods]
impl DeviceAppsIter {
    fn __iter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    fn __next__<'py>(mut slf: PyRefMut<'py, Self>) -> PyResult<Option<Bound<'py, PyDict>>> {
        let py = slf.py();
        match slf.inner.next() {
            Some(Ok(record)) => record_to_dict(py, &record).map(Some),
            Some(Err(e)) => Err(to_py_err(e)),
            None => Ok(None),
        }
    }
}

fn to_py_err(e: PbError) -> PyErr {
    if e.is_io() {
        PyIOError::new_err(e.to_string())
    } else {
        PyValueError::new_err(e.to_string())
    }
}

// ================= dict -> record =================

fn record_from_dict(dict: &Bound<'_, PyDict>, index: usize) -> PyResult<DeviceAppsRecord> {
    let device = match present(dict, keys::DEVICE)? {
        Some(obj) => {
            let d = obj
                .downcast::<PyDict>()
                .map_err(|_| field_type_err(index, keys::DEVICE, "dict"))?;
            Some(Device {
                device_type: optional_str(d, keys::TYPE, index)?,
                id: optional_str(d, keys::ID, index)?,
            })
        }
        None => None,
    };

    let apps = match present(dict, keys::APPS)? {
        Some(obj) => obj
            .iter()
            .map_err(|_| field_type_err(index, keys::APPS, "list of int"))?
            .map(|app| app.and_then(|a| a.extract::<u32>()))
            .collect::<PyResult<Vec<u32>>>()
            .map_err(|e| PyValueError::new_err(format!("record {index}: {}: {e}", keys::APPS)))?,
        None => Vec::new(),
    };

    Ok(DeviceAppsRecord {
        device,
        lat: optional_f64(dict, keys::LAT, index)?,
        lon: optional_f64(dict, keys::LON, index)?,
        apps,
    })
}

fn present<'py>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<Option<Bound<'py, PyAny>>> {
    Ok(dict.get_item(key)?.filter(|v| !v.is_none()))
}

fn optional_str(dict: &Bound<'_, PyDict>, key: &'static str, index: usize) -> PyResult<Option<String>> {
    present(dict, key)?
        .map(|v| v.extract::<String>().map_err(|_| field_type_err(index, key, "str")))
        .transpose()
}

fn optional_f64(dict: &Bound<'_, PyDict>, key: &'static str, index: usize) -> PyResult<Option<f64>> {
    present(dict, key)?
        .map(|v| v.extract::<f64>().map_err(|_| field_type_err(index, key, "float or int")))
        .transpose()
}

fn field_type_err(index: usize, key: &str, expected: &str) -> PyErr {
    PyTypeError::new_err(format!("record {index}: {key} must be {expected}"))
}

// ================= record -> dict =================

fn record_to_dict<'py>(py: Python<'py>, record: &DeviceAppsRecord) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);

    if let Some(device) = &record.device {
        let d = PyDict::new_bound(py);
        if let Some(device_type) = &device.device_type {
            d.set_item(keys::TYPE, device_type)?;
        }
        if let Some(id) = &device.id {
            d.set_item(keys::ID, id)?;
        }
        dict.set_item(keys::DEVICE, d)?;
    }
    if let Some(lat) = record.lat {
        dict.set_item(keys::LAT, lat)?;
    }
    if let Some(lon) = record.lon {
        dict.set_item(keys::LON, lon)?;
    }
    dict.set_item(keys::APPS, PyList::new_bound(py, &record.apps))?;

    Ok(dict)
}
