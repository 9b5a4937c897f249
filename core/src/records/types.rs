//! records/types.rs
//! Record model and the errors raised while encoding/decoding it.

use std::string::FromUtf8Error;

use serde::{Deserialize, Serialize};

use crate::utils::fmt_bytes;

/// Device identity. Both fields may be absent independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Device {
    pub fn new(device_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            device_type: Some(device_type.into()),
            id: Some(id.into()),
        }
    }
}

/// One input entry: a device, its location and the apps installed on it.
///
/// JSON shape matches the dicts accepted by the Python module:
/// `{"device": {"type": "idfa", "id": "..."}, "lat": 1.0, "lon": 2.0, "apps": [1, 2]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceAppsRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(default)]
    pub apps: Vec<u32>,
}

impl DeviceAppsRecord {
    pub fn new(device: Device, apps: Vec<u32>) -> Self {
        Self {
            device: Some(device),
            lat: None,
            lon: None,
            apps,
        }
    }

    pub fn with_location(mut self, lat: f64, lon: f64) -> Self {
        self.lat = Some(lat);
        self.lon = Some(lon);
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("record {index}: {field} must be finite, got {value}")]
    InvalidCoordinate {
        index: usize,
        field: &'static str,
        value: f64,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("protobuf: {0}")]
    Protobuf(#[from] prost::DecodeError),

    #[error("device.{field} is not UTF-8: {}", fmt_bytes(.source.as_bytes()))]
    InvalidUtf8 {
        field: &'static str,
        source: FromUtf8Error,
    },
}
