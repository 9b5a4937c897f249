//! records/convert.rs
//! Record <-> protobuf payload.

use prost::Message;

use crate::constants::keys;
use crate::records::proto;
use crate::records::types::{DecodeError, Device, DeviceAppsRecord, EncodeError};

/// Validate `record` and serialize it into a `DeviceApps` payload.
///
/// `index` is the record's position in its batch; it only feeds error messages.
pub fn encode_record(record: &DeviceAppsRecord, index: usize) -> Result<Vec<u8>, EncodeError> {
    check_coordinate(index, keys::LAT, record.lat)?;
    check_coordinate(index, keys::LON, record.lon)?;

    let msg = proto::DeviceApps {
        device: record.device.as_ref().map(|d| proto::DeviceAppsDevice {
            r#type: d.device_type.as_ref().map(|s| s.as_bytes().to_vec()),
            id: d.id.as_ref().map(|s| s.as_bytes().to_vec()),
        }),
        lat: record.lat,
        lon: record.lon,
        apps: record.apps.clone(),
    };

    Ok(msg.encode_to_vec())
}

/// Parse a `DeviceApps` payload back into a record.
pub fn decode_record(payload: &[u8]) -> Result<DeviceAppsRecord, DecodeError> {
    let msg = proto::DeviceApps::decode(payload)?;

    let device = match msg.device {
        Some(d) => Some(Device {
            device_type: d.r#type.map(|b| utf8(keys::TYPE, b)).transpose()?,
            id: d.id.map(|b| utf8(keys::ID, b)).transpose()?,
        }),
        None => None,
    };

    Ok(DeviceAppsRecord {
        device,
        lat: msg.lat,
        lon: msg.lon,
        apps: msg.apps,
    })
}

fn check_coordinate(index: usize, field: &'static str, value: Option<f64>) -> Result<(), EncodeError> {
    match value {
        Some(v) if !v.is_finite() => Err(EncodeError::InvalidCoordinate { index, field, value: v }),
        _ => Ok(()),
    }
}

fn utf8(field: &'static str, bytes: Vec<u8>) -> Result<String, DecodeError> {
    String::from_utf8(bytes).map_err(|source| DecodeError::InvalidUtf8 { field, source })
}
