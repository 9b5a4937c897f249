//! records/proto.rs
//! Wire messages for the device-apps payload (proto2):
//!
//! ```proto
//! message DeviceApps {
//!   message Device {
//!     optional bytes type = 1;
//!     optional bytes id = 2;
//!   }
//!   optional Device device = 1;
//!   optional double lat = 2;
//!   optional double lon = 3;
//!   repeated uint32 apps = 4;
//! }
//! ```
//!
//! proto2 repeated scalars are unpacked unless declared otherwise, so `apps`
//! is written one tag per element.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceApps {
    #[prost(message, optional, tag = "1")]
    pub device: ::core::option::Option<DeviceAppsDevice>,
    #[prost(double, optional, tag = "2")]
    pub lat: ::core::option::Option<f64>,
    #[prost(double, optional, tag = "3")]
    pub lon: ::core::option::Option<f64>,
    #[prost(uint32, repeated, packed = "false", tag = "4")]
    pub apps: ::prost::alloc::vec::Vec<u32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceAppsDevice {
    #[prost(bytes = "vec", optional, tag = "1")]
    pub r#type: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "2")]
    pub id: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
}
