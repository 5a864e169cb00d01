//! Data transfer objects mirroring the EdgeX v2 JSON contract.
//!
//! Field names follow the wire format via `rename_all = "camelCase"`.
//! Every `Update*` type carries mutable fields as `Option` and never
//! serializes `None`, so a PATCH only touches what the caller set.

mod command;
mod common;
mod device;
mod device_profile;
mod device_service;
mod event;
mod interval;
mod notification;
mod provision_watcher;
mod system;

pub use command::{CoreCommand, CoreCommandParameter, DeviceCoreCommand};
pub use common::{
    AddOutcome, Address, AdminState, AutoEvent, CountResponse, Extra, OperatingState,
    UpdateOutcome, Validate,
};
pub use device::{Device, Protocols, UpdateDevice};
pub use device_profile::{
    DeviceCommand, DeviceProfile, DeviceResource, ResourceOperation, ResourceProperties,
    UpdateDeviceProfileBasicInfo,
};
pub use device_service::{DeviceService, UpdateDeviceService};
pub use event::{Event, Reading};
pub use interval::{Interval, IntervalAction, UpdateInterval, UpdateIntervalAction};
pub use notification::{
    NOTIFICATION_STATUSES, Notification, SEVERITIES, Subscription, TRANSMISSION_STATUSES,
    Transmission, TransmissionRecord, UpdateSubscription, ensure_member,
};
pub use provision_watcher::{ProvisionWatcher, UpdateProvisionWatcher};
pub use system::{ConfigResponse, MetricsResponse, PingResponse, VersionResponse};
