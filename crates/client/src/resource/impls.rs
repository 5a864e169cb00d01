//! Route and envelope tables for each EdgeX resource.

use super::Resource;
use crate::models::{
    Device, DeviceProfile, DeviceService, Event, Interval, IntervalAction, Notification,
    ProvisionWatcher, Reading, Subscription, Transmission, UpdateDevice,
    UpdateDeviceProfileBasicInfo, UpdateDeviceService, UpdateInterval, UpdateIntervalAction,
    UpdateProvisionWatcher, UpdateSubscription,
};
use edgex_config::ServiceName;

impl Resource for Device {
    type Update = UpdateDevice;
    const SERVICE: ServiceName = ServiceName::CoreMetadata;
    const ROUTE: &'static str = "device";
    const COLLECTION_KEY: &'static str = "devices";
    const ITEM_KEY: &'static str = "device";
    const DISPLAY_NAME: &'static str = "device";

    fn item_name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn item_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Resource for DeviceService {
    type Update = UpdateDeviceService;
    const SERVICE: ServiceName = ServiceName::CoreMetadata;
    const ROUTE: &'static str = "deviceservice";
    const COLLECTION_KEY: &'static str = "services";
    const ITEM_KEY: &'static str = "service";
    const DISPLAY_NAME: &'static str = "device service";

    fn item_name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn item_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Resource for DeviceProfile {
    type Update = UpdateDeviceProfileBasicInfo;
    const SERVICE: ServiceName = ServiceName::CoreMetadata;
    const ROUTE: &'static str = "deviceprofile";
    const COLLECTION_KEY: &'static str = "profiles";
    const ITEM_KEY: &'static str = "profile";
    const DISPLAY_NAME: &'static str = "device profile";

    fn update_path() -> String {
        "deviceprofile/basicinfo".to_string()
    }

    fn update_key() -> &'static str {
        "basicinfo"
    }

    fn item_name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn item_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Resource for ProvisionWatcher {
    type Update = UpdateProvisionWatcher;
    const SERVICE: ServiceName = ServiceName::CoreMetadata;
    const ROUTE: &'static str = "provisionwatcher";
    const COLLECTION_KEY: &'static str = "provisionWatchers";
    const ITEM_KEY: &'static str = "provisionWatcher";
    const DISPLAY_NAME: &'static str = "provision watcher";

    fn item_name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn item_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Events are added through `EdgexClient::add_event`, which needs the
/// profile, device and source names in the route.
impl Resource for Event {
    type Update = Event;
    const SERVICE: ServiceName = ServiceName::CoreData;
    const ROUTE: &'static str = "event";
    const COLLECTION_KEY: &'static str = "events";
    const ITEM_KEY: &'static str = "event";
    const DISPLAY_NAME: &'static str = "event";
    const BY_NAME: bool = false;
    const BY_ID: bool = true;
    const SUPPORTS_ADD: bool = false;
    const SUPPORTS_UPDATE: bool = false;

    fn item_name(&self) -> Option<&str> {
        None
    }

    fn item_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Resource for Reading {
    type Update = Reading;
    const SERVICE: ServiceName = ServiceName::CoreData;
    const ROUTE: &'static str = "reading";
    const COLLECTION_KEY: &'static str = "readings";
    const ITEM_KEY: &'static str = "reading";
    const DISPLAY_NAME: &'static str = "reading";
    const BY_NAME: bool = false;
    const BY_ID: bool = true;
    const SUPPORTS_ADD: bool = false;
    const SUPPORTS_UPDATE: bool = false;
    const SUPPORTS_DELETE: bool = false;

    fn item_name(&self) -> Option<&str> {
        None
    }

    fn item_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Resource for Interval {
    type Update = UpdateInterval;
    const SERVICE: ServiceName = ServiceName::SupportScheduler;
    const ROUTE: &'static str = "interval";
    const COLLECTION_KEY: &'static str = "intervals";
    const ITEM_KEY: &'static str = "interval";
    const DISPLAY_NAME: &'static str = "interval";

    fn item_name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn item_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Resource for IntervalAction {
    type Update = UpdateIntervalAction;
    const SERVICE: ServiceName = ServiceName::SupportScheduler;
    const ROUTE: &'static str = "intervalaction";
    const COLLECTION_KEY: &'static str = "actions";
    const ITEM_KEY: &'static str = "action";
    const DISPLAY_NAME: &'static str = "interval action";

    fn item_name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn item_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// support-notifications has no "all notifications" route; the default
/// listing is the unprocessed ones.
impl Resource for Notification {
    type Update = Notification;
    const SERVICE: ServiceName = ServiceName::SupportNotifications;
    const ROUTE: &'static str = "notification";
    const COLLECTION_KEY: &'static str = "notifications";
    const ITEM_KEY: &'static str = "notification";
    const DISPLAY_NAME: &'static str = "notification";
    const BY_NAME: bool = false;
    const BY_ID: bool = true;
    const SUPPORTS_UPDATE: bool = false;

    fn list_path() -> String {
        "notification/status/NEW".to_string()
    }

    fn item_name(&self) -> Option<&str> {
        None
    }

    fn item_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Resource for Subscription {
    type Update = UpdateSubscription;
    const SERVICE: ServiceName = ServiceName::SupportNotifications;
    const ROUTE: &'static str = "subscription";
    const COLLECTION_KEY: &'static str = "subscriptions";
    const ITEM_KEY: &'static str = "subscription";
    const DISPLAY_NAME: &'static str = "subscription";

    fn item_name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn item_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Resource for Transmission {
    type Update = Transmission;
    const SERVICE: ServiceName = ServiceName::SupportNotifications;
    const ROUTE: &'static str = "transmission";
    const COLLECTION_KEY: &'static str = "transmissions";
    const ITEM_KEY: &'static str = "transmission";
    const DISPLAY_NAME: &'static str = "transmission";
    const BY_NAME: bool = false;
    const BY_ID: bool = true;
    const SUPPORTS_ADD: bool = false;
    const SUPPORTS_UPDATE: bool = false;
    const SUPPORTS_DELETE: bool = false;

    fn item_name(&self) -> Option<&str> {
        None
    }

    fn item_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
