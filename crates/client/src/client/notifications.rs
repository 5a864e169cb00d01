//! Support-notifications notification routes.

use std::time::Duration;

use super::devices::non_empty;
use crate::client::EdgexClient;
use crate::error::Result;
use crate::models::{NOTIFICATION_STATUSES, Notification, UpdateOutcome, ensure_member};
use crate::resource::{ListQuery, ListResult, Resource};

/// Which notifications to list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationFilter {
    Category(String),
    Label(String),
    /// One of `NEW`, `PROCESSED`, `ESCALATED`.
    Status(String),
}

impl NotificationFilter {
    fn path(&self) -> Result<String> {
        Ok(match self {
            Self::Category(c) => format!("notification/category/{}", non_empty("category", c)?),
            Self::Label(l) => format!("notification/label/{}", non_empty("label", l)?),
            Self::Status(s) => format!(
                "notification/status/{}",
                ensure_member("notification status", s, &NOTIFICATION_STATUSES)?
            ),
        })
    }
}

impl EdgexClient {
    pub async fn list_notifications(
        &self,
        filter: &NotificationFilter,
        query: &ListQuery,
    ) -> Result<ListResult<Notification>> {
        let path = filter.path()?;
        self.resource::<Notification>().list_at(&path, query).await
    }

    /// Delete processed notifications older than `age` (milliseconds on the wire).
    pub async fn delete_notifications_older_than(&self, age: Duration) -> Result<UpdateOutcome> {
        let path = format!("notification/age/{}", age.as_millis());
        self.delete(Notification::SERVICE, &path).await
    }
}
