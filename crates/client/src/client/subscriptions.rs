//! Subscription listings by category, label or receiver.

use super::devices::non_empty;
use crate::client::EdgexClient;
use crate::error::Result;
use crate::models::Subscription;
use crate::resource::{ListQuery, ListResult};

/// Which subscriptions to list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionFilter {
    Category(String),
    Label(String),
    Receiver(String),
}

impl EdgexClient {
    pub async fn list_subscriptions_by(
        &self,
        filter: &SubscriptionFilter,
        query: &ListQuery,
    ) -> Result<ListResult<Subscription>> {
        let path = match filter {
            SubscriptionFilter::Category(c) => {
                format!("subscription/category/{}", non_empty("category", c)?)
            }
            SubscriptionFilter::Label(l) => format!("subscription/label/{}", non_empty("label", l)?),
            SubscriptionFilter::Receiver(r) => {
                format!("subscription/receiver/{}", non_empty("receiver", r)?)
            }
        };
        self.resource::<Subscription>().list_at(&path, query).await
    }
}
