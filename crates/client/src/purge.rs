//! Database purge: list-then-delete every item of a fixed sequence of resources.
//!
//! Responsibilities:
//! - Walk [`PurgeStep::ORDER`] sequentially, listing each resource with `limit = -1`
//!   and deleting every item with one request per item.
//! - Report progress through a caller-supplied callback.
//!
//! Does NOT handle:
//! - Confirmation prompts or rendering (the CLI does that).
//! - Transactions: items deleted before a failure stay deleted.
//!
//! Invariants:
//! - A failed delete is recorded and the loop continues with the next item.
//! - A failed listing aborts only its own step; the next step still runs.
//! - `run` always completes and returns one report per step.

use std::fmt;

use serde::Serialize;

use crate::client::EdgexClient;
use crate::error::ClientError;
use crate::models::{
    Device, DeviceProfile, DeviceService, Event, Interval, IntervalAction, ProvisionWatcher,
};
use crate::resource::{ListQuery, Resource};

/// One resource type cleared by the purge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PurgeStep {
    ProvisionWatchers,
    Devices,
    DeviceProfiles,
    DeviceServices,
    IntervalActions,
    Intervals,
    Events,
}

impl PurgeStep {
    /// Dependents before the things they reference.
    pub const ORDER: [PurgeStep; 7] = [
        PurgeStep::ProvisionWatchers,
        PurgeStep::Devices,
        PurgeStep::DeviceProfiles,
        PurgeStep::DeviceServices,
        PurgeStep::IntervalActions,
        PurgeStep::Intervals,
        PurgeStep::Events,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::ProvisionWatchers => "provision watchers",
            Self::Devices => "devices",
            Self::DeviceProfiles => "device profiles",
            Self::DeviceServices => "device services",
            Self::IntervalActions => "interval actions",
            Self::Intervals => "intervals",
            Self::Events => "events",
        }
    }
}

impl fmt::Display for PurgeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of clearing one resource type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteReport {
    pub resource: PurgeStep,
    pub attempted: usize,
    pub succeeded: usize,
    /// `(name or id, error message)` for every item that could not be deleted.
    pub failures: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_error: Option<String>,
}

impl DeleteReport {
    fn new(resource: PurgeStep) -> Self {
        Self {
            resource,
            attempted: 0,
            succeeded: 0,
            failures: Vec::new(),
            list_error: None,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.list_error.is_none() && self.failures.is_empty()
    }
}

/// Progress notifications emitted while purging.
#[derive(Debug)]
pub enum PurgeEvent<'a> {
    StepStarted { step: PurgeStep, total: usize },
    ItemDeleted { step: PurgeStep, key: &'a str },
    ItemFailed { step: PurgeStep, key: &'a str, error: &'a ClientError },
    ListFailed { step: PurgeStep, error: &'a ClientError },
    StepFinished { report: &'a DeleteReport },
}

/// Runs the purge against one client.
pub struct PurgeOrchestrator<'a> {
    client: &'a EdgexClient,
    steps: Vec<PurgeStep>,
}

impl<'a> PurgeOrchestrator<'a> {
    pub fn new(client: &'a EdgexClient) -> Self {
        Self {
            client,
            steps: PurgeStep::ORDER.to_vec(),
        }
    }

    /// Restrict the purge to `steps`, still run in the order given.
    pub fn with_steps(mut self, steps: &[PurgeStep]) -> Self {
        self.steps = steps.to_vec();
        self
    }

    pub fn steps(&self) -> &[PurgeStep] {
        &self.steps
    }

    pub async fn run<F>(&self, mut on_event: F) -> Vec<DeleteReport>
    where
        F: FnMut(&PurgeEvent<'_>),
    {
        let mut reports = Vec::with_capacity(self.steps.len());
        for &step in &self.steps {
            let report = match step {
                PurgeStep::ProvisionWatchers => {
                    self.clear::<ProvisionWatcher, _>(step, &mut on_event).await
                }
                PurgeStep::Devices => self.clear::<Device, _>(step, &mut on_event).await,
                PurgeStep::DeviceProfiles => {
                    self.clear::<DeviceProfile, _>(step, &mut on_event).await
                }
                PurgeStep::DeviceServices => {
                    self.clear::<DeviceService, _>(step, &mut on_event).await
                }
                PurgeStep::IntervalActions => {
                    self.clear::<IntervalAction, _>(step, &mut on_event).await
                }
                PurgeStep::Intervals => self.clear::<Interval, _>(step, &mut on_event).await,
                PurgeStep::Events => self.clear::<Event, _>(step, &mut on_event).await,
            };
            on_event(&PurgeEvent::StepFinished { report: &report });
            reports.push(report);
        }
        reports
    }

    async fn clear<R, F>(&self, step: PurgeStep, on_event: &mut F) -> DeleteReport
    where
        R: Resource,
        F: FnMut(&PurgeEvent<'_>),
    {
        let mut report = DeleteReport::new(step);
        let resource = self.client.resource::<R>();

        let items = match resource.list(&ListQuery::all()).await {
            Ok(result) => result.items,
            Err(error) => {
                tracing::warn!(resource = %step, error = %error, "failed to list items for purge");
                on_event(&PurgeEvent::ListFailed { step, error: &error });
                report.list_error = Some(error.to_string());
                return report;
            }
        };

        on_event(&PurgeEvent::StepStarted {
            step,
            total: items.len(),
        });
        tracing::info!(resource = %step, count = items.len(), "purging");

        for item in &items {
            report.attempted += 1;
            let key = if R::BY_NAME {
                item.item_name()
            } else {
                item.item_id()
            };
            let Some(key) = key.filter(|k| !k.trim().is_empty()) else {
                let error = ClientError::Validation(format!(
                    "{} without a name or id cannot be deleted",
                    R::DISPLAY_NAME
                ));
                tracing::warn!(resource = %step, error = %error, "skipping item");
                on_event(&PurgeEvent::ItemFailed {
                    step,
                    key: "<unnamed>",
                    error: &error,
                });
                report
                    .failures
                    .push(("<unnamed>".to_string(), error.to_string()));
                continue;
            };

            let result = if R::BY_NAME {
                resource.delete_by_name(key).await
            } else {
                resource.delete_by_id(key).await
            };
            match result {
                Ok(_) => {
                    report.succeeded += 1;
                    on_event(&PurgeEvent::ItemDeleted { step, key });
                }
                Err(error) => {
                    tracing::warn!(resource = %step, key, error = %error, "failed to delete item");
                    on_event(&PurgeEvent::ItemFailed {
                        step,
                        key,
                        error: &error,
                    });
                    report.failures.push((key.to_string(), error.to_string()));
                }
            }
        }
        report
    }
}
