//! Ping, version, config and metrics across the selected services.
//!
//! Responsibilities:
//! - Query every selected service in turn and print one entry per service.
//! - Fail (after printing) when any service did not answer.
//!
//! Invariants:
//! - Output order follows the order of the selected services.
//! - The exit code comes from the first failing service's error.

use anyhow::Result;
use edgex_client::ServiceReport;
use serde::Serialize;
use tracing::info;

use super::CommandContext;
use crate::args::ServiceSelector;
use crate::formatters::{
    Formatter, ResourceDisplay, ServiceDocument, output_result, with_formatter,
};

/// Which system route to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemQuery {
    Ping,
    Version,
    Config,
    Metrics,
}

impl SystemQuery {
    fn label(self) -> &'static str {
        match self {
            Self::Ping => "ping",
            Self::Version => "version",
            Self::Config => "config",
            Self::Metrics => "metrics",
        }
    }
}

pub async fn run(ctx: &CommandContext, query: SystemQuery, selector: &ServiceSelector) -> Result<()> {
    let services = selector.services();
    info!(
        "Querying {} on {} service(s)",
        query.label(),
        services.len()
    );
    let label = format!("Querying {} on {} service(s)", query.label(), services.len());

    match query {
        SystemQuery::Ping => {
            let reports = ctx.run(label, infallible(ctx.client.ping_services(&services))).await?;
            print_reports(ctx, &reports)?;
            fail_on_errors(reports, query)
        }
        SystemQuery::Version => {
            let reports = ctx
                .run(label, infallible(ctx.client.version_services(&services)))
                .await?;
            print_reports(ctx, &reports)?;
            fail_on_errors(reports, query)
        }
        SystemQuery::Config => {
            let reports = ctx
                .run(label, infallible(ctx.client.config_services(&services)))
                .await?;
            print_documents(ctx, &reports)?;
            fail_on_errors(reports, query)
        }
        SystemQuery::Metrics => {
            let reports = ctx
                .run(label, infallible(ctx.client.metrics_services(&services)))
                .await?;
            print_documents(ctx, &reports)?;
            fail_on_errors(reports, query)
        }
    }
}

/// Adapt a future that cannot fail to the `Result` shape `CommandContext::run` expects.
async fn infallible<T>(future: impl std::future::Future<Output = T>) -> Result<T> {
    Ok(future.await)
}

fn print_reports<T>(ctx: &CommandContext, reports: &[ServiceReport<T>]) -> Result<()>
where
    T: ResourceDisplay + Serialize,
{
    let text = with_formatter!(ctx.output.format, |f| f.format_service_reports(reports))?;
    output_result(&text, &ctx.output)
}

fn print_documents<T>(ctx: &CommandContext, reports: &[ServiceReport<T>]) -> Result<()>
where
    T: ServiceDocument + Serialize,
{
    let text = with_formatter!(ctx.output.format, |f| f.format_service_documents(reports))?;
    output_result(&text, &ctx.output)
}

fn fail_on_errors<T>(reports: Vec<ServiceReport<T>>, query: SystemQuery) -> Result<()> {
    let total = reports.len();
    let mut failures = reports
        .into_iter()
        .filter_map(|report| report.result.err().map(|e| (report.service, e)));

    let Some((service, first)) = failures.next() else {
        return Ok(());
    };
    let failed = 1 + failures.count();

    Err(anyhow::Error::new(first).context(format!(
        "{} of {} services failed {} (first: {})",
        failed,
        total,
        query.label(),
        service
    )))
}
