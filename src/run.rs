//! Application execution logic.
//!
//! This module dispatches subcommands to the library and prints their
//! results: API responses as pretty JSON, webhook deliveries as a short
//! summary.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use azdo::client::{Client, ClientError};
use azdo::config::Command;
use azdo::models::{GitRefListOptions, GitStatus, GitStatusContext};
use azdo::transport::HttpClient;
use azdo::webhook::{Event, EventPayload, WebhookError, parse_webhook};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The API call failed.
    #[error("API request failed: {0}")]
    Api(#[from] ClientError),

    /// A command that calls the API was run without a client.
    #[error("No connection settings available for this command")]
    NotConnected,

    /// Failed to read the webhook delivery.
    #[error("Failed to read delivery from '{}': {source}", path.display())]
    Input {
        /// The input path (`-` for stdin)
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The delivery could not be parsed.
    #[error(transparent)]
    Webhook(#[from] WebhookError),

    /// Failed to encode the result.
    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),

    /// Failed to write the result.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Executes one subcommand, writing its result to `out`.
///
/// # Errors
///
/// Returns an error if:
/// - An API command has no client, or the API call fails
/// - The webhook delivery cannot be read or parsed
/// - Writing the output fails
pub async fn execute<H: HttpClient, W: Write>(
    command: &Command,
    client: Option<&Client<H>>,
    out: &mut W,
) -> Result<(), RunError> {
    match command {
        Command::Init { .. } => Ok(()),
        Command::Webhook { input } => {
            let raw = read_input(input)?;
            let event = parse_webhook(&raw)?;
            tracing::info!(
                id = event.id.as_deref().unwrap_or_default(),
                "Parsed webhook delivery"
            );
            writeln!(out, "{}", describe(&event))?;
            Ok(())
        }
        Command::Refs {
            repo,
            ref_type,
            filter,
            include_statuses,
            latest_statuses_only,
        } => {
            let options = GitRefListOptions {
                filter: filter.clone().unwrap_or_default(),
                include_statuses: *include_statuses,
                latest_statuses_only: *latest_statuses_only,
            };
            let refs = connected(client)?
                .git()
                .list_refs(repo, ref_type, Some(&options))
                .await?;
            print_json(out, &refs)
        }
        Command::Repo { name } => {
            let repo = connected(client)?.git().get_repository(name).await?;
            print_json(out, &repo)
        }
        Command::Status {
            repo,
            commit,
            state,
            context_name,
            context_genre,
            description,
            target_url,
        } => {
            let status = GitStatus {
                state: Some((*state).into()),
                context: Some(GitStatusContext {
                    name: Some(context_name.clone()),
                    genre: context_genre.clone(),
                }),
                description: description.clone(),
                target_url: target_url.clone(),
                ..GitStatus::default()
            };
            let created = connected(client)?
                .git()
                .create_status(repo, commit, &status)
                .await?;
            tracing::info!(repo, commit, "Status posted");
            print_json(out, &created)
        }
    }
}

fn connected<H>(client: Option<&Client<H>>) -> Result<&Client<H>, RunError> {
    client.ok_or(RunError::NotConnected)
}

fn print_json<W: Write, T: serde::Serialize>(out: &mut W, value: &T) -> Result<(), RunError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Reads a delivery body from `path`, or stdin when `path` is `-`.
fn read_input(path: &Path) -> Result<Vec<u8>, RunError> {
    let wrap = |source| RunError::Input {
        path: path.to_path_buf(),
        source,
    };

    if path == Path::new("-") {
        let mut raw = Vec::new();
        std::io::stdin().read_to_end(&mut raw).map_err(wrap)?;
        Ok(raw)
    } else {
        std::fs::read(path).map_err(wrap)
    }
}

/// One-line summary of a parsed delivery.
fn describe(event: &Event) -> String {
    let kind = event.event_type.as_deref().unwrap_or("(none)");

    let summary = match &event.payload {
        None => format!(
            "untyped delivery {}",
            event.id.as_deref().unwrap_or("without id")
        ),
        Some(EventPayload::GitPush(push)) => format!(
            "push {} by {} to {} with {} commit(s)",
            push.push_id.unwrap_or_default(),
            push.pushed_by
                .as_ref()
                .and_then(|p| p.display_name.as_deref())
                .unwrap_or("unknown"),
            push.repository
                .as_ref()
                .and_then(|r| r.name.as_deref())
                .unwrap_or("unknown"),
            push.commits.as_ref().map_or(0, Vec::len),
        ),
        Some(EventPayload::BuildComplete(build)) => format!(
            "build {} {}",
            build.build_number.as_deref().unwrap_or("unknown"),
            build.result.map_or("without result", |r| r.as_str()),
        ),
        Some(EventPayload::WorkItemUpdated(update)) => format!(
            "work item {} revision {} changed {} field(s)",
            update.work_item_id.unwrap_or_default(),
            update.rev.unwrap_or_default(),
            update.fields.len(),
        ),
        Some(payload) => describe_shared(payload),
    };

    format!("{kind}: {summary}")
}

/// Summary for the payload kinds that share a shape.
fn describe_shared(payload: &EventPayload) -> String {
    if let Some(pr) = payload.pull_request() {
        format!(
            "pull request #{} '{}' ({})",
            pr.pull_request_id.unwrap_or_default(),
            pr.title.as_deref().unwrap_or_default(),
            pr.status.map_or("unknown", |s| s.as_str()),
        )
    } else if let Some(item) = payload.work_item() {
        format!(
            "work item {} '{}'",
            item.id.unwrap_or_default(),
            item.title().unwrap_or_default(),
        )
    } else {
        payload.event_type().to_string()
    }
}
