//! Line-driven front end: each line fills a form and submits it.

use crate::{
    Result,
    api::SelectedFile,
    form::{FileInput, SubmitEvent, TextInput},
    page::Page,
};
use std::path::PathBuf;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    task::JoinSet,
};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Ingest(PathBuf),
    Query(String),
    Exit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
///
/// Query text is everything after the single separator following the verb,
/// sent unchanged.
pub fn parse_command(line: &str) -> std::result::Result<Option<ShellCommand>, String> {
    let line = line.trim_start();
    if line.trim_end().is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest),
        None => (line, ""),
    };

    match verb {
        "ingest" if !rest.trim().is_empty() => Ok(Some(ShellCommand::Ingest(PathBuf::from(
            rest.trim(),
        )))),
        "ingest" => Err("usage: ingest <path>".to_string()),
        // An empty query is still a submission.
        "query" => Ok(Some(ShellCommand::Query(rest.to_string()))),
        "exit" | "quit" => Ok(Some(ShellCommand::Exit)),
        other => Err(format!("unknown command '{}': expected ingest, query or exit", other)),
    }
}

/// Reads commands until EOF or `exit`, then waits for in-flight submissions.
///
/// Every submission runs as its own task; nothing is debounced and
/// completions are not ordered.
pub async fn run<R>(page: Page, input: R) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut in_flight = JoinSet::new();
    let mut submitted = 0;

    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(usage) => {
                warn!("{}", usage);
                eprintln!("{}", usage);
                continue;
            }
        };

        match command {
            ShellCommand::Exit => break,
            ShellCommand::Ingest(path) => {
                let file = match SelectedFile::from_path(&path).await {
                    Ok(file) => file,
                    Err(e) => {
                        warn!("Cannot read {}: {}", path.display(), e);
                        page.report_error(&e);
                        continue;
                    }
                };
                submitted += 1;
                let page = page.clone();
                in_flight.spawn(async move {
                    let input = FileInput::with_file(file);
                    // Failures are already reported through the screen.
                    let _ = page.submit_ingest(&mut SubmitEvent::new(), &input).await;
                });
            }
            ShellCommand::Query(text) => {
                submitted += 1;
                let page = page.clone();
                in_flight.spawn(async move {
                    let input = TextInput::new(text);
                    let _ = page.submit_query(&mut SubmitEvent::new(), &input).await;
                });
            }
        }
    }

    debug!("Waiting for {} in-flight submissions", in_flight.len());
    while let Some(joined) = in_flight.join_next().await {
        if let Err(e) = joined {
            warn!("Submission task failed: {}", e);
        }
    }

    Ok(submitted)
}
