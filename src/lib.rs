//! # math-exam
//!
//! A terminal form that asks a generative model for a math exam on a topic
//! and shows the question/answer pairs with per-question answer toggles.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use math_exam::{App, AppError, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::from_env()?;
//!     math_exam::launch(config, App::new()).await
//! }
//! ```

pub mod app;
pub mod config;
mod input;
pub mod logging;
pub mod models;
pub mod service;
pub mod terminal;
mod ui;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{error, info};

pub use app::{App, FormStatus};
pub use config::{Config, ConfigError};
pub use input::handle_key;
pub use models::{Exam, ExamRequest, QuestionAnswer, ValidationError};
pub use service::{ExamGenerator, GeminiClient, GenerationError};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Error type for running the exam generator.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Outcome delivered back to the event loop. `Err(None)` means the task
/// ended without a message.
pub type Outcome = Result<Exam, Option<String>>;

/// Build the Gemini client from `config` and run the TUI until the user quits.
pub async fn launch(config: Config, app: App) -> Result<(), AppError> {
    let client = GeminiClient::new(&config)?;
    info!(model = client.model(), endpoint = client.endpoint(), "starting");
    run(app, Arc::new(client)).await
}

/// Run the TUI with any generator.
///
/// Takes over the terminal and returns when the user quits.
pub async fn run(mut app: App, generator: Arc<dyn ExamGenerator>) -> Result<(), AppError> {
    let mut tui = terminal::Tui::enter()?;
    let result = run_event_loop(&mut tui, &mut app, generator).await;
    finish(result, tui.exit())
}

/// The event loop's error wins over a failure to restore the terminal.
fn finish(result: Result<(), AppError>, exited: io::Result<()>) -> Result<(), AppError> {
    result?;
    exited?;
    Ok(())
}

async fn run_event_loop(
    tui: &mut terminal::Tui,
    app: &mut App,
    generator: Arc<dyn ExamGenerator>,
) -> Result<(), AppError> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Outcome>();

    while !app.should_quit {
        while let Ok(outcome) = rx.try_recv() {
            match outcome {
                Ok(exam) => app.complete(Ok(exam)),
                Err(message) => app.fail(message),
            }
        }

        app.tick();
        tui.draw(app)?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if let Some(request) = handle_key(app, key) {
                    dispatch(Arc::clone(&generator), request, tx.clone());
                }
            }
        }
    }

    Ok(())
}

/// Run one generation request in the background and report its outcome.
pub fn dispatch(
    generator: Arc<dyn ExamGenerator>,
    request: ExamRequest,
    tx: mpsc::UnboundedSender<Outcome>,
) {
    tokio::spawn(async move {
        let task = tokio::spawn(async move {
            generator
                .generate_exam(&request.topic, request.question_count)
                .await
        });

        let outcome = match task.await {
            Ok(result) => result.map_err(|err| Some(err.to_string())),
            Err(join_error) => {
                error!(%join_error, "generation task did not finish");
                Err(None)
            }
        };
        let _ = tx.send(outcome);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io_error(message: &str) -> io::Error {
        io::Error::other(message.to_string())
    }

    #[test]
    fn test_loop_error_wins_over_restore_error() {
        let err = finish(Err(io_error("draw failed").into()), Err(io_error("restore failed")))
            .unwrap_err();
        assert_eq!(err.to_string(), "IO error: draw failed");
    }

    #[test]
    fn test_restore_error_reported_after_clean_loop() {
        let err = finish(Ok(()), Err(io_error("restore failed"))).unwrap_err();
        assert_eq!(err.to_string(), "IO error: restore failed");
    }

    #[test]
    fn test_clean_exit() {
        assert!(finish(Ok(()), Ok(())).is_ok());
    }
}
