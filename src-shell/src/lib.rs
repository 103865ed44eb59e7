//! Mirage Browser - command shell
//!
//! Stands in for the UI layer: reads JSON requests from stdin, answers on
//! stdout, and drives the simulated load clock from a periodic tick. Load
//! progress is pushed as `{"event": "load", ...}` lines between responses.

pub mod commands;
pub mod state;

use mirage_core::LoadEvent;
use serde::Serialize;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::time::MissedTickBehavior;

use state::{AppState, ShellOptions};

#[derive(Serialize)]
struct EventLine<'a, T: Serialize> {
    event: &'static str,
    #[serde(flatten)]
    payload: &'a T,
}

async fn write_line<W, T>(out: &mut W, value: &T) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
    T: Serialize,
{
    let mut line = serde_json::to_vec(value)?;
    line.push(b'\n');
    out.write_all(&line).await?;
    out.flush().await?;
    Ok(())
}

pub async fn run() -> anyhow::Result<()> {
    // Initialize logging
    mirage_core::init_logging();

    let options = ShellOptions::parse(std::env::args().skip(1))?;
    let state = AppState::new(&options)?;

    tracing::info!(in_memory = options.in_memory, "Mirage shell started");
    serve(state).await
}

/// Serve requests until stdin closes.
pub async fn serve(state: AppState) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    let mut ticker = tokio::time::interval(state.tick_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last_tick = Instant::now();

    let ready = serde_json::json!({ "event": "ready", "version": env!("CARGO_PKG_VERSION") });
    write_line(&mut stdout, &ready).await?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }

                let response = commands::handle_line(&state, &line);
                write_line(&mut stdout, &response).await?;
            }
            _ = ticker.tick() => {
                let now = Instant::now();
                let events = state.advance(now - last_tick);
                last_tick = now;

                for event in &events {
                    write_line(&mut stdout, &load_event_line(event)).await?;
                }
            }
        }
    }

    tracing::info!("Input closed, shutting down");
    Ok(())
}

fn load_event_line(event: &LoadEvent) -> EventLine<'_, LoadEvent> {
    EventLine {
        event: "load",
        payload: event,
    }
}
