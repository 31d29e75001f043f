//! The interactive line loop.
//!
//! Generic over the reader, the writer, and the shutdown signal so it can
//! be driven from stdin/stdout with Ctrl-C, or from memory in tests.

use std::future::Future;

use teller_ai::{Role, Session};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::commands::{parse_line, Command};

pub const GOODBYE: &str = "Thank you for using the Banking Bot. Goodbye!";
pub const CLEARED: &str = "Conversation history cleared.";

/// Read lines until `quit`, end of input, or `shutdown` resolves.
///
/// A shutdown during a pending model call abandons that call; the session
/// is left as it was before the turn.
pub async fn run<R, W, S>(
    session: &mut Session,
    input: R,
    mut out: W,
    shutdown: S,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    S: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    let mut lines = input.lines();

    loop {
        out.write_all(b"You: ").await?;
        out.flush().await?;

        let line = tokio::select! {
            line = lines.next_line() => Some(line?),
            _ = &mut shutdown => None,
        };

        let Some(line) = line else {
            out.write_all(format!("\n\n{GOODBYE}\n").as_bytes()).await?;
            break;
        };
        let Some(line) = line else {
            out.write_all(format!("\n{GOODBYE}\n").as_bytes()).await?;
            break;
        };

        let Some(command) = parse_line(&line) else {
            continue;
        };

        match command {
            Command::Quit => {
                out.write_all(format!("{GOODBYE}\n").as_bytes()).await?;
                break;
            }
            Command::Reset => {
                session.reset();
                tracing::debug!("History reset from terminal");
                out.write_all(format!("{CLEARED}\n\n").as_bytes()).await?;
            }
            Command::History => {
                out.write_all(format_history(session).as_bytes()).await?;
            }
            Command::Usage => {
                out.write_all(format_usage(session).as_bytes()).await?;
            }
            Command::Say(text) => {
                out.write_all(b"\nBot: ").await?;
                out.flush().await?;

                let reply = tokio::select! {
                    reply = session.send_or_error_text(&text) => Some(reply),
                    _ = &mut shutdown => None,
                };
                let Some(reply) = reply else {
                    out.write_all(format!("\n\n{GOODBYE}\n").as_bytes()).await?;
                    break;
                };
                out.write_all(format!("{reply}\n\n").as_bytes()).await?;
            }
        }
    }

    out.flush().await
}

fn format_history(session: &Session) -> String {
    if session.is_empty() {
        return "No conversation history yet.\n\n".to_string();
    }

    let mut text = String::new();
    for msg in session.history() {
        let speaker = match msg.role() {
            Role::User => "You",
            Role::Assistant => "Bot",
            Role::System => "System",
        };
        text.push_str(&format!("{speaker}: {}\n", msg.content()));
    }
    text.push('\n');
    text
}

fn format_usage(session: &Session) -> String {
    let tracker = session.tracker();
    let total = tracker.total();
    format!(
        "Tokens used: {} in / {} out across {} calls ({}).\n\n",
        total.input_tokens,
        total.output_tokens,
        tracker.call_count(),
        session.model_name()
    )
}
