//! Line-oriented interactive front end.
//!
//! Runs on a single task: commands read from the input and outcomes of
//! spawned fetches are both handled in one `select!` loop, so page state is
//! only ever touched from here.

use std::sync::Arc;

use log::{debug, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;

use crate::client::CocktailApi;
use crate::error::CocktailError;
use crate::session::{Command, Flow, Session, HELP};
use crate::views::{self, FetchOutcome, FetchRequest, Page};

const PROMPT: &str = "> ";

/// Run the shell until `quit` or end of input.
///
/// At end of input the loop keeps running until every request already
/// issued has been applied, then returns.
pub async fn run<R, W>(session: &mut Session, input: R, mut output: W) -> Result<(), CocktailError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (sender, mut receiver) = mpsc::unbounded_channel::<FetchOutcome>();
    let mut lines = input.lines();
    let mut reading = true;
    let mut pending = 0usize;

    write_page(session, &mut output).await?;

    while reading || pending > 0 {
        tokio::select! {
            line = lines.next_line(), if reading => {
                let Some(line) = line? else {
                    debug!("End of input with {} request(s) in flight", pending);
                    reading = false;
                    continue;
                };
                if line.trim().is_empty() {
                    output.write_all(PROMPT.as_bytes()).await?;
                    output.flush().await?;
                    continue;
                }

                match line.parse::<Command>().and_then(|command| session.handle(command)) {
                    Ok(Flow::Quit) => break,
                    Ok(Flow::ShowHelp) => {
                        output.write_all(HELP.as_bytes()).await?;
                        output.write_all(PROMPT.as_bytes()).await?;
                        output.flush().await?;
                    }
                    Ok(Flow::Continue(requests)) => {
                        pending += requests.len();
                        dispatch(session.api(), requests, &sender);
                        write_page(session, &mut output).await?;
                    }
                    Err(e) => {
                        output.write_all(format!("error: {}\n{}", e, PROMPT).as_bytes()).await?;
                        output.flush().await?;
                    }
                }
            }
            Some(outcome) = receiver.recv(), if pending > 0 => {
                pending -= 1;
                if session.apply(outcome) {
                    write_page(session, &mut output).await?;
                }
            }
        }
    }

    info!("Shell finished on {}", session.route());
    output.flush().await?;
    Ok(())
}

fn dispatch(
    api: Arc<dyn CocktailApi>,
    requests: Vec<FetchRequest>,
    sender: &mpsc::UnboundedSender<FetchOutcome>,
) {
    for request in requests {
        debug!("Dispatching {:?}", request);
        let api = Arc::clone(&api);
        let sender = sender.clone();
        tokio::spawn(async move {
            let outcome = views::execute(api.as_ref(), request).await;
            // the receiver only goes away once the shell has returned
            let _ = sender.send(outcome);
        });
    }
}

async fn write_page<W: AsyncWrite + Unpin>(
    session: &Session,
    output: &mut W,
) -> Result<(), CocktailError> {
    output.write_all(b"\n").await?;
    output.write_all(session.render().as_bytes()).await?;
    output.write_all(PROMPT.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}
