//! Line-oriented front end for a [`BrowseSession`].
//!
//! Reads one command per line from stdin, routes it to the session and prints
//! the result. Session events arrive on a channel and drive the loading
//! indicator.

pub mod command;
pub mod render;

use anyhow::Context;
use ps_app::BrowseSession;
use ps_core::SessionEvent;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info};

use command::{parse_command, Command, HELP};

pub async fn run(
    mut session: BrowseSession,
    events: mpsc::UnboundedReceiver<SessionEvent>,
    fields: Vec<String>,
) -> anyhow::Result<()> {
    let indicator = tokio::spawn(show_loading(events));

    if let Err(err) = session.start().await {
        eprintln!("Failed to load the first page: {err}");
    }
    print!("{}", render::render_page(&session, &fields));
    println!("Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt().await?;
        let Some(line) = lines.next_line().await.context("Failed to read stdin")? else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };
        debug!(?command, "Shell command");

        if command == Command::Quit {
            break;
        }
        match dispatch(&mut session, command, &fields).await {
            Ok(output) => print!("{output}"),
            Err(err) => eprintln!("{err}"),
        }
    }

    info!(
        session_id = %session.id(),
        selected = session.selection().len(),
        "Shell closed"
    );
    // Dropping the session closes the event channel and ends the indicator.
    drop(session);
    let _ = indicator.await;
    Ok(())
}

/// Apply one command and return the text to print.
pub async fn dispatch(
    session: &mut BrowseSession,
    command: Command,
    fields: &[String],
) -> Result<String, ps_app::SessionError> {
    let output = match command {
        Command::Show => render::render_page(session, fields),
        Command::Page(n) => {
            session.go_to_page(n).await?;
            render::render_page(session, fields)
        }
        Command::Next => {
            session.next_page().await?;
            render::render_page(session, fields)
        }
        Command::Prev => {
            session.previous_page().await?;
            render::render_page(session, fields)
        }
        Command::Size(size) => {
            let offset = session.cursor().offset();
            session.on_page_change(offset, size).await?;
            render::render_page(session, fields)
        }
        Command::Toggle(id) => {
            session.toggle_row(&id).await?;
            render::render_page(session, fields)
        }
        Command::SelectAll => {
            session.on_select_all_on_page().await;
            render::render_page(session, fields)
        }
        Command::Bulk(count_text) => {
            let outcome = session.on_bulk_select_submit(&count_text).await?;
            let mut out = render::render_outcome(&outcome);
            out.push_str(&render::render_page(session, fields));
            out
        }
        Command::Selected => render::render_selection(session.selection()),
        Command::Help => format!("{HELP}\n"),
        Command::Quit => String::new(),
    };
    Ok(output)
}

async fn prompt() -> anyhow::Result<()> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(b"> ").await?;
    stdout.flush().await?;
    Ok(())
}

async fn show_loading(mut events: mpsc::UnboundedReceiver<SessionEvent>) {
    while let Some(event) = events.recv().await {
        if let SessionEvent::LoadingChanged { loading: true } = event {
            eprintln!("Loading...");
        }
    }
}
