//! # Plain Output
//!
//! Rewrites a single stdout line on every published frame. Exits once the
//! animation settles, or on Ctrl+C for animations that never do.

use crossterm::cursor::MoveToColumn;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use log::info;
use std::io::{self, Write};

use crate::tui::feed::Feed;

fn print_frame<W: Write>(out: &mut W, text: Option<&str>) -> io::Result<()> {
    queue!(
        out,
        MoveToColumn(0),
        Clear(ClearType::CurrentLine),
        Print(text.unwrap_or(""))
    )?;
    out.flush()
}

pub async fn run_plain(feed: Feed) -> io::Result<()> {
    run_plain_to(feed, &mut io::stdout(), tokio::signal::ctrl_c()).await
}

/// Prints frames to `out` until the feed settles or `interrupt` resolves.
///
/// `interrupt` lives for the whole run, so a Ctrl+C arriving between two
/// frames is not lost.
pub async fn run_plain_to<W, F>(mut feed: Feed, out: &mut W, interrupt: F) -> io::Result<()>
where
    W: Write,
    F: Future,
{
    let mut rx = feed.subscribe();
    print_frame(out, feed.current().as_deref())?;
    tokio::pin!(interrupt);

    while feed.is_animating() {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let text = rx.borrow_and_update().clone();
                print_frame(out, text.as_deref())?;
            }
            _ = feed.settle() => {}
            _ = &mut interrupt => {
                info!("Interrupted");
                break;
            }
        }
    }

    print_frame(out, feed.current().as_deref())?;
    writeln!(out)
}
