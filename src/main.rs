use std::borrow::Cow;

use anyhow::Result;
use chef_book::{presenter, ChefBook, Config, Notice};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "Type an ingredient and press Enter to add it. /get fetches a recipe, /quit exits.";

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the rendered page
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;
    tracing::info!("Using recipe API at {} (key {})", config.base_url, config.api_key.preview());
    if let Some(timeout) = config.timeout {
        tracing::info!("Request timeout set to {:?}", timeout);
    }

    let client = config.client();
    let mut rng = StdRng::from_os_rng();
    let mut book = ChefBook::new();

    let ct = CancellationToken::new();
    let ctrl_c = ct.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut buf = Vec::new();

    println!("{}", HELP);
    println!("{}", presenter::render(&book));

    loop {
        let line = tokio::select! {
            _ = ct.cancelled() => break,
            line = read_line(&mut stdin, &mut buf) => match line? {
                Some(line) => line,
                None => break,
            },
        };

        match line.trim() {
            "/quit" => break,
            "/help" => {
                println!("{}", HELP);
                continue;
            }
            "/get" => {
                if !book.fetch_available() {
                    println!(
                        "Add at least {} ingredients first ({} so far).",
                        chef_book::MIN_INGREDIENTS,
                        book.ingredients().len()
                    );
                    continue;
                }
                if !book.can_fetch() {
                    continue;
                }

                let ingredients = book.begin_fetch();
                println!("{}", presenter::render(&book));

                let outcome = tokio::select! {
                    _ = ct.cancelled() => break,
                    outcome = chef_book::fetch_recipe(&client, &ingredients, &mut rng) => outcome,
                };
                if let Some(notice) = book.finish_fetch(outcome) {
                    alert(notice);
                }
            }
            command if command.starts_with('/') => {
                println!("Unknown command {}. {}", command, HELP);
                continue;
            }
            _ => {
                book.update_input(line.as_str());
                book.submit_input();
            }
        }

        println!("{}", presenter::render(&book));
    }

    tracing::info!("Shutting down...");
    Ok(())
}

fn alert(notice: Notice) {
    let border = "!".repeat(notice.message().chars().count() + 4);
    println!("{}", border);
    println!("! {} !", notice);
    println!("{}", border);
}

/// Reads one line without its terminator. Bytes that aren't valid UTF-8 are
/// replaced rather than failing the session. `None` at end of input.
async fn read_line<R: AsyncBufRead + Unpin>(
    reader: &mut R,
    buf: &mut Vec<u8>,
) -> std::io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf).await? == 0 {
        return Ok(None);
    }

    let line = String::from_utf8_lossy(&buf[..]);
    if matches!(line, Cow::Owned(_)) {
        tracing::warn!("Input was not valid UTF-8; undecodable bytes were replaced");
    }
    Ok(Some(line.trim_end_matches(|c: char| c == '\n' || c == '\r').to_string()))
}
