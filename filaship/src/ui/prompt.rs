//! Line-based questions on the terminal.

use std::fmt;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Asks `question` until the answer passes `validate`. An empty answer stands
/// for `default`.
///
/// # Errors
///
/// Fails when the terminal cannot be written or read, including when standard
/// input is closed before a valid answer was given.
pub async fn ask_text<F, E>(question: &str, default: &str, validate: F) -> std::io::Result<String>
where
    F: Fn(&str) -> Result<(), E>,
    E: fmt::Display,
{
    let mut stdout = tokio::io::stdout();
    let mut reader = BufReader::new(tokio::io::stdin());
    loop {
        stdout.write_all(format!("{question} [{default}]: ").as_bytes()).await?;
        stdout.flush().await?;

        let mut line = String::new();
        if reader.read_line(&mut line).await? == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "standard input closed before an answer was given",
            ));
        }

        let answer = resolve_answer(&line, default);
        match validate(answer) {
            Ok(()) => return Ok(answer.to_string()),
            Err(err) => stdout.write_all(format!("{err}\n").as_bytes()).await?,
        }
    }
}

fn resolve_answer<'a>(line: &'a str, default: &'a str) -> &'a str {
    match line.trim() {
        "" => default,
        answer => answer,
    }
}
