//! Interactive read-eval loop.
//!
//! The loop is generic over its input and output so the same code drives
//! the real terminal and in-memory buffers in tests.

use crate::commands::{CommandRouter, Reply};
use crate::error::{BookError, ShellResult};
use crate::repositories::RecordRepository;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

pub const WELCOME: &str = "Welcome to the contact book assistant!";
pub const PROMPT: &str = "Enter a command: ";

/// Read commands from `reader` until `exit`/`close` or end of input.
///
/// Replies and command errors are written to `writer`; a failed command
/// never ends the session. A line that is not valid UTF-8 is rejected like
/// any other bad command. The directory is saved through `repository`
/// before returning, also when the console itself fails.
///
/// # Errors
///
/// Console I/O failures and a failed final save. When both happen the save
/// error is returned.
pub async fn run<R, W>(
    reader: R,
    mut writer: W,
    router: &mut CommandRouter,
    repository: &dyn RecordRepository,
) -> ShellResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let session = converse(reader, &mut writer, router).await;
    if let Err(e) = &session {
        warn!(error = %e, "Console failed, saving before exit");
    }

    repository.save(router.directory()).await?;
    let farewell = session?;

    write_line(&mut writer, "Contact book saved.").await?;
    if let Some(text) = farewell {
        write_line(&mut writer, &text).await?;
    }
    writer.flush().await?;
    Ok(())
}

/// The prompt loop. Returns the farewell text when the user exited.
async fn converse<R, W>(
    mut reader: R,
    writer: &mut W,
    router: &mut CommandRouter,
) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_line(writer, WELCOME).await?;
    let loaded = match router.directory().len() {
        0 => "Starting with an empty contact book.".to_string(),
        n => format!("Loaded {} contacts.", n),
    };
    write_line(writer, &loaded).await?;

    let mut buf = Vec::new();
    loop {
        writer.write_all(PROMPT.as_bytes()).await?;
        writer.flush().await?;

        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            info!("End of input, closing session");
            writer.write_all(b"\n").await?;
            return Ok(None);
        }

        let outcome = match std::str::from_utf8(&buf) {
            Ok(line) => router.handle_line(line),
            Err(_) => Err(BookError::InvalidEncoding),
        };

        match outcome {
            Ok(None) => {}
            Ok(Some(Reply::Continue(text))) => write_line(writer, &text).await?,
            Ok(Some(Reply::Exit(text))) => return Ok(Some(text)),
            Err(e) => {
                debug!(error = %e, "Command rejected");
                write_line(writer, &e.to_string()).await?;
            }
        }
    }
}

async fn write_line<W>(writer: &mut W, text: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(text.as_bytes()).await?;
    writer.write_all(b"\n").await
}
