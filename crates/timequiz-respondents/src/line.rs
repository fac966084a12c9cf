//! Line-oriented respondent over a blocking reader and an async writer.
//!
//! Reading stdin cannot be cancelled, so lines are pulled on a dedicated
//! thread and handed back over a channel. The thread reads one line per
//! request and nothing ahead of it. It is detached: when a session times out
//! while the respondent is still typing, the process can exit without waiting
//! for that read.

use std::io::{self, BufRead, BufReader};
use std::sync::mpsc as std_mpsc;
use std::thread;

use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt, Stdout};
use tokio::sync::mpsc;

use timequiz_core::error::InputError;
use timequiz_core::traits::Respondent;

/// Respondent that reads answers one line at a time.
pub struct LineRespondent<W> {
    requests: std_mpsc::Sender<()>,
    lines: mpsc::Receiver<io::Result<String>>,
    writer: W,
}

impl LineRespondent<Stdout> {
    /// Respondent on the process's stdin and stdout.
    pub fn stdio() -> io::Result<Self> {
        Self::new(BufReader::new(io::stdin()), tokio::io::stdout())
    }
}

impl<W> LineRespondent<W>
where
    W: AsyncWrite + Unpin + Send,
{
    /// Start the input thread on `reader`; prompts and notices go to `writer`.
    pub fn new<B>(reader: B, writer: W) -> io::Result<Self>
    where
        B: BufRead + Send + 'static,
    {
        let (requests, pending) = std_mpsc::channel();
        let (tx, lines) = mpsc::channel(1);
        thread::Builder::new()
            .name("timequiz-input".into())
            .spawn(move || serve_lines(reader, pending, tx))?;

        Ok(Self {
            requests,
            lines,
            writer,
        })
    }

    /// Give back the writer, e.g. to inspect what was shown.
    pub fn into_writer(self) -> W {
        self.writer
    }

    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await
    }
}

/// Read one line per request until EOF, a fatal error, or the respondent
/// going away.
fn serve_lines<B: BufRead>(
    mut reader: B,
    pending: std_mpsc::Receiver<()>,
    tx: mpsc::Sender<io::Result<String>>,
) {
    while pending.recv().is_ok() {
        let mut line = String::new();
        let item = match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => Ok(strip_line_ending(line)),
            // The offending line has been consumed; keep serving.
            Err(e) if e.kind() == io::ErrorKind::InvalidData => Err(e),
            Err(e) => {
                let _ = tx.blocking_send(Err(e));
                break;
            }
        };
        if tx.blocking_send(item).is_err() {
            break;
        }
    }
    tracing::debug!("input reader finished");
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

#[async_trait]
impl<W> Respondent for LineRespondent<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn present(&mut self, prompt: &str) -> io::Result<()> {
        self.write(prompt).await
    }

    async fn notify(&mut self, message: &str) -> io::Result<()> {
        self.write(&format!("{message}\n")).await
    }

    async fn read_answer(&mut self) -> Result<String, InputError> {
        // A reply left over from a cancelled read is still the next line.
        if self.lines.is_empty() && self.requests.send(()).is_err() {
            return Err(InputError::Closed);
        }
        match self.lines.recv().await {
            Some(Ok(line)) => Ok(line),
            Some(Err(e)) => Err(InputError::Io(e)),
            None => Err(InputError::Closed),
        }
    }
}
