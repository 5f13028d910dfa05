//! Line-oriented terminal front end.

use crate::error::AppResult;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Shown when a required prompt is answered with nothing.
pub const REQUIRED_FIELD_MESSAGE: &str = "Please fill out this field.";

/// Reads answers from `reader` and writes prompts and messages to `writer`.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Print a screen title.
    pub async fn heading(&mut self, title: &str) -> AppResult<()> {
        let rule = "=".repeat(title.chars().count());
        self.line("").await?;
        self.line(title).await?;
        self.line(&rule).await
    }

    pub async fn line(&mut self, text: &str) -> AppResult<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Ask for a value.
    ///
    /// `current` is offered as the default and kept when the answer is empty.
    /// A required prompt repeats until it has a non-empty value. Returns
    /// `None` once the input is closed.
    pub async fn prompt(
        &mut self,
        label: &str,
        current: &str,
        required: bool,
    ) -> AppResult<Option<String>> {
        loop {
            let question = if current.is_empty() {
                format!("{}: ", label)
            } else {
                format!("{} [{}]: ", label, current)
            };
            self.writer.write_all(question.as_bytes()).await?;
            self.writer.flush().await?;

            let Some(answer) = self.read_answer().await? else {
                return Ok(None);
            };

            let value = if answer.is_empty() {
                current.to_string()
            } else {
                answer
            };

            if required && value.is_empty() {
                self.line(REQUIRED_FIELD_MESSAGE).await?;
                continue;
            }

            return Ok(Some(value));
        }
    }

    /// Show a message and wait until the user acknowledges it.
    pub async fn alert(&mut self, message: &str) -> AppResult<()> {
        self.line(&format!("! {}", message)).await?;
        self.writer.write_all(b"Press Enter to continue.").await?;
        self.writer.flush().await?;
        self.read_answer().await?;
        self.line("").await
    }

    async fn read_answer(&mut self) -> AppResult<Option<String>> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf).await? == 0 {
            return Ok(None);
        }
        let answer = buf.trim_end_matches(['\r', '\n']);
        Ok(Some(answer.to_string()))
    }
}
