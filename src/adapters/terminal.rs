use std::io::{self, Write};
use std::pin::Pin;
use std::sync::Mutex as StdMutex;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokio::sync::{Mutex, MutexGuard};

type Input = Pin<Box<dyn AsyncBufRead + Send>>;
type Output = Box<dyn Write + Send>;

/// Line-oriented terminal shared by the command loop and the port adapters.
///
/// Input is async so a pending read never blocks the runtime, and reads are
/// cancellation safe: a read dropped mid-line keeps what it buffered for the
/// next caller. Output is a plain writer flushed after every line.
pub struct TerminalIo {
    input: Mutex<Lines<Input>>,
    output: StdMutex<Output>,
}

impl TerminalIo {
    pub fn new(
        input: impl AsyncBufRead + Send + 'static,
        output: impl Write + Send + 'static,
    ) -> Self {
        let input: Input = Box::pin(input);
        let output: Output = Box::new(output);
        Self {
            input: Mutex::new(input.lines()),
            output: StdMutex::new(output),
        }
    }

    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), io::stdout())
    }

    /// Next line without its terminator; `None` once input is exhausted.
    pub async fn read_line(&self) -> io::Result<Option<String>> {
        self.claim_input().await.read_line().await
    }

    /// Exclusive access to input until the returned session drops.
    pub async fn claim_input(&self) -> InputSession<'_> {
        InputSession {
            io: self,
            lines: self.input.lock().await,
        }
    }

    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut output = self
            .output
            .lock()
            .map_err(|_| io::Error::other("terminal output poisoned"))?;
        writeln!(output, "{line}")?;
        output.flush()
    }

    pub fn write_lines<I, S>(&self, lines: I) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.write_line(line.as_ref())?;
        }
        Ok(())
    }

    /// Print `label` without a newline and read the answer.
    pub async fn prompt(&self, label: &str) -> io::Result<Option<String>> {
        self.claim_input().await.prompt(label).await
    }

    fn write_prompt(&self, label: &str) -> io::Result<()> {
        let mut output = self
            .output
            .lock()
            .map_err(|_| io::Error::other("terminal output poisoned"))?;
        write!(output, "{label}")?;
        output.flush()
    }
}

/// Input held by one reader, e.g. a form collecting several fields.
pub struct InputSession<'a> {
    io: &'a TerminalIo,
    lines: MutexGuard<'a, Lines<Input>>,
}

impl InputSession<'_> {
    pub async fn read_line(&mut self) -> io::Result<Option<String>> {
        self.lines.next_line().await
    }

    pub async fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        self.io.write_prompt(label)?;
        self.read_line().await
    }
}
