use crate::error::Result;
use std::collections::VecDeque;
use std::io::{BufRead, Stdin, StdinLock, Stdout, Write};

/// Line-oriented terminal the session talks through
pub trait Console {
    /// Next input line without its terminator, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>>;

    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Write without a newline and flush (prompts)
    fn write(&mut self, text: &str) -> Result<()>;
}

/// Console over any reader/writer pair
pub struct IoConsole<R, W> {
    input: R,
    output: W,
}

impl IoConsole<StdinLock<'static>, Stdout> {
    /// Process stdin/stdout
    pub fn stdio() -> Self {
        let stdin: Stdin = std::io::stdin();
        Self::new(stdin.lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> IoConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for IoConsole<R, W> {
    fn read_line(&mut self) -> Result<Option<String>> {
        // Bytes that are not UTF-8 become U+FFFD and fail as a move, not as I/O
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(Some(strip_terminator(&line).to_string()))
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// In-memory console fed from a script; records everything written.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: String,
    reads_at: Vec<usize>,
}

impl ScriptedConsole {
    pub fn new<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: input.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Everything written so far
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Output split into lines
    pub fn lines(&self) -> Vec<&str> {
        self.output.lines().collect()
    }

    /// Output that had been written when each read happened
    pub fn output_before_read(&self, read: usize) -> Option<&str> {
        self.reads_at.get(read).map(|&at| &self.output[..at])
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> Result<Option<String>> {
        self.reads_at.push(self.output.len());
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        self.output.push_str(line);
        self.output.push('\n');
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output.push_str(text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_io_console_strips_terminators() {
        let mut console = IoConsole::new(Cursor::new("2\r\n?\n 3 \n"), Vec::new());
        assert_eq!(console.read_line().unwrap().as_deref(), Some("2"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("?"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some(" 3 "));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_io_console_tolerates_invalid_utf8() {
        let mut console = IoConsole::new(Cursor::new(&b"\xff\xfe\n2\n"[..]), Vec::new());
        let line = console.read_line().unwrap().unwrap();
        assert_eq!(line, "\u{fffd}\u{fffd}");
        assert_eq!(console.read_line().unwrap().as_deref(), Some("2"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_io_console_writes() {
        let mut console = IoConsole::new(Cursor::new(""), Vec::new());
        console.write_line("HMAC: 00").unwrap();
        console.write("Enter your move: ").unwrap();
        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out, "HMAC: 00\nEnter your move: ");
    }

    #[test]
    fn test_scripted_console_records_reads() {
        let mut console = ScriptedConsole::new(["1"]);
        console.write_line("menu").unwrap();
        assert_eq!(console.read_line().unwrap().as_deref(), Some("1"));
        console.write_line("after").unwrap();
        assert_eq!(console.read_line().unwrap(), None);

        assert_eq!(console.output_before_read(0), Some("menu\n"));
        assert_eq!(console.output_before_read(1), Some("menu\nafter\n"));
        assert_eq!(console.lines(), vec!["menu", "after"]);
    }
}
