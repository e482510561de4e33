use std::io::{BufRead, Write};

pub trait InputSource {
    // Ok(None) on EOF.
    fn ask(&mut self, question: &str) -> std::io::Result<Option<String>>;
}

pub struct StdinInput<R: BufRead> {
    reader: R,
}

impl StdinInput<std::io::StdinLock<'static>> {
    pub fn locked() -> Self {
        Self {
            reader: std::io::stdin().lock(),
        }
    }
}

impl<R: BufRead> StdinInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for StdinInput<R> {
    fn ask(&mut self, question: &str) -> std::io::Result<Option<String>> {
        let mut out = std::io::stdout().lock();
        write!(out, "{}: ", question)?;
        out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}
