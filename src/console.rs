use crate::error::Error;
use crate::result::Result;

/// Operator-facing input and output
pub trait Console {
    fn intro(&mut self, title: &str) -> Result<()>;

    fn outro(&mut self, message: &str) -> Result<()>;

    /// Show `prompt` and read one line of input
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    fn note(&mut self, title: &str, body: &str) -> Result<()>;

    fn info(&mut self, message: &str) -> Result<()>;

    /// Low-key progress line
    fn remark(&mut self, message: &str) -> Result<()>;

    fn warning(&mut self, message: &str) -> Result<()>;

    fn error(&mut self, message: &str) -> Result<()>;

    fn success(&mut self, message: &str) -> Result<()>;
}

/// Interactive terminal rendered with cliclack
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for TerminalConsole {
    fn intro(&mut self, title: &str) -> Result<()> {
        cliclack::intro(title).map_err(Error::Console)
    }

    fn outro(&mut self, message: &str) -> Result<()> {
        cliclack::outro(message).map_err(Error::Console)
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        cliclack::input(prompt)
            .required(false)
            .interact::<String>()
            .map_err(Error::Console)
    }

    fn note(&mut self, title: &str, body: &str) -> Result<()> {
        cliclack::note(title, body).map_err(Error::Console)
    }

    fn info(&mut self, message: &str) -> Result<()> {
        cliclack::log::info(message).map_err(Error::Console)
    }

    fn remark(&mut self, message: &str) -> Result<()> {
        cliclack::log::remark(message).map_err(Error::Console)
    }

    fn warning(&mut self, message: &str) -> Result<()> {
        cliclack::log::warning(message).map_err(Error::Console)
    }

    fn error(&mut self, message: &str) -> Result<()> {
        cliclack::log::error(message).map_err(Error::Console)
    }

    fn success(&mut self, message: &str) -> Result<()> {
        cliclack::log::success(message).map_err(Error::Console)
    }
}
