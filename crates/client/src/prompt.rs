//! Blocking user dialogs: confirmation before a delete, and result notices.

/// Blocking confirm/alert pair, as a browser window provides.
pub trait UserPrompt {
    /// Ask a yes/no question; `false` means the user declined.
    fn confirm(&self, message: &str) -> bool;

    fn alert(&self, message: &str);
}

#[cfg(not(target_arch = "wasm32"))]
pub use terminal::TerminalPrompt;

#[cfg(not(target_arch = "wasm32"))]
mod terminal {
    use std::cell::RefCell;
    use std::io::{self, BufRead, Write};

    use super::UserPrompt;

    /// Prompts on a terminal: questions and notices go to `output`, answers
    /// come from `input`.
    pub struct TerminalPrompt<R, W> {
        input: RefCell<R>,
        output: RefCell<W>,
        assume_yes: bool,
    }

    impl TerminalPrompt<io::StdinLock<'static>, io::Stderr> {
        /// Read answers from stdin and write to stderr, keeping stdout for the table.
        pub fn stdio(assume_yes: bool) -> Self {
            Self::new(io::stdin().lock(), io::stderr(), assume_yes)
        }
    }

    impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
        pub fn new(input: R, output: W, assume_yes: bool) -> Self {
            Self {
                input: RefCell::new(input),
                output: RefCell::new(output),
                assume_yes,
            }
        }

        pub fn into_output(self) -> W {
            self.output.into_inner()
        }

        fn ask(&self, message: &str) -> io::Result<bool> {
            {
                let mut out = self.output.borrow_mut();
                write!(out, "{message} [y/N] ")?;
                out.flush()?;
            }

            let mut answer = String::new();
            self.input.borrow_mut().read_line(&mut answer)?;
            let answer = answer.trim();
            Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
        }
    }

    impl<R: BufRead, W: Write> UserPrompt for TerminalPrompt<R, W> {
        fn confirm(&self, message: &str) -> bool {
            if self.assume_yes {
                tracing::debug!("confirmation assumed: {message}");
                return true;
            }

            self.ask(message).unwrap_or_else(|err| {
                tracing::warn!("could not read confirmation: {err}");
                false
            })
        }

        fn alert(&self, message: &str) {
            if let Err(err) = writeln!(self.output.borrow_mut(), "{message}") {
                tracing::warn!("could not write alert: {err}");
            }
        }
    }

}
