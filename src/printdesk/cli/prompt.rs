use printdesk::api::Confirm;
use printdesk::error::Result;
use std::io::{self, BufRead, Write};

/// Asks on the terminal. Only `y` or `yes` confirms; anything else,
/// including end of input, declines.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn request_confirmation(&mut self, message: &str) -> Result<bool> {
        print!("{} [y/N]: ", message);
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(is_yes(&answer))
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
