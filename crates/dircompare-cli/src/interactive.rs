//! Interactive prompting for the two root directories

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use dialoguer::Input;
use dialoguer::console::Term;

/// Prompt for Directory A
pub const PROMPT_DIR_A: &str = "Enter path to Directory A (reference)";
/// Prompt for Directory B
pub const PROMPT_DIR_B: &str = "Enter path to Directory B (to compare)";

/// Ask the user for a directory path
///
/// On a terminal the prompt is interactive; otherwise a single line is read
/// from stdin. Surrounding whitespace is trimmed.
///
/// # Errors
///
/// Returns an error if the terminal interaction fails or stdin is exhausted.
pub fn prompt_directory(prompt: &str) -> Result<PathBuf> {
    let answer = if io::stdin().is_terminal() && Term::stderr().is_term() {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .context("Failed to read user input")?
    } else {
        read_line_prompt(prompt, &mut io::stdin().lock(), &mut io::stdout())?
    };

    Ok(PathBuf::from(answer.trim()))
}

fn read_line_prompt(prompt: &str, input: &mut impl BufRead, output: &mut impl Write) -> Result<String> {
    write!(output, "{prompt}: ").context("Failed to write prompt")?;
    output.flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read user input")?;
    if read == 0 {
        bail!("No input given for: {prompt}");
    }

    Ok(line)
}
