use console::Term;
use dialoguer::{theme::ColorfulTheme, Confirm, Select};

use crate::HangarStdError;

/// Asks a yes/no question on stderr.
///
/// Returns `None` when the user dismisses the prompt with Esc or `q`.
pub fn confirm(question: &str, default: bool) -> Result<Option<bool>, HangarStdError> {
    let term = interactive_stderr("confirm")?;
    let answer = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(question)
        .default(default)
        .interact_on_opt(&term)?;
    tracing::debug!(question, ?answer, "confirmation prompt answered");
    Ok(answer)
}

/// Lets the user pick one of `items`, returning its index.
///
/// Returns `None` when the user dismisses the prompt without choosing.
pub fn select(prompt: &str, items: &[String]) -> Result<Option<usize>, HangarStdError> {
    let term = interactive_stderr("select an item")?;
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_on_opt(&term)?;
    tracing::debug!(prompt, ?selection, "selection prompt answered");
    Ok(selection)
}

fn interactive_stderr(operation: &str) -> Result<Term, HangarStdError> {
    let term = Term::stderr();
    if term.is_term() {
        Ok(term)
    } else {
        Err(HangarStdError::NonInteractiveTerminal {
            operation: operation.to_string(),
        })
    }
}
