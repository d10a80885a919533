use hangar_std::{infoln, prompt};

use crate::HangarResult;

/// Interactive questions asked by commands.
///
/// Commands take a `&dyn Prompter` so their flows can be driven by a mock
/// in tests instead of a terminal.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Asks a yes/no question that defaults to "no". Dismissing the prompt
    /// counts as "no".
    fn confirm(&self, title: &str, description: &str) -> HangarResult<bool>;

    /// Lets the user pick one of `items`. `None` means the prompt was
    /// dismissed without a choice.
    fn select(&self, prompt: &str, items: &[String]) -> HangarResult<Option<usize>>;
}

/// Prompts on the user's terminal through `hangar-std`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, title: &str, description: &str) -> HangarResult<bool> {
        infoln!("{}", description);
        let answer = prompt::confirm(title, false)?;
        Ok(answer.unwrap_or(false))
    }

    fn select(&self, prompt: &str, items: &[String]) -> HangarResult<Option<usize>> {
        Ok(prompt::select(prompt, items)?)
    }
}
