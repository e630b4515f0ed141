//! Operator interaction: list selection and yes/no confirmation.
//!
//! Routines never talk to the terminal directly; they receive a
//! [`Prompter`] through the task context so tests can script answers.
use dialoguer::Confirm;
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;

/// Source of operator answers.
///
/// Every method returns `None` when the operator aborted the prompt
/// (Esc, Ctrl-C, closed stdin). Callers turn that into
/// [`SetupError::PromptCancelled`](crate::error::SetupError::PromptCancelled).
#[cfg_attr(test, mockall::automock)]
pub trait Prompter: Send + Sync {
    /// Ask the operator to pick one of `items`; returns the chosen index.
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Option<usize>;

    /// Ask a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Option<bool>;
}

/// Interactive prompts on the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Option<usize> {
        Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact_opt()
            .unwrap_or_else(|e| {
                tracing::debug!("select prompt failed: {e}");
                None
            })
    }

    fn confirm(&self, prompt: &str, default: bool) -> Option<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(default)
            .interact_opt()
            .unwrap_or_else(|e| {
                tracing::debug!("confirm prompt failed: {e}");
                None
            })
    }
}

/// Non-interactive prompter that always accepts the offered default.
///
/// Used for `--defaults` runs (CI, scripted bootstraps).
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultsPrompter;

impl Prompter for DefaultsPrompter {
    fn select(&self, _prompt: &str, items: &[String], default: usize) -> Option<usize> {
        (default < items.len()).then_some(default)
    }

    fn confirm(&self, _prompt: &str, default: bool) -> Option<bool> {
        Some(default)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    fn items() -> Vec<String> {
        vec!["base".to_string(), "astro".to_string()]
    }

    #[test]
    fn defaults_prompter_selects_default() {
        assert_eq!(DefaultsPrompter.select("pick", &items(), 1), Some(1));
    }

    #[test]
    fn defaults_prompter_rejects_out_of_range_default() {
        assert_eq!(DefaultsPrompter.select("pick", &items(), 5), None);
    }

    #[test]
    fn defaults_prompter_confirms_with_default() {
        assert_eq!(DefaultsPrompter.confirm("overwrite?", false), Some(false));
        assert_eq!(DefaultsPrompter.confirm("overwrite?", true), Some(true));
    }

    #[test]
    fn mock_prompter_reports_cancellation() {
        let mut mock = MockPrompter::new();
        mock.expect_confirm().times(1).return_const(None::<bool>);
        assert_eq!(mock.confirm("overwrite?", false), None);
    }
}
