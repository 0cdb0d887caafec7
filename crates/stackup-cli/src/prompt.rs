//! Terminal questions.
//!
//! The wizard only talks to [`Prompter`]; which implementation it gets is
//! decided once by [`prompter`]:
//!
//! - `--yes` → [`AcceptDefaults`], every question takes its default
//! - `interactive` feature → [`TerminalPrompter`] (dialoguer)
//! - otherwise → [`Unavailable`], every question is an error

use crate::error::{CliError, CliResult};

/// Source of answers for the wizard.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Free-text answer.
    fn text(&self, question: &str, default: &str) -> CliResult<String>;

    /// Index of the chosen option.
    fn choose(&self, question: &str, options: &[&'static str], default: usize)
    -> CliResult<usize>;

    /// Yes/no answer.
    fn confirm(&self, question: &str, default: bool) -> CliResult<bool>;
}

/// Pick the prompter for this run.
pub fn prompter(accept_defaults: bool) -> Box<dyn Prompter> {
    if accept_defaults {
        return Box::new(AcceptDefaults);
    }

    #[cfg(feature = "interactive")]
    {
        Box::new(TerminalPrompter::new())
    }

    #[cfg(not(feature = "interactive"))]
    {
        Box::new(Unavailable)
    }
}

/// Answers every question with its default.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptDefaults;

impl Prompter for AcceptDefaults {
    fn text(&self, _question: &str, default: &str) -> CliResult<String> {
        Ok(default.to_string())
    }

    fn choose(
        &self,
        _question: &str,
        _options: &[&'static str],
        default: usize,
    ) -> CliResult<usize> {
        Ok(default)
    }

    fn confirm(&self, _question: &str, default: bool) -> CliResult<bool> {
        Ok(default)
    }
}

/// Built without the `interactive` feature.
#[cfg_attr(feature = "interactive", allow(dead_code))]
#[derive(Debug, Default, Clone, Copy)]
pub struct Unavailable;

impl Prompter for Unavailable {
    fn text(&self, _question: &str, _default: &str) -> CliResult<String> {
        Err(unavailable())
    }

    fn choose(
        &self,
        _question: &str,
        _options: &[&'static str],
        _default: usize,
    ) -> CliResult<usize> {
        Err(unavailable())
    }

    fn confirm(&self, _question: &str, _default: bool) -> CliResult<bool> {
        Err(unavailable())
    }
}

#[cfg_attr(feature = "interactive", allow(dead_code))]
fn unavailable() -> CliError {
    CliError::FeatureNotAvailable {
        feature: "interactive",
    }
}

#[cfg(feature = "interactive")]
pub use terminal::TerminalPrompter;

#[cfg(feature = "interactive")]
mod terminal {
    use console::Term;
    use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

    use super::Prompter;
    use crate::error::{CliError, CliResult};

    /// dialoguer prompts on stderr.
    pub struct TerminalPrompter {
        theme: ColorfulTheme,
        term: Term,
    }

    impl TerminalPrompter {
        pub fn new() -> Self {
            Self {
                theme: ColorfulTheme::default(),
                term: Term::stderr(),
            }
        }

        fn ensure_terminal(&self, question: &str) -> CliResult<()> {
            if self.term.is_term() {
                Ok(())
            } else {
                Err(CliError::NotInteractive {
                    question: question.to_string(),
                })
            }
        }
    }

    impl Default for TerminalPrompter {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Prompter for TerminalPrompter {
        fn text(&self, question: &str, default: &str) -> CliResult<String> {
            self.ensure_terminal(question)?;
            Input::<String>::with_theme(&self.theme)
                .with_prompt(question)
                .default(default.to_string())
                .interact_text_on(&self.term)
                .map_err(prompt_error)
        }

        fn choose(
            &self,
            question: &str,
            options: &[&'static str],
            default: usize,
        ) -> CliResult<usize> {
            self.ensure_terminal(question)?;
            Select::with_theme(&self.theme)
                .with_prompt(question)
                .items(options)
                .default(default)
                .interact_on(&self.term)
                .map_err(prompt_error)
        }

        fn confirm(&self, question: &str, default: bool) -> CliResult<bool> {
            self.ensure_terminal(question)?;
            Confirm::with_theme(&self.theme)
                .with_prompt(question)
                .default(default)
                .interact_on(&self.term)
                .map_err(prompt_error)
        }
    }

    fn prompt_error(err: dialoguer::Error) -> CliError {
        match err {
            dialoguer::Error::IO(e) if e.kind() == std::io::ErrorKind::Interrupted => {
                CliError::Cancelled
            }
            other => CliError::Prompt {
                message: other.to_string(),
            },
        }
    }
}
