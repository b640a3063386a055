/// Line-oriented text I/O used by the session. Implementations block until a
/// full line is available.
pub trait Prompter {
    /// Display `prompt` and return the reply with surrounding whitespace removed.
    fn ask(&mut self, prompt: &str) -> Result<String, PromptError>;

    /// Display a line that expects no reply.
    fn show(&mut self, text: &str) -> Result<(), PromptError>;

    /// Ask until the reply matches one of `choices` ignoring case, returning the
    /// matching entry as written in `choices`.
    fn ask_choice(&mut self, prompt: &str, choices: &[String]) -> Result<String, PromptError> {
        let framed = choice_prompt(prompt, choices);
        loop {
            let reply = self.ask(&framed)?;
            if let Some(choice) = match_choice(&reply, choices) {
                return Ok(choice.to_string());
            }
            self.show(&choice_hint(choices))?;
        }
    }
}

/// `prompt` with the options appended, e.g. `"Continue? (yes/no)"`.
pub fn choice_prompt(prompt: &str, choices: &[String]) -> String {
    format!("{prompt} ({})", choices.join("/"))
}

/// Line shown after a reply that matched none of `choices`.
pub fn choice_hint(choices: &[String]) -> String {
    format!("Please choose one of: {}", choices.join("/"))
}

/// The entry of `choices` equal to `reply` ignoring case.
pub fn match_choice<'a>(reply: &str, choices: &'a [String]) -> Option<&'a str> {
    let wanted = reply.to_lowercase();
    choices
        .iter()
        .find(|choice| choice.to_lowercase() == wanted)
        .map(String::as_str)
}

/// Prompter failure. Both variants end the session.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("input stream closed before the check-in finished")]
    Closed,
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
