use std::io::{BufRead, Write};
use wellness_checkin::checkin::{PromptError, Prompter};

const WRAP_WIDTH: usize = 80;
const INPUT_MARKER: &str = "> ";

/// Prompter over a line reader and a writer, normally stdin and stdout.
pub(crate) struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl<R, W> TerminalPrompter<R, W>
where
    R: BufRead,
    W: Write,
{
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }
}

impl<R, W> Prompter for TerminalPrompter<R, W>
where
    R: BufRead,
    W: Write,
{
    fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        writeln!(self.output, "{}", wrap_text(prompt, WRAP_WIDTH))?;
        write!(self.output, "{INPUT_MARKER}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim().to_string())
    }

    fn show(&mut self, text: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{}", wrap_text(text, WRAP_WIDTH))?;
        Ok(())
    }
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
pub(crate) fn wrap_text(text: &str, width: usize) -> String {
    let indent: String = text.chars().take_while(|ch| *ch == ' ').collect();
    let mut lines: Vec<String> = Vec::new();
    let mut current = indent.clone();

    for word in text.split_whitespace() {
        let occupied = current.chars().count();
        if occupied > indent.len() && occupied + 1 + word.chars().count() > width {
            lines.push(std::mem::replace(&mut current, indent.clone()));
        }
        if current.chars().count() > indent.len() {
            current.push(' ');
        }
        current.push_str(word);
    }
    lines.push(current);
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn ask_trims_replies_and_prints_the_marker() {
        let input = Cursor::new("  severe  \n");
        let mut prompter = TerminalPrompter::new(input, Vec::new());

        let reply = prompter.ask("Stress? (none/severe)").expect("reply read");
        assert_eq!(reply, "severe");

        let output = String::from_utf8(prompter.into_output()).expect("utf8 output");
        assert_eq!(output, "Stress? (none/severe)\n> ");
    }

    #[test]
    fn exhausted_input_is_reported_as_closed() {
        let mut prompter = TerminalPrompter::new(Cursor::new(""), Vec::new());
        match prompter.ask("Anything else?") {
            Err(PromptError::Closed) => {}
            other => panic!("expected closed input, got {other:?}"),
        }
    }

    #[test]
    fn choices_are_matched_ignoring_case() {
        let input = Cursor::new("perhaps\nYES\n");
        let mut prompter = TerminalPrompter::new(input, Vec::new());

        let choice = prompter
            .ask_choice("Try one now?", &["yes".to_string(), "no".to_string()])
            .expect("choice read");
        assert_eq!(choice, "yes");

        let output = String::from_utf8(prompter.into_output()).expect("utf8 output");
        assert!(output.contains("Please choose one of: yes/no"));
        assert_eq!(output.matches("Try one now? (yes/no)").count(), 2);
    }

    #[test]
    fn wrap_breaks_long_lines_at_word_boundaries() {
        let text = "It sounds like you might be in a lot of pain. If you are thinking about harming yourself, please reach out for support.";
        let wrapped = wrap_text(text, 40);
        assert!(wrapped.lines().all(|line| line.chars().count() <= 40));
        assert_eq!(wrapped.split_whitespace().collect::<Vec<_>>().join(" "), text);
    }

    #[test]
    fn wrap_keeps_leading_indent_on_every_line() {
        let wrapped = wrap_text("  • Anxiety: signals heard → anx, worry", 20);
        assert!(wrapped.lines().all(|line| line.starts_with("  ")));
        assert_eq!(wrap_text("", 80), "");
    }
}
