//! Console rendering of status lines

use cleanup_text::{Severity, StatusLine};
use colored::{ColoredString, Colorize};

pub fn render(line: &StatusLine) -> ColoredString {
    let text = line.text.as_str();
    match line.severity {
        Severity::Success => text.green(),
        Severity::Info => text.normal(),
        Severity::Warning => text.yellow(),
        Severity::Error => text.red().bold(),
    }
}

pub fn print(line: &StatusLine) {
    println!("{}", render(line));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_keeps_text() {
        colored::control::set_override(false);
        let line = StatusLine::error("ERROR: could not find end of getTechIcon");
        assert_eq!(
            render(&line).to_string(),
            "ERROR: could not find end of getTechIcon"
        );
    }
}
