//!ansi escape codes used to paint whole log lines.

///ends any paint started before it.
pub const RESET: &str = "\x1b[0m";

///the colors a level can be painted with. `Plain` writes no escape at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Plain,
    Blue,
    Yellow,
    Red,
    BoldRed,
}

impl Paint {
    ///the escape sequence that starts this paint.
    pub const fn escape(self) -> &'static str {
        match self {
            Paint::Plain => "",
            Paint::Blue => "\x1b[34m",
            Paint::Yellow => "\x1b[33m",
            Paint::Red => "\x1b[31m",
            Paint::BoldRed => "\x1b[1;31m",
        }
    }
    ///wraps `text` between this paint and `RESET`. The reset is appended even for `Plain`.
    pub fn wrap(self, text: &str) -> String {
        format!("{}{}{}", self.escape(), text, RESET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wrap_brackets_text() {
        assert_eq!(Paint::Red.wrap("boom"), "\x1b[31mboom\x1b[0m");
    }

    #[test]
    fn plain_still_resets() {
        assert_eq!(Paint::Plain.wrap("calm"), "calm\x1b[0m");
    }
}
