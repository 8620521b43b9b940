use crossterm::style::{Color, Stylize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => "✓",
            (true, Icon::Error) => "✗",
            (false, Icon::Success) => "[OK]",
            (false, Icon::Error) => "[FAIL]",
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => Color::Green,
            Icon::Error => Color::Red,
        };
        format!("{}", s.with(color))
    }
}
