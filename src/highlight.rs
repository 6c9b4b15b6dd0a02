use inksac::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct Highlighter {
    color_support: ColorSupport,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    pub fn error(&self, message: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return message.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();

        message.style(error_style).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_leaves_text_alone() {
        let highlighter = Highlighter::plain();
        assert_eq!(highlighter.error("Fork failed"), "Fork failed");
    }
}
