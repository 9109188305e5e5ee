use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub header: Color,
    pub focused: Color,
    pub dimmed: Color,
    pub accent: Color,
    pub current_page_bg: Color,
    pub votes: Color,
    pub error_text: Color,
}

impl ThemeColors {
    pub fn title(&self) -> Style {
        Style::default().fg(self.header).add_modifier(Modifier::BOLD)
    }

    pub fn current_page(&self) -> Style {
        Style::default()
            .fg(self.focused)
            .bg(self.current_page_bg)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            colors: ThemeColors {
                header: Color::Cyan,
                focused: Color::White,
                dimmed: Color::DarkGray,
                accent: Color::LightBlue,
                current_page_bg: Color::Rgb(40, 40, 40),
                votes: Color::Yellow,
                error_text: Color::LightRed,
            },
        }
    }

    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            colors: ThemeColors {
                header: Color::Blue,
                focused: Color::Black,
                dimmed: Color::Gray,
                accent: Color::Blue,
                current_page_bg: Color::Rgb(230, 230, 230),
                votes: Color::Rgb(160, 110, 0),
                error_text: Color::Red,
            },
        }
    }

    pub fn minimal() -> Self {
        Self {
            name: "Minimal".to_string(),
            colors: ThemeColors {
                header: Color::White,
                focused: Color::White,
                dimmed: Color::DarkGray,
                accent: Color::White,
                current_page_bg: Color::Reset,
                votes: Color::White,
                error_text: Color::White,
            },
        }
    }

    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "minimal" => Self::minimal(),
            _ => Self::dark(),
        }
    }

    pub fn available_themes() -> &'static [&'static str] {
        &["dark", "light", "minimal"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name_falls_back_to_dark() {
        assert_eq!(Theme::by_name("LIGHT").name, "Light");
        assert_eq!(Theme::by_name("solarized").name, "Dark");
        for name in Theme::available_themes() {
            assert_eq!(Theme::by_name(name).name.to_lowercase(), *name);
        }
    }
}
