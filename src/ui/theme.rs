use owo_colors::Style;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Styles for CLI output; one per axiom role plus status colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Style,
    pub success: Style,
    pub error: Style,
    pub warn: Style,
    pub dim: Style,
    pub muted: Style,
    pub nomen: Style,
    pub copula: Style,
    pub attributum: Style,
    pub literal: Style,
}

impl Theme {
    pub fn detect() -> Self {
        if crate::output::is_quiet() || !console::Term::stdout().is_term() {
            return Self::plain();
        }
        Self::colored()
    }

    pub fn colored() -> Self {
        Self {
            header: Style::new().cyan().bold(),
            success: Style::new().green().bold(),
            error: Style::new().red().bold(),
            warn: Style::new().yellow().bold(),
            dim: Style::new().white().dimmed(),
            muted: Style::new().bright_black(),
            nomen: Style::new().bold(),
            copula: Style::new().magenta(),
            attributum: Style::new().blue(),
            literal: Style::new().green(),
        }
    }

    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            success: Style::new(),
            error: Style::new(),
            warn: Style::new(),
            dim: Style::new(),
            muted: Style::new(),
            nomen: Style::new(),
            copula: Style::new(),
            attributum: Style::new(),
            literal: Style::new(),
        }
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}
