use ratatui::style::{Color, Modifier, Style};

/// Terminal palette, same colours as the classic ANSI `bcolors` set.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bcolors;

impl Bcolors {
    pub fn new() -> Self {
        Bcolors
    }

    pub fn header(&self) -> Style {
        Style::default().fg(Color::LightMagenta).add_modifier(Modifier::BOLD)
    }

    pub fn okblue(&self) -> Style {
        Style::default().fg(Color::LightBlue)
    }

    pub fn okgreen(&self) -> Style {
        Style::default().fg(Color::LightGreen)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(Color::LightYellow)
    }

    pub fn fail(&self) -> Style {
        Style::default().fg(Color::LightRed)
    }

    pub fn bold(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    pub fn inverse(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    pub fn dim(&self) -> Style {
        Style::default().add_modifier(Modifier::DIM)
    }
}
