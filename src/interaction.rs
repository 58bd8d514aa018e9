use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Which tab is in front decides how a key is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    GrubConfig,
    BootOrder,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::GrubConfig, Tab::BootOrder];

    pub fn title(self) -> &'static str {
        match self {
            Tab::GrubConfig => "Grub Config",
            Tab::BootOrder => "Boot Order",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::GrubConfig => 0,
            Tab::BootOrder => 1,
        }
    }

    pub fn next(self) -> Tab {
        match self {
            Tab::GrubConfig => Tab::BootOrder,
            Tab::BootOrder => Tab::GrubConfig,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextTab,
    Up,
    Down,
    MoveUp,
    MoveDown,
    Rename,
    Remove,
    Save,
    Edit,
    UpdateGrub,
    Reload,
}

/// Map a key press outside of any popup to an action.
pub fn key_action(tab: Tab, key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    let common = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::NextTab),
        KeyCode::Char('s') => Some(Action::Save),
        KeyCode::Char('u') => Some(Action::UpdateGrub),
        KeyCode::Char('R') | KeyCode::F(5) => Some(Action::Reload),
        _ => None,
    };
    if common.is_some() {
        return common;
    }

    match tab {
        Tab::GrubConfig => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
            KeyCode::Char('e') | KeyCode::Enter => Some(Action::Edit),
            _ => None,
        },
        Tab::BootOrder => match key.code {
            KeyCode::Up if shift => Some(Action::MoveUp),
            KeyCode::Down if shift => Some(Action::MoveDown),
            KeyCode::Char('K') => Some(Action::MoveUp),
            KeyCode::Char('J') => Some(Action::MoveDown),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
            KeyCode::Char('r') | KeyCode::F(2) => Some(Action::Rename),
            KeyCode::Char('d') | KeyCode::Delete => Some(Action::Remove),
            _ => None,
        },
    }
}

/// Key hints for the footer of each tab.
pub fn key_hints(tab: Tab) -> &'static [(&'static str, &'static str)] {
    match tab {
        Tab::GrubConfig => &[
            ("↑↓", "Scroll"),
            ("e", "Edit"),
            ("s", "Save"),
            ("u", "Update Grub"),
            ("R", "Reload"),
            ("Tab", "Switch"),
            ("q", "Quit"),
        ],
        Tab::BootOrder => &[
            ("↑↓", "Select"),
            ("K/J", "Move"),
            ("r", "Rename"),
            ("d", "Remove"),
            ("s", "Save and Update Grub"),
            ("R", "Reload"),
            ("Tab", "Switch"),
            ("q", "Quit"),
        ],
    }
}
