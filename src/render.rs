use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use crate::app::{App, Popup};
use crate::colorprint::Bcolors;
use crate::interaction::{key_hints, Tab};
use crate::session::{BootOrderSession, DefaultsSession, DragState};

pub fn render(frame: &mut Frame, app: &mut App) {
    let bcolors = Bcolors::new();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let tabs = Tabs::new(Tab::ALL.iter().map(|t| t.title()))
        .select(app.tab.index())
        .highlight_style(bcolors.okgreen().patch(bcolors.bold()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" GRUBSORT ", bcolors.header())),
        );
    frame.render_widget(tabs, chunks[0]);

    match app.tab {
        Tab::GrubConfig => render_config_tab(frame, chunks[1], app, &bcolors),
        Tab::BootOrder => render_boot_order_tab(frame, chunks[1], app, &bcolors),
    }

    let status = Paragraph::new(app.status.clone().unwrap_or_default()).style(bcolors.okblue());
    frame.render_widget(status, chunks[2]);

    let mut hints = Vec::new();
    for (key, label) in key_hints(app.tab) {
        hints.push(Span::styled(format!(" {} ", key), bcolors.inverse()));
        hints.push(Span::raw(format!(" {}  ", label)));
    }
    frame.render_widget(Paragraph::new(Line::from(hints)), chunks[3]);

    if let Some(popup) = &app.popup {
        render_popup(frame, popup, &bcolors);
    }
    if let Some(busy) = app.busy {
        render_busy(frame, busy, &bcolors);
    }
}

fn render_config_tab(frame: &mut Frame, area: Rect, app: &App, bcolors: &Bcolors) {
    let defaults = match &app.defaults {
        Ok(d) => d,
        Err(msg) => {
            frame.render_widget(Paragraph::new(msg.as_str()).style(bcolors.fail()), area);
            return;
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(1)])
        .split(area);

    frame.render_widget(summary_paragraph(defaults, bcolors), chunks[0]);

    let mut title = format!(" {} ", app.settings().defaults_path.display());
    if defaults.is_dirty() {
        title.push_str("[modified] ");
    }
    let text = Paragraph::new(defaults.text())
        .scroll((app.config_scroll, 0))
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(text, chunks[1]);
}

fn summary_paragraph<'a>(defaults: &DefaultsSession, bcolors: &Bcolors) -> Paragraph<'a> {
    let summary = defaults.summary();
    let field = |name: &'static str, value: Option<String>| {
        Line::from(vec![
            Span::styled(format!("{:<28}", name), bcolors.bold()),
            match value {
                Some(v) => Span::styled(v, bcolors.okgreen()),
                None => Span::styled("(unset)", bcolors.dim()),
            },
        ])
    };
    Paragraph::new(vec![
        field("GRUB_DEFAULT", summary.grub_default),
        field("GRUB_TIMEOUT", summary.grub_timeout),
        field("GRUB_CMDLINE_LINUX_DEFAULT", summary.grub_cmdline_linux_default),
        field("GRUB_CMDLINE_LINUX", summary.grub_cmdline_linux),
    ])
}

fn render_boot_order_tab(frame: &mut Frame, area: Rect, app: &mut App, bcolors: &Bcolors) {
    let boot: &BootOrderSession = match &app.boot {
        Ok(b) => b,
        Err(msg) => {
            frame.render_widget(Paragraph::new(msg.as_str()).style(bcolors.fail()), area);
            return;
        }
    };

    let mut title = format!(" {} entries ", boot.store().len());
    if boot.is_dirty() {
        title.push_str("[modified] ");
    }
    if let DragState::Dragging { .. } = boot.drag_state() {
        title.push_str("[dragging] ");
    }
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);

    let items: Vec<ListItem> = boot
        .store()
        .iter()
        .enumerate()
        .map(|(i, entry)| ListItem::new(format!("{:>3}. {}", i, entry.title)))
        .collect();
    let empty = items.is_empty();
    let list = List::new(items)
        .block(block)
        .highlight_style(bcolors.inverse())
        .highlight_symbol("● ");

    let selected = boot.selected();
    app.list_state.select(selected);
    app.list_area = inner;
    frame.render_stateful_widget(list, area, &mut app.list_state);

    if empty {
        let note = Paragraph::new("No menu entries found in grub.cfg").style(bcolors.warning());
        frame.render_widget(note, inner);
    }
}

fn render_popup(frame: &mut Frame, popup: &Popup, bcolors: &Bcolors) {
    let area = centered_rect(frame.area(), 60, 40);
    frame.render_widget(Clear, area);

    let (title, lines, style) = match popup {
        Popup::Confirm { title, message, .. } => (
            title.as_str(),
            vec![
                Line::from(message.as_str()),
                Line::from(""),
                Line::from(Span::styled("[y] Yes    [n] No", bcolors.bold())),
            ],
            bcolors.warning(),
        ),
        Popup::Rename { input } => (
            "Rename",
            vec![
                Line::from("Rename the selected boot entry"),
                Line::from(""),
                Line::from(vec![
                    Span::styled("New Name: ", bcolors.bold()),
                    Span::styled(format!("{}_", input), bcolors.okgreen()),
                ]),
                Line::from(""),
                Line::from(Span::styled("[Enter] Rename    [Esc] Cancel", bcolors.dim())),
            ],
            bcolors.okblue(),
        ),
        Popup::Message { title, body, error } => {
            let mut lines: Vec<Line> = body.lines().map(Line::from).collect();
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Press any key", bcolors.dim())));
            let style = if *error { bcolors.fail() } else { bcolors.okgreen() };
            (title.as_str(), lines, style)
        }
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(style)
                .title(Span::styled(format!(" {} ", title), style)),
        );
    frame.render_widget(paragraph, area);
}

fn render_busy(frame: &mut Frame, message: &str, bcolors: &Bcolors) {
    let area = centered_rect(frame.area(), 40, 20);
    frame.render_widget(Clear, area);
    let paragraph = Paragraph::new(vec![Line::from(""), Line::from("Please wait...")])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(format!(" {} ", message), bcolors.bold())),
        );
    frame.render_widget(paragraph, area);
}

fn centered_rect(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(area);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(horizontal[1]);
    vertical[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GrubError;
    use crate::generator::{BootMenuGenerator, GeneratorReport};
    use crate::installer::{InstallMode, PrivilegedInstaller};
    use crate::settings::Settings;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::path::Path;

    struct Noop;

    impl PrivilegedInstaller for Noop {
        fn install(&self, _: &Path, _: &[u8], _: InstallMode) -> Result<(), GrubError> {
            Ok(())
        }
    }

    impl BootMenuGenerator for Noop {
        fn regenerate(&self) -> Result<GeneratorReport, GrubError> {
            Ok(GeneratorReport::default())
        }
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn boot_order_tab_lists_titles_and_records_list_area() {
        let dir = tempfile::tempdir().unwrap();
        let grub_cfg = dir.path().join("grub.cfg");
        std::fs::write(&grub_cfg, "menuentry 'Ubuntu' {\n}\nmenuentry 'Memtest86+' {\n}\n").unwrap();
        let settings = Settings {
            grub_cfg_path: grub_cfg,
            defaults_path: dir.path().join("grub"),
            ..Settings::default()
        };
        let mut app = App::new(settings, Box::new(Noop), Box::new(Noop));
        app.tab = Tab::BootOrder;

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("0. Ubuntu"));
        assert!(text.contains("1. Memtest86+"));
        assert_eq!(app.list_area, Rect::new(1, 4, 58, 13));
    }

    #[test]
    fn config_tab_shows_summary() {
        let dir = tempfile::tempdir().unwrap();
        let defaults = dir.path().join("grub");
        std::fs::write(&defaults, "GRUB_DEFAULT=saved\nGRUB_TIMEOUT=3\n").unwrap();
        let settings = Settings {
            grub_cfg_path: dir.path().join("grub.cfg"),
            defaults_path: defaults,
            ..Settings::default()
        };
        let mut app = App::new(settings, Box::new(Noop), Box::new(Noop));

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Grub Config"));
        assert!(text.contains("saved"));
        assert!(text.contains("GRUB_TIMEOUT=3"));
    }
}
