//! Terminal frontend: application state, input handling and the event loop.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::process::Command;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, ExecutableCommand};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use ratatui::Terminal;

use crate::error::GrubError;
use crate::generator::{BootMenuGenerator, GeneratorReport};
use crate::installer::PrivilegedInstaller;
use crate::interaction::{key_action, Action, Tab};
use crate::render::render;
use crate::session::{BootOrderSession, DefaultsSession};
use crate::settings::Settings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Popup {
    Confirm {
        title: String,
        message: String,
        on_yes: Confirmed,
    },
    Rename {
        input: String,
    },
    Message {
        title: String,
        body: String,
        error: bool,
    },
}

/// What a confirmation popup does when accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmed {
    SaveDefaults,
    SaveBootOrder,
    RemoveEntry,
    Reload,
    Quit,
}

/// Blocking work, run after the busy indicator has been drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    EditDefaults,
    SaveDefaults,
    SaveBootOrder,
    UpdateGrub,
}

pub struct App {
    settings: Settings,
    installer: Box<dyn PrivilegedInstaller>,
    generator: Box<dyn BootMenuGenerator>,
    pub(crate) defaults: Result<DefaultsSession, String>,
    pub(crate) boot: Result<BootOrderSession, String>,
    pub(crate) tab: Tab,
    pub(crate) popup: Option<Popup>,
    pub(crate) status: Option<String>,
    pub(crate) busy: Option<&'static str>,
    pending: Option<Deferred>,
    pub(crate) list_state: ListState,
    pub(crate) list_area: Rect,
    pub(crate) config_scroll: u16,
    should_quit: bool,
}

impl App {
    pub fn new(
        settings: Settings,
        installer: Box<dyn PrivilegedInstaller>,
        generator: Box<dyn BootMenuGenerator>,
    ) -> Self {
        let defaults = load_defaults(installer.as_ref(), &settings);
        let boot = load_boot_order(&settings);
        App {
            settings,
            installer,
            generator,
            defaults,
            boot,
            tab: Tab::GrubConfig,
            popup: None,
            status: None,
            busy: None,
            pending: None,
            list_state: ListState::default(),
            list_area: Rect::default(),
            config_scroll: 0,
            should_quit: false,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    pub fn boot_order(&self) -> Option<&BootOrderSession> {
        self.boot.as_ref().ok()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn take_pending(&mut self) -> Option<Deferred> {
        self.pending.take()
    }

    fn has_unsaved_changes(&self) -> bool {
        let defaults = self.defaults.as_ref().map(|d| d.is_dirty()).unwrap_or(false);
        let boot = self.boot.as_ref().map(|b| b.is_dirty()).unwrap_or(false);
        defaults || boot
    }

    fn tab_has_unsaved_changes(&self) -> bool {
        match self.tab {
            Tab::GrubConfig => self.defaults.as_ref().map(|d| d.is_dirty()).unwrap_or(false),
            Tab::BootOrder => self.boot.as_ref().map(|b| b.is_dirty()).unwrap_or(false),
        }
    }

    fn confirm(&mut self, title: &str, message: &str, on_yes: Confirmed) {
        self.popup = Some(Popup::Confirm {
            title: title.to_string(),
            message: message.to_string(),
            on_yes,
        });
    }

    fn show_error(&mut self, title: &str, err: &GrubError) {
        log::error!("{}: {}", title, err);
        self.popup = Some(Popup::Message {
            title: title.to_string(),
            body: err.to_string(),
            error: true,
        });
    }

    fn show_success(&mut self, message: &str, report: Option<&GeneratorReport>) {
        let mut body = message.to_string();
        if let Some(report) = report {
            for warning in &report.warnings {
                body.push('\n');
                body.push_str(warning);
            }
        }
        self.status = Some(message.to_string());
        self.popup = Some(Popup::Message {
            title: "Success".to_string(),
            body,
            error: false,
        });
    }

    fn defer(&mut self, work: Deferred, busy: &'static str) {
        self.pending = Some(work);
        self.busy = Some(busy);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.busy.is_some() || key.kind == KeyEventKind::Release {
            return;
        }
        if self.popup.is_some() {
            self.handle_popup_key(key);
            return;
        }
        if let Some(action) = key_action(self.tab, key) {
            self.apply(action);
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => {
                if self.has_unsaved_changes() {
                    self.confirm("Quit", "Discard unsaved changes and quit?", Confirmed::Quit);
                } else {
                    self.should_quit = true;
                }
            }
            Action::NextTab => self.tab = self.tab.next(),
            Action::Up => match self.tab {
                Tab::GrubConfig => self.config_scroll = self.config_scroll.saturating_sub(1),
                Tab::BootOrder => {
                    if let Ok(boot) = self.boot.as_mut() {
                        boot.select_previous();
                    }
                }
            },
            Action::Down => match self.tab {
                Tab::GrubConfig => {
                    let lines = self.defaults.as_ref().map(|d| d.text().lines().count()).unwrap_or(0);
                    let max = u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX);
                    self.config_scroll = self.config_scroll.saturating_add(1).min(max);
                }
                Tab::BootOrder => {
                    if let Ok(boot) = self.boot.as_mut() {
                        boot.select_next();
                    }
                }
            },
            Action::MoveUp => {
                if let Ok(boot) = self.boot.as_mut() {
                    boot.move_up();
                }
            }
            Action::MoveDown => {
                if let Ok(boot) = self.boot.as_mut() {
                    boot.move_down();
                }
            }
            Action::Rename => {
                let current = self
                    .boot_order()
                    .and_then(|b| b.selected_entry())
                    .map(|e| e.title.clone());
                if let Some(input) = current {
                    self.popup = Some(Popup::Rename { input });
                }
            }
            Action::Remove => {
                if self.boot_order().and_then(|b| b.selected()).is_some() {
                    self.confirm(
                        "Delete entry",
                        "Are you sure you want to delete this entry?",
                        Confirmed::RemoveEntry,
                    );
                }
            }
            Action::Save => match self.tab {
                Tab::GrubConfig if self.defaults.is_ok() => self.confirm(
                    "Save Grub Config",
                    "Are you sure you want to save the changes to the grub config?",
                    Confirmed::SaveDefaults,
                ),
                Tab::BootOrder if self.boot.is_ok() => self.confirm(
                    "Save and Update Grub",
                    "Are you sure you want to save the changes to the boot order?",
                    Confirmed::SaveBootOrder,
                ),
                _ => {}
            },
            Action::Edit => {
                if self.defaults.is_ok() {
                    self.defer(Deferred::EditDefaults, "Waiting for editor");
                }
            }
            Action::UpdateGrub => self.defer(Deferred::UpdateGrub, "Running update-grub"),
            Action::Reload => {
                if self.tab_has_unsaved_changes() {
                    self.confirm("Reload", "Discard unsaved changes and reload?", Confirmed::Reload);
                } else {
                    self.reload();
                }
            }
        }
    }

    fn reload(&mut self) {
        match self.tab {
            Tab::GrubConfig => {
                self.defaults = load_defaults(self.installer.as_ref(), &self.settings);
                self.config_scroll = 0;
            }
            Tab::BootOrder => {
                self.boot = load_boot_order(&self.settings);
                self.list_state = ListState::default();
            }
        }
        self.status = Some(format!("Reloaded {}", self.tab.title()));
    }

    fn handle_popup_key(&mut self, key: KeyEvent) {
        let Some(popup) = self.popup.take() else {
            return;
        };
        match popup {
            Popup::Confirm { on_yes, .. } => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.accept(on_yes),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {}
                _ => self.popup = Some(popup),
            },
            Popup::Rename { mut input } => match key.code {
                KeyCode::Esc => {}
                KeyCode::Enter => {
                    let title = input.trim();
                    if title.is_empty() {
                        self.popup = Some(Popup::Rename { input });
                    } else if let Ok(boot) = self.boot.as_mut() {
                        let title = title.to_string();
                        if boot.rename_selected(&title) {
                            self.status = Some(format!("Renamed to '{}'", title));
                        }
                    }
                }
                KeyCode::Backspace => {
                    input.pop();
                    self.popup = Some(Popup::Rename { input });
                }
                KeyCode::Char(c) => {
                    input.push(c);
                    self.popup = Some(Popup::Rename { input });
                }
                _ => self.popup = Some(Popup::Rename { input }),
            },
            Popup::Message { .. } => {}
        }
    }

    fn accept(&mut self, confirmed: Confirmed) {
        match confirmed {
            Confirmed::SaveDefaults => self.defer(Deferred::SaveDefaults, "Saving grub config"),
            Confirmed::SaveBootOrder => {
                self.defer(Deferred::SaveBootOrder, "Saving and updating grub")
            }
            Confirmed::RemoveEntry => {
                if let Ok(boot) = self.boot.as_mut() {
                    if let Some(removed) = boot.remove_selected() {
                        self.status = Some(format!("Removed '{}'", removed.title));
                    }
                }
            }
            Confirmed::Reload => self.reload(),
            Confirmed::Quit => self.should_quit = true,
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.tab != Tab::BootOrder || self.popup.is_some() || self.busy.is_some() {
            return;
        }
        let row = self.list_row(mouse.column, mouse.row);
        let offset = self.list_state.offset();
        let Ok(boot) = self.boot.as_mut() else {
            return;
        };

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(row) = row {
                    boot.end_drag();
                    boot.select(Some(row + offset));
                    boot.begin_drag(row + offset);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(row) = row {
                    boot.drag_over(row + offset);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => boot.end_drag(),
            _ => {}
        }
    }

    fn list_row(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.list_area;
        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        inside.then(|| usize::from(row - area.y))
    }

    /// Run deferred work that does not need the terminal.
    pub fn run_blocking(&mut self, work: Deferred) {
        self.busy = None;
        match work {
            Deferred::SaveDefaults => {
                let result = match self.defaults.as_mut() {
                    Ok(defaults) => defaults.save(self.installer.as_ref(), &self.settings),
                    Err(_) => return,
                };
                match result {
                    Ok(()) => self.show_success("Grub config saved successfully!", None),
                    Err(e) => self.show_error("Failed to write grub config", &e),
                }
            }
            Deferred::SaveBootOrder => {
                let result = match self.boot.as_mut() {
                    Ok(boot) => boot.save(
                        self.installer.as_ref(),
                        self.generator.as_ref(),
                        &self.settings,
                    ),
                    Err(_) => return,
                };
                match result {
                    Ok(report) => self.show_success("Grub updated successfully!", Some(&report)),
                    Err(e) => self.show_error("Failed to save boot order", &e),
                }
            }
            Deferred::UpdateGrub => match self.generator.regenerate() {
                Ok(report) => self.show_success("Grub updated successfully!", Some(&report)),
                Err(e) => self.show_error("Failed to update grub", &e),
            },
            Deferred::EditDefaults => {}
        }
    }

    /// Hand the defaults text to `$EDITOR` and read the result back.
    fn edit_defaults<B>(&mut self, terminal: &mut Terminal<B>) -> Result<()>
    where
        B: ratatui::backend::Backend + Write,
    {
        let Ok(defaults) = self.defaults.as_mut() else {
            return Ok(());
        };

        let mut staged = tempfile::Builder::new()
            .prefix("grub-config-")
            .suffix(".txt")
            .tempfile()
            .context("failed to create temporary file")?;
        staged.write_all(defaults.text().as_bytes())?;
        staged.flush()?;

        let editor = env::var("VISUAL")
            .or_else(|_| env::var("EDITOR"))
            .unwrap_or_else(|_| "vi".to_string());
        let path = staged.path().to_path_buf();
        let status = with_terminal_suspension(terminal, || {
            Command::new(&editor)
                .arg(&path)
                .status()
                .with_context(|| format!("failed to launch {}", editor))
        });

        match status {
            Ok(status) if status.success() => {
                let text = fs::read_to_string(&path).context("failed to read edited file")?;
                if text != defaults.text() {
                    defaults.set_text(text);
                    self.status = Some("Grub config edited (unsaved)".to_string());
                }
            }
            Ok(status) => self.status = Some(format!("{} exited with {}", editor, status)),
            Err(e) => self.status = Some(format!("{:#}", e)),
        }
        Ok(())
    }

    pub fn execute_deferred<B>(&mut self, terminal: &mut Terminal<B>, work: Deferred) -> Result<()>
    where
        B: ratatui::backend::Backend + Write,
    {
        match work {
            Deferred::EditDefaults => {
                let result = self.edit_defaults(terminal);
                self.busy = None;
                result
            }
            other => {
                self.run_blocking(other);
                Ok(())
            }
        }
    }
}

fn load_defaults(
    installer: &dyn PrivilegedInstaller,
    settings: &Settings,
) -> Result<DefaultsSession, String> {
    DefaultsSession::load(installer, settings).map_err(|e| {
        log::error!("Failed to load grub config: {}", e);
        format!("Failed to read grub config: {}", e)
    })
}

fn load_boot_order(settings: &Settings) -> Result<BootOrderSession, String> {
    BootOrderSession::load(&settings.grub_cfg_path).map_err(|e| {
        log::error!("Failed to load boot entries: {}", e);
        format!("Failed to parse grub.cfg: {}", e)
    })
}

/// Set up the terminal, run until the user quits, and restore it.
pub fn run(app: &mut App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = event_loop(&mut terminal, app);

    restore_terminal(&mut terminal)?;
    result
}

fn event_loop<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: ratatui::backend::Backend + Write,
{
    let tick_rate = Duration::from_millis(200);
    loop {
        terminal.draw(|frame| render(frame, app))?;

        if let Some(work) = app.take_pending() {
            app.execute_deferred(terminal, work)?;
            continue;
        }

        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if app.should_quit() {
            break;
        }
    }
    Ok(())
}

fn restore_terminal<B>(terminal: &mut Terminal<B>) -> Result<()>
where
    B: ratatui::backend::Backend + Write,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn with_terminal_suspension<B, F, T>(terminal: &mut Terminal<B>, f: F) -> Result<T>
where
    B: ratatui::backend::Backend + Write,
    F: FnOnce() -> Result<T>,
{
    terminal.show_cursor()?;
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    let result = f();
    enable_raw_mode()?;
    execute!(terminal.backend_mut(), EnterAlternateScreen, EnableMouseCapture)?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::installer::InstallMode;
    use crossterm::event::KeyModifiers;
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Recorder {
        installs: Rc<RefCell<Vec<(PathBuf, String)>>>,
        regenerations: Rc<RefCell<usize>>,
    }

    impl PrivilegedInstaller for Recorder {
        fn install(&self, target: &Path, contents: &[u8], _mode: InstallMode) -> Result<(), GrubError> {
            self.installs
                .borrow_mut()
                .push((target.to_path_buf(), String::from_utf8_lossy(contents).into_owned()));
            Ok(())
        }
    }

    impl BootMenuGenerator for Recorder {
        fn regenerate(&self) -> Result<GeneratorReport, GrubError> {
            *self.regenerations.borrow_mut() += 1;
            Ok(GeneratorReport::default())
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app(dir: &Path) -> (App, Recorder) {
        let grub_cfg = dir.join("grub.cfg");
        let defaults = dir.join("grub");
        fs::write(&grub_cfg, "menuentry 'A' {\n}\nmenuentry 'B' {\n}\n").unwrap();
        fs::write(&defaults, "GRUB_TIMEOUT=5\n").unwrap();
        let settings = Settings {
            grub_cfg_path: grub_cfg,
            defaults_path: defaults,
            override_script_path: dir.join("42_custom_proxy"),
            ..Settings::default()
        };
        let recorder = Recorder::default();
        let app = App::new(settings, Box::new(recorder.clone()), Box::new(recorder.clone()));
        (app, recorder)
    }

    #[test]
    fn remove_requires_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        let (mut app, _) = app(dir.path());
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Char('d')));
        assert!(matches!(app.popup(), Some(Popup::Confirm { on_yes: Confirmed::RemoveEntry, .. })));

        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.boot_order().unwrap().store().len(), 2);

        app.handle_key(key(KeyCode::Char('d')));
        app.handle_key(key(KeyCode::Char('y')));
        assert_eq!(app.boot_order().unwrap().store().titles(), ["B"]);
    }

    #[test]
    fn rename_popup_edits_title() {
        let dir = tempfile::tempdir().unwrap();
        let (mut app, _) = app(dir.path());
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Char('r')));
        assert_eq!(app.popup(), Some(&Popup::Rename { input: "A".into() }));

        app.handle_key(key(KeyCode::Backspace));
        for c in "Main".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
        assert!(app.popup().is_none());
        let entry = app.boot_order().unwrap().selected_entry().unwrap();
        assert_eq!(entry.content, "menuentry 'Main' {\n}\n");
    }

    #[test]
    fn save_boot_order_runs_after_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        let (mut app, recorder) = app(dir.path());
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(KeyEvent::new(KeyCode::Char('J'), KeyModifiers::SHIFT));
        app.handle_key(key(KeyCode::Char('s')));
        app.handle_key(key(KeyCode::Enter));

        let work = app.take_pending().unwrap();
        assert_eq!(work, Deferred::SaveBootOrder);
        app.run_blocking(work);

        let installs = recorder.installs.borrow();
        assert_eq!(installs[0].0, dir.path().join("42_custom_proxy"));
        assert_eq!(
            installs[0].1,
            "#!/bin/sh\nexec tail -n +3 $0\nmenuentry 'B' {\n}\nmenuentry 'A' {\n}\n"
        );
        assert_eq!(*recorder.regenerations.borrow(), 1);
        assert!(!app.boot_order().unwrap().is_dirty());
        assert!(matches!(app.popup(), Some(Popup::Message { error: false, .. })));
    }

    #[test]
    fn quit_with_unsaved_changes_asks_first() {
        let dir = tempfile::tempdir().unwrap();
        let (mut app, _) = app(dir.path());
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(KeyEvent::new(KeyCode::Char('J'), KeyModifiers::SHIFT));
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.should_quit());
        app.handle_key(key(KeyCode::Char('y')));
        assert!(app.should_quit());
    }

    #[test]
    fn reload_with_unsaved_changes_asks_first() {
        let dir = tempfile::tempdir().unwrap();
        let (mut app, _) = app(dir.path());
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(KeyEvent::new(KeyCode::Char('J'), KeyModifiers::SHIFT));

        app.handle_key(KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT));
        assert!(matches!(app.popup(), Some(Popup::Confirm { on_yes: Confirmed::Reload, .. })));
        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.boot_order().unwrap().store().titles(), ["B", "A"]);

        app.handle_key(key(KeyCode::F(5)));
        app.handle_key(key(KeyCode::Char('y')));
        assert_eq!(app.boot_order().unwrap().store().titles(), ["A", "B"]);
        assert!(!app.boot_order().unwrap().is_dirty());
    }

    #[test]
    fn reload_of_clean_tab_needs_no_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        let (mut app, _) = app(dir.path());
        app.handle_key(key(KeyCode::F(5)));
        assert!(app.popup().is_none());
        assert_eq!(app.status.as_deref(), Some("Reloaded Grub Config"));
    }

    #[test]
    fn keys_are_ignored_while_busy() {
        let dir = tempfile::tempdir().unwrap();
        let (mut app, _) = app(dir.path());
        app.handle_key(key(KeyCode::Char('u')));
        assert_eq!(app.busy, Some("Running update-grub"));
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.tab(), Tab::GrubConfig);
        let work = app.take_pending().unwrap();
        app.run_blocking(work);
        assert!(app.busy.is_none());
    }

    #[test]
    fn mouse_drag_reorders_list() {
        let dir = tempfile::tempdir().unwrap();
        let (mut app, _) = app(dir.path());
        app.tab = Tab::BootOrder;
        app.list_area = Rect::new(1, 4, 40, 10);
        let at = |kind, row| MouseEvent {
            kind,
            column: 5,
            row,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(at(MouseEventKind::Down(MouseButton::Left), 4));
        app.handle_mouse(at(MouseEventKind::Drag(MouseButton::Left), 5));
        app.handle_mouse(at(MouseEventKind::Up(MouseButton::Left), 5));
        assert_eq!(app.boot_order().unwrap().store().titles(), ["B", "A"]);
        assert_eq!(app.boot_order().unwrap().selected(), Some(1));
    }

    #[test]
    fn missing_grub_cfg_is_reported_in_tab() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            grub_cfg_path: dir.path().join("absent.cfg"),
            defaults_path: dir.path().join("grub"),
            ..Settings::default()
        };
        let recorder = Recorder::default();
        let app = App::new(settings, Box::new(recorder.clone()), Box::new(recorder.clone()));
        assert!(app.boot_order().is_none());
        assert!(app.boot.as_ref().unwrap_err().starts_with("Failed to parse grub.cfg"));
        // The absent defaults file was created from the built-in template.
        assert_eq!(recorder.installs.borrow().len(), 2);
    }
}
