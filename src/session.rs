//! Session state behind the two tabs.
//!
//! Selection, drag origin and unsaved-change tracking all live here so the
//! terminal frontend only translates input into calls on these types.

use std::path::Path;

use crate::entry_store::EntryStore;
use crate::error::GrubError;
use crate::generator::{BootMenuGenerator, GeneratorReport};
use crate::grub::{load_menu_entries, Entry};
use crate::grub_config::{disable_os_prober, read_defaults, DefaultsSummary};
use crate::installer::{InstallMode, PrivilegedInstaller};
use crate::script::render_override_script;
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        origin: usize,
    },
}

/// Boot order editing session.
#[derive(Debug, Clone, Default)]
pub struct BootOrderSession {
    store: EntryStore,
    selected: Option<usize>,
    drag: DragState,
    dirty: bool,
}

impl BootOrderSession {
    pub fn new(entries: Vec<Entry>) -> Self {
        BootOrderSession {
            store: EntryStore::new(entries),
            ..Default::default()
        }
    }

    pub fn load(grub_cfg: &Path) -> Result<Self, GrubError> {
        Ok(Self::new(load_menu_entries(grub_cfg)?))
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.selected.and_then(|i| self.store.get(i))
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.store.len());
    }

    pub fn select_previous(&mut self) {
        let next = match self.selected {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.select(Some(next));
    }

    pub fn select_next(&mut self) {
        let next = match self.selected {
            Some(i) if i + 1 < self.store.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.select(Some(next));
    }

    /// Move the selected entry one place earlier; the selection follows it.
    pub fn move_up(&mut self) -> bool {
        let Some(i) = self.selected else {
            return false;
        };
        if !self.store.move_up(i) {
            return false;
        }
        self.selected = Some(i - 1);
        self.dirty = true;
        true
    }

    pub fn move_down(&mut self) -> bool {
        let Some(i) = self.selected else {
            return false;
        };
        if !self.store.move_down(i) {
            return false;
        }
        self.selected = Some(i + 1);
        self.dirty = true;
        true
    }

    pub fn remove_selected(&mut self) -> Option<Entry> {
        let removed = self.store.remove(self.selected?)?;
        log::info!("Removed entry '{}'", removed.title);
        self.selected = None;
        self.dirty = true;
        Some(removed)
    }

    pub fn rename_selected(&mut self, title: &str) -> bool {
        let Some(i) = self.selected else {
            return false;
        };
        if !self.store.rename(i, title) {
            return false;
        }
        self.dirty = true;
        true
    }

    pub fn begin_drag(&mut self, index: usize) {
        if self.drag == DragState::Idle && index < self.store.len() {
            self.drag = DragState::Dragging { origin: index };
            self.selected = Some(index);
        }
    }

    /// Swap the dragged entry into `index`; the drag continues from there.
    pub fn drag_over(&mut self, index: usize) -> bool {
        let DragState::Dragging { origin } = self.drag else {
            return false;
        };
        if !self.store.swap(origin, index) {
            return false;
        }
        self.drag = DragState::Dragging { origin: index };
        self.selected = Some(index);
        self.dirty = true;
        true
    }

    pub fn end_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Install the override script, optionally disable os-prober, then
    /// regenerate the boot menu. Stops at the first failure.
    pub fn save(
        &mut self,
        installer: &dyn PrivilegedInstaller,
        generator: &dyn BootMenuGenerator,
        settings: &Settings,
    ) -> Result<GeneratorReport, GrubError> {
        let script = render_override_script(self.store.entries());
        installer.install(
            &settings.override_script_path,
            script.as_bytes(),
            InstallMode::Executable,
        )?;

        if settings.disable_os_prober_on_save {
            let defaults = read_defaults(&settings.defaults_path)?;
            let updated = disable_os_prober(defaults.text());
            installer.install(&settings.defaults_path, updated.as_bytes(), InstallMode::Regular)?;
        }

        let report = generator.regenerate()?;
        self.dirty = false;
        Ok(report)
    }
}

/// Text buffer for /etc/default/grub.
#[derive(Debug, Clone, Default)]
pub struct DefaultsSession {
    text: String,
    saved: String,
}

impl DefaultsSession {
    /// Read the defaults file. A missing file is created from the built-in
    /// defaults with os-prober disabled.
    pub fn load(installer: &dyn PrivilegedInstaller, settings: &Settings) -> Result<Self, GrubError> {
        let defaults = read_defaults(&settings.defaults_path)?;
        if defaults.is_synthesized() {
            let text = defaults.text();
            installer.install(&settings.defaults_path, text.as_bytes(), InstallMode::Regular)?;
            let disabled = disable_os_prober(text);
            installer.install(&settings.defaults_path, disabled.as_bytes(), InstallMode::Regular)?;
        }
        let text = defaults.into_text();
        Ok(DefaultsSession {
            saved: text.clone(),
            text,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    pub fn summary(&self) -> DefaultsSummary {
        DefaultsSummary::parse(&self.text)
    }

    pub fn is_dirty(&self) -> bool {
        self.text != self.saved
    }

    pub fn save(&mut self, installer: &dyn PrivilegedInstaller, settings: &Settings) -> Result<(), GrubError> {
        installer.install(&settings.defaults_path, self.text.as_bytes(), InstallMode::Regular)?;
        self.saved = self.text.clone();
        Ok(())
    }

    pub fn regenerate(&self, generator: &dyn BootMenuGenerator) -> Result<GeneratorReport, GrubError> {
        generator.regenerate()
    }
}
