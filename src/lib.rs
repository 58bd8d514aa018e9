//! Edit GRUB defaults and reorder boot menu entries from the terminal.
//!
//! Boot entries are read from the generated grub.cfg, reordered or renamed in
//! memory, and written back as an override script under /etc/grub.d before
//! grub-mkconfig is run again.

pub mod app;
pub mod colorprint;
pub mod entry_store;
pub mod error;
pub mod generator;
pub mod grub;
pub mod grub_config;
pub mod installer;
pub mod interaction;
pub mod render;
pub mod script;
pub mod session;
pub mod settings;

pub use entry_store::EntryStore;
pub use error::GrubError;
pub use generator::{BootMenuGenerator, GeneratorReport, GrubMkconfig};
pub use grub::{load_menu_entries, parse_menu_entries, Entry};
pub use installer::{InstallMode, PkexecInstaller, PrivilegedInstaller};
pub use script::render_override_script;
pub use session::{BootOrderSession, DefaultsSession, DragState};
pub use settings::Settings;
