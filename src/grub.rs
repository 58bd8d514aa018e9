use std::fs;
use std::path::Path;

use crate::error::GrubError;

/// Keyword that opens a boot menu block in grub.cfg.
pub const MENU_KEYWORD: &str = "menuentry";

/// One selectable boot option, kept as the verbatim block text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub title: String,
    pub content: String,
}

impl Entry {
    pub fn new(title: String, content: String) -> Self {
        Entry { title, content }
    }
}

/// Read a generated grub.cfg and split it into menu entries.
pub fn load_menu_entries(path: &Path) -> Result<Vec<Entry>, GrubError> {
    let text = fs::read_to_string(path).map_err(|e| GrubError::read(path, e))?;
    let entries = parse_menu_entries(&text);
    log::info!("Parsed {} menu entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Split boot menu text into entries, in file order.
///
/// A block starts on a line beginning with `menuentry` and ends on a line that
/// is a bare `}`. Start lines without a quoted title are skipped. A start line
/// seen while a block is still open commits that block first.
pub fn parse_menu_entries(text: &str) -> Vec<Entry> {
    let mut entries = Vec::new();
    let mut current: Option<Entry> = None;

    for (lineno, line) in text.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.starts_with(MENU_KEYWORD) {
            if let Some(open) = current.take() {
                entries.push(open);
            }
            match quoted_title(line) {
                Some(title) => {
                    current = Some(Entry::new(title.to_string(), format!("{}\n", line)));
                }
                None => {
                    log::debug!("Skipping menuentry without title at line {}", lineno + 1);
                }
            }
        } else if let Some(open) = current.as_mut() {
            open.content.push_str(line);
            open.content.push('\n');
            if trimmed == "}" {
                if let Some(done) = current.take() {
                    entries.push(done);
                }
            }
        }
    }

    entries
}

/// Text between the first and second single quote of a line.
fn quoted_title(line: &str) -> Option<&str> {
    let parts: Vec<&str> = line.splitn(3, '\'').collect();
    if parts.len() < 3 {
        return None;
    }
    Some(parts[1])
}
