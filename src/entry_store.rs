use regex::{Captures, Regex};

use crate::grub::{Entry, MENU_KEYWORD};

/// Ordered boot menu entries. Position in the sequence is the boot order.
///
/// Every mutation returns `true` when the sequence changed and `false` when
/// the index was out of range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl EntryStore {
    pub fn new(entries: Vec<Entry>) -> Self {
        EntryStore { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn titles(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.title.as_str()).collect()
    }

    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.entries.len() {
            return false;
        }
        self.entries.swap(index, index - 1);
        true
    }

    pub fn move_down(&mut self, index: usize) -> bool {
        if index + 1 >= self.entries.len() {
            return false;
        }
        self.entries.swap(index, index + 1);
        true
    }

    /// Exchange two entries, used while dragging.
    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        let len = self.entries.len();
        if a == b || a >= len || b >= len {
            return false;
        }
        self.entries.swap(a, b);
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<Entry> {
        if index >= self.entries.len() {
            return None;
        }
        Some(self.entries.remove(index))
    }

    /// Retitle an entry and rewrite the quoted title in its declaration line.
    ///
    /// Only the first line of the block is searched. The whitespace after the
    /// keyword is kept and the body bytes are left untouched, so mentions of
    /// the old title in the body stay as they were.
    pub fn rename(&mut self, index: usize, new_title: &str) -> bool {
        let Some(entry) = self.entries.get_mut(index) else {
            return false;
        };

        let pattern = format!(r"({}\s+)'{}'", MENU_KEYWORD, regex::escape(&entry.title));
        match Regex::new(&pattern) {
            Ok(re) => {
                let split = entry.content.find('\n').unwrap_or(entry.content.len());
                let (declaration, body) = entry.content.split_at(split);
                let declaration = re.replacen(declaration, 1, |caps: &Captures| {
                    format!("{}'{}'", &caps[1], new_title)
                });
                entry.content = format!("{}{}", declaration, body);
            }
            Err(e) => {
                log::warn!("Declaration of '{}' left unchanged: {}", entry.title, e);
            }
        }
        entry.title = new_title.to_string();
        true
    }
}
