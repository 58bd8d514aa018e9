use std::fs;
use std::io;
use std::path::Path;

use regex::Regex;

use crate::error::GrubError;

/// Written when /etc/default/grub does not exist yet.
pub const DEFAULT_GRUB_DEFAULTS: &str = "GRUB_DEFAULT=0
GRUB_TIMEOUT=5
GRUB_DISTRIBUTOR=`lsb_release -i -s 2> /dev/null || echo Debian`
GRUB_CMDLINE_LINUX_DEFAULT=\"quiet splash\"
GRUB_CMDLINE_LINUX=\"\"
";

const OS_PROBER_KEY: &str = "GRUB_DISABLE_OS_PROBER";

/// Contents of the defaults file, and whether they came from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultsText {
    OnDisk(String),
    Synthesized(String),
}

impl DefaultsText {
    pub fn text(&self) -> &str {
        match self {
            DefaultsText::OnDisk(t) | DefaultsText::Synthesized(t) => t,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            DefaultsText::OnDisk(t) | DefaultsText::Synthesized(t) => t,
        }
    }

    pub fn is_synthesized(&self) -> bool {
        matches!(self, DefaultsText::Synthesized(_))
    }
}

/// Read the defaults file; a missing file yields the built-in defaults.
pub fn read_defaults(path: &Path) -> Result<DefaultsText, GrubError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(DefaultsText::OnDisk(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::info!("{} not found, using built-in defaults", path.display());
            Ok(DefaultsText::Synthesized(DEFAULT_GRUB_DEFAULTS.to_string()))
        }
        Err(e) => Err(GrubError::read(path, e)),
    }
}

/// Turn os-prober off so the override script is the only source of foreign
/// entries. An existing `=false` flips to `=true`; a missing key is appended.
pub fn disable_os_prober(content: &str) -> String {
    if content.contains(OS_PROBER_KEY) {
        content.replacen(
            &format!("{}=false", OS_PROBER_KEY),
            &format!("{}=true", OS_PROBER_KEY),
            1,
        )
    } else {
        format!("{}\n{}=true", content, OS_PROBER_KEY)
    }
}

/// The handful of keys worth showing above the raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultsSummary {
    pub grub_default: Option<String>,
    pub grub_timeout: Option<String>,
    pub grub_cmdline_linux: Option<String>,
    pub grub_cmdline_linux_default: Option<String>,
}

impl DefaultsSummary {
    pub fn parse(content: &str) -> Self {
        let mut summary = DefaultsSummary::default();
        let Ok(assign_re) = Regex::new(r"^\s*(GRUB_[A-Z_]+)\s*=\s*(.*?)\s*$") else {
            return summary;
        };

        for line in content.lines() {
            let Some(caps) = assign_re.captures(line) else {
                continue;
            };
            let value = unquote(&caps[2]).to_string();
            match &caps[1] {
                "GRUB_DEFAULT" => summary.grub_default = Some(value),
                "GRUB_TIMEOUT" => summary.grub_timeout = Some(value),
                "GRUB_CMDLINE_LINUX" => summary.grub_cmdline_linux = Some(value),
                "GRUB_CMDLINE_LINUX_DEFAULT" => summary.grub_cmdline_linux_default = Some(value),
                _ => {}
            }
        }

        summary
    }
}

fn unquote(value: &str) -> &str {
    value.trim_matches('"').trim_matches('\'')
}
