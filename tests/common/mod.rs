#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use grubsort::{BootMenuGenerator, GeneratorReport, GrubError, InstallMode, PrivilegedInstaller};

pub const UBUNTU_CFG: &str = "\
set default=\"0\"
### BEGIN /etc/grub.d/10_linux ###
menuentry 'Ubuntu' --class ubuntu --class gnu-linux --class gnu --class os $menuentry_id_option 'gnulinux-simple-1234' {
\trecordfail
\tload_video
\tlinux\t/boot/vmlinuz-6.8.0-45-generic root=UUID=1234 ro  quiet splash $vt_handoff
\tinitrd\t/boot/initrd.img-6.8.0-45-generic
}
menuentry 'Ubuntu (recovery mode)' --class ubuntu --class gnu-linux --class gnu --class os $menuentry_id_option 'gnulinux-recovery-1234' {
\trecordfail
\techo\t'Loading Linux 6.8.0-45-generic ...'
\tlinux\t/boot/vmlinuz-6.8.0-45-generic root=UUID=1234 ro recovery nomodeset dis_ucode_ldr
}
### END /etc/grub.d/10_linux ###
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Install {
    pub target: PathBuf,
    pub contents: String,
    pub mode: InstallMode,
}

/// Records installs instead of copying; optionally fails on a given target.
#[derive(Default)]
pub struct RecordingInstaller {
    pub installs: RefCell<Vec<Install>>,
    pub fail_on: Option<PathBuf>,
}

impl RecordingInstaller {
    pub fn failing_on(target: impl Into<PathBuf>) -> Self {
        RecordingInstaller {
            fail_on: Some(target.into()),
            ..Default::default()
        }
    }
}

impl PrivilegedInstaller for RecordingInstaller {
    fn install(&self, target: &Path, contents: &[u8], mode: InstallMode) -> Result<(), GrubError> {
        if self.fail_on.as_deref() == Some(target) {
            return Err(GrubError::Privilege {
                action: format!("copy to {}", target.display()),
                output: "Error executing command as another user: Not authorized".to_string(),
            });
        }
        self.installs.borrow_mut().push(Install {
            target: target.to_path_buf(),
            contents: String::from_utf8_lossy(contents).into_owned(),
            mode,
        });
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeGenerator {
    pub runs: RefCell<usize>,
    pub fail_with: Option<String>,
}

impl BootMenuGenerator for FakeGenerator {
    fn regenerate(&self) -> Result<GeneratorReport, GrubError> {
        *self.runs.borrow_mut() += 1;
        match &self.fail_with {
            Some(output) => Err(GrubError::ExternalTool {
                status: "exit status: 1".to_string(),
                output: output.clone(),
            }),
            None => Ok(GeneratorReport::from_output(
                "Generating grub configuration file ...\nWarning: os-prober will not be executed.\ndone\n"
                    .to_string(),
            )),
        }
    }
}
