use std::path::PathBuf;
use std::process::Command;

use crate::error::GrubError;
use crate::installer::combined_output;
use crate::settings::Settings;

/// Output of a successful boot menu regeneration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorReport {
    pub output: String,
    pub warnings: Vec<String>,
}

impl GeneratorReport {
    pub fn from_output(output: String) -> Self {
        let warnings = output
            .lines()
            .filter(|line| line.to_lowercase().contains("warning"))
            .map(|line| line.to_string())
            .collect();
        GeneratorReport { output, warnings }
    }
}

pub trait BootMenuGenerator {
    fn regenerate(&self) -> Result<GeneratorReport, GrubError>;
}

/// Runs `<elevate> grub-mkconfig -o <grub.cfg>`.
#[derive(Debug, Clone)]
pub struct GrubMkconfig {
    elevate: PathBuf,
    command: String,
    output_path: PathBuf,
}

impl GrubMkconfig {
    pub fn new(
        elevate: impl Into<PathBuf>,
        command: impl Into<String>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        GrubMkconfig {
            elevate: elevate.into(),
            command: command.into(),
            output_path: output_path.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            &settings.elevate_command,
            settings.generator_command.clone(),
            &settings.grub_cfg_path,
        )
    }
}

impl BootMenuGenerator for GrubMkconfig {
    fn regenerate(&self) -> Result<GeneratorReport, GrubError> {
        log::info!("Running {} -o {}", self.command, self.output_path.display());

        let output = Command::new(&self.elevate)
            .arg(&self.command)
            .arg("-o")
            .arg(&self.output_path)
            .output()
            .map_err(|e| GrubError::ExternalTool {
                status: "not started".to_string(),
                output: format!("could not run {}: {}", self.elevate.display(), e),
            })?;

        let text = combined_output(&output);
        if !output.status.success() {
            log::error!("{} failed with {}", self.command, output.status);
            return Err(GrubError::ExternalTool {
                status: output.status.to_string(),
                output: text,
            });
        }

        let report = GeneratorReport::from_output(text);
        for warning in &report.warnings {
            log::warn!("{}", warning);
        }
        Ok(report)
    }
}
