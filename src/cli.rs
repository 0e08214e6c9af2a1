// SPDX-License-Identifier: MPL-2.0
//! Command line front end.
//!
//! Runs image files through the same page pipeline a browser submission
//! takes (file selection, then form submission) and reports which files
//! the classifier would accept.

use crate::config::Config;
use crate::domain::format::format_file_size;
use crate::domain::upload::{SelectedFile, UploadAttempt};
use crate::error::Result;
use crate::i18n::I18n;
use crate::ui::page::{Effect, Page, PageLayout, Trigger};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

pub const USAGE: &str = "\
Usage: green_classify [OPTIONS] [FILE...]

Checks image files against the classifier's upload rules.

Options:
  --lang <LOCALE>    Language for messages (e.g. en-US, fr)
  --config <PATH>    Settings file (defaults to the user config directory)
  -h, --help         Print this help

Exit status: 0 when every file is accepted, 1 when any is rejected,
2 on invalid arguments or unreadable files.";

pub const EXIT_ACCEPTED: u8 = 0;
pub const EXIT_REJECTED: u8 = 1;
pub const EXIT_ERROR: u8 = 2;

/// Parsed command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    pub help: bool,
    pub lang: Option<String>,
    pub config_path: Option<PathBuf>,
    pub files: Vec<PathBuf>,
}

impl Flags {
    pub fn from_env() -> Result<Self> {
        Self::parse(pico_args::Arguments::from_env())
    }

    pub fn from_vec(args: Vec<OsString>) -> Result<Self> {
        Self::parse(pico_args::Arguments::from_vec(args))
    }

    fn parse(mut args: pico_args::Arguments) -> Result<Self> {
        let help = args.contains(["-h", "--help"]);
        let lang = args.opt_value_from_str("--lang")?;
        let config_path = args.opt_value_from_os_str("--config", |s| {
            Ok::<_, std::convert::Infallible>(PathBuf::from(s))
        })?;
        let files = args.finish().into_iter().map(PathBuf::from).collect();

        Ok(Self {
            help,
            lang,
            config_path,
            files,
        })
    }
}

/// Describes a file on disk the way a browser file input would.
///
/// The MIME type comes from the extension; unknown extensions give an
/// empty type.
pub fn selected_file_from_path(path: &Path) -> Result<SelectedFile> {
    let metadata = fs::metadata(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mime_type = image_rs::ImageFormat::from_path(path)
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_default();

    Ok(SelectedFile::new(name, mime_type, metadata.len()))
}

/// Outcome of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    /// Blocked, with the alert shown to the user.
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub name: String,
    pub size_bytes: Option<u64>,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub entries: Vec<ReportEntry>,
}

impl Report {
    #[must_use]
    pub fn accepted(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.outcome == Outcome::Accepted)
            .count()
    }

    #[must_use]
    pub fn all_accepted(&self) -> bool {
        self.accepted() == self.entries.len()
    }

    /// Renders one line per entry followed by a summary line.
    pub fn render(&self, i18n: &I18n) -> Vec<String> {
        let mut lines: Vec<String> = self
            .entries
            .iter()
            .map(|entry| {
                let size = entry.size_bytes.map(format_file_size).unwrap_or_default();
                match &entry.outcome {
                    Outcome::Accepted => i18n.tr_with_args(
                        "cli-report-accepted",
                        &[("name", entry.name.as_str()), ("size", size.as_str())],
                    ),
                    Outcome::Rejected(reason) => i18n.tr_with_args(
                        "cli-report-rejected",
                        &[
                            ("name", entry.name.as_str()),
                            ("size", size.as_str()),
                            ("reason", reason.as_str()),
                        ],
                    ),
                }
            })
            .collect();

        let accepted = self.accepted().to_string();
        let total = self.entries.len().to_string();
        lines.push(i18n.tr_with_args(
            "cli-report-summary",
            &[("accepted", accepted.as_str()), ("total", total.as_str())],
        ));
        lines
    }
}

/// Submits one attempt through a freshly mounted classifier page.
pub fn submit(attempt: UploadAttempt, config: &Config, i18n: &I18n) -> ReportEntry {
    let (mut page, _) = Page::mount(PageLayout::classifier(), config, i18n);
    let size_bytes = attempt.size_bytes();
    let label = page.dispatch(Trigger::FileChanged(attempt.into_file()));
    let name = label
        .into_iter()
        .find_map(|effect| match effect {
            Effect::SetFileLabel(text) => Some(text),
            _ => None,
        })
        .unwrap_or_default();

    let outcome = page
        .dispatch(Trigger::Submit)
        .into_iter()
        .find_map(|effect| match effect {
            Effect::Submit(_) => Some(Outcome::Accepted),
            Effect::Alert(message) => Some(Outcome::Rejected(message)),
            _ => None,
        })
        .unwrap_or_else(|| Outcome::Rejected(String::new()));

    ReportEntry {
        name,
        size_bytes,
        outcome,
    }
}

/// Checks every file in `flags`; with no files, submits an empty form.
pub fn run(flags: &Flags, config: &Config, i18n: &I18n) -> Result<Report> {
    if flags.files.is_empty() {
        return Ok(Report {
            entries: vec![submit(UploadAttempt::empty(), config, i18n)],
        });
    }

    let mut entries = Vec::with_capacity(flags.files.len());
    for path in &flags.files {
        let file = selected_file_from_path(path)?;
        entries.push(submit(UploadAttempt::with_file(file), config, i18n));
    }
    Ok(Report { entries })
}

/// Maps the outcome of a run to the process exit status.
#[must_use]
pub fn exit_code(outcome: &Result<Report>) -> u8 {
    match outcome {
        Ok(report) if report.all_accepted() => EXIT_ACCEPTED,
        Ok(_) => EXIT_REJECTED,
        Err(_) => EXIT_ERROR,
    }
}

/// Loads settings from `path`, or from the user config directory.
pub fn load_config(path: Option<&Path>) -> Config {
    let loaded = match path {
        Some(path) => crate::config::load_from_path(path),
        None => crate::config::load(),
    };
    loaded.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "could not read settings, using defaults");
        Config::default()
    })
}
