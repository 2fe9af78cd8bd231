use crate::console::Console;
use crate::context::Context;
use crate::error::Error;
use crate::fs::FileSystem;
use crate::package::{self, PackageEvent, PackageOptions, PackageReport};
use crate::result::Result;
use crate::utils;
use std::path::{Path, PathBuf};

const BANNER: &str = "H5P Packager - Create a Valid H5P Package";

const MENU: &str = "1. Compress a folder into an .h5p package\n2. Help\n3. Exit";

const HELP_TITLE: &str = "How to use";

const HELP: &str = "\
Choose 1 and enter the path of a folder holding H5P content
(the folder with h5p.json at its top level).

Every file in the folder, including subfolders, is compressed into
<folder>/<folder>.h5p. A package left over from an earlier run is
replaced, never added to itself.

The finished .h5p file can be uploaded to any H5P-enabled platform.";

const PATH_PROMPT: &str = "Enter the folder path containing H5P content";

const PATH_RETRY: &str = "Invalid folder. Please enter a valid path";

const FAREWELL: &str = "Goodbye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Menu,
    AwaitPath,
    Help,
    Exit,
}

impl State {
    fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(State::AwaitPath),
            "2" => Some(State::Help),
            "3" => Some(State::Exit),
            _ => None,
        }
    }
}

/// Operator dialogue around the packager
pub struct Shell<'a, C: Console> {
    console: &'a mut C,
    fs: &'a dyn FileSystem,
    ctx: &'a Context,
}

impl<'a, C: Console> Shell<'a, C> {
    pub fn new(console: &'a mut C, fs: &'a dyn FileSystem, ctx: &'a Context) -> Self {
        Self { console, fs, ctx }
    }

    /// Menu loop; returns once the operator picks exit.
    pub fn run_menu(&mut self) -> Result<()> {
        self.console.intro(BANNER)?;

        let mut state = State::Menu;
        loop {
            state = match state {
                State::Menu => self.choose()?,
                State::AwaitPath => {
                    let source = self.prompt_source()?;
                    match self.package(&source) {
                        Ok(_) => {}
                        Err(err @ Error::Console(_)) => return Err(err),
                        Err(err) => self.console.error(&err.to_string())?,
                    }
                    State::Menu
                }
                State::Help => {
                    self.console.note(HELP_TITLE, HELP)?;
                    State::Menu
                }
                State::Exit => {
                    self.console.outro(FAREWELL)?;
                    return Ok(());
                }
            };
        }
    }

    /// Package a single folder and return. Without `path` the operator is
    /// asked for one until an existing folder is given.
    pub fn run_once(&mut self, path: Option<PathBuf>) -> Result<PackageReport> {
        self.console.intro(BANNER)?;

        let source = match path {
            Some(path) => path,
            None => self.prompt_source()?,
        };

        let report = self.package(&source)?;
        self.console.outro(FAREWELL)?;
        Ok(report)
    }

    fn choose(&mut self) -> Result<State> {
        self.console.info(MENU)?;
        let line = self.console.read_line("Select an option")?;
        let choice = utils::clean_input(&line);

        match State::from_choice(choice) {
            Some(state) => Ok(state),
            None => {
                self.console
                    .warning(&format!("Invalid option '{choice}'. Please choose 1, 2 or 3."))?;
                Ok(State::Menu)
            }
        }
    }

    fn prompt_source(&mut self) -> Result<PathBuf> {
        let mut prompt = PATH_PROMPT;
        loop {
            let line = self.console.read_line(prompt)?;
            let path = PathBuf::from(utils::clean_input(&line));
            if !path.as_os_str().is_empty() && self.fs.is_dir(&path) {
                return Ok(path);
            }
            prompt = PATH_RETRY;
        }
    }

    fn package(&mut self, source: &Path) -> Result<PackageReport> {
        let options = PackageOptions {
            level: self.ctx.level,
        };
        let verbose = self.ctx.verbose;
        let console = &mut *self.console;

        // console failures inside the callback are kept until packaging ends
        let mut reported: Result<()> = Ok(());
        let outcome = package::create_package(self.fs, source, &options, &mut |event| {
            if reported.is_ok() {
                reported = report_event(&mut *console, verbose, event);
            }
        });

        let report = outcome?;
        reported?;

        if verbose {
            let replaced = if report.replaced_existing {
                ", previous package replaced"
            } else {
                ""
            };
            self.console
                .remark(&format!("{} entries written{replaced}", report.entries.len()))?;
        }
        self.console
            .success(&format!("Successfully created: {}", report.archive.display()))?;
        Ok(report)
    }
}

fn report_event<C: Console>(console: &mut C, verbose: bool, event: PackageEvent<'_>) -> Result<()> {
    match event {
        PackageEvent::Replacing(archive) => console.warning(&format!(
            "File '{}' already exists. Overwriting...",
            archive.display()
        )),
        PackageEvent::Started {
            source,
            archive,
            files,
        } => {
            console.info(&format!(
                "Compressing '{}' into '{}'...",
                source.display(),
                archive.display()
            ))?;
            if verbose {
                console.remark(&format!("Found {files} file(s)"))?;
            }
            Ok(())
        }
        PackageEvent::Added(name) => console.remark(&format!("Added: {name}")),
        PackageEvent::Skipped(path) if verbose => {
            console.remark(&format!("Skipped: {}", path.display()))
        }
        PackageEvent::Skipped(_) => Ok(()),
    }
}
