use crate::error::Error;
use crate::fs::FileSystem;
use crate::result::Result;
use crate::utils;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::SystemTime;
use time::OffsetDateTime;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// File extension of an H5P package
pub const PACKAGE_EXTENSION: &str = "h5p";

/// Compression applied to archive entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionLevel {
    /// Deflate at the library's default level
    #[default]
    Optimal,
    Fastest,
    Smallest,
    /// No compression
    Store,
}

impl CompressionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompressionLevel::Optimal => "optimal",
            CompressionLevel::Fastest => "fastest",
            CompressionLevel::Smallest => "smallest",
            CompressionLevel::Store => "store",
        }
    }

    fn file_options(&self) -> SimpleFileOptions {
        let options = SimpleFileOptions::default();
        match self {
            CompressionLevel::Optimal => options.compression_method(CompressionMethod::Deflated),
            CompressionLevel::Fastest => options
                .compression_method(CompressionMethod::Deflated)
                .compression_level(Some(1)),
            CompressionLevel::Smallest => options
                .compression_method(CompressionMethod::Deflated)
                .compression_level(Some(9)),
            CompressionLevel::Store => options.compression_method(CompressionMethod::Stored),
        }
    }
}

impl FromStr for CompressionLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "optimal" => Ok(CompressionLevel::Optimal),
            "fastest" => Ok(CompressionLevel::Fastest),
            "smallest" => Ok(CompressionLevel::Smallest),
            "store" => Ok(CompressionLevel::Store),
            other => Err(Error::custom(format!("Unknown compression level '{other}'"))),
        }
    }
}

impl std::fmt::Display for CompressionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct PackageOptions {
    pub level: CompressionLevel,
}

/// Progress notifications emitted while a package is written
#[derive(Debug, PartialEq, Eq)]
pub enum PackageEvent<'a> {
    /// A previous package at this path is about to be deleted
    Replacing(&'a Path),
    Started {
        source: &'a Path,
        archive: &'a Path,
        files: usize,
    },
    Added(&'a str),
    /// File left out because it is the package being written
    Skipped(&'a Path),
}

/// Outcome of a successful packaging run
#[derive(Debug, Clone)]
pub struct PackageReport {
    pub archive: PathBuf,
    /// Entry names in the order they were written
    pub entries: Vec<String>,
    pub replaced_existing: bool,
}

/// Path of the package built from `source`: `<source>/<name>.h5p`
pub fn package_path(fs: &dyn FileSystem, source: &Path) -> Result<PathBuf> {
    let name = match source.file_name() {
        Some(name) => name.to_os_string(),
        // `.`, `..` and friends carry no name of their own
        None => fs
            .canonicalize(source)?
            .file_name()
            .map(|name| name.to_os_string())
            .ok_or_else(|| Error::InvalidSource(source.to_path_buf()))?,
    };

    let mut filename = name;
    filename.push(".");
    filename.push(PACKAGE_EXTENSION);
    Ok(source.join(filename))
}

/// Compress every file below `source` into `<source>/<name>.h5p`.
///
/// Any existing package at that path is replaced. The file list is taken
/// before the package is created, so the package never contains itself.
/// On failure the partially written package is removed.
pub fn create_package(
    fs: &dyn FileSystem,
    source: &Path,
    options: &PackageOptions,
    on_event: &mut dyn FnMut(PackageEvent<'_>),
) -> Result<PackageReport> {
    if !fs.is_dir(source) {
        return Err(Error::InvalidSource(source.to_path_buf()));
    }

    let archive = package_path(fs, source)?;

    let replaced_existing = fs.exists(&archive);
    if replaced_existing {
        on_event(PackageEvent::Replacing(&archive));
        fs.remove_file(&archive)?;
    }

    let files = fs.list_files(source)?;

    on_event(PackageEvent::Started {
        source,
        archive: &archive,
        files: files.len(),
    });

    match write_archive(fs, source, &archive, &files, options, on_event) {
        Ok(entries) => Ok(PackageReport {
            archive,
            entries,
            replaced_existing,
        }),
        Err(err) => {
            if fs.exists(&archive) {
                // the original fault is the one worth reporting
                let _ = fs.remove_file(&archive);
            }
            Err(err)
        }
    }
}

fn write_archive(
    fs: &dyn FileSystem,
    source: &Path,
    archive: &Path,
    files: &[PathBuf],
    options: &PackageOptions,
    on_event: &mut dyn FnMut(PackageEvent<'_>),
) -> Result<Vec<String>> {
    let mut zip = ZipWriter::new(fs.create(archive)?);
    let file_options = options.level.file_options();
    let mut entries = Vec::with_capacity(files.len());

    for path in files {
        if path == archive {
            on_event(PackageEvent::Skipped(path));
            continue;
        }

        let name = utils::entry_name(source, path)?;
        let modified = fs
            .modified(path)
            .map(zip_timestamp)
            .unwrap_or_default();

        zip.start_file(name.as_str(), file_options.last_modified_time(modified))?;
        let mut reader = fs.open(path)?;
        io::copy(&mut reader, &mut zip)?;

        on_event(PackageEvent::Added(&name));
        entries.push(name);
    }

    zip.finish()?.flush()?;
    Ok(entries)
}

/// Zip timestamps cannot express dates before 1980; those fall back to the
/// zip epoch.
fn zip_timestamp(modified: SystemTime) -> DateTime {
    let t = OffsetDateTime::from(modified);
    u16::try_from(t.year())
        .ok()
        .and_then(|year| {
            DateTime::from_date_and_time(
                year,
                t.month().into(),
                t.day(),
                t.hour(),
                t.minute(),
                t.second(),
            )
            .ok()
        })
        .unwrap_or_default()
}
