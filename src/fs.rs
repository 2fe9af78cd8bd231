use crate::result::Result;
use std::fs::{self, File};
use std::io::{self, Read, Seek, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

/// Writable, seekable destination for the archive
pub trait Sink: Write + Seek {}

impl<T: Write + Seek> Sink for T {}

/// Filesystem access used by the packager
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// Every file below `root`, at any depth. Directories are not listed.
    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>>;

    fn open(&self, path: &Path) -> io::Result<Box<dyn Read>>;

    fn modified(&self, path: &Path) -> io::Result<SystemTime>;

    fn create(&self, path: &Path) -> io::Result<Box<dyn Sink>>;

    fn remove_file(&self, path: &Path) -> io::Result<()>;
}

/// The local disk
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }

    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        // Symlinked directories are not descended into; symlinked files are
        // read through.
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry?;
            let file_type = entry.file_type();
            if file_type.is_file() || (file_type.is_symlink() && entry.path().is_file()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn Read>> {
        Ok(Box::new(File::open(path)?))
    }

    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        fs::metadata(path)?.modified()
    }

    fn create(&self, path: &Path) -> io::Result<Box<dyn Sink>> {
        Ok(Box::new(File::create(path)?))
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_files_is_recursive_and_skips_directories() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("h5p.json"), "{}").unwrap();
        fs::create_dir_all(root.path().join("content/images")).unwrap();
        fs::create_dir_all(root.path().join("empty")).unwrap();
        fs::write(root.path().join("content/content.json"), "{}").unwrap();
        fs::write(root.path().join("content/images/a.png"), [0u8, 1, 2]).unwrap();

        let files = LocalFs.list_files(root.path()).unwrap();
        let relative: Vec<PathBuf> = files
            .iter()
            .map(|f| f.strip_prefix(root.path()).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            relative,
            vec![
                PathBuf::from("content/content.json"),
                PathBuf::from("content/images/a.png"),
                PathBuf::from("h5p.json"),
            ]
        );
    }

    #[test]
    fn test_list_files_missing_root_fails() {
        let root = tempfile::tempdir().unwrap();
        assert!(LocalFs.list_files(&root.path().join("nope")).is_err());
    }
}
