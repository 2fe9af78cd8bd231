use crate::error::Error;
use crate::result::Result;
use std::path::Path;

/// Archive entry name of `path` relative to `root`
pub fn entry_name(root: &Path, path: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| Error::InvalidEntryName(path.to_path_buf()))?;

    // Zip entries always use forward slashes, whatever the host separator.
    let components = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<&str>>>()
        .ok_or_else(|| Error::InvalidEntryName(path.to_path_buf()))?;

    Ok(components.join("/"))
}

/// Trim a line typed at a prompt, dropping one pair of surrounding quotes
pub fn clean_input(line: &str) -> &str {
    let line = line.trim();
    for quote in ['"', '\''] {
        if line.len() >= 2
            && let Some(inner) = line.strip_prefix(quote).and_then(|l| l.strip_suffix(quote))
        {
            return inner.trim();
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_entry_name_uses_forward_slashes() {
        let root = PathBuf::from("lesson1");
        let file = root.join("content").join("images").join("a.png");
        assert_eq!(entry_name(&root, &file).unwrap(), "content/images/a.png");
    }

    #[test]
    fn test_entry_name_outside_root() {
        let err = entry_name(Path::new("lesson1"), Path::new("other/a.png")).unwrap_err();
        assert!(matches!(err, Error::InvalidEntryName(_)));
    }

    #[test]
    fn test_clean_input() {
        assert_eq!(clean_input("  /tmp/lesson1 \n"), "/tmp/lesson1");
        assert_eq!(clean_input("\"C:\\My Lessons\\one\""), "C:\\My Lessons\\one");
        assert_eq!(clean_input("'/tmp/a b'"), "/tmp/a b");
        assert_eq!(clean_input("\""), "\"");
        assert_eq!(clean_input("\"unbalanced"), "\"unbalanced");
    }
}
