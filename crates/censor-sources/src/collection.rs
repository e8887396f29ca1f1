use censor_core::{Error, Result};
use std::collections::HashSet;
use std::path::PathBuf;

/// Expand a glob pattern into the files it matches, sorted
pub fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in glob::glob(pattern).map_err(|e| Error::Other(e.into()))? {
        let path = entry.map_err(|e| Error::Other(e.into()))?;
        if path.is_file() {
            files.push(path);
        }
    }

    // Sort for determinism
    files.sort();

    Ok(files)
}

/// Expand patterns in order, dropping files already matched by an earlier one
pub fn expand_globs<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for pattern in patterns {
        for path in expand_glob(pattern.as_ref())? {
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &std::path::Path, name: &str) {
        std::fs::write(dir.join(name), "text").unwrap();
    }

    #[test]
    fn test_expand_glob_sorted_files_only() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b.txt");
        touch(dir.path(), "a.txt");
        touch(dir.path(), "c.md");
        std::fs::create_dir(dir.path().join("d.txt")).unwrap();

        let pattern = format!("{}/*.txt", dir.path().display());
        let files = expand_glob(&pattern).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_expand_globs_dedupes() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.txt");
        touch(dir.path(), "b.md");

        let patterns = vec![
            format!("{}/*.txt", dir.path().display()),
            format!("{}/*", dir.path().display()),
        ];
        let files = expand_globs(&patterns).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.txt"));
        assert!(files[1].ends_with("b.md"));
    }

    #[test]
    fn test_no_matches() {
        let dir = tempfile::tempdir().unwrap();
        let pattern = format!("{}/*.none", dir.path().display());
        assert!(expand_glob(&pattern).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(expand_glob("[").is_err());
    }
}
