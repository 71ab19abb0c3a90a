//! Static asset copying

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::{io_error, walk_error, Result};

/// Recursively copy files and directories from `src` into `dest`.
///
/// Symbolic links are not followed: a link to a file is copied as a regular
/// file, a link to a directory is skipped. Returns the number of files
/// copied.
pub fn copy_static(src: &Path, dest: &Path) -> Result<usize> {
    let mut copied = 0;

    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry.map_err(walk_error(src))?;
        let path = entry.path();
        let Ok(relative) = path.strip_prefix(src) else {
            continue;
        };
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(io_error(&target))?;
        } else if path.is_file() {
            log::info!("Copying {} to {}", path.display(), target.display());
            fs::copy(path, &target).map_err(io_error(path))?;
            copied += 1;
        } else {
            log::debug!("Skipping {}", path.display());
        }
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_static() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("static");
        let dest = temp_dir.path().join("public");

        fs::create_dir_all(src.join("images/icons")).unwrap();
        fs::create_dir_all(&dest).unwrap();
        fs::write(src.join("index.css"), "body { margin: 0 }").unwrap();
        fs::write(src.join("images/rivendell.png"), [0x89, 0x50, 0x4e, 0x47]).unwrap();
        fs::write(src.join("images/icons/star.svg"), "<svg/>").unwrap();

        let copied = copy_static(&src, &dest).unwrap();

        assert_eq!(copied, 3);
        assert_eq!(
            fs::read_to_string(dest.join("index.css")).unwrap(),
            "body { margin: 0 }"
        );
        assert_eq!(
            fs::read(dest.join("images/rivendell.png")).unwrap(),
            vec![0x89, 0x50, 0x4e, 0x47]
        );
        assert!(dest.join("images/icons/star.svg").is_file());
    }

    #[test]
    fn test_copy_static_empty_dir() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("static");
        fs::create_dir_all(src.join("empty")).unwrap();

        let copied = copy_static(&src, temp_dir.path()).unwrap();

        assert_eq!(copied, 0);
        assert!(temp_dir.path().join("empty").is_dir());
    }

    #[test]
    fn test_copy_static_missing_source() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");
        let err = copy_static(&missing, temp_dir.path()).unwrap_err();
        assert!(matches!(err, crate::GenerateError::Io { ref path, .. } if path == &missing));
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_static_skips_directory_cycles() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("static");
        let dest = temp_dir.path().join("public");

        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("a.css"), "a {}").unwrap();
        std::os::unix::fs::symlink(&src, src.join("loop")).unwrap();

        let copied = copy_static(&src, &dest).unwrap();

        assert_eq!(copied, 1);
        assert_eq!(fs::read_to_string(dest.join("a.css")).unwrap(), "a {}");
        assert!(!dest.join("loop").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_static_copies_file_links() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("static");
        let dest = temp_dir.path().join("public");

        fs::create_dir_all(&src).unwrap();
        fs::write(temp_dir.path().join("shared.css"), "shared {}").unwrap();
        std::os::unix::fs::symlink(temp_dir.path().join("shared.css"), src.join("site.css")).unwrap();

        let copied = copy_static(&src, &dest).unwrap();

        assert_eq!(copied, 1);
        assert_eq!(fs::read_to_string(dest.join("site.css")).unwrap(), "shared {}");
    }
}
