use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use super::ensure_dir;

const TMP_SUFFIX: &str = "tmp";

/// Staging path next to `path`: `data.json` stages as `data.json.tmp`.
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Writes `data` to `path` atomically by staging to a temporary file and
/// renaming it into place.
pub fn write_atomic(path: &Path, data: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    drop(file);
    fs::rename(&tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn staging_path_keeps_original_extension() {
        assert_eq!(
            tmp_path(Path::new("/data/budgetTrackerData.json")),
            PathBuf::from("/data/budgetTrackerData.json.tmp")
        );
        assert_eq!(tmp_path(Path::new("/data/plain")), PathBuf::from("/data/plain.tmp"));
    }

    #[test]
    fn write_replaces_contents_and_leaves_no_staging_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("value.json");

        write_atomic(&path, "first").unwrap();
        write_atomic(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        assert!(!tmp_path(&path).exists());
    }
}
