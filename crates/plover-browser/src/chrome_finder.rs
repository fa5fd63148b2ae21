use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Resolves which Chrome/Chromium binary to launch
pub struct ChromeFinder {
    custom_path: Option<PathBuf>,
}

impl ChromeFinder {
    pub fn new(custom_path: Option<PathBuf>) -> Self {
        Self { custom_path }
    }

    /// Resolve the binary to launch.
    ///
    /// An explicit path must be valid or this fails. Otherwise the first
    /// usable install location wins, and `None` leaves detection to chromiumoxide.
    pub fn find(&self) -> Result<Option<PathBuf>> {
        if let Some(ref path) = self.custom_path {
            return validate_chrome_path(path).map(Some);
        }

        let found = Self::default_paths()
            .into_iter()
            .find(|path| validate_chrome_path(path).is_ok());

        match &found {
            Some(path) => tracing::debug!("Using Chrome at {}", path.display()),
            None => tracing::debug!("No Chrome in default locations, deferring to auto-detection"),
        }

        Ok(found)
    }

    fn default_paths() -> Vec<PathBuf> {
        #[cfg(target_os = "macos")]
        return vec![
            PathBuf::from("/Applications/Google Chrome.app/Contents/MacOS/Google Chrome"),
            PathBuf::from("/Applications/Chromium.app/Contents/MacOS/Chromium"),
        ];

        #[cfg(target_os = "linux")]
        return vec![
            PathBuf::from("/usr/bin/google-chrome"),
            PathBuf::from("/usr/bin/google-chrome-stable"),
            PathBuf::from("/usr/bin/chromium"),
            PathBuf::from("/usr/bin/chromium-browser"),
            PathBuf::from("/snap/bin/chromium"),
        ];

        #[cfg(target_os = "windows")]
        return vec![
            PathBuf::from(r"C:\Program Files\Google\Chrome\Application\chrome.exe"),
            PathBuf::from(r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe"),
        ];

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        return vec![];
    }
}

fn validate_chrome_path(path: &Path) -> Result<PathBuf> {
    if !path.is_file() {
        return Err(Error::Browser(format!(
            "Chrome not found at: {}",
            path.display()
        )));
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(path)?.permissions().mode();
        if mode & 0o111 == 0 {
            return Err(Error::Browser(format!(
                "Chrome binary not executable: {}",
                path.display()
            )));
        }
    }

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_path_is_used_when_executable() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let path = temp.path();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
        }

        let found = ChromeFinder::new(Some(path.to_path_buf())).find().unwrap();

        assert_eq!(found.as_deref(), Some(path));
    }

    #[test]
    fn test_missing_custom_path_fails() {
        let result = ChromeFinder::new(Some(PathBuf::from("/nonexistent/chrome"))).find();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Chrome not found"));
    }

    #[test]
    fn test_directory_is_not_a_chrome_binary() {
        let temp_dir = tempfile::tempdir().unwrap();

        let result = ChromeFinder::new(Some(temp_dir.path().to_path_buf())).find();

        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_executable_custom_path_fails() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::NamedTempFile::new().unwrap();
        std::fs::set_permissions(temp.path(), std::fs::Permissions::from_mode(0o644)).unwrap();

        let err = ChromeFinder::new(Some(temp.path().to_path_buf()))
            .find()
            .unwrap_err();

        assert!(err.to_string().contains("not executable"));
    }

    #[test]
    fn test_without_custom_path_never_errors() {
        assert!(ChromeFinder::new(None).find().is_ok());
    }
}
