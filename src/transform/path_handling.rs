//! Output path derivation functionality
//!
//! This module contains methods for deriving the two output paths from a
//! source path.

use std::path::PathBuf;

use crate::constants::{BASE_TOKEN, MODULE_TOKEN};
use crate::errors::{Result, invalid_filename_error};

use super::core::Transformer;

impl Transformer {
    /// Derives the ESM output path
    ///
    /// Every occurrence of the `Base` token in the source path is replaced
    /// with `Module`. The replacement covers the whole path, so a matching
    /// directory component is rewritten along with the filename.
    pub fn esm_target(&self) -> Result<PathBuf> {
        Ok(PathBuf::from(
            self.source_string()?.replace(BASE_TOKEN, MODULE_TOKEN),
        ))
    }

    /// Derives the CommonJS output path
    ///
    /// Every occurrence of the `Base` token in the source path is removed.
    pub fn commonjs_target(&self) -> Result<PathBuf> {
        Ok(PathBuf::from(self.source_string()?.replace(BASE_TOKEN, "")))
    }

    fn source_string(&self) -> Result<&str> {
        self.source()
            .to_str()
            .ok_or_else(|| invalid_filename_error(self.source().to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn transformer(path: &str) -> Transformer {
        Transformer::from_content(Path::new(path), String::new())
    }

    #[test]
    fn test_esm_target() {
        let t = transformer("src/scripts/AppBase.js");
        assert_eq!(
            t.esm_target().unwrap(),
            PathBuf::from("src/scripts/AppModule.js")
        );
    }

    #[test]
    fn test_commonjs_target() {
        let t = transformer("src/scripts/AppBase.js");
        assert_eq!(
            t.commonjs_target().unwrap(),
            PathBuf::from("src/scripts/App.js")
        );
    }

    #[test]
    fn test_targets_rewrite_directory_components() {
        // The token replacement covers the whole path string.
        let t = transformer("BaseFolder/AppBase.js");
        assert_eq!(
            t.esm_target().unwrap(),
            PathBuf::from("ModuleFolder/AppModule.js")
        );
        assert_eq!(t.commonjs_target().unwrap(), PathBuf::from("Folder/App.js"));
    }

    #[test]
    fn test_targets_without_token() {
        let t = transformer("src/helper.js");
        assert_eq!(t.esm_target().unwrap(), PathBuf::from("src/helper.js"));
        assert_eq!(t.commonjs_target().unwrap(), PathBuf::from("src/helper.js"));
    }
}
