use std::path::{Path, PathBuf};

use anyhow::Result;

pub trait FsExt {
    /// Resolves a path given on the command line against the current working directory. Absolute paths are returned
    /// as they are.
    fn relative_to_cwd(&self) -> Result<PathBuf>
    where
        Self: AsRef<Path>,
    {
        let cwd_dir = std::env::current_dir()?;

        Ok(cwd_dir.join(self))
    }
}

impl FsExt for String {}

impl FsExt for &str {}

impl FsExt for PathBuf {}
