// This file is part of article-patch.
//
// article-patch is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// article-patch is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// The raw text of an article page and where it came from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Article {
    pub path: PathBuf,
    pub html: String,
}

impl Article {
    /// # Errors
    ///
    /// If the file doesn't exist or isn't valid UTF-8.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ArticleError> {
        let path = path.as_ref().to_path_buf();
        let html = fs::read_to_string(&path).map_err(|source| ArticleError::Read {
            path: path.clone(),
            source,
        })?;

        log::debug!("read {} bytes from {}", html.len(), path.display());
        Ok(Self { path, html })
    }

    /// Overwrites the file the article was read from. There is no backup.
    ///
    /// # Errors
    ///
    /// If the file can't be written.
    pub fn write(&self) -> Result<(), ArticleError> {
        fs::write(&self.path, &self.html).map_err(|source| ArticleError::Write {
            path: self.path.clone(),
            source,
        })?;

        log::debug!("wrote {} bytes to {}", self.html.len(), self.path.display());
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ArticleError {
    #[error("article: failed to read {}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("article: failed to write {}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_then_write_in_place() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("article.html");
        fs::write(&path, "<p>before</p>")?;

        let mut article = Article::read(&path)?;
        assert_eq!(article.html, "<p>before</p>");

        article.html = "<p>after</p>".to_string();
        article.write()?;

        assert_eq!(fs::read_to_string(&path)?, "<p>after</p>");
        Ok(())
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("article.html");

        let error = Article::read(&path).unwrap_err();
        assert!(matches!(error, ArticleError::Read { .. }));
        assert_eq!(
            error.to_string(),
            format!("article: failed to read {}", path.display())
        );
        assert!(std::error::Error::source(&error).is_some());
        assert!(!path.exists());
    }

    #[test]
    fn write_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let article = Article {
            path: dir.path().join("missing").join("article.html"),
            html: String::new(),
        };

        assert!(matches!(article.write(), Err(ArticleError::Write { .. })));
    }
}
