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

use std::path::Path;

use crate::article::{Article, ArticleError};

/// A text-to-text transformation of an article page.
pub trait Patch {
    fn name(&self) -> &'static str;

    /// Applies every substitution of the patch. A target that isn't present
    /// is skipped without complaint.
    fn apply(&self, html: &str) -> Patched;

    /// The lines printed once the patched file has been written, each
    /// already indented the way it is shown.
    fn status(&self) -> Vec<String>;
}

/// A status line listed under the headline.
#[must_use]
pub fn bullet(line: &str) -> String {
    format!("  - {line}")
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Patched {
    pub html: String,
    /// How many substitutions were made.
    pub changes: usize,
}

impl Patched {
    #[must_use]
    pub fn unchanged(html: &str) -> Self {
        Self {
            html: html.to_string(),
            changes: 0,
        }
    }

    #[must_use]
    pub fn is_no_op(&self) -> bool {
        self.changes == 0
    }

    /// Replaces every occurrence of `from` with `to`, counting them.
    #[must_use]
    pub fn replace(mut self, from: &str, to: &str) -> Self {
        let count = self.html.matches(from).count();
        if count > 0 {
            self.html = self.html.replace(from, to);
            self.changes += count;
        }

        self
    }
}

/// Reads the article at `path`, applies `patch` and writes the result back in
/// place. The file is rewritten even when nothing matched.
///
/// # Errors
///
/// If the article can't be read or written.
pub fn run(patch: &dyn Patch, path: &Path) -> Result<Patched, ArticleError> {
    let mut article = Article::read(path)?;
    let patched = patch.apply(&article.html);

    if patched.is_no_op() {
        log::warn!(
            "{}: nothing matched in {}, the text is unchanged",
            patch.name(),
            path.display()
        );
    } else {
        log::info!(
            "{}: {} substitution(s) in {}",
            patch.name(),
            patched.changes,
            path.display()
        );
    }

    article.html.clone_from(&patched.html);
    article.write()?;

    Ok(patched)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    struct Shout;

    impl Patch for Shout {
        fn name(&self) -> &'static str {
            "shout"
        }

        fn apply(&self, html: &str) -> Patched {
            Patched::unchanged(html).replace("hello", "HELLO")
        }

        fn status(&self) -> Vec<String> {
            vec!["shouted".to_string()]
        }
    }

    #[test]
    fn bullets() {
        assert_eq!(bullet("Typo fixed"), "  - Typo fixed");
    }

    #[test]
    fn replace_counts_every_occurrence() {
        let patched = Patched::unchanged("hello hello bye").replace("hello", "hi");
        assert_eq!(patched.html, "hi hi bye");
        assert_eq!(patched.changes, 2);

        let patched = patched.replace("absent", "present");
        assert_eq!(patched.html, "hi hi bye");
        assert_eq!(patched.changes, 2);
    }

    #[test]
    fn run_rewrites_the_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("article.html");
        fs::write(&path, "<h1>hello</h1>")?;

        let patched = run(&Shout, &path)?;

        assert_eq!(patched.changes, 1);
        assert_eq!(fs::read_to_string(&path)?, "<h1>HELLO</h1>");
        Ok(())
    }

    #[test]
    fn run_without_a_match_keeps_the_bytes() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("article.html");
        fs::write(&path, "<h1>bonjour</h1>\r\n")?;

        let patched = run(&Shout, &path)?;

        assert!(patched.is_no_op());
        assert_eq!(fs::read_to_string(&path)?, "<h1>bonjour</h1>\r\n");
        Ok(())
    }

    #[test]
    fn run_on_a_missing_file_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("article.html");

        assert!(matches!(run(&Shout, &path), Err(ArticleError::Read { .. })));
        assert!(!path.exists());
    }
}
