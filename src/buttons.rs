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

use regex::{Captures, Regex};
use rust_i18n::t;

use crate::patch::{Patch, Patched, bullet};

/// An actions block sitting right before the closing tag that precedes
/// `<!-- Article Content -->`. The closing tag and the comment are captured so
/// they can be put back.
const MISPLACED_ACTIONS: &str =
    r"\s*<!-- Article Actions -->[\s\S]*?</div>\s*(</div>\s*<!-- Article Content -->)";

/// The featured image container up to its first closing tag.
const FEATURED_IMAGE: &str = r#"<div class="article-featured-image">[\s\S]*?</div>"#;

pub const ACTION_BAR_HTML: &str = r#"

        <!-- Article Actions -->
        <div class="article-action-bar">
            <button class="action-btn" onclick="saveArticle()">
                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <path d="M19 21l-7-5-7 5V5a2 2 0 0 1 2-2h10a2 2 0 0 1 2 2z"></path>
                </svg>
                Sauvegarder
            </button>
            <button class="action-btn" onclick="watchLater()">
                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <circle cx="12" cy="12" r="10"></circle>
                    <polyline points="12 6 12 12 16 14"></polyline>
                </svg>
                À regarder plus tard
            </button>
            <button class="action-btn" onclick="shareArticle()">
                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <circle cx="18" cy="5" r="3"></circle>
                    <circle cx="6" cy="12" r="3"></circle>
                    <circle cx="18" cy="19" r="3"></circle>
                    <line x1="8.59" y1="13.51" x2="15.42" y2="17.49"></line>
                    <line x1="15.41" y1="6.51" x2="8.59" y2="10.49"></line>
                </svg>
                Partager
            </button>
            <div class="like-dislike-group">
                <button class="action-btn like-btn" onclick="likeArticle()">
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <path d="M14 9V5a3 3 0 0 0-3-3l-4 9v11h11.28a2 2 0 0 0 2-1.7l1.38-9a2 2 0 0 0-2-2.3zM7 22H4a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2h3"></path>
                    </svg>
                    J'aime
                </button>
                <button class="action-btn dislike-btn" onclick="dislikeArticle()">
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <path d="M10 15v4a3 3 0 0 0 3 3l4-9V2H5.72a2 2 0 0 0-2 1.7l-1.38 9a2 2 0 0 0 2 2.3zm7-13h2.67A2.31 2.31 0 0 1 22 4v7a2.31 2.31 0 0 1-2.33 2H17"></path>
                    </svg>
                    J'aime pas
                </button>
            </div>
        </div>
"#;

/// Moves the action bar under the featured image.
///
/// Nothing checks whether a bar is already there, so running this on a page
/// that was already fixed adds a second bar.
#[derive(Clone, Debug)]
pub struct ButtonsPosition {
    misplaced: Regex,
    featured_image: Regex,
}

impl ButtonsPosition {
    /// # Errors
    ///
    /// If a pattern doesn't compile.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            misplaced: Regex::new(MISPLACED_ACTIONS)?,
            featured_image: Regex::new(FEATURED_IMAGE)?,
        })
    }
}

impl Patch for ButtonsPosition {
    fn name(&self) -> &'static str {
        "fix-buttons-position"
    }

    fn apply(&self, html: &str) -> Patched {
        let removed = self.misplaced.find_iter(html).count();
        let html = self.misplaced.replace_all(html, "${1}");
        log::debug!("removed {removed} misplaced action bar(s)");

        let inserted = self.featured_image.find_iter(&html).count();
        let html = self
            .featured_image
            .replace_all(&html, |captures: &Captures| {
                let mut container = captures
                    .get(0)
                    .map_or(String::new(), |found| found.as_str().to_string());
                container.push_str(ACTION_BAR_HTML);
                container
            });
        log::debug!("inserted {inserted} action bar(s)");

        Patched {
            html: html.into_owned(),
            changes: removed + inserted,
        }
    }

    fn status(&self) -> Vec<String> {
        vec![
            t!("Button position fixed!").to_string(),
            t!("The buttons are now AFTER the image").to_string(),
        ]
    }
}

/// Keeps the action bar above whatever overlaps it so the buttons get clicks.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClickableButtons;

impl Patch for ClickableButtons {
    fn name(&self) -> &'static str {
        "fix-clickable-buttons"
    }

    fn apply(&self, html: &str) -> Patched {
        Patched::unchanged(html)
            .replace(
                ".article-action-bar {",
                ".article-action-bar {\n            position: relative;\n            z-index: 10;",
            )
            .replace(
                ".action-btn {",
                ".action-btn {\n            pointer-events: auto;",
            )
    }

    fn status(&self) -> Vec<String> {
        vec![
            t!("CSS fix applied!").to_string(),
            bullet(&t!("z-index: 10 added to the action bar")),
            bullet(&t!("pointer-events: auto forced on the buttons")),
        ]
    }
}
