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

use std::fmt;

use regex::{Captures, Regex};
use rust_i18n::t;

use crate::patch::{Patch, Patched, bullet};

/// From the action bar comment up to the whitespace before the tags comment.
/// The whitespace and the tags comment are captured so they survive.
const ACTION_BAR_REGION: &str = r"/\* Article Action Bar \*/[\s\S]*?(\s*/\* Tags \*/)";

/// Indentation put back in front of the captured tail.
const REGION_TAIL: &str = "\n        ";

const IMPROVED_CSS: &str = r"
        /* Article Action Bar */
        .article-action-bar {
            display: flex;
            flex-wrap: wrap;
            gap: 1rem;
            margin: 2.5rem 0;
            padding: 0;
            background: transparent;
            border-radius: 0;
            border: none;
        }

        .action-btn {
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
            padding: 0.75rem 1.5rem;
            background: linear-gradient(135deg, rgba(102, 126, 234, 0.1) 0%, rgba(118, 75, 162, 0.1) 100%);
            border: 2px solid rgba(102, 126, 234, 0.2);
            border-radius: 12px;
            font-size: 0.875rem;
            font-weight: 600;
            color: #667eea;
            cursor: pointer;
            transition: all 0.3s ease;
            box-shadow: 0 2px 8px rgba(102, 126, 234, 0.1);
        }

        .action-btn:hover {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            border-color: #667eea;
            color: white;
            transform: translateY(-2px);
            box-shadow: 0 8px 20px rgba(102, 126, 234, 0.3);
        }

        .action-btn svg {
            width: 20px;
            height: 20px;
            transition: transform 0.3s ease;
        }

        .action-btn:hover svg {
            transform: scale(1.1);
        }

        .like-dislike-group {
            display: flex;
            gap: 1rem;
            margin-left: auto;
        }

        .like-btn {
            background: linear-gradient(135deg, rgba(16, 185, 129, 0.1) 0%, rgba(5, 150, 105, 0.1) 100%);
            border-color: rgba(16, 185, 129, 0.2);
            color: #10b981;
        }

        .like-btn:hover {
            background: linear-gradient(135deg, #10b981 0%, #059669 100%);
            border-color: #10b981;
            color: white;
        }

        .dislike-btn {
            background: linear-gradient(135deg, rgba(239, 68, 68, 0.1) 0%, rgba(220, 38, 38, 0.1) 100%);
            border-color: rgba(239, 68, 68, 0.2);
            color: #ef4444;
        }

        .dislike-btn:hover {
            background: linear-gradient(135deg, #ef4444 0%, #dc2626 100%);
            border-color: #ef4444;
            color: white;
        }

        @media (max-width: 768px) {
            .article-action-bar {
                flex-direction: column;
            }
            
            .like-dislike-group {
                margin-left: 0;
                width: 100%;
            }
            
            .action-btn {
                flex: 1;
                justify-content: center;
            }
        }
";

const RESIZED_CSS: &str = r"
        /* Article Action Bar */
        .article-action-bar {
            display: flex;
            flex-wrap: wrap;
            gap: 0.75rem;
            margin: 2rem 0;
            padding: 0;
            background: transparent;
            border-radius: 0;
            border: none;
        }

        .action-btn {
            display: inline-flex;
            align-items: center;
            gap: 0.4rem;
            padding: 0.5rem 1rem;
            background: linear-gradient(135deg, rgba(102, 126, 234, 0.1) 0%, rgba(118, 75, 162, 0.1) 100%);
            border: 1px solid rgba(102, 126, 234, 0.2);
            border-radius: 50px;
            font-size: 0.75rem;
            font-weight: 600;
            color: #667eea;
            cursor: pointer;
            transition: all 0.3s ease;
            box-shadow: 0 2px 6px rgba(102, 126, 234, 0.1);
        }

        .action-btn:hover {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            border-color: #667eea;
            color: white;
            transform: translateY(-1px);
            box-shadow: 0 4px 12px rgba(102, 126, 234, 0.25);
        }

        .action-btn svg {
            width: 16px;
            height: 16px;
            transition: transform 0.3s ease;
        }

        .action-btn:hover svg {
            transform: scale(1.1);
        }

        .like-dislike-group {
            display: flex;
            gap: 0.75rem;
            margin-left: auto;
        }

        .like-btn {
            background: linear-gradient(135deg, rgba(16, 185, 129, 0.1) 0%, rgba(5, 150, 105, 0.1) 100%);
            border-color: rgba(16, 185, 129, 0.2);
            color: #10b981;
        }

        .like-btn:hover {
            background: linear-gradient(135deg, #10b981 0%, #059669 100%);
            border-color: #10b981;
            color: white;
        }

        .dislike-btn {
            background: linear-gradient(135deg, rgba(239, 68, 68, 0.1) 0%, rgba(220, 38, 38, 0.1) 100%);
            border-color: rgba(239, 68, 68, 0.2);
            color: #ef4444;
        }

        .dislike-btn:hover {
            background: linear-gradient(135deg, #ef4444 0%, #dc2626 100%);
            border-color: #ef4444;
            color: white;
        }

        @media (max-width: 768px) {
            .article-action-bar {
                flex-direction: column;
                gap: 0.5rem;
            }
            
            .like-dislike-group {
                margin-left: 0;
                width: 100%;
                justify-content: space-between;
            }
            
            .action-btn {
                flex: 1;
                justify-content: center;
            }
        }
";

/// Which set of action bar rules replaces the current one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ActionBarStyle {
    /// Large buttons with gradients and 20px icons.
    Improved,
    /// Pill shaped buttons with 16px icons.
    Resized,
}

impl ActionBarStyle {
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Improved => IMPROVED_CSS,
            Self::Resized => RESIZED_CSS,
        }
    }

    /// # Errors
    ///
    /// If the region pattern doesn't compile.
    pub fn patch(self) -> Result<ActionBarRestyle, regex::Error> {
        Ok(ActionBarRestyle {
            style: self,
            region: Regex::new(ACTION_BAR_REGION)?,
        })
    }
}

impl fmt::Display for ActionBarStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Improved => write!(f, "improved"),
            Self::Resized => write!(f, "resized"),
        }
    }
}

/// Swaps the CSS between the action bar and tags comments for a new block.
#[derive(Clone, Debug)]
pub struct ActionBarRestyle {
    style: ActionBarStyle,
    region: Regex,
}

impl Patch for ActionBarRestyle {
    fn name(&self) -> &'static str {
        match self.style {
            ActionBarStyle::Improved => "improve-buttons-style",
            ActionBarStyle::Resized => "resize-buttons",
        }
    }

    fn apply(&self, html: &str) -> Patched {
        let changes = self.region.find_iter(html).count();
        let css = self.style.css();

        let html = self.region.replace_all(html, |captures: &Captures| {
            let tail = captures.get(1).map_or("", |tail| tail.as_str());
            format!("{css}{REGION_TAIL}{tail}")
        });
        log::debug!("{} style: replaced {changes} region(s)", self.style);

        Patched {
            html: html.into_owned(),
            changes,
        }
    }

    fn status(&self) -> Vec<String> {
        match self.style {
            ActionBarStyle::Improved => vec![
                t!("Button style improved!").to_string(),
                bullet(&t!("Purple gradients matching the page")),
                bullet(&t!("Modern rounded borders")),
                bullet(&t!("Elegant hover effects")),
                bullet(&t!("Like (green) and Dislike (red) buttons")),
            ],
            ActionBarStyle::Resized => vec![
                t!("Button size reduced!").to_string(),
                bullet(&t!("Smaller padding (0.5rem 1rem)")),
                bullet(&t!("Smaller font size (0.75rem)")),
                bullet(&t!("Smaller icons (16px)")),
                bullet(&t!("Border radius set to 50px for a more compact pill style")),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLE_SHEET: &str = "<style>
        /* Header */
        .header { color: black; }

        /* Article Action Bar */
        .article-action-bar {
            display: flex;
        }

        .action-btn {
            padding: 1rem;
        }

        /* Tags */
        .tag { color: gray; }
    </style>";

    #[test]
    fn improved_replaces_the_region() -> anyhow::Result<()> {
        let patched = ActionBarStyle::Improved.patch()?.apply(STYLE_SHEET);

        let expected = format!(
            "<style>
        /* Header */
        .header {{ color: black; }}

        {IMPROVED_CSS}\n        \n\n        /* Tags */
        .tag {{ color: gray; }}
    </style>"
        );

        assert_eq!(patched.html, expected);
        assert_eq!(patched.changes, 1);
        assert!(!patched.html.contains("padding: 1rem;"));

        Ok(())
    }

    #[test]
    fn resized_after_improved() -> anyhow::Result<()> {
        let improved = ActionBarStyle::Improved.patch()?.apply(STYLE_SHEET);
        let resized = ActionBarStyle::Resized.patch()?.apply(&improved.html);

        assert_eq!(resized.changes, 1);
        assert!(resized.html.contains("border-radius: 50px;"));
        assert!(resized.html.contains("width: 16px;"));
        assert!(!resized.html.contains("width: 20px;"));
        assert_eq!(resized.html.matches("/* Article Action Bar */").count(), 1);
        assert_eq!(resized.html.matches("/* Tags */").count(), 1);
        assert!(resized.html.ends_with("/* Tags */\n        .tag { color: gray; }\n    </style>"));

        Ok(())
    }

    #[test]
    fn restyling_again_replaces_the_new_block() -> anyhow::Result<()> {
        let restyle = ActionBarStyle::Resized.patch()?;
        let once = restyle.apply(STYLE_SHEET);
        let twice = restyle.apply(&once.html);

        assert_eq!(twice.changes, 1);
        assert_eq!(twice.html.matches("/* Article Action Bar */").count(), 1);
        assert_eq!(twice.html.matches("justify-content: space-between;").count(), 1);

        Ok(())
    }

    #[test]
    fn without_the_tags_comment_nothing_changes() -> anyhow::Result<()> {
        let html = "/* Article Action Bar */\n.article-action-bar { display: flex; }\n";
        let patched = ActionBarStyle::Improved.patch()?.apply(html);

        assert_eq!(patched.html, html);
        assert!(patched.is_no_op());

        Ok(())
    }

    #[test]
    fn status_lists_the_changes() -> anyhow::Result<()> {
        let status = ActionBarStyle::Resized.patch()?.status();

        assert_eq!(status.len(), 5);
        assert_eq!(status[0], "Button size reduced!");
        assert_eq!(status[3], "  - Smaller icons (16px)");
        assert!(
            ActionBarStyle::Improved.patch()?.status()[1..]
                .iter()
                .all(|line| line.starts_with("  - "))
        );

        Ok(())
    }

    #[test]
    fn names() -> anyhow::Result<()> {
        assert_eq!(ActionBarStyle::Improved.patch()?.name(), "improve-buttons-style");
        assert_eq!(ActionBarStyle::Resized.patch()?.name(), "resize-buttons");
        assert_eq!(ActionBarStyle::Improved.to_string(), "improved");

        Ok(())
    }
}
