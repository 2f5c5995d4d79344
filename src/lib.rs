//! In-place text patches for the article page.
//!
//! Every tool in this crate reads `article.html`, runs literal or regular
//! expression substitutions over the raw text and writes the result back to
//! the same path. No HTML is parsed: a pattern that isn't found leaves the
//! text as it was and the run still succeeds.
//!
//! ## Binaries
//!
//! * `adjust-logo-size` - shrink the header logo from 150px to 80px
//! * `fix-buttons-position` - move the action bar after the featured image
//! * `fix-clickable-buttons` - raise the action bar above overlapping content
//! * `improve-buttons-style` - replace the action bar styles
//! * `resize-buttons` - replace the action bar styles with a smaller variant
//! * `add-actions-script` - fix the loader typo and add `article-actions.js`

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

#![deny(clippy::panic)]

rust_i18n::i18n!();

pub mod action_bar_style;
pub mod article;
pub mod buttons;
pub mod command_line;
pub mod locale;
pub mod logo;
pub mod patch;
pub mod scripts;
pub mod utils;

pub const ARTICLE_PATH: &str = "article.html";

pub const COPYRIGHT: &str = r".SH COPYRIGHT
Copyright (C) 2026 Developers of the article-patch project

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU Affero General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU Affero General Public License for more details.

You should have received a copy of the GNU Affero General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
";

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright (c) 2026 Developers of the article-patch project
Licensed under the AGPLv3"
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        action_bar_style::ActionBarStyle,
        buttons::{ButtonsPosition, ClickableButtons},
        logo::LogoSize,
        patch::Patch,
        scripts::ActionsScript,
    };

    const UNRELATED: &str = "<!DOCTYPE html>\n<html>\n<head>\n    <title>Oreegami</title>\n</head>\n<main>\n    <p>Nothing to see here.</p>\n</main>\n</html>\n";

    fn all_patches() -> anyhow::Result<Vec<Box<dyn Patch>>> {
        let patches: Vec<Box<dyn Patch>> = vec![
            Box::new(LogoSize),
            Box::new(ButtonsPosition::new()?),
            Box::new(ClickableButtons),
            Box::new(ActionBarStyle::Improved.patch()?),
            Box::new(ActionBarStyle::Resized.patch()?),
            Box::new(ActionsScript),
        ];

        Ok(patches)
    }

    #[test]
    fn every_patch_is_a_no_op_without_its_targets() -> anyhow::Result<()> {
        for patch in all_patches()? {
            let patched = patch.apply(UNRELATED);
            assert_eq!(patched.html, UNRELATED, "{} changed the text", patch.name());
            assert_eq!(patched.changes, 0, "{} counted a change", patch.name());
        }

        Ok(())
    }

    #[test]
    fn every_patch_accepts_empty_text() -> anyhow::Result<()> {
        for patch in all_patches()? {
            let patched = patch.apply("");
            assert!(patched.html.is_empty(), "{}", patch.name());
            assert!(patched.is_no_op());
        }

        Ok(())
    }

    #[test]
    fn every_patch_has_status_lines() -> anyhow::Result<()> {
        for patch in all_patches()? {
            assert!(!patch.status().is_empty(), "{}", patch.name());
        }

        Ok(())
    }

    #[test]
    fn long_version_starts_with_the_package_version() {
        assert!(LONG_VERSION.starts_with(env!("CARGO_PKG_VERSION")));
        assert_eq!(ARTICLE_PATH, "article.html");
    }
}
