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

use rust_i18n::t;

use crate::patch::{Patch, Patched, bullet};

pub const LOADER_TYPO: &str = r"article-loader.js\";
pub const LOADER: &str = "article-loader.js";
pub const ACTIONS: &str = "article-actions.js";

const BODY_END: &str = "</body>";
const ACTIONS_TAG_BODY_END: &str = "    <script src=\"article-actions.js\"></script>\n</body>";

/// Fixes the stray backslash after the loader script and loads the actions
/// script once.
#[derive(Clone, Copy, Debug, Default)]
pub struct ActionsScript;

impl Patch for ActionsScript {
    fn name(&self) -> &'static str {
        "add-actions-script"
    }

    fn apply(&self, html: &str) -> Patched {
        let patched = Patched::unchanged(html).replace(LOADER_TYPO, LOADER);

        if patched.html.contains(ACTIONS) {
            log::debug!("{ACTIONS} is already referenced");
            patched
        } else {
            patched.replace(BODY_END, ACTIONS_TAG_BODY_END)
        }
    }

    fn status(&self) -> Vec<String> {
        vec![
            t!("Scripts updated!").to_string(),
            bullet(&t!("Typo fixed (article-loader.js)")),
            bullet(&t!("article-actions.js added")),
        ]
    }
}
