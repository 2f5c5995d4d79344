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

use crate::patch::{Patch, Patched};

pub const LOGO_STYLE_LARGE: &str = r#"style="display: block; max-width: 150px; height: auto;""#;
pub const LOGO_STYLE_SMALL: &str = r#"style="display: block; max-width: 80px; height: auto;""#;

/// Shrinks the header logo so it stays readable on small screens.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogoSize;

impl Patch for LogoSize {
    fn name(&self) -> &'static str {
        "adjust-logo-size"
    }

    fn apply(&self, html: &str) -> Patched {
        Patched::unchanged(html).replace(LOGO_STYLE_LARGE, LOGO_STYLE_SMALL)
    }

    fn status(&self) -> Vec<String> {
        vec![
            t!("OK - logo size adjusted to 80px!").to_string(),
            t!("Reload article.html (Ctrl+F5)").to_string(),
        ]
    }
}
