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

#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]

use article_patch::{buttons::ButtonsPosition, command_line::run_tool};

const ABOUT: &str = "Move the article action bar right after the featured image";

fn main() -> anyhow::Result<()> {
    let position = ButtonsPosition::new()?;
    run_tool(&position, ABOUT)
}
