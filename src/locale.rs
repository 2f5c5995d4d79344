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

use clap::ValueEnum;

/// The language status lines are printed in.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Locale {
    #[default]
    English,
    French,
}

impl Locale {
    #[must_use]
    pub fn txt(self) -> String {
        match self {
            Self::English => "en-US".to_string(),
            Self::French => "fr".to_string(),
        }
    }

    pub fn set(self) {
        rust_i18n::set_locale(&self.txt());
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "English (United States)"),
            Self::French => write!(f, "Français"),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_i18n::t;

    use super::*;

    #[test]
    fn codes() {
        assert_eq!(Locale::default().txt(), "en-US");
        assert_eq!(Locale::French.txt(), "fr");
        assert_eq!(Locale::French.to_string(), "Français");
    }

    #[test]
    fn translations() {
        assert_eq!(
            t!("Scripts updated!", locale = "fr"),
            "Scripts mis a jour!"
        );
        assert_eq!(
            t!("OK - logo size adjusted to 80px!", locale = "fr"),
            "OK - Taille du logo ajustee a 80px!"
        );
        assert_eq!(
            t!("The buttons are now AFTER the image", locale = "fr"),
            "Les boutons sont maintenant APRES l'image"
        );
        assert_eq!(
            t!("Scripts updated!", locale = "en-US"),
            "Scripts updated!"
        );
    }
}
