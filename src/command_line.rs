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

use std::{io::Write as _, path::PathBuf};

use clap::{Command, CommandFactory, FromArgMatches, Parser};

use crate::{
    ARTICLE_PATH, COPYRIGHT, LONG_VERSION,
    locale::Locale,
    patch::{self, Patch},
    utils::init_logger,
};

/// The arguments every article tool takes. Run without any of them a tool
/// patches `article.html` in the current directory.
#[derive(Parser, Debug)]
#[command(long_version = LONG_VERSION)]
pub struct Args {
    /// The article page to patch in place
    #[arg(default_value = ARTICLE_PATH, index = 1, value_name = "path")]
    pub path: PathBuf,

    /// The language of the status lines
    #[arg(default_value_t, long, value_enum)]
    pub locale: Locale,

    /// Whether to log on the debug level
    #[arg(long)]
    pub debug: bool,

    /// Build the manpage
    #[arg(long)]
    pub man: bool,
}

impl Args {
    fn command_for(name: &'static str, about: &'static str) -> Command {
        Self::command().name(name).bin_name(name).about(about)
    }

    /// # Errors
    ///
    /// If the arguments don't match the command.
    pub fn try_parse_for<I, T>(
        name: &'static str,
        about: &'static str,
        arguments: I,
    ) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Self::command_for(name, about).try_get_matches_from(arguments)?;
        Self::from_arg_matches(&matches)
    }

    /// Parses the process arguments, exiting with usage on error.
    #[must_use]
    pub fn parse_for(name: &'static str, about: &'static str) -> Self {
        Self::try_parse_for(name, about, std::env::args_os()).unwrap_or_else(|error| error.exit())
    }

    /// Writes `<name>.1` in the current directory.
    ///
    /// # Errors
    ///
    /// If the man page can't be rendered or written.
    pub fn generate_man_page(name: &'static str, about: &'static str) -> anyhow::Result<()> {
        let mut buffer: Vec<u8> = Vec::default();
        let cmd = Self::command_for(name, about).long_version(None);
        let man = clap_mangen::Man::new(cmd).date("2026-10-18");

        man.render(&mut buffer)?;
        write!(buffer, "{COPYRIGHT}")?;

        std::fs::write(format!("{name}.1"), buffer)?;
        Ok(())
    }
}

/// Everything a tool binary does: parse the arguments, patch the article and
/// report.
///
/// # Errors
///
/// If the article can't be read or written, or the man page can't be built.
pub fn run_tool(patch: &dyn Patch, about: &'static str) -> anyhow::Result<()> {
    let args = Args::parse_for(patch.name(), about);

    if args.man {
        return Args::generate_man_page(patch.name(), about);
    }

    init_logger(args.debug);
    args.locale.set();
    log::debug!("{args:?}");
    log::debug!("printing status lines in {}", args.locale);

    patch::run(patch, &args.path)?;

    for line in patch.status() {
        println!("{line}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABOUT: &str = "Test tool";

    #[test]
    fn defaults() -> anyhow::Result<()> {
        let args = Args::try_parse_for("test-tool", ABOUT, ["test-tool"])?;

        assert_eq!(args.path, PathBuf::from("article.html"));
        assert_eq!(args.locale, Locale::English);
        assert!(!args.debug);
        assert!(!args.man);

        Ok(())
    }

    #[test]
    fn every_option() -> anyhow::Result<()> {
        let args = Args::try_parse_for(
            "test-tool",
            ABOUT,
            ["test-tool", "pages/other.html", "--locale", "french", "--debug"],
        )?;

        assert_eq!(args.path, PathBuf::from("pages/other.html"));
        assert_eq!(args.locale, Locale::French);
        assert!(args.debug);

        Ok(())
    }

    #[test]
    fn unknown_locale() {
        let result = Args::try_parse_for("test-tool", ABOUT, ["test-tool", "--locale", "klingon"]);
        assert!(result.is_err());
    }

    #[test]
    fn command_is_valid() {
        Args::command_for("test-tool", ABOUT).debug_assert();
    }
}
