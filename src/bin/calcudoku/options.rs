use std::path::PathBuf;

use clap::{App, Arg, ArgMatches};

pub(crate) struct Options {
    input: Option<PathBuf>,
}

impl Options {
    pub fn from_args() -> Self {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Self {
        Self {
            input: matches.value_of("input").map(PathBuf::from),
        }
    }

    /// The puzzle file to read, or `None` for stdin
    pub fn input(&self) -> Option<&PathBuf> {
        self.input.as_ref()
    }
}

fn clap_app() -> App<'static, 'static> {
    App::new("calcudoku")
        .about("Solve KenKen-style arithmetic Latin square puzzles")
        .arg(
            Arg::with_name("input")
                .help("File with the puzzle description (stdin if omitted)")
                .index(1),
        )
}
