// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line arguments.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use pdfgen_core::BaseDirection;

/// Paragraph direction as accepted by `--direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    Auto,
    Ltr,
    Rtl,
}

impl From<DirectionArg> for BaseDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Auto => Self::Auto,
            DirectionArg::Ltr => Self::Ltr,
            DirectionArg::Rtl => Self::Rtl,
        }
    }
}

/// Parsed command-line settings. Unset fields fall back to the config file.
#[derive(Debug, Default, Parser)]
#[command(name = "pdfgen-bidi", version)]
#[command(about = "Reorder right-to-left text from logical to display order")]
#[command(after_help = "Set RUST_LOG=debug to trace the pipeline on standard error.")]
pub struct CliArgs {
    /// Load settings from a JSON config file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Byte encoding of input and output [default: utf-8].
    #[arg(long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Wrap each line as a title of N letters.
    #[arg(long, value_name = "N")]
    pub wrap: Option<usize>,

    /// Paragraph direction.
    #[arg(long, value_enum, ignore_case = true, value_name = "KEYWORD", conflicts_with_all = ["ltr", "rtl"])]
    pub direction: Option<DirectionArg>,

    /// Shorthand for --direction ltr.
    #[arg(long, conflicts_with = "rtl")]
    pub ltr: bool,

    /// Shorthand for --direction rtl.
    #[arg(long)]
    pub rtl: bool,

    /// Leave brackets and other paired glyphs unmirrored.
    #[arg(long)]
    pub no_mirror: bool,

    /// Append the resolved embedding levels to each line.
    #[arg(long)]
    pub levels: bool,

    /// Input file; standard input when missing or '-'.
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,
}

impl CliArgs {
    /// Direction forced on the command line, if any.
    pub fn base_direction(&self) -> Option<BaseDirection> {
        if self.ltr {
            Some(BaseDirection::Ltr)
        } else if self.rtl {
            Some(BaseDirection::Rtl)
        } else {
            self.direction.map(BaseDirection::from)
        }
    }

    /// File to read, or `None` for standard input.
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| *path != Path::new("-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("pdfgen-bidi").chain(args.iter().copied()))
    }

    #[test]
    fn no_arguments_reads_stdin_with_defaults() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.input_path(), None);
        assert_eq!(cli.base_direction(), None);
        assert!(!cli.no_mirror && !cli.levels);
    }

    #[test]
    fn every_option_is_recognised() {
        let cli = parse(&[
            "--config", "bidi.json", "--encoding", "windows-1255", "--wrap", "27", "--rtl",
            "--no-mirror", "--levels", "in.txt",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("bidi.json")));
        assert_eq!(cli.encoding.as_deref(), Some("windows-1255"));
        assert_eq!(cli.wrap, Some(27));
        assert_eq!(cli.base_direction(), Some(BaseDirection::Rtl));
        assert!(cli.no_mirror);
        assert!(cli.levels);
        assert_eq!(cli.input_path(), Some(Path::new("in.txt")));
    }

    #[test]
    fn dash_means_stdin() {
        assert_eq!(parse(&["-"]).unwrap().input_path(), None);
    }

    #[test]
    fn direction_keyword() {
        let cli = parse(&["--direction", "LTR"]).unwrap();
        assert_eq!(cli.base_direction(), Some(BaseDirection::Ltr));
        assert_eq!(
            parse(&["--direction", "up"]).unwrap_err().kind(),
            ErrorKind::InvalidValue
        );
    }

    #[test]
    fn direction_flags_conflict() {
        for args in [&["--ltr", "--rtl"][..], &["--direction", "auto", "--rtl"][..]] {
            assert_eq!(parse(args).unwrap_err().kind(), ErrorKind::ArgumentConflict);
        }
    }

    #[test]
    fn help_is_reported_as_help() {
        assert_eq!(
            parse(&["--levels", "--help"]).unwrap_err().kind(),
            ErrorKind::DisplayHelp
        );
    }

    #[test]
    fn bad_input_is_rejected() {
        assert!(parse(&["--wrap"]).is_err());
        assert_eq!(parse(&["--wrap", "wide"]).unwrap_err().kind(), ErrorKind::ValueValidation);
        assert_eq!(parse(&["--bogus"]).unwrap_err().kind(), ErrorKind::UnknownArgument);
        assert!(parse(&["a.txt", "b.txt"]).is_err());
    }
}
