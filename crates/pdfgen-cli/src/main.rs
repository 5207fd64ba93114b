// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pdfgen-bidi — command-line front end for the PdfGen display engine.
//
// Reads text in logical order and writes it in display order, in the same
// byte encoding. Errors are reported in plain language on stderr.

mod args;

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use pdfgen_bidi::encoding::{decode, encode, lookup_encoding};
use pdfgen_bidi::{
    BidiOptions, NoShaping, reorder_bytes_with_options, reorder_with_options, resolve_levels,
    wrap_rtl_line_with_options,
};
use pdfgen_core::BidiConfig;
use pdfgen_core::error::Result;
use pdfgen_core::human_errors::humanize_error;
use tracing::{debug, info};

use crate::args::CliArgs;

fn main() -> ExitCode {
    // Initialise tracing on stderr; stdout carries the converted text.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = CliArgs::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = %err, "conversion failed");
            let human = humanize_error(&err);
            eprintln!("{}\n{}", human.message, human.suggestion);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &CliArgs) -> Result<()> {
    let config = effective_config(cli)?;
    let input = read_input(cli.input_path())?;
    info!(bytes = input.len(), encoding = %config.default_encoding, "converting to display order");

    let output = render(&input, &config, cli.levels)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(&output)?;
    stdout.flush()?;
    Ok(())
}

/// Config file (or defaults) with command-line overrides applied on top.
fn effective_config(cli: &CliArgs) -> Result<BidiConfig> {
    let mut config = match &cli.config {
        Some(path) => BidiConfig::load(path)?,
        None => BidiConfig::default(),
    };
    if let Some(encoding) = &cli.encoding {
        config.default_encoding = encoding.clone();
    }
    if let Some(width) = cli.wrap {
        config.wrap_width = Some(width);
    }
    if let Some(direction) = cli.base_direction() {
        config.base_direction = direction;
    }
    if cli.no_mirror {
        config.mirror_glyphs = false;
    }
    config.validate()?;
    Ok(config)
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => Ok(fs::read(path)?),
        None => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Convert the whole input. Without wrapping or level output this is the
/// plain byte pipeline; otherwise every line is handled on its own.
fn render(input: &[u8], config: &BidiConfig, show_levels: bool) -> Result<Vec<u8>> {
    let options = BidiOptions::from(config);
    if config.wrap_width.is_none() && !show_levels {
        return reorder_bytes_with_options(input, &config.default_encoding, &options);
    }
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let encoding = lookup_encoding(&config.default_encoding)?;
    let text = decode(input, encoding)?;
    let rendered = text
        .split('\n')
        .map(|line| render_line(line, config.wrap_width, &options, show_levels))
        .collect::<Vec<_>>()
        .join("\n");
    encode(&rendered, encoding)
}

// Level output describes the unwrapped line, so `--levels` takes precedence
// over `--wrap`. Both honour the direction and mirroring options.
fn render_line(line: &str, wrap_width: Option<usize>, options: &BidiOptions, show_levels: bool) -> String {
    if line.is_empty() {
        return String::new();
    }
    if !show_levels {
        return match wrap_width {
            Some(width) => wrap_rtl_line_with_options(line, width, &NoShaping, options),
            None => reorder_with_options(line, options),
        };
    }

    let resolved = resolve_levels(line, options);
    let levels = resolved
        .levels()
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    let text = if options.mirror_glyphs {
        resolved.into_mirrored_text()
    } else {
        resolved.text()
    };
    format!("{text}\t{levels}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdfgen_core::{BaseDirection, PdfgenError};

    fn utf8_config() -> BidiConfig {
        BidiConfig::default()
    }

    #[test]
    fn plain_conversion_matches_the_library() {
        let out = render("שלום\nabc".as_bytes(), &utf8_config(), false).unwrap();
        assert_eq!(out, "םולש\nabc".as_bytes());
    }

    #[test]
    fn levels_are_appended_per_line() {
        let out = render("אב 12\nabc".as_bytes(), &utf8_config(), true).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "12 בא\t2 2 1 1 1\nabc\t0 0 0"
        );
    }

    #[test]
    fn levels_output_mirrors_unless_disabled() {
        let out = render("(א)".as_bytes(), &utf8_config(), true).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "(א)\t1 1 1");

        let config = BidiConfig {
            mirror_glyphs: false,
            ..utf8_config()
        };
        let out = render("(א)".as_bytes(), &config, true).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), ")א(\t1 1 1");
    }

    #[test]
    fn wrap_width_routes_lines_through_the_wrapper() {
        let config = BidiConfig {
            wrap_width: Some(5),
            ..utf8_config()
        };
        let out = render("אב גד הו".as_bytes(), &config, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "דג בא \nוה ");
    }

    #[test]
    fn wrapping_honours_direction_and_mirroring() {
        let config = BidiConfig {
            wrap_width: Some(27),
            mirror_glyphs: false,
            base_direction: BaseDirection::Rtl,
            ..utf8_config()
        };
        let out = render("(א)".as_bytes(), &config, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), ")א( ");

        let config = BidiConfig {
            wrap_width: Some(27),
            ..utf8_config()
        };
        let out = render("(א)".as_bytes(), &config, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "(א) ");
    }

    #[test]
    fn legacy_encoding_round_trips() {
        let config = BidiConfig {
            default_encoding: "windows-1255".into(),
            ..utf8_config()
        };
        let out = render(&[0xE0, 0xE1, 0x0A, 0x61], &config, true).unwrap();
        // "בא\t1 1\na\t0"
        let mut expected = vec![0xE1, 0xE0];
        expected.extend_from_slice(b"\t1 1\na\t0");
        assert_eq!(out, expected);
    }

    #[test]
    fn command_line_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bidi.json");
        BidiConfig {
            default_encoding: "iso-8859-8".into(),
            wrap_width: Some(40),
            ..BidiConfig::default()
        }
        .save(&path)
        .unwrap();

        let cli = CliArgs {
            config: Some(path),
            wrap: Some(27),
            rtl: true,
            no_mirror: true,
            ..CliArgs::default()
        };
        let config = effective_config(&cli).unwrap();
        assert_eq!(config.default_encoding, "iso-8859-8");
        assert_eq!(config.wrap_width, Some(27));
        assert_eq!(config.base_direction, BaseDirection::Rtl);
        assert!(!config.mirror_glyphs);
    }

    #[test]
    fn zero_wrap_is_rejected() {
        let cli = CliArgs {
            wrap: Some(0),
            ..CliArgs::default()
        };
        assert!(matches!(effective_config(&cli), Err(PdfgenError::InvalidConfig(_))));
    }

    #[test]
    fn missing_input_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(Some(dir.path().join("absent.txt").as_path())).unwrap_err();
        assert!(matches!(err, PdfgenError::Io(_)));
    }
}
