// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the command line.
//
// Every technical error is mapped to plain English with a clear suggestion.

use crate::error::PdfgenError;

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (first line on stderr).
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
}

/// Convert a `PdfgenError` into a `HumanError`.
pub fn humanize_error(err: &PdfgenError) -> HumanError {
    match err {
        PdfgenError::UnknownEncoding(label) => HumanError {
            message: format!("\"{label}\" is not a text encoding we know."),
            suggestion: "Use a standard label such as utf-8, utf-16le, windows-1255 or iso-8859-8.".into(),
        },

        PdfgenError::Decode { encoding, .. } => HumanError {
            message: format!("The input is not valid {encoding} text."),
            suggestion: "Check which encoding the file was saved in and pass it with --encoding.".into(),
        },

        PdfgenError::Encode { encoding, .. } => HumanError {
            message: format!("Some characters cannot be written as {encoding}."),
            suggestion: "Choose an encoding that covers every script in the text, such as utf-8.".into(),
        },

        PdfgenError::InvalidConfig(detail) => HumanError {
            message: "The configuration file has an invalid setting.".into(),
            suggestion: format!("Fix the setting and try again. ({detail})"),
        },

        PdfgenError::Io(io_err) => humanize_io_error(io_err),

        PdfgenError::Serialization(_) => HumanError {
            message: "The configuration file could not be read.".into(),
            suggestion: "Make sure it is valid JSON, or delete it to use the defaults.".into(),
        },
    }
}

fn humanize_io_error(err: &std::io::Error) -> HumanError {
    match err.kind() {
        std::io::ErrorKind::NotFound => HumanError {
            message: "The file could not be found.".into(),
            suggestion: "Check the path and try again.".into(),
        },
        std::io::ErrorKind::PermissionDenied => HumanError {
            message: "We don't have permission to open this file.".into(),
            suggestion: "Check the file permissions or run from a directory you own.".into(),
        },
        _ => HumanError {
            message: "Reading or writing a file failed.".into(),
            suggestion: format!("Try again. ({err})"),
        },
    }
}
