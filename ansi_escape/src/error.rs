// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The only error in this crate. It is raised by the color catalog, before anything is
//! built or written, when an argument is outside of what the terminal accepts.
//!
//! More info on error handling with [miette] and [thiserror]:
//! - [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)

pub type EscapeResult<T> = Result<T, InvalidArgumentError>;

#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq, Eq)]
pub enum InvalidArgumentError {
    #[error("🎨 Invalid color name: '{name}'")]
    #[diagnostic(
        code(r3bl_ansi_escape::unknown_color_name),
        help("Use one of the 16 color names, eg: 'red' or 'brightblue'")
    )]
    UnknownColorName { name: String },

    #[error("🎨 Invalid 256-color code: {id}")]
    #[diagnostic(
        code(r3bl_ansi_escape::ansi256_index_out_of_range),
        help("The 256-color code must be in range: 0 <= id <= 255")
    )]
    Ansi256IndexOutOfRange { id: i64 },

    #[error("🎨 Color R={red} G={green} B={blue} not in range: 0 <= color <= 255")]
    #[diagnostic(code(r3bl_ansi_escape::rgb_channel_out_of_range))]
    RgbChannelOutOfRange { red: i64, green: i64, blue: i64 },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::InvalidArgumentError;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            InvalidArgumentError::UnknownColorName {
                name: "bogus".into()
            }
            .to_string(),
            "🎨 Invalid color name: 'bogus'"
        );
        assert_eq!(
            InvalidArgumentError::Ansi256IndexOutOfRange { id: 256 }.to_string(),
            "🎨 Invalid 256-color code: 256"
        );
        assert_eq!(
            InvalidArgumentError::RgbChannelOutOfRange {
                red: 256,
                green: 0,
                blue: -1
            }
            .to_string(),
            "🎨 Color R=256 G=0 B=-1 not in range: 0 <= color <= 255"
        );
    }

    #[test]
    fn test_converts_into_miette_report() {
        let report: miette::Report = InvalidArgumentError::Ansi256IndexOutOfRange { id: -1 }.into();
        assert_eq!(
            report.downcast_ref::<InvalidArgumentError>(),
            Some(&InvalidArgumentError::Ansi256IndexOutOfRange { id: -1 })
        );
    }
}
