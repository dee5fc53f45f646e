// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Foreground and background colors: the 16 named colors, the terminal default color,
//! the 256-color palette, and truecolor (24-bit).
//!
//! These are the only functions in the crate that validate their arguments. When
//! validation fails the error is returned before anything is built, so nothing is
//! written to the output device.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>
//! - <https://www.ditig.com/256-colors-cheat-sheet>

use crate::{AnsiEmitter, ColorSpec, EscapeResult, csi_params, default_color_code};

/// Emits any [`ColorSpec`].
///
/// # Errors
///
/// See [`ColorSpec::to_params()`].
pub fn apply(emitter: &AnsiEmitter, spec: &ColorSpec) -> EscapeResult<String> {
    let params = spec.to_params()?;
    Ok(emitter.build_sgr(&params))
}

/// One of the 16 named colors, looked up ignoring case, eg: `red` is `ESC[31m` and with
/// `bg` it is `ESC[41m`.
///
/// # Errors
///
/// Returns [`crate::InvalidArgumentError::UnknownColorName`] when `name` is not in
/// [`crate::ANSI16_COLOR_TABLE`].
pub fn color16(emitter: &AnsiEmitter, name: &str, bg: bool) -> EscapeResult<String> {
    apply(
        emitter,
        &ColorSpec::Named {
            name: name.to_string(),
            bright: false,
            bg,
        },
    )
}

/// `ESC[39m`, or `ESC[49m` with `bg`.
pub fn default_color(emitter: &AnsiEmitter, bg: bool) -> String {
    emitter.build_sgr(&csi_params![default_color_code(bg)])
}

/// `ESC[38;5;{id}m`, or `ESC[48;5;{id}m` with `bg`.
///
/// # Errors
///
/// Returns [`crate::InvalidArgumentError::Ansi256IndexOutOfRange`] unless
/// `0 <= id <= 255`.
pub fn color256(emitter: &AnsiEmitter, id: i64, bg: bool) -> EscapeResult<String> {
    apply(emitter, &ColorSpec::Ansi256 { id, bg })
}

/// `ESC[38;2;{red};{green};{blue}m`, or `ESC[48;2;...m` with `bg`.
///
/// # Errors
///
/// Returns [`crate::InvalidArgumentError::RgbChannelOutOfRange`] unless every channel is
/// in `0..=255`.
pub fn color24bit(
    emitter: &AnsiEmitter,
    red: i64,
    green: i64,
    blue: i64,
    bg: bool,
) -> EscapeResult<String> {
    apply(
        emitter,
        &ColorSpec::Rgb {
            red,
            green,
            blue,
            bg,
        },
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use r3bl_test_fixtures::StdoutMock;
    use test_case::test_case;

    use super::{apply, color16, color24bit, color256, default_color};
    use crate::{AnsiEmitter, ColorSpec, InvalidArgumentError};

    fn new_mock_emitter() -> (AnsiEmitter, StdoutMock) {
        let stdout_mock = StdoutMock::new();
        (AnsiEmitter::new_with_writer(stdout_mock.clone()), stdout_mock)
    }

    #[test]
    fn test_color16() {
        let (emitter, stdout_mock) = new_mock_emitter();
        assert_eq!(color16(&emitter, "red", false), Ok("\x1b[31m".to_string()));
        assert_eq!(color16(&emitter, "red", true), Ok("\x1b[41m".to_string()));
        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            "\x1b[31m\x1b[41m"
        );
    }

    #[test_case("BrightMagenta", false, "\x1b[95m")]
    #[test_case("brightmagenta", true, "\x1b[105m")]
    #[test_case("BLACK", true, "\x1b[40m")]
    #[test_case("white", false, "\x1b[37m")]
    fn test_color16_case_insensitive(name: &str, bg: bool, expected: &str) {
        let (emitter, _) = new_mock_emitter();
        assert_eq!(color16(&emitter, name, bg).unwrap(), expected);
    }

    #[test]
    fn test_color16_unknown_name_writes_nothing() {
        let (emitter, stdout_mock) = new_mock_emitter();
        assert_eq!(
            color16(&emitter, "bogus", false),
            Err(InvalidArgumentError::UnknownColorName {
                name: "bogus".to_string()
            })
        );
        assert!(stdout_mock.is_empty());
    }

    #[test]
    fn test_default_color() {
        let (emitter, _) = new_mock_emitter();
        assert_eq!(default_color(&emitter, false), "\x1b[39m");
        assert_eq!(default_color(&emitter, true), "\x1b[49m");
    }

    #[test]
    fn test_color256() {
        let (emitter, _) = new_mock_emitter();
        assert_eq!(color256(&emitter, 255, false).unwrap(), "\x1b[38;5;255m");
        assert_eq!(color256(&emitter, 0, true).unwrap(), "\x1b[48;5;0m");
    }

    #[test_case(256)]
    #[test_case(-1)]
    #[test_case(i64::MAX)]
    fn test_color256_out_of_range(id: i64) {
        let (emitter, stdout_mock) = new_mock_emitter();
        assert_eq!(
            color256(&emitter, id, false),
            Err(InvalidArgumentError::Ansi256IndexOutOfRange { id })
        );
        assert!(stdout_mock.is_empty());
    }

    #[test]
    fn test_color24bit() {
        let (emitter, stdout_mock) = new_mock_emitter();
        assert_eq!(
            color24bit(&emitter, 255, 0, 0, false).unwrap(),
            "\x1b[38;2;255;0;0m"
        );
        assert_eq!(
            color24bit(&emitter, 10, 20, 30, true).unwrap(),
            "\x1b[48;2;10;20;30m"
        );
        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            "\x1b[38;2;255;0;0m\x1b[48;2;10;20;30m"
        );
    }

    #[test_case(256, 0, 0)]
    #[test_case(0, 256, 0)]
    #[test_case(0, 0, -1)]
    fn test_color24bit_out_of_range(red: i64, green: i64, blue: i64) {
        let (emitter, stdout_mock) = new_mock_emitter();
        assert_eq!(
            color24bit(&emitter, red, green, blue, false),
            Err(InvalidArgumentError::RgbChannelOutOfRange { red, green, blue })
        );
        assert!(stdout_mock.is_empty());
    }

    #[test]
    fn test_apply_bright_named() {
        let (emitter, _) = new_mock_emitter();
        let spec = ColorSpec::Named {
            name: "green".to_string(),
            bright: true,
            bg: false,
        };
        assert_eq!(apply(&emitter, &spec).unwrap(), "\x1b[92m");
    }

    #[test]
    fn test_disabled_emission_still_validates() {
        let (emitter, stdout_mock) = new_mock_emitter();
        emitter.disable_emission();
        assert_eq!(color256(&emitter, 42, false).unwrap(), "\x1b[38;5;42m");
        assert!(color256(&emitter, 300, false).is_err());
        assert!(stdout_mock.is_empty());
    }
}
