// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BACKGROUND_OFFSET, EscapeResult, InlineVecCsiParams, InvalidArgumentError,
            csi_params, lookup_ansi16_code, lookup_bright_ansi16_code};

pub mod sgr_color_params {
    pub const FOREGROUND_EXTENDED: u8 = 38;
    pub const BACKGROUND_EXTENDED: u8 = 48;
    pub const FOREGROUND_DEFAULT: u8 = 39;
    pub const BACKGROUND_DEFAULT: u8 = 49;
    /// Subtype after 38 / 48 that selects a 256-color palette index.
    pub const ANSI256_SUBTYPE: u8 = 5;
    /// Subtype after 38 / 48 that selects a truecolor (24-bit) value.
    pub const RGB_SUBTYPE: u8 = 2;
    pub const MAX_CHANNEL: i64 = 255;
}

/// Any color the terminal can be asked to use, for the foreground or (when `bg` is set)
/// the background. It is validated and turned into SGR parameters by
/// [`ColorSpec::to_params()`], and emitted by [`crate::color::apply()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSpec {
    /// One of the 16 named colors (see [`crate::ANSI16_COLOR_TABLE`]). With `bright` the
    /// name is looked up with a `bright` prefix.
    Named { name: String, bright: bool, bg: bool },
    /// Index in the 256-color palette.
    Ansi256 { id: i64, bg: bool },
    /// Truecolor.
    Rgb {
        red: i64,
        green: i64,
        blue: i64,
        bg: bool,
    },
    /// The terminal's own default color.
    Default { bg: bool },
}

fn is_channel(value: i64) -> bool { (0..=sgr_color_params::MAX_CHANNEL).contains(&value) }

/// SGR code that resets the foreground (39), or with `bg` the background (49), to the
/// terminal's default color.
#[must_use]
pub fn default_color_code(bg: bool) -> u8 {
    if bg {
        sgr_color_params::BACKGROUND_DEFAULT
    } else {
        sgr_color_params::FOREGROUND_DEFAULT
    }
}

fn extended_selector(bg: bool) -> u8 {
    if bg {
        sgr_color_params::BACKGROUND_EXTENDED
    } else {
        sgr_color_params::FOREGROUND_EXTENDED
    }
}

impl ColorSpec {
    /// SGR parameters for this color, eg: `[38, 5, 196]`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] when the name is not one of the 16 colors, or an
    /// index / channel is outside of `0..=255`.
    pub fn to_params(&self) -> EscapeResult<InlineVecCsiParams> {
        match self {
            ColorSpec::Named { name, bright, bg } => {
                let code = if *bright {
                    lookup_bright_ansi16_code(name)
                } else {
                    lookup_ansi16_code(name)
                };
                let Some(code) = code else {
                    return Err(InvalidArgumentError::UnknownColorName {
                        name: name.clone(),
                    });
                };
                let offset = if *bg { BACKGROUND_OFFSET } else { 0 };
                Ok(csi_params![code + offset])
            }

            ColorSpec::Ansi256 { id, bg } => {
                if !is_channel(*id) {
                    return Err(InvalidArgumentError::Ansi256IndexOutOfRange { id: *id });
                }
                Ok(csi_params![
                    extended_selector(*bg),
                    sgr_color_params::ANSI256_SUBTYPE,
                    *id
                ])
            }

            ColorSpec::Rgb {
                red,
                green,
                blue,
                bg,
            } => {
                if !(is_channel(*red) && is_channel(*green) && is_channel(*blue)) {
                    return Err(InvalidArgumentError::RgbChannelOutOfRange {
                        red: *red,
                        green: *green,
                        blue: *blue,
                    });
                }
                Ok(csi_params![
                    extended_selector(*bg),
                    sgr_color_params::RGB_SUBTYPE,
                    *red,
                    *green,
                    *blue
                ])
            }

            ColorSpec::Default { bg } => Ok(csi_params![default_color_code(*bg)]),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::ColorSpec;
    use crate::{InlineVecCsiParams, InvalidArgumentError, csi_params};

    fn named(name: &str, bright: bool, bg: bool) -> ColorSpec {
        ColorSpec::Named {
            name: name.to_string(),
            bright,
            bg,
        }
    }

    #[test_case(named("red", false, false), csi_params![31])]
    #[test_case(named("red", false, true), csi_params![41])]
    #[test_case(named("red", true, false), csi_params![91])]
    #[test_case(named("Red", true, true), csi_params![101])]
    #[test_case(named("brightwhite", false, true), csi_params![107])]
    #[test_case(ColorSpec::Ansi256 { id: 0, bg: false }, csi_params![38, 5, 0])]
    #[test_case(ColorSpec::Ansi256 { id: 255, bg: true }, csi_params![48, 5, 255])]
    #[test_case(ColorSpec::Rgb { red: 1, green: 2, blue: 3, bg: false }, csi_params![38, 2, 1, 2, 3])]
    #[test_case(ColorSpec::Rgb { red: 255, green: 255, blue: 0, bg: true }, csi_params![48, 2, 255, 255, 0])]
    #[test_case(ColorSpec::Default { bg: false }, csi_params![39])]
    #[test_case(ColorSpec::Default { bg: true }, csi_params![49])]
    fn test_to_params(spec: ColorSpec, expected: InlineVecCsiParams) {
        assert_eq!(spec.to_params(), Ok(expected));
    }

    #[test]
    fn test_to_params_invalid() {
        assert_eq!(
            named("bogus", false, false).to_params(),
            Err(InvalidArgumentError::UnknownColorName {
                name: "bogus".to_string()
            })
        );
        assert_eq!(
            ColorSpec::Ansi256 { id: 256, bg: false }.to_params(),
            Err(InvalidArgumentError::Ansi256IndexOutOfRange { id: 256 })
        );
        assert_eq!(
            ColorSpec::Rgb {
                red: 0,
                green: -1,
                blue: 0,
                bg: true
            }
            .to_params(),
            Err(InvalidArgumentError::RgbChannelOutOfRange {
                red: 0,
                green: -1,
                blue: 0
            })
        );
    }
}
