// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The 16 named colors: 8 standard ones (SGR 30-37) and their 8 bright variants (SGR
//! 90-97). Background codes are the foreground ones plus [`BACKGROUND_OFFSET`].
//!
//! More info: <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>

/// Adding this to a foreground code gives the matching background code.
pub const BACKGROUND_OFFSET: u8 = 10;

/// Prefix that selects the bright variant of a standard color name.
pub const BRIGHT_PREFIX: &str = "bright";

/// Name to foreground SGR code. Names are lowercase, lookups ignore case. Adding a color
/// is a one line change here.
pub static ANSI16_COLOR_TABLE: [(&str, u8); 16] = [
    ("black", 30),
    ("red", 31),
    ("green", 32),
    ("yellow", 33),
    ("blue", 34),
    ("magenta", 35),
    ("cyan", 36),
    ("white", 37),
    ("brightblack", 90),
    ("brightred", 91),
    ("brightgreen", 92),
    ("brightyellow", 93),
    ("brightblue", 94),
    ("brightmagenta", 95),
    ("brightcyan", 96),
    ("brightwhite", 97),
];

/// Foreground SGR code for `name`, ignoring ASCII case.
#[must_use]
pub fn lookup_ansi16_code(name: &str) -> Option<u8> {
    ANSI16_COLOR_TABLE
        .iter()
        .find(|(table_name, _)| table_name.eq_ignore_ascii_case(name))
        .map(|(_, code)| *code)
}

/// Foreground SGR code for the bright variant of `name`, eg: `red` resolves
/// `brightred`.
#[must_use]
pub fn lookup_bright_ansi16_code(name: &str) -> Option<u8> {
    lookup_ansi16_code(&format!("{BRIGHT_PREFIX}{name}"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::{ANSI16_COLOR_TABLE, lookup_ansi16_code, lookup_bright_ansi16_code};

    #[test_case("black", 30)]
    #[test_case("red", 31)]
    #[test_case("RED", 31)]
    #[test_case("White", 37)]
    #[test_case("brightBlack", 90)]
    #[test_case("BRIGHTWHITE", 97)]
    fn test_lookup(name: &str, code: u8) {
        assert_eq!(lookup_ansi16_code(name), Some(code));
    }

    #[test_case("bogus")]
    #[test_case("")]
    #[test_case("bright")]
    #[test_case("bright red")]
    #[test_case("default")]
    fn test_lookup_unknown(name: &str) {
        assert_eq!(lookup_ansi16_code(name), None);
    }

    #[test]
    fn test_lookup_bright() {
        assert_eq!(lookup_bright_ansi16_code("Cyan"), Some(96));
        assert_eq!(lookup_bright_ansi16_code("brightcyan"), None);
    }

    #[test]
    fn test_table_codes_are_standard_and_bright_ranges() {
        let (standard, bright) = ANSI16_COLOR_TABLE.split_at(8);
        assert!(standard.iter().all(|(_, code)| (30..=37).contains(code)));
        assert!(bright.iter().all(|(_, code)| (90..=97).contains(code)));
        for ((name, code), (bright_name, bright_code)) in standard.iter().zip(bright) {
            assert_eq!(*bright_name, format!("bright{name}"));
            assert_eq!(*bright_code, code + 60);
        }
    }
}
