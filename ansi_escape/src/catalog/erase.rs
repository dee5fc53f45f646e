// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Erasing parts of the screen (ED, command `J`) and of the current line (EL, command
//! `K`). The cursor does not move.
//!
//! The "to end" variants come in two forms: with an explicit `0` parameter, and with the
//! parameter left out (`alt == true`). Conforming terminals treat them the same, but
//! some mishandle one of them, so both are available.

use crate::{AnsiEmitter, ED_ERASE_DISPLAY, EL_ERASE_LINE, InlineVecCsiParams,
            csi_params};

pub mod erase_params {
    pub const TO_END: i64 = 0;
    pub const TO_START: i64 = 1;
    pub const ALL: i64 = 2;
    /// Only for ED: the scrollback buffer.
    pub const SAVED_LINES: i64 = 3;
}

fn to_end_params(alt: bool) -> InlineVecCsiParams {
    if alt {
        csi_params![]
    } else {
        csi_params![erase_params::TO_END]
    }
}

/// From the cursor to the end of the screen.
pub fn to_end_of_page(emitter: &AnsiEmitter, alt: bool) -> String {
    emitter.build_csi(&to_end_params(alt), ED_ERASE_DISPLAY)
}

/// From the cursor to the start of the screen.
pub fn to_start_of_page(emitter: &AnsiEmitter) -> String {
    emitter.build_csi(&csi_params![erase_params::TO_START], ED_ERASE_DISPLAY)
}

/// The whole screen.
pub fn all(emitter: &AnsiEmitter) -> String {
    emitter.build_csi(&csi_params![erase_params::ALL], ED_ERASE_DISPLAY)
}

/// The lines saved in the scrollback buffer.
pub fn saved_lines(emitter: &AnsiEmitter) -> String {
    emitter.build_csi(&csi_params![erase_params::SAVED_LINES], ED_ERASE_DISPLAY)
}

pub fn to_end_of_line(emitter: &AnsiEmitter, alt: bool) -> String {
    emitter.build_csi(&to_end_params(alt), EL_ERASE_LINE)
}

pub fn to_start_of_line(emitter: &AnsiEmitter) -> String {
    emitter.build_csi(&csi_params![erase_params::TO_START], EL_ERASE_LINE)
}

pub fn current_line(emitter: &AnsiEmitter) -> String {
    emitter.build_csi(&csi_params![erase_params::ALL], EL_ERASE_LINE)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use r3bl_test_fixtures::StdoutMock;
    use test_case::test_case;

    use super::{all, current_line, saved_lines, to_end_of_line, to_end_of_page,
                to_start_of_line, to_start_of_page};
    use crate::AnsiEmitter;

    fn new_mock_emitter() -> (AnsiEmitter, StdoutMock) {
        let stdout_mock = StdoutMock::new();
        (AnsiEmitter::new_with_writer(stdout_mock.clone()), stdout_mock)
    }

    #[test_case(to_start_of_page, "\x1b[1J")]
    #[test_case(all, "\x1b[2J")]
    #[test_case(saved_lines, "\x1b[3J")]
    #[test_case(to_start_of_line, "\x1b[1K")]
    #[test_case(current_line, "\x1b[2K")]
    fn test_fixed_erase(fun: fn(&AnsiEmitter) -> String, expected: &str) {
        let (emitter, stdout_mock) = new_mock_emitter();
        assert_eq!(fun(&emitter), expected);
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), expected);
    }

    #[test]
    fn test_to_end_both_forms() {
        let (emitter, _) = new_mock_emitter();
        assert_eq!(to_end_of_page(&emitter, false), "\x1b[0J");
        assert_eq!(to_end_of_page(&emitter, true), "\x1b[J");
        assert_eq!(to_end_of_line(&emitter, false), "\x1b[0K");
        assert_eq!(to_end_of_line(&emitter, true), "\x1b[K");
    }

    #[test]
    fn test_erase_strips_to_nothing() {
        let (emitter, stdout_mock) = new_mock_emitter();
        all(&emitter);
        current_line(&emitter);
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string_strip_ansi(), "");
    }
}
