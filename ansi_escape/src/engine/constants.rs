// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Byte and string constants shared by the sequence engine and the command catalogs.
//!
//! More info:
//! - <https://gist.github.com/fnky/458719343aabd01cfb17a3a4f7296797>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code>
//! - <https://vt100.net/docs/vt510-rm/contents.html>

use const_format::concatcp;

/// The escape control byte (0x1B) that every sequence starts with.
pub const ESC: char = '\x1b';
pub const ESC_STR: &str = "\x1b";

/// Start marker of a CSI (Control Sequence Introducer) sequence, written after [`ESC`].
pub const CSI_START: &str = "[";

/// Separator between the parameters of a CSI sequence.
pub const CSI_PARAM_SEPARATOR: char = ';';

/// SGR (Select Graphic Rendition) command character. Default end marker.
pub const SGR_END: &str = "m";

// ESC single byte finals.

/// ESC 7 (DECSC): Save cursor position.
pub const DECSC_SAVE_CURSOR: u8 = b'7';

/// ESC 8 (DECRC): Restore cursor position.
pub const DECRC_RESTORE_CURSOR: u8 = b'8';

/// ESC M (RI): Reverse index, moves the cursor up one line and scrolls if needed.
pub const RI_REVERSE_INDEX_UP: u8 = b'M';

pub const SEQ_CURSOR_HOME: &str = concatcp!(ESC_STR, CSI_START, CUP_POSITION);
pub const SEQ_SAVE_CURSOR_DEC: &str = concatcp!(ESC_STR, DECSC_SAVE_CURSOR as char);
pub const SEQ_RESTORE_CURSOR_DEC: &str = concatcp!(ESC_STR, DECRC_RESTORE_CURSOR as char);
pub const SEQ_REVERSE_INDEX_UP: &str = concatcp!(ESC_STR, RI_REVERSE_INDEX_UP as char);

// CSI command characters.

/// CUP: Cursor position, `row;col H`.
pub const CUP_POSITION: &str = "H";
/// HVP: Horizontal and vertical position, `row;col f`.
pub const HVP_POSITION: &str = "f";
/// CHA: Cursor horizontal absolute.
pub const CHA_COLUMN: &str = "G";
pub const CUU_UP: &str = "A";
pub const CUD_DOWN: &str = "B";
pub const CUF_FORWARD: &str = "C";
pub const CUB_BACK: &str = "D";
/// CNL: Cursor next line.
pub const CNL_NEXT_LINE: &str = "E";
/// CPL: Cursor previous line.
pub const CPL_PREV_LINE: &str = "F";
/// DSR: Device status report.
pub const DSR_REPORT: &str = "n";
/// SCP: Save cursor position (SCO).
pub const SCP_SAVE_CURSOR: &str = "s";
/// RCP: Restore cursor position (SCO).
pub const RCP_RESTORE_CURSOR: &str = "u";
/// ED: Erase in display.
pub const ED_ERASE_DISPLAY: &str = "J";
/// EL: Erase in line.
pub const EL_ERASE_LINE: &str = "K";

/// DSR parameter that asks the terminal to report the cursor position.
pub const DSR_CURSOR_POSITION: u16 = 6;

// Mode set / reset.

pub const MODE_SET: &str = "h";
pub const MODE_RESET: &str = "l";

/// Prefix of a DEC private mode parameter, eg: `?25`.
pub const PRIVATE_MODE_PREFIX: char = '?';

/// Prefix of a screen mode parameter, eg: `=13`.
pub const SCREEN_MODE_PREFIX: char = '=';

// DEC private modes.

/// Text cursor enable mode (DECTCEM) - DEC mode 25.
pub const SHOW_CURSOR_DEC: u16 = 25;

/// Save / restore screen - DEC mode 47.
///
/// The predecessor of [`ALT_SCREEN_BUFFER`]. It swaps the screen content but does not
/// save the cursor.
pub const SAVE_SCREEN_DEC: u16 = 47;

/// Alternate Screen Buffer Mode - DEC mode 1049.
///
/// - When set: Use alternate screen buffer (preserves main screen content)
/// - When reset: Use main screen buffer (default)
pub const ALT_SCREEN_BUFFER: u16 = 1049;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{SEQ_CURSOR_HOME, SEQ_RESTORE_CURSOR_DEC, SEQ_REVERSE_INDEX_UP,
                SEQ_SAVE_CURSOR_DEC};

    #[test]
    fn test_fixed_sequences() {
        assert_eq!(SEQ_CURSOR_HOME, "\x1b[H");
        assert_eq!(SEQ_SAVE_CURSOR_DEC, "\x1b7");
        assert_eq!(SEQ_RESTORE_CURSOR_DEC, "\x1b8");
        assert_eq!(SEQ_REVERSE_INDEX_UP, "\x1bM");
    }
}
