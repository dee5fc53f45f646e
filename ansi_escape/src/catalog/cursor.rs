// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cursor positioning. Determines where the next character is drawn.
//!
//! Nothing here is range checked, the terminal clamps out of range values itself. And
//! nothing tracks where the cursor actually is: every function just emits a command.

use crate::{AnsiEmitter, CHA_COLUMN, CNL_NEXT_LINE, CPL_PREV_LINE, CUB_BACK, CUD_DOWN,
            CUF_FORWARD, CUP_POSITION, CUU_UP, CsiParam, DSR_CURSOR_POSITION,
            DSR_REPORT, HVP_POSITION, MODE_RESET, MODE_SET, PRIVATE_MODE_PREFIX,
            RCP_RESTORE_CURSOR, SCP_SAVE_CURSOR, SEQ_CURSOR_HOME,
            SEQ_RESTORE_CURSOR_DEC, SEQ_REVERSE_INDEX_UP, SEQ_SAVE_CURSOR_DEC,
            SHOW_CURSOR_DEC, csi_params};

/// The count to pass to the relative moves when there's no particular count in mind.
pub const DEFAULT_MOVE_COUNT: i64 = 1;

/// `ESC[H`, moves to row 1, column 1.
pub fn home(emitter: &AnsiEmitter) -> String { emitter.write_raw(SEQ_CURSOR_HOME) }

/// Moves to `row`, `column` (both 1 based). Terminals treat both forms the same:
/// - `hvp == false`: `ESC[{row};{column}H` (CUP).
/// - `hvp == true`: `ESC[{row};{column}f` (HVP).
pub fn position(emitter: &AnsiEmitter, row: i64, column: i64, hvp: bool) -> String {
    let end = if hvp { HVP_POSITION } else { CUP_POSITION };
    emitter.build_csi(&csi_params![row, column], end)
}

/// `ESC[{column}G`
pub fn column(emitter: &AnsiEmitter, column: i64) -> String {
    emitter.build_csi(&csi_params![column], CHA_COLUMN)
}

pub fn move_up(emitter: &AnsiEmitter, rows: i64) -> String {
    emitter.build_csi(&csi_params![rows], CUU_UP)
}

pub fn move_down(emitter: &AnsiEmitter, rows: i64) -> String {
    emitter.build_csi(&csi_params![rows], CUD_DOWN)
}

pub fn move_right(emitter: &AnsiEmitter, columns: i64) -> String {
    emitter.build_csi(&csi_params![columns], CUF_FORWARD)
}

pub fn move_left(emitter: &AnsiEmitter, columns: i64) -> String {
    emitter.build_csi(&csi_params![columns], CUB_BACK)
}

/// Start of the line `rows` down.
pub fn start_down(emitter: &AnsiEmitter, rows: i64) -> String {
    emitter.build_csi(&csi_params![rows], CNL_NEXT_LINE)
}

/// Start of the line `rows` up.
pub fn start_up(emitter: &AnsiEmitter, rows: i64) -> String {
    emitter.build_csi(&csi_params![rows], CPL_PREV_LINE)
}

/// `ESC[6n`. The terminal answers on its input as `ESC[{row};{column}R`, reading that
/// reply is up to the caller.
pub fn request_position(emitter: &AnsiEmitter) -> String {
    emitter.build_csi(&csi_params![DSR_CURSOR_POSITION], DSR_REPORT)
}

/// - `alt == false`: `ESC7` (DECSC).
/// - `alt == true`: `ESC[s` (SCO).
pub fn save_position(emitter: &AnsiEmitter, alt: bool) -> String {
    if alt {
        emitter.build_csi(&csi_params![], SCP_SAVE_CURSOR)
    } else {
        emitter.write_raw(SEQ_SAVE_CURSOR_DEC)
    }
}

/// - `alt == false`: `ESC8` (DECRC).
/// - `alt == true`: `ESC[u` (SCO).
pub fn restore_position(emitter: &AnsiEmitter, alt: bool) -> String {
    if alt {
        emitter.build_csi(&csi_params![], RCP_RESTORE_CURSOR)
    } else {
        emitter.write_raw(SEQ_RESTORE_CURSOR_DEC)
    }
}

/// `ESCM`. Moves up one line, scrolling the screen down when already on the top line.
pub fn scroll_up(emitter: &AnsiEmitter) -> String { emitter.write_raw(SEQ_REVERSE_INDEX_UP) }

pub fn hide(emitter: &AnsiEmitter) -> String {
    let param = CsiParam::prefixed(PRIVATE_MODE_PREFIX, SHOW_CURSOR_DEC);
    emitter.build_csi(&[param], MODE_RESET)
}

pub fn show(emitter: &AnsiEmitter) -> String {
    let param = CsiParam::prefixed(PRIVATE_MODE_PREFIX, SHOW_CURSOR_DEC);
    emitter.build_csi(&[param], MODE_SET)
}
