// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Screen buffer and screen mode control.
//!
//! More info: <https://gist.github.com/fnky/458719343aabd01cfb17a3a4f7296797#screen-modes>

use crate::{ALT_SCREEN_BUFFER, AnsiEmitter, CsiParam, MODE_RESET, MODE_SET,
            PRIVATE_MODE_PREFIX, SAVE_SCREEN_DEC, SCREEN_MODE_PREFIX};

fn private_mode(emitter: &AnsiEmitter, mode: u16, set: bool) -> String {
    let param = CsiParam::prefixed(PRIVATE_MODE_PREFIX, mode);
    emitter.build_csi(&[param], if set { MODE_SET } else { MODE_RESET })
}

/// `ESC[?47h`
pub fn save(emitter: &AnsiEmitter) -> String { private_mode(emitter, SAVE_SCREEN_DEC, true) }

/// `ESC[?47l`
pub fn restore(emitter: &AnsiEmitter) -> String {
    private_mode(emitter, SAVE_SCREEN_DEC, false)
}

/// `ESC[?1049h`, switches to the alternate screen buffer. Full screen apps use it so
/// that the shell's scrollback is left as it was when they exit.
pub fn enable_alt_buffer(emitter: &AnsiEmitter) -> String {
    private_mode(emitter, ALT_SCREEN_BUFFER, true)
}

/// `ESC[?1049l`
pub fn disable_alt_buffer(emitter: &AnsiEmitter) -> String {
    private_mode(emitter, ALT_SCREEN_BUFFER, false)
}

/// `ESC[={id}h` sets screen mode `id`, with `reset` it is `ESC[={id}l`. The id is not
/// checked, eg: 13 is 320 x 200 color graphics and 7 enables line wrapping.
pub fn mode(emitter: &AnsiEmitter, id: i64, reset: bool) -> String {
    let param = CsiParam::prefixed(SCREEN_MODE_PREFIX, id);
    emitter.build_csi(&[param], if reset { MODE_RESET } else { MODE_SET })
}
