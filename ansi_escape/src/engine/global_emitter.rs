// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Process wide [`AnsiEmitter`] that writes to `stdout`, for callers that don't want to
//! thread an emitter through their code. Emission starts out enabled, and lives for the
//! lifetime of the process.
//!
//! ```
//! use r3bl_ansi_escape::{cursor, global_emitter};
//!
//! global_emitter::disable();
//! let it = cursor::move_up(global_emitter::get(), 3);
//! assert_eq!(it, "\x1b[3A");
//! ```
//!
//! # Testing support
//!
//! The [serial_test](https://crates.io/crates/serial_test) crate is used to test this
//! module. In any test that toggles the global emission mode, please use the `#[serial]`
//! attribute to annotate that test. Otherwise there will be flakiness in the test results
//! (tests are run in parallel using many threads). Tests that don't need the global
//! emitter should make their own [`AnsiEmitter`] instead.

use std::sync::LazyLock;

use crate::AnsiEmitter;

static GLOBAL_EMITTER: LazyLock<AnsiEmitter> = LazyLock::new(AnsiEmitter::new_stdout);

#[must_use]
pub fn get() -> &'static AnsiEmitter { &GLOBAL_EMITTER }

pub fn set(enabled: bool) { get().set_emission(enabled); }

pub fn enable() { set(true); }

pub fn disable() { set(false); }

#[must_use]
pub fn is_enabled() -> bool { get().is_emission_enabled() }
