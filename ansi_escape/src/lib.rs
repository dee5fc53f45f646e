/*
 *   Copyright (c) 2026 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! # Introduction
//!
//! Rust crate to build ANSI / VT100 escape sequences, and (optionally) write them to
//! `stdout` as they are built. It turns intents like "move the cursor up 3 rows" or "set
//! the foreground to RGB(10, 20, 30)" into the exact bytes a terminal understands.
//!
//! It does not parse escape sequences, detect what the terminal supports, or keep
//! track of where the cursor is. It only emits commands.
//!
//! # How it works
//!
//! There are two layers:
//!
//! 1. The sequence engine, [`AnsiEmitter`]. It serializes a parameter list as
//!    `ESC + start + (params joined by ';') + end` and, if its emission mode is enabled,
//!    writes the result to its [`OutputDevice`] (`stdout` by default). Either way the
//!    sequence is returned.
//! 2. The command catalogs, which are modules of free functions that each make one call
//!    on the engine:
//!    - [`cursor`]: positioning, relative moves, save / restore, hide / show.
//!    - [`erase`]: parts of the screen or of the current line.
//!    - [`color`]: 16 named colors, the default color, 256 colors, truecolor.
//!    - [`font`]: bold, dim, italic, underline, etc, and reset.
//!    - [`screen`]: save / restore, alternate screen buffer, screen modes.
//!
//! Only the [`color`] functions can fail, with an [`InvalidArgumentError`], and they
//! fail before anything is written.
//!
//! # Example usage
//!
//! ```rust
//! use r3bl_ansi_escape::{AnsiEmitter, color, cursor, erase, font};
//!
//! // Write to an in memory buffer instead of stdout, and only return the sequences.
//! let emitter = AnsiEmitter::new_with_writer(Vec::<u8>::new());
//! emitter.disable_emission();
//!
//! assert_eq!(cursor::move_up(&emitter, 3), "\x1b[3A");
//! assert_eq!(erase::all(&emitter), "\x1b[2J");
//! assert_eq!(font::bold(&emitter, true), "\x1b[1m");
//! assert_eq!(color::color16(&emitter, "red", false).unwrap(), "\x1b[31m");
//! assert_eq!(color::color24bit(&emitter, 255, 0, 0, true).unwrap(), "\x1b[48;2;255;0;0m");
//! assert!(color::color256(&emitter, 256, false).is_err());
//! ```
//!
//! For code that just wants to print to `stdout`, there's the process wide
//! [`global_emitter`].

// https://github.com/rust-lang/rust-clippy/blob/master/clippy_lints/src/unwrap_in_result.rs
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod catalog;
pub mod engine;
pub mod error;

// Re-export.
pub use catalog::*;
pub use engine::*;
pub use error::*;
