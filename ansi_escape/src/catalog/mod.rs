// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Command catalogs. Each module maps an intent to exactly one call on an
//! [`crate::AnsiEmitter`]. They are namespaces of free functions, so they are attached
//! as modules, eg: `cursor::move_up(&emitter, 3)`.

// Attach sources.
pub mod ansi16_color;
pub mod color;
pub mod color_spec;
pub mod cursor;
pub mod erase;
pub mod font;
pub mod screen;

// Re-export.
pub use ansi16_color::*;
pub use color_spec::*;
pub use font::FontStyle;
