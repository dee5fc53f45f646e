// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Text styling. Each style is turned on with its own SGR code and off with an "unset"
//! code. The unset codes are not unique, this is how the ANSI standard defines them:
//! - bold and dim are both turned off by 22.
//! - underline and double underline are both turned off by 24.
//!
//! More info: <https://en.wikipedia.org/wiki/ANSI_escape_code#Select_Graphic_Rendition_parameters>

use strum_macros::{Display, EnumCount, EnumIter};

use crate::{AnsiEmitter, csi_params};

/// SGR code that clears every color and style.
pub const SGR_RESET_ALL: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter)]
pub enum FontStyle {
    Bold,
    Dim,
    Italic,
    Underline,
    /// Not supported by many terminals, some of them render it as a single underline.
    DoubleUnderline,
    Blink,
    Reverse,
    Hidden,
    Strikethrough,
}

impl FontStyle {
    /// `(set, unset)` SGR codes.
    #[rustfmt::skip]
    #[must_use]
    pub fn codes(self) -> (u8, u8) {
        match self {
            FontStyle::Bold            => (1, 22),
            FontStyle::Dim             => (2, 22),
            FontStyle::Italic          => (3, 23),
            FontStyle::Underline       => (4, 24),
            FontStyle::DoubleUnderline => (21, 24),
            FontStyle::Blink           => (5, 25),
            FontStyle::Reverse         => (7, 27),
            FontStyle::Hidden          => (8, 28),
            FontStyle::Strikethrough   => (9, 29),
        }
    }

    #[must_use]
    pub fn code(self, on: bool) -> u8 {
        let (set, unset) = self.codes();
        if on { set } else { unset }
    }
}

/// `ESC[{code}m`, with the set code when `on`, else the unset code.
pub fn toggle(emitter: &AnsiEmitter, style: FontStyle, on: bool) -> String {
    emitter.build_sgr(&csi_params![style.code(on)])
}

pub fn bold(emitter: &AnsiEmitter, on: bool) -> String { toggle(emitter, FontStyle::Bold, on) }

pub fn dim(emitter: &AnsiEmitter, on: bool) -> String { toggle(emitter, FontStyle::Dim, on) }

pub fn italic(emitter: &AnsiEmitter, on: bool) -> String {
    toggle(emitter, FontStyle::Italic, on)
}

pub fn underline(emitter: &AnsiEmitter, on: bool) -> String {
    toggle(emitter, FontStyle::Underline, on)
}

pub fn double_underline(emitter: &AnsiEmitter, on: bool) -> String {
    toggle(emitter, FontStyle::DoubleUnderline, on)
}

pub fn blink(emitter: &AnsiEmitter, on: bool) -> String {
    toggle(emitter, FontStyle::Blink, on)
}

pub fn reverse(emitter: &AnsiEmitter, on: bool) -> String {
    toggle(emitter, FontStyle::Reverse, on)
}

pub fn hidden(emitter: &AnsiEmitter, on: bool) -> String {
    toggle(emitter, FontStyle::Hidden, on)
}

pub fn strikethrough(emitter: &AnsiEmitter, on: bool) -> String {
    toggle(emitter, FontStyle::Strikethrough, on)
}

/// `ESC[0m`, clears all colors and styles in one go.
pub fn reset_all(emitter: &AnsiEmitter) -> String {
    emitter.build_sgr(&csi_params![SGR_RESET_ALL])
}
