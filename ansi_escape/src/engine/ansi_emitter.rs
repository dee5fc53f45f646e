// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::Write,
          sync::{Arc,
                 atomic::{AtomicBool, Ordering}}};

use crate::{CSI_START, CsiParam, OutputDevice, SGR_END, format_sequence};

/// The sequence engine. It is the only thing that writes escape sequences to an
/// [`OutputDevice`], and every command catalog goes through it.
///
/// It holds the emission mode:
/// - **enabled** (the default): every sequence that is built is written to the output
///   device, with no trailing newline, and also returned.
/// - **disabled**: the sequence is only returned. Callers can compose sequences
///   themselves without anything reaching the terminal.
///
/// The returned string is the same in both modes.
///
/// Clones share the output device and the emission mode. Independent emitters (eg: one
/// per test) are created with [`Self::new_with_output_device()`] or
/// [`Self::new_with_writer()`]. For the process wide one, see
/// [`crate::global_emitter`].
///
/// ```
/// use r3bl_ansi_escape::{AnsiEmitter, csi_params};
///
/// let emitter = AnsiEmitter::new_with_writer(Vec::<u8>::new());
/// emitter.disable_emission();
/// assert_eq!(emitter.build_sgr(&csi_params![1]), "\x1b[1m");
/// assert_eq!(emitter.write_raw("\x1b7"), "\x1b7");
/// ```
#[derive(Debug, Clone)]
pub struct AnsiEmitter {
    output_device: OutputDevice,
    emit_enabled: Arc<AtomicBool>,
}

impl Default for AnsiEmitter {
    fn default() -> Self { Self::new_stdout() }
}

impl AnsiEmitter {
    #[must_use]
    pub fn new_stdout() -> Self { Self::new_with_output_device(OutputDevice::new_stdout()) }

    #[must_use]
    pub fn new_with_output_device(output_device: OutputDevice) -> Self {
        Self {
            output_device,
            emit_enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn new_with_writer(writer: impl Write + Send + 'static) -> Self {
        Self::new_with_output_device(OutputDevice::new_with_writer(writer))
    }

    #[must_use]
    pub fn output_device(&self) -> &OutputDevice { &self.output_device }
}

/// Emission mode.
impl AnsiEmitter {
    /// Only the last value set matters, calling this repeatedly with the same value is
    /// the same as calling it once.
    pub fn set_emission(&self, enabled: bool) {
        self.emit_enabled.store(enabled, Ordering::SeqCst);
        tracing::debug!(enabled, "ANSI escape sequence emission mode set");
    }

    pub fn enable_emission(&self) { self.set_emission(true); }

    pub fn disable_emission(&self) { self.set_emission(false); }

    #[must_use]
    pub fn is_emission_enabled(&self) -> bool { self.emit_enabled.load(Ordering::SeqCst) }
}

/// Build and (maybe) emit.
impl AnsiEmitter {
    /// Builds `ESC + start + (params joined by ';') + end`, writes it to the output device
    /// if emission is enabled, and returns it.
    pub fn build(&self, params: &[CsiParam], start: &str, end: &str) -> String {
        let sequence = format_sequence(params, start, end);
        self.emit(&sequence);
        sequence
    }

    /// [`Self::build()`] with the CSI start marker and the given command character.
    pub fn build_csi(&self, params: &[CsiParam], end: &str) -> String {
        self.build(params, CSI_START, end)
    }

    /// [`Self::build()`] with the default markers, ie: an SGR sequence `ESC[...m`.
    pub fn build_sgr(&self, params: &[CsiParam]) -> String {
        self.build(params, CSI_START, SGR_END)
    }

    /// Same emission rules as [`Self::build()`], for fixed sequences that are not a
    /// parameter list, eg: `ESC7` or `ESCM`.
    pub fn write_raw(&self, text: &str) -> String {
        self.emit(text);
        text.to_string()
    }

    fn emit(&self, text: &str) {
        if !self.is_emission_enabled() {
            return;
        }

        tracing::trace!(sequence = ?text, "emit ANSI escape sequence");

        if let Err(error) = self.output_device.write_all_and_flush(text.as_bytes()) {
            tracing::warn!(%error, sequence = ?text, "could not write ANSI escape sequence");
        }
    }
}
