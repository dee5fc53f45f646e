/*
 *   Copyright (c) 2024-2026 R3BL LLC
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

use std::{fmt::{Debug, Formatter},
          io::Write,
          sync::{Arc, MutexGuard, PoisonError}};

/// Disambiguate the type of `StdMutex` from other mutex types.
pub type StdMutex<T> = std::sync::Mutex<T>;

/// Type alias for a `Send`-able output device (stdout, stderr, a test mock, etc).
pub type SendRawTerminal = dyn Write + Send;
/// Type alias for a `Send`-able raw terminal wrapped in an `Arc<StdMutex>`.
pub type SafeRawTerminal = Arc<StdMutex<SendRawTerminal>>;

pub type LockedOutputDevice<'a> = &'a mut dyn Write;

/// Macro to simplify locking and getting a mutable reference to the output device.
/// Don't call this again in the same scope, it will deadlock! A safe approach is
/// to use this macro in a separate block scope.
///
/// ```
/// use r3bl_ansi_escape::{LockedOutputDevice, OutputDevice, lock_output_device_as_mut};
///
/// let device = OutputDevice::new_with_writer(Vec::<u8>::new());
/// { // Start a new block scope to avoid deadlock.
///     let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(device);
///     let _ = mut_ref.write_all(b"\x1b[0m");
/// } // The lock is released here.
/// ```
#[macro_export]
macro_rules! lock_output_device_as_mut {
    ($device:expr) => {
        &mut *$device.lock()
    };
}

/// This struct represents the sink that escape sequences are written to.
/// - It is safe to clone, all the clones write to the same sink.
/// - It defaults to `stdout`. Tests swap in an in memory writer with
///   [`Self::new_with_writer()`].
#[derive(Clone)]
pub struct OutputDevice {
    pub resource: SafeRawTerminal,
}

impl Default for OutputDevice {
    fn default() -> Self { Self::new_stdout() }
}

impl Debug for OutputDevice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputDevice").finish_non_exhaustive()
    }
}

impl OutputDevice {
    #[must_use]
    pub fn new_stdout() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(std::io::stdout())),
        }
    }

    #[must_use]
    pub fn new_stderr() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(std::io::stderr())),
        }
    }

    pub fn new_with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            resource: Arc::new(StdMutex::new(writer)),
        }
    }
}

impl OutputDevice {
    /// Locks the output device for writing. To use it, use the following code:
    ///
    /// ```
    /// use r3bl_ansi_escape::{LockedOutputDevice, OutputDevice};
    ///
    /// let device = OutputDevice::new_stdout();
    /// let mut_ref: LockedOutputDevice<'_> = &mut *device.lock();
    /// let _ = mut_ref.write_all(b"");
    /// ```
    ///
    /// A poisoned lock is recovered, since the sink holds no invariant that a panic in
    /// another thread could break.
    pub fn lock(&self) -> MutexGuard<'_, SendRawTerminal> {
        self.resource.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Writes all of `bytes` and flushes, so the sequence takes effect right away even
    /// though it has no trailing newline.
    ///
    /// # Errors
    ///
    /// Returns the [`std::io::Error`] of the underlying writer.
    pub fn write_all_and_flush(&self, bytes: &[u8]) -> std::io::Result<()> {
        let out = lock_output_device_as_mut!(self);
        out.write_all(bytes)?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use r3bl_test_fixtures::StdoutMock;

    use super::{LockedOutputDevice, OutputDevice};

    #[test]
    fn test_stdout_output_device() {
        let output_device = OutputDevice::new_stdout();
        let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(output_device);
        drop(mut_ref.write_all(b""));
    }

    #[test]
    fn test_clones_share_the_writer() {
        let stdout_mock = StdoutMock::new();
        let output_device = OutputDevice::new_with_writer(stdout_mock.clone());
        let output_device_clone = output_device.clone();

        output_device.write_all_and_flush(b"\x1b[1A").unwrap();
        output_device_clone.write_all_and_flush(b"\x1b[2B").unwrap();

        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "\x1b[1A\x1b[2B");
    }
}
