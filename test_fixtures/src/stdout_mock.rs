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

use std::{io::{Result, Write},
          sync::{Arc, Mutex, MutexGuard, PoisonError}};

use strip_ansi_escapes::strip;

/// In memory replacement for `stdout`. Cloning it is cheap, since it only contains an
/// `Arc<Mutex<Vec<u8>>>`: every clone writes into, and reads from, the same buffer.
///
/// The main constructors are:
/// - [`StdoutMock::default`]
/// - [`StdoutMock::new`]
#[derive(Clone, Debug, Default)]
pub struct StdoutMock {
    pub buffer: Arc<Mutex<Vec<u8>>>,
}

impl StdoutMock {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// A panic in another test thread must not hide what was already captured.
    fn lock_buffer(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn get_copy_of_buffer(&self) -> Vec<u8> { self.lock_buffer().clone() }

    /// Invalid UTF-8 is replaced rather than reported, since escape sequences are ASCII.
    #[must_use]
    pub fn get_copy_of_buffer_as_string(&self) -> String {
        String::from_utf8_lossy(&self.lock_buffer()).into_owned()
    }

    #[must_use]
    pub fn get_copy_of_buffer_as_string_strip_ansi(&self) -> String {
        let stripped = strip(self.lock_buffer().as_slice());
        String::from_utf8_lossy(&stripped).into_owned()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.lock_buffer().is_empty() }

    pub fn clear(&self) { self.lock_buffer().clear(); }
}

impl Write for StdoutMock {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.lock_buffer().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}
