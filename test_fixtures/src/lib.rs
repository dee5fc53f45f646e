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

//! # Introduction
//!
//! This is a test fixtures library that provides reusable components for testing
//! terminal output. It is intended to be a
//! [`dev-dependency`](https://doc.rust-lang.org/cargo/reference/specifying-dependencies.html#dev-dependencies)
//! for other crates in the monorepo.
//!
//! # `stdout_fixtures`
//!
//! [`StdoutMock`] stands in for `stdout`. Hand a clone of it to whatever writes the
//! escape sequences, and inspect the bytes afterwards:
//!
//! ```
//! use std::io::Write;
//!
//! use r3bl_test_fixtures::StdoutMock;
//!
//! let mut stdout_mock = StdoutMock::default();
//! let stdout_mock_clone = stdout_mock.clone(); // Points to the same inner value.
//!
//! stdout_mock.write_all(b"\x1b[31mhello\x1b[0m").unwrap();
//!
//! assert_eq!(stdout_mock_clone.get_copy_of_buffer_as_string_strip_ansi(), "hello");
//! ```

// https://github.com/rust-lang/rust-clippy/blob/master/clippy_lints/src/unwrap_in_result.rs
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod stdout_mock;

// Re-export.
pub use stdout_mock::*;
