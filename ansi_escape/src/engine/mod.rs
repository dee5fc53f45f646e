// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod ansi_emitter;
pub mod constants;
pub mod csi_param;
pub mod global_emitter;
pub mod output_device;

// Re-export.
pub use ansi_emitter::*;
pub use constants::*;
pub use csi_param::{sizing::*, *};
pub use output_device::*;
