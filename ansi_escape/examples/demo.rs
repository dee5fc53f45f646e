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

//! Run with `RUST_LOG=trace cargo run --example demo` to see every emitted sequence
//! logged to `stderr`.

use r3bl_ansi_escape::{ANSI16_COLOR_TABLE, FontStyle, color, font, global_emitter};
use strum::IntoEnumIterator;
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let emitter = global_emitter::get();

    // Every font style, each one turned on and then back off.
    {
        for style in FontStyle::iter() {
            font::toggle(emitter, style, true);
            print!("{style}");
            font::toggle(emitter, style, false);
            print!(" ");
        }
        font::reset_all(emitter);
        println!();
    }

    // The 16 named colors, as foreground and then as background.
    {
        for bg in [false, true] {
            for (name, _) in ANSI16_COLOR_TABLE.iter() {
                color::color16(emitter, name, bg)?;
                print!(" {name} ");
            }
            font::reset_all(emitter);
            println!();
        }
    }

    // The 256 color palette, 16 per row.
    {
        for id in 0..=255 {
            color::color256(emitter, id, true)?;
            print!("{id:>4}");
            if id % 16 == 15 {
                color::default_color(emitter, true);
                println!();
            }
        }
    }

    // A truecolor gradient.
    {
        for step in 0..64 {
            color::color24bit(emitter, step * 4, 128, 255 - step * 4, true)?;
            print!(" ");
        }
        font::reset_all(emitter);
        println!();
    }

    // Return only mode: the sequence is built but not printed.
    {
        global_emitter::disable();
        let sequence = color::color24bit(emitter, 255, 0, 0, false)?;
        global_emitter::enable();
        println!("> Built without printing: {sequence:?}");
    }

    // An out of range color is reported, and nothing is printed for it.
    {
        let result = color::color256(emitter, 256, false);
        println!("> color256(256) = {result:?}");
    }

    Ok(())
}
