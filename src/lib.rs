/*
 *   Copyright (c) 2025 R3BL LLC
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

//! # termdeco
//!
//! Cross-platform console text decoration. Wrap any [`std::fmt::Display`]
//! value in a [Decorator] using chained style calls, then print it with the
//! [tprint!] family of macros:
//!
//! ```rust
//! use termdeco::*;
//!
//! let styled = red("hello").bg_green().bold();
//! assert_eq!(tformat!("{styled}"), "\x1b[31;42;1mhello\x1b[0m");
//! let _ = tprintln!("{styled}");
//! ```
//!
//! On ANSI-capable terminals the decorated text is written as-is. On legacy
//! Windows consoles that do not interpret ANSI escape sequences, the [tprint!]
//! family re-parses the escape sequences out of the formatted string and
//! replays them as native `SetConsoleTextAttribute` calls interleaved with
//! literal writes, so the visual effect is the same. See [translate] for the
//! replay state machine.
//!
//! Writes to destinations other than the two standard streams ([fwrite] and
//! [tfwrite!]) always receive the raw escape-bearing bytes, untranslated.
//!
//! A later style call overwrites an earlier one of the same category, so
//! `red(v).green()` prints `v` in green:
//!
//! ```rust
//! use termdeco::*;
//!
//! assert_eq!(tformat!("{}", red("v").green()), "\x1b[32mv\x1b[0m");
//! ```

// Attach the following files to the library module.
pub mod ansi_color;
pub mod char_attr;
pub mod deco_error;
pub mod decorator;
pub mod print;
pub mod sgr_code;
pub mod stream_defaults;
pub mod translator;

mod sys;

// Re-export.
pub use ansi_color::*;
pub use char_attr::*;
pub use deco_error::*;
pub use decorator::*;
pub use print::*;
pub use sgr_code::*;
pub use stream_defaults::*;
pub use translator::*;
