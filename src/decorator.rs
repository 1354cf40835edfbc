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

use std::fmt::{Display, Formatter, Result};

use crate::{AnsiColor, DecoError, SgrCode};

/// The main struct that we have to consider is `Decorator`. It pairs a
/// payload value with the decoration to print it with:
/// - `value` - any [Display] payload.
/// - `fg` / `bg` - one color slot each; a later style call overwrites an
///   earlier one of the same category (last-write-wins, never
///   accumulation).
/// - `bold` / `underline` - decoration flags.
///
/// Create one with a constructor function like [red] or [bg_green], then
/// chain further style calls on it. Each builder method takes the
/// decorator by value and returns it, so a chain reads left to right:
///
/// # Example usage:
///
/// ```rust
/// use termdeco::*;
///
/// let styled = red("hello").bg_green().bold();
/// println!("{styled}");
///
/// // A later call overwrites the earlier foreground.
/// assert_eq!(tformat!("{}", red("v").green()), "\x1b[32mv\x1b[0m");
/// ```
///
/// [Display] for `Decorator` emits the escape sequence prefix (nothing
/// when no styling is set), then renders `value` with the caller's own
/// width/precision/flags, then always appends `ESC[0m` so no styling
/// bleeds past the value even when none was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decorator<T> {
    pub value: T,
    pub fg: Option<AnsiColor>,
    pub bg: Option<AnsiColor>,
    pub bold: bool,
    pub underline: bool,
}

pub mod sizing {
    use smallstr::SmallString;

    /// A fully-populated sequence (`ESC [ 97;107;1;4 m`) is 13 bytes, so
    /// every reachable encoding stays in the inline buffer.
    pub const MAX_ESC_SEQ_SIZE: usize = 16;
    pub type EscSeqBuffer = SmallString<[u8; MAX_ESC_SEQ_SIZE]>;
}
pub use sizing::EscSeqBuffer;

impl<T> Decorator<T> {
    /// An undecorated payload. Style it with the chainable builder
    /// methods, eg: [Self::cyan()].
    pub fn new(value: T) -> Self {
        Decorator {
            value,
            fg: None,
            bg: None,
            bold: false,
            underline: false,
        }
    }
}

/// One free constructor per color (16 foreground, 16 background) plus
/// [bold], [underline] and its [underscore] alias, mirroring the chainable
/// builder methods on [Decorator].
mod constructor_fns {
    use super::*;

    #[rustfmt::skip] pub fn black<T>(value: T)          -> Decorator<T> { Decorator::new(value).black() }
    #[rustfmt::skip] pub fn red<T>(value: T)            -> Decorator<T> { Decorator::new(value).red() }
    #[rustfmt::skip] pub fn green<T>(value: T)          -> Decorator<T> { Decorator::new(value).green() }
    #[rustfmt::skip] pub fn yellow<T>(value: T)         -> Decorator<T> { Decorator::new(value).yellow() }
    #[rustfmt::skip] pub fn blue<T>(value: T)           -> Decorator<T> { Decorator::new(value).blue() }
    #[rustfmt::skip] pub fn magenta<T>(value: T)        -> Decorator<T> { Decorator::new(value).magenta() }
    #[rustfmt::skip] pub fn cyan<T>(value: T)           -> Decorator<T> { Decorator::new(value).cyan() }
    #[rustfmt::skip] pub fn white<T>(value: T)          -> Decorator<T> { Decorator::new(value).white() }
    #[rustfmt::skip] pub fn bright_black<T>(value: T)   -> Decorator<T> { Decorator::new(value).bright_black() }
    #[rustfmt::skip] pub fn bright_red<T>(value: T)     -> Decorator<T> { Decorator::new(value).bright_red() }
    #[rustfmt::skip] pub fn bright_green<T>(value: T)   -> Decorator<T> { Decorator::new(value).bright_green() }
    #[rustfmt::skip] pub fn bright_yellow<T>(value: T)  -> Decorator<T> { Decorator::new(value).bright_yellow() }
    #[rustfmt::skip] pub fn bright_blue<T>(value: T)    -> Decorator<T> { Decorator::new(value).bright_blue() }
    #[rustfmt::skip] pub fn bright_magenta<T>(value: T) -> Decorator<T> { Decorator::new(value).bright_magenta() }
    #[rustfmt::skip] pub fn bright_cyan<T>(value: T)    -> Decorator<T> { Decorator::new(value).bright_cyan() }
    #[rustfmt::skip] pub fn bright_white<T>(value: T)   -> Decorator<T> { Decorator::new(value).bright_white() }

    #[rustfmt::skip] pub fn bg_black<T>(value: T)          -> Decorator<T> { Decorator::new(value).bg_black() }
    #[rustfmt::skip] pub fn bg_red<T>(value: T)            -> Decorator<T> { Decorator::new(value).bg_red() }
    #[rustfmt::skip] pub fn bg_green<T>(value: T)          -> Decorator<T> { Decorator::new(value).bg_green() }
    #[rustfmt::skip] pub fn bg_yellow<T>(value: T)         -> Decorator<T> { Decorator::new(value).bg_yellow() }
    #[rustfmt::skip] pub fn bg_blue<T>(value: T)           -> Decorator<T> { Decorator::new(value).bg_blue() }
    #[rustfmt::skip] pub fn bg_magenta<T>(value: T)        -> Decorator<T> { Decorator::new(value).bg_magenta() }
    #[rustfmt::skip] pub fn bg_cyan<T>(value: T)           -> Decorator<T> { Decorator::new(value).bg_cyan() }
    #[rustfmt::skip] pub fn bg_white<T>(value: T)          -> Decorator<T> { Decorator::new(value).bg_white() }
    #[rustfmt::skip] pub fn bg_bright_black<T>(value: T)   -> Decorator<T> { Decorator::new(value).bg_bright_black() }
    #[rustfmt::skip] pub fn bg_bright_red<T>(value: T)     -> Decorator<T> { Decorator::new(value).bg_bright_red() }
    #[rustfmt::skip] pub fn bg_bright_green<T>(value: T)   -> Decorator<T> { Decorator::new(value).bg_bright_green() }
    #[rustfmt::skip] pub fn bg_bright_yellow<T>(value: T)  -> Decorator<T> { Decorator::new(value).bg_bright_yellow() }
    #[rustfmt::skip] pub fn bg_bright_blue<T>(value: T)    -> Decorator<T> { Decorator::new(value).bg_bright_blue() }
    #[rustfmt::skip] pub fn bg_bright_magenta<T>(value: T) -> Decorator<T> { Decorator::new(value).bg_bright_magenta() }
    #[rustfmt::skip] pub fn bg_bright_cyan<T>(value: T)    -> Decorator<T> { Decorator::new(value).bg_bright_cyan() }
    #[rustfmt::skip] pub fn bg_bright_white<T>(value: T)   -> Decorator<T> { Decorator::new(value).bg_bright_white() }

    #[rustfmt::skip] pub fn bold<T>(value: T)       -> Decorator<T> { Decorator::new(value).bold() }
    #[rustfmt::skip] pub fn underline<T>(value: T)  -> Decorator<T> { Decorator::new(value).underline() }
    #[rustfmt::skip] pub fn underscore<T>(value: T) -> Decorator<T> { Decorator::new(value).underscore() }
}
pub use constructor_fns::*;

mod builder_methods {
    use super::*;

    impl<T> Decorator<T> {
        #[rustfmt::skip] pub fn black(mut self)          -> Self { self.fg = Some(AnsiColor::Black); self }
        #[rustfmt::skip] pub fn red(mut self)            -> Self { self.fg = Some(AnsiColor::Red); self }
        #[rustfmt::skip] pub fn green(mut self)          -> Self { self.fg = Some(AnsiColor::Green); self }
        #[rustfmt::skip] pub fn yellow(mut self)         -> Self { self.fg = Some(AnsiColor::Yellow); self }
        #[rustfmt::skip] pub fn blue(mut self)           -> Self { self.fg = Some(AnsiColor::Blue); self }
        #[rustfmt::skip] pub fn magenta(mut self)        -> Self { self.fg = Some(AnsiColor::Magenta); self }
        #[rustfmt::skip] pub fn cyan(mut self)           -> Self { self.fg = Some(AnsiColor::Cyan); self }
        #[rustfmt::skip] pub fn white(mut self)          -> Self { self.fg = Some(AnsiColor::White); self }
        #[rustfmt::skip] pub fn bright_black(mut self)   -> Self { self.fg = Some(AnsiColor::BrightBlack); self }
        #[rustfmt::skip] pub fn bright_red(mut self)     -> Self { self.fg = Some(AnsiColor::BrightRed); self }
        #[rustfmt::skip] pub fn bright_green(mut self)   -> Self { self.fg = Some(AnsiColor::BrightGreen); self }
        #[rustfmt::skip] pub fn bright_yellow(mut self)  -> Self { self.fg = Some(AnsiColor::BrightYellow); self }
        #[rustfmt::skip] pub fn bright_blue(mut self)    -> Self { self.fg = Some(AnsiColor::BrightBlue); self }
        #[rustfmt::skip] pub fn bright_magenta(mut self) -> Self { self.fg = Some(AnsiColor::BrightMagenta); self }
        #[rustfmt::skip] pub fn bright_cyan(mut self)    -> Self { self.fg = Some(AnsiColor::BrightCyan); self }
        #[rustfmt::skip] pub fn bright_white(mut self)   -> Self { self.fg = Some(AnsiColor::BrightWhite); self }

        #[rustfmt::skip] pub fn bg_black(mut self)          -> Self { self.bg = Some(AnsiColor::Black); self }
        #[rustfmt::skip] pub fn bg_red(mut self)            -> Self { self.bg = Some(AnsiColor::Red); self }
        #[rustfmt::skip] pub fn bg_green(mut self)          -> Self { self.bg = Some(AnsiColor::Green); self }
        #[rustfmt::skip] pub fn bg_yellow(mut self)         -> Self { self.bg = Some(AnsiColor::Yellow); self }
        #[rustfmt::skip] pub fn bg_blue(mut self)           -> Self { self.bg = Some(AnsiColor::Blue); self }
        #[rustfmt::skip] pub fn bg_magenta(mut self)        -> Self { self.bg = Some(AnsiColor::Magenta); self }
        #[rustfmt::skip] pub fn bg_cyan(mut self)           -> Self { self.bg = Some(AnsiColor::Cyan); self }
        #[rustfmt::skip] pub fn bg_white(mut self)          -> Self { self.bg = Some(AnsiColor::White); self }
        #[rustfmt::skip] pub fn bg_bright_black(mut self)   -> Self { self.bg = Some(AnsiColor::BrightBlack); self }
        #[rustfmt::skip] pub fn bg_bright_red(mut self)     -> Self { self.bg = Some(AnsiColor::BrightRed); self }
        #[rustfmt::skip] pub fn bg_bright_green(mut self)   -> Self { self.bg = Some(AnsiColor::BrightGreen); self }
        #[rustfmt::skip] pub fn bg_bright_yellow(mut self)  -> Self { self.bg = Some(AnsiColor::BrightYellow); self }
        #[rustfmt::skip] pub fn bg_bright_blue(mut self)    -> Self { self.bg = Some(AnsiColor::BrightBlue); self }
        #[rustfmt::skip] pub fn bg_bright_magenta(mut self) -> Self { self.bg = Some(AnsiColor::BrightMagenta); self }
        #[rustfmt::skip] pub fn bg_bright_cyan(mut self)    -> Self { self.bg = Some(AnsiColor::BrightCyan); self }
        #[rustfmt::skip] pub fn bg_bright_white(mut self)   -> Self { self.bg = Some(AnsiColor::BrightWhite); self }

        #[rustfmt::skip] pub fn bold(mut self)       -> Self { self.bold = true; self }
        #[rustfmt::skip] pub fn underline(mut self)  -> Self { self.underline = true; self }
        #[rustfmt::skip] pub fn underscore(self)     -> Self { self.underline() }
    }
}

mod esc_seq_encoder {
    use super::*;
    use crate::sgr_code::{CSI, SGR};

    impl<T> Decorator<T> {
        /// Serialize the styling into one escape sequence: a `';'`-joined
        /// code list in fixed order (foreground, background, bold `1`,
        /// underline `4`) wrapped in `ESC '[' .. 'm'`. Returns an empty
        /// buffer when no styling is set.
        pub fn to_esc_seq(&self) -> EscSeqBuffer {
            let mut codes = EscSeqBuffer::new();
            if let Some(color) = self.fg {
                codes.push_str(color.fg_code());
            }
            if let Some(color) = self.bg {
                if !codes.is_empty() {
                    codes.push(';');
                }
                codes.push_str(color.bg_code());
            }
            if self.bold {
                if !codes.is_empty() {
                    codes.push(';');
                }
                codes.push('1');
            }
            if self.underline {
                if !codes.is_empty() {
                    codes.push(';');
                }
                codes.push('4');
            }
            if codes.is_empty() {
                return codes;
            }

            let mut seq = EscSeqBuffer::new();
            seq.push_str(CSI);
            seq.push_str(&codes);
            seq.push_str(SGR);
            seq
        }
    }
}

mod display_trait_impl {
    use super::*;

    impl<T: Display> Display for Decorator<T> {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            let esc_seq = self.to_esc_seq();
            if !esc_seq.is_empty() {
                f.write_str(&esc_seq)?;
            }
            // Delegating to the payload's own fmt passes the caller's
            // width/precision/flags through untouched.
            self.value.fmt(f)?;
            write!(f, "{}", SgrCode::Reset)
        }
    }
}

mod print_methods {
    use super::*;

    impl<T: Display> Decorator<T> {
        pub fn print(&self) -> std::result::Result<usize, DecoError> {
            crate::print_args(format_args!("{self}"))
        }

        pub fn println(&self) -> std::result::Result<usize, DecoError> {
            crate::println_args(format_args!("{self}"))
        }

        pub fn eprint(&self) -> std::result::Result<usize, DecoError> {
            crate::eprint_args(format_args!("{self}"))
        }

        pub fn eprintln(&self) -> std::result::Result<usize, DecoError> {
            crate::eprintln_args(format_args!("{self}"))
        }
    }
}
