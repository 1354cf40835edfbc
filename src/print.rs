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

//! Wrappers for the std print family. For cross-platform compatibility,
//! use these for printing decorated text: on targets whose standard
//! streams do not interpret ANSI (legacy Windows consoles), writes to
//! stdout/stderr are routed through [crate::translate]; everywhere else
//! they behave exactly like their std counterparts.

use std::fmt;
use std::io::{self, Write};

use crate::{DecoError, Stream};

/// Formatted write to an arbitrary destination (file, buffer, pipe,
/// socket). Never translated: the destination receives the raw
/// escape-bearing text. Returns the number of bytes written.
pub fn fwrite(w: &mut impl io::Write, args: fmt::Arguments<'_>) -> Result<usize, DecoError> {
    let text = fmt::format(args);
    w.write_all(text.as_bytes())?;
    Ok(text.len())
}

/// Formatted write to stdout.
pub fn print_args(args: fmt::Arguments<'_>) -> Result<usize, DecoError> {
    write_stream(Stream::Stdout, &fmt::format(args))
}

/// Formatted write to stdout with a trailing newline.
pub fn println_args(args: fmt::Arguments<'_>) -> Result<usize, DecoError> {
    let mut text = fmt::format(args);
    text.push('\n');
    write_stream(Stream::Stdout, &text)
}

/// Formatted write to stderr.
pub fn eprint_args(args: fmt::Arguments<'_>) -> Result<usize, DecoError> {
    write_stream(Stream::Stderr, &fmt::format(args))
}

/// Formatted write to stderr with a trailing newline.
pub fn eprintln_args(args: fmt::Arguments<'_>) -> Result<usize, DecoError> {
    let mut text = fmt::format(args);
    text.push('\n');
    write_stream(Stream::Stderr, &text)
}

/// Route one fully-formatted string to a standard stream. On Windows,
/// when the registry captured this stream as a real console, the string
/// is replayed through the native attribute translator; otherwise (and on
/// every other platform, where the terminal interprets ANSI itself) it is
/// written unchanged.
fn write_stream(stream: Stream, text: &str) -> Result<usize, DecoError> {
    #[cfg(windows)]
    {
        let default = crate::global_stream_defaults::get().get(stream);
        if default.is_console {
            let mut sink = crate::sys::WinConsoleSink::new(stream);
            return crate::translate(text, default.attr, &mut sink);
        }
    }
    passthrough(stream, text)
}

fn passthrough(stream: Stream, text: &str) -> Result<usize, DecoError> {
    match stream {
        Stream::Stdout => {
            let mut out = io::stdout().lock();
            out.write_all(text.as_bytes())?;
            out.flush()?;
        }
        Stream::Stderr => {
            let mut err = io::stderr().lock();
            err.write_all(text.as_bytes())?;
            err.flush()?;
        }
    }
    Ok(text.len())
}

/// [std::print!] wrapper; decorated text renders correctly on legacy
/// Windows consoles. Returns the byte count or the first device error.
#[macro_export]
macro_rules! tprint {
    ($($arg:tt)*) => {
        $crate::print_args(::core::format_args!($($arg)*))
    };
}

/// [std::println!] wrapper. See [tprint!].
#[macro_export]
macro_rules! tprintln {
    () => {
        $crate::println_args(::core::format_args!(""))
    };
    ($($arg:tt)*) => {
        $crate::println_args(::core::format_args!($($arg)*))
    };
}

/// [std::eprint!] wrapper. See [tprint!].
#[macro_export]
macro_rules! teprint {
    ($($arg:tt)*) => {
        $crate::eprint_args(::core::format_args!($($arg)*))
    };
}

/// [std::eprintln!] wrapper. See [tprint!].
#[macro_export]
macro_rules! teprintln {
    () => {
        $crate::eprintln_args(::core::format_args!(""))
    };
    ($($arg:tt)*) => {
        $crate::eprintln_args(::core::format_args!($($arg)*))
    };
}

/// [std::format!] wrapper. The returned string carries the ANSI escape
/// sequences; print it later with [tprint!] or [tprintln!].
#[macro_export]
macro_rules! tformat {
    ($($arg:tt)*) => {
        ::std::format!($($arg)*)
    };
}

/// [std::write!]-shaped wrapper over [fwrite] for non-stream
/// destinations.
#[macro_export]
macro_rules! tfwrite {
    ($dst:expr, $($arg:tt)*) => {
        $crate::fwrite($dst, ::core::format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::fwrite;
    use crate::red;

    #[test]
    fn fwrite_passes_raw_escapes_through() {
        let mut buffer: Vec<u8> = Vec::new();
        let count = fwrite(&mut buffer, format_args!("{}", red("x").bg_green())).unwrap();
        assert_eq!(buffer, b"\x1b[31;42mx\x1b[0m");
        assert_eq!(count, buffer.len());
    }

    #[test]
    fn tfwrite_macro_wraps_fwrite() {
        let mut buffer: Vec<u8> = Vec::new();
        let count = tfwrite!(&mut buffer, "{} and {}", red("a"), crate::blue("b")).unwrap();
        assert_eq!(count, buffer.len());
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "\x1b[31ma\x1b[0m and \x1b[34mb\x1b[0m"
        );
    }

    #[test]
    fn tformat_carries_escapes_for_later_printing() {
        let text = tformat!("{}", red(1));
        assert_eq!(text, "\x1b[31m1\x1b[0m");
    }
}
