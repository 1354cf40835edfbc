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

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result};

use crate::AnsiColor;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SgrCode {
    Reset,
    Bold,
    Underline,
    Foreground(AnsiColor),
    Background(AnsiColor),
}

pub mod sgr_code_impl {
    use super::*;

    pub const CSI: &str = "\x1b[";
    pub const SGR: &str = "m";

    impl Display for SgrCode {
        /// SGR: set graphics mode command.
        /// More info:
        /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
        /// - <https://en.wikipedia.org/wiki/ANSI_escape_code>
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                SgrCode::Reset             => write!(f, "{CSI}0{SGR}"),
                SgrCode::Bold              => write!(f, "{CSI}1{SGR}"),
                SgrCode::Underline         => write!(f, "{CSI}4{SGR}"),
                SgrCode::Foreground(color) => write!(f, "{CSI}{}{SGR}", color.fg_code()),
                SgrCode::Background(color) => write!(f, "{CSI}{}{SGR}", color.bg_code()),
            }
        }
    }
}
pub use sgr_code_impl::{CSI, SGR};

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::SgrCode;
    use crate::AnsiColor;

    #[test]
    fn reset() {
        let sgr_code = SgrCode::Reset;
        assert_eq!(sgr_code.to_string(), "\x1b[0m");
    }

    #[test]
    fn bold() {
        let sgr_code = SgrCode::Bold;
        assert_eq!(sgr_code.to_string(), "\x1b[1m");
    }

    #[test]
    fn underline() {
        let sgr_code = SgrCode::Underline;
        assert_eq!(sgr_code.to_string(), "\x1b[4m");
    }

    #[test]
    fn fg_color() {
        let sgr_code = SgrCode::Foreground(AnsiColor::Red);
        assert_eq!(sgr_code.to_string(), "\x1b[31m");
    }

    #[test]
    fn bg_color() {
        let sgr_code = SgrCode::Background(AnsiColor::BrightGreen);
        assert_eq!(sgr_code.to_string(), "\x1b[102m");
    }
}
