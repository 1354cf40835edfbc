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
//! - <https://learn.microsoft.com/en-us/windows/console/console-screen-buffers#character-attributes>
//! - <https://learn.microsoft.com/en-us/windows/console/setconsoletextattribute>

use std::ops::BitOr;

use crate::AnsiColor;

/// A native console character attribute: the integer bitmask consumed by
/// `SetConsoleTextAttribute`. Foreground bits, background bits, two
/// intensity bits, and an underscore bit. Not 1:1 with SGR codes; the
/// code to bit mapping is the fixed table in [attr_for_code].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharAttr(pub u16);

#[rustfmt::skip]
pub mod attr_bits {
    pub const FOREGROUND_BLACK: u16     = 0x0000;
    pub const FOREGROUND_BLUE: u16      = 0x0001;
    pub const FOREGROUND_GREEN: u16     = 0x0002;
    pub const FOREGROUND_RED: u16       = 0x0004;
    pub const FOREGROUND_YELLOW: u16    = FOREGROUND_RED   | FOREGROUND_GREEN;
    pub const FOREGROUND_MAGENTA: u16   = FOREGROUND_RED   | FOREGROUND_BLUE;
    pub const FOREGROUND_CYAN: u16      = FOREGROUND_GREEN | FOREGROUND_BLUE;
    pub const FOREGROUND_WHITE: u16     = FOREGROUND_RED   | FOREGROUND_GREEN | FOREGROUND_BLUE;
    pub const FOREGROUND_INTENSITY: u16 = 0x0008;

    pub const BACKGROUND_BLACK: u16     = 0x0000;
    pub const BACKGROUND_BLUE: u16      = 0x0010;
    pub const BACKGROUND_GREEN: u16     = 0x0020;
    pub const BACKGROUND_RED: u16       = 0x0040;
    pub const BACKGROUND_YELLOW: u16    = BACKGROUND_RED   | BACKGROUND_GREEN;
    pub const BACKGROUND_MAGENTA: u16   = BACKGROUND_RED   | BACKGROUND_BLUE;
    pub const BACKGROUND_CYAN: u16      = BACKGROUND_GREEN | BACKGROUND_BLUE;
    pub const BACKGROUND_WHITE: u16     = BACKGROUND_RED   | BACKGROUND_GREEN | BACKGROUND_BLUE;
    pub const BACKGROUND_INTENSITY: u16 = 0x0080;

    pub const COMMON_LVB_UNDERSCORE: u16 = 0x8000;
}

impl CharAttr {
    pub const NONE: CharAttr = CharAttr(0);

    /// Used when the device query fails at registry capture time.
    pub const DEFAULT_FALLBACK: CharAttr =
        CharAttr(attr_bits::FOREGROUND_WHITE | attr_bits::BACKGROUND_BLACK);

    /// Foreground bits for one of the 16 colors.
    #[rustfmt::skip]
    pub fn fg(color: AnsiColor) -> CharAttr {
        use attr_bits::*;
        let bits = match color {
            AnsiColor::Black         => FOREGROUND_BLACK,
            AnsiColor::Red           => FOREGROUND_RED,
            AnsiColor::Green         => FOREGROUND_GREEN,
            AnsiColor::Yellow        => FOREGROUND_YELLOW,
            AnsiColor::Blue          => FOREGROUND_BLUE,
            AnsiColor::Magenta       => FOREGROUND_MAGENTA,
            AnsiColor::Cyan          => FOREGROUND_CYAN,
            AnsiColor::White         => FOREGROUND_WHITE,
            AnsiColor::BrightBlack   => FOREGROUND_BLACK   | FOREGROUND_INTENSITY,
            AnsiColor::BrightRed     => FOREGROUND_RED     | FOREGROUND_INTENSITY,
            AnsiColor::BrightGreen   => FOREGROUND_GREEN   | FOREGROUND_INTENSITY,
            AnsiColor::BrightYellow  => FOREGROUND_YELLOW  | FOREGROUND_INTENSITY,
            AnsiColor::BrightBlue    => FOREGROUND_BLUE    | FOREGROUND_INTENSITY,
            AnsiColor::BrightMagenta => FOREGROUND_MAGENTA | FOREGROUND_INTENSITY,
            AnsiColor::BrightCyan    => FOREGROUND_CYAN    | FOREGROUND_INTENSITY,
            AnsiColor::BrightWhite   => FOREGROUND_WHITE   | FOREGROUND_INTENSITY,
        };
        CharAttr(bits)
    }

    /// Background bits for one of the 16 colors.
    #[rustfmt::skip]
    pub fn bg(color: AnsiColor) -> CharAttr {
        use attr_bits::*;
        let bits = match color {
            AnsiColor::Black         => BACKGROUND_BLACK,
            AnsiColor::Red           => BACKGROUND_RED,
            AnsiColor::Green         => BACKGROUND_GREEN,
            AnsiColor::Yellow        => BACKGROUND_YELLOW,
            AnsiColor::Blue          => BACKGROUND_BLUE,
            AnsiColor::Magenta       => BACKGROUND_MAGENTA,
            AnsiColor::Cyan          => BACKGROUND_CYAN,
            AnsiColor::White         => BACKGROUND_WHITE,
            AnsiColor::BrightBlack   => BACKGROUND_BLACK   | BACKGROUND_INTENSITY,
            AnsiColor::BrightRed     => BACKGROUND_RED     | BACKGROUND_INTENSITY,
            AnsiColor::BrightGreen   => BACKGROUND_GREEN   | BACKGROUND_INTENSITY,
            AnsiColor::BrightYellow  => BACKGROUND_YELLOW  | BACKGROUND_INTENSITY,
            AnsiColor::BrightBlue    => BACKGROUND_BLUE    | BACKGROUND_INTENSITY,
            AnsiColor::BrightMagenta => BACKGROUND_MAGENTA | BACKGROUND_INTENSITY,
            AnsiColor::BrightCyan    => BACKGROUND_CYAN    | BACKGROUND_INTENSITY,
            AnsiColor::BrightWhite   => BACKGROUND_WHITE   | BACKGROUND_INTENSITY,
        };
        CharAttr(bits)
    }

    /// Fold one completed `';'`-separated code segment into the working
    /// attribute. The reset code replaces everything accumulated so far in
    /// the sequence with the stream default; unknown codes are ignored.
    pub fn apply_code(self, code: &str, default_attr: CharAttr) -> CharAttr {
        if code == RESET_CODE {
            return default_attr;
        }
        match attr_for_code(code) {
            Some(bits) => self | bits,
            None => self,
        }
    }
}

impl BitOr for CharAttr {
    type Output = CharAttr;

    fn bitor(self, rhs: CharAttr) -> CharAttr {
        CharAttr(self.0 | rhs.0)
    }
}

pub const RESET_CODE: &str = "0";

/// The fixed SGR-code to attribute-bit table: the decimal code strings
/// that appear between `ESC '['` and `'m'`, as emitted by
/// [crate::Decorator::to_esc_seq]. Bold maps to foreground intensity
/// (there is no bold weight on the native console, only brighter text).
#[rustfmt::skip]
pub fn attr_for_code(code: &str) -> Option<CharAttr> {
    use attr_bits::*;
    let bits = match code {
        "30"  => FOREGROUND_BLACK,
        "31"  => FOREGROUND_RED,
        "32"  => FOREGROUND_GREEN,
        "33"  => FOREGROUND_YELLOW,
        "34"  => FOREGROUND_BLUE,
        "35"  => FOREGROUND_MAGENTA,
        "36"  => FOREGROUND_CYAN,
        "37"  => FOREGROUND_WHITE,
        "90"  => FOREGROUND_BLACK   | FOREGROUND_INTENSITY,
        "91"  => FOREGROUND_RED     | FOREGROUND_INTENSITY,
        "92"  => FOREGROUND_GREEN   | FOREGROUND_INTENSITY,
        "93"  => FOREGROUND_YELLOW  | FOREGROUND_INTENSITY,
        "94"  => FOREGROUND_BLUE    | FOREGROUND_INTENSITY,
        "95"  => FOREGROUND_MAGENTA | FOREGROUND_INTENSITY,
        "96"  => FOREGROUND_CYAN    | FOREGROUND_INTENSITY,
        "97"  => FOREGROUND_WHITE   | FOREGROUND_INTENSITY,
        "40"  => BACKGROUND_BLACK,
        "41"  => BACKGROUND_RED,
        "42"  => BACKGROUND_GREEN,
        "43"  => BACKGROUND_YELLOW,
        "44"  => BACKGROUND_BLUE,
        "45"  => BACKGROUND_MAGENTA,
        "46"  => BACKGROUND_CYAN,
        "47"  => BACKGROUND_WHITE,
        "100" => BACKGROUND_BLACK   | BACKGROUND_INTENSITY,
        "101" => BACKGROUND_RED     | BACKGROUND_INTENSITY,
        "102" => BACKGROUND_GREEN   | BACKGROUND_INTENSITY,
        "103" => BACKGROUND_YELLOW  | BACKGROUND_INTENSITY,
        "104" => BACKGROUND_BLUE    | BACKGROUND_INTENSITY,
        "105" => BACKGROUND_MAGENTA | BACKGROUND_INTENSITY,
        "106" => BACKGROUND_CYAN    | BACKGROUND_INTENSITY,
        "107" => BACKGROUND_WHITE   | BACKGROUND_INTENSITY,
        "1"   => FOREGROUND_INTENSITY,
        "4"   => COMMON_LVB_UNDERSCORE,
        _     => return None,
    };
    Some(CharAttr(bits))
}
