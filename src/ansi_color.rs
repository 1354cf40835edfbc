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
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>
//! - <https://stackoverflow.com/questions/4842424/list-of-ansi-color-escape-sequences>

use strum_macros::{EnumCount, EnumIter};

/// One of the 16 classic terminal colors. A color slot on
/// [crate::Decorator] is an `Option<AnsiColor>`; `None` leaves the
/// terminal's current color untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCount, EnumIter)]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

/// The SGR code tables. These are fixed lookup tables, not computed:
/// standard colors map to 30-37 (fg) / 40-47 (bg), bright colors map to
/// 90-97 (fg) / 100-107 (bg).
mod code_tables {
    use super::AnsiColor;

    impl AnsiColor {
        #[rustfmt::skip]
        pub fn fg_code(&self) -> &'static str {
            match self {
                AnsiColor::Black         => "30",
                AnsiColor::Red           => "31",
                AnsiColor::Green         => "32",
                AnsiColor::Yellow        => "33",
                AnsiColor::Blue          => "34",
                AnsiColor::Magenta       => "35",
                AnsiColor::Cyan          => "36",
                AnsiColor::White         => "37",
                AnsiColor::BrightBlack   => "90",
                AnsiColor::BrightRed     => "91",
                AnsiColor::BrightGreen   => "92",
                AnsiColor::BrightYellow  => "93",
                AnsiColor::BrightBlue    => "94",
                AnsiColor::BrightMagenta => "95",
                AnsiColor::BrightCyan    => "96",
                AnsiColor::BrightWhite   => "97",
            }
        }

        #[rustfmt::skip]
        pub fn bg_code(&self) -> &'static str {
            match self {
                AnsiColor::Black         => "40",
                AnsiColor::Red           => "41",
                AnsiColor::Green         => "42",
                AnsiColor::Yellow        => "43",
                AnsiColor::Blue          => "44",
                AnsiColor::Magenta       => "45",
                AnsiColor::Cyan          => "46",
                AnsiColor::White         => "47",
                AnsiColor::BrightBlack   => "100",
                AnsiColor::BrightRed     => "101",
                AnsiColor::BrightGreen   => "102",
                AnsiColor::BrightYellow  => "103",
                AnsiColor::BrightBlue    => "104",
                AnsiColor::BrightMagenta => "105",
                AnsiColor::BrightCyan    => "106",
                AnsiColor::BrightWhite   => "107",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::{EnumCount, IntoEnumIterator};
    use test_case::test_case;

    use super::AnsiColor;

    #[test]
    fn sixteen_colors() {
        assert_eq!(AnsiColor::COUNT, 16);
    }

    #[test_case(AnsiColor::Black,         "30", "40")]
    #[test_case(AnsiColor::Red,           "31", "41")]
    #[test_case(AnsiColor::Green,         "32", "42")]
    #[test_case(AnsiColor::Yellow,        "33", "43")]
    #[test_case(AnsiColor::Blue,          "34", "44")]
    #[test_case(AnsiColor::Magenta,       "35", "45")]
    #[test_case(AnsiColor::Cyan,          "36", "46")]
    #[test_case(AnsiColor::White,         "37", "47")]
    #[test_case(AnsiColor::BrightBlack,   "90", "100")]
    #[test_case(AnsiColor::BrightRed,     "91", "101")]
    #[test_case(AnsiColor::BrightGreen,   "92", "102")]
    #[test_case(AnsiColor::BrightYellow,  "93", "103")]
    #[test_case(AnsiColor::BrightBlue,    "94", "104")]
    #[test_case(AnsiColor::BrightMagenta, "95", "105")]
    #[test_case(AnsiColor::BrightCyan,    "96", "106")]
    #[test_case(AnsiColor::BrightWhite,   "97", "107")]
    fn fixed_code_tables(color: AnsiColor, fg: &str, bg: &str) {
        assert_eq!(color.fg_code(), fg);
        assert_eq!(color.bg_code(), bg);
    }

    #[test]
    fn codes_are_unique() {
        let fg_codes: Vec<&str> = AnsiColor::iter().map(|it| it.fg_code()).collect();
        let bg_codes: Vec<&str> = AnsiColor::iter().map(|it| it.bg_code()).collect();
        for (index, code) in fg_codes.iter().enumerate() {
            assert_eq!(fg_codes.iter().filter(|it| *it == code).count(), 1, "dup fg {index}");
        }
        for (index, code) in bg_codes.iter().enumerate() {
            assert_eq!(bg_codes.iter().filter(|it| *it == code).count(), 1, "dup bg {index}");
        }
    }
}
