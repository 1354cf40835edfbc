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

use smallstr::SmallString;
use smallvec::SmallVec;

use crate::{CharAttr, DecoError};

/// The ESC byte that opens every escape sequence.
pub const ESC: char = '\x1b';

/// Seam between the replay pass and the device. The real implementation
/// drives the native console API; tests inject a recording fake.
pub trait ConsoleSink {
    /// Write text verbatim at the device's current attribute. Returns the
    /// number of bytes written.
    fn write_literal(&mut self, text: &str) -> Result<usize, DecoError>;

    /// Set the device's current text attribute. Never emits visible bytes;
    /// it mutates device state consulted by subsequent literal writes.
    fn set_attr(&mut self, attr: CharAttr) -> Result<(), DecoError>;
}

mod sizing {
    /// Inline capacity for the rune buffer and the pending-literal buffer;
    /// longer inputs spill to the heap.
    pub const RUNE_BUFFER_SIZE: usize = 128;
    pub const LITERAL_BUFFER_SIZE: usize = 64;
    /// A single code segment is at most 3 digits; junk inside a malformed
    /// sequence spills.
    pub const CODE_SEGMENT_SIZE: usize = 4;
}

/// Replay a string that may contain embedded escape sequences (as produced
/// by [crate::Decorator]) against a device that does not interpret ANSI
/// bytes itself. Single pass, left to right over the rune sequence:
///
/// - Literal runs are flushed to [ConsoleSink::write_literal] exactly at
///   styling boundaries, so text and attribute changes stay aligned.
/// - An ESC not followed by `'['` (including a trailing ESC) is ordinary
///   literal text, never a sequence.
/// - Inside a sequence, `';'`-separated code segments are resolved via
///   [crate::attr_for_code] and OR'ed together; the reset code `0` instead
///   replaces the working attribute with `default_attr`, discarding bits
///   accumulated earlier in the same sequence.
/// - `'m'` issues one [ConsoleSink::set_attr] with the resolved attribute.
///   A sequence truncated by end of input is silently discarded.
/// - After the whole input, one final `set_attr(default_attr)` always
///   runs, so no styled state leaks past a single print call.
///
/// A sink failure aborts the pass immediately; literal text already
/// written stays visible (no rollback). Returns the byte count from the
/// literal writes.
///
/// Note: native attribute state is global per device. Two threads
/// translating to the same stream can observe each other's mid-sequence
/// attributes; callers that care must serialize access themselves.
pub fn translate(
    input: &str,
    default_attr: CharAttr,
    sink: &mut impl ConsoleSink,
) -> Result<usize, DecoError> {
    let runes: SmallVec<[char; sizing::RUNE_BUFFER_SIZE]> = input.chars().collect();
    let end = runes.len();
    let mut pending = SmallString::<[u8; sizing::LITERAL_BUFFER_SIZE]>::new();
    let mut byte_count = 0;
    let mut cursor = 0;

    while cursor < end {
        while cursor < end && runes[cursor] != ESC {
            pending.push(runes[cursor]);
            cursor += 1;
        }
        if cursor >= end {
            byte_count += sink.write_literal(&pending)?;
            break;
        }
        if cursor + 1 >= end || runes[cursor + 1] != '[' {
            // Malformed or foreign: the ESC is ordinary literal text.
            pending.push(runes[cursor]);
            cursor += 1;
            continue;
        }
        cursor += 2;

        // Flush so the attribute change lands exactly here.
        byte_count += sink.write_literal(&pending)?;
        pending.clear();

        let mut attr = CharAttr::NONE;
        let mut code = SmallString::<[u8; sizing::CODE_SEGMENT_SIZE]>::new();
        while cursor < end && runes[cursor] != 'm' {
            if runes[cursor] == ';' {
                attr = attr.apply_code(&code, default_attr);
                code.clear();
            } else {
                code.push(runes[cursor]);
            }
            cursor += 1;
        }
        if cursor >= end {
            // Truncated sequence: discard, no attribute-set call.
            tracing::debug!(input, "discarding escape sequence truncated by end of input");
            break;
        }
        attr = attr.apply_code(&code, default_attr);
        sink.set_attr(attr)?;
        cursor += 1;
    }

    sink.set_attr(default_attr)?;
    Ok(byte_count)
}

#[cfg(test)]
mod tests {
    use std::io;

    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::{ConsoleSink, translate};
    use crate::{AnsiColor, CharAttr, DecoError, Decorator, attr_bits::*};

    #[derive(Debug, PartialEq, Eq)]
    enum SinkEvent {
        Literal(String),
        SetAttr(CharAttr),
    }

    #[derive(Default)]
    struct FakeSink {
        events: Vec<SinkEvent>,
        fail_on_set_attr: bool,
    }

    impl ConsoleSink for FakeSink {
        fn write_literal(&mut self, text: &str) -> Result<usize, DecoError> {
            self.events.push(SinkEvent::Literal(text.into()));
            Ok(text.len())
        }

        fn set_attr(&mut self, attr: CharAttr) -> Result<(), DecoError> {
            if self.fail_on_set_attr {
                return Err(DecoError::NativeAttr(io::Error::other("device gone")));
            }
            self.events.push(SinkEvent::SetAttr(attr));
            Ok(())
        }
    }

    // Green foreground on blue background; deliberately avoids the red
    // bit so reset-ordering assertions can tell the two apart.
    const DEFAULT: CharAttr = CharAttr(FOREGROUND_GREEN | BACKGROUND_BLUE);

    fn run(input: &str) -> Vec<SinkEvent> {
        let mut sink = FakeSink::default();
        translate(input, DEFAULT, &mut sink).unwrap();
        sink.events
    }

    /// The last attribute applied before the mandatory trailing restore.
    fn attr_before_final_restore(events: &[SinkEvent]) -> Option<CharAttr> {
        events[..events.len() - 1]
            .iter()
            .rev()
            .find_map(|event| match event {
                SinkEvent::SetAttr(attr) => Some(*attr),
                SinkEvent::Literal(_) => None,
            })
    }

    #[test]
    fn plain_text_is_one_literal_plus_final_restore() {
        assert_eq!(
            run("hello"),
            vec![
                SinkEvent::Literal("hello".into()),
                SinkEvent::SetAttr(DEFAULT),
            ]
        );
    }

    #[test]
    fn empty_input_still_restores_default() {
        assert_eq!(run(""), vec![SinkEvent::SetAttr(DEFAULT)]);
    }

    /// model = {fg: Red, bg: Green}, payload = "x": the rendered string is
    /// `ESC[31;42mx ESC[0m` and the replay interleaves exactly as the
    /// scan produces it, including the empty literal before the first
    /// code.
    #[test]
    fn red_on_green_scenario() {
        assert_eq!(
            run("\x1b[31;42mx\x1b[0m"),
            vec![
                SinkEvent::Literal("".into()),
                SinkEvent::SetAttr(CharAttr(FOREGROUND_RED | BACKGROUND_GREEN)),
                SinkEvent::Literal("x".into()),
                SinkEvent::SetAttr(DEFAULT),
                SinkEvent::SetAttr(DEFAULT),
            ]
        );
    }

    #[test]
    fn literal_flush_aligns_with_styling_boundaries() {
        assert_eq!(
            run("a\x1b[1mb\x1b[0mc"),
            vec![
                SinkEvent::Literal("a".into()),
                SinkEvent::SetAttr(CharAttr(FOREGROUND_INTENSITY)),
                SinkEvent::Literal("b".into()),
                SinkEvent::SetAttr(DEFAULT),
                SinkEvent::Literal("c".into()),
                SinkEvent::SetAttr(DEFAULT),
            ]
        );
    }

    #[test]
    fn esc_without_bracket_is_literal_text() {
        // No attribute-set call for the stray ESC.
        assert_eq!(
            run("a\x1bb"),
            vec![
                SinkEvent::Literal("a\x1bb".into()),
                SinkEvent::SetAttr(DEFAULT),
            ]
        );
    }

    #[test]
    fn trailing_esc_is_literal_text() {
        assert_eq!(
            run("a\x1b"),
            vec![
                SinkEvent::Literal("a\x1b".into()),
                SinkEvent::SetAttr(DEFAULT),
            ]
        );
    }

    #[test]
    fn truncated_sequence_is_discarded_but_default_still_restored() {
        assert_eq!(
            run("x\x1b[31"),
            vec![
                SinkEvent::Literal("x".into()),
                SinkEvent::SetAttr(DEFAULT),
            ]
        );
    }

    #[test]
    fn empty_sequence_resolves_to_attr_zero() {
        // `ESC[m` has one empty segment, which matches nothing in the
        // table. Kept as-is from the original behavior.
        assert_eq!(
            run("\x1b[m"),
            vec![
                SinkEvent::Literal("".into()),
                SinkEvent::SetAttr(CharAttr::NONE),
                SinkEvent::SetAttr(DEFAULT),
            ]
        );
    }

    #[test]
    fn unknown_codes_are_ignored_within_a_sequence() {
        assert_eq!(
            run("\x1b[31;99m"),
            vec![
                SinkEvent::Literal("".into()),
                SinkEvent::SetAttr(CharAttr(FOREGROUND_RED)),
                SinkEvent::SetAttr(DEFAULT),
            ]
        );
    }

    /// Documented ordering-sensitive behavior: a reset code after other
    /// codes in the same sequence discards the bits accumulated so far,
    /// so "31;0" resolves to the stream default, not red.
    #[test]
    fn reset_discards_earlier_codes_in_sequence() {
        assert_eq!(
            run("\x1b[31;0m"),
            vec![
                SinkEvent::Literal("".into()),
                SinkEvent::SetAttr(DEFAULT),
                SinkEvent::SetAttr(DEFAULT),
            ]
        );
        // The mirror ordering accumulates on top of the default.
        assert_eq!(
            run("\x1b[0;31m"),
            vec![
                SinkEvent::Literal("".into()),
                SinkEvent::SetAttr(DEFAULT | CharAttr(FOREGROUND_RED)),
                SinkEvent::SetAttr(DEFAULT),
            ]
        );
    }

    #[test]
    fn consecutive_identical_sequences_are_idempotent() {
        let once = run("\x1b[31mhi");
        let twice = run("\x1b[31m\x1b[31mhi");
        assert_eq!(
            attr_before_final_restore(&once),
            attr_before_final_restore(&twice)
        );
        assert_eq!(once.last(), twice.last());
    }

    #[test]
    fn multibyte_literals_survive_the_rune_scan() {
        let events = run("héllo \u{1f600}\x1b[34m日本");
        assert_eq!(
            events,
            vec![
                SinkEvent::Literal("héllo \u{1f600}".into()),
                SinkEvent::SetAttr(CharAttr(FOREGROUND_BLUE)),
                SinkEvent::Literal("日本".into()),
                SinkEvent::SetAttr(DEFAULT),
            ]
        );
    }

    #[test]
    fn byte_count_covers_literal_writes_only() {
        let mut sink = FakeSink::default();
        let count = translate("ab\x1b[31mcd", DEFAULT, &mut sink).unwrap();
        assert_eq!(count, 4);
    }

    #[test]
    fn sink_failure_aborts_pass_and_surfaces_error() {
        let mut sink = FakeSink {
            fail_on_set_attr: true,
            ..FakeSink::default()
        };
        let result = translate("ab\x1b[31mcd", DEFAULT, &mut sink);
        assert!(matches!(result, Err(DecoError::NativeAttr(_))));
        // The literal flushed before the failing call is not rolled back.
        assert_eq!(sink.events, vec![SinkEvent::Literal("ab".into())]);
    }

    /// Round-trip over the full reachable field space: every combination
    /// of {fg slot, bg slot, bold, underline} encodes to a sequence whose
    /// replay reproduces exactly the intended native bitmask prior to the
    /// mandatory trailing restore.
    #[test]
    fn encode_translate_round_trip() {
        let fg_slots: Vec<Option<AnsiColor>> =
            std::iter::once(None).chain(AnsiColor::iter().map(Some)).collect();
        let bg_slots = fg_slots.clone();

        for &fg in &fg_slots {
            for &bg in &bg_slots {
                for bold in [false, true] {
                    for underline in [false, true] {
                        let model = Decorator {
                            value: "",
                            fg,
                            bg,
                            bold,
                            underline,
                        };
                        let esc_seq = model.to_esc_seq();
                        let events = run(&esc_seq);

                        let mut expected = CharAttr::NONE;
                        if let Some(color) = fg {
                            expected = expected | CharAttr::fg(color);
                        }
                        if let Some(color) = bg {
                            expected = expected | CharAttr::bg(color);
                        }
                        if bold {
                            expected = expected | CharAttr(FOREGROUND_INTENSITY);
                        }
                        if underline {
                            expected = expected | CharAttr(COMMON_LVB_UNDERSCORE);
                        }

                        if esc_seq.is_empty() {
                            assert_eq!(events, vec![SinkEvent::SetAttr(DEFAULT)]);
                        } else {
                            assert_eq!(
                                attr_before_final_restore(&events),
                                Some(expected),
                                "fg={fg:?} bg={bg:?} bold={bold} underline={underline}"
                            );
                        }
                    }
                }
            }
        }
    }
}
