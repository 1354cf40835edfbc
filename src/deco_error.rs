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

use std::io;

use thiserror::Error;

/// Errors surfaced by the print surface and the native attribute
/// translator. There are no retries anywhere: a failure is either
/// absorbed into raw passthrough ([Self::NotAConsole], checked once at
/// registry capture) or surfaced synchronously as a single failed call.
#[derive(Debug, Error)]
pub enum DecoError {
    /// The stream is not attached to a real console device. Not fatal:
    /// the caller treats the target as non-interactive and writes the
    /// raw escape-bearing text instead of translating it.
    #[error("stream is not attached to a console device")]
    NotAConsole,

    /// A native console attribute call failed. Aborts the current
    /// translation pass; literal text already written stays visible.
    #[error("native console attribute call failed: {0}")]
    NativeAttr(#[source] io::Error),

    /// Plain I/O failure while writing literal text.
    #[error(transparent)]
    Io(#[from] io::Error),
}
