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

use crate::CharAttr;

/// The two standard streams whose writes are intercepted for
/// translation. Writes to any other destination pass the raw
/// escape-bearing text through unmodified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// What the registry captured for one stream: the attribute value the
/// device reported at capture time (the restore target for reset and for
/// the final restore after each print call), and whether the stream is a
/// real console device at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamDefault {
    pub attr: CharAttr,
    pub is_console: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamDefaults {
    pub stdout: StreamDefault,
    pub stderr: StreamDefault,
}

impl StreamDefaults {
    pub fn get(&self, stream: Stream) -> StreamDefault {
        match stream {
            Stream::Stdout => self.stdout,
            Stream::Stderr => self.stderr,
        }
    }
}

/// Process-wide registry of captured stream defaults. Captured exactly
/// once (on first use, the closest Rust gets to "at process start") and
/// read-only for the rest of the process. There is no refresh: a console
/// resize or external attribute change after capture is not detected.
pub mod global_stream_defaults {
    use std::sync::OnceLock;

    use super::*;

    static STREAM_DEFAULTS_GLOBAL: OnceLock<StreamDefaults> = OnceLock::new();

    pub fn get() -> &'static StreamDefaults {
        STREAM_DEFAULTS_GLOBAL.get_or_init(capture_all)
    }

    /// Inject known defaults ahead of the first capture.
    ///
    /// # Testing support
    ///
    /// The [serial_test](https://crates.io/crates/serial_test) crate is
    /// used to test this function. In any test in which this function is
    /// called, please use the `#[serial]` attribute to annotate that test.
    /// Returns the rejected value if the registry was already initialized.
    pub fn set_override(value: StreamDefaults) -> Result<(), StreamDefaults> {
        STREAM_DEFAULTS_GLOBAL.set(value)
    }

    fn capture_all() -> StreamDefaults {
        StreamDefaults {
            stdout: capture(Stream::Stdout),
            stderr: capture(Stream::Stderr),
        }
    }

    /// Query the device once. Failure means "not a console": fall back to
    /// white-on-black and mark the stream for raw passthrough.
    fn capture(stream: Stream) -> StreamDefault {
        match crate::sys::query_default_attr(stream) {
            Ok(attr) => StreamDefault {
                attr,
                is_console: true,
            },
            Err(error) => {
                tracing::debug!(
                    ?stream,
                    %error,
                    "console attribute query failed, using fallback defaults"
                );
                StreamDefault {
                    attr: CharAttr::DEFAULT_FALLBACK,
                    is_console: false,
                }
            }
        }
    }
}
