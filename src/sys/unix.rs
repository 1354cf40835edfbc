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

use crate::{CharAttr, DecoError, Stream};

/// ANSI-capable targets interpret the escape bytes themselves; there is
/// no per-call attribute API to query, so every stream classifies as
/// non-console and the print surface writes the styled text unchanged.
pub fn query_default_attr(_stream: Stream) -> Result<CharAttr, DecoError> {
    Err(DecoError::NotAConsole)
}
