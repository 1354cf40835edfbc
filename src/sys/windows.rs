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

use std::io::{self, Write};
use std::mem::MaybeUninit;
use std::os::windows::io::AsRawHandle;

use windows_sys::Win32::Foundation::HANDLE;
use windows_sys::Win32::System::Console::{CONSOLE_SCREEN_BUFFER_INFO,
                                          GetConsoleMode,
                                          GetConsoleScreenBufferInfo,
                                          SetConsoleTextAttribute};

use crate::{CharAttr, ConsoleSink, DecoError, Stream};

fn raw_handle(stream: Stream) -> HANDLE {
    match stream {
        Stream::Stdout => io::stdout().as_raw_handle(),
        Stream::Stderr => io::stderr().as_raw_handle(),
    }
}

/// A handle only counts as a console device if it has a console mode.
/// Redirected streams (files, pipes) fail this check.
fn ensure_console(handle: HANDLE) -> Result<(), DecoError> {
    let mut mode = 0u32;
    // SAFETY: handle comes from a live std stream; mode is a valid out ptr.
    let ok = unsafe { GetConsoleMode(handle, &mut mode) };
    if ok == 0 {
        return Err(DecoError::NotAConsole);
    }
    Ok(())
}

/// "Query current attribute of stream" via `GetConsoleScreenBufferInfo`.
/// Called once per stream at registry capture time.
pub fn query_default_attr(stream: Stream) -> Result<CharAttr, DecoError> {
    let handle = raw_handle(stream);
    ensure_console(handle)?;

    let mut info = MaybeUninit::<CONSOLE_SCREEN_BUFFER_INFO>::uninit();
    // SAFETY: the API fully initializes info on success, which is checked
    // before assume_init.
    let ok = unsafe { GetConsoleScreenBufferInfo(handle, info.as_mut_ptr()) };
    if ok == 0 {
        return Err(DecoError::NativeAttr(io::Error::last_os_error()));
    }
    let info = unsafe { info.assume_init() };
    Ok(CharAttr(info.wAttributes))
}

/// "Set attribute of stream" via `SetConsoleTextAttribute`.
pub fn set_console_attr(stream: Stream, attr: CharAttr) -> Result<(), DecoError> {
    let handle = raw_handle(stream);
    // SAFETY: handle comes from a live std stream.
    let ok = unsafe { SetConsoleTextAttribute(handle, attr.0) };
    if ok == 0 {
        return Err(DecoError::NativeAttr(io::Error::last_os_error()));
    }
    Ok(())
}

/// [ConsoleSink] over a standard stream: literal writes go through the
/// locked std handle (flushed per write so attribute changes land between
/// them), attribute sets go through the native API.
pub struct WinConsoleSink {
    stream: Stream,
}

impl WinConsoleSink {
    pub fn new(stream: Stream) -> Self {
        Self { stream }
    }
}

impl ConsoleSink for WinConsoleSink {
    fn write_literal(&mut self, text: &str) -> Result<usize, DecoError> {
        match self.stream {
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

    fn set_attr(&mut self, attr: CharAttr) -> Result<(), DecoError> {
        set_console_attr(self.stream, attr)
    }
}
