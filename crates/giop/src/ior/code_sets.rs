// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Code set negotiation data carried by `TAG_CODE_SETS`.

use crate::cdr::{CdrReader, CdrResult, CdrWriter};

/// OSF registry ids for the code sets this ORB family uses.
pub const ISO_8859_1: u32 = 0x0001_0001;
pub const UTF_16: u32 = 0x0001_0109;
pub const UCS_2: u32 = 0x0001_0100;
pub const UTF_8: u32 = 0x0501_0001;

/// Native code set plus the sets the server can convert from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CodeSetComponent {
    pub native_set: u32,
    pub conversion_sets: Vec<u32>,
}

impl CodeSetComponent {
    pub fn new(native_set: u32, conversion_sets: Vec<u32>) -> Self {
        Self {
            native_set,
            conversion_sets,
        }
    }

    pub fn read(input: &mut CdrReader<'_>) -> CdrResult<Self> {
        let native_set = input.read_u32()?;
        let conversion_sets = input.read_u32_sequence()?;
        Ok(Self {
            native_set,
            conversion_sets,
        })
    }

    pub fn write(&self, out: &mut CdrWriter) -> CdrResult<()> {
        out.write_u32(self.native_set)?;
        out.write_u32_sequence(&self.conversion_sets)
    }

    pub fn supports(&self, code_set: u32) -> bool {
        self.native_set == code_set || self.conversion_sets.contains(&code_set)
    }
}

/// Char and wchar code set components.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CodeSetComponentInfo {
    pub for_char_data: CodeSetComponent,
    pub for_wchar_data: CodeSetComponent,
}

impl CodeSetComponentInfo {
    pub fn read(input: &mut CdrReader<'_>) -> CdrResult<Self> {
        let for_char_data = CodeSetComponent::read(input)?;
        let for_wchar_data = CodeSetComponent::read(input)?;
        Ok(Self {
            for_char_data,
            for_wchar_data,
        })
    }

    pub fn write(&self, out: &mut CdrWriter) -> CdrResult<()> {
        self.for_char_data.write(out)?;
        self.for_wchar_data.write(out)
    }
}

impl Default for CodeSetComponentInfo {
    fn default() -> Self {
        Self {
            for_char_data: CodeSetComponent::new(ISO_8859_1, vec![UTF_8]),
            for_wchar_data: CodeSetComponent::new(UTF_16, vec![UCS_2]),
        }
    }
}
