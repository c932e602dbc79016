// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

pub(crate) const MAGIC: u32 = 0x5358_4449;
pub(crate) const VERSION_MAJOR: u16 = 1;
pub(crate) const VERSION_MINOR: u16 = 0;
pub(crate) const VERSION: u32 = ((VERSION_MAJOR as u32) << 16) | VERSION_MINOR as u32;

/// Set if the text is split into codepoints
pub(crate) const FLAG_UTF8: u64 = 1 << 0;
/// Set if a terminator was appended to the text
pub(crate) const FLAG_TERMINATOR: u64 = 1 << 1;
