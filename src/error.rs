//! Error taxonomy for the emulator core.
//!
//! ROM loading is the only path that can fail outright; everything past that point
//! (bad writes to read-only cartridge space, malformed trace requests) is a recoverable
//! warning that gets logged and otherwise ignored, matching how real hardware just
//! ignores a write that doesn't land anywhere.

use std::fmt;

/// Why a `.nes` file failed to load.
#[derive(Debug)]
pub enum LoadError {
    /// Fewer than 16 bytes: not even a full header.
    TooSmall,
    /// First four bytes are not `NES\x1A`.
    BadMagic,
    /// Byte 7 bits 2-3 read `10`: this is an NES 2.0 header, which this loader doesn't parse.
    Nes20Unsupported,
    /// The file is shorter than the header's declared PRG/CHR bank counts imply.
    Truncated { expected: usize, actual: usize },
    /// Mapper number extracted from the header has no implementation here.
    UnsupportedMapper(u8),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::TooSmall => write!(f, "file is smaller than a 16-byte iNES header"),
            LoadError::BadMagic => write!(f, "missing 'NES\\x1A' magic bytes"),
            LoadError::Nes20Unsupported => write!(f, "NES 2.0 headers are not supported"),
            LoadError::Truncated { expected, actual } => write!(
                f,
                "file too short for declared PRG/CHR size: expected at least {expected} bytes, got {actual}"
            ),
            LoadError::UnsupportedMapper(id) => write!(f, "unsupported mapper {id}"),
        }
    }
}

/// Top-level error type returned across module boundaries.
#[derive(Debug)]
pub enum NesError {
    /// Couldn't open or parse a ROM file.
    Load(LoadError),
    /// Underlying I/O failure (file not found, permission denied, ...).
    Io(std::io::Error),
    /// CPU hit an illegal/HLT-class opcode or another condition execution can't continue past.
    FatalExecution(String),
    /// Read of an unmapped CPU/PPU address; the caller gets open-bus back regardless.
    BusWarning { addr: u16 },
    /// A cartridge was inserted into a `System` that already had one loaded.
    StateWarning,
}

impl fmt::Display for NesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NesError::Load(e) => write!(f, "failed to load ROM: {e}"),
            NesError::Io(e) => write!(f, "I/O error: {e}"),
            NesError::FatalExecution(msg) => write!(f, "fatal execution error: {msg}"),
            NesError::BusWarning { addr } => write!(f, "read of unmapped address ${addr:04X}"),
            NesError::StateWarning => write!(f, "cartridge re-inserted over an already-loaded one"),
        }
    }
}

impl std::error::Error for NesError {}

impl From<LoadError> for NesError {
    fn from(e: LoadError) -> Self {
        NesError::Load(e)
    }
}

impl From<std::io::Error> for NesError {
    fn from(e: std::io::Error) -> Self {
        NesError::Io(e)
    }
}
