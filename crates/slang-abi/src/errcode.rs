//! Status codes carried in `SlangParseLangResult::errcode`

use crate::layout::SlangInt8;

/// Closed set of status codes the callee may report
///
/// Callers are expected to pass the raw value through rather than interpret
/// it; this enum exists for the callee and for tooling that wants a name.
#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrCode {
    /// A record matched; the payload holds it
    Success = 0x00,
    /// The resolver backend failed (or panicked)
    Parse = 0x01,
    /// No record matched the code
    NoSuchLang = 0x02,
    /// The view itself broke its invariants
    InvalidArgument = 0x03,
}

impl ErrCode {
    /// Map a raw status byte back to a known code
    pub fn from_raw(raw: SlangInt8) -> Option<Self> {
        match raw {
            0x00 => Some(Self::Success),
            0x01 => Some(Self::Parse),
            0x02 => Some(Self::NoSuchLang),
            0x03 => Some(Self::InvalidArgument),
            _ => None,
        }
    }

    /// Raw status byte
    pub fn as_raw(self) -> SlangInt8 {
        self as SlangInt8
    }

    /// Check if the code reports success
    pub fn is_success(self) -> bool {
        self == Self::Success
    }

    /// Get a human-readable description
    pub fn description(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Parse => "Language database could not be parsed",
            Self::NoSuchLang => "No such language",
            Self::InvalidArgument => "Invalid string view",
        }
    }
}

impl From<ErrCode> for SlangInt8 {
    fn from(code: ErrCode) -> Self {
        code.as_raw()
    }
}

/// Render a raw status byte as `0x%02x`
///
/// Negative values are shown as their two's-complement byte.
pub fn hex_code(raw: SlangInt8) -> String {
    format!("0x{:02x}", raw as u8)
}
