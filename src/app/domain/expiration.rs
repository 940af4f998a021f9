use serde::{Deserialize, Serialize};

/// How long the server keeps a paste. Encoded on the wire as seconds,
/// with `0` meaning the paste never expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ExpirationChoice {
    #[default]
    Never,
    TenMinutes,
    OneHour,
    OneDay,
    OneWeek,
    OneMonth,
}

impl ExpirationChoice {
    pub fn seconds(&self) -> u64 {
        match self {
            Self::Never => 0,
            Self::TenMinutes => 10 * 60,
            Self::OneHour => 60 * 60,
            Self::OneDay => 24 * 60 * 60,
            Self::OneWeek => 7 * 24 * 60 * 60,
            Self::OneMonth => 30 * 24 * 60 * 60,
        }
    }

    /// Value sent in the `expire` form field.
    pub fn form_value(&self) -> String {
        self.seconds().to_string()
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Never => "Never",
            Self::TenMinutes => "10 Minutes",
            Self::OneHour => "1 Hour",
            Self::OneDay => "1 Day",
            Self::OneWeek => "1 Week",
            Self::OneMonth => "1 Month",
        }
    }

    /// All choices in display order; the first is the default.
    pub fn all() -> &'static [ExpirationChoice] {
        &[
            Self::Never,
            Self::TenMinutes,
            Self::OneHour,
            Self::OneDay,
            Self::OneWeek,
            Self::OneMonth,
        ]
    }
}
