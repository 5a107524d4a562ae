use serde::{Deserialize, Serialize};

/// The four punch actions a subject can log.
/// The wire strings double as the storage strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Action {
    #[serde(rename = "Clock In")]
    ClockIn,
    #[serde(rename = "Clock Out")]
    ClockOut,
    #[serde(rename = "Break Start")]
    BreakStart,
    #[serde(rename = "Break End")]
    BreakEnd,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::ClockIn,
        Action::ClockOut,
        Action::BreakStart,
        Action::BreakEnd,
    ];

    pub fn act_from_str(s: &str) -> Option<Self> {
        match s {
            "Clock In" => Some(Self::ClockIn),
            "Clock Out" => Some(Self::ClockOut),
            "Break Start" => Some(Self::BreakStart),
            "Break End" => Some(Self::BreakEnd),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::ClockIn => "Clock In",
            Action::ClockOut => "Clock Out",
            Action::BreakStart => "Break Start",
            Action::BreakEnd => "Break End",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.as_str()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::act_from_str(s)
    }

    pub fn is_break(&self) -> bool {
        matches!(self, Action::BreakStart | Action::BreakEnd)
    }
}
