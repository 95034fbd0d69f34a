use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranscriptionStatus {
    InProgress,
    Completed,
    Failed,
}

impl TranscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranscriptionStatus::InProgress => "IN_PROGRESS",
            TranscriptionStatus::Completed => "COMPLETED",
            TranscriptionStatus::Failed => "FAILED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, TranscriptionStatus::InProgress)
    }
}

impl FromStr for TranscriptionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "QUEUED" | "IN_PROGRESS" => Ok(TranscriptionStatus::InProgress),
            "COMPLETED" => Ok(TranscriptionStatus::Completed),
            "FAILED" => Ok(TranscriptionStatus::Failed),
            _ => Err(format!("Invalid transcription status: {}", s)),
        }
    }
}

impl fmt::Display for TranscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
