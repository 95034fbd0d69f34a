use std::fmt;

/// States a translation request moves through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PipelineStage {
    Validated,
    Uploaded,
    Transcribing,
    Transcribed,
    Translated,
    Synthesized,
    Done,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Validated => "VALIDATED",
            PipelineStage::Uploaded => "UPLOADED",
            PipelineStage::Transcribing => "TRANSCRIBING",
            PipelineStage::Transcribed => "TRANSCRIBED",
            PipelineStage::Translated => "TRANSLATED",
            PipelineStage::Synthesized => "SYNTHESIZED",
            PipelineStage::Done => "DONE",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
