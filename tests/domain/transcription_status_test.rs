use tolk::domain::{PipelineStage, TranscriptionStatus};

#[test]
fn given_provider_status_strings_when_parsing_then_maps_to_status() {
    assert_eq!(
        "QUEUED".parse::<TranscriptionStatus>().unwrap(),
        TranscriptionStatus::InProgress
    );
    assert_eq!(
        "COMPLETED".parse::<TranscriptionStatus>().unwrap(),
        TranscriptionStatus::Completed
    );
    assert_eq!(
        "FAILED".parse::<TranscriptionStatus>().unwrap(),
        TranscriptionStatus::Failed
    );
    assert!("DONE".parse::<TranscriptionStatus>().is_err());
}

#[test]
fn given_status_when_checking_terminal_then_only_in_progress_is_not() {
    assert!(!TranscriptionStatus::InProgress.is_terminal());
    assert!(TranscriptionStatus::Completed.is_terminal());
    assert!(TranscriptionStatus::Failed.is_terminal());
}

#[test]
fn given_pipeline_stages_when_ordered_then_follow_request_progress() {
    assert!(PipelineStage::Validated < PipelineStage::Uploaded);
    assert!(PipelineStage::Transcribed < PipelineStage::Translated);
    assert!(PipelineStage::Synthesized < PipelineStage::Done);
    assert_eq!(PipelineStage::Transcribing.to_string(), "TRANSCRIBING");
}
