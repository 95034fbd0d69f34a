use std::collections::HashSet;

use tolk::domain::RequestStamp;

#[test]
fn given_stamp_when_naming_resources_then_blob_and_job_share_it() {
    let stamp = RequestStamp::next();

    assert_eq!(stamp.object_name(), format!("audio_{}.wav", stamp));
    assert_eq!(stamp.job_name(), format!("transcribe_{}", stamp));
}

#[test]
fn given_rapid_calls_when_stamping_then_values_strictly_increase() {
    let first = RequestStamp::next();
    let second = RequestStamp::next();
    let third = RequestStamp::next();

    assert!(first < second);
    assert!(second < third);
}

#[test]
fn given_many_threads_when_stamping_concurrently_then_no_duplicates() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                (0..500)
                    .map(|_| RequestStamp::next())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for stamp in handle.join().unwrap() {
            assert!(seen.insert(stamp), "duplicate stamp {}", stamp);
        }
    }
    assert_eq!(seen.len(), 4000);
}
