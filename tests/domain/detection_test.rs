use anote_intake::domain::{Detection, FrameDetections, NO_OBJECTS_DETECTED};

#[test]
fn given_detection_when_displayed_then_shows_two_decimal_confidence() {
    let detection = Detection::new("person", 0.98765);

    assert_eq!(detection.to_string(), "person (confidence: 0.99)");
}

#[test]
fn given_mixed_scores_when_filtering_then_keeps_strictly_above_threshold_in_order() {
    let detections = vec![
        Detection::new("car", 0.9),
        Detection::new("bus", 0.5),
        Detection::new("dog", 0.51),
        Detection::new("cat", 0.1),
    ];

    let kept = Detection::above_threshold(detections, 0.5);

    let labels: Vec<&str> = kept.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(labels, vec!["car", "dog"]);
}

#[test]
fn given_frame_without_detections_when_inserting_then_records_no_objects() {
    let mut frames = FrameDetections::new();

    frames.insert(12, &[]);

    assert_eq!(frames.get(12), Some(&[NO_OBJECTS_DETECTED.to_string()][..]));
}

#[test]
fn given_frames_inserted_out_of_order_when_rendering_then_lines_follow_frame_index() {
    let mut frames = FrameDetections::new();
    frames.insert(60, &[Detection::new("kite", 0.7)]);
    frames.insert(0, &[Detection::new("person", 0.9), Detection::new("dog", 0.8)]);
    frames.insert(30, &[]);

    assert_eq!(
        frames.to_lines(),
        vec![
            "Frame 0: person (confidence: 0.90), dog (confidence: 0.80)",
            "Frame 30: No objects detected.",
            "Frame 60: kite (confidence: 0.70)",
        ]
    );
    assert_eq!(frames.len(), 3);
}

#[test]
fn given_new_frame_detections_when_checked_then_is_empty() {
    let frames = FrameDetections::new();

    assert!(frames.is_empty());
    assert!(frames.to_lines().is_empty());
    assert_eq!(frames.get(0), None);
}
