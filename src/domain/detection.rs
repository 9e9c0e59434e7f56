use std::collections::BTreeMap;
use std::fmt;

pub const NO_OBJECTS_DETECTED: &str = "No objects detected";

/// One object reported by a detector, already resolved to a label.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub label: String,
    pub score: f32,
}

impl Detection {
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }

    /// Keeps detections strictly above `threshold`, preserving detector order.
    pub fn above_threshold(detections: Vec<Detection>, threshold: f32) -> Vec<Detection> {
        detections
            .into_iter()
            .filter(|d| d.score > threshold)
            .collect()
    }
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (confidence: {:.2})", self.label, self.score)
    }
}

/// Rendered detections per sampled source-frame index, in frame order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameDetections(BTreeMap<u64, Vec<String>>);

impl FrameDetections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, frame_index: u64, detections: &[Detection]) {
        let rendered = if detections.is_empty() {
            vec![NO_OBJECTS_DETECTED.to_string()]
        } else {
            detections.iter().map(Detection::to_string).collect()
        };
        self.0.insert(frame_index, rendered);
    }

    pub fn get(&self, frame_index: u64) -> Option<&[String]> {
        self.0.get(&frame_index).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// One `Frame {n}: ...` line per sampled frame. Empty frames read
    /// `No objects detected.` with a trailing period.
    pub fn to_lines(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|(index, labels)| {
                if labels.len() == 1 && labels[0] == NO_OBJECTS_DETECTED {
                    format!("Frame {}: {}.", index, NO_OBJECTS_DETECTED)
                } else {
                    format!("Frame {}: {}", index, labels.join(", "))
                }
            })
            .collect()
    }
}
