mod coco_labels;
mod ffmpeg_frame_sampler;
mod http_object_detector;

pub use coco_labels::{COCO_INSTANCE_CATEGORY_NAMES, coco_label};
pub use ffmpeg_frame_sampler::{FfmpegFrameSampler, parse_frame_rate, sampling_step};
pub use http_object_detector::HttpObjectDetector;
