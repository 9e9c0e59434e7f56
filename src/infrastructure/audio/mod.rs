mod openai_whisper_engine;

pub use openai_whisper_engine::{OpenAiWhisperEngine, audio_mime};
