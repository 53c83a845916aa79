//! Thin music-playback wrapper.
//!
//! Extraction, decoding and playback are delegated entirely to songbird and
//! its yt-dlp-backed input type; this module only maps slash-command verbs
//! onto the builtin track queue and relays driver events into the log.

pub mod player;

use reqwest::Client as HttpClient;
use serenity::prelude::TypeMapKey;

/// Shared HTTP client the audio extractor uses for stream resolution.
pub struct HttpKey;

impl TypeMapKey for HttpKey {
    type Value = HttpClient;
}
