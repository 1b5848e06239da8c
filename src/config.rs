// src/config.rs
//! Site-wide constants for the Longman online dictionary.

/// Base URL prepended to relative cross-reference hrefs.
pub const SITE_URL: &str = "https://www.ldoceonline.com";

/// Attribute carrying pronunciation/example audio on LDOCE markup.
pub const AUDIO_ATTR: &str = "data-src-mp3";
