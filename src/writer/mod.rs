//! Everything a run leaves behind: echo output and the JSON transcript.
pub mod output;
pub mod transcript;
