use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The display could not be brought up. Terminal; callers halt.
    #[error("Display initialisation failed: {0}")]
    DisplayInit(String),
    #[error("Configuration parse error: {source}")]
    Config {
        #[from]
        source: serde_json::Error,
    },
    #[error("Cannot read tuning file {0}")]
    TuningFile(String),
    #[error("Invalid tuning: {0}")]
    InvalidTuning(&'static str),
}
