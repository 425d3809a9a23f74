use thiserror::Error;

use crate::models::slot::{FIRST_HOUR, LAST_HOUR};

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Hour {0} is outside the bookable range {min}..={max}", min = FIRST_HOUR, max = LAST_HOUR)]
    HourOutOfRange(u8),

    #[error("Unrecognized date value: {0}")]
    UnrecognizedDate(String),

    #[error("Clipboard empty or unreadable: {0}")]
    EmptyClipboard(String),

    #[error("No paste target found: {0}")]
    TargetNotFound(String),

    #[error("Store error: {0}")]
    Store(#[from] eyre::Report),
}

pub type SlotResult<T> = Result<T, SlotError>;
