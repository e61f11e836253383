/// Domain-boundary failures raised before a value reaches the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InsightError {
    #[error("life path number {0} is not one of 1-9, 11, 22 or 33")]
    InvalidLifePath(u8),
    #[error("universal day number {0} is outside 1-9")]
    InvalidUniversalDay(u8),
    #[error("birth date cannot be in the future")]
    BirthDateInFuture,
    #[error("birth date must be after 1900")]
    BirthDateTooEarly,
    #[error("please enter a valid birth date")]
    BirthDateUnrealistic,
    #[error("hour {0} is outside 0-23")]
    InvalidHour(u32),
}
