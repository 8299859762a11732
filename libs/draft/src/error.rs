use entity::poll::MAX_OPTIONS;

#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("draft failed validation: {0}")]
    Invalid(#[from] validator::ValidationErrors),

    #[error("polls are limited to {} options", MAX_OPTIONS)]
    TooManyOptions,

    #[error("option {id} cannot be removed, polls keep their first two options")]
    OptionLocked { id: i64 },

    #[error("option {id} does not exist")]
    UnknownOption { id: i64 },
}
