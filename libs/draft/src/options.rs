use entity::{
    poll::{MAX_OPTIONS, MIN_OPTIONS},
    prelude::*,
};
use tracing::warn;

use crate::{Draft, DraftError};

impl Draft<PollEntity> {
    /// Applies `{option id: choice}` edits. Known ids are rewritten in place,
    /// unknown ids are appended in the order given.
    ///
    /// The patch is rejected as a whole if the appends would exceed the
    /// option limit.
    pub fn update_poll_options<I>(&mut self, patch: I) -> Result<(), DraftError>
    where
        I: IntoIterator<Item = (i64, String)>,
    {
        let patch: Vec<(i64, String)> = patch.into_iter().collect();

        let mut appended: Vec<i64> = Vec::new();
        for (id, _) in &patch {
            if self.state.option(*id).is_none() && !appended.contains(id) {
                appended.push(*id);
            }
        }
        if self.state.options.len() + appended.len() > MAX_OPTIONS {
            warn!(task = "update poll options", appended = appended.len());
            return Err(DraftError::TooManyOptions);
        }

        for (id, choice) in patch {
            match self.state.options.iter_mut().find(|o| o.id == id) {
                Some(option) => option.choice = choice,
                None => self.state.options.push(PollOptionEntity::new(id, choice)),
            }
        }

        Ok(())
    }

    /// Appends a blank option and returns its id, one past the largest id
    /// either saved or in use. Ids of removed saved options are never handed
    /// out again, so the sync plan deletes them instead of renaming them.
    pub fn add_option(&mut self) -> Result<i64, DraftError> {
        if self.state.options.len() >= MAX_OPTIONS {
            return Err(DraftError::TooManyOptions);
        }

        let id = self
            .original
            .options
            .iter()
            .chain(&self.state.options)
            .map(|option| option.id)
            .max()
            .map_or(0, |max| max + 1);
        self.state.options.push(PollOptionEntity::new(id, ""));

        Ok(id)
    }

    /// Removes the option with `id`. The first two options are fixed.
    pub fn remove_option(&mut self, id: i64) -> Result<(), DraftError> {
        let position = self
            .state
            .options
            .iter()
            .position(|option| option.id == id)
            .ok_or(DraftError::UnknownOption { id })?;

        if position < MIN_OPTIONS || self.state.options.len() <= MIN_OPTIONS {
            return Err(DraftError::OptionLocked { id });
        }

        self.state.options.remove(position);
        Ok(())
    }
}
