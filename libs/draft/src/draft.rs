use tracing::debug;
use validator::Validate;

use crate::{patch::Patch, DraftError};

/// Local, editable copy of a record plus the version it started from.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft<T> {
    pub(crate) original: T,
    pub(crate) state: T,
}

impl<T: Clone> Draft<T> {
    pub fn new(record: T) -> Self {
        Self {
            original: record.clone(),
            state: record,
        }
    }

    pub fn state(&self) -> &T {
        &self.state
    }

    pub fn original(&self) -> &T {
        &self.original
    }

    /// Shallow-merges `patch` into the current state.
    pub fn update_state<P: Patch<T>>(&mut self, patch: P) {
        patch.apply_to(&mut self.state);
        debug!(task = "update draft state");
    }

    pub fn reset(&mut self) {
        self.state = self.original.clone();
    }

    /// Makes the current state the new baseline, e.g. after a save.
    pub fn commit(&mut self, saved: T) {
        self.original = saved.clone();
        self.state = saved;
    }

    pub fn into_inner(self) -> T {
        self.state
    }
}

impl<T: PartialEq> Draft<T> {
    pub fn is_dirty(&self) -> bool {
        self.original != self.state
    }
}

impl<T: Validate> Draft<T> {
    pub fn validate(&self) -> Result<&T, DraftError> {
        self.state.validate()?;
        Ok(&self.state)
    }
}

#[cfg(test)]
mod test {
    use entity::prelude::*;

    use super::*;
    use crate::patch::PostPatch;

    #[test]
    fn test_update_state_tracks_dirtiness() {
        // Arrange
        let mut draft = Draft::new(PostEntity {
            title: "Hello".to_string(),
            ..Default::default()
        });

        // Act
        draft.update_state(PostPatch::default().subtitle("World"));

        // Assert
        assert!(draft.is_dirty());
        assert_eq!(draft.state().subtitle, "World");
        assert_eq!(draft.original().subtitle, "");

        draft.reset();
        assert!(!draft.is_dirty());
    }

    #[test]
    fn test_later_patch_wins() {
        let mut draft = Draft::new(PostEntity::default());

        draft.update_state(PostPatch::default().title("first"));
        draft.update_state(PostPatch::default().title("second"));

        assert_eq!(draft.into_inner().title, "second");
    }

    #[test]
    fn test_validate() {
        let mut draft = Draft::new(PostEntity {
            title: "Hello".to_string(),
            ..Default::default()
        });
        assert!(draft.validate().is_ok());

        draft.update_state(
            PostPatch::default().image_url(Some("nope".to_string())),
        );
        assert!(matches!(draft.validate(), Err(DraftError::Invalid(_))));
    }

    #[test]
    fn test_commit_resets_baseline() {
        let mut draft = Draft::new(PostEntity::default());
        draft.update_state(PostPatch::default().title("Saved"));

        let saved = PostEntity {
            id: Some(3),
            ..draft.state().clone()
        };
        draft.commit(saved);

        assert!(!draft.is_dirty());
        assert_eq!(draft.original().id, Some(3));
    }
}
