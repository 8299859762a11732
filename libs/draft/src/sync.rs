use entity::prelude::*;

/// One backend write needed to bring a poll's stored options in line with
/// an edited list.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionStep {
    Delete(i64),
    Update(PollOptionEntity),
    Create(PollOptionEntity),
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct OptionSyncPlan {
    pub deletes: Vec<i64>,
    pub updates: Vec<PollOptionEntity>,
    pub creates: Vec<PollOptionEntity>,
}

impl OptionSyncPlan {
    /// Deletes first, then updates, then creates.
    pub fn steps(&self) -> impl Iterator<Item = OptionStep> + '_ {
        self.deletes
            .iter()
            .copied()
            .map(OptionStep::Delete)
            .chain(self.updates.iter().cloned().map(OptionStep::Update))
            .chain(self.creates.iter().cloned().map(OptionStep::Create))
    }

    pub fn len(&self) -> usize {
        self.deletes.len() + self.updates.len() + self.creates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Diffs the options the server has against the edited ones by id.
pub fn plan_option_sync(
    original: &[PollOptionEntity],
    edited: &[PollOptionEntity],
) -> OptionSyncPlan {
    let mut plan = OptionSyncPlan::default();

    for option in original {
        if !edited.iter().any(|edit| edit.id == option.id) {
            plan.deletes.push(option.id);
        }
    }

    for edit in edited {
        match original.iter().find(|option| option.id == edit.id) {
            Some(option) if option.choice != edit.choice => {
                plan.updates.push(edit.clone())
            }
            Some(_) => {}
            None => plan.creates.push(edit.clone()),
        }
    }

    plan
}

#[cfg(test)]
mod test {
    use super::*;

    fn option(id: i64, choice: &str) -> PollOptionEntity {
        PollOptionEntity::new(id, choice)
    }

    #[test]
    fn test_plan() {
        // Arrange
        let original = vec![option(10, "A"), option(11, "B"), option(12, "C")];
        let edited = vec![option(10, "A"), option(12, "C!"), option(13, "D")];

        // Act
        let plan = plan_option_sync(&original, &edited);

        // Assert
        assert_eq!(
            plan.steps().collect::<Vec<_>>(),
            vec![
                OptionStep::Delete(11),
                OptionStep::Update(option(12, "C!")),
                OptionStep::Create(option(13, "D")),
            ]
        );
        assert_eq!(plan.len(), 3);
    }

    #[test]
    fn test_unchanged_options_need_no_writes() {
        let options = vec![option(1, "A"), option(2, "B")];

        assert!(plan_option_sync(&options, &options).is_empty());
    }

    #[test]
    fn test_new_poll_creates_everything() {
        let edited = vec![option(0, "A"), option(1, "B")];

        let plan = plan_option_sync(&[], &edited);

        assert_eq!(plan.creates, edited);
        assert!(plan.deletes.is_empty() && plan.updates.is_empty());
    }
}
