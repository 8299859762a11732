use std::collections::BTreeMap;

use entity::prelude::*;

/// Target population filter options keyed by kind, each group sorted by
/// name.
pub fn group_populations<'a, I>(
    populations: I,
) -> BTreeMap<String, Vec<PopulationEntity>>
where
    I: IntoIterator<Item = &'a PopulationEntity>,
{
    let mut groups: BTreeMap<String, Vec<PopulationEntity>> = BTreeMap::new();
    for population in populations {
        groups
            .entry(population.kind.clone())
            .or_default()
            .push(population.clone());
    }

    for group in groups.values_mut() {
        group.sort_by(|a, b| a.population.cmp(&b.population));
    }

    groups
}

/// Human readable audience for a list of target population ids.
pub fn describe_targets(
    targets: &[i64],
    populations: &[PopulationEntity],
) -> String {
    if targets.is_empty() {
        return "All users".to_string();
    }

    targets
        .iter()
        .filter_map(|id| populations.iter().find(|p| p.id == *id))
        .map(|p| p.population.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod test {
    use super::*;

    fn population(id: i64, kind: &str, name: &str) -> PopulationEntity {
        PopulationEntity {
            id,
            kind: kind.to_string(),
            population: name.to_string(),
        }
    }

    #[test]
    fn test_group_populations() {
        // Arrange
        let populations = vec![
            population(1, "SCHOOL", "Wharton"),
            population(2, "YEAR", "2026"),
            population(3, "SCHOOL", "Engineering"),
        ];

        // Act
        let groups = group_populations(&populations);

        // Assert
        assert_eq!(groups.len(), 2);
        let schools: Vec<_> =
            groups["SCHOOL"].iter().map(|p| p.id).collect();
        assert_eq!(schools, vec![3, 1]);
        assert_eq!(groups["YEAR"][0].population, "2026");
    }

    #[test]
    fn test_describe_targets() {
        let populations = vec![
            population(1, "SCHOOL", "Wharton"),
            population(2, "YEAR", "2026"),
        ];

        assert_eq!(describe_targets(&[], &populations), "All users");
        assert_eq!(describe_targets(&[2, 1], &populations), "2026, Wharton");
    }
}
