//! Deterministic database fixture.
//!
//! [`reinitialize`] empties every managed table and inserts the literal seed
//! set below in one unit of work. Running it again yields the same rows with
//! the same ids.

use absantee_core::{Category, Colaborator, NewCategory, NewColaborator, PersistenceError};
use absantee_db::DataScope;

/// Bumped whenever the seed set changes.
pub const SEED_VERSION: u32 = 1;

/// The seeded colaborators, in insertion order.
pub fn seed_colaborators() -> Vec<NewColaborator> {
    [
        ("Catarina Moreira", "catarina.moreira@example.com", "Rua das Flores 12", "4050-262"),
        ("Pedro Santos", "pedro.santos@example.com", "Avenida da Boavista 1200", "4100-130"),
        ("Joana Ferreira", "joana.ferreira@example.com", "Rua de Santa Catarina 55", "4000-447"),
    ]
    .into_iter()
    .map(|(name, email, street, postal_code)| NewColaborator {
        name: name.to_string(),
        email: email.to_string(),
        street: street.to_string(),
        postal_code: postal_code.to_string(),
    })
    .collect()
}

/// The seeded categories, in insertion order.
pub fn seed_categories() -> Vec<NewCategory> {
    vec![
        NewCategory::active("Holidays"),
        NewCategory {
            description: "Sick Leave".to_string(),
            active: false,
        },
    ]
}

/// Reset the store to exactly the seed set and commit.
///
/// Errors propagate unchanged; on failure nothing is committed.
pub async fn reinitialize(scope: &mut DataScope) -> Result<(), PersistenceError> {
    scope.remove_all::<Colaborator>();
    scope.remove_all::<Category>();

    if let Err(e) = queue_seed(scope) {
        scope.discard_changes().await?;
        return Err(e);
    }

    let applied = scope.save_changes().await?;
    tracing::debug!(seed_version = SEED_VERSION, applied, "Fixture reinitialized");
    Ok(())
}

fn queue_seed(scope: &mut DataScope) -> Result<(), PersistenceError> {
    for colaborator in seed_colaborators() {
        scope.add(&colaborator)?;
    }
    for category in seed_categories() {
        scope.add(&category)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use absantee_core::schema::{CATEGORY, COLABORATOR};

    #[test]
    fn test_seed_rows_satisfy_entity_configuration() {
        for c in seed_colaborators() {
            COLABORATOR.validate(&c.column_values()).unwrap();
        }
        for c in seed_categories() {
            CATEGORY.validate(&c.column_values()).unwrap();
        }
    }

    #[test]
    fn test_seed_sizes() {
        assert_eq!(seed_colaborators().len(), 3);
        assert_eq!(seed_categories().len(), 2);
    }
}
