//! Declarative entity-to-storage mapping.
//!
//! Each persisted entity is described by a static [`EntityConfig`]: its table,
//! its integer primary key and an ordered list of scalar columns with their
//! constraints. The tables are consumed once at store initialization (the db
//! crate derives DDL and statements from them) and by [`EntityConfig::validate`]
//! before a row is queued for insertion.
//!
//! Column order matters: it is the order of the values produced by an entity
//! and the order of the columns in generated statements.

use crate::ports::PersistenceError;

/// Storage type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Text,
    /// Stored as `INTEGER` 0/1.
    Boolean,
}

impl ColumnKind {
    /// The SQL type name used in generated DDL.
    pub const fn sql_type(self) -> &'static str {
        match self {
            Self::Integer | Self::Boolean => "INTEGER",
            Self::Text => "TEXT",
        }
    }
}

/// Mapping and constraints for a single non-key column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: ColumnKind,
    pub required: bool,
    /// Maximum length in characters, text columns only.
    pub max_len: Option<usize>,
}

impl ColumnSpec {
    /// A required text column with a maximum length.
    pub const fn text(name: &'static str, max_len: usize) -> Self {
        Self {
            name,
            kind: ColumnKind::Text,
            required: true,
            max_len: Some(max_len),
        }
    }

    /// A required boolean column.
    pub const fn boolean(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Boolean,
            required: true,
            max_len: None,
        }
    }
}

/// A single column value, as produced by an entity for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnValue {
    Integer(i64),
    Text(String),
    Boolean(bool),
    Null,
}

impl ColumnValue {
    const fn matches(&self, kind: ColumnKind) -> bool {
        matches!(
            (self, kind),
            (Self::Null, _)
                | (Self::Integer(_), ColumnKind::Integer)
                | (Self::Text(_), ColumnKind::Text)
                | (Self::Boolean(_), ColumnKind::Boolean)
        )
    }
}

impl From<&str> for ColumnValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ColumnValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for ColumnValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for ColumnValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

/// Schema mapping for one entity type.
#[derive(Debug, PartialEq, Eq)]
pub struct EntityConfig {
    /// Human readable entity name, used in error messages.
    pub name: &'static str,
    pub table: &'static str,
    /// Integer primary key column. Assigned by the store on insert.
    pub key: &'static str,
    pub columns: &'static [ColumnSpec],
}

impl EntityConfig {
    /// Column names in declaration order, excluding the key.
    pub fn column_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.name)
    }

    /// Check a row of values against the column constraints.
    ///
    /// `values` must be in column declaration order.
    pub fn validate(&self, values: &[ColumnValue]) -> Result<(), PersistenceError> {
        if values.len() != self.columns.len() {
            return Err(PersistenceError::Constraint(format!(
                "{}: expected {} values, got {}",
                self.name,
                self.columns.len(),
                values.len()
            )));
        }

        for (spec, value) in self.columns.iter().zip(values) {
            if !value.matches(spec.kind) {
                return Err(PersistenceError::Constraint(format!(
                    "{}.{}: expected {:?} value",
                    self.name, spec.name, spec.kind
                )));
            }

            match value {
                ColumnValue::Null if spec.required => {
                    return Err(PersistenceError::Constraint(format!(
                        "{}.{} is required",
                        self.name, spec.name
                    )));
                }
                ColumnValue::Text(text) => {
                    if spec.required && text.trim().is_empty() {
                        return Err(PersistenceError::Constraint(format!(
                            "{}.{} must not be empty",
                            self.name, spec.name
                        )));
                    }
                    if let Some(max) = spec.max_len {
                        let len = text.chars().count();
                        if len > max {
                            return Err(PersistenceError::Constraint(format!(
                                "{}.{} exceeds {max} characters ({len})",
                                self.name, spec.name
                            )));
                        }
                    }
                }
                _ => {}
            }
        }

        Ok(())
    }
}

/// Mapping for [`crate::Category`].
pub static CATEGORY: EntityConfig = EntityConfig {
    name: "Category",
    table: "categories",
    key: "id",
    columns: &[ColumnSpec::text("description", 100), ColumnSpec::boolean("active")],
};

/// Mapping for [`crate::Colaborator`].
pub static COLABORATOR: EntityConfig = EntityConfig {
    name: "Colaborator",
    table: "colaborators",
    key: "id",
    columns: &[
        ColumnSpec::text("name", 50),
        ColumnSpec::text("email", 100),
        ColumnSpec::text("street", 100),
        ColumnSpec::text("postal_code", 20),
    ],
};

/// Every entity the store manages, in creation order.
pub static ALL_ENTITIES: &[&EntityConfig] = &[&CATEGORY, &COLABORATOR];
