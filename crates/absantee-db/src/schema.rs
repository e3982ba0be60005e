//! SQL derived from the static entity configuration.
//!
//! Keys are declared `INTEGER PRIMARY KEY` without `AUTOINCREMENT`: ids follow
//! insertion order and restart at 1 once a table is emptied.

use absantee_core::{ColumnKind, EntityConfig};

/// `CREATE TABLE IF NOT EXISTS` statement for an entity.
pub fn create_table_sql(config: &EntityConfig) -> String {
    let mut columns = vec![format!("{} INTEGER PRIMARY KEY", config.key)];

    for spec in config.columns {
        let mut column = format!("{} {}", spec.name, spec.kind.sql_type());
        if spec.required {
            column.push_str(" NOT NULL");
        }
        if let Some(max) = spec.max_len {
            column.push_str(&format!(" CHECK (length({}) <= {max})", spec.name));
        }
        if spec.kind == ColumnKind::Boolean {
            column.push_str(&format!(" CHECK ({} IN (0, 1))", spec.name));
        }
        columns.push(column);
    }

    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
        config.table,
        columns.join(",\n    ")
    )
}

/// Key plus every column, for row mapping.
pub fn select_columns(config: &EntityConfig) -> String {
    std::iter::once(config.key)
        .chain(config.column_names())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Select every row in insertion order.
pub fn select_all_sql(config: &EntityConfig) -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_columns(config),
        config.table,
        config.key
    )
}

/// Select one row by key.
pub fn select_by_key_sql(config: &EntityConfig) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = ?",
        select_columns(config),
        config.table,
        config.key
    )
}

/// Insert one row; the key is assigned by the store.
pub fn insert_sql(config: &EntityConfig) -> String {
    let names: Vec<_> = config.column_names().collect();
    let placeholders = vec!["?"; names.len()].join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({placeholders})",
        config.table,
        names.join(", ")
    )
}

/// Overwrite every column of the row with the given key (bound last).
pub fn update_by_key_sql(config: &EntityConfig) -> String {
    let assignments: Vec<_> = config
        .column_names()
        .map(|name| format!("{name} = ?"))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE {} = ?",
        config.table,
        assignments.join(", "),
        config.key
    )
}

/// Delete one row by key.
pub fn delete_by_key_sql(config: &EntityConfig) -> String {
    format!("DELETE FROM {} WHERE {} = ?", config.table, config.key)
}

/// Delete every row.
pub fn delete_all_sql(config: &EntityConfig) -> String {
    format!("DELETE FROM {}", config.table)
}
