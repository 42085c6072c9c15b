#![allow(dead_code)]

use sqltree::{AddColumn, ColumnDefinition, Identifier, NodeLocation, QualifiedName};

pub fn ident(value: &str) -> Identifier {
    Identifier::new(value).expect("identifier should be valid")
}

pub fn table(dotted: &str) -> QualifiedName {
    QualifiedName::parse(dotted).expect("qualified name should be valid")
}

pub fn column(name: &str, data_type: &str) -> ColumnDefinition {
    ColumnDefinition::new(ident(name), data_type).expect("column should be valid")
}

/// `ALTER TABLE IF EXISTS orders ADD COLUMN status varchar`, as the parser would build it.
pub fn parsed_add_column() -> AddColumn {
    AddColumn::new_at(
        NodeLocation::new(1, 1),
        table("orders"),
        column("status", "varchar"),
        true,
        false,
    )
}

/// The same statement built by a rewrite pass, without a location.
pub fn synthesized_add_column() -> AddColumn {
    AddColumn::new(table("orders"), column("status", "varchar"), true, false)
}

pub fn hash_of<T: std::hash::Hash>(value: &T) -> u64 {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::Hasher;

    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
