mod common;

use common::*;
use sqltree::error::ErrorKind;
use sqltree::{AddColumn, Literal, Node, NodeLocation, NodeRef, Property};

#[test]
fn test_location_does_not_affect_equality() {
    let parsed = parsed_add_column();
    let synthesized = synthesized_add_column();

    assert_eq!(parsed.location(), Some(NodeLocation::new(1, 1)));
    assert_eq!(synthesized.location(), None);
    assert_eq!(parsed, synthesized);
    assert_eq!(hash_of(&parsed), hash_of(&synthesized));
}

#[test]
fn test_children_is_exactly_the_column() {
    for node in [parsed_add_column(), synthesized_add_column()] {
        let children = node.children();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0], NodeRef::ColumnDefinition(node.column()));
        assert_eq!(
            children[0],
            NodeRef::ColumnDefinition(&column("status", "varchar"))
        );
    }
}

#[test]
fn test_guard_flags_excluded_from_equality() {
    let base = synthesized_add_column();
    for (table_name_exists, column_name_not_exists) in
        [(false, false), (false, true), (true, false), (true, true)]
    {
        let other = AddColumn::new(
            table("orders"),
            column("status", "varchar"),
            table_name_exists,
            column_name_not_exists,
        );
        assert_eq!(base, other);
        assert_eq!(hash_of(&base), hash_of(&other));
    }
}

#[test]
fn test_name_and_column_drive_equality() {
    let base = synthesized_add_column();

    let other_table = AddColumn::new(table("sales.orders"), column("status", "varchar"), true, false);
    let other_type = AddColumn::new(table("orders"), column("status", "bigint"), true, false);
    let other_constraint = AddColumn::new(
        table("orders"),
        column("status", "varchar").not_null(),
        true,
        false,
    );

    assert_ne!(base, other_table);
    assert_ne!(base, other_type);
    assert_ne!(base, other_constraint);
}

#[test]
fn test_accessors() {
    let node = parsed_add_column();
    assert_eq!(node.name().to_string(), "orders");
    assert_eq!(node.column().name().value(), "status");
    assert_eq!(node.column().data_type(), "varchar");
    assert!(node.table_name_exists());
    assert!(!node.column_name_not_exists());
}

#[test]
fn test_missing_attributes_always_fail() {
    let cases = [
        AddColumn::builder().build(),
        AddColumn::builder().name(table("orders")).build(),
        AddColumn::builder().column(column("status", "varchar")).build(),
        AddColumn::builder()
            .location(NodeLocation::new(4, 9))
            .table_name_exists(true)
            .column_name_not_exists(true)
            .build(),
    ];

    for result in cases {
        let err = result.unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingAttribute);
        assert!(err.kind.is_precondition_violation());
    }
}

#[test]
fn test_builder_matches_direct_construction() {
    let built = AddColumn::builder()
        .location(NodeLocation::new(1, 1))
        .name(table("orders"))
        .column(column("status", "varchar"))
        .table_name_exists(true)
        .build()
        .unwrap();

    let direct = parsed_add_column();
    assert_eq!(built, direct);
    assert_eq!(built.location(), direct.location());
    assert_eq!(built.table_name_exists(), direct.table_name_exists());
}

#[test]
fn test_debug_lists_name_and_column() {
    let node = parsed_add_column();
    insta::assert_snapshot!(
        format!("{:?}", node),
        @r#"AddColumn { name: QualifiedName("orders"), column: ColumnDefinition { name: Identifier("status"), type: "varchar", nullable: true, properties: [], comment: None } }"#
    );
}

#[test]
fn test_debug_with_properties() {
    let column = column("payload", "varbinary")
        .with_properties([Property::new(ident("compression"), Literal::string("zstd"))])
        .with_comment("raw event body");
    insta::assert_snapshot!(
        format!("{:?}", column),
        @r#"ColumnDefinition { name: Identifier("payload"), type: "varbinary", nullable: true, properties: [Property { name: Identifier("compression"), value: Literal(Literal(String("zstd"))) }], comment: Some("raw event body") }"#
    );
}
