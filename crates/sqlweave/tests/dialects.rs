//! Rendering the same statements under different dialects.

use chrono::NaiveDate;
use sqlweave::{
    Clause, ColumnExpr, ColumnType, Delete, Dialect, Operand, Parameter, Select, Statement,
    Substitution, Table, Update, WithTable,
};

fn users() -> Table {
    Table::new("users")
}

#[test]
fn placeholders_follow_marker_rules() {
    let t = users();
    let select = Select::new(t.clone()).filter(Clause::and(
        Clause::eq(t.column("a"), Parameter::unnamed()),
        Clause::eq(t.column("b"), Parameter::unnamed()),
    ));

    assert_eq!(
        select.build(&Dialect::ansi()).unwrap(),
        "SELECT * FROM users WHERE (a = ?) AND (b = ?)"
    );
    assert_eq!(
        select.build(&Dialect::postgres()).unwrap(),
        "SELECT * FROM users WHERE (a = $1) AND (b = $2)"
    );
    assert_eq!(
        select.build(&Dialect::sqlserver()).unwrap(),
        "SELECT * FROM users WHERE (a = @p1) AND (b = @p2)"
    );
}

#[test]
fn booleans_and_quotes_follow_dialect() {
    let t = Table::new("user accounts");
    let select = Select::new(t.clone()).filter(Clause::eq(t.column("is active"), true));

    assert_eq!(
        select.build(&Dialect::ansi()).unwrap(),
        "SELECT * FROM \"user accounts\" WHERE \"is active\" = TRUE"
    );
    assert_eq!(
        select.build(&Dialect::mysql()).unwrap(),
        "SELECT * FROM `user accounts` WHERE `is active` = TRUE"
    );
    assert_eq!(
        select.build(&Dialect::sqlite()).unwrap(),
        "SELECT * FROM \"user accounts\" WHERE \"is active\" = 1"
    );
}

#[test]
fn dates_use_dialect_formatter() {
    let t = users();
    let when = NaiveDate::from_ymd_opt(2024, 2, 29)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap();
    let select = Select::new(t.clone()).filter(Clause::gt(t.column("created_at"), when));

    assert_eq!(
        select.build(&Dialect::ansi()).unwrap(),
        "SELECT * FROM users WHERE created_at > '2024-02-29 08:30:00'"
    );
    assert_eq!(
        select.build(&Dialect::postgres()).unwrap(),
        "SELECT * FROM users WHERE created_at > '2024-02-29 08:30:00'::timestamp"
    );
}

#[test]
fn any_subquery_gated_by_dialect() {
    let t = users();
    let admins = Table::new("admins");
    let sub = Select::new(admins.clone()).columns(vec![admins.column("user_id")]);
    let select = Select::new(t.clone()).filter(Clause::eq(t.column("id"), Operand::any(sub)));

    assert_eq!(
        select.build(&Dialect::ansi()).unwrap(),
        "SELECT * FROM users WHERE id = ANY (SELECT user_id FROM admins)"
    );
    assert!(select.build(&Dialect::sqlite()).unwrap_err().is_syntax());
}

#[test]
fn expressions_use_substitutions() {
    let t = users();
    let select = Select::new(t.clone())
        .columns(vec![
            Operand::from(ColumnExpr::upper(t.column("name"))),
            Operand::from(ColumnExpr::cast(t.column("age"), ColumnType::Int32)),
        ])
        .filter(Clause::lt(t.column("created_at"), ColumnExpr::Now));

    assert_eq!(
        select.build(&Dialect::mysql()).unwrap(),
        "SELECT UCASE(name), CAST(age AS SIGNED) FROM users WHERE created_at < NOW()"
    );
    assert_eq!(
        select.build(&Dialect::ansi()).unwrap(),
        "SELECT UPPER(name), CAST(age AS INTEGER) FROM users WHERE created_at < CURRENT_TIMESTAMP"
    );
}

#[test]
fn with_adaptation_per_dialect() {
    let t = users();
    let stale = WithTable::new(
        "stale",
        Select::new(t.clone())
            .columns(vec![t.column("id")])
            .filter(Clause::is_null(t.column("last_login"))),
    );

    let delete = Delete::new(t.clone()).with_tables(vec![stale.clone()]);
    assert_eq!(
        delete.build(&Dialect::postgres()).unwrap(),
        "WITH stale AS (SELECT id FROM users WHERE last_login IS NULL) DELETE FROM users USING stale"
    );

    let update = Update::new(t.clone(), vec![(t.column("active"), false)])
        .unwrap()
        .with_tables(vec![stale]);
    assert_eq!(
        update.build(&Dialect::postgres()).unwrap(),
        "WITH stale AS (SELECT id FROM users WHERE last_login IS NULL) \
         UPDATE users SET active = FALSE FROM stale"
    );
}

#[test]
fn dialect_from_toml() {
    let raw = r#"
        name = "custom"
        add-numbers-to-parameters = true
        any-on-subquery-supported = false

        [substitutions]
        numbered-parameter = ":"
        boolean-true = "'Y'"
    "#;
    let dialect = Dialect::from_toml_str(raw).unwrap();
    assert_eq!(dialect.name, "custom");
    assert_eq!(dialect.text(Substitution::NumberedParameter), ":");

    let t = users();
    let select = Select::new(t.clone()).filter(Clause::and(
        Clause::eq(t.column("vip"), true),
        Clause::eq(t.column("id"), Parameter::unnamed()),
    ));
    assert_eq!(
        select.build(&dialect).unwrap(),
        "SELECT * FROM users WHERE (vip = 'Y') AND (id = :1)"
    );
}

#[test]
fn dialect_serializes_with_kebab_keys() {
    let json = serde_json::to_value(Dialect::postgres()).unwrap();
    assert_eq!(json["name"], "postgres");
    assert_eq!(json["add-numbers-to-parameters"], true);
    assert_eq!(json["with-delete-requires-using"], true);
    assert_eq!(json["substitutions"]["numbered-parameter"], "$");
    assert_eq!(json["substitutions"]["now"], "NOW()");
}
