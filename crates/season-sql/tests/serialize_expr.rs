use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use season_core::stmt::{Expr, ExprColumn, Value};
use season_sql::{Flavor, Serializer};

fn col() -> ExprColumn {
    ExprColumn::qualified("node__field_date_from", "field_date_from_value").unwrap()
}

fn serialize(flavor: &str, expr: &Expr) -> String {
    let serializer = match flavor {
        "sqlite" => Serializer::sqlite(),
        "postgresql" => Serializer::postgresql(),
        "mysql" => Serializer::mysql(),
        "ansi" => Serializer::ansi(),
        _ => panic!("unknown flavor: {flavor}"),
    };
    serializer.serialize(expr)
}

#[test]
fn month_mysql() {
    let expr = Expr::eq(Expr::month(col()), 12u32);
    assert_eq!(
        serialize("mysql", &expr),
        "MONTH(node__field_date_from.field_date_from_value) = 12"
    );
}

#[test]
fn month_postgresql() {
    let expr = Expr::eq(Expr::month(col()), 12u32);
    assert_eq!(
        serialize("postgresql", &expr),
        "EXTRACT(MONTH FROM node__field_date_from.field_date_from_value) = 12"
    );
}

#[test]
fn month_sqlite() {
    let expr = Expr::eq(Expr::month(col()), 12u32);
    assert_eq!(
        serialize("sqlite", &expr),
        "CAST(strftime('%m', node__field_date_from.field_date_from_value) AS INTEGER) = 12"
    );
}

#[test]
fn month_ansi() {
    let expr = Expr::eq(Expr::month(col()), 3u32);
    assert_eq!(
        serialize("ansi", &expr),
        "EXTRACT(MONTH FROM node__field_date_from.field_date_from_value) = 3"
    );
}

#[test]
fn or_parenthesizes_each_operand() {
    let month = Expr::month(ExprColumn::named("created").unwrap());
    let expr = Expr::or(
        Expr::or(Expr::eq(month.clone(), 1u32), Expr::eq(month.clone(), 2u32)),
        Expr::eq(month, 3u32),
    );

    assert_eq!(
        serialize("mysql", &expr),
        "(MONTH(created) = 1) OR (MONTH(created) = 2) OR (MONTH(created) = 3)"
    );
}

#[test]
fn not_wraps_inner_expression() {
    let month = Expr::month(ExprColumn::named("created").unwrap());
    let expr = Expr::not(Expr::or(
        Expr::eq(month.clone(), 6u32),
        Expr::eq(month, 7u32),
    ));

    assert_eq!(
        serialize("postgresql", &expr),
        "NOT ((EXTRACT(MONTH FROM created) = 6) OR (EXTRACT(MONTH FROM created) = 7))"
    );
}

#[test]
fn raw_column_is_emitted_verbatim() {
    let expr = Expr::month(ExprColumn::raw("FROM_UNIXTIME(n.created)").unwrap());
    assert_eq!(serialize("mysql", &expr), "MONTH(FROM_UNIXTIME(n.created))");
}

#[test]
fn booleans_per_flavor() {
    assert_eq!(serialize("mysql", &Expr::r#false()), "FALSE");
    assert_eq!(serialize("postgresql", &Expr::r#false()), "FALSE");
    assert_eq!(serialize("sqlite", &Expr::r#false()), "0");
    assert_eq!(serialize("sqlite", &Expr::from(true)), "1");
}

#[test]
fn null_comparison_is_written_through() {
    let expr = Expr::eq(Expr::month(ExprColumn::named("d").unwrap()), Value::Null);

    assert_eq!(serialize("mysql", &expr), "MONTH(d) = NULL");
    assert_eq!(serialize("sqlite", &expr), "CAST(strftime('%m', d) AS INTEGER) = NULL");

    let expr = Expr::eq(Value::Null, Value::Null);
    assert_eq!(serialize("ansi", &expr), "NULL = NULL");
}

#[test]
fn dates_are_inline_literals() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let expr = Expr::eq(col(), Value::from(date));

    assert_eq!(
        serialize("postgresql", &expr),
        "node__field_date_from.field_date_from_value = DATE '2024-03-01'"
    );
    assert_eq!(
        serialize("sqlite", &expr),
        "node__field_date_from.field_date_from_value = '2024-03-01'"
    );

    let at = date.and_hms_opt(8, 30, 0).unwrap();
    assert_eq!(
        serialize("mysql", &Expr::from(Value::from(at))),
        "TIMESTAMP '2024-03-01 08:30:00'"
    );
}

#[test]
fn driver_names_resolve() {
    assert_eq!(Flavor::from_driver("mysql"), Flavor::Mysql);
    assert_eq!(Flavor::from_driver("pgsql"), Flavor::Postgresql);
    assert_eq!(Flavor::from_driver("Postgres"), Flavor::Postgresql);
    assert_eq!(Flavor::from_driver("sqlite"), Flavor::Sqlite);
    assert_eq!(Flavor::from_driver("oracle"), Flavor::Ansi);
    assert_eq!(Flavor::from_driver(""), Flavor::Ansi);
    assert_eq!(Serializer::for_driver("sqlsrv").flavor(), Flavor::Ansi);
}
