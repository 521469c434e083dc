use pretty_assertions::assert_eq;
use season_cli::{months, of, predicate};
use season_filter::{EmptySelectionPolicy, Hemisphere};

fn run_predicate(args: &predicate::Args) -> String {
    let mut out = vec![];
    predicate::exec(args, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn predicate_from_flags() {
    let args = predicate::Args {
        column: Some("n.created".to_string()),
        dialect: Some("sqlite".to_string()),
        seasons: vec!["summer".to_string()],
        hemisphere: Some(Hemisphere::Southern),
        ..Default::default()
    };

    assert_eq!(
        run_predicate(&args),
        "(CAST(strftime('%m', n.created) AS INTEGER) = 12) OR \
         (CAST(strftime('%m', n.created) AS INTEGER) = 1) OR \
         (CAST(strftime('%m', n.created) AS INTEGER) = 2)\n"
    );
}

#[test]
fn predicate_comma_separated_and_negated() {
    let args = predicate::Args {
        column: Some("created".to_string()),
        dialect: Some("mysql".to_string()),
        seasons: vec!["spring,autumn".to_string()],
        negate: true,
        ..Default::default()
    };

    let sql = run_predicate(&args);
    assert!(sql.starts_with("NOT ((MONTH(created) = 3) OR"), "sql={sql}");
    assert!(sql.ends_with("(MONTH(created) = 11))\n"), "sql={sql}");
}

#[test]
fn predicate_empty_selection() {
    let mut args = predicate::Args {
        column: Some("created".to_string()),
        ..Default::default()
    };
    assert_eq!(run_predicate(&args), "-- no predicate\n");

    args.empty_selection = Some(EmptySelectionPolicy::MatchNone);
    assert_eq!(run_predicate(&args), "FALSE\n");
}

#[test]
fn predicate_from_options_file() {
    let path = std::env::temp_dir().join(format!("season-cli-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{ "column": "e.starts_on", "dialect": "pgsql", "seasons": ["winter"] }"#,
    )
    .unwrap();

    let args = predicate::Args {
        options: Some(path.clone()),
        seasons: vec!["spring".to_string()],
        ..Default::default()
    };
    let sql = run_predicate(&args);
    std::fs::remove_file(&path).unwrap();

    assert_eq!(
        sql,
        "(EXTRACT(MONTH FROM e.starts_on) = 3) OR (EXTRACT(MONTH FROM e.starts_on) = 4) OR \
         (EXTRACT(MONTH FROM e.starts_on) = 5)\n"
    );
}

#[test]
fn predicate_requires_a_column() {
    let mut out = vec![];
    let err = predicate::exec(&predicate::Args::default(), &mut out).unwrap_err();
    assert!(format!("{err:#}").contains("invalid column"), "err={err:#}");
}

#[test]
fn of_command() {
    let mut out = vec![];
    of::exec("2024-01-15", Hemisphere::Southern, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "summer\n");

    let mut out = vec![];
    assert!(of::exec("2024-02-30", Hemisphere::Northern, &mut out).is_err());
}

#[test]
fn months_command() {
    let mut out = vec![];
    months::exec(Some(Hemisphere::Northern), &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "northern\n\
         \x20   winter    12, 1, 2\n\
         \x20   spring    3, 4, 5\n\
         \x20   summer    6, 7, 8\n\
         \x20   autumn    9, 10, 11\n"
    );
}
