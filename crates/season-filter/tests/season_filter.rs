use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use season_filter::{
    Clause, EmptySelectionPolicy, FilterOptions, Flavor, Hemisphere, Operator, Season,
    SeasonFilter, SeasonSelection,
};

const COLUMN: &str = "node__field_date_from.field_date_from_value";

fn options(seasons: &[&str]) -> FilterOptions {
    let mut options = FilterOptions::new(COLUMN);
    options.dialect = Flavor::Mysql;
    options.seasons = seasons.iter().map(|s| s.to_string()).collect();
    options
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn selected_seasons_produce_where_clause() {
    let filter = SeasonFilter::new(&options(&["autumn"])).unwrap();

    assert_eq!(
        filter.where_clause().unwrap(),
        "(MONTH(node__field_date_from.field_date_from_value) = 9) OR \
         (MONTH(node__field_date_from.field_date_from_value) = 10) OR \
         (MONTH(node__field_date_from.field_date_from_value) = 11)"
    );
}

#[test]
fn not_in_operator_negates() {
    let mut options = options(&["autumn"]);
    options.operator = Operator::NotIn;
    let filter = SeasonFilter::new(&options).unwrap();

    let sql = filter.where_clause().unwrap();
    assert!(sql.starts_with("NOT ((MONTH("), "sql={sql}");
    assert!(filter.matches(date(2024, 3, 1)).unwrap());
    assert!(!filter.matches(date(2024, 10, 1)).unwrap());
}

#[test]
fn empty_selection_without_policy_is_omitted() {
    let filter = SeasonFilter::new(&options(&[])).unwrap();

    assert_eq!(filter.clause(), Clause::Omit);
    assert_eq!(filter.where_clause(), None);
    assert!(filter.matches(None::<NaiveDate>).unwrap());
}

#[test]
fn empty_selection_match_all() {
    let mut options = options(&[]);
    options.empty_selection = Some(EmptySelectionPolicy::MatchAll);
    options.operator = Operator::NotIn;
    let filter = SeasonFilter::new(&options).unwrap();

    let Clause::Where(predicate) = filter.clause() else {
        panic!("expected a predicate");
    };

    // Operator is ignored for an empty selection
    assert!(!predicate.sql().starts_with("NOT"));
    assert_eq!(predicate.sql().matches(" OR ").count(), 11);

    for month in 1..=12 {
        assert!(filter.matches(date(2024, month, 15)).unwrap());
    }
    assert!(!filter.matches(None::<NaiveDate>).unwrap());
}

#[test]
fn empty_selection_match_none() {
    let mut options = options(&[]);
    options.empty_selection = Some(EmptySelectionPolicy::MatchNone);
    let filter = SeasonFilter::new(&options).unwrap();

    assert_eq!(filter.where_clause().unwrap(), "FALSE");
    assert!(!filter.matches(date(2024, 1, 1)).unwrap());

    options.dialect = Flavor::Sqlite;
    let filter = SeasonFilter::new(&options).unwrap();
    assert_eq!(filter.where_clause().unwrap(), "0");
}

#[test]
fn only_unknown_tokens_behave_as_empty() {
    let mut options = options(&["monsoon", "dry"]);
    options.empty_selection = Some(EmptySelectionPolicy::MatchNone);
    let filter = SeasonFilter::new(&options).unwrap();

    assert!(filter.selection().is_empty());
    assert_eq!(filter.where_clause().unwrap(), "FALSE");
}

#[test]
fn exposed_input_replaces_selection() {
    let mut options = options(&["winter"]);
    options.exposed = true;
    options.hemisphere = Hemisphere::Southern;
    let mut filter = SeasonFilter::new(&options).unwrap();

    assert!(filter.accept_exposed_input(["summer,autumn", " ", "bogus"]));
    assert_eq!(
        filter.selection(),
        SeasonSelection::from([Season::Summer, Season::Autumn])
    );

    // Southern summer and autumn cover December through May
    assert!(filter.matches(date(2024, 12, 24)).unwrap());
    assert!(filter.matches(date(2024, 4, 2)).unwrap());
    assert!(!filter.matches(date(2024, 7, 2)).unwrap());

    assert!(filter.accept_exposed_input(Vec::<String>::new()));
    assert!(filter.selection().is_empty());
    assert_eq!(filter.clause(), Clause::Omit);
}

#[test]
fn input_ignored_when_not_exposed() {
    let mut filter = SeasonFilter::new(&options(&["winter"])).unwrap();

    assert!(!filter.accept_exposed_input(["summer"]));
    assert_eq!(filter.selection(), SeasonSelection::from(Season::Winter));
}

#[test]
fn admin_summary() {
    let mut options = options(&["summer", "winter"]);
    let filter = SeasonFilter::new(&options).unwrap();
    assert_eq!(filter.admin_summary(), "in Winter, Summer (northern hemisphere)");

    options.operator = Operator::NotIn;
    options.hemisphere = Hemisphere::Southern;
    let filter = SeasonFilter::new(&options).unwrap();
    assert_eq!(
        filter.admin_summary(),
        "not in Winter, Summer (southern hemisphere)"
    );

    let mut options = self::options(&[]);
    assert_eq!(SeasonFilter::new(&options).unwrap().admin_summary(), "no restriction");

    options.exposed = true;
    options.empty_selection = Some(EmptySelectionPolicy::MatchAll);
    assert_eq!(
        SeasonFilter::new(&options).unwrap().admin_summary(),
        "exposed (all seasons until chosen)"
    );
}

#[test]
fn value_options_list_every_season() {
    assert_eq!(
        SeasonFilter::value_options(),
        [
            ("winter", "Winter"),
            ("spring", "Spring"),
            ("summer", "Summer"),
            ("autumn", "Autumn"),
        ]
    );
}

#[test]
fn invalid_column_is_rejected() {
    let err = SeasonFilter::new(&FilterOptions::new("  ")).unwrap_err();
    assert!(err.is_invalid_column());
}
