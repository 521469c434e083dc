use super::{Formatter, ToSql};

use season_core::stmt::ExprColumn;

impl ToSql for &ExprColumn {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            ExprColumn::Named {
                table: Some(table),
                name,
            } => {
                let (table, name): (&str, &str) = (table, name);
                fmt!(f, table "." name);
            }
            ExprColumn::Named { table: None, name } => {
                let name: &str = name;
                fmt!(f, name);
            }
            ExprColumn::Raw(sql) => {
                let sql: &str = sql;
                fmt!(f, sql);
            }
        }
    }
}
