use super::{Formatter, ToSql};

use season_core::stmt;
use std::fmt::Write;

impl ToSql for &stmt::Value {
    fn to_sql(self, f: &mut Formatter<'_>) {
        use stmt::Value::*;

        let sqlite = f.serializer.is_sqlite();

        match self {
            // SQLite only grew TRUE/FALSE keywords in 3.23
            Bool(value) if sqlite => fmt!(f, if *value { "1" } else { "0" }),
            Bool(value) => fmt!(f, if *value { "TRUE" } else { "FALSE" }),
            I64(value) => fmt!(f, *value),
            // SQLite stores dates as ISO-8601 text and has no typed literals
            Date(value) if sqlite => write!(f.dst, "'{}'", value.format("%Y-%m-%d")).unwrap(),
            Date(value) => write!(f.dst, "DATE '{}'", value.format("%Y-%m-%d")).unwrap(),
            DateTime(value) if sqlite => {
                write!(f.dst, "'{}'", value.format("%Y-%m-%d %H:%M:%S")).unwrap()
            }
            DateTime(value) => {
                write!(f.dst, "TIMESTAMP '{}'", value.format("%Y-%m-%d %H:%M:%S")).unwrap()
            }
            Null => fmt!(f, "NULL"),
        }
    }
}
