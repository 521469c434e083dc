use super::{Delimited, Flavor, Formatter, ToSql};

use season_core::stmt;

impl ToSql for &stmt::Expr {
    fn to_sql(self, f: &mut Formatter<'_>) {
        use stmt::Expr::*;

        match self {
            Column(expr) => expr.to_sql(f),
            // A null operand is written through as `= NULL`, which the
            // database evaluates to null, never to a match.
            Eq(expr) => {
                let (lhs, rhs): (&stmt::Expr, &stmt::Expr) = (&expr.lhs, &expr.rhs);
                fmt!(f, lhs " = " rhs);
            }
            Month(expr) => {
                let arg: &stmt::Expr = &expr.expr;

                match f.serializer.flavor {
                    Flavor::Mysql => fmt!(f, "MONTH(" arg ")"),
                    Flavor::Sqlite => fmt!(f, "CAST(strftime('%m', " arg ") AS INTEGER)"),
                    Flavor::Postgresql | Flavor::Ansi => fmt!(f, "EXTRACT(MONTH FROM " arg ")"),
                }
            }
            Not(expr) => {
                let inner: &stmt::Expr = &expr.expr;
                fmt!(f, "NOT (" inner ")");
            }
            Or(expr) => {
                fmt!(f, Delimited(&expr.operands, " OR "));
            }
            Value(expr) => expr.to_sql(f),
        }
    }
}
