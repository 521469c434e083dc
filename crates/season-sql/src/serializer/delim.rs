use super::{Formatter, ToSql};

/// Items joined by an arbitrary separator, each wrapped in parentheses.
pub(super) struct Delimited<L>(pub(super) L, pub(super) &'static str);

impl<L> ToSql for Delimited<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql(self, f: &mut Formatter<'_>) {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s "(" i ")");
            s = self.1;
        }
    }
}
