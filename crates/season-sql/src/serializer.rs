#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Delimited;

mod flavor;
pub use flavor::Flavor;

// Fragment serializers
mod column;
mod expr;
mod value;

use season_core::stmt::Expr;

/// Serialize an expression to a SQL fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects.
    flavor: Flavor,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    pub fn new(flavor: Flavor) -> Serializer {
        Serializer { flavor }
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Serializes `expr` as a boolean fragment suitable for a `WHERE`
    /// clause. Every value is written inline as a literal.
    pub fn serialize(&self, expr: &Expr) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        expr.to_sql(&mut fmt);

        ret
    }

    fn is_sqlite(&self) -> bool {
        matches!(self.flavor, Flavor::Sqlite)
    }
}
