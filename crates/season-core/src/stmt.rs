mod eval;

mod expr;
pub use expr::Expr;

mod expr_column;
pub use expr_column::ExprColumn;

mod expr_eq;
pub use expr_eq::ExprEq;

mod expr_month;
pub use expr_month::ExprMonth;

mod expr_not;
pub use expr_not::ExprNot;

mod expr_or;
pub use expr_or::ExprOr;

mod input;
pub use input::{ConstInput, Input};

mod value;
pub use value::Value;
