//! Types that represent the input data model, such as `Transaction` and `BudgetItem`.
mod amount;
mod budget;
mod month;
mod transaction;

pub use amount::{Amount, AmountError};
pub use budget::BudgetItem;
pub use month::{month_key, month_label};
pub use transaction::{Transaction, TransactionType};
