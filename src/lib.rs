//! Helpers for building matchable action constructors and pairing
//! them with reducers, for use with redux-style state management.
//!
//! + [make_prefixer()] namespaces action `type` labels.
//! + [make_matchable()] wraps an action constructor so that it can
//!   recognise the actions it produces, via
//!   [matches()](Matchable::matches()).
//! + [make_reducer_factory()] pairs a matchable constructor with the
//!   reducer that handles its actions, checking at compile time that
//!   the two agree on the action and state types.
//!
//! ```
//! use matchable_action::{
//!     make_matchable, make_prefixer, make_reducer_factory, MatchReducer, PlainAction, Reducer,
//! };
//!
//! let prefixer = make_prefixer("COUNTER_");
//! let increment_type = prefixer("INCREMENT");
//! let increment = make_matchable(move |amount: i64| {
//!     PlainAction::new(increment_type.clone()).with_field("amount", amount)
//! });
//!
//! let reduce_for_action = make_reducer_factory::<i64>();
//! let inc_reducer = reduce_for_action.pair(&increment, |state, action| {
//!     state + action.field("amount").and_then(|amount| amount.as_i64()).unwrap_or(0)
//! });
//!
//! let reducer = MatchReducer::new().on(increment.clone(), inc_reducer);
//! assert_eq!(15, reducer.reduce(10, &increment.invoke((5,))));
//! assert_eq!(10, reducer.reduce(10, &PlainAction::new("COUNTER_RESET")));
//! ```

mod action;
mod error;
#[cfg(feature = "simple_logger")]
pub mod logger;
mod matchable;
mod prefix;
mod reducer;
#[cfg(test)]
mod test_logger;

pub use action::*;
pub use error::{Error, Result};
pub use matchable::*;
pub use prefix::*;
pub use reducer::*;
