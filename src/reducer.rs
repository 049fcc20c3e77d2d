use crate::Matcher;
use std::{fmt::Debug, marker::PhantomData};

/// Implementors of this trait take an `Action` and the previous
/// `State`, and produce the next `State`.
///
/// Any `Fn(State, &Action) -> State` closure or function is a
/// [Reducer].
pub trait Reducer<State, Action: ?Sized> {
    /// Take an `Action` and the `prev_state`, producing the next
    /// `State`.
    fn reduce(&self, prev_state: State, action: &Action) -> State;
}

impl<State, Action: ?Sized, F> Reducer<State, Action> for F
where
    F: Fn(State, &Action) -> State,
{
    fn reduce(&self, prev_state: State, action: &Action) -> State {
        (self)(prev_state, action)
    }
}

/// Binds a `State` shape once, so that every reducer paired through
/// it in a reducer module shares that shape. Created with
/// [make_reducer_factory()].
///
/// This type has no runtime representation of `State`.
pub struct ReducerFactory<State> {
    _state: PhantomData<fn(State) -> State>,
}

impl<State> ReducerFactory<State> {
    /// Pair a `reducer` with the `matcher` recognising the actions it
    /// handles, returning the `reducer` unchanged.
    ///
    /// The only effect of this method is at compile time: `reducer`
    /// must accept the action produced by the matcher's constructor,
    /// and must take and return this factory's `State`.
    pub fn pair<M, R>(&self, _matcher: &M, reducer: R) -> R
    where
        M: Matcher,
        R: Fn(State, &M::Output) -> State,
    {
        reducer
    }
}

impl<State> Clone for ReducerFactory<State> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<State> Copy for ReducerFactory<State> {}

impl<State> Default for ReducerFactory<State> {
    fn default() -> Self {
        make_reducer_factory()
    }
}

impl<State> Debug for ReducerFactory<State> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ReducerFactory<{}>", std::any::type_name::<State>())
    }
}

/// Create a [ReducerFactory] for the given `State`.
///
/// ```
/// use matchable_action::{make_matchable, make_reducer_factory, Action};
///
/// struct Increment {
///     amount: i64,
/// }
///
/// impl Action for Increment {
///     fn action_type(&self) -> &str {
///         "INCREMENT"
///     }
/// }
///
/// let increment = make_matchable(|amount: i64| Increment { amount });
/// let reduce_for_action = make_reducer_factory::<i64>();
/// let inc_reducer = reduce_for_action.pair(&increment, |state, action| state + action.amount);
///
/// assert_eq!(15, inc_reducer(10, &Increment { amount: 5 }));
/// ```
pub fn make_reducer_factory<State>() -> ReducerFactory<State> {
    ReducerFactory {
        _state: PhantomData,
    }
}

/// A single entry in a [MatchReducer].
struct MatchCase<State, Action> {
    matcher: Box<dyn Fn(&Action) -> bool + Send + Sync>,
    reducer: Box<dyn Reducer<State, Action> + Send + Sync>,
}

/// A [Reducer] which tests an incoming `Action` against each
/// registered matcher in turn, and delegates to the reducer paired
/// with the first one that matches.
///
/// If no matcher recognises the action, the state is returned
/// unchanged. Matchers and reducers must be `Send + Sync`, so a
/// [MatchReducer] can be shared between threads.
pub struct MatchReducer<State, Action> {
    cases: Vec<MatchCase<State, Action>>,
}

impl<State, Action> MatchReducer<State, Action>
where
    Action: crate::Action,
{
    /// Create a new [MatchReducer] with no cases.
    pub fn new() -> Self {
        MatchReducer { cases: Vec::new() }
    }

    /// Register a `reducer` for the actions recognised by `matcher`.
    /// Cases are tested in the order they were registered.
    pub fn on<M, R>(mut self, matcher: M, reducer: R) -> Self
    where
        M: Matcher<Output = Action> + Send + Sync + 'static,
        R: Reducer<State, Action> + Send + Sync + 'static,
    {
        self.cases.push(MatchCase {
            matcher: Box::new(move |action: &Action| matcher.matches(action)),
            reducer: Box::new(reducer),
        });
        self
    }

    /// The number of registered cases.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

impl<State, Action> Default for MatchReducer<State, Action>
where
    Action: crate::Action,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<State, Action> Reducer<State, Action> for MatchReducer<State, Action>
where
    Action: crate::Action,
{
    fn reduce(&self, prev_state: State, action: &Action) -> State {
        for (i, case) in self.cases.iter().enumerate() {
            if (case.matcher)(action) {
                log::trace!("action {:?} matched case {}", action.action_type(), i);
                return case.reducer.reduce(prev_state, action);
            }
        }

        log::trace!("action {:?} matched no case", action.action_type());
        prev_state
    }
}

impl<State, Action> Debug for MatchReducer<State, Action> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchReducer")
            .field("cases", &self.cases.len())
            .finish()
    }
}

/// A [Reducer] composed of multiple reducers, each of which is run
/// in order on the state produced by the previous one.
pub struct CompositeReducer<State, Action: ?Sized> {
    reducers: Vec<Box<dyn Reducer<State, Action> + Send + Sync>>,
}

impl<State, Action: ?Sized> CompositeReducer<State, Action> {
    /// Create a new [CompositeReducer].
    pub fn new(reducers: Vec<Box<dyn Reducer<State, Action> + Send + Sync>>) -> Self {
        CompositeReducer { reducers }
    }
}

impl<State, Action: ?Sized> Reducer<State, Action> for CompositeReducer<State, Action> {
    fn reduce(&self, prev_state: State, action: &Action) -> State {
        self.reducers
            .iter()
            .fold(prev_state, |state, reducer| reducer.reduce(state, action))
    }
}
