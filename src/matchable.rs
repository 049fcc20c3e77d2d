use crate::Action;
use std::{any::type_name, borrow::Cow, fmt, marker::PhantomData};

/// A function which builds an action from a tuple of arguments.
///
/// This is implemented for every `Fn` taking up to eight arguments,
/// with `Args` being the tuple of the argument types (`()` for a
/// constructor which takes no arguments). Implementors are expected
/// to produce an action whose `type` does not depend on the arguments.
pub trait ActionConstructor<Args> {
    /// The value produced by this constructor, usually an [Action].
    type Output;

    /// Invoke this constructor with the given arguments.
    fn construct(&self, args: Args) -> Self::Output;
}

macro_rules! impl_action_constructor {
    ($($arg:ident),*) => {
        impl<Func, Out, $($arg,)*> ActionConstructor<($($arg,)*)> for Func
        where
            Func: Fn($($arg),*) -> Out,
        {
            type Output = Out;

            #[allow(non_snake_case)]
            fn construct(&self, ($($arg,)*): ($($arg,)*)) -> Out {
                (self)($($arg),*)
            }
        }
    };
}

impl_action_constructor!();
impl_action_constructor!(A1);
impl_action_constructor!(A1, A2);
impl_action_constructor!(A1, A2, A3);
impl_action_constructor!(A1, A2, A3, A4);
impl_action_constructor!(A1, A2, A3, A4, A5);
impl_action_constructor!(A1, A2, A3, A4, A5, A6);
impl_action_constructor!(A1, A2, A3, A4, A5, A6, A7);
impl_action_constructor!(A1, A2, A3, A4, A5, A6, A7, A8);

/// An action constructor which can also recognise the actions it
/// produces.
pub trait Matcher {
    /// The action produced by the wrapped constructor.
    type Output;

    /// Returns `true` if `candidate` has the same `type` as the
    /// actions produced by this constructor.
    fn matches<C: Action + ?Sized>(&self, candidate: &C) -> bool;
}

/// An action constructor augmented with a [matches()](Matchable::matches())
/// predicate. Created with [make_matchable()].
///
/// Call [invoke()](Matchable::invoke()) to construct an action.
pub struct Matchable<F, Args> {
    constructor: F,
    _args: PhantomData<fn(Args)>,
}

impl<F, Args> Matchable<F, Args>
where
    F: ActionConstructor<Args>,
{
    /// Invoke the wrapped constructor. Behaves exactly like calling
    /// the constructor directly.
    pub fn invoke(&self, args: Args) -> F::Output {
        self.constructor.construct(args)
    }

    /// Returns `true` if `candidate` has the same `type` as the
    /// actions produced by the wrapped constructor. Payload fields are
    /// not compared.
    ///
    /// The constructor is invoked with default arguments on every
    /// call to obtain the reference `type`, so any side effect it has
    /// fires once per call. A constructor which panics for default
    /// arguments causes this method to panic in the same way.
    pub fn matches<C>(&self, candidate: &C) -> bool
    where
        Args: Default,
        F::Output: Action,
        C: Action + ?Sized,
    {
        let reference = self.constructor.construct(Args::default());
        candidate.action_type() == reference.action_type()
    }

    /// Consume this wrapper, returning the constructor.
    pub fn into_inner(self) -> F {
        self.constructor
    }
}

impl<F, Args, A, E> Matchable<F, Args>
where
    F: ActionConstructor<Args, Output = Result<A, E>>,
    A: Action,
{
    /// [matches()](Matchable::matches()) for a fallible constructor.
    /// An error produced while building the reference action is
    /// returned unchanged.
    pub fn try_matches<C>(&self, candidate: &C) -> Result<bool, E>
    where
        Args: Default,
        C: Action + ?Sized,
    {
        let reference = self.constructor.construct(Args::default())?;
        Ok(candidate.action_type() == reference.action_type())
    }
}

impl<F, Args> Matcher for Matchable<F, Args>
where
    F: ActionConstructor<Args>,
    F::Output: Action,
    Args: Default,
{
    type Output = F::Output;

    fn matches<C: Action + ?Sized>(&self, candidate: &C) -> bool {
        Matchable::matches(self, candidate)
    }
}

impl<F: Clone, Args> Clone for Matchable<F, Args> {
    fn clone(&self) -> Self {
        Self {
            constructor: self.constructor.clone(),
            _args: PhantomData,
        }
    }
}

impl<F, Args> fmt::Debug for Matchable<F, Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matchable")
            .field("constructor", &type_name::<F>())
            .finish()
    }
}

/// Wrap an action `constructor` so that it can recognise the actions
/// it produces.
///
/// ```
/// use matchable_action::{make_matchable, PlainAction};
///
/// let increment = make_matchable(|amount: i64| {
///     PlainAction::new("INCREMENT").with_field("amount", amount)
/// });
///
/// assert!(increment.matches(&increment.invoke((5,))));
/// assert!(!increment.matches(&PlainAction::new("DECREMENT")));
/// ```
pub fn make_matchable<F, Args>(constructor: F) -> Matchable<F, Args>
where
    F: ActionConstructor<Args>,
{
    Matchable {
        constructor,
        _args: PhantomData,
    }
}

/// An action constructor paired with the `type` label it produces.
/// Created with [make_matchable_with_type()].
///
/// Unlike [Matchable], matching never invokes the constructor, so it
/// may require arguments which have no default.
pub struct TaggedMatchable<F, Args> {
    action_type: Cow<'static, str>,
    constructor: F,
    _args: PhantomData<fn(Args)>,
}

impl<F, Args> TaggedMatchable<F, Args>
where
    F: ActionConstructor<Args>,
{
    pub fn invoke(&self, args: Args) -> F::Output {
        self.constructor.construct(args)
    }

    /// The `type` label supplied for this constructor.
    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    /// Returns `true` if `candidate` has this constructor's `type`
    /// label.
    pub fn matches<C: Action + ?Sized>(&self, candidate: &C) -> bool {
        candidate.action_type() == self.action_type
    }

    pub fn into_inner(self) -> F {
        self.constructor
    }
}

impl<F, Args> Matcher for TaggedMatchable<F, Args>
where
    F: ActionConstructor<Args>,
{
    type Output = F::Output;

    fn matches<C: Action + ?Sized>(&self, candidate: &C) -> bool {
        TaggedMatchable::matches(self, candidate)
    }
}

impl<F: Clone, Args> Clone for TaggedMatchable<F, Args> {
    fn clone(&self) -> Self {
        Self {
            action_type: self.action_type.clone(),
            constructor: self.constructor.clone(),
            _args: PhantomData,
        }
    }
}

impl<F, Args> fmt::Debug for TaggedMatchable<F, Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedMatchable")
            .field("action_type", &self.action_type)
            .field("constructor", &type_name::<F>())
            .finish()
    }
}

/// Wrap an action `constructor` which always produces actions of
/// `action_type`.
///
/// The label is trusted: it is the caller's responsibility that it
/// agrees with the `type` of the actions the constructor builds.
///
/// ```
/// use matchable_action::{make_matchable_with_type, PlainAction};
///
/// let rename = make_matchable_with_type("RENAME", |name: String| {
///     assert!(!name.is_empty());
///     PlainAction::new("RENAME").with_field("name", name)
/// });
///
/// assert!(rename.matches(&PlainAction::new("RENAME")));
/// ```
pub fn make_matchable_with_type<S, F, Args>(action_type: S, constructor: F) -> TaggedMatchable<F, Args>
where
    S: Into<Cow<'static, str>>,
    F: ActionConstructor<Args>,
{
    TaggedMatchable {
        action_type: action_type.into(),
        constructor,
        _args: PhantomData,
    }
}
