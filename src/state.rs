//! A minimal state-threading sequencer.
//!
//! A [`State`] wraps a step that consumes a value of type `S` and returns the
//! next value together with a result. Chaining units feeds the value produced
//! by one step into the next, which is how
//! [`evaluate_list`](crate::evaluate_list) threads a model through a list of
//! out-messages.
//!
//! # Examples
//!
//! ```
//! use outfold::state::{self, State};
//!
//! // Number each word with a running counter.
//! let numbered = state::traverse(["a", "b", "c"], |word| {
//!     State::advance(move |n: u32| (n + 1, format!("{n}:{word}")))
//! });
//!
//! let (next, labels) = numbered.run(1);
//! assert_eq!(next, 4);
//! assert_eq!(labels, vec!["1:a", "2:b", "3:c"]);
//! ```

/// A deferred step from `S` to `(S, A)`.
///
/// Nothing runs until [`State::run`] is called with an initial value.
pub struct State<'a, S, A> {
    step: Box<dyn FnOnce(S) -> (S, A) + 'a>,
}

impl<S, A> std::fmt::Debug for State<'_, S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State").finish_non_exhaustive()
    }
}

impl<'a, S, A> State<'a, S, A> {
    /// Build a unit from a step function.
    ///
    /// The step receives the current value and returns the new value plus
    /// the unit's result.
    pub fn advance<F>(step: F) -> Self
    where
        F: FnOnce(S) -> (S, A) + 'a,
    {
        State {
            step: Box::new(step),
        }
    }

    /// Run the unit against `initial`, returning `(final_value, result)`.
    pub fn run(self, initial: S) -> (S, A) {
        (self.step)(initial)
    }

    /// Transform the result without touching the threaded value.
    ///
    /// ```
    /// use outfold::state::State;
    ///
    /// let unit = State::advance(|n: i32| (n * 2, n)).map(|n| n.to_string());
    /// assert_eq!(unit.run(21), (42, "21".to_string()));
    /// ```
    pub fn map<B, F>(self, f: F) -> State<'a, S, B>
    where
        F: FnOnce(A) -> B + 'a,
        S: 'a,
        A: 'a,
    {
        State::advance(move |value| {
            let (value, result) = self.run(value);
            (value, f(result))
        })
    }

    /// Run `self`, then build and run the next unit from its result.
    ///
    /// The second unit observes the value left behind by the first.
    pub fn and_then<B, F>(self, f: F) -> State<'a, S, B>
    where
        F: FnOnce(A) -> State<'a, S, B> + 'a,
        S: 'a,
        A: 'a,
    {
        State::advance(move |value| {
            let (value, result) = self.run(value);
            f(result).run(value)
        })
    }
}

/// Chain one unit per item, collecting results in input order.
///
/// Units are built lazily: `f` is called for item `i + 1` only after the
/// unit for item `i` has run.
pub fn traverse<'a, S, T, A, I, F>(items: I, mut f: F) -> State<'a, S, Vec<A>>
where
    I: IntoIterator<Item = T> + 'a,
    F: FnMut(T) -> State<'a, S, A> + 'a,
{
    State::advance(move |initial| {
        let items = items.into_iter();
        let mut results = Vec::with_capacity(items.size_hint().0);
        let mut value = initial;
        for item in items {
            let (next, result) = f(item).run(value);
            value = next;
            results.push(result);
        }
        (value, results)
    })
}

/// Chain prebuilt units, collecting their results in order.
pub fn sequence<'a, S, A, I>(units: I) -> State<'a, S, Vec<A>>
where
    I: IntoIterator<Item = State<'a, S, A>> + 'a,
{
    traverse(units, |unit| unit)
}
