use serde::{Deserialize, Serialize};

/// A mergeable description of pending side effects.
///
/// Implementations form a monoid: [`Command::none`] is the identity and
/// [`Command::batch`] is associative. The combinators in this crate never
/// inspect a command, they only merge commands left to right in the order
/// they were produced.
///
/// # Examples
///
/// ```
/// use outfold::Command;
///
/// #[derive(Debug, PartialEq)]
/// struct Log(Vec<&'static str>);
///
/// impl Command for Log {
///     fn none() -> Self {
///         Log(Vec::new())
///     }
///
///     fn batch(mut self, other: Self) -> Self {
///         self.0.extend(other.0);
///         self
///     }
/// }
///
/// let merged = Log::batch_all([Log(vec!["save"]), Log::none(), Log(vec!["notify"])]);
/// assert_eq!(merged, Log(vec!["save", "notify"]));
/// ```
pub trait Command: Sized {
    /// The command that does nothing.
    fn none() -> Self;

    /// Merge `self` and `other`; `self`'s effects come first.
    fn batch(self, other: Self) -> Self;

    /// Merge a sequence of commands left to right, starting from `none()`.
    fn batch_all<I>(commands: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        commands.into_iter().fold(Self::none(), Self::batch)
    }
}

impl Command for () {
    fn none() -> Self {}

    fn batch(self, _other: Self) -> Self {}
}

impl<T> Command for Vec<T> {
    fn none() -> Self {
        Vec::new()
    }

    fn batch(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

/// An ordered list of effect descriptions.
///
/// `Cmd` is a ready-made [`Command`]: batching concatenates, so merging any
/// number of [`Cmd::none`] values is still `Cmd::none()`. It serializes as a
/// plain JSON array of its actions.
///
/// # Examples
///
/// ```
/// use outfold::{Cmd, Command};
///
/// let cmd = Cmd::single("fetch").batch(Cmd::none()).batch(Cmd::single("render"));
/// assert_eq!(cmd.iter().copied().collect::<Vec<_>>(), vec!["fetch", "render"]);
/// assert!(Cmd::<&str>::none().batch(Cmd::none()).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cmd<T> {
    actions: Vec<T>,
}

impl<T> Cmd<T> {
    /// A command with no actions.
    pub fn none() -> Self {
        Cmd {
            actions: Vec::new(),
        }
    }

    /// A command with exactly one action.
    pub fn single(action: T) -> Self {
        Cmd {
            actions: vec![action],
        }
    }

    /// Returns `true` if there is nothing to perform.
    pub fn is_none(&self) -> bool {
        self.actions.is_empty()
    }

    /// Number of queued actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Iterate over queued actions in the order they will run.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.actions.iter()
    }

    /// Lift every action into another type.
    ///
    /// A parent uses this to wrap a child's command in its own message type
    /// before merging, usually via [`map_cmd`](crate::map_cmd).
    pub fn map<U, F>(self, f: F) -> Cmd<U>
    where
        F: FnMut(T) -> U,
    {
        Cmd {
            actions: self.actions.into_iter().map(f).collect(),
        }
    }
}

impl<T> Default for Cmd<T> {
    fn default() -> Self {
        Cmd::none()
    }
}

impl<T> Command for Cmd<T> {
    fn none() -> Self {
        Cmd::none()
    }

    fn batch(mut self, other: Self) -> Self {
        self.actions.extend(other.actions);
        self
    }
}

impl<T> FromIterator<T> for Cmd<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Cmd {
            actions: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Cmd<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Cmd<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

/// Merge `(command, out_message)` pairs into one command and the ordered
/// out-messages.
///
/// Folds left to right from `C::none()`: the accumulated command is batched
/// with each pair's command (accumulated first) and each out-message is
/// appended. No pairs yields `(C::none(), vec![])`.
pub fn batch_with_outputs<C, O, I>(pairs: I) -> (C, Vec<O>)
where
    C: Command,
    I: IntoIterator<Item = (C, O)>,
{
    pairs
        .into_iter()
        .fold((C::none(), Vec::new()), |(acc, mut outputs), (cmd, out)| {
            outputs.push(out);
            (acc.batch(cmd), outputs)
        })
}
