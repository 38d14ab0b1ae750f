/// The `(model, command, out_message)` working unit.
pub type Triple<M, C, O> = (M, C, O);

/// `(a, b, c)` to `(a, (b, c))`.
///
/// Splits a [`Triple`] into the `(value, result)` pair a
/// [`State`](crate::state::State) step returns.
pub fn to_nested<A, B, C>((a, b, c): (A, B, C)) -> (A, (B, C)) {
    (a, (b, c))
}

/// `(a, (b, c))` to `(a, b, c)`.
pub fn from_nested<A, B, C>((a, (b, c)): (A, (B, C))) -> (A, B, C) {
    (a, b, c)
}

/// `(a, b)` to `(b, a)`.
pub fn swap<A, B>((a, b): (A, B)) -> (B, A) {
    (b, a)
}
