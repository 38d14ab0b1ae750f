use crate::shape::Triple;

/// Apply `f` to the model, leaving the command and out-message alone.
///
/// Typically used to put an updated child model back into the parent.
///
/// ```
/// use outfold::map_component;
///
/// assert_eq!(map_component(|n: i32| n + 1, (1, (), "out")), (2, (), "out"));
/// ```
pub fn map_component<M, N, C, O, F>(f: F, (model, cmd, out_msg): Triple<M, C, O>) -> Triple<N, C, O>
where
    F: FnOnce(M) -> N,
{
    (f(model), cmd, out_msg)
}

/// Apply `f` to the command, leaving the model and out-message alone.
pub fn map_cmd<M, C, D, O, F>(f: F, (model, cmd, out_msg): Triple<M, C, O>) -> Triple<M, D, O>
where
    F: FnOnce(C) -> D,
{
    (model, f(cmd), out_msg)
}

/// Apply `f` to the out-message, leaving the model and command alone.
pub fn map_out_msg<M, C, O, P, F>(f: F, (model, cmd, out_msg): Triple<M, C, O>) -> Triple<M, C, P>
where
    F: FnOnce(O) -> P,
{
    (model, cmd, f(out_msg))
}
