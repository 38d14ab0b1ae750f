use crate::command::{batch_with_outputs, Command};
use crate::shape::{to_nested, Triple};
use crate::state::{self, State};

/// Interpret a single child out-message.
///
/// Calls `interpret(out_msg, model)` and batches the pending command before
/// the command it returns.
///
/// # Examples
///
/// ```
/// use outfold::evaluate;
///
/// let (model, cmd, out) = evaluate(
///     |n: u32, total: u32| (total + n, vec!["added"], total + n > 10),
///     (8, vec!["pending"], 5),
/// );
/// assert_eq!(model, 13);
/// assert_eq!(cmd, vec!["pending", "added"]);
/// assert!(out);
/// ```
pub fn evaluate<M, C, O, P, F>(
    interpret: F,
    (model, pending, out_msg): Triple<M, C, O>,
) -> Triple<M, C, P>
where
    C: Command,
    F: FnOnce(O, M) -> Triple<M, C, P>,
{
    let (model, cmd, parent_msg) = interpret(out_msg, model);
    (model, pending.batch(cmd), parent_msg)
}

/// Interpret an optional child out-message.
///
/// With `None`, returns `(model, default, None)` without calling
/// `interpret`. The pending command is replaced by `default`, not merged
/// with it. With `Some`, behaves like [`evaluate`].
pub fn evaluate_maybe<M, C, O, P, F>(
    interpret: F,
    default: C,
    (model, pending, out_msg): Triple<M, C, Option<O>>,
) -> Triple<M, C, Option<P>>
where
    C: Command,
    F: FnOnce(O, M) -> Triple<M, C, P>,
{
    match out_msg {
        None => {
            log::trace!("no out-message, substituting default command");
            (model, default, None)
        }
        Some(out_msg) => {
            let (model, cmd, parent_msg) = evaluate(interpret, (model, pending, out_msg));
            (model, cmd, Some(parent_msg))
        }
    }
}

/// Interpret a list of child out-messages in order.
///
/// The model is threaded through the calls: each call sees the model
/// returned by the previous one. Commands are batched in input order after
/// the pending command, and the parent out-messages keep the input order.
/// An empty list returns the input model and pending command untouched.
///
/// # Examples
///
/// ```
/// use outfold::{evaluate_list, Cmd};
///
/// let (model, cmd, outs) = evaluate_list(
///     |step: i32, pos: i32| (pos + step, Cmd::single(pos + step), pos + step),
///     (0, Cmd::none(), vec![1, 2, 3]),
/// );
/// assert_eq!(model, 6);
/// assert_eq!(cmd.into_iter().collect::<Vec<_>>(), vec![1, 3, 6]);
/// assert_eq!(outs, vec![1, 3, 6]);
/// ```
pub fn evaluate_list<M, C, O, P, F>(
    interpret: F,
    (model, pending, out_msgs): Triple<M, C, Vec<O>>,
) -> Triple<M, C, Vec<P>>
where
    C: Command,
    F: Fn(O, M) -> Triple<M, C, P>,
{
    if out_msgs.is_empty() {
        return (model, pending, Vec::new());
    }
    log::trace!("evaluating {} out-messages", out_msgs.len());

    let interpret = &interpret;
    let steps = state::traverse(out_msgs, move |out_msg| {
        State::advance(move |model: M| to_nested(interpret(out_msg, model)))
    });
    let (model, pairs) = steps.run(model);
    let (cmd, parent_msgs) = batch_with_outputs(pairs);
    (model, pending.batch(cmd), parent_msgs)
}

/// Interpret a child out-message that may be an error.
///
/// With `Err(e)`, returns `(model, on_error(&e), Err(e))` without calling
/// `interpret`. The pending command is replaced, not merged. With `Ok`,
/// behaves like [`evaluate`].
///
/// # Examples
///
/// ```
/// use outfold::evaluate_result;
///
/// let failed: Result<u8, &str> = Err("timeout");
/// let (model, cmd, out) = evaluate_result(
///     |n: u8, m: u8| (m + n, vec![n], n),
///     |e: &&str| vec![e.len() as u8],
///     (1, vec![99], failed),
/// );
/// assert_eq!((model, cmd, out), (1, vec![7], Err("timeout")));
/// ```
pub fn evaluate_result<M, C, O, P, E, F, G>(
    interpret: F,
    on_error: G,
    (model, pending, out_msg): Triple<M, C, Result<O, E>>,
) -> Triple<M, C, Result<P, E>>
where
    C: Command,
    F: FnOnce(O, M) -> Triple<M, C, P>,
    G: FnOnce(&E) -> C,
{
    match out_msg {
        Err(err) => {
            log::trace!("error out-message, substituting mapped command");
            (model, on_error(&err), Err(err))
        }
        Ok(out_msg) => {
            let (model, cmd, parent_msg) = evaluate(interpret, (model, pending, out_msg));
            (model, cmd, Ok(parent_msg))
        }
    }
}
