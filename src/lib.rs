//! Nested out-message combinators for Elm-style update functions.
//!
//! A parent holding `(model, command, child_out_message)` hands each
//! out-message to an interpretation function and gets back its own model,
//! a merged [`Command`] and its own out-message. See [`evaluate_list`].

mod command;
mod evaluate;
mod map;
mod shape;
pub mod state;

pub use command::{batch_with_outputs, Cmd, Command};
pub use evaluate::{evaluate, evaluate_list, evaluate_maybe, evaluate_result};
pub use map::{map_cmd, map_component, map_out_msg};
pub use shape::{from_nested, swap, to_nested, Triple};
