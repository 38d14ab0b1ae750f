#![allow(dead_code)]

use outfold::{Cmd, Command};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChildOut {
    Ping,
    PingPing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParentOut {
    Pong,
    PongPong,
}

/// Answers every ping without touching the model or issuing effects.
pub fn ping_pong(msg: ChildOut, model: &'static str) -> (&'static str, Cmd<String>, ParentOut) {
    match msg {
        ChildOut::Ping => (model, Cmd::none(), ParentOut::Pong),
        ChildOut::PingPing => (model, Cmd::none(), ParentOut::PongPong),
    }
}

/// Adds each out-message to the running total and records what it saw.
pub fn accumulate(n: i64, total: i64) -> (i64, Cmd<String>, i64) {
    let next = total + n;
    (next, Cmd::single(format!("{total}+{n}")), next)
}

/// A command that records the order in which it was merged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trace(pub Vec<&'static str>);

impl Trace {
    pub fn of(label: &'static str) -> Self {
        Trace(vec![label])
    }
}

impl Command for Trace {
    fn none() -> Self {
        Trace(Vec::new())
    }

    fn batch(mut self, other: Self) -> Self {
        self.0.extend(other.0);
        self
    }
}
