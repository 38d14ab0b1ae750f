//! A parent component embedding a child counter.
//!
//! The child reports "hit the limit" events upward as out-messages. The
//! parent folds them into its own state and turns them into its own
//! out-messages for whoever owns it.

use outfold::{evaluate_list, map_cmd, map_component, Cmd, Command};
use std::num::NonZeroU32;

const LIMIT: NonZeroU32 = NonZeroU32::new(3).unwrap();

#[derive(Debug, Clone, Copy)]
pub enum CounterMsg {
    Increment,
}

#[derive(Debug, Clone, Copy)]
enum CounterOut {
    ReachedLimit(u32),
}

#[derive(Debug)]
pub struct Counter {
    pub count: u32,
    limit: NonZeroU32,
}

impl Counter {
    pub fn new(limit: NonZeroU32) -> Self {
        Counter { count: 0, limit }
    }

    fn update(self, msg: CounterMsg) -> (Self, Cmd<&'static str>, Vec<CounterOut>) {
        match msg {
            CounterMsg::Increment => {
                let count = self.count + 1;
                let outs = if count % self.limit.get() == 0 {
                    vec![CounterOut::ReachedLimit(count)]
                } else {
                    vec![]
                };
                (Counter { count, ..self }, Cmd::single("beep"), outs)
            }
        }
    }
}

#[derive(Debug)]
pub enum AppEffect {
    Counter(&'static str),
    Celebrate(u32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppOut {
    Milestone(u32),
}

#[derive(Debug)]
pub struct App {
    pub counter: Counter,
    pub milestones: u32,
}

impl App {
    pub fn new(limit: NonZeroU32) -> Self {
        App {
            counter: Counter::new(limit),
            milestones: 0,
        }
    }

    pub fn update(self, msg: CounterMsg) -> (Self, Cmd<AppEffect>, Vec<AppOut>) {
        let App { counter, milestones } = self;
        let child = map_cmd(
            |cmd: Cmd<&'static str>| cmd.map(AppEffect::Counter),
            map_component(
                |counter| App {
                    counter,
                    milestones,
                },
                counter.update(msg),
            ),
        );
        evaluate_list(interpret, child)
    }
}

fn interpret(out: CounterOut, app: App) -> (App, Cmd<AppEffect>, AppOut) {
    match out {
        CounterOut::ReachedLimit(n) => (
            App {
                milestones: app.milestones + 1,
                ..app
            },
            Cmd::single(AppEffect::Celebrate(n)),
            AppOut::Milestone(n),
        ),
    }
}

fn main() {
    let mut app = App::new(LIMIT);
    let mut effects = Cmd::none();

    for _ in 0..7 {
        let (next, cmd, outs) = app.update(CounterMsg::Increment);
        app = next;
        effects = effects.batch(cmd);
        for out in outs {
            println!("parent reported {out:?}");
        }
    }

    println!("count = {}, milestones = {}", app.counter.count, app.milestones);
    for effect in &effects {
        println!("effect: {effect:?}");
    }
}
