//! Exact-name channel pub-sub backing the machine.
//!
//! The emitter knows nothing about wildcards or phases; it registers hooks
//! against opaque channel names and publishes to exactly one channel at a
//! time. All fuzziness lives in the machine, which expands wildcard
//! combinations into the plain channel names registered here.

use std::collections::HashMap;

use crate::context::Context;
use crate::error::Error;
use crate::flyweight::{Input, State};
use crate::hook::{Flow, Hook};
use crate::stateful::Stateful;

struct Subscriber<O: Stateful> {
    hook: Box<dyn Hook<O>>,
    priority: i32,
    seq: u64,
}

pub(crate) struct Emitter<O: Stateful> {
    channels: HashMap<String, Vec<Subscriber<O>>>,
    next_seq: u64,
}

impl<O: Stateful> Emitter<O> {
    pub(crate) fn new() -> Self {
        Self {
            channels: HashMap::new(),
            next_seq: 0,
        }
    }

    /// Register `hook` on `channel`. Higher priorities are invoked first;
    /// equal priorities keep registration order.
    pub(crate) fn subscribe(&mut self, channel: impl Into<String>, hook: Box<dyn Hook<O>>, priority: i32) {
        let seq = self.next_seq;
        self.next_seq += 1;

        let subscribers = self.channels.entry(channel.into()).or_default();
        subscribers.push(Subscriber { hook, priority, seq });
        subscribers.sort_by(|a, b| b.priority.cmp(&a.priority).then(a.seq.cmp(&b.seq)));
    }

    pub(crate) fn has_subscribers(&self, channel: &str) -> bool {
        self.channels
            .get(channel)
            .is_some_and(|subscribers| !subscribers.is_empty())
    }

    /// Publish one payload to every subscriber of `channel` in order.
    ///
    /// Stops at the first veto; a hook error stops the run and propagates.
    pub(crate) fn publish(
        &self,
        channel: &str,
        object: &mut O,
        context: &mut Context,
        input: &Input,
        next_state: &State,
    ) -> Result<Flow, Error> {
        if let Some(subscribers) = self.channels.get(channel) {
            for subscriber in subscribers {
                if subscriber.hook.call(channel, object, context, input, next_state)? == Flow::Veto
                {
                    return Ok(Flow::Veto);
                }
            }
        }

        Ok(Flow::Continue)
    }
}
