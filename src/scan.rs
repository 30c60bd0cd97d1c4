//! The scan engine: a single left-to-right pass over the input.
//!
//! Each byte is classified, the action flags for the current
//! `(state, class)` cell are applied in a fixed order, and the state
//! advances through the transition table until the terminal state is
//! reached. The same stepping core backs two entries: [`count`], which
//! only tallies delimiter events, and [`scan`], which also materializes
//! the tag/argument entries.
//!
//! Length invariant: every byte appended to a token corresponds 1:1 to a
//! consumed input byte, and delimiter/quote/escape bytes are consumed
//! without being copied. Total emitted text therefore never exceeds the
//! input length, which is also why the original two-pass protocol could
//! rewrite its input in place.

use crate::classify::{CharClass, CharMap};
use crate::entry::{Entry, OptList};
use crate::table::{transition, ActionTable, Actions, State};

/// Shared stepping core: classifies one byte, resolves its actions, and
/// advances the state.
struct Machine<'a> {
    state: State,
    map: &'a CharMap,
    actions: &'a ActionTable,
    arguments: bool,
}

impl<'a> Machine<'a> {
    fn new(map: &'a CharMap, actions: &'a ActionTable, arguments: bool) -> Self {
        // A leading token is treated as though preceded by a separator.
        Machine {
            state: State::Sep,
            map,
            actions,
            arguments,
        }
    }

    fn step(&mut self, byte: u8) -> Actions {
        let mut class = self.map.classify(byte);
        // With arguments disabled there is nowhere to record a value, so
        // the marker folds back into plain tag text.
        if class == CharClass::ArgMarker && !self.arguments {
            class = CharClass::Ordinary;
        }
        let actions = self.actions.get(self.state, class);
        self.state = transition(self.state, class);
        actions
    }

    fn done(&self) -> bool {
        self.state == State::End
    }
}

/// Bytes of the input followed by the NUL terminator the tables expect.
///
/// An embedded NUL classifies as `Terminator` and stops the scan early,
/// exactly like the appended one.
fn terminated(input: &str) -> impl Iterator<Item = u8> + '_ {
    input.bytes().chain(std::iter::once(0))
}

/// Dry run: returns the number of delimiter events without emitting text.
///
/// The count is the number of entries plus one for the end-of-input
/// sentinel, so it is at least 1 for any input, including the empty one.
pub(crate) fn count(input: &str, map: &CharMap, actions: &ActionTable, arguments: bool) -> usize {
    let mut machine = Machine::new(map, actions, arguments);
    let mut events = 0;
    for byte in terminated(input) {
        let act = machine.step(byte);
        if act.intersects(Actions::END_TAG | Actions::END_ARG) {
            events += 1;
        }
        if act.contains(Actions::END_LINE) {
            events += 1;
        }
        if act.contains(Actions::END_INPUT) {
            events += 1;
        }
        if machine.done() {
            break;
        }
    }
    events
}

/// Full scan: returns the parsed entries in input order.
///
/// Infallible: any byte sequence produces a deterministic entry list.
/// Unterminated quotes swallow the rest of the input as one token, and a
/// trailing escape is closed out by the terminator.
pub(crate) fn scan(input: &str, map: &CharMap, actions: &ActionTable, arguments: bool) -> OptList {
    let mut machine = Machine::new(map, actions, arguments);
    let mut entries = OptList::new();
    let mut token: Vec<u8> = Vec::with_capacity(input.len());
    // Tag recorded by START_ARG, waiting for its argument text.
    let mut pending_tag: Option<String> = None;

    for byte in terminated(input) {
        let act = machine.step(byte);
        if act.contains(Actions::START_ARG) {
            pending_tag = Some(take_token(&mut token));
        }
        if act.contains(Actions::END_TAG) {
            entries.push(Entry::new(take_token(&mut token)));
        }
        if act.contains(Actions::END_ARG) {
            let tag = pending_tag.take().unwrap_or_default();
            entries.push(Entry::with_arg(tag, take_token(&mut token)));
        }
        if act.intersects(Actions::START_TAG | Actions::START_ARG) {
            token.clear();
        }
        if act.contains(Actions::COPY_CHAR) {
            token.push(byte);
            debug_assert!(token.len() <= input.len());
        }
        if act.contains(Actions::END_LINE) {
            entries.push(Entry::new("\n"));
        }
        // END_INPUT: the owned result needs no sentinel entry; the list
        // length is the entry count.
        if machine.done() {
            break;
        }
    }
    entries
}

fn take_token(token: &mut Vec<u8>) -> String {
    let bytes = std::mem::take(token);
    // Special bytes are all ASCII, so multi-byte sequences are copied or
    // discarded whole and the token is valid UTF-8 whenever the input was.
    String::from_utf8_lossy(&bytes).into_owned()
}
