//! State and action tables driving the scan engine.
//!
//! The engine is a finite-state machine: for each input byte it looks up
//! the transition `(state, class) -> state` in [`TRANSITIONS`] and the
//! side effects `(state, class) -> Actions` in an [`ActionTable`]. The
//! transition table is fixed; the action table has a built-in default that
//! behavior flags extend cell by cell (flags only ever add actions, never
//! remove them).

use bitflags::bitflags;

use crate::classify::{CharClass, NCLASSES};

/// Scanner state.
///
/// Quoting and escaping behave identically inside a tag and inside an
/// argument value, but must resume into the right context afterwards, so
/// the quote/escape states come in tag-context and argument-context pairs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum State {
    /// Accumulating tag text.
    Tag,
    /// Between tokens (also the start state).
    Sep,
    /// Terminal state, self-loops.
    End,
    /// Inside a comment, discarding until newline.
    Comment,
    /// Newline handling (routed through `Sep` by the transition table).
    Newline,
    /// Accumulating unquoted argument text.
    Arg,
    SingleQuoted,
    DoubleQuoted,
    Escaped,
    ArgSingleQuoted,
    ArgDoubleQuoted,
    ArgEscaped,
}

pub(crate) const NSTATES: usize = 12;

impl State {
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Fixed transition table, indexed by `[state][class]`.
///
/// Class `Terminator` always leads to `End`; `End` self-loops on every
/// class, so the scan loop is guaranteed to stop.
pub(crate) static TRANSITIONS: [[State; NCLASSES]; NSTATES] = {
    use State::{
        Arg, ArgDoubleQuoted, ArgEscaped, ArgSingleQuoted, Comment, DoubleQuoted, End, Escaped,
        Sep, SingleQuoted, Tag,
    };
    // Columns: Ordinary, Separator, Terminator, CommentStart, Newline,
    //          ArgMarker, SingleQuote, DoubleQuote, Escape
    [
        /* Tag */ [Tag, Sep, End, Comment, Sep, Arg, SingleQuoted, DoubleQuoted, Escaped],
        /* Sep */ [Tag, Sep, End, Comment, Sep, Tag, SingleQuoted, DoubleQuoted, Escaped],
        /* End */ [End, End, End, End, End, End, End, End, End],
        /* Comment */ [Comment, Comment, End, Comment, Sep, Comment, Comment, Comment, Comment],
        /* Newline */ [Tag, Sep, End, Comment, Sep, Tag, SingleQuoted, DoubleQuoted, Escaped],
        /* Arg */ [Arg, Sep, End, Comment, Sep, Arg, ArgSingleQuoted, ArgDoubleQuoted, ArgEscaped],
        /* SingleQuoted */
        [
            SingleQuoted, SingleQuoted, End, SingleQuoted, SingleQuoted, SingleQuoted, Tag,
            SingleQuoted, SingleQuoted,
        ],
        /* DoubleQuoted */
        [
            DoubleQuoted, DoubleQuoted, End, DoubleQuoted, DoubleQuoted, DoubleQuoted,
            DoubleQuoted, Tag, DoubleQuoted,
        ],
        /* Escaped */ [Tag, Tag, End, Tag, Tag, Tag, Tag, Tag, Tag],
        /* ArgSingleQuoted */
        [
            ArgSingleQuoted, ArgSingleQuoted, End, ArgSingleQuoted, ArgSingleQuoted,
            ArgSingleQuoted, Arg, ArgSingleQuoted, ArgSingleQuoted,
        ],
        /* ArgDoubleQuoted */
        [
            ArgDoubleQuoted, ArgDoubleQuoted, End, ArgDoubleQuoted, ArgDoubleQuoted,
            ArgDoubleQuoted, ArgDoubleQuoted, Arg, ArgDoubleQuoted,
        ],
        /* ArgEscaped */ [Arg, Arg, End, Arg, Arg, Arg, Arg, Arg, Arg],
    ]
};

#[inline]
pub(crate) fn transition(state: State, class: CharClass) -> State {
    TRANSITIONS[state.index()][class.index()]
}

bitflags! {
    /// Side effects attached to a `(state, class)` transition.
    ///
    /// A single transition may carry any combination; the engine applies
    /// them in a fixed order (see `scan`).
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub(crate) struct Actions: u8 {
        /// Begin accumulating a new tag token.
        const START_TAG = 1 << 0;
        /// Close the tag text and begin accumulating its argument.
        const START_ARG = 1 << 1;
        /// Copy the current input byte into the token.
        const COPY_CHAR = 1 << 2;
        /// Emit the accumulated text as a tag without an argument.
        const END_TAG = 1 << 3;
        /// Emit the accumulated text as the pending tag's argument.
        const END_ARG = 1 << 4;
        /// Emit a synthetic `"\n"` tag (newline-as-tag mode).
        const END_LINE = 1 << 5;
        /// End of input reached; accounts for the terminating sentinel.
        const END_INPUT = 1 << 6;
    }
}

/// Action lookup table, indexed like [`TRANSITIONS`].
///
/// [`ActionTable::standard`] is the built-in default. The behavior-flag
/// builders return a patched copy; they OR extra actions into specific
/// cells and never clear anything, so every table is a superset of the
/// default.
#[derive(Clone)]
pub(crate) struct ActionTable([[Actions; NCLASSES]; NSTATES]);

impl ActionTable {
    pub(crate) fn standard() -> ActionTable {
        use Actions as A;
        let n = A::empty();
        // Columns: Ordinary, Separator, Terminator, CommentStart, Newline,
        //          ArgMarker, SingleQuote, DoubleQuote, Escape
        ActionTable([
            /* Tag */
            [
                A::COPY_CHAR,
                A::END_TAG,
                A::END_INPUT | A::END_TAG,
                A::END_TAG,
                A::END_TAG,
                A::START_ARG,
                n,
                n,
                n,
            ],
            /* Sep */
            [
                A::START_TAG | A::COPY_CHAR,
                n,
                A::END_INPUT,
                n,
                n,
                n,
                A::START_TAG,
                A::START_TAG,
                A::START_TAG,
            ],
            /* End */ [n, n, A::END_INPUT, n, n, n, n, n, n],
            /* Comment */ [n, n, A::END_INPUT, n, n, n, n, n, n],
            /* Newline */
            [
                A::START_TAG | A::COPY_CHAR,
                n,
                A::END_INPUT,
                n,
                n,
                n,
                n,
                n,
                n,
            ],
            /* Arg */
            [
                A::COPY_CHAR,
                A::END_ARG,
                A::END_INPUT | A::END_ARG,
                A::END_ARG,
                A::END_ARG,
                A::COPY_CHAR,
                n,
                n,
                n,
            ],
            /* SingleQuoted */
            [
                A::COPY_CHAR,
                A::COPY_CHAR,
                A::END_INPUT | A::END_TAG,
                A::COPY_CHAR,
                A::COPY_CHAR,
                A::COPY_CHAR,
                n,
                A::COPY_CHAR,
                A::COPY_CHAR,
            ],
            /* DoubleQuoted */
            [
                A::COPY_CHAR,
                A::COPY_CHAR,
                A::END_INPUT | A::END_TAG,
                A::COPY_CHAR,
                A::COPY_CHAR,
                A::COPY_CHAR,
                A::COPY_CHAR,
                n,
                A::COPY_CHAR,
            ],
            /* Escaped */
            [
                A::COPY_CHAR,
                A::COPY_CHAR,
                A::END_INPUT | A::END_TAG,
                A::COPY_CHAR,
                n,
                A::COPY_CHAR,
                A::COPY_CHAR,
                A::COPY_CHAR,
                A::COPY_CHAR,
            ],
            /* ArgSingleQuoted */
            [
                A::COPY_CHAR,
                A::COPY_CHAR,
                A::END_INPUT | A::END_ARG,
                A::COPY_CHAR,
                A::COPY_CHAR,
                A::COPY_CHAR,
                n,
                A::COPY_CHAR,
                A::COPY_CHAR,
            ],
            /* ArgDoubleQuoted */
            [
                A::COPY_CHAR,
                A::COPY_CHAR,
                A::END_INPUT | A::END_ARG,
                A::COPY_CHAR,
                A::COPY_CHAR,
                A::COPY_CHAR,
                A::COPY_CHAR,
                n,
                A::COPY_CHAR,
            ],
            /* ArgEscaped */
            [
                A::COPY_CHAR,
                A::COPY_CHAR,
                A::END_INPUT | A::END_ARG,
                A::COPY_CHAR,
                n,
                A::COPY_CHAR,
                A::COPY_CHAR,
                A::COPY_CHAR,
                A::COPY_CHAR,
            ],
        ])
    }

    /// Builds the action table matching a full set of behavior flags.
    pub(crate) fn for_options(options: &crate::ParseOptions) -> ActionTable {
        let mut table = ActionTable::standard();
        if options.keep_quotes_in_tags {
            table = table.keep_quotes_in_tags();
        }
        if options.keep_quotes_in_args {
            table = table.keep_quotes_in_args();
        }
        if options.allow_multiple_separators {
            table = table.allow_multiple_separators();
        }
        if options.newline_as_tag {
            table = table.newline_as_tag();
        }
        table
    }

    #[inline]
    pub(crate) fn get(&self, state: State, class: CharClass) -> Actions {
        self.0[state.index()][class.index()]
    }

    fn add(&mut self, state: State, class: CharClass, actions: Actions) {
        self.0[state.index()][class.index()] |= actions;
    }

    /// Quote and escape characters met in tag context are copied through
    /// as literal text instead of being consumed.
    pub(crate) fn keep_quotes_in_tags(mut self) -> ActionTable {
        use CharClass::{DoubleQuote, Escape, SingleQuote};
        for class in [SingleQuote, DoubleQuote, Escape] {
            self.add(State::Tag, class, Actions::COPY_CHAR);
            self.add(State::Sep, class, Actions::COPY_CHAR);
        }
        self.add(State::SingleQuoted, SingleQuote, Actions::COPY_CHAR);
        self.add(State::DoubleQuoted, DoubleQuote, Actions::COPY_CHAR);
        self
    }

    /// Same as [`keep_quotes_in_tags`](Self::keep_quotes_in_tags), for
    /// argument context.
    pub(crate) fn keep_quotes_in_args(mut self) -> ActionTable {
        use CharClass::{DoubleQuote, Escape, SingleQuote};
        for class in [SingleQuote, DoubleQuote, Escape] {
            self.add(State::Arg, class, Actions::COPY_CHAR);
        }
        self.add(State::ArgSingleQuoted, SingleQuote, Actions::COPY_CHAR);
        self.add(State::ArgDoubleQuoted, DoubleQuote, Actions::COPY_CHAR);
        self
    }

    /// Every separator-to-separator transition (and a separator right
    /// before end of input) emits an explicit empty tag instead of
    /// collapsing.
    pub(crate) fn allow_multiple_separators(mut self) -> ActionTable {
        self.add(
            State::Sep,
            CharClass::Separator,
            Actions::START_TAG | Actions::END_TAG,
        );
        self.add(State::Sep, CharClass::Terminator, Actions::END_TAG);
        self
    }

    /// Each physical newline additionally emits a synthetic `"\n"` tag.
    pub(crate) fn newline_as_tag(mut self) -> ActionTable {
        for state in [
            State::Tag,
            State::Sep,
            State::Comment,
            State::Newline,
            State::Arg,
        ] {
            self.add(state, CharClass::Newline, Actions::END_LINE);
        }
        self
    }
}
