//! Combo sequences and the queue the AI works through.

use std::collections::VecDeque;
use std::fmt;

use super::strike::StrikeKind::{self, Cross, Jab, LeftHook, LeftUppercut, RightHook, RightUppercut};
use super::strike::Zone;

/// One strike within a combo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComboStep {
    /// Strike to throw.
    pub kind: StrikeKind,
    /// Where to aim it.
    pub zone: Zone,
}

impl ComboStep {
    /// A head-height step.
    #[must_use]
    pub const fn head(kind: StrikeKind) -> Self {
        Self {
            kind,
            zone: Zone::HEAD,
        }
    }

    /// A body step.
    #[must_use]
    pub const fn body(kind: StrikeKind) -> Self {
        Self {
            kind,
            zone: Zone::BODY,
        }
    }
}

impl fmt::Display for ComboStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind, self.zone)
    }
}

/// Sequences the AI chooses from when it decides to combinate.
pub const COMBO_LIBRARY: [&[ComboStep]; 9] = [
    // one-two
    &[ComboStep::head(Jab), ComboStep::head(Cross)],
    &[
        ComboStep::head(Jab),
        ComboStep::head(Jab),
        ComboStep::head(Cross),
    ],
    &[
        ComboStep::head(Jab),
        ComboStep::head(Cross),
        ComboStep::head(LeftHook),
    ],
    // head, body, head
    &[
        ComboStep::head(Jab),
        ComboStep::body(Cross),
        ComboStep::head(LeftHook),
    ],
    &[ComboStep::body(LeftHook), ComboStep::head(RightHook)],
    &[ComboStep::head(Cross), ComboStep::head(LeftHook)],
    &[ComboStep::head(Jab), ComboStep::head(RightUppercut)],
    &[ComboStep::body(LeftUppercut), ComboStep::head(RightHook)],
    // shoeshine
    &[
        ComboStep::body(LeftUppercut),
        ComboStep::body(RightUppercut),
        ComboStep::head(LeftHook),
    ],
];

/// Strikes still to be thrown in the current attack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComboQueue {
    steps: VecDeque<ComboStep>,
}

impl ComboQueue {
    /// Replaces the queue with `steps`.
    pub fn load(&mut self, steps: &[ComboStep]) {
        self.steps.clear();
        self.steps.extend(steps.iter().copied());
    }

    /// Takes the next step.
    pub fn pop(&mut self) -> Option<ComboStep> {
        self.steps.pop_front()
    }

    /// Drops every remaining step.
    pub fn clear(&mut self) {
        self.steps.clear();
    }

    /// Remaining steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` when no steps remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Remaining steps in throw order.
    pub fn iter(&self) -> impl Iterator<Item = &ComboStep> + '_ {
        self.steps.iter()
    }
}

impl fmt::Display for ComboQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}
