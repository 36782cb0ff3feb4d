//! An externally owned, ordered list of relationship steps.
//!
//! Editors keep a [`StepList`] between interactions and hand it to
//! [`Diagram::from_steps`](crate::Diagram::from_steps) on every render. Every
//! edit returns a new list and leaves the original untouched.

use thiserror::Error;

use crate::model::Edge;

/// Errors from step list edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepListError {
    #[error("step index {index} is out of range for a list of {len} steps")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Ordered relationship steps.
///
/// # Examples
///
/// ```
/// use abstracta::{Edge, StepList, Variable};
/// use abstracta::relationship::RelationshipCode;
///
/// let steps = StepList::new()
///     .with_step(Edge::new(Variable::new("Inflation"), RelationshipCode::Neg))
///     .with_step(Edge::new(Variable::new("Tourism"), RelationshipCode::Pos));
///
/// let reordered = steps.with_step_moved(1, 0).unwrap();
/// assert_eq!(reordered.get(0).unwrap().variable().name(), "Tourism");
/// assert_eq!(steps.get(0).unwrap().variable().name(), "Inflation");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepList {
    steps: Vec<Edge>,
}

impl StepList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new list with `step` appended.
    pub fn with_step(&self, step: Edge) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self { steps }
    }

    /// Returns a new list without the step at `index`.
    pub fn without_step(&self, index: usize) -> Result<Self, StepListError> {
        self.check_index(index)?;
        let mut steps = self.steps.clone();
        steps.remove(index);
        Ok(Self { steps })
    }

    /// Returns a new list with the step at `from` moved to position `to`.
    ///
    /// Both indices refer to positions in the current list.
    pub fn with_step_moved(&self, from: usize, to: usize) -> Result<Self, StepListError> {
        self.check_index(from)?;
        self.check_index(to)?;
        let mut steps = self.steps.clone();
        let step = steps.remove(from);
        steps.insert(to, step);
        Ok(Self { steps })
    }

    pub fn get(&self, index: usize) -> Option<&Edge> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.steps.iter()
    }

    fn check_index(&self, index: usize) -> Result<(), StepListError> {
        if index < self.steps.len() {
            Ok(())
        } else {
            Err(StepListError::IndexOutOfRange {
                index,
                len: self.steps.len(),
            })
        }
    }
}

impl FromIterator<Edge> for StepList {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}
