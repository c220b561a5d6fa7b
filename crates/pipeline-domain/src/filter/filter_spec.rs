//! Filter settings for the pipeline view.
//!
//! `FilterSpec` holds what to filter by; the `ItemFilter` implementations
//! do the matching.

use pipeline_core::PipelineError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::{AssigneeFilter, CompositeFilter, PriorityFilter};
use crate::Priority;

const ALL: &str = "all";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityChoice {
    #[default]
    All,
    Only(Priority),
}

impl FromStr for PriorityChoice {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl fmt::Display for PriorityChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(priority) => write!(f, "{}", priority),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssigneeChoice {
    #[default]
    All,
    Named(String),
}

impl FromStr for AssigneeChoice {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() {
            Err(PipelineError::Validation("assignee must not be empty".to_string()))
        } else if name.eq_ignore_ascii_case(ALL) {
            Ok(Self::All)
        } else {
            Ok(Self::Named(name.to_string()))
        }
    }
}

impl fmt::Display for AssigneeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// Active filter criteria. A criterion set to `All` is inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSpec {
    pub priority: PriorityChoice,
    pub assignee: AssigneeChoice,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_priority(mut self, priority: PriorityChoice) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_assignee(mut self, assignee: AssigneeChoice) -> Self {
        self.assignee = assignee;
        self
    }

    pub fn has_active_filters(&self) -> bool {
        self.priority != PriorityChoice::All || self.assignee != AssigneeChoice::All
    }

    /// Build the matcher for the active criteria.
    pub fn to_filter(&self) -> CompositeFilter {
        let mut filter = CompositeFilter::new();
        if let PriorityChoice::Only(priority) = self.priority {
            filter = filter.with_filter(Box::new(PriorityFilter::new(priority)));
        }
        if let AssigneeChoice::Named(name) = &self.assignee {
            filter = filter.with_filter(Box::new(AssigneeFilter::new(name.clone())));
        }
        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_active_filters() {
        let spec = FilterSpec::default();
        assert!(!spec.has_active_filters());
        assert!(spec.to_filter().is_empty());
    }

    #[test]
    fn test_parse_choices() {
        assert_eq!("all".parse::<PriorityChoice>().unwrap(), PriorityChoice::All);
        assert_eq!(
            "high".parse::<PriorityChoice>().unwrap(),
            PriorityChoice::Only(Priority::High)
        );
        assert!("urgent".parse::<PriorityChoice>().is_err());

        assert_eq!("all".parse::<AssigneeChoice>().unwrap(), AssigneeChoice::All);
        assert_eq!("All".parse::<AssigneeChoice>().unwrap(), AssigneeChoice::All);
        assert_eq!("HIGH".parse::<PriorityChoice>().unwrap(), PriorityChoice::Only(Priority::High));
        assert_eq!(
            "Jane Smith".parse::<AssigneeChoice>().unwrap(),
            AssigneeChoice::Named("Jane Smith".to_string())
        );
        assert!("  ".parse::<AssigneeChoice>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let choice = PriorityChoice::Only(Priority::Low);
        assert_eq!(choice.to_string().parse::<PriorityChoice>().unwrap(), choice);
        assert_eq!(AssigneeChoice::All.to_string(), "all");
    }

    #[test]
    fn test_active_filters() {
        let spec = FilterSpec::new()
            .with_priority(PriorityChoice::Only(Priority::High))
            .with_assignee(AssigneeChoice::Named("John Doe".to_string()));
        assert!(spec.has_active_filters());
        assert!(!spec.to_filter().is_empty());
    }
}
