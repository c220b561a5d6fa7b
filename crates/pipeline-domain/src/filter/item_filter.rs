//! Item filtering implementations.
//!
//! Provides the ItemFilter trait and the filters the pipeline view offers:
//! by priority and by assignee.

use crate::{Item, Priority};

/// Trait for filtering items by various criteria.
pub trait ItemFilter {
    /// Returns true if the item matches the filter criteria.
    fn matches(&self, item: &Item) -> bool;
}

/// Filter items by priority. Items without a priority never match.
pub struct PriorityFilter {
    priority: Priority,
}

impl PriorityFilter {
    pub fn new(priority: Priority) -> Self {
        Self { priority }
    }
}

impl ItemFilter for PriorityFilter {
    fn matches(&self, item: &Item) -> bool {
        item.priority == Some(self.priority)
    }
}

/// Filter items by exact assignee name. Unassigned items never match.
pub struct AssigneeFilter {
    assignee: String,
}

impl AssigneeFilter {
    pub fn new(assignee: impl Into<String>) -> Self {
        Self {
            assignee: assignee.into(),
        }
    }
}

impl ItemFilter for AssigneeFilter {
    fn matches(&self, item: &Item) -> bool {
        item.assignee.as_deref() == Some(self.assignee.as_str())
    }
}

/// Combine multiple filters with AND logic.
///
/// An item matches only if it passes all filters.
pub struct CompositeFilter {
    filters: Vec<Box<dyn ItemFilter>>,
}

impl CompositeFilter {
    /// Create an empty composite filter (matches all items).
    pub fn new() -> Self {
        Self { filters: vec![] }
    }

    /// Add a filter to the composite (builder pattern).
    pub fn with_filter(mut self, filter: Box<dyn ItemFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for CompositeFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemFilter for CompositeFilter {
    fn matches(&self, item: &Item) -> bool {
        self.filters.iter().all(|f| f.matches(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(priority: Option<Priority>, assignee: Option<&str>) -> Item {
        let mut item = Item::new("deal-1", "Deal");
        item.priority = priority;
        item.assignee = assignee.map(str::to_string);
        item
    }

    #[test]
    fn test_priority_filter() {
        let filter = PriorityFilter::new(Priority::High);
        assert!(filter.matches(&item(Some(Priority::High), None)));
        assert!(!filter.matches(&item(Some(Priority::Low), None)));
        assert!(!filter.matches(&item(None, None)));
    }

    #[test]
    fn test_assignee_filter() {
        let filter = AssigneeFilter::new("Jane Smith");
        assert!(filter.matches(&item(None, Some("Jane Smith"))));
        assert!(!filter.matches(&item(None, Some("jane smith"))));
        assert!(!filter.matches(&item(None, None)));
    }

    #[test]
    fn test_composite_filter() {
        let high_jane = item(Some(Priority::High), Some("Jane Smith"));
        let low_jane = item(Some(Priority::Low), Some("Jane Smith"));

        // Empty composite matches all
        assert!(CompositeFilter::new().matches(&low_jane));

        let composite = CompositeFilter::new()
            .with_filter(Box::new(PriorityFilter::new(Priority::High)))
            .with_filter(Box::new(AssigneeFilter::new("Jane Smith")));
        assert!(composite.matches(&high_jane));
        assert!(!composite.matches(&low_jane));
    }
}
