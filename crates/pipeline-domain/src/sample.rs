//! Built-in sample pipeline used when no seed file is given.

use chrono::NaiveDate;
use pipeline_core::PipelineResult;

use crate::snapshot::{BoardSnapshot, ItemRecord};
use crate::{Board, Column, Item, Priority};

fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

#[allow(clippy::too_many_arguments)]
fn deal(
    id: &str,
    title: &str,
    description: &str,
    assignee: &str,
    due: Option<NaiveDate>,
    priority: Priority,
    status: &str,
    tags: &[&str],
) -> ItemRecord {
    let item = Item::new(id, title)
        .with_description(description)
        .with_assignee(assignee)
        .with_due_date(due)
        .with_priority(priority)
        .with_tags(tags.iter().copied());
    ItemRecord::new(item, Some(status.to_string()))
}

pub fn sample_snapshot() -> BoardSnapshot {
    use Priority::{High, Low, Medium};

    BoardSnapshot {
        columns: vec![
            Column::new("leads", "Leads")
                .with_items(["deal-1", "deal-4", "deal-6"])
                .with_color("bg-blue-500"),
            Column::new("discovery", "Discovery")
                .with_items(["deal-2", "deal-7"])
                .with_color("bg-indigo-500"),
            Column::new("proposal", "Proposal")
                .with_items(["deal-3", "deal-8"])
                .with_color("bg-violet-500"),
            Column::new("negotiation", "Negotiation")
                .with_items(["deal-5"])
                .with_color("bg-purple-500"),
            Column::new("closed", "Closed Won")
                .with_items(["deal-9"])
                .with_color("bg-green-500"),
        ],
        items: vec![
            deal(
                "deal-1",
                "Acme Corp - New Software",
                "Potential new software implementation",
                "John Doe",
                date(2023, 12, 15),
                Medium,
                "leads",
                &["Software"],
            ),
            deal(
                "deal-2",
                "TechStart - Consulting",
                "Strategic consulting project",
                "Jane Smith",
                date(2023, 12, 20),
                High,
                "discovery",
                &["Consulting", "Priority"],
            ),
            deal(
                "deal-3",
                "Johnson Inc - Expansion",
                "Office expansion project",
                "Robert Johnson",
                date(2024, 1, 10),
                Medium,
                "proposal",
                &["Expansion"],
            ),
            deal(
                "deal-4",
                "Global Solutions - Support",
                "Annual support contract",
                "Emily Davis",
                date(2023, 12, 30),
                Low,
                "leads",
                &["Support", "Renewal"],
            ),
            deal(
                "deal-5",
                "EcoFriendly - Partnership",
                "Strategic partnership deal",
                "Michael Wilson",
                date(2024, 1, 15),
                High,
                "negotiation",
                &["Partnership"],
            ),
            deal(
                "deal-6",
                "Local Shop - Website",
                "E-commerce website development",
                "Sarah Miller",
                date(2024, 1, 5),
                Medium,
                "leads",
                &["Website", "Development"],
            ),
            deal(
                "deal-7",
                "Health Services - Integration",
                "System integration project",
                "John Doe",
                date(2024, 2, 1),
                Medium,
                "discovery",
                &["Healthcare", "Integration"],
            ),
            deal(
                "deal-8",
                "Finance Corp - Security",
                "Security upgrade project",
                "Emily Davis",
                date(2024, 1, 25),
                High,
                "proposal",
                &["Security", "Finance"],
            ),
            deal(
                "deal-9",
                "Tech Enterprise - License",
                "Enterprise license agreement",
                "Sarah Miller",
                date(2023, 12, 10),
                High,
                "closed",
                &["License", "Enterprise"],
            ),
        ],
    }
}

pub fn sample_board() -> PipelineResult<Board> {
    Board::from_snapshot(sample_snapshot())
}
