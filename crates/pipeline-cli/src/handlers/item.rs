use crate::cli::{AddArgs, DragArgs};
use crate::context::CliContext;
use crate::output;
use pipeline_core::{Notice, NoticeLog};
use pipeline_domain::{
    BoardSnapshot, DragEvent, DragOutcome, GridMetrics, Item, ItemDraft, MoveReceipt,
};
use serde::Serialize;

#[derive(Serialize)]
struct MoveReport<'a> {
    moves: Vec<MoveReceipt>,
    board: BoardSnapshot,
    notices: &'a [Notice],
}

#[derive(Serialize)]
struct DragReport<'a> {
    outcome: DragOutcome,
    board: BoardSnapshot,
    notices: &'a [Notice],
}

#[derive(Serialize)]
struct AddReport<'a> {
    item: &'a Item,
    column: &'a str,
    notices: &'a [Notice],
}

pub fn handle_move(ctx: &mut CliContext, moves: Vec<(String, String)>) -> anyhow::Result<()> {
    let mut receipts = Vec::with_capacity(moves.len());
    for (item, column) in moves {
        match ctx.page.move_item(&item, &column) {
            Ok(receipt) => receipts.push(receipt),
            Err(e) => output::output_error(&e.to_string()),
        }
    }

    output::output_success(MoveReport {
        moves: receipts,
        board: ctx.page.board().snapshot(),
        notices: ctx.page.notices(),
    });
    Ok(())
}

pub fn handle_drag(ctx: &mut CliContext, args: DragArgs) -> anyhow::Result<()> {
    ctx.page.set_filter(args.filter.to_spec());
    let layout = ctx.page.layout(GridMetrics::from(&ctx.config));

    let Some((start, end)) = layout.drag_path(&args.item, &args.to) else {
        output::output_error(&format!(
            "Cannot drag '{}' onto '{}': item not visible or column not found",
            args.item, args.to
        ));
    };

    let events = [
        DragEvent::PointerDown {
            item: args.item.clone(),
            at: start,
        },
        DragEvent::PointerMove { at: end },
        DragEvent::PointerUp { at: end },
    ];
    let mut outcome = DragOutcome::Ignored;
    for event in events {
        outcome = ctx.page.handle_drag(event, &layout)?;
    }

    output::output_success(DragReport {
        outcome,
        board: ctx.page.board().snapshot(),
        notices: ctx.page.notices(),
    });
    Ok(())
}

pub fn handle_add(ctx: &mut CliContext, args: AddArgs) -> anyhow::Result<()> {
    let draft = ItemDraft {
        title: args.title,
        description: args.description,
        assignee: args.assignee,
        due_date: args.due_date,
        priority: args.priority,
        tags: args.tags,
    };
    let id = match ctx.page.add_item(&args.column, draft) {
        Ok(id) => id,
        Err(e) => output::output_error(&e.to_string()),
    };

    let item = ctx
        .page
        .board()
        .item(&id)
        .ok_or_else(|| anyhow::anyhow!("added item {} is missing", id))?;
    output::output_success(AddReport {
        item,
        column: &args.column,
        notices: ctx.page.notices(),
    });
    Ok(())
}
