use crate::cli::FilterArgs;
use crate::context::CliContext;
use crate::output;

pub fn handle_show(ctx: &mut CliContext, args: FilterArgs) -> anyhow::Result<()> {
    ctx.page.set_filter(args.to_spec());
    output::output_success(ctx.page.visible());
    Ok(())
}

pub fn handle_assignees(ctx: &CliContext) -> anyhow::Result<()> {
    let assignees = ctx.page.board().assignees();
    output::output_list(assignees);
    Ok(())
}
