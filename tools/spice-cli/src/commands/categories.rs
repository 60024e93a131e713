//! Product counts per category.

use anyhow::Result;
use spice_catalog::prelude::*;

use super::CategoriesArgs;
use crate::context::Context;

/// Run the categories command.
pub fn run(args: CategoriesArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog(args.file.as_deref())?;
    let facet = catalog.category_facet(CategoryFilter::All);

    if ctx.output.is_json() {
        ctx.output.json(&facet);
        return Ok(());
    }

    ctx.output.header(&facet.name);
    for value in &facet.values {
        ctx.output.table_row(&[&value.value, &value.label, &value.count.to_string()], &[8, 16, 4]);
    }

    Ok(())
}
