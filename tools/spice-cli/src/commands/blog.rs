//! Browse blog articles.

use anyhow::Result;
use serde::Serialize;
use spice_catalog::prelude::*;

use super::BlogArgs;
use crate::context::Context;

#[derive(Serialize)]
struct BlogReport<'a> {
    category: &'static str,
    search: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    featured: Option<&'a BlogPost>,
    total_matched: usize,
    total_pages: usize,
    current_page: usize,
    items: Vec<&'a BlogPost>,
}

/// Run the blog command.
pub fn run(args: BlogArgs, ctx: &Context) -> Result<()> {
    let journal = ctx.load_journal()?;

    let query = BlogQuery::new()
        .with_category(CategoryFilter::parse(&args.category))
        .with_search(args.search.as_str())
        .with_page(args.page)
        .with_per_page(ctx.config.blog.posts_per_page);

    let page = journal.resolve(&query);

    // The featured article only leads the unfiltered first page.
    let featured = if query.is_unfiltered() && page.current_page == 1 {
        journal.featured()
    } else {
        None
    };

    if ctx.output.is_json() {
        ctx.output.json(&BlogReport {
            category: query.category.as_str(),
            search: &query.search,
            featured,
            total_matched: page.total_matched,
            total_pages: page.total_pages,
            current_page: page.current_page,
            items: page.items.clone(),
        });
        return Ok(());
    }

    if let Some(post) = featured {
        ctx.output.header("Featured Article");
        print_post(ctx, post);
    }

    let title = match query.category {
        CategoryFilter::All => "Latest Articles".to_string(),
        CategoryFilter::Only(category) => category.display_name().to_string(),
    };
    ctx.output.header(&title);

    if page.is_empty() {
        ctx.output.info("No articles found. Try a different search or category.");
        return Ok(());
    }

    for post in &page.items {
        print_post(ctx, post);
    }

    println!();
    ctx.output.info(&page.summary());
    ctx.output.pages(&page.pagination(), ctx.config.display.page_window);

    Ok(())
}

fn print_post(ctx: &Context, post: &BlogPost) {
    ctx.output.list_item(&post.title);
    ctx.output.kv(
        "by",
        &format!(
            "{} · {} · {} · {}",
            post.author,
            post.display_date(),
            post.read_time(),
            post.category.display_name()
        ),
    );
    ctx.output.kv("about", &post.excerpt);
    if !post.tags.is_empty() {
        ctx.output.kv("tags", &post.tags.join(", "));
    }
}
