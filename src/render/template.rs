// src/render/template.rs
// =============================================================================
// HTML output through minijinja templates.
//
// Templates (under templates/, compiled into the binary):
// - results.html.jinja: the results container and its cards
// - page.html.jinja: the full page, with the search field, the stylesheet,
//   and the results container included
//
// HTML auto-escaping is switched on for every template, so names,
// descriptions and URLs coming from the API can never inject markup.
// =============================================================================

use anyhow::{Context, Result};
use minijinja::{context, AutoEscape, Environment};

use super::dom::ResultsContainer;

const RESULTS_TEMPLATE: &str = include_str!("templates/results.html.jinja");
const PAGE_TEMPLATE: &str = include_str!("templates/page.html.jinja");
const CSS_STYLES: &str = include_str!("templates/style.css");

fn environment() -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.add_template("results.html.jinja", RESULTS_TEMPLATE)
        .context("Failed to add results template")?;
    env.add_template("page.html.jinja", PAGE_TEMPLATE)
        .context("Failed to add page template")?;
    Ok(env)
}

// Renders only the results container
pub fn render_results(container: &ResultsContainer) -> Result<String> {
    let env = environment()?;
    let template = env.get_template("results.html.jinja")?;

    let html = template
        .render(context! {
            container_id => container.id(),
            cards => container.children(),
        })
        .context("Failed to render results template")?;

    Ok(html)
}

// Renders the whole page around the container
pub fn render_page(search_value: &str, container: &ResultsContainer) -> Result<String> {
    let env = environment()?;
    let template = env.get_template("page.html.jinja")?;

    let html = template
        .render(context! {
            css_styles => CSS_STYLES,
            search_value,
            container_id => container.id(),
            cards => container.children(),
        })
        .context("Failed to render page template")?;

    Ok(html)
}
