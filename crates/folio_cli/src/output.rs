//! Text and JSON rendering of catalog views.

use crate::args::OutputFormat;
use anyhow::Result;
use folio_core::{
    FilterOption, ProjectCard, ProjectListResult, ProjectRecord, Route, BRAND, NAVIGATION,
};
use serde_json::json;
use std::io::Write;

const NOT_FOUND_MESSAGE: &str = "No project found.";

pub fn write_project_list(
    out: &mut dyn Write,
    format: OutputFormat,
    listed: &ProjectListResult,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let value = json!({
                "filter": listed.applied_filter.label(),
                "total": listed.total,
                "items": listed.items,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        }
        OutputFormat::Text => {
            writeln!(
                out,
                "Portfolio: {} of {} projects (filter: {})",
                listed.items.len(),
                listed.total,
                listed.applied_filter.label()
            )?;
            if listed.items.is_empty() {
                writeln!(out, "No projects match this filter.")?;
            }
            for card in &listed.items {
                write_card(out, card)?;
            }
        }
    }
    Ok(())
}

fn write_card(out: &mut dyn Write, card: &ProjectCard) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}  {}", card.title, card.path)?;
    if !card.description.is_empty() {
        writeln!(out, "  {}", card.description)?;
    }
    if !card.categories.is_empty() {
        let badges = card
            .categories
            .iter()
            .map(|category| category.label())
            .collect::<Vec<_>>();
        writeln!(out, "  [{}]", badges.join("] ["))?;
    }
    Ok(())
}

pub fn write_project_detail(
    out: &mut dyn Write,
    format: OutputFormat,
    project: Option<&ProjectRecord>,
) -> Result<()> {
    match (format, project) {
        (OutputFormat::Json, project) => {
            writeln!(out, "{}", serde_json::to_string_pretty(&project)?)?;
        }
        (OutputFormat::Text, None) => writeln!(out, "{NOT_FOUND_MESSAGE}")?,
        (OutputFormat::Text, Some(project)) => {
            writeln!(out, "{}", project.title)?;
            if !project.description.is_empty() {
                writeln!(out)?;
                writeln!(out, "{}", project.description)?;
            }
            writeln!(out)?;
            if let Some(url) = project.image_url() {
                writeln!(out, "image:   {url}")?;
            }
            if let Some(site) = &project.site {
                writeln!(out, "site:    {site}")?;
            }
            if let Some(github) = &project.github_url {
                writeln!(out, "github:  {github}")?;
            }
            let categories = project
                .flags
                .active()
                .into_iter()
                .map(|category| category.label())
                .collect::<Vec<_>>();
            if !categories.is_empty() {
                writeln!(out, "skills:  {}", categories.join(", "))?;
            }
        }
    }
    Ok(())
}

pub fn write_filters(
    out: &mut dyn Write,
    format: OutputFormat,
    options: &[FilterOption],
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let labels = options.iter().map(|option| option.label).collect::<Vec<_>>();
            writeln!(out, "{}", serde_json::to_string_pretty(&labels)?)?;
        }
        OutputFormat::Text => {
            for option in options {
                writeln!(out, "{}", option.label)?;
            }
        }
    }
    Ok(())
}

pub fn write_routes(out: &mut dyn Write, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let routes = NAVIGATION
                .iter()
                .map(|route| json!({ "label": route.label(), "path": route.path() }))
                .collect::<Vec<_>>();
            let value = json!({ "brand": BRAND, "routes": routes });
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        }
        OutputFormat::Text => {
            writeln!(out, "{BRAND}")?;
            for route in NAVIGATION {
                writeln!(out, "  {:<10} {}", route.label(), route.path())?;
            }
            writeln!(out, "  {:<10} {}/<slug>", "Project", Route::Projects.path())?;
        }
    }
    Ok(())
}
