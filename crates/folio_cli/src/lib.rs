//! Command-line presentation layer over `folio_core`.

mod args;
pub mod config;
mod output;

pub use args::{Cli, Commands, OutputFormat};

use anyhow::{anyhow, Context, Result};
use config::Config;
use folio_core::{
    default_log_level, filter_options, init_logging, CatalogService, JsonFileContentSource,
};
use log::info;
use std::io::Write;
use std::path::PathBuf;

/// Runs one CLI invocation, writing to stdout.
pub fn run(cli: Cli) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_writer(cli, &mut out)
}

/// Runs one CLI invocation against `out`.
pub fn run_with_writer(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    start_logging(&cli, &config)?;
    info!("event=cli_command module=cli status=ok command={:?}", cli.command);

    match cli.command {
        Commands::Ping => {
            writeln!(out, "folio_core ping={}", folio_core::ping())?;
            writeln!(out, "folio_core version={}", folio_core::core_version())?;
        }
        Commands::Routes => output::write_routes(out, cli.format)?,
        Commands::Filters => output::write_filters(out, cli.format, &filter_options())?,
        Commands::List { ref filter } => {
            let service = catalog_service(cli.content.clone(), &config)?;
            let filter = filter.as_deref().or(config.default_filter.as_deref());
            let listed = service.list_projects(filter)?;
            output::write_project_list(out, cli.format, &listed)?;
        }
        Commands::Show { ref slug } => {
            let service = catalog_service(cli.content.clone(), &config)?;
            let project = service.project_detail(slug)?;
            output::write_project_detail(out, cli.format, project.as_ref())?;
        }
    }

    Ok(())
}

fn catalog_service(
    content: Option<PathBuf>,
    config: &Config,
) -> Result<CatalogService<JsonFileContentSource>> {
    let path = content
        .or_else(|| config.content_path.clone())
        .ok_or_else(|| {
            anyhow!("no content source configured; pass --content or set content_path in config")
        })?;
    Ok(CatalogService::new(JsonFileContentSource::new(path)))
}

fn start_logging(cli: &Cli, config: &Config) -> Result<()> {
    let Some(log_dir) = cli.log_dir.as_ref().or(config.log_dir.as_ref()) else {
        return Ok(());
    };
    let level = cli
        .log_level
        .as_deref()
        .or(config.log_level.as_deref())
        .unwrap_or_else(|| default_log_level());
    init_logging(level, log_dir).context("failed to initialize logging")
}

#[cfg(test)]
mod tests {
    use super::{run_with_writer, Cli};
    use clap::Parser;
    use std::fs;

    const RESPONSE: &str = r#"{"data":{"projects":[
        {"slug":"a","title":"Alpha","description":"first","createdAt":"2023-01-01","html":true},
        {"slug":"b","title":"Beta","description":"second","createdAt":"2024-01-01","css":true}
    ]}}"#;

    fn run_args(args: &[&str]) -> anyhow::Result<String> {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("projects.json");
        let config = dir.path().join("config.toml");
        fs::write(&content, RESPONSE).unwrap();

        let mut argv = vec![
            "folio".to_string(),
            "--content".to_string(),
            content.display().to_string(),
            "--config".to_string(),
            config.display().to_string(),
        ];
        argv.extend(args.iter().map(|arg| arg.to_string()));

        let cli = Cli::try_parse_from(argv).unwrap();
        let mut out = Vec::new();
        run_with_writer(cli, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn list_text_orders_newest_first() {
        let text = run_args(&["list"]).unwrap();
        let beta = text.find("Beta").expect("Beta listed");
        let alpha = text.find("Alpha").expect("Alpha listed");
        assert!(beta < alpha);
        assert!(text.contains("/projects/b"));
    }

    #[test]
    fn list_json_applies_filter() {
        let text = run_args(&["list", "--filter", "HTML", "--format", "json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["filter"], "HTML");
        assert_eq!(value["total"], 2);
        assert_eq!(value["items"].as_array().unwrap().len(), 1);
        assert_eq!(value["items"][0]["slug"], "a");
        assert_eq!(value["items"][0]["categories"][0], "html");
    }

    #[test]
    fn show_missing_project_prints_not_found() {
        let text = run_args(&["show", "zzz"]).unwrap();
        assert_eq!(text.trim(), "No project found.");
    }

    #[test]
    fn list_without_content_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.toml");
        let cli = Cli::try_parse_from([
            "folio",
            "--config",
            config.to_str().unwrap(),
            "list",
        ])
        .unwrap();

        let err = run_with_writer(cli, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("no content source configured"));
    }

    #[test]
    fn config_supplies_content_and_default_filter() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("projects.json");
        let config = dir.path().join("config.toml");
        fs::write(&content, RESPONSE).unwrap();
        fs::write(
            &config,
            format!(
                "content_path = {:?}\ndefault_filter = \"css\"\n",
                content.display().to_string()
            ),
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "folio",
            "--config",
            config.to_str().unwrap(),
            "--format",
            "json",
            "list",
        ])
        .unwrap();
        let mut out = Vec::new();
        run_with_writer(cli, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["filter"], "CSS");
        assert_eq!(value["items"][0]["slug"], "b");
    }
}
