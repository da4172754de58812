use super::args::{AddFields, Cli, Commands, EditFields, SearchTerms};
use super::print::{print_config, print_full_records, print_messages, print_records};
use artdb::api::{self, ArtdbApi, ArtdbPaths, ConfigAction, ExportSelection};
use artdb::config::ArtdbConfig;
use artdb::error::{ArtdbError, Result};
use artdb::model::{Record, RecordPatch};
use artdb::store::fs::FileStore;
use chrono::Local;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Overrides the platform data directory.
pub const HOME_ENV: &str = "ARTDB_HOME";

struct AppContext {
    api: ArtdbApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    super::init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;
    let outcome = dispatch(&mut ctx, cli.command);
    // Close even after a failed command so earlier changes are not lost.
    let closed = ctx.api.close();
    outcome?;
    closed
}

fn dispatch(ctx: &mut AppContext, command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::List) | None => handle_list(ctx),
        Some(Commands::Add { fields }) => handle_add(ctx, fields),
        Some(Commands::Edit { index, fields }) => handle_edit(ctx, &index, fields),
        Some(Commands::Delete { indexes }) => handle_delete(ctx, &indexes),
        Some(Commands::View { indexes }) => handle_view(ctx, &indexes),
        Some(Commands::Search { terms }) => handle_search(ctx, &terms),
        Some(Commands::Export {
            indexes,
            terms,
            output,
        }) => handle_export(ctx, &indexes, &terms, output),
        Some(Commands::Config { key, value }) => handle_config(ctx, key, value),
        Some(Commands::Paths) => handle_paths(ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir()?;
    let config = ArtdbConfig::load(&data_dir).unwrap_or_else(|e| {
        tracing::warn!("Ignoring unreadable config in {}: {}", data_dir.display(), e);
        ArtdbConfig::default()
    });

    let snapshot = cli
        .file
        .clone()
        .unwrap_or_else(|| config.snapshot_path(&data_dir));
    tracing::debug!("Using snapshot {}", snapshot.display());

    let store = FileStore::new(snapshot.clone());
    let paths = ArtdbPaths::new(data_dir, snapshot);
    let api = ArtdbApi::open(store, config, paths);

    Ok(AppContext { api })
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "artdb", "artdb")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            ArtdbError::Config(format!(
                "Could not determine a data directory; set {}",
                HOME_ENV
            ))
        })
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list_records()?;
    print_records(&result.listed_records, "No records.");
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, fields: AddFields) -> Result<()> {
    let year = fields
        .year
        .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());
    let record = Record::new(
        fields.author,
        fields.title,
        fields.keywords,
        fields.summary,
        year,
        fields.udc,
    );
    let result = ctx.api.add_record(record)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, index: &str, fields: EditFields) -> Result<()> {
    let patch = RecordPatch {
        author: fields.author,
        title: fields.title,
        keywords: fields.keywords,
        summary: fields.summary,
        year: fields.year,
        classification_code: fields.udc,
    };
    let result = ctx.api.edit_record(index, patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, indexes: &[String]) -> Result<()> {
    let result = ctx.api.delete_records(indexes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, indexes: &[String]) -> Result<()> {
    let result = ctx.api.view_records(indexes)?;
    print_full_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, terms: &SearchTerms) -> Result<()> {
    let result = ctx.api.search_records(&terms.author, &terms.title)?;
    print_records(&result.listed_records, "No matching records.");
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(
    ctx: &mut AppContext,
    indexes: &[String],
    terms: &SearchTerms,
    output: Option<PathBuf>,
) -> Result<()> {
    let selection = match (indexes.is_empty(), terms.is_empty()) {
        (true, true) => ExportSelection::All,
        (false, true) => ExportSelection::Selected(api::parse_selectors(indexes)?),
        (true, false) => ExportSelection::Matching(ctx.api.query(&terms.author, &terms.title)),
        (false, false) => {
            return Err(ArtdbError::Api(
                "Export takes either indexes or search terms, not both".into(),
            ))
        }
    };
    let output = output.unwrap_or_else(api::default_filename);

    let result = ctx.api.export_records(&selection, &output)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let show_all = matches!(action, ConfigAction::ShowAll);
    let result = ctx.api.config_action(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_paths(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.show_paths()?;
    print_messages(&result.messages);
    Ok(())
}
