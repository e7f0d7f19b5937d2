use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use arrrg::CommandLine;
use arrrg_derive::CommandLine;

use catalogo::{
    AuditLog, Backend, CatalogKind, CatalogStore, ConsoleConfig,
    cli_utils::{self, OutputFormat},
    commands::handle_catalog_command,
};

#[derive(CommandLine, Default, PartialEq, Eq)]
struct Options {
    #[arrrg(optional, "Base URL of the console API server (implies remote mode)")]
    api_url: Option<String>,
    #[arrrg(flag, "Operate on the in-process mock store (the default unless configured otherwise)")]
    mock: bool,
    #[arrrg(optional, "Simulated latency in milliseconds for mock-store operations")]
    latency_ms: Option<u64>,
    #[arrrg(optional, "Append mock-store mutations to this JSONL audit log")]
    audit_log: Option<String>,
    #[arrrg(
        optional,
        "Output format for get/list commands: table, json, or yaml (default: table)"
    )]
    output: OutputFormat,
}

const USAGE: &str = r#"Usage: catalogoctl [options] <command> [args...]

Options:
  --api-url <url>      Base URL of the console API server (implies remote mode;
                       default: http://localhost:8080/api)
  --mock               Operate on the in-process mock store
  --latency-ms <ms>    Simulated latency for mock-store operations
  --audit-log <path>   Append mock-store mutations to this JSONL file
  --output <format>    Output format for get/list commands: table, json, or yaml

Commands:
  catalogs                                     List the available catalogs
  <catalog> list                               List all records, enriched
  <catalog> get <id>                           Get one record by id
  <catalog> create <json-object>               Create a record from a draft
  <catalog> update <id> <json-object>          Replace a record by id
  <catalog> delete <id>                        Delete a record by id

Catalogs:
  estados, empresas, tipos-proyecto, fases, sistemas, subsistemas, ramas,
  proyectos

The backend defaults to the CONSOLE_USE_MOCK and CONSOLE_API_URL environment
variables; --mock and --api-url override them."#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (options, free) =
        Options::from_command_line_relaxed("USAGE: catalogoctl [options] <command> [args...]");

    if free.is_empty() {
        cli_utils::exit_with_usage_error("No command specified", USAGE);
    }

    let mut config = ConsoleConfig::from_env();
    if options.mock {
        config.use_mock = true;
    }
    if let Some(api_url) = &options.api_url {
        config.use_mock = false;
        config.api_url = api_url.clone();
    }

    let backend = if config.use_mock {
        let latency = Duration::from_millis(options.latency_ms.unwrap_or(0));
        let mut store = CatalogStore::seeded().with_latency(latency);
        if let Some(path) = &options.audit_log {
            store = store.with_audit(AuditLog::new(PathBuf::from(path)));
        }
        Backend::Mock(Arc::new(store))
    } else {
        config.backend()
    };

    match free[0].as_str() {
        "catalogs" => {
            for kind in CatalogKind::ALL {
                println!("{}", kind);
            }
        }
        command => match CatalogKind::from_path(command) {
            Some(kind) => {
                handle_catalog_command(kind, &free[1..], backend, options.output).await;
            }
            None => {
                cli_utils::exit_with_error(&format!(
                    "Unknown command '{}'. Available commands: catalogs, {}",
                    command,
                    CatalogKind::ALL.map(|k| k.path()).join(", ")
                ));
            }
        },
    }

    Ok(())
}
