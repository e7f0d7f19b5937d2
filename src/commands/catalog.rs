//! # Catalog Command Handler
//!
//! One handler serves every catalog: the catalog kind arrives as the first
//! CLI argument and the subcommand drives the corresponding screen flow.
//! List and get read through the service; create and update run the generic
//! form (validation included) before any service call; delete goes through
//! the screen's selection flow.

use serde_json::Value;

use crate::commands::shared::{
    exit_user_error, parse_draft_or_exit, parse_id_or_exit, unwrap_or_exit,
    validate_args_count_or_exit,
};
use crate::{
    Backend, CatalogKind, CatalogScreen, GenericForm, cli_utils,
    cli_utils::OutputFormat,
};

const CATALOG_USAGE: &str =
    "Usage: catalogoctl <catalog> <list|get|create|update|delete> [args...]";

/// Handles all subcommands for one catalog.
///
/// # Arguments
/// * `kind` - Catalog the command targets
/// * `args` - Command arguments (first element is the subcommand)
/// * `backend` - Backend every service call goes through
/// * `output_format` - Output format for get/list commands
pub async fn handle_catalog_command(
    kind: CatalogKind,
    args: &[String],
    backend: Backend,
    output_format: OutputFormat,
) {
    if args.is_empty() {
        cli_utils::exit_with_usage_error(
            &format!("{} command requires a subcommand", kind),
            CATALOG_USAGE,
        );
    }
    match args[0].as_str() {
        "list" => handle_list(kind, args, backend, output_format).await,
        "get" => handle_get(kind, args, backend, output_format).await,
        "create" => handle_create(kind, args, backend).await,
        "update" => handle_update(kind, args, backend).await,
        "delete" => handle_delete(kind, args, backend).await,
        _ => {
            cli_utils::exit_with_error(&format!(
                "Unknown {} subcommand '{}'. Available subcommands: list, get, create, update, delete",
                kind, args[0]
            ));
        }
    }
}

async fn handle_list(
    kind: CatalogKind,
    args: &[String],
    backend: Backend,
    output_format: OutputFormat,
) {
    validate_args_count_or_exit(args, 1, 1, "list", &format!("Usage: catalogoctl {} list", kind));
    let mut screen = CatalogScreen::new(kind, backend);
    unwrap_or_exit(screen.load().await, "load records");

    match output_format {
        OutputFormat::Table => {
            println!("{}", screen.title());
            print!("{}", screen.grid().render_text());
        }
        _ => cli_utils::print_formatted_or_exit(&screen.grid().data(), output_format, "records"),
    }
}

async fn handle_get(
    kind: CatalogKind,
    args: &[String],
    backend: Backend,
    output_format: OutputFormat,
) {
    validate_args_count_or_exit(args, 2, 2, "get", &format!("Usage: catalogoctl {} get <id>", kind));
    let id = parse_id_or_exit(&args[1]);
    let screen = CatalogScreen::new(kind, backend);
    let record = unwrap_or_exit(screen.service().get_by_id(id).await, "fetch record");
    cli_utils::print_formatted_or_exit(&record, output_format, "record");
}

async fn handle_create(kind: CatalogKind, args: &[String], backend: Backend) {
    validate_args_count_or_exit(
        args,
        2,
        2,
        "create",
        &format!("Usage: catalogoctl {} create <json-object>", kind),
    );
    let draft = parse_draft_or_exit(&args[1]);

    let mut screen = CatalogScreen::new(kind, backend);
    unwrap_or_exit(screen.load().await, "load records");
    screen.open_create();
    fill_form_or_exit(&mut screen, &draft);

    match unwrap_or_exit(screen.submit_form().await, "create record") {
        Some(record) => {
            let id = record["id"].as_i64().unwrap_or_default();
            cli_utils::print_success(&format!("Created {} record {}", kind, id));
            cli_utils::print_formatted_or_exit(&record, OutputFormat::Json, "record");
        }
        None => exit_validation_errors(screen.form()),
    }
}

async fn handle_update(kind: CatalogKind, args: &[String], backend: Backend) {
    validate_args_count_or_exit(
        args,
        3,
        3,
        "update",
        &format!("Usage: catalogoctl {} update <id> <json-object>", kind),
    );
    let id = parse_id_or_exit(&args[1]);
    let draft = parse_draft_or_exit(&args[2]);

    let mut screen = CatalogScreen::new(kind, backend);
    unwrap_or_exit(screen.load().await, "load records");
    if screen.grid_mut().select_by_id(id).is_none() {
        exit_user_error(&crate::ServiceError::NotFound, "select record");
    }
    screen.open_edit();
    fill_form_or_exit(&mut screen, &draft);

    match unwrap_or_exit(screen.submit_form().await, "update record") {
        Some(record) => {
            cli_utils::print_success(&format!("Updated {} record {}", kind, id));
            cli_utils::print_formatted_or_exit(&record, OutputFormat::Json, "record");
        }
        None => exit_validation_errors(screen.form()),
    }
}

async fn handle_delete(kind: CatalogKind, args: &[String], backend: Backend) {
    validate_args_count_or_exit(
        args,
        2,
        2,
        "delete",
        &format!("Usage: catalogoctl {} delete <id>", kind),
    );
    let id = parse_id_or_exit(&args[1]);

    let mut screen = CatalogScreen::new(kind, backend);
    unwrap_or_exit(screen.load().await, "load records");
    if screen.grid_mut().select_by_id(id).is_none() {
        exit_user_error(&crate::ServiceError::NotFound, "select record");
    }
    match unwrap_or_exit(screen.delete_selected().await, "delete record") {
        Some(ack) => cli_utils::print_success(&ack.message),
        None => cli_utils::exit_with_error("No record selected"),
    }
}

fn fill_form_or_exit(screen: &mut CatalogScreen, draft: &Value) {
    let entries: Vec<(String, Value)> = draft
        .as_object()
        .map(|map| map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
        .unwrap_or_default();
    for (name, value) in entries {
        if !screen.form_mut().set_value(&name, value) {
            cli_utils::exit_with_error(&format!(
                "Unknown field '{}'. Declared fields: {}",
                name,
                screen
                    .form()
                    .fields()
                    .iter()
                    .map(|f| f.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }
    }
}

fn exit_validation_errors(form: &GenericForm) -> ! {
    let messages: Vec<String> = form
        .fields()
        .iter()
        .filter_map(|field| form.error(&field.name).map(String::from))
        .collect();
    cli_utils::exit_with_error(&format!("Validation failed: {}", messages.join("; ")));
}
