//! Item catalog CLI binary.
//!
//! A command-line front end for browsing the catalog and sending feedback.

use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;
use itemcat::browse::{Session, Step};
use itemcat::cli::{Cli, Command, ThemeAction};
use itemcat::{
    CatalogClient, CatalogError, DetailViewModel, Field, FileSettingsStore, ListViewModel,
    LoadState, Renderer, SubmitOutcome, Theme, ThemeService,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("ITEMCAT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let client = match CatalogClient::new(&cli.api_url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set ITEMCAT_API_URL or pass --api-url");
            return ExitCode::FAILURE;
        }
    };

    match run(client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: CatalogClient, cli: Cli) -> itemcat::Result<()> {
    let theme = open_theme(&cli)?;
    let renderer = if cli.json || !io::stdout().is_terminal() {
        Renderer::plain()
    } else {
        Renderer::new(theme.theme())
    };

    match cli.command {
        Command::List { search, page } => {
            handle_list(&client, &renderer, search, page, cli.json).await
        }
        Command::Get { id } => handle_get(&client, &renderer, &id, cli.json).await,
        Command::Submit {
            id,
            name,
            email,
            message,
        } => {
            let form = [
                (Field::Name, name),
                (Field::Email, email),
                (Field::Message, message),
            ];
            handle_submit(&client, &renderer, &id, form, cli.json).await
        }
        Command::Theme { action } => handle_theme(theme, action, cli.json),
        Command::Browse => handle_browse(client, theme, cli.json).await,
    }
}

fn open_theme(cli: &Cli) -> itemcat::Result<ThemeService<FileSettingsStore>> {
    let store = match &cli.settings {
        Some(path) => FileSettingsStore::new(path),
        None => FileSettingsStore::default_location()?,
    };
    Ok(ThemeService::init(store, Theme::system_preference()))
}

async fn handle_list(
    client: &CatalogClient,
    renderer: &Renderer,
    search: Option<String>,
    page: Option<usize>,
    json: bool,
) -> itemcat::Result<()> {
    let mut list = ListViewModel::new();
    list.load(client).await;
    if let Some(query) = search {
        list.set_query(query);
    }
    if let Some(page) = page {
        list.go_to(page);
    }

    let view = list.derive();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", renderer.layout(&renderer.list_page(&view)));
    }

    match view.status {
        LoadState::Failed(message) => Err(CatalogError::ApiError {
            message,
            status_code: None,
        }),
        _ => Ok(()),
    }
}

async fn handle_get(
    client: &CatalogClient,
    renderer: &Renderer,
    id: &str,
    json: bool,
) -> itemcat::Result<()> {
    let mut detail = DetailViewModel::mount(id);
    detail.load(client).await;

    let view = detail.derive();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", renderer.layout(&renderer.detail_page(&view)));
    }

    match view.status {
        LoadState::Failed(message) => Err(CatalogError::ApiError {
            message,
            status_code: None,
        }),
        _ => Ok(()),
    }
}

async fn handle_submit(
    client: &CatalogClient,
    renderer: &Renderer,
    id: &str,
    form: [(Field, String); 3],
    json: bool,
) -> itemcat::Result<()> {
    let mut detail = DetailViewModel::mount(id);
    detail.load(client).await;
    if let LoadState::Failed(message) = detail.status() {
        return Err(CatalogError::ApiError {
            message: message.clone(),
            status_code: None,
        });
    }

    for (field, value) in form {
        detail.set_field(field, value);
    }
    let outcome = detail.submit(client).await;

    let view = detail.derive();
    if json {
        println!("{}", serde_json::to_string_pretty(&view.form)?);
    } else {
        println!("{}", renderer.layout(&renderer.detail_page(&view)));
    }

    match outcome {
        SubmitOutcome::Succeeded(_) => Ok(()),
        SubmitOutcome::Blocked => Err(CatalogError::Validation(
            "the form has errors; nothing was sent".to_string(),
        )),
        SubmitOutcome::Failed(message) => Err(CatalogError::Submission(message)),
    }
}

fn handle_theme(
    mut theme: ThemeService<FileSettingsStore>,
    action: ThemeAction,
    json: bool,
) -> itemcat::Result<()> {
    match action {
        ThemeAction::Show => {}
        ThemeAction::Toggle => {
            theme.toggle()?;
        }
        ThemeAction::Light => theme.set(Theme::Light)?,
        ThemeAction::Dark => theme.set(Theme::Dark)?,
    }

    if json {
        println!("{}", serde_json::json!({ "theme": theme.theme() }));
    } else {
        println!("{}", theme.theme());
    }
    Ok(())
}

async fn handle_browse(
    client: CatalogClient,
    theme: ThemeService<FileSettingsStore>,
    json: bool,
) -> itemcat::Result<()> {
    let mut session = Session::new(client, theme);
    if json || !io::stdout().is_terminal() {
        session = session.without_color();
    }

    let mut stdout = io::stdout();
    writeln!(stdout, "{}", session.start().await)?;

    let stdin = io::stdin();
    loop {
        write!(stdout, "\n> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match session.handle(&line).await {
            Step::Render(text) => writeln!(stdout, "{text}")?,
            Step::Quit => break,
        }
    }
    Ok(())
}
