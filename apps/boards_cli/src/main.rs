use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    drive, load_settings, render::FormView, Board, BoardClient, BoardController, BoardEvent,
    ListModel, OrderBoard, OrderCounts, RenderContext, Row, StatusMessage, TaskBoard, Tone,
};
use shared::{
    domain::{BoardKind, ItemId},
    protocol::{OrderDraft, TaskDraft},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "boards", about = "Task and order boards backed by a REST service")]
struct Cli {
    /// Backend origin; overrides boards.toml and BOARDS_SERVER_URL.
    #[arg(long)]
    server_url: Option<String>,
    /// Path under which the collections live.
    #[arg(long)]
    api_prefix: Option<String>,
    #[command(subcommand)]
    board: BoardCommand,
}

#[derive(Subcommand, Debug)]
enum BoardCommand {
    Tasks {
        #[command(subcommand)]
        action: TaskAction,
    },
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },
}

#[derive(Subcommand, Debug)]
enum TaskAction {
    List,
    Add {
        title: String,
    },
    /// Toggle a task between open and done.
    Cycle {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
enum OrderAction {
    List,
    Add {
        #[arg(long)]
        table_number: String,
        #[arg(long)]
        items: String,
        #[arg(long)]
        placed_at: String,
    },
    /// Advance an order to its next status.
    Cycle {
        id: String,
    },
}

#[derive(Default)]
struct SubmittedForm {
    cleared: bool,
}

impl FormView for SubmittedForm {
    fn reset(&mut self) {
        self.cleared = true;
    }
}

#[derive(Default)]
struct Screen {
    list: ListModel,
    status: StatusMessage,
    counts: OrderCounts,
    form: SubmittedForm,
}

/// A cycle only makes sense for an item the preceding refresh put on screen.
fn ensure_cycle_target<B: Board>(controller: &BoardController<B>, event: &BoardEvent<B>) -> Result<()> {
    match event {
        BoardEvent::CycleStatus(id) if !controller.is_rendered(id) => {
            bail!("no {} item with id '{id}' on the board", B::KIND)
        }
        _ => Ok(()),
    }
}

async fn run_board<B: Board>(client: &BoardClient, events: Vec<BoardEvent<B>>) -> Result<Screen> {
    let mut screen = Screen::default();
    let mut controller = BoardController::<B>::new();
    for event in events {
        ensure_cycle_target(&controller, &event)?;
        let mut ctx = RenderContext::new(&mut screen.list, &mut screen.status)
            .with_summary(&mut screen.counts)
            .with_form(&mut screen.form);
        drive(&mut controller, client, event, &mut ctx).await;
    }
    Ok(screen)
}

fn print_board(kind: BoardKind, screen: &Screen) -> Result<()> {
    if !screen.status.text.is_empty() && screen.status.tone == Tone::Error {
        bail!("{}", screen.status.text);
    }
    if !screen.status.text.is_empty() {
        println!("{}", screen.status.text);
    }
    if screen.list.rows().is_empty() {
        bail!("could not load the {kind} board; rerun with RUST_LOG=debug for details");
    }

    if kind == BoardKind::Orders {
        println!(
            "New {} | In Progress {} | Ready {}",
            screen.counts.new, screen.counts.in_progress, screen.counts.ready
        );
    }
    for row in screen.list.rows() {
        match row {
            Row::Placeholder(text) => println!("  {text}"),
            Row::Item(item) => {
                println!("  [{}] {}  ({})", item.pill.label, item.title, item.meta);
                if let Some(detail) = &item.detail {
                    println!("      {detail}");
                }
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let mut settings = load_settings();
    if let Some(server_url) = cli.server_url {
        settings.server_url = client_core::config::normalize_server_url(&server_url);
    }
    if let Some(api_prefix) = cli.api_prefix {
        settings.api_prefix = client_core::config::normalize_api_prefix(&api_prefix);
    }
    let client = BoardClient::from_settings(&settings)
        .with_context(|| format!("cannot use server url '{}'", settings.server_url))?;
    tracing::debug!(api = %client.api_base(), "using backend");

    match cli.board {
        BoardCommand::Tasks { action } => {
            let events = match action {
                TaskAction::List => vec![BoardEvent::Refresh],
                TaskAction::Add { title } => vec![BoardEvent::Create(TaskDraft { title })],
                TaskAction::Cycle { id } => {
                    vec![BoardEvent::Refresh, BoardEvent::CycleStatus(ItemId(id))]
                }
            };
            let screen = run_board::<TaskBoard>(&client, events).await?;
            print_board(TaskBoard::KIND, &screen)
        }
        BoardCommand::Orders { action } => {
            let events = match action {
                OrderAction::List => vec![BoardEvent::Refresh],
                OrderAction::Add {
                    table_number,
                    items,
                    placed_at,
                } => vec![BoardEvent::Create(OrderDraft {
                    table_number,
                    items,
                    placed_at,
                })],
                OrderAction::Cycle { id } => {
                    vec![BoardEvent::Refresh, BoardEvent::CycleStatus(ItemId(id))]
                }
            };
            let screen = run_board::<OrderBoard>(&client, events).await?;
            print_board(OrderBoard::KIND, &screen)
        }
    }
}
