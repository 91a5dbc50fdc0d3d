//! catalog-search-mcp: MCP server for fuzzy search over a service catalog.
//!
//! Usage:
//!   catalog-search-mcp --mcp --catalog <path>            # MCP server on stdio
//!   catalog-search-mcp --mcp --sse --port 8080 ...       # MCP server over SSE
//!   catalog-search-mcp --catalog <path> search <keyword> # CLI search mode

use catalog_search_mcp::catalog::{CatalogRepo, JsonCatalog};
use catalog_search_mcp::search::SearchIndex;
use catalog_search_mcp::server::CatalogServer;
use catalog_search_mcp::{fmt, tools};
use clap::{Parser, Subcommand};
use rmcp::ServiceExt;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "catalog-search-mcp")]
#[command(about = "MCP server for fuzzy search over a service catalog")]
#[command(version)]
struct Cli {
    /// Run as MCP server (stdin/stdout JSON-RPC unless --sse)
    #[arg(long)]
    mcp: bool,

    /// Path to the catalog JSON file
    #[arg(long)]
    catalog: PathBuf,

    /// Serve MCP over SSE instead of stdio
    #[arg(long)]
    sse: bool,

    /// Port for the SSE server
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Base URL advertised for the SSE server
    #[arg(long, default_value = "http://localhost")]
    base_url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fuzzy-search module ids, teams and applications
    Search {
        /// Search keyword (empty browses every category)
        keyword: String,

        /// Maximum values per category
        #[arg(short, long, default_value = "5")]
        limit: usize,
    },

    /// List catalog modules matching a keyword
    Modules {
        /// Substring filter over id, name and description (empty = all)
        #[arg(default_value = "")]
        keyword: String,
    },

    /// List distinct module kinds
    Kinds,

    /// List modules ordered by descending complexity
    Complexity {
        /// Maximum modules to return
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // CRITICAL: Log to stderr only (stdout is JSON-RPC for MCP)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("catalog_search_mcp=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    if cli.mcp {
        if cli.sse {
            run_mcp_sse(&cli).await
        } else {
            run_mcp_stdio(&cli).await
        }
    } else if let Some(cmd) = cli.command {
        run_cli(&cli.catalog, cmd)
    } else {
        eprintln!("Use --mcp to start the MCP server, or a subcommand for CLI mode.");
        eprintln!("Run with --help for more information.");
        std::process::exit(1);
    }
}

async fn run_mcp_stdio(cli: &Cli) -> anyhow::Result<()> {
    tracing::info!(
        "Starting MCP server on stdio for catalog: {}",
        cli.catalog.display()
    );

    let server = CatalogServer::from_catalog_file(&cli.catalog)?;

    // Run the MCP server on stdin/stdout
    let service = server.serve(rmcp::transport::io::stdio()).await?;
    service.waiting().await?;

    Ok(())
}

async fn run_mcp_sse(cli: &Cli) -> anyhow::Result<()> {
    use rmcp::transport::sse_server::SseServer;

    let server = CatalogServer::from_catalog_file(&cli.catalog)?;
    let bind = format!("0.0.0.0:{}", cli.port).parse()?;
    let full_base_url = format!("{}:{}", cli.base_url, cli.port);

    tracing::info!("Starting MCP server with SSE transport on {full_base_url}");
    tracing::info!("SSE endpoint: {full_base_url}/sse");

    let ct = SseServer::serve(bind)
        .await?
        .with_service(move || server.clone());

    tokio::signal::ctrl_c().await?;
    ct.cancel();

    Ok(())
}

fn run_cli(catalog: &Path, cmd: Commands) -> anyhow::Result<()> {
    let repo: Arc<dyn CatalogRepo> = Arc::new(JsonCatalog::open(catalog)?);
    let color = std::io::stdout().is_terminal();
    let mut stdout = std::io::stdout().lock();

    match cmd {
        Commands::Search { keyword, limit } => {
            let index = Arc::new(SearchIndex::from_repo(repo.as_ref()));
            let input = tools::SearchInput { keyword, limit };
            let out = tools::execute_search(&index, input).map_err(|e| anyhow::anyhow!(e))?;
            fmt::fmt_search(&mut stdout, &out, color)?;
        }

        Commands::Modules { keyword } => {
            let input = tools::ModulesInput {
                filter_keyword: keyword,
            };
            let out = tools::execute_list_modules(&repo, input).map_err(|e| anyhow::anyhow!(e))?;
            fmt::fmt_modules(&mut stdout, &out, color)?;
        }

        Commands::Kinds => {
            let out = tools::execute_list_kinds(&repo).map_err(|e| anyhow::anyhow!(e))?;
            fmt::fmt_kinds(&mut stdout, &out)?;
        }

        Commands::Complexity { limit } => {
            let input = tools::ComplexityInput { limit_to: limit };
            let out = tools::execute_list_modules_by_complexity(&repo, input)
                .map_err(|e| anyhow::anyhow!(e))?;
            fmt::fmt_complexity(&mut stdout, &out, color)?;
        }
    }

    Ok(())
}
