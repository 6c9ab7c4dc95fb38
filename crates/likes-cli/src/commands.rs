use std::time::{Duration, Instant};

use anyhow::Context;
use colored::Colorize;
use likes_client::LikesClient;
use likes_server::{LikesServer, ServerConfig};
use likes_store::{LoadPolicy, RecordStore};
use likes_types::{Like, LikeQuery, LikesQuery, LikesSummary};

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let timeout = Duration::from_secs(cli.timeout_secs);
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Get(args) => cmd_get(&client(&cli.addr, timeout)?, args, &cli.format).await,
        Command::List(args) => cmd_list(&client(&cli.addr, timeout)?, args, &cli.format).await,
        Command::Summary(args) => cmd_summary(&client(&cli.addr, timeout)?, args, &cli.format).await,
    }
}

fn client(addr: &str, timeout: Duration) -> anyhow::Result<LikesClient> {
    LikesClient::with_timeout(addr, timeout).context("failed to build HTTP client")
}

/// Resolve the server config: file first, then flags.
pub fn server_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_file(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(host) = &args.host {
        config.bind_addr.set_ip(host.parse().with_context(|| format!("invalid host {host}"))?);
    }
    if let Some(port) = args.port {
        config.bind_addr.set_port(port);
    }
    if let Some(path) = &args.json_db_file {
        config.db_file = path.clone();
    }
    if args.strict {
        config.load_policy = LoadPolicy::Strict;
    }
    Ok(config)
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = server_config(&args)?;
    let server = LikesServer::new(config).context("failed to load likes")?;
    println!(
        "{} Serving {} likes on {}",
        "✓".green().bold(),
        server.engine().store().len().to_string().bold(),
        server.config().bind_addr.to_string().bold()
    );
    server.serve(shutdown_signal()).await?;
    Ok(())
}

/// Resolves on Ctrl-C. If the handler cannot be installed the server runs
/// until killed.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
}

async fn cmd_get(client: &LikesClient, args: GetArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let like = client.get_like(&LikeQuery::new(args.id)).await?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&like)?),
        OutputFormat::Text => print_like(&like),
    }
    Ok(())
}

/// Streams the matches, then prints a summary tallied on this side of the
/// wire. Its elapsed time includes the transport.
async fn cmd_list(client: &LikesClient, args: FilterArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let start = Instant::now();
    let mut likes = Vec::new();
    let mut encode_error = None;
    client
        .list_likes_each(&LikesQuery::new(args.ref_type), |like| {
            if encode_error.is_some() {
                return;
            }
            match format {
                OutputFormat::Json => match serde_json::to_string(&like) {
                    Ok(line) => println!("{line}"),
                    Err(e) => encode_error = Some((like.id.clone(), e)),
                },
                OutputFormat::Text => print_like(&like),
            }
            likes.push(like);
        })
        .await?;
    if let Some((id, e)) = encode_error {
        return Err(e).with_context(|| format!("failed to encode like {id}"));
    }
    let summary = LikesSummary::from_likes(likes, start.elapsed());
    if let OutputFormat::Text = format {
        print_totals(&summary);
    }
    Ok(())
}

async fn cmd_summary(client: &LikesClient, args: FilterArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let summary = client.get_likes_summary(&LikesQuery::new(args.ref_type)).await?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Text => {
            for like in &summary.likes {
                print_like(like);
            }
            print_totals(&summary);
        }
    }
    Ok(())
}

fn print_like(like: &Like) {
    let vote = if like.liked { "liked".green() } else { "disliked".red() };
    println!("{}  {}  {}", like.id.yellow(), like.ref_type.to_string().cyan(), vote);
}

fn print_totals(summary: &LikesSummary) {
    let total = if summary.total < 0 {
        summary.total.to_string().red()
    } else {
        summary.total.to_string().green()
    };
    println!(
        "{} likes, total {} ({:?})",
        summary.len().to_string().bold(),
        total.bold(),
        summary.elapsed
    );
}
