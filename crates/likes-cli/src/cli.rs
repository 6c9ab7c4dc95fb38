use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use likes_types::RefType;

#[derive(Parser)]
#[command(name = "likes", about = "Beer likes query service", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Server to query
    #[arg(long, global = true, default_value = "http://127.0.0.1:10000")]
    pub addr: String,

    /// Per-call timeout in seconds
    #[arg(long, global = true, default_value = "10")]
    pub timeout_secs: u64,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the likes server
    Serve(ServeArgs),
    /// Look up one like by id
    Get(GetArgs),
    /// Stream every like for a ref type
    List(FilterArgs),
    /// Summarize the likes for a ref type
    Summary(FilterArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// TOML config file; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub host: Option<String>,
    #[arg(long)]
    pub port: Option<u16>,
    /// JSON file containing the list of likes
    #[arg(long)]
    pub json_db_file: Option<PathBuf>,
    /// Refuse to start if the likes file cannot be loaded
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args)]
pub struct GetArgs {
    /// Like id; empty looks up the like with an empty id
    #[arg(default_value = "")]
    pub id: String,
}

#[derive(Args)]
pub struct FilterArgs {
    /// Ref type as NAME:ID, e.g. beer:1
    pub ref_type: RefType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_serve() {
        let cli = Cli::try_parse_from([
            "likes", "serve", "--port", "9000", "--json-db-file", "db.json", "--strict",
        ])
        .unwrap();
        let Command::Serve(args) = cli.command else {
            panic!("wrong command");
        };
        assert_eq!(args.port, Some(9000));
        assert_eq!(args.json_db_file, Some(PathBuf::from("db.json")));
        assert!(args.strict);
        assert!(args.host.is_none());
    }

    #[test]
    fn parse_get() {
        let cli = Cli::try_parse_from(["likes", "get", "3e8f9d58"]).unwrap();
        let Command::Get(args) = cli.command else {
            panic!("wrong command");
        };
        assert_eq!(args.id, "3e8f9d58");
    }

    #[test]
    fn parse_get_without_id() {
        let cli = Cli::try_parse_from(["likes", "get"]).unwrap();
        let Command::Get(args) = cli.command else {
            panic!("wrong command");
        };
        assert_eq!(args.id, "");
    }

    #[test]
    fn parse_list_ref_type() {
        let cli = Cli::try_parse_from(["likes", "list", "beer:1"]).unwrap();
        let Command::List(args) = cli.command else {
            panic!("wrong command");
        };
        assert_eq!(args.ref_type, RefType::new("beer", "1"));
    }

    #[test]
    fn parse_summary_rejects_bad_ref_type() {
        assert!(Cli::try_parse_from(["likes", "summary", "beer"]).is_err());
    }

    #[test]
    fn parse_globals() {
        let cli = Cli::try_parse_from([
            "likes", "--format", "json", "--addr", "http://h:1", "-v", "summary", "beer:2",
        ])
        .unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
        assert_eq!(cli.addr, "http://h:1");
        assert!(cli.verbose);
        assert_eq!(cli.timeout_secs, 10);
    }
}
