use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use data_encoding::{BASE64, HEXLOWER};
use merkledag::{Error, Link, Node, NodeHash};
use merkledag_tracing::TracingBuilder;
use serde_json::json;
use tracing::{error, Level};

/// Builds and inspects Merkle DAG nodes.
#[derive(Parser)]
struct Cli {
    /// A global log level to use when printing logs.
    /// It's also possible to set `RUST_LOG` according to
    /// `tracing_subscriber::filter::EnvFilter`, which will always have
    /// priority.
    #[arg(long, env = "MDAG_LOG_LEVEL", default_value_t = Level::INFO)]
    log_level: Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decodes a node from its wire form and prints it as JSON.
    Inspect {
        /// File holding the encoded node. Reads stdin if omitted.
        path: Option<PathBuf>,
    },
    /// Builds a node from raw data and prints its id, size and wire form.
    Hash {
        /// A link to add, as NAME=ID:SIZE. Links are added in the order given.
        #[arg(long = "link", value_parser = parse_link)]
        links: Vec<Link>,

        /// Only print the id.
        #[arg(long)]
        raw: bool,

        /// File holding the node data. Reads stdin if omitted.
        path: Option<PathBuf>,
    },
}

/// Parses a NAME=ID:SIZE link argument.
fn parse_link(s: &str) -> Result<Link, Error> {
    let (name, target) = s
        .split_once('=')
        .ok_or_else(|| Error::InvalidArgument(format!("missing '=' in link {:?}", s)))?;
    let (id, size) = target
        .rsplit_once(':')
        .ok_or_else(|| Error::InvalidArgument(format!("missing ':' in link {:?}", s)))?;

    let hash: NodeHash = id.parse()?;
    let size = size
        .parse::<u64>()
        .map_err(|e| Error::InvalidArgument(format!("invalid size in link {:?}: {}", s, e)))?;

    Ok(Link::new(name, size, hash))
}

fn read_input(path: Option<PathBuf>) -> std::io::Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path),
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn node_json(node: &Node) -> serde_json::Value {
    json!({
        "id": node.id(),
        "size": node.size(),
        "data": BASE64.encode(node.data()),
        "links": node.links().iter().map(|link| json!({
            "name": link.name(),
            "size": link.size(),
            "hash": link.hash().to_string(),
        })).collect::<Vec<_>>(),
    })
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();

    TracingBuilder::default().level(cli.log_level).build()?;

    match cli.command {
        Commands::Inspect { path } => {
            let buf = read_input(path)?;
            let node = Node::decode(&buf).inspect_err(|e| error!(err=%e, "unable to decode node"))?;

            println!("{}", serde_json::to_string_pretty(&node_json(&node))?);
        }
        Commands::Hash { links, raw, path } => {
            let data = read_input(path)?;
            let node = Node::with_links(data, links)?;

            if raw {
                println!("{}", node.id());
            } else {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "id": node.id(),
                        "size": node.size(),
                        "encoded": HEXLOWER.encode(node.encoded()),
                    }))?
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_link;
    use merkledag::fixtures::HELLO_HASH;
    use merkledag::Error;
    use rstest::rstest;

    #[test]
    fn parse_valid_link() {
        let link = parse_link("prev=QmTnaGEpw4totXN7rhv2jPMXKfL8s65PhhCKL5pwtJfRxn:7")
            .expect("must parse");

        assert_eq!(link.name(), "prev");
        assert_eq!(link.size(), 7);
        assert_eq!(link.hash(), &*HELLO_HASH);
    }

    #[rstest]
    #[case::no_equals("prevQmTnaGEpw4totXN7rhv2jPMXKfL8s65PhhCKL5pwtJfRxn:7")]
    #[case::no_size("prev=QmTnaGEpw4totXN7rhv2jPMXKfL8s65PhhCKL5pwtJfRxn")]
    #[case::bad_size("prev=QmTnaGEpw4totXN7rhv2jPMXKfL8s65PhhCKL5pwtJfRxn:-1")]
    #[case::bad_id("prev=nope:7")]
    fn parse_invalid_link(#[case] s: &str) {
        assert!(matches!(parse_link(s), Err(Error::InvalidArgument(_))));
    }
}
