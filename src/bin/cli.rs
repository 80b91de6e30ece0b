//! CLI for the StorageOS API

use clap::{Args, Parser, Subcommand};
use std::collections::HashMap;
use std::path::PathBuf;
use storageos_client::{
    Client, ClientConfig, ListOptions, PoolCreateOptions, VolumeCreateOptions, VolumeMountOptions,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "storageos")]
#[command(about = "StorageOS volume, pool and node CLI")]
#[command(version)]
struct Cli {
    /// Config file (TOML); STORAGEOS_* variables override it
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// API endpoint, e.g. http://10.1.5.249:5705
    #[arg(long, global = true)]
    endpoint: Option<String>,

    #[arg(long, global = true)]
    username: Option<String>,

    #[arg(long, global = true)]
    password: Option<String>,

    /// Bearer token (wins over username/password)
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage volumes
    #[command(subcommand)]
    Volume(VolumeCommand),

    /// Manage pools
    #[command(subcommand)]
    Pool(PoolCommand),

    /// Inspect nodes
    #[command(subcommand)]
    Node(NodeCommand),
}

#[derive(Args)]
struct Selectors {
    /// Label selector, e.g. env=prod
    #[arg(long)]
    selector: Option<String>,

    /// Field selector
    #[arg(long)]
    field_selector: Option<String>,
}

impl Selectors {
    fn into_options(self) -> ListOptions {
        ListOptions {
            label_selector: self.selector,
            field_selector: self.field_selector,
        }
    }
}

#[derive(Subcommand)]
enum VolumeCommand {
    /// List volumes
    Ls(Selectors),

    /// Create a volume
    Create {
        name: String,

        /// Pool to allocate from
        #[arg(long)]
        pool: String,

        /// Size in GiB
        #[arg(long)]
        size: u64,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long, default_value = "")]
        fs_type: String,

        /// key=value, repeatable
        #[arg(long = "label", value_parser = parse_label)]
        labels: Vec<(String, String)>,
    },

    /// Show a volume as JSON
    Inspect { name: String },

    /// Delete a volume
    Rm { name: String },

    /// Mark a volume as mounted on a node
    Mount {
        name: String,

        /// Node mounting the volume
        #[arg(long)]
        client: String,
    },

    /// Clear a volume's mount
    Unmount { name: String },
}

#[derive(Subcommand)]
enum PoolCommand {
    /// List pools
    Ls(Selectors),

    /// Create a pool
    Create {
        name: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Make this the default pool
        #[arg(long)]
        default: bool,

        /// Controllers contributing capacity (comma-separated)
        #[arg(long, value_delimiter = ',')]
        controllers: Vec<String>,
    },

    /// Show a pool as JSON
    Inspect { name: String },

    /// Delete a pool
    Rm { name: String },
}

#[derive(Subcommand)]
enum NodeCommand {
    /// List nodes
    Ls(Selectors),

    /// Show a node as JSON
    Inspect { name: String },
}

fn parse_label(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((k, v)) if !k.is_empty() => Ok((k.to_string(), v.to_string())),
        _ => Err(format!("expected key=value, got {:?}", s)),
    }
}

fn client_config(cli: &Cli) -> anyhow::Result<ClientConfig> {
    let mut config = ClientConfig::load(cli.config.as_deref())?;
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(username) = &cli.username {
        config.username = Some(username.clone());
    }
    if let Some(password) = &cli.password {
        config.password = Some(password.clone());
    }
    if let Some(token) = &cli.token {
        config.token = Some(token.clone());
    }
    config.validate()?;
    Ok(config)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = client_config(&cli)?;
    let client = Client::new(&config)?;

    match cli.command {
        Commands::Volume(cmd) => match cmd {
            VolumeCommand::Ls(selectors) => {
                let volumes = client.volume_list(&selectors.into_options()).await?;
                println!(
                    "{:<24} {:<38} {:>6} {:<10} {:<8} NODES",
                    "NAME", "POOL", "SIZE", "STATUS", "MOUNTED"
                );
                for v in volumes {
                    let nodes: Vec<&str> = v.controllers().collect();
                    println!(
                        "{:<24} {:<38} {:>4}GB {:<10} {:<8} {}",
                        v.name,
                        v.pool,
                        v.size,
                        v.status,
                        v.mounted,
                        nodes.join(",")
                    );
                }
            }

            VolumeCommand::Create {
                name,
                pool,
                size,
                description,
                fs_type,
                labels,
            } => {
                let opts = VolumeCreateOptions {
                    name,
                    description,
                    size,
                    pool,
                    fs_type,
                    labels: labels.into_iter().collect::<HashMap<_, _>>(),
                };
                let id = client.volume_create(&opts).await?;
                println!("{}", id);
            }

            VolumeCommand::Inspect { name } => print_json(&client.volume(&name).await?)?,

            VolumeCommand::Rm { name } => {
                client.volume_delete(&name).await?;
                println!("{}", name);
            }

            VolumeCommand::Mount { name, client: node } => {
                client
                    .volume_mount(&name, &VolumeMountOptions { client: node })
                    .await?;
                println!("{}", name);
            }

            VolumeCommand::Unmount { name } => {
                client.volume_unmount(&name).await?;
                println!("{}", name);
            }
        },

        Commands::Pool(cmd) => match cmd {
            PoolCommand::Ls(selectors) => {
                let pools = client.pool_list(&selectors.into_options()).await?;
                println!(
                    "{:<24} {:<8} {:<8} {:>16} {:>16}",
                    "NAME", "DEFAULT", "ACTIVE", "TOTAL", "AVAILABLE"
                );
                for p in pools {
                    println!(
                        "{:<24} {:<8} {:<8} {:>16} {:>16}",
                        p.name,
                        p.default,
                        p.active,
                        p.capacity_stats.total_capacity_bytes,
                        p.capacity_stats.available_capacity_bytes
                    );
                }
            }

            PoolCommand::Create {
                name,
                description,
                default,
                controllers,
            } => {
                let opts = PoolCreateOptions {
                    name,
                    description,
                    default,
                    controller_names: controllers,
                    active: true,
                    ..Default::default()
                };
                let id = client.pool_create(&opts).await?;
                println!("{}", id);
            }

            PoolCommand::Inspect { name } => print_json(&client.pool(&name).await?)?,

            PoolCommand::Rm { name } => {
                client.pool_delete(&name).await?;
                println!("{}", name);
            }
        },

        Commands::Node(cmd) => match cmd {
            NodeCommand::Ls(selectors) => {
                let nodes = client.node_list(&selectors.into_options()).await?;
                println!("{:<24} {:<20} {:<10} SCHEDULER", "NAME", "ADDRESS", "HEALTH");
                for n in nodes {
                    println!(
                        "{:<24} {:<20} {:<10} {}",
                        n.name, n.address, n.health, n.scheduler
                    );
                }
            }

            NodeCommand::Inspect { name } => print_json(&client.node(&name).await?)?,
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_create_requires_pool_and_size() {
        assert!(Cli::try_parse_from(["storageos", "volume", "create", "vol1"]).is_err());
        assert!(Cli::try_parse_from(["storageos", "volume", "create", "vol1", "--pool", "p"]).is_err());
        assert!(Cli::try_parse_from(["storageos", "volume", "create", "vol1", "--size", "5"]).is_err());

        let cli = Cli::try_parse_from([
            "storageos", "volume", "create", "vol1", "--pool", "fast", "--size", "10", "--label", "env=prod",
        ])
        .unwrap();
        match cli.command {
            Commands::Volume(VolumeCommand::Create { name, pool, size, labels, .. }) => {
                assert_eq!(name, "vol1");
                assert_eq!(pool, "fast");
                assert_eq!(size, 10);
                assert_eq!(labels, vec![("env".to_string(), "prod".to_string())]);
            }
            _ => panic!("expected volume create"),
        }
    }
}
