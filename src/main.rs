use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{error, info};
use logdrop::{
    config::{AppConfig, CONFIG_FILE},
    push::{self, PushArgs},
    serve,
};
use std::{net::IpAddr, path::PathBuf};

#[derive(Parser)]
#[command(name = "logdrop")]
#[command(about = "Drop-box collector for device logs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the log collector
    Serve {
        /// IP address to listen on [default: 0.0.0.0]
        #[arg(short, long)]
        bind: Option<IpAddr>,

        /// Port to listen on [default: 8080]
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory that receives uploads [default: current directory]
        #[arg(short, long, value_name = "PATH")]
        dir: Option<PathBuf>,

        /// Largest accepted body in bytes
        #[arg(long, value_name = "BYTES")]
        max_body: Option<usize>,
    },

    /// Upload a log file or message to a collector
    Push {
        /// Text file to upload
        #[arg(value_name = "PATH", conflicts_with = "message")]
        path: Option<PathBuf>,

        /// Upload a message instead of a file
        #[arg(short, long, conflicts_with = "path")]
        message: Option<String>,

        /// Store under <NAME>.<timestamp>.upload instead of a random name
        #[arg(short, long)]
        name: Option<String>,

        /// Collector URL (e.g. http://localhost:8080)
        #[arg(short, long)]
        server: Option<String>,

        /// Request timeout in seconds
        #[arg(short, long)]
        timeout: Option<u64>,
    },

    /// Generate configuration file (.logdrop.toml) in current directory
    Genconfig {
        /// Force overwrite existing configuration file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            use std::io::Write;
            let level_style = buf.default_level_style(record.level());
            writeln!(
                buf,
                "[{} {level_style}{}{level_style:#} {}:{}] {level_style}{}{level_style:#}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();

    let cli = Cli::parse();

    let app_config = if std::path::Path::new(CONFIG_FILE).exists() {
        match AppConfig::load_from_file(CONFIG_FILE) {
            Ok(cfg) => {
                let abs_path = std::fs::canonicalize(CONFIG_FILE)
                    .unwrap_or_else(|_| PathBuf::from(CONFIG_FILE));
                info!("Using configuration file: {}", abs_path.display());
                Some(cfg)
            }
            Err(e) => {
                error!("Failed to load configuration file: {}, using defaults", e);
                None
            }
        }
    } else {
        None
    };

    match cli.command {
        Commands::Serve {
            bind,
            port,
            dir,
            max_body,
        } => {
            serve::run_with_config(
                bind,
                port,
                dir,
                max_body,
                app_config.as_ref().and_then(|c| c.serve.clone()),
            )?;
        }

        Commands::Push {
            path,
            message,
            name,
            server,
            timeout,
        } => {
            push::run_with_config(
                PushArgs {
                    path,
                    message,
                    name,
                    server,
                    timeout,
                },
                app_config.as_ref().and_then(|c| c.push.clone()),
            )?;
        }

        Commands::Genconfig { force } => {
            if let Err(e) = AppConfig::generate_config_file(force) {
                error!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
