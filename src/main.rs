use clap::Parser;

use migrate_version::config::RegistrySettings;
use migrate_version::logging;
use migrate_version::version::resolver::{MigrateOptions, get_latest_version};

#[derive(Parser)]
#[command(name = "migrate-version")]
#[command(version, about = "Resolve the version a migration should target")]
struct Cli {
    /// Tag to migrate to; defaults to the "latest" dist-tag
    #[arg(long)]
    to: Option<String>,

    /// Registry base URL, overriding $MIGRATE_VERSION_REGISTRY
    #[arg(long)]
    registry: Option<String>,

    /// Package to look up
    #[arg(long)]
    package: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_json)?;

    let settings = RegistrySettings::from_env().with_overrides(cli.registry, cli.package);
    let options = MigrateOptions { to: cli.to };

    let version = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(get_latest_version(&settings, &options))?;

    println!("{version}");
    Ok(())
}
