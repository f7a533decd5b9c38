mod cli;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use patchgroup::association::PatchGroupAssociation;
use patchgroup::output;
use patchgroup::ssm::{PatchGroupManager, SsmPatchClient};

use cli::{Cli, Command, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let manager = PatchGroupManager::new(SsmPatchClient::from_env().await);

    match cli.command {
        Command::Associate(args) => {
            let association = manager
                .associate(&args.baseline_id, &args.patch_group)
                .await?;
            println!("{}", association.composite_id());
        }
        Command::Status(args) => match manager.reconcile(&args.id).await? {
            Some(association) => {
                println!("{}", output::render_table(std::slice::from_ref(&association)));
            }
            None => {
                println!("association {} no longer exists", args.id);
            }
        },
        Command::Disassociate(args) => {
            let association = PatchGroupAssociation::new(args.baseline_id, args.patch_group);
            manager.disassociate(&association).await?;
            println!("deregistered {}", association.composite_id());
        }
        Command::List(args) => {
            let associations = manager.list().await?;
            tracing::info!(count = associations.len(), "listing complete");
            match args.format {
                OutputFormat::Table => println!("{}", output::render_table(&associations)),
                OutputFormat::Json => println!("{}", output::render_json(&associations)?),
            }
        }
    }

    Ok(())
}
