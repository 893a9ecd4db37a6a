use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use prospector_core::{Config, Node, Prospector, SynBioHubClient};

#[derive(Parser)]
#[command(name = "prospector")]
#[command(about = "Explore SBOL designs stored in SynBioHub", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Query the staging server, spoofing the production graph
    #[arg(long, global = true)]
    staging: bool,

    /// SynBioHub user to authenticate as
    #[arg(short, long, global = true)]
    user: Option<String>,

    /// Path to a config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find strains contained under a module definition
    Strains {
        /// URI of the module definition to search under
        uri: String,
    },
    /// Find reagents contained under a definition
    Reagents {
        /// URI of the definition to search under
        uri: String,
    },
    /// Find root module definitions above a node
    Roots {
        /// URI of the starting node
        uri: String,
    },
    /// List the members of a collection
    Members {
        /// URI of the collection
        collection: String,
        /// Also list the strains contained in each member
        #[arg(long)]
        strains: bool,
    },
    /// Find experiment implementations of a construct
    Experiments {
        /// URI of the genetic construct
        construct: String,
        /// Only experiments grown in this media definition
        #[arg(long)]
        media: Option<String>,
        /// Emit the result table as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show all predicate/object pairs for a subject
    Info {
        /// URI of the subject
        uri: String,
    },
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging(cli.debug);

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };
    if cli.staging {
        config.synbiohub.staging = true;
    }
    if let Some(user) = cli.user.clone() {
        config.synbiohub.user = user;
    }

    let password = Config::password()?;
    let mut client = SynBioHubClient::new(config.server());
    if config.synbiohub.staging {
        client = client.with_spoofed_url(&config.synbiohub.server);
    }
    info!("Authenticating to {}", client.server());
    client.login(&config.synbiohub.user, &password).await?;
    info!("Authentication complete");

    let mut prospector = Prospector::with_cache_capacity(client, config.traversal.cache_capacity);

    match cli.command {
        Commands::Strains { uri } => {
            let strains = prospector.find_contained_strains(&Node::new(uri)).await?;
            println!("Found {} strains", strains.len());
            for strain in strains {
                println!("\t{}", strain);
            }
        }
        Commands::Reagents { uri } => {
            let reagents = prospector.find_contained_reagents(&Node::new(uri)).await?;
            println!("Found {} reagents", reagents.len());
            for reagent in reagents {
                println!("\t{}", reagent);
            }
        }
        Commands::Roots { uri } => {
            let roots = prospector.root_module_definitions(&Node::new(uri)).await?;
            println!("Found {} root module definitions", roots.len());
            for root in roots {
                println!("\t{}", root);
            }
        }
        Commands::Members {
            collection,
            strains,
        } => {
            let members = prospector
                .collection_members(&Node::new(collection))
                .await?;
            println!("Found {} members", members.len());
            for member in &members {
                println!("{}", member);
                if strains {
                    for strain in prospector.find_contained_strains(member).await? {
                        println!("\t{}", strain);
                    }
                }
            }
        }
        Commands::Experiments {
            construct,
            media,
            json,
        } => {
            let media = media.map(Node::new);
            let table = prospector
                .find_construct_experiments(&Node::new(construct), media.as_ref())
                .await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&table)?);
            } else {
                println!("Found {} experiments", table.len());
                for row in table.iter() {
                    println!("{}\t{}", row.uri, row.title);
                }
            }
        }
        Commands::Info { uri } => {
            let subject = Node::new(uri);
            for (predicate, object) in prospector.subject_info(&subject).await? {
                println!("{}    {}    {}", subject, predicate, object);
            }
        }
    }

    Ok(())
}
