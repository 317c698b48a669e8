//! CLI frontend for VScreator, a content-mod workbench for Vintage Story.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "vsc",
    about = "VScreator: author Vintage Story content mods from the command line",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding the mods (default: `mods` next to the executable)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new content mod with its modinfo.json
    Init {
        /// Mod id, also used as the directory name
        mod_id: String,

        /// Display name
        #[arg(short, long)]
        name: String,

        /// Author name
        #[arg(short, long)]
        author: String,

        /// Short description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Version in x.y.z form (default: 1.0.0)
        #[arg(long, default_value = "")]
        mod_version: String,
    },

    /// List the mods under the mods root
    Mods,

    /// Set the version in a mod's modinfo.json
    Version {
        /// Mod id
        mod_id: String,

        /// New version, x.y.z
        #[arg(value_name = "VERSION")]
        new_version: String,
    },

    /// Create or edit an item type
    Item(commands::item::ItemArgs),

    /// Create or edit a block type
    Block(commands::block::BlockArgs),

    /// Create or edit a crop
    Crop(commands::crop::CropArgs),

    /// Create or edit a grid recipe
    Recipe(commands::recipe::RecipeArgs),

    /// Create or edit a world-generation patch
    Worldgen(commands::worldgen::WorldGenArgs),

    /// List the assets of one kind
    List {
        /// Mod id
        mod_id: String,

        /// Asset kind (item, block, crop, recipe, worldgen, item-texture, crop-shape, ...)
        kind: String,
    },

    /// Show a stored asset
    Show {
        /// Mod id
        mod_id: String,

        /// Asset kind (item, block, crop, recipe, worldgen)
        kind: String,

        /// Code, id, or file stem of the asset
        code: String,
    },

    /// Copy a texture (.png) or shape (.json) into a mod
    Import(ImportArgs),

    /// Print a mod's language table
    Lang {
        /// Mod id
        mod_id: String,
    },
}

#[derive(Args)]
struct ImportArgs {
    /// Mod id
    mod_id: String,

    /// What to import: texture or shape
    what: String,

    /// Resource category: item, block, or crop
    category: String,

    /// File to copy
    file: PathBuf,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let root = cli.root.as_deref();

    let result = match cli.command {
        Commands::Init {
            mod_id,
            name,
            author,
            description,
            mod_version,
        } => commands::init::run(root, &mod_id, &name, &author, &description, &mod_version),
        Commands::Mods => commands::mods::run(root),
        Commands::Version {
            mod_id,
            new_version,
        } => commands::version::run(root, &mod_id, &new_version),
        Commands::Item(args) => commands::item::run(root, args),
        Commands::Block(args) => commands::block::run(root, args),
        Commands::Crop(args) => commands::crop::run(root, args),
        Commands::Recipe(args) => commands::recipe::run(root, args),
        Commands::Worldgen(args) => commands::worldgen::run(root, args),
        Commands::List { mod_id, kind } => commands::list::run(root, &mod_id, &kind),
        Commands::Show { mod_id, kind, code } => commands::show::run(root, &mod_id, &kind, &code),
        Commands::Import(args) => {
            commands::import::run(root, &args.mod_id, &args.what, &args.category, &args.file)
        }
        Commands::Lang { mod_id } => commands::lang::run(root, &mod_id),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
