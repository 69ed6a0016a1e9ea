use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ladle")]
#[command(about = "A personal recipe catalog on the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog directory (holds the recipes file and config.json)
    #[arg(short, long, global = true, default_value = "data")]
    pub dir: PathBuf,

    /// Full path to the catalog file, overriding --dir and the config
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new recipe
    #[command(alias = "a")]
    Add {
        /// Title of the recipe
        title: String,

        /// Ingredients, one per flag (e.g. -i Flour -i Eggs)
        #[arg(short, long = "ingredient", required = true)]
        ingredients: Vec<String>,

        /// Free-form instructions
        #[arg(short = 's', long)]
        instructions: String,
    },

    /// List all recipes
    #[command(alias = "ls")]
    List,

    /// Print one or more recipes in full
    #[command(alias = "v")]
    View {
        /// Titles of the recipes
        #[arg(required = true, num_args = 1..)]
        titles: Vec<String>,
    },

    /// Search titles and ingredients
    Search {
        /// Case-insensitive term to look for
        term: String,
    },

    /// Edit a recipe; only the fields you pass are changed
    #[command(alias = "e")]
    Edit {
        /// Title of the recipe to edit
        title: String,

        /// New title
        #[arg(short = 't', long = "title")]
        new_title: Option<String>,

        /// Replacement ingredient list, one per flag
        #[arg(short, long = "ingredient")]
        ingredients: Option<Vec<String>>,

        /// New instructions
        #[arg(short = 's', long)]
        instructions: Option<String>,
    },

    /// Delete one or more recipes
    #[command(alias = "rm")]
    Delete {
        /// Titles of the recipes
        #[arg(required = true, num_args = 1..)]
        titles: Vec<String>,
    },

    /// Print the path of the catalog file
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., recipes-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
