use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use museu_core::exhibition::Category;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Manage museum exhibitions and send visitor requests",
    long_about = "Operator tool for the museum site: edit the exhibition collection stored in \
                  the data directory, preview the public pages and submit visitor forms."
)]
pub struct Cli {
    #[arg(
        long,
        value_name = "DIR",
        help = "Directory holding the exhibition data (overrides MUSEU_DATA_DIR)"
    )]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage the exhibition collection
    #[command(subcommand)]
    Exhibitions(ExhibitionCommand),

    /// Show a public exhibition page
    Browse {
        #[arg(value_name = "PAGE", help = "permanent, temporary, archive or previous")]
        page: String,

        #[arg(long, default_value_t = 0, value_name = "N", help = "Tab to select")]
        select: usize,
    },

    /// Send a volunteer application
    Volunteer {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long, value_name = "HTML", help = "What you would like to help with")]
        interests: String,
    },

    /// Propose an event
    Event {
        #[arg(long)]
        title: String,
        #[arg(long)]
        date: String,
        #[arg(long)]
        organizer: String,
        #[arg(long)]
        email: String,
        #[arg(long, value_name = "HTML")]
        description: String,
    },

    /// Request a guided group tour
    Tour {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: String,
        #[arg(long, value_name = "N")]
        people: u32,
        #[arg(long, default_value = "")]
        message: String,
    },

    /// Offer a donation of money or of an item
    Donate {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, value_name = "EUR", conflicts_with = "item")]
        amount: Option<f64>,
        #[arg(long, value_name = "DESCRIPTION")]
        item: Option<String>,
        #[arg(long, default_value = "")]
        message: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ExhibitionCommand {
    /// List every exhibition with its index
    List,

    /// Add an exhibition
    Add(ExhibitionFields),

    /// Replace fields of the exhibition at INDEX
    Edit {
        #[arg(value_name = "INDEX")]
        index: usize,

        #[command(flatten)]
        fields: EditFields,
    },

    /// Delete the exhibition at INDEX
    Delete {
        #[arg(value_name = "INDEX")]
        index: usize,
    },
}

#[derive(Args, Debug)]
pub struct ExhibitionFields {
    #[arg(long)]
    pub title: String,

    #[arg(long, value_name = "HTML")]
    pub description: String,

    #[arg(long, default_value_t = Category::Permanent)]
    pub category: Category,

    #[arg(long = "image", value_name = "URL", help = "Image URL (repeatable)")]
    pub images: Vec<String>,
}

#[derive(Args, Debug)]
pub struct EditFields {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long, value_name = "HTML")]
    pub description: Option<String>,

    #[arg(long)]
    pub category: Option<Category>,

    #[arg(
        long = "image",
        value_name = "URL",
        help = "Replace the image list (repeatable)"
    )]
    pub images: Vec<String>,
}
