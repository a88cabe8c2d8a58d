//! Braille relief CLI — page generation, single cells, alphabet export.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "braille")]
#[command(version, about = "Braille tactile relief STL generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one STL plate per page of Braille text.
    Text {
        /// The text to typeset.
        #[arg(short, long)]
        input_text: String,

        /// Directory the page files are written to.
        #[arg(short, long, default_value = ".")]
        output_dir: String,

        /// Optional filename prefix (<prefix>_PageN.stl).
        #[arg(short, long, default_value = "")]
        name_prefix: String,

        /// Write ASCII STL instead of binary.
        #[arg(short = 't', long)]
        ascii: bool,

        /// Emit a physical base plate under the knobs.
        #[arg(short = 'b', long)]
        base_plate: bool,

        /// Path to a JSON alphabet definition; defaults to the embedded
        /// German table.
        #[arg(short, long)]
        alphabet: Option<String>,
    },

    /// Generate a single Braille cell plate from a dot string.
    Cell {
        /// Raised dot numbers, e.g. "123456".
        #[arg(short, long)]
        dots: String,

        /// Output file path.
        #[arg(short, long, default_value = "cell.stl")]
        output: String,
    },

    /// Export the embedded German alphabet as a JSON definition.
    Alphabet {
        /// Output file path.
        #[arg(short, long, default_value = "alphabet.json")]
        output: String,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Text {
            input_text,
            output_dir,
            name_prefix,
            ascii,
            base_plate,
            alphabet,
        } => commands::text(
            &input_text,
            &output_dir,
            &name_prefix,
            ascii,
            base_plate,
            alphabet.as_deref(),
        ),
        Commands::Cell { dots, output } => commands::cell(&dots, &output),
        Commands::Alphabet { output } => commands::alphabet(&output),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
