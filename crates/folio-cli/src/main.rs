mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "View PDF pages and search them for exact words"
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the number of pages in a PDF
    Pages {
        /// Path to PDF file
        pdf_file: PathBuf,
    },
    /// Print the extracted text of one page
    Text {
        /// Path to PDF file
        pdf_file: PathBuf,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Keep the physical layout of the page (pdftotext -layout)
        #[arg(long)]
        layout: bool,
    },
    /// Search one page for a whole word, ignoring case
    Search {
        /// Path to PDF file
        pdf_file: PathBuf,

        /// Word or phrase to search for (matched literally)
        term: String,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Render one page to a PNG image
    Render {
        /// Path to PDF file
        pdf_file: PathBuf,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Resolution in dots per inch
        #[arg(
            long,
            env = "FOLIO_DPI",
            default_value_t = folio_core::render::pdftoppm::DEFAULT_DPI
        )]
        dpi: u32,

        /// Where to write the PNG
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: PathBuf,
    },
    /// Load several PDFs as one upload batch, filter them and search each
    Library {
        /// Paths to PDF files (at most 10 are taken)
        #[arg(required = true)]
        pdf_files: Vec<PathBuf>,

        /// Only keep files whose name contains this text (case-insensitive)
        #[arg(long, default_value = "")]
        name: String,

        /// Minimum file size in MB
        #[arg(long, default_value_t = 0.0)]
        min_size: f64,

        /// Maximum file size in MB
        #[arg(long, default_value_t = 100.0)]
        max_size: f64,

        /// Word to search for on the selected page of every file
        #[arg(short, long, default_value = "")]
        term: String,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Upload, list and download documents in a directory-backed store
    Store {
        /// Store directory
        #[arg(long, env = "FOLIO_STORE_DIR", default_value = ".folio-store")]
        dir: PathBuf,

        #[command(subcommand)]
        action: StoreAction,
    },
}

#[derive(Subcommand)]
enum StoreAction {
    /// Upload files, skipping names that already exist
    Upload {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// List stored documents
    List {
        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Download a stored document
    Download {
        name: String,

        /// Where to write the document (default: its name in the current directory)
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "folio_core=debug,folio=debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    // Load .env before parsing so it can supply FOLIO_* defaults.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Pages { pdf_file } => commands::page::pages(pdf_file),
        Commands::Text {
            pdf_file,
            page,
            layout,
        } => commands::page::text(pdf_file, page, layout),
        Commands::Search {
            pdf_file,
            term,
            page,
            output,
        } => commands::page::search(pdf_file, &term, page, &output),
        Commands::Render {
            pdf_file,
            page,
            dpi,
            out,
        } => commands::page::render(pdf_file, page, dpi, out),
        Commands::Library {
            pdf_files,
            name,
            min_size,
            max_size,
            term,
            page,
            output,
        } => {
            let filter = folio_core::library::LibraryFilter {
                name_query: name,
                min_size_mb: min_size,
                max_size_mb: max_size,
            };
            commands::library::run(pdf_files, &filter, &term, page, &output)
        }
        Commands::Store { dir, action } => match action {
            StoreAction::Upload { files } => commands::store::upload(&dir, files),
            StoreAction::List { output } => commands::store::list(&dir, &output),
            StoreAction::Download { name, out } => commands::store::download(&dir, &name, out),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
