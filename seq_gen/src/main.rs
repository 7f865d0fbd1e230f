use clap::{Parser, Subcommand};
use seq_gen::analysis::AnalysisFormat;
use seq_gen::codegen::rust::RustCodeGeneratorOptions;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cmds;

#[derive(Parser)]
#[command(name = "seq-gen")]
#[command(about = "Sequence builder generator for syntax node catalogs", long_about = None)]
struct Cli {
    /* Enable verbose output */
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /* Generate builder code from kind catalogs */
    Codegen {
        /* Input YAML files containing kind catalogs */
        #[arg(short = 'f', long = "files", value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /* Include directories for imported catalog files */
        #[arg(short = 'i', long = "include-dir", value_name = "DIR")]
        include_dirs: Vec<PathBuf>,

        /* Output directory for generated code */
        #[arg(
            short = 'o',
            long = "output",
            value_name = "DIR",
            default_value = seq_gen::codegen::OUTPUT_DIR
        )]
        output_dir: PathBuf,

        /* Name of the generated source file */
        #[arg(long = "file-name", value_name = "NAME", default_value = seq_gen::codegen::OUTPUT_FILE)]
        file_name: String,

        /* Path the generated code uses to reach the builder runtime */
        #[arg(long = "runtime-crate", value_name = "PATH", default_value = seq_gen::codegen::RUNTIME_CRATE)]
        runtime_crate: String,

        /* Skip the `from_builder` constructor on each sequence type */
        #[arg(long = "no-bindings")]
        no_bindings: bool,
    },

    /* Analyze kind catalogs and show the resolved builder surface */
    Analyze {
        /* Input YAML files containing kind catalogs */
        #[arg(short = 'f', long = "files", value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /* Include directories for imported catalog files */
        #[arg(short = 'i', long = "include-dir", value_name = "DIR")]
        include_dirs: Vec<PathBuf>,

        /* Format of the resolved kind report */
        #[arg(long = "format", value_enum, default_value = "text")]
        format: AnalysisFormat,

        /* Print the generated builder source for a specific kind */
        #[arg(long = "print-builder", value_name = "KIND")]
        print_builder: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Codegen {
            files,
            include_dirs,
            output_dir,
            file_name,
            runtime_crate,
            no_bindings,
        } => {
            let options = RustCodeGeneratorOptions {
                output_dir,
                file_name,
                runtime_crate,
                emit_bindings: !no_bindings,
                uses: Vec::new(),
            };
            cmds::codegen::run(files, include_dirs, options, cli.verbose)?;
        }

        Commands::Analyze {
            files,
            include_dirs,
            format,
            print_builder,
        } => {
            cmds::analyze::run(files, include_dirs, format, print_builder)?;
        }
    }

    Ok(())
}
