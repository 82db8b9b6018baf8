use clap::{Args, Parser, Subcommand};
use seqwalk_lib::analysis::pairwise_distances;
use seqwalk_lib::constants::{
    DEFAULT_ALPHABET, DEFAULT_MAX_K, DEFAULT_MAX_WALK_LEN, DEFAULT_PREVENTED_PATTERNS, DEFAULT_SEED,
};
use seqwalk_lib::io::{read_library, write_library, write_library_to};
use seqwalk_lib::{
    check_gc, check_pattern_free, check_ssm, CompositionLimits, DesignConfiguration, LibraryDesigner,
};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "seqwalk")]
#[command(version = "0.1.0")]
#[command(about = "SeqWalk: design of k-mer unique sequence libraries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by the design commands
#[derive(Args)]
struct DesignArgs {
    /// Sequence length
    #[arg(short = 'L', long)]
    length: usize,

    /// Alphabet, in generator order
    #[arg(short, long, default_value = DEFAULT_ALPHABET)]
    alphabet: String,

    /// Treat reverse complements as the same k-mer
    #[arg(long, default_value = "false")]
    rc_free: bool,

    /// Minimum number of C/G bases per sequence (requires --gc-max)
    #[arg(long, requires = "gc_max")]
    gc_min: Option<usize>,

    /// Maximum number of C/G bases per sequence (requires --gc-min)
    #[arg(long, requires = "gc_min")]
    gc_max: Option<usize>,

    /// Prevented pattern (repeatable); defaults to homopolymer runs of 4
    #[arg(short, long = "prevent")]
    prevent: Vec<String>,

    /// Do not prevent any pattern
    #[arg(long, default_value = "false", conflicts_with = "prevent")]
    no_patterns: bool,

    /// Seed for the randomized walk
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Largest walk a generator may build, in symbols
    #[arg(long, default_value_t = DEFAULT_MAX_WALK_LEN)]
    max_walk_len: usize,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Design the largest library for a fixed k
    Size {
        #[command(flatten)]
        design: DesignArgs,

        /// K-mer uniqueness window
        #[arg(short, long)]
        k: usize,
    },

    /// Design a library of more than N sequences, raising k as needed
    Orthogonality {
        #[command(flatten)]
        design: DesignArgs,

        /// Library must contain more than this many sequences
        #[arg(short, long)]
        n: usize,

        /// Initial k (default: floor(log_q N), at least 2)
        #[arg(long)]
        k_init: Option<usize>,

        /// Largest k to try before giving up
        #[arg(long, default_value_t = DEFAULT_MAX_K)]
        max_k: usize,
    },

    /// Check a library file
    Check {
        /// Library file (plain text or FASTA/FASTQ)
        #[arg(short, long)]
        input: PathBuf,

        /// K-mer uniqueness window
        #[arg(short, long)]
        k: usize,

        /// Treat reverse complements as the same k-mer
        #[arg(long, default_value = "false")]
        rc_free: bool,

        /// Pattern that must not occur (repeatable)
        #[arg(short, long = "prevent")]
        prevent: Vec<String>,

        /// Minimum number of C/G bases per sequence
        #[arg(long, requires = "gc_max")]
        gc_min: Option<usize>,

        /// Maximum number of C/G bases per sequence
        #[arg(long, requires = "gc_min")]
        gc_max: Option<usize>,
    },

    /// Report pairwise Hamming distances of a library file
    Hamming {
        /// Library file (plain text or FASTA/FASTQ)
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing: use RUST_LOG if set, otherwise default to info
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Size { design, k } => size_command(design, k)?,
        Commands::Orthogonality { design, n, k_init, max_k } => {
            orthogonality_command(design, n, k_init, max_k)?
        }
        Commands::Check { input, k, rc_free, prevent, gc_min, gc_max } => {
            check_command(input, k, rc_free, prevent, gc_limits(gc_min, gc_max))?
        }
        Commands::Hamming { input } => hamming_command(input)?,
    }

    Ok(())
}

fn gc_limits(gc_min: Option<usize>, gc_max: Option<usize>) -> Option<CompositionLimits> {
    match (gc_min, gc_max) {
        (Some(min), Some(max)) => Some(CompositionLimits::new(min, max)),
        _ => None,
    }
}

fn build_designer(args: &DesignArgs, max_k: usize) -> anyhow::Result<LibraryDesigner> {
    let patterns: Vec<String> = if args.no_patterns {
        Vec::new()
    } else if args.prevent.is_empty() {
        DEFAULT_PREVENTED_PATTERNS.iter().map(|p| p.to_string()).collect()
    } else {
        args.prevent.clone()
    };

    let mut config = DesignConfiguration::new(&args.alphabet, args.rc_free)?
        .with_prevented_patterns(patterns.as_slice())
        .with_seed(args.seed)
        .with_max_k(max_k)
        .with_max_walk_len(args.max_walk_len);
    config.gc_limits = gc_limits(args.gc_min, args.gc_max);
    config.print();

    Ok(LibraryDesigner::new(config)?)
}

fn emit(library: &[String], output: &Option<PathBuf>) -> anyhow::Result<()> {
    match output {
        Some(path) => write_library(library, path),
        None => write_library_to(library, std::io::stdout().lock()),
    }
}

/// Design the largest library for a fixed k
fn size_command(args: DesignArgs, k: usize) -> anyhow::Result<()> {
    info!("Designing library: L={}, k={}", args.length, k);
    let designer = build_designer(&args, DEFAULT_MAX_K)?;

    let library = designer.max_size(args.length, k)?;
    info!("Number of sequences: {}", library.len());
    if library.is_empty() {
        warn!("No sequences satisfy the constraints");
    }

    emit(&library, &args.output)
}

/// Design a library of more than `n` sequences
fn orthogonality_command(
    args: DesignArgs,
    n: usize,
    k_init: Option<usize>,
    max_k: usize,
) -> anyhow::Result<()> {
    info!("Designing library of more than {} sequences: L={}", n, args.length);
    let designer = build_designer(&args, max_k)?;

    let library = designer.max_orthogonality(n, args.length, k_init)?;
    info!("Library designed with k={}", library.k);

    emit(&library.sequences, &args.output)
}

/// Check a library against uniqueness, pattern and composition constraints
fn check_command(
    input: PathBuf,
    k: usize,
    rc_free: bool,
    prevent: Vec<String>,
    limits: Option<CompositionLimits>,
) -> anyhow::Result<()> {
    let library = read_library(&input)?;
    let mut failed = false;

    println!("\n=== Check Results ===");
    println!("  Sequences: {}", library.len());

    let unique = check_ssm(&library, k, rc_free);
    println!("  k-mer uniqueness (k={}, rc_free={}): {}", k, rc_free, verdict(unique));
    failed |= !unique;

    for pattern in &prevent {
        let ok = check_pattern_free(&library, pattern);
        println!("  pattern {:?} absent: {}", pattern, verdict(ok));
        failed |= !ok;
    }

    if let Some(limits) = limits {
        let ok = check_gc(&library, limits);
        println!("  GC within [{}, {}]: {}", limits.min, limits.max, verdict(ok));
        failed |= !ok;
    }

    if failed {
        warn!("LIBRARY CHECK FAILED");
        println!("\n✗ LIBRARY CHECK FAILED!");
        std::process::exit(1);
    }
    println!("\n✓ LIBRARY CHECK PASSED!");
    Ok(())
}

fn verdict(ok: bool) -> &'static str {
    if ok { "ok" } else { "FAILED" }
}

/// Print Hamming distance statistics of a library
fn hamming_command(input: PathBuf) -> anyhow::Result<()> {
    let library = read_library(&input)?;
    info!("Computing pairwise Hamming distances for {} sequences...", library.len());

    let distances = pairwise_distances(&library)?;

    println!("\nResults:");
    println!("  Sequences: {}", library.len());
    println!("  Pairs: {}", distances.len());
    if let (Some(min), Some(max)) = (distances.iter().min(), distances.iter().max()) {
        let mean = distances.iter().sum::<usize>() as f64 / distances.len() as f64;
        println!("  Min distance: {}", min);
        println!("  Max distance: {}", max);
        println!("  Mean distance: {:.2}", mean);
    }

    Ok(())
}
