//! ALICE-SDF2D CLI
//!
//! Command-line interface for 2D SDF evaluation.
//!
//! Author: Moroya Sakamoto

#![allow(
    clippy::uninlined_format_args,
    clippy::needless_pass_by_value,
    clippy::cast_precision_loss
)]

#[cfg(feature = "cli")]
use alice_sdf2d::io::get_info;
#[cfg(feature = "cli")]
use alice_sdf2d::prelude::*;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "alice-sdf2d")]
#[command(author = "Moroya Sakamoto")]
#[command(version = alice_sdf2d::VERSION)]
#[command(about = "ALICE-SDF2D: closed-form 2D signed distance primitives", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// List primitives and their parameter counts
    List,

    /// Evaluate a primitive given by name and flat parameters
    Prim {
        /// Primitive name (e.g. circle, rounded_box, star5)
        kind: String,
        /// Comma-separated parameters
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
        params: Vec<f32>,
        /// Query point X
        #[arg(short, long, default_value = "0.0", allow_hyphen_values = true)]
        x: f32,
        /// Query point Y
        #[arg(short, long, default_value = "0.0", allow_hyphen_values = true)]
        y: f32,
    },

    /// Evaluate a shape file at a point
    Eval {
        /// Input file (.sdf2d.json)
        file: PathBuf,
        /// Query point X
        #[arg(short, long, default_value = "0.0", allow_hyphen_values = true)]
        x: f32,
        /// Query point Y
        #[arg(short, long, default_value = "0.0", allow_hyphen_values = true)]
        y: f32,
    },

    /// Sample a shape file on a grid and write CSV
    Grid {
        /// Input file (.sdf2d.json)
        file: PathBuf,
        /// Output CSV file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Samples along X
        #[arg(long, default_value = "64")]
        width: usize,
        /// Samples along Y
        #[arg(long, default_value = "64")]
        height: usize,
        /// Grid half-size (square from -bounds to +bounds)
        #[arg(short, long, default_value = "1.0")]
        bounds: f32,
    },

    /// Display file information
    Info {
        /// Input file (.sdf2d.json)
        file: PathBuf,
    },

    /// Create a demo shape file
    Demo {
        /// Primitive to write
        #[arg(short, long, default_value = "star5")]
        kind: String,
        /// Output file
        #[arg(short, long, default_value = "demo.sdf2d.json")]
        output: PathBuf,
    },

    /// Benchmark evaluation
    Bench {
        /// Input file (or every primitive on a 400x240 canvas)
        file: Option<PathBuf>,
        /// Number of points to evaluate
        #[arg(short, long, default_value = "1000000")]
        points: usize,
    },
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => cmd_list(),
        Commands::Prim { kind, params, x, y } => cmd_prim(kind, params, Vec2::new(x, y)),
        Commands::Eval { file, x, y } => cmd_eval(file, Vec2::new(x, y)),
        Commands::Grid {
            file,
            output,
            width,
            height,
            bounds,
        } => cmd_grid(file, output, width, height, bounds),
        Commands::Info { file } => cmd_info(file),
        Commands::Demo { kind, output } => cmd_demo(kind, output),
        Commands::Bench { file, points } => cmd_bench(file, points),
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI not enabled. Build with --features cli");
    std::process::exit(1);
}

#[cfg(feature = "cli")]
fn fail(context: &str, e: impl std::fmt::Display) -> ! {
    eprintln!("{}: {}", context, e);
    std::process::exit(1);
}

#[cfg(feature = "cli")]
fn load_shape(path: &PathBuf) -> Shape2d {
    match load(path) {
        Ok(doc) => doc.shape,
        Err(e) => fail("Load error", e),
    }
}

#[cfg(feature = "cli")]
fn cmd_list() {
    println!("{:<22} {}", "PRIMITIVE", "PARAMS");
    for prim in PrimitiveType::ALL {
        let count = match prim.param_count() {
            Some(n) => n.to_string(),
            None => "2n (x,y pairs, n >= 3)".to_string(),
        };
        println!("{:<22} {}", prim.name(), count);
    }
}

#[cfg(feature = "cli")]
fn cmd_prim(kind: String, params: Vec<f32>, point: Vec2) {
    let prim: PrimitiveType = match kind.parse() {
        Ok(p) => p,
        Err(e) => fail("Error", e),
    };
    if let Err(e) = Shape2d::from_params(prim, &params) {
        fail("Invalid parameters", e);
    }
    match eval_primitive(prim, point, &params) {
        Some(d) => println!("{}", d),
        None => fail("Invalid parameters", format!("too few parameters for {}", prim)),
    }
}

#[cfg(feature = "cli")]
fn cmd_eval(file: PathBuf, point: Vec2) {
    let shape = load_shape(&file);
    println!("{}", eval_2d(&shape, point));
}

#[cfg(feature = "cli")]
fn cmd_grid(file: PathBuf, output: Option<PathBuf>, width: usize, height: usize, bounds: f32) {
    use std::io::{BufWriter, Write};

    let shape = load_shape(&file);
    let grid = GridConfig {
        min: Vec2::splat(-bounds),
        max: Vec2::splat(bounds),
        width,
        height,
    };
    let values = eval_grid(&shape, &grid);

    let sink: Box<dyn Write> = match &output {
        Some(path) => match std::fs::File::create(path) {
            Ok(f) => Box::new(f),
            Err(e) => fail("Write error", e),
        },
        None => Box::new(std::io::stdout().lock()),
    };
    let mut writer = BufWriter::new(sink);

    match (write_csv(&mut writer, &values, width), output) {
        (Err(e), _) => fail("Write error", e),
        (Ok(()), Some(path)) => eprintln!("Wrote {}x{} grid to {}", width, height, path.display()),
        (Ok(()), None) => {}
    }
}

#[cfg(feature = "cli")]
fn write_csv(writer: &mut impl std::io::Write, values: &[f32], width: usize) -> std::io::Result<()> {
    if width > 0 {
        for row in values.chunks(width) {
            let line: Vec<String> = row.iter().map(|d| d.to_string()).collect();
            writeln!(writer, "{}", line.join(","))?;
        }
    }
    writer.flush()
}

#[cfg(feature = "cli")]
fn cmd_info(path: PathBuf) {
    match get_info(&path) {
        Ok(info) => println!("{}", info),
        Err(e) => fail("Error", e),
    }
}

#[cfg(feature = "cli")]
fn cmd_demo(kind: String, output: PathBuf) {
    let prim: PrimitiveType = match kind.parse() {
        Ok(p) => p,
        Err(e) => fail("Error", e),
    };
    let shape = Shape2d::example(prim);
    let metadata = ShapeMetadata {
        name: Some(format!("demo {}", prim)),
        description: Some("Sized for a 400x240 canvas centered at the origin".to_string()),
        bounds: Some((Vec2::new(-200.0, -120.0), Vec2::new(200.0, 120.0))),
        ..Default::default()
    };
    let doc = ShapeDocument::with_metadata(shape, metadata);

    match save(&doc, &output) {
        Ok(()) => println!("Created demo {} at {}", prim, output.display()),
        Err(e) => fail("Save error", e),
    }
}

#[cfg(feature = "cli")]
fn cmd_bench(file: Option<PathBuf>, points: usize) {
    if let Some(path) = file {
        bench_file(&load_shape(&path), points);
    } else {
        bench_canvas();
    }
}

#[cfg(feature = "cli")]
fn bench_file(shape: &Shape2d, points: usize) {
    println!("=== Batch Benchmark ===");
    println!("Primitive: {}", shape.primitive_type());
    println!("Points: {}", points);
    println!("Threads: {}", rayon::current_num_threads());

    let test_points: Vec<Vec2> = (0..points)
        .map(|i| {
            let t = i as f32 / points as f32;
            Vec2::new((t * 123.456).sin() * 2.0, (t * 234.567).sin() * 2.0)
        })
        .collect();

    let start = std::time::Instant::now();
    let _results = eval_batch(shape, &test_points);
    report("Sequential", start.elapsed(), points);

    let start = std::time::Instant::now();
    let _results = eval_batch_parallel(shape, &test_points);
    report("Parallel", start.elapsed(), points);
}

/// Every primitive over a 400x240 canvas, one sample per pixel
#[cfg(feature = "cli")]
fn bench_canvas() {
    let grid = GridConfig::canvas(400, 240);

    println!("=== Canvas Benchmark (400x240) ===");
    println!("Threads: {}", rayon::current_num_threads());
    println!("{:<22} {:>10} {:>14} {:>10}", "PRIMITIVE", "TIME", "THROUGHPUT", "PER PT");

    for prim in PrimitiveType::ALL {
        let shape = Shape2d::example(prim);
        let start = std::time::Instant::now();
        let _values = eval_grid(&shape, &grid);
        report(prim.name(), start.elapsed(), grid.len());
    }
}

#[cfg(feature = "cli")]
fn report(mode: &str, elapsed: std::time::Duration, points: usize) {
    let seconds = elapsed.as_secs_f64();
    let throughput = points as f64 / seconds / 1_000_000.0;
    let ns_per_point = seconds * 1e9 / points.max(1) as f64;
    println!(
        "{:<22} {:>8.3}ms {:>10.2} M/s {:>8.2} ns",
        mode,
        seconds * 1000.0,
        throughput,
        ns_per_point
    );
}
