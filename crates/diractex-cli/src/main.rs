use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use diractex_build::{absolute_executable, render_suite_to_file, TexTarget, Typesetter};
use diractex_core::{suites, DiracRunner, LaunchMode, Suite};
use log::debug;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const USAGE: &str = "\
Usage: diractex tests /path/to/dirac/executable [output]
       diractex fierz /path/to/dirac/executable
       diractex run /path/to/dirac/executable cases.json [output]
";

const TESTS_USAGE: &str = "Usage: diractex tests /path/to/dirac/executable [output]\n";
const FIERZ_USAGE: &str = "Usage: diractex fierz /path/to/dirac/executable\n";
const RUN_USAGE: &str = "Usage: diractex run /path/to/dirac/executable cases.json [output]\n";

#[derive(Parser)]
#[command(name = "diractex")]
#[command(about = "Render dirac calculator results as LaTeX documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the built-in regression cases
    Tests {
        /// Path to the dirac executable
        #[arg(value_name = "DIRAC")]
        dirac: Option<PathBuf>,
        /// Output base name, `.tex` is appended if missing
        #[arg(value_name = "OUTPUT", default_value = "tests")]
        output: String,
        #[command(flatten)]
        options: RunOptions,
    },
    /// Render the sixth-order Fierz table into fierz6.tex
    Fierz {
        /// Path to the dirac executable
        #[arg(value_name = "DIRAC")]
        dirac: Option<PathBuf>,
        #[command(flatten)]
        options: RunOptions,
    },
    /// Render cases read from a JSON array of invocations
    Run {
        /// Path to the dirac executable
        #[arg(value_name = "DIRAC")]
        dirac: Option<PathBuf>,
        /// JSON file with the cases
        #[arg(value_name = "CASES")]
        cases: Option<PathBuf>,
        /// Output base name (defaults to the cases file stem)
        #[arg(value_name = "OUTPUT")]
        output: Option<String>,
        #[command(flatten)]
        options: RunOptions,
    },
}

#[derive(Args, Debug)]
struct RunOptions {
    /// TeX engine used to produce the PDF
    #[arg(long, default_value = "pdflatex")]
    engine: String,
    /// Only write the .tex file
    #[arg(long)]
    no_typeset: bool,
    /// Launch dirac directly instead of through the shell
    #[arg(long)]
    direct: bool,
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        return Ok(usage(USAGE));
    };

    match command {
        Commands::Tests {
            dirac,
            output,
            options,
        } => {
            let Some(dirac) = dirac else {
                return Ok(usage(TESTS_USAGE));
            };
            generate(
                &suites::test_suite(),
                &dirac,
                &TexTarget::from_name(&output),
                &options,
            )
        }
        Commands::Fierz { dirac, options } => {
            let Some(dirac) = dirac else {
                return Ok(usage(FIERZ_USAGE));
            };
            let suite = suites::fierz_suite();
            let target = TexTarget::from_name(&suite.name);
            generate(&suite, &dirac, &target, &options)
        }
        Commands::Run {
            dirac,
            cases,
            output,
            options,
        } => {
            let (Some(dirac), Some(cases)) = (dirac, cases) else {
                return Ok(usage(RUN_USAGE));
            };
            let suite = Suite::load(&cases)
                .with_context(|| format!("Failed to load cases from {}", cases.display()))?;
            let name = output.unwrap_or_else(|| suite.name.clone());
            generate(&suite, &dirac, &TexTarget::from_name(&name), &options)
        }
    }
}

/// Missing required arguments are reported on stdout with exit status 1.
fn usage(text: &str) -> ExitCode {
    print!("{text}");
    ExitCode::from(1)
}

fn generate(suite: &Suite, dirac: &Path, target: &TexTarget, options: &RunOptions) -> Result<ExitCode> {
    debug!("{:?}", options);

    let launch_mode = if options.direct {
        LaunchMode::Direct
    } else {
        LaunchMode::Shell
    };
    let runner = DiracRunner::new(absolute_executable(dirac)?).with_launch_mode(launch_mode);
    debug!(
        "Using dirac at {} ({:?} launch)",
        runner.executable().display(),
        runner.launch_mode()
    );

    render_suite_to_file(suite, &runner, &target.tex_path())?;

    if !options.no_typeset {
        Typesetter::new(&options.engine).typeset(target)?;
    }
    Ok(ExitCode::SUCCESS)
}
