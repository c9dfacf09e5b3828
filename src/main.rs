use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use wiki_home::aggregate::SystemClock;
use wiki_home::{config, output, pipeline, render};

#[derive(Parser)]
#[command(name = "wiki-home")]
#[command(version)]
#[command(about = "Generate a home page index for a markdown wiki")]
#[command(long_about = "\
Generate a home page index for a markdown wiki

Pages are the *.md files in the wiki root. wiki.xml describes them:
category, title, link, tags, date and the page each entry belongs to.
The two are cross-referenced, grouped, and rendered through a template.

Layout:

  ./                          # working directory
  ├── home-page.template      # Jinja template for the home page
  ├── Home.md                 # generated output (replaced on every run)
  └── wiki/                   # --wiki-root
      ├── config.toml         # optional overrides
      ├── wiki.xml            # page metadata
      ├── About.md            # page \"About\"
      └── Rust-Notes.md       # page \"Rust-Notes\"

Run 'wiki-home gen-template' for a starter template and
'wiki-home gen-config' for a documented config.toml.")]
struct Cli {
    /// The wiki's root directory
    #[arg(long, default_value = "./", global = true)]
    wiki_root: PathBuf,

    /// Template file (overrides config.toml)
    #[arg(long, global = true)]
    template: Option<PathBuf>,

    /// Output file (overrides config.toml)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Render the home page (default)
    Build,
    /// Cross-reference pages and metadata without writing anything
    Check {
        /// Print the aggregated data as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Print a starter home page template
    GenTemplate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let overrides = pipeline::Overrides {
        template: cli.template,
        output: cli.output,
    };

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let workdir = std::env::current_dir()?;
            let plan = pipeline::plan(&cli.wiki_root, &workdir, overrides)?;
            let page = pipeline::build(&plan, &SystemClock)?;
            output::print_build_output(&page, &plan.output);
        }
        Command::Check { json } => {
            let workdir = std::env::current_dir()?;
            let plan = pipeline::plan(&cli.wiki_root, &workdir, overrides)?;
            let page = pipeline::collect(&plan, &SystemClock)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                output::print_check_output(&page);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::GenTemplate => {
            print!("{}", render::stock_template());
        }
    }

    Ok(())
}

/// Default to warnings only; each `-v` opens one level. `RUST_LOG` wins.
fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
