use clap::Parser;
use color_print::cprintln;
use std::io::Write;
use std::path::PathBuf;

use hackasm::{dump, Assembler, Dialect, Error, Options, Source};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    #[clap(default_value = "main.asm")]
    input: String,

    /// Output file [default: input with `.hack` extension]
    #[clap(short, long)]
    output: Option<String>,

    /// Dump assembly listing
    #[clap(short, long)]
    dump: bool,

    /// Write the symbol map as YAML
    #[clap(short, long)]
    symbols: Option<String>,

    /// Use the legacy comp/jump tables (JMP encodes as JLE, A+1/M+1 as D+1)
    #[clap(long)]
    legacy: bool,

    /// Predefine THAT, SCREEN and KBD
    #[clap(long)]
    extended_symbols: bool,

    /// More log output (-v, -vv)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env()
        .init();

    if let Err(err) = run(&args) {
        cprintln!("<red,bold>error</>: {}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let options = Options {
        dialect: if args.legacy {
            Dialect::Legacy
        } else {
            Dialect::Standard
        },
        extended_symbols: args.extended_symbols,
    };

    log::info!("1. Read File and Parse Lines");
    log::info!("  < {}", args.input);
    let source = Source::open(&args.input)?;

    log::info!("2. Collect Labels & Resolve Symbols ({} tables)", options.dialect);
    let assembly = Assembler::new(options).run(source.code());

    if args.dump {
        for line in dump::listing(&assembly, &source) {
            println!("{}", line);
        }
    }

    if !assembly.is_ok() {
        for err in &assembly.errors {
            err.print_diag(&source.path, source.raw(err.line));
        }
        return Err(Error::Aborted(assembly.errors.len()));
    }

    let output = match &args.output {
        Some(output) => output.clone(),
        None => PathBuf::from(&args.input)
            .with_extension("hack")
            .to_string_lossy()
            .into_owned(),
    };
    log::info!("3. Generate Binary");
    log::info!("  > {}", output);
    let mut file =
        std::fs::File::create(&output).map_err(|e| Error::FileCreate(output.clone(), e))?;
    for bin in assembly.binary() {
        writeln!(file, "{}", bin).map_err(|e| Error::FileWrite(output.clone(), e))?;
    }

    if let Some(path) = &args.symbols {
        log::info!("  > {}", path);
        let yaml = serde_yaml::to_string(&assembly.symbols.symbol_map()).map_err(Error::SymbolMap)?;
        std::fs::write(path, yaml).map_err(|e| Error::FileWrite(path.clone(), e))?;
    }

    Ok(())
}
