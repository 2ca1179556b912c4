use color_print::ceprintln;
use opdef::{Definition, EmitConfig, Error, OpcodeType, ParseMode};
use std::error::Error as _;
use std::io::Write;
use std::process::ExitCode;

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
    /// Instruction definition file
    #[clap(default_value = "ins.txt")]
    input: String,

    /// Output file [default: standard output]
    #[clap(short, long)]
    output: Option<String>,

    /// Emit config file (YAML)
    #[clap(short, long)]
    config: Option<String>,

    /// Type of the opcode constants: u8 or u16
    #[clap(short = 't', long)]
    opcode_type: Option<OpcodeType>,

    /// Keep the first two fields of an instruction line and ignore the rest
    #[clap(long)]
    lenient: bool,

    /// Dump parsed lines
    #[clap(short, long)]
    dump: bool,

    /// Print progress
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    use clap::Parser;

    let args: Args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ceprintln!("<red,bold>error</>: {}", err);
            if let Some(source) = err.source() {
                ceprintln!("  <blue>caused by</>: {}", source);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    macro_rules! progress {
        ($($arg:tt)*) => {
            if args.verbose {
                eprintln!($($arg)*);
            }
        };
    }

    progress!("1. Load Config");
    let mut cfg = match &args.config {
        Some(path) => {
            progress!("  < {}", path);
            EmitConfig::load(path)?
        }
        None => EmitConfig::default(),
    };
    if let Some(opcode_type) = args.opcode_type {
        cfg.opcode_type = opcode_type;
    }

    progress!("2. Read File and Parse Lines");
    progress!("  < {}", args.input);
    let source = opdef::read_source(&args.input)?;
    let mode = if args.lenient {
        ParseMode::Lenient
    } else {
        ParseMode::Strict
    };
    let def = match Definition::parse(&source, mode) {
        Ok(def) => def,
        Err(errors) => {
            let lines: Vec<&str> = source.lines().collect();
            for (idx, err) in &errors {
                err.print_diag(&args.input, &lines, *idx);
            }
            return Err(Error::Aborted(args.input.clone(), errors.len()));
        }
    };
    progress!("  {} instructions, longest identifier {}", def.count(), def.maxlen());

    if args.dump {
        eprint!("{}", opdef::dump(&args.input, &def));
    }

    progress!("3. Generate Code");
    let code = opdef::emit(&def, &cfg)?;
    match &args.output {
        Some(path) => {
            progress!("  > {}", path);
            std::fs::write(path, code).map_err(|e| Error::FileWrite(path.clone(), e))?;
        }
        None => {
            progress!("  > <stdout>");
            std::io::stdout()
                .write_all(code.as_bytes())
                .map_err(|e| Error::FileWrite("<stdout>".to_string(), e))?;
        }
    }

    Ok(())
}
