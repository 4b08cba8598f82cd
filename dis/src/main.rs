use c64dis::{disassemble, Error, Setup};

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
    /// Program file (two byte load address, then the program)
    input: String,

    /// Segment, label and constant configuration (YAML or JSON)
    #[clap(short, long)]
    segments: Option<String>,

    /// Emit the address before every line
    #[clap(short, long)]
    addresses: bool,

    /// Output file [default: stdout]
    #[clap(short, long)]
    output: Option<String>,

    /// Replacement 16x16 opcode grid
    #[clap(long)]
    opcodes: Option<String>,

    /// Replacement character table for text segments
    #[clap(long)]
    charset: Option<String>,

    /// Print a summary of every pass
    #[clap(short, long)]
    verbose: bool,
}

fn setup(args: &Args) -> Result<Setup, Error> {
    let mut setup = Setup::default();
    if let Some(path) = &args.segments {
        setup = setup.load_segments(path)?;
    }
    if let Some(path) = &args.opcodes {
        setup = setup.load_opcodes(path)?;
    }
    if let Some(path) = &args.charset {
        setup = setup.load_charset(path)?;
    }
    setup.addresses = args.addresses;
    Ok(setup)
}

fn run(args: &Args) -> Result<(), Error> {
    let setup = setup(args)?;
    let image = std::fs::read(&args.input).map_err(|e| Error::FileOpen(args.input.clone(), e))?;
    let listing = disassemble(&image, &setup)?;

    for msg in &listing.msgs {
        if args.verbose || !msg.is_note() {
            msg.print();
        }
    }

    match &args.output {
        Some(path) => std::fs::write(path, listing.to_string())
            .map_err(|e| Error::FileWrite(path.clone(), e))?,
        None => print!("{}", listing),
    }
    Ok(())
}

fn main() {
    use clap::Parser;

    let args = Args::parse();
    if let Err(err) = run(&args) {
        err.diag(&args.input);
        std::process::exit(1);
    }
}
