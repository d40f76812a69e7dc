use anyhow::{anyhow, Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hextuples::{HextuplesParser, HextuplesSerializer, LineSource, ParserOptions};
use log::info;
use oxigraph::io::{RdfFormat, RdfParser, RdfSerializer};
use oxigraph::model::{GraphName, NamedNode};
use oxigraph::store::Store;
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "hext")]
#[command(about = "Hextuples reader and converter")]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Verbose mode - sets the RUST_LOG level to info, defaults to warning level
    #[clap(long, short, action, default_value = "false", global = true)]
    verbose: bool,
    /// Debug mode - sets the RUST_LOG level to debug, defaults to warning level
    #[clap(long, action, default_value = "false", global = true)]
    debug: bool,
    /// Validate IRIs, blank node identifiers and language tags
    #[clap(long, action, default_value = "false", global = true)]
    strict: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RdfFmt {
    Nquads,
    Trig,
    Turtle,
    Ntriples,
}

impl From<RdfFmt> for RdfFormat {
    fn from(f: RdfFmt) -> Self {
        match f {
            RdfFmt::Nquads => RdfFormat::NQuads,
            RdfFmt::Trig => RdfFormat::TriG,
            RdfFmt::Turtle => RdfFormat::Turtle,
            RdfFmt::Ntriples => RdfFormat::NTriples,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load a hextuples file into an in-memory store and report what it holds.
    Load {
        /// The hextuples file to read.
        file: PathBuf,
        /// IRI of the graph receiving statements without a context.
        #[clap(long)]
        graph: Option<String>,
        /// Declared encoding; anything but utf-8 only produces a warning.
        #[clap(long)]
        encoding: Option<String>,
    },
    /// Convert a hextuples file to N-Quads.
    ToNquads {
        /// The hextuples file to read.
        file: PathBuf,
        /// Output file; defaults to stdout.
        #[clap(long, short)]
        output: Option<PathBuf>,
        /// IRI of the graph receiving statements without a context.
        #[clap(long)]
        graph: Option<String>,
    },
    /// Convert an RDF file to hextuples.
    FromRdf {
        /// The RDF file to read.
        file: PathBuf,
        /// Input format; inferred from the file extension when omitted.
        #[clap(long, value_enum)]
        format: Option<RdfFmt>,
        /// Output file; defaults to stdout.
        #[clap(long, short)]
        output: Option<PathBuf>,
    },
}

fn infer_rdf_format(path: &Path) -> Option<RdfFormat> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext.to_ascii_lowercase().as_str() {
        "nq" | "nquads" => Some(RdfFormat::NQuads),
        "trig" => Some(RdfFormat::TriG),
        "ttl" | "turtle" => Some(RdfFormat::Turtle),
        "nt" | "ntriples" => Some(RdfFormat::NTriples),
        _ => None,
    }
}

fn output_writer(output: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    Ok(match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(std::io::stdout())),
    })
}

fn build_parser(
    graph: Option<String>,
    encoding: Option<String>,
    strict: bool,
) -> Result<HextuplesParser> {
    let default_graph = match graph {
        Some(iri) => GraphName::NamedNode(NamedNode::new(iri)?),
        None => GraphName::DefaultGraph,
    };
    Ok(HextuplesParser::with_options(ParserOptions {
        encoding,
        default_graph,
        validation: (!strict).into(),
    }))
}

pub fn run() -> Result<()> {
    let cmd = Cli::parse();
    execute(cmd)
}

pub fn run_from_args<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cmd = Cli::try_parse_from(args).map_err(Error::from)?;
    execute(cmd)
}

fn execute(cmd: Cli) -> Result<()> {
    // CLI flags for verbosity take precedence. If nothing is set, we default to "warn".
    if cmd.debug {
        std::env::set_var("RUST_LOG", "debug");
    } else if cmd.verbose {
        std::env::set_var("RUST_LOG", "info");
    } else if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "warn");
    }
    let _ = env_logger::try_init();

    match cmd.command {
        Commands::Load {
            file,
            graph,
            encoding,
        } => {
            let parser = build_parser(graph, encoding, cmd.strict)?;
            let mut store = Store::new()?;
            let start = Instant::now();
            let summary = parser.parse(LineSource::from_path(&file), &mut store)?;
            info!("Loaded {} in {:?}", file.display(), start.elapsed());
            for w in &summary.warnings {
                eprintln!("warning: {}", w);
            }
            println!("Lines: {}", summary.lines);
            println!("Triples (default graph): {}", summary.triples);
            println!("Quads (named graphs): {}", summary.quads);
            println!("Named graphs: {}", store.named_graphs().count());
            println!("Distinct statements in store: {}", store.len()?);
        }
        Commands::ToNquads {
            file,
            output,
            graph,
        } => {
            let parser = build_parser(graph, None, cmd.strict)?;
            let default_graph = parser.options().default_graph.clone();
            let mut serializer = RdfSerializer::from_format(RdfFormat::NQuads)
                .for_writer(output_writer(output.as_ref())?);
            let mut n = 0usize;
            let mut statements = parser.statements(LineSource::from_path(&file))?;
            while let Some(statement) = statements.next() {
                let quad = statement?
                    .to_quad(default_graph.as_ref(), !cmd.strict)
                    .map_err(|e| e.at_line(statements.line_no()))?;
                serializer.serialize_quad(&quad)?;
                n += 1;
            }
            serializer.finish()?.flush()?;
            info!("Wrote {} quads", n);
        }
        Commands::FromRdf {
            file,
            format,
            output,
        } => {
            let rdf_format = match format {
                Some(f) => f.into(),
                None => infer_rdf_format(&file).ok_or_else(|| {
                    anyhow!(
                        "Cannot infer RDF format of {}; pass --format",
                        file.display()
                    )
                })?,
            };
            let mut parser = RdfParser::from_format(rdf_format);
            if !cmd.strict {
                parser = parser.lenient();
            }
            let reader = BufReader::new(File::open(&file)?);
            let mut serializer = HextuplesSerializer::new(output_writer(output.as_ref())?);
            for quad in parser.for_reader(reader) {
                serializer.serialize_quad(&quad?)?;
            }
            let n = serializer.written();
            serializer.finish()?;
            info!("Wrote {} hextuples", n);
        }
    }
    Ok(())
}
