use std::io::Read;
use topolay::{TopologyGraph, TopologyKind, decode_chat_response, generate};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Topolay(topolay::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Topolay(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<topolay::Error> for CliError {
    fn from(value: topolay::Error) -> Self {
        Self::Topolay(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Default)]
struct Args {
    kind: Option<String>,
    count: Option<i64>,
    intent: Option<String>,
    pretty: bool,
}

fn usage() -> &'static str {
    "topolay-cli\n\
\n\
USAGE:\n\
  topolay-cli --kind <clean|star|ring|line|bus|mesh> --count <n> [--pretty]\n\
  topolay-cli --intent <path>|- [--pretty]\n\
\n\
NOTES:\n\
  - Prints the generated topology graph as JSON on stdout.\n\
  - --intent decodes a captured intent-service /chat response and generates\n\
    from its (topology, devices) pair; '-' reads the response from stdin.\n\
  - An unrecognized kind is not an error: it prints the empty graph.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--pretty" => args.pretty = true,
            "--kind" => {
                let Some(v) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.kind = Some(v.clone());
            }
            "--count" => {
                let Some(v) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.count = Some(v.parse::<i64>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--intent" => {
                let Some(v) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.intent = Some(v.clone());
            }
            _ => return Err(CliError::Usage(usage())),
        }
    }

    if args.intent.is_none() && (args.kind.is_none() || args.count.is_none()) {
        return Err(CliError::Usage(usage()));
    }
    if args.intent.is_some() && (args.kind.is_some() || args.count.is_some()) {
        return Err(CliError::Usage(usage()));
    }

    Ok(args)
}

fn read_input(path: &str) -> Result<String, CliError> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let graph = match &args.intent {
        Some(source) => {
            let body = read_input(source)?;
            let response = decode_chat_response(&body)?;
            match response.topology_request() {
                Some(request) => {
                    generate(TopologyKind::parse(&request.kind), request.device_count)
                }
                // No complete (topology, devices) pair: nothing to draw.
                None => TopologyGraph::default(),
            }
        }
        None => {
            // parse_args guarantees both are present here.
            let kind = args.kind.as_deref().unwrap_or_default();
            let count = args.count.unwrap_or_default();
            generate(TopologyKind::parse(kind), count)
        }
    };

    let out = if args.pretty {
        serde_json::to_string_pretty(&graph)?
    } else {
        serde_json::to_string(&graph)?
    };
    println!("{out}");
    Ok(())
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
