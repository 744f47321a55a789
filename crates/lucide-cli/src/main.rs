use lucide_tag::DEFAULT_CUSTOM_ICONS_DIR;
use std::path::PathBuf;

#[derive(Debug)]
enum CliError {
    Usage(String),
    Lucide(lucide_tag::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Lucide(err) => write!(f, "Error: {err}"),
        }
    }
}

impl From<lucide_tag::Error> for CliError {
    fn from(value: lucide_tag::Error) -> Self {
        Self::Lucide(value)
    }
}

fn usage() -> &'static str {
    "lucide-cli\n\
\n\
USAGE:\n\
  lucide-cli install-icon [--dir <dir>] [--name <name>] <file>...\n\
\n\
NOTES:\n\
  - install-icon reduces each SVG file to its inner content and writes it\n\
    into the custom icon directory (default: _lucide).\n\
  - --name overrides the output filename and is only valid with a single\n\
    input file.\n\
"
}

#[derive(Debug)]
struct InstallArgs {
    dir: PathBuf,
    name: Option<String>,
    files: Vec<PathBuf>,
}

fn parse_install_args(argv: &[String]) -> Result<InstallArgs, CliError> {
    let mut dir = PathBuf::from(DEFAULT_CUSTOM_ICONS_DIR);
    let mut name = None;
    let mut files = Vec::new();

    let mut it = argv.iter();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--dir" => {
                let Some(d) = it.next() else {
                    return Err(CliError::Usage(usage().to_string()));
                };
                dir = PathBuf::from(d);
            }
            "--name" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage().to_string()));
                };
                name = Some(n.clone());
            }
            flag if flag.starts_with('-') => {
                return Err(CliError::Usage(format!(
                    "Error: unknown option: {flag}\n\n{}",
                    usage()
                )));
            }
            file => files.push(PathBuf::from(file)),
        }
    }

    if files.is_empty() {
        return Err(CliError::Usage(format!(
            "Error: no SVG files specified\n\n{}",
            usage()
        )));
    }
    if name.is_some() && files.len() > 1 {
        return Err(CliError::Usage(
            "Error: --name can only be used with a single file".to_string(),
        ));
    }

    Ok(InstallArgs { dir, name, files })
}

fn install(argv: &[String]) -> Result<(), CliError> {
    if argv.iter().any(|a| a == "-h" || a == "--help") {
        print!("{}", usage());
        return Ok(());
    }
    let args = parse_install_args(argv)?;
    for file in &args.files {
        let out_path = lucide_tag::install_icon(file, &args.dir, args.name.as_deref())?;
        println!("Installed {}", out_path.display());
    }
    Ok(())
}

fn run(argv: &[String]) -> Result<(), CliError> {
    match argv.get(1).map(String::as_str) {
        Some("install-icon") => install(&argv[2..]),
        None | Some("-h") | Some("--help") => {
            print!("{}", usage());
            Ok(())
        }
        Some(other) => Err(CliError::Usage(format!(
            "Unknown command: {other}\n\n{}",
            usage()
        ))),
    }
}

fn main() {
    let argv: Vec<String> = std::env::args().collect();
    if let Err(err) = run(&argv) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
