use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use sublite_theme::{scheme, Theme};

fn help(error: Option<&str>) -> ! {
    if let Some(e) = error {
        eprintln!("error: {e}\n");
    }

    eprintln!("Usage: sublite [options] <theme.tmTheme>\n");
    eprintln!("Convert a Sublime Text theme to a LiteIDE style scheme.\n");

    eprintln!("Options:");
    eprintln!("  -o <path>, --output <path>  write to <path> instead of <theme>.xml");
    eprintln!();

    eprintln!("More information:");
    eprintln!("  -h, --help (this message)");
    eprintln!("  -v, --version");

    process::exit(if error.is_some() { 1 } else { 0 });
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut input: Option<String> = None;
    let mut output: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "-h" | "--help" => help(None),
            "-v" | "--version" => {
                println!("sublite {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    help(Some("missing value for --output"));
                }
                output = Some(args[i].clone());
            }
            _ => {
                if arg.starts_with('-') {
                    help(Some(&format!("unknown argument {arg}")));
                }
                if input.is_some() {
                    help(Some("expected exactly one input file"));
                }
                input = Some(arg.clone());
            }
        }
        i += 1;
    }

    let Some(input) = input else {
        help(Some("missing input file"));
    };

    if let Err(e) = run(&input, output.as_deref()) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(input: &str, output: Option<&str>) -> Result<()> {
    let text =
        fs::read_to_string(input).with_context(|| format!("unable to read {input}"))?;

    let theme = Theme::parse(&text)
        .with_context(|| format!("unable to convert {input}"))?;
    let xml = scheme::render(&theme, &scheme_name(input), input)?;

    let out_path = match output {
        Some(p) => PathBuf::from(p),
        None => derive_output_path(input),
    };
    fs::write(&out_path, xml)
        .with_context(|| format!("unable to write {}", out_path.display()))?;

    println!("{}", out_path.display());
    Ok(())
}

/// Scheme name: the input file name without its `.tmTheme` extension.
fn scheme_name(input: &str) -> String {
    let file_name = Path::new(input)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.to_string());
    file_name
        .strip_suffix(".tmTheme")
        .unwrap_or(&file_name)
        .to_string()
}

/// Output path: the input path with `.tmTheme` replaced by `.xml`.
fn derive_output_path(input: &str) -> PathBuf {
    let base = input.strip_suffix(".tmTheme").unwrap_or(input);
    PathBuf::from(format!("{base}.xml"))
}
