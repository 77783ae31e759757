// Command-line interface for html2kara
//
// Reads HTML from a file or stdin and writes the equivalent Kara DSL source.
//
// Usage:
//  html2kara [<input>] [--output <file>]   - Convert (stdin when input is absent or "-")
//  html2kara <input> --check               - Exit 0 if the input contains HTML, 1 otherwise
//
// Settings come from the embedded defaults, then ./html2kara.toml if present,
// then --config, then the individual flags.

mod logging;

use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command, ValueHint};
use html2kara::{contains_html, KaraConverter};
use html2kara_config::{Html2KaraConfig, Loader};
use tracing::{debug, info};

const LOCAL_CONFIG: &str = "html2kara.toml";

fn build_cli() -> Command {
    Command::new("html2kara")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert HTML markup to Kara builder DSL source")
        .long_about(
            "html2kara turns HTML fragments or documents into Kara DSL.\n\n\
            Tags become builder calls, attributes become named arguments and\n\
            nested content becomes blocks. Input without a <body> tag is\n\
            converted as a fragment.\n\n\
            Examples:\n  \
            html2kara page.html                     # Convert to stdout\n  \
            echo '<b>hi</b>' | html2kara            # Convert stdin\n  \
            html2kara page.html -o Page.kt          # Write to a file\n  \
            html2kara snippet.txt --check           # Does it contain HTML?",
        )
        .arg(
            Arg::new("input")
                .help("Input HTML file, or '-' for stdin")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write the result to FILE instead of stdout")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an html2kara.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("indent-width")
                .long("indent-width")
                .value_name("N")
                .help("Indent with N spaces instead of the configured indent")
                .value_parser(value_parser!(u8)),
        )
        .arg(
            Arg::new("base-depth")
                .long("base-depth")
                .value_name("N")
                .help("Nesting level of top-level nodes")
                .value_parser(value_parser!(u16)),
        )
        .arg(
            Arg::new("direct-links")
                .long("direct-links")
                .help("Emit href values as DirectLink(\"...\") calls")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("force")
                .long("force")
                .help("Convert even if the input contains no HTML")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Only report whether the input contains HTML (exit status 0 or 1)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log output (repeatable)")
                .action(ArgAction::Count),
        )
}

fn load_config(matches: &ArgMatches) -> Result<Html2KaraConfig> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);

    if let Some(path) = matches.get_one::<String>("config") {
        debug!(path = %path, "layering config file");
        loader = loader.with_file(path);
    }
    if let Some(width) = matches.get_one::<u8>("indent-width") {
        loader = loader.set_override("formatter.indent", " ".repeat(usize::from(*width)))?;
    }
    if let Some(depth) = matches.get_one::<u16>("base-depth") {
        loader = loader.set_override("formatter.base_indent_depth", i64::from(*depth))?;
    }
    if matches.get_flag("direct-links") {
        loader = loader.set_override("conversion.href_to_direct_link", true)?;
    }
    if matches.get_flag("force") {
        loader = loader.set_override("conversion.only_when_html", false)?;
    }

    loader.build().context("Failed to load configuration")
}

fn read_input(matches: &ArgMatches) -> Result<String> {
    match matches.get_one::<String>("input").map(String::as_str) {
        None | Some("-") => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read '{}'", path))
        }
    }
}

fn write_output(matches: &ArgMatches, output: &str) -> Result<()> {
    match matches.get_one::<String>("output") {
        Some(path) => {
            fs::write(path, output).with_context(|| format!("Failed to write '{}'", path))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn main() -> Result<ExitCode> {
    let matches = build_cli().get_matches();
    logging::init_tracing(matches.get_count("verbose"));

    let input = read_input(&matches)?;
    let is_html = contains_html(&input);

    if matches.get_flag("check") {
        info!(is_html, "checked input");
        return Ok(if is_html {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let config = load_config(&matches)?;

    let output = if is_html || !config.conversion.only_when_html {
        let converter =
            KaraConverter::with_options(config.conversion_options(), config.formatter_config()?)?;
        converter.convert(&input)
    } else {
        info!("input contains no HTML, passing it through");
        input
    };

    write_output(&matches, &output)?;
    Ok(ExitCode::SUCCESS)
}
