use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use log::debug;
use structopt::StructOpt;

use gsmfilter::encoding::{pack_septets, segments};
use gsmfilter::{load_config, Alphabet, FilterConfig, Gsm7, UnicodeFilter};

#[derive(StructOpt)]
#[structopt(about = "Replace characters that would force an SMS out of GSM 7-bit encoding")]
pub struct Cli {
    /// Only replace characters GSM 03.38 cannot encode
    #[structopt(short = "s", long = "strip-non-decodable-only")]
    strip_non_decodable_only: bool,
    /// TOML file with a [filter] table
    #[structopt(short = "c", long = "config", parse(from_os_str))]
    config: Option<PathBuf>,
    /// Print septet and message part counts to stderr
    #[structopt(short = "r", long = "report")]
    report: bool,
    /// Print the packed GSM encoding as hex instead of the text
    #[structopt(long = "hex")]
    hex: bool,
    /// Text to filter; read from stdin when absent
    text: Vec<String>,
}

impl Cli {
    fn filter_config(&self) -> anyhow::Result<FilterConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => FilterConfig::default(),
        };
        config.strip_non_decodable_only |= self.strip_non_decodable_only;
        Ok(config)
    }
}

fn read_input(cli: &Cli, stdin: &mut dyn Read) -> anyhow::Result<String> {
    if !cli.text.is_empty() {
        return Ok(cli.text.join(" "));
    }
    let mut input = String::new();
    stdin
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;
    Ok(input)
}

fn report(text: &str) -> String {
    match Gsm7.count_septets(text) {
        Ok(septets) => format!("{} septets, {} message(s)", septets, segments(septets)),
        Err(err) => format!("still needs UCS-2: {}", err),
    }
}

/// Plain text is newline-terminated; a trailing newline in the input is not doubled.
fn run(
    cli: &Cli,
    stdin: &mut dyn Read,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> anyhow::Result<()> {
    let filter = UnicodeFilter::from_config(&cli.filter_config()?);
    let input = read_input(cli, stdin)?;
    let output = filter.filter(&input);
    debug!(
        "filtered {} characters into {}",
        input.chars().count(),
        output.chars().count()
    );

    if cli.report {
        writeln!(stderr, "{}", report(&output))?;
    }

    if cli.hex {
        let septets = Gsm7
            .encode_unpacked(&output)
            .context("Filtered text is not GSM encodable")?;
        writeln!(stdout, "{}", hex::encode(pack_septets(&septets)))?;
    } else if output.ends_with('\n') {
        stdout.write_all(output.as_bytes())?;
    } else {
        writeln!(stdout, "{}", output)?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli: Cli = Cli::from_args();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    run(&cli, &mut stdin.lock(), &mut stdout.lock(), &mut stderr.lock())
}
