//! Command-line front end: scrape, read documents, detect and translate.
//!
//! Every subcommand prints one JSON document to stdout. Logs go to stderr.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use dhivehi_translator::documents::{self, DocumentFormat};
use dhivehi_translator::translation::language::{
    AUTO_DETECT, ENGLISH, SOURCE_LANGUAGES, TARGET_LANGUAGES,
};
use dhivehi_translator::translation::{translate_page, translate_text};
use dhivehi_translator::{
    is_dhivehi_script, logging, random, resolve_source_language, scrape_url, Config, Fetcher,
    Gateway, GoogleTranslate, Options, ScrapedPage, TranslatedContent, Translation,
};

#[derive(Parser, Debug)]
#[command(
    name = "dhivehi-translator",
    version,
    about = "Scrape, detect and translate Dhivehi content"
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape a web page and translate its content
    Url {
        url: String,

        /// Source language, or "auto" to detect from the page
        #[arg(long = "from", default_value = AUTO_DETECT)]
        from: String,

        /// Target language
        #[arg(long = "to", default_value = ENGLISH)]
        to: String,

        /// Fetch timeout in seconds (defaults to DHIVEHI_FETCH_TIMEOUT_SECS or 15)
        #[arg(long)]
        timeout: Option<u64>,

        /// Also translate the page in place and return its HTML
        #[arg(long)]
        preserve_structure: bool,

        /// Only scrape, skip translation
        #[arg(long)]
        no_translate: bool,
    },

    /// Translate text given as an argument, or "-" for stdin
    Text {
        text: String,

        #[arg(long = "from", default_value = AUTO_DETECT)]
        from: String,

        #[arg(long = "to", default_value = ENGLISH)]
        to: String,
    },

    /// Extract and translate the text of a PDF, DOCX or TXT file
    File {
        path: PathBuf,

        #[arg(long = "from", default_value = AUTO_DETECT)]
        from: String,

        #[arg(long = "to", default_value = ENGLISH)]
        to: String,

        #[arg(long, value_enum, default_value_t = FormatArg::Auto)]
        format: FormatArg,
    },

    /// Print the URL of a random wiki article
    Random {
        #[arg(long, default_value = random::DEFAULT_WIKI)]
        wiki: String,
    },

    /// Report whether text contains Thaana script
    Detect { text: String },

    /// List supported source and target languages
    Languages,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Auto,
    Pdf,
    Docx,
    Txt,
}

impl FormatArg {
    fn format(self) -> Option<DocumentFormat> {
        match self {
            FormatArg::Auto => None,
            FormatArg::Pdf => Some(DocumentFormat::Pdf),
            FormatArg::Docx => Some(DocumentFormat::Docx),
            FormatArg::Txt => Some(DocumentFormat::Text),
        }
    }
}

#[derive(Serialize)]
struct PageOutput {
    page: ScrapedPage,
    source_language: String,
    target_language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    translation: Option<TranslatedContent>,
}

#[derive(Serialize)]
struct TextOutput {
    original: String,
    source_language: String,
    target_language: String,
    translation: Translation,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::from_env()?;

    match cli.command {
        Command::Url {
            url,
            from,
            to,
            timeout,
            preserve_structure,
            no_translate,
        } => {
            let fetcher = Fetcher::new(&config.user_agent)?;
            let timeout = timeout.map_or(config.fetch_timeout, std::time::Duration::from_secs);
            let options = Options {
                preserve_structure,
                ..Options::default()
            };

            let page = match scrape_url(&fetcher, &url, timeout, &options).await {
                Ok(page) => page,
                Err(failure) => {
                    print_json(&failure)?;
                    return Ok(ExitCode::FAILURE);
                }
            };

            let source = resolve_source_language(
                &from,
                &page.title,
                page.paragraphs.first().map(String::as_str),
            )
            .to_string();
            let translation = if no_translate {
                None
            } else {
                let gateway = gateway(&config)?;
                Some(translate_page(&gateway, &page, &source, &to).await)
            };

            print_json(&PageOutput {
                page,
                source_language: source,
                target_language: to,
                translation,
            })?;
        }

        Command::Text { text, from, to } => {
            let text = read_arg(text)?;
            print_json(&translate_raw(&config, text, &from, &to).await?)?;
        }

        Command::File {
            path,
            from,
            to,
            format,
        } => {
            let text = documents::extract_file(&path, format.format())
                .with_context(|| format!("reading {}", path.display()))?;
            print_json(&translate_raw(&config, text, &from, &to).await?)?;
        }

        Command::Random { wiki } => {
            let fetcher = Fetcher::new(&config.user_agent)?;
            let url = random::random_article(&fetcher, &wiki).await;
            print_json(&serde_json::json!({ "wiki": wiki, "url": url }))?;
        }

        Command::Detect { text } => {
            let text = read_arg(text)?;
            print_json(&serde_json::json!({
                "is_dhivehi": is_dhivehi_script(&text),
                "text": text,
            }))?;
        }

        Command::Languages => {
            print_json(&serde_json::json!({
                "sources": SOURCE_LANGUAGES,
                "targets": TARGET_LANGUAGES,
            }))?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn gateway(config: &Config) -> Result<Gateway<GoogleTranslate>> {
    let client = GoogleTranslate::from_config(config)?;
    Ok(Gateway::new(client).with_concurrency(config.concurrency))
}

async fn translate_raw(config: &Config, text: String, from: &str, to: &str) -> Result<TextOutput> {
    let source = resolve_source_language(from, &text, None).to_string();
    let gateway = gateway(config)?;
    let translation = translate_text(&gateway, &text, &source, to).await;
    Ok(TextOutput {
        original: text,
        source_language: source,
        target_language: to.to_string(),
        translation,
    })
}

/// The argument itself, or all of stdin for "-".
fn read_arg(arg: String) -> Result<String> {
    if arg != "-" {
        return Ok(arg);
    }
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("reading stdin")?;
    Ok(input)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
