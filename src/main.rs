use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use degrees::data_loading::{load_data, LoadOptions};
use degrees::dataset::Dataset;
use degrees::names::{person_id_for_name, prompt_name};
use degrees::report::write_path;

#[derive(Parser)]
#[command(name = "degrees", about = "Degrees of separation between two actors")]
struct Cli {
    /// Directory containing people.csv, movies.csv and stars.csv.
    #[arg(default_value = "large")]
    directory: PathBuf,
    /// Source person's name. Prompted for when omitted.
    #[arg(long)]
    source: Option<String>,
    /// Target person's name. Prompted for when omitted.
    #[arg(long)]
    target: Option<String>,
    /// Fail on star rows that reference unknown people or movies.
    #[arg(long)]
    strict: bool,
    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_tracing(default_filter: &str) -> Result<()> {
    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;
    let fmt_layer = fmt::layer().with_target(false).with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
    Ok(())
}

fn resolve_person<R: BufRead, W: Write>(
    dataset: &Dataset,
    name: Option<String>,
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    let name = match name {
        Some(name) => name,
        None => prompt_name(input, output)?,
    };
    match person_id_for_name(dataset, &name, input, output)? {
        Some(person_id) => Ok(person_id),
        None => bail!("Person not found."),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let loaded = load_data(&cli.directory, LoadOptions { strict: cli.strict })
        .with_context(|| format!("failed to load data from {}", cli.directory.display()))?;
    let dataset = loaded.dataset;

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    let source = resolve_person(&dataset, cli.source, &mut input, &mut output)?;
    let target = resolve_person(&dataset, cli.target, &mut input, &mut output)?;

    let path = dataset.shortest_path(&source, &target)?;
    write_path(&dataset, &source, path.as_deref(), &mut output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use degrees::dataset::DatasetBuilder;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["degrees"]);
        assert_eq!(cli.directory, PathBuf::from("large"));
        assert!(cli.source.is_none());
        assert!(!cli.strict);
        assert_eq!(cli.log_level, "info");

        let cli = Cli::parse_from(["degrees", "small", "--source", "Kevin Bacon", "--strict"]);
        assert_eq!(cli.directory, PathBuf::from("small"));
        assert_eq!(cli.source.as_deref(), Some("Kevin Bacon"));
        assert!(cli.strict);
    }

    #[test]
    fn test_resolve_person() {
        let mut builder = DatasetBuilder::new();
        builder.add_person("102", "Kevin Bacon", Some(1958));
        let dataset = builder.build();
        let mut output = Vec::new();

        let mut input = "kevin bacon\n".as_bytes();
        let id = resolve_person(&dataset, None, &mut input, &mut output).unwrap();
        assert_eq!(id, "102");
        assert_eq!(output, b"Name: ");

        let mut input = "".as_bytes();
        let err = resolve_person(&dataset, Some("Nobody".into()), &mut input, &mut output)
            .unwrap_err();
        assert_eq!(err.to_string(), "Person not found.");
    }
}
