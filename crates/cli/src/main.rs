use async_trait::async_trait;
use clap::{Parser, Subcommand};
use maf_analyzer::{AnalyzerService, MafRepoClient, StaticCatalogue};
use maf_core::{run_confirmed, run_replace, Dialogs, FormFields, ImportOutcome, VariantSource};
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "maf")]
#[command(about = "MAF repository variant import CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch simple variants for a sample and print the response envelope
    Fetch {
        /// Sample id (submission number)
        sample_id: String,
        /// MAF repository base URL (defaults to $MAFREPO_URL)
        #[arg(long)]
        mafrepo_url: Option<String>,
        /// JSON file mapping catalogue names to versions
        #[arg(long)]
        catalogue: Option<PathBuf>,
    },
    /// Run the variant import workflow against a JSON form file
    Import {
        /// JSON file holding the form field values
        form: PathBuf,
        /// MAF repository base URL (defaults to $MAFREPO_URL)
        #[arg(long)]
        mafrepo_url: Option<String>,
        /// JSON file mapping catalogue names to versions
        #[arg(long)]
        catalogue: Option<PathBuf>,
        /// Replace the examination field instead of confirm-and-merge
        #[arg(long)]
        replace: bool,
        /// Answer the overwrite confirmation with yes
        #[arg(long)]
        yes: bool,
    },
}

/// Form field store backed by a JSON file of field name to value.
struct FormFile {
    fields: serde_json::Map<String, Value>,
}

impl FormFile {
    fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let fields = serde_json::from_str(&contents)?;
        Ok(Self { fields })
    }

    fn save(&self, path: &Path) -> anyhow::Result<()> {
        let contents = serde_json::to_string_pretty(&Value::Object(self.fields.clone()))?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

impl FormFields for FormFile {
    fn field(&self, name: &str) -> Option<Value> {
        self.fields.get(name).cloned()
    }

    fn set_field(&mut self, name: &str, value: Value) {
        self.fields.insert(name.to_owned(), value);
    }
}

/// Terminal dialogs: alerts on stderr, confirmations as a stdin prompt.
struct TerminalDialogs {
    assume_yes: bool,
}

#[async_trait]
impl Dialogs for TerminalDialogs {
    async fn alert(&self, title: &str, message: &str) {
        eprintln!("{}: {}", title, message);
    }

    async fn confirm(&self, title: &str, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        print!("{}: {} [y/N] ", title, message);
        let _ = std::io::stdout().flush();
        let mut answer = String::new();
        if std::io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

fn resolve_mafrepo_url(flag: Option<String>) -> anyhow::Result<String> {
    flag.or_else(|| std::env::var("MAFREPO_URL").ok())
        .ok_or_else(|| anyhow::anyhow!("no MAF repository URL (use --mafrepo-url or $MAFREPO_URL)"))
}

fn build_analyzer(
    mafrepo_url: Option<String>,
    catalogue: Option<PathBuf>,
) -> anyhow::Result<AnalyzerService> {
    let url = resolve_mafrepo_url(mafrepo_url)?;
    let catalogue = match catalogue {
        Some(path) => StaticCatalogue::from_json_file(&path)?,
        None => StaticCatalogue::default(),
    };
    Ok(AnalyzerService::new(
        MafRepoClient::new(url),
        Arc::new(catalogue),
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Fetch {
            sample_id,
            mafrepo_url,
            catalogue,
        }) => {
            let analyzer = build_analyzer(mafrepo_url, catalogue)?;
            let envelope = analyzer.request_simple_variants(&sample_id).await;
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
        Some(Commands::Import {
            form,
            mafrepo_url,
            catalogue,
            replace,
            yes,
        }) => {
            let analyzer = build_analyzer(mafrepo_url, catalogue)?;
            let mut form_file = FormFile::load(&form)?;
            let dialogs = TerminalDialogs { assume_yes: yes };

            let outcome = if replace {
                run_replace(&mut form_file, &analyzer).await
            } else {
                run_confirmed(&mut form_file, &analyzer, &dialogs).await
            };

            match outcome {
                Ok(ImportOutcome::Imported { imported, retained }) => {
                    form_file.save(&form)?;
                    println!(
                        "Imported {} simple variants ({} existing records kept)",
                        imported, retained
                    );
                }
                Ok(ImportOutcome::Declined) => {
                    println!("Import aborted; form unchanged.");
                }
                Err(e) => eprintln!("Error importing simple variants: {}", e),
            }
        }
        None => {
            println!("Use 'maf --help' for commands");
        }
    }

    Ok(())
}
