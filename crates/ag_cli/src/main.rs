use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};

use ag_core::{Article, Error, Result};
use ag_inference::{create_model, ArticlePipeline, Config, GeneratedArticle};
use ag_web::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Gemini API key. Falls back to the GEMINI_API_KEY environment variable.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    #[arg(
        long,
        default_value = "gemini-2.5-flash",
        help = "Model to use for inference. Available models: gemini-2.5-flash (default), dummy"
    )]
    model: String,
    /// Override the model API base URL.
    #[arg(long)]
    base_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Generate an article for a topic query
    Generate {
        query: String,
        /// Optional URL used as additional context for the model
        #[arg(long)]
        url: Option<String>,
        /// Write the HTML document here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// Also print the article and SEO metadata as JSON
        #[arg(long)]
        json: bool,
    },
    /// Revise an existing article with a free-text instruction
    Regenerate {
        /// Path to a file holding the article JSON
        article: PathBuf,
        /// Edit instruction, e.g. "make the tone more formal"
        instruction: String,
        /// Write the HTML document here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// Also print the article and SEO metadata as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the HTTP API
    Serve {
        #[arg(long, default_value = "127.0.0.1:8000")]
        bind: String,
        /// Comma-separated list of allowed CORS origins
        #[arg(long, default_value = "http://localhost:3000,http://localhost:3001")]
        cors_origins: String,
    },
}

fn emit(generated: &GeneratedArticle, output: Option<&PathBuf>, json: bool) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, &generated.html)?;
            info!("💾 Wrote HTML document to {}", path.display());
        }
        None => println!("{}", generated.html),
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&generated.article)?);
        println!("{}", serde_json::to_string_pretty(&generated.seo)?);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let config = Config {
        api_key: cli.api_key,
        model_name: Some(cli.model),
        base_url: cli.base_url,
    };
    let model = create_model(&config)?;
    info!("🧠 Inference model initialized successfully (using {})", model.name());
    let pipeline = ArticlePipeline::new(model);

    match cli.command {
        Commands::Generate {
            query,
            url,
            output,
            json,
        } => {
            if let Some(raw) = &url {
                url::Url::parse(raw).map_err(|err| Error::InvalidUrl(format!("{raw}: {err}")))?;
            }
            let generated = pipeline.generate(&query, url.as_deref()).await?;
            emit(&generated, output.as_ref(), json)?;
        }
        Commands::Regenerate {
            article,
            instruction,
            output,
            json,
        } => {
            let data = std::fs::read_to_string(&article)?;
            let article: Article = serde_json::from_str(&data)?;
            let generated = pipeline.regenerate(article, &instruction).await?;
            if generated.article.regeneration_note.is_some() {
                warn!("⚠️ Model edit could not be parsed; returning the original article");
            }
            emit(&generated, output.as_ref(), json)?;
        }
        Commands::Serve { bind, cors_origins } => {
            let addr: SocketAddr = bind
                .parse()
                .map_err(|_| Error::Config(format!("invalid bind address: {bind}")))?;
            let state = AppState {
                pipeline,
                cors_origins: ag_web::parse_origins(&cors_origins),
            };
            ag_web::serve(state, addr).await?;
        }
    }

    Ok(())
}
