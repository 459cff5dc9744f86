use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use gradex_api::{PayloadLimit, RestApi, DEFAULT_MAX_ESSAY_BYTES};
use gradex_core::Grader;
use gradex_nlp::{GrammarConfig, NlpConfig, StandardToolkit};

/// Essay grading service
#[derive(Parser, Debug)]
#[command(name = "gradex")]
#[command(about = "Grades essays on a 1-10 scale with feedback", long_about = None)]
struct Args {
    /// Address to bind the HTTP API to
    #[arg(long, env = "GRADEX_HOST", default_value = "0.0.0.0")]
    host: String,

    /// HTTP API port
    #[arg(short, long, env = "GRADEX_PORT", default_value_t = 5000)]
    port: u16,

    /// Log level
    #[arg(long, env = "GRADEX_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Largest accepted request body, in bytes
    #[arg(long, env = "GRADEX_MAX_ESSAY_BYTES", default_value_t = DEFAULT_MAX_ESSAY_BYTES)]
    max_essay_bytes: usize,

    /// LanguageTool server base URL
    #[arg(long, env = "GRADEX_LANGUAGETOOL_URL", default_value = gradex_nlp::grammar::DEFAULT_LANGUAGETOOL_URL)]
    languagetool_url: String,

    /// Grammar check language
    #[arg(long, env = "GRADEX_LANGUAGE", default_value = gradex_nlp::grammar::DEFAULT_LANGUAGE)]
    language: String,

    /// Timeout for a single grammar check, in milliseconds
    #[arg(long, env = "GRADEX_GRAMMAR_TIMEOUT_MS", default_value_t = 10_000)]
    grammar_timeout_ms: u64,

    /// Skip grammar checking (every essay reports 0 grammar errors)
    #[arg(long, env = "GRADEX_NO_GRAMMAR")]
    no_grammar: bool,
}

impl Args {
    fn nlp_config(&self) -> NlpConfig {
        let grammar = (!self.no_grammar).then(|| GrammarConfig {
            url: self.languagetool_url.clone(),
            language: self.language.clone(),
            timeout: Duration::from_millis(self.grammar_timeout_ms),
        });
        NlpConfig { grammar }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting gradex v{}", env!("CARGO_PKG_VERSION"));
    info!("HTTP API: {}:{}", args.host, args.port);

    // Blocking HTTP calls happen here, before any async runtime exists.
    let toolkit = StandardToolkit::initialize(&args.nlp_config());
    if !toolkit.grammar_available() {
        info!("Running without grammar checker");
    }
    let grader = Arc::new(Grader::new(Arc::new(toolkit)));

    let sys = actix_web::rt::System::new();
    sys.block_on(RestApi::start(
        grader.clone(),
        PayloadLimit(args.max_essay_bytes),
        &args.host,
        args.port,
    ))?;

    info!("Shutting down...");
    Ok(())
}
