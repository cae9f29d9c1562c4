//! wlang CLI - The wlang front end command line interface.
//! wlang CLI - wlang 前端的命令行界面。

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use commands::parse::{ParseOptions, TreeFormat};
use tracing::Level;
use wlang_lexer::LexerConfig;
use wlang_parser::{FrontendConfig, ParserConfig};

/// Main CLI structure.
/// 主 CLI 结构体。
#[derive(Parser)]
#[command(name = "wlang")]
#[command(author, version, about = "wlang - tokenizer and parser for the wlang language", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output. / 启用详细输出。
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress output. / 抑制输出。
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Stop tokenizing once more errors than this were found. / 词法错误超过此数量时停止。
    #[arg(long, global = true, default_value_t = LexerConfig::DEFAULT_MAX_ERRORS)]
    max_lex_errors: usize,

    /// Stop parsing once more errors than this were found. / 语法错误超过此数量时停止。
    #[arg(long, global = true, default_value_t = ParserConfig::DEFAULT_MAX_ERRORS)]
    max_parse_errors: usize,
}

impl Cli {
    fn frontend_config(&self) -> FrontendConfig {
        FrontendConfig::new()
            .lexer(LexerConfig::new().max_errors(self.max_lex_errors))
            .parser(ParserConfig::new().max_errors(self.max_parse_errors))
    }
}

/// Available CLI commands.
/// 可用的 CLI 命令。
#[derive(Subcommand)]
enum Commands {
    /// Print the tokens of a file. / 打印文件的 token。
    Tokens {
        /// The file to tokenize. / 要进行词法分析的文件。
        file: String,
    },

    /// Parse a file and print its syntax tree. / 解析文件并打印语法树。
    Parse {
        /// The file to parse. / 要解析的文件。
        file: String,

        /// Indent JSON output. / 缩进 JSON 输出。
        #[arg(long)]
        pretty: bool,

        /// Output format. / 输出格式。
        #[arg(long, value_enum, default_value_t = TreeFormat::Json)]
        format: TreeFormat,

        /// Parse even if tokenization failed. / 即使词法分析失败也继续解析。
        #[arg(long)]
        partial: bool,
    },

    /// Check a file for errors. / 检查文件错误。
    Check {
        /// The file to check. / 要检查的文件。
        file: String,
    },
}

/// Install the stderr log subscriber.
/// 安装输出到 stderr 的日志订阅器。
fn init_tracing(verbose: bool, quiet: bool) {
    let level = if verbose {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Main entry point.
/// 主入口点。
fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let config = cli.frontend_config();

    let result = match cli.command {
        Commands::Tokens { file } => commands::tokens::run(&file, &config.lexer),
        Commands::Parse {
            file,
            pretty,
            format,
            partial,
        } => {
            let options = ParseOptions {
                pretty,
                format,
                partial,
            };
            commands::parse::run(&file, &options, &config, cli.verbose)
        }
        Commands::Check { file } => commands::check::run(&file, &config, cli.verbose),
    };

    if let Err(e) = result {
        if !cli.quiet {
            output::error(&e.to_string());
        }
        std::process::exit(1);
    }
}
