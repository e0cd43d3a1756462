mod test_runner;

use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};
use codespan_reporting::diagnostic::Diagnostic;
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["compile", "test", "help"];

#[derive(Parser)]
#[command(name = "pugjsx", version, about = "Compile Vue-flavored Pug ASTs to JSX")]
struct Cli {
    /// Disable colored error output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log directive resolution to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a pug-parser AST (JSON) and print the JSX
    Compile(CompileArgs),

    /// Run .test.ast fixture files
    Test(TestArgs),
}

#[derive(clap::Args)]
struct CompileArgs {
    /// JSON produced by `JSON.stringify(parse(lex(src)))`
    #[arg(default_value = "target.pug.json")]
    file: String,

    /// Load and compile only, print nothing (exit 0 if valid)
    #[arg(long)]
    check: bool,

    /// Dump the loaded tree instead of compiling
    #[arg(long)]
    ast: bool,
}

#[derive(clap::Args)]
struct TestArgs {
    /// Path to a .test.ast file or a directory containing them
    path: String,

    /// Run only tests in these categories (subfolder names). Repeatable.
    #[arg(short, long)]
    category: Vec<String>,

    /// List available categories and exit
    #[arg(long)]
    list_categories: bool,
}

fn main() {
    // `pugjsx file.json` behaves like `pugjsx compile file.json`, and a bare
    // `pugjsx` compiles the default file.
    let mut args: Vec<String> = std::env::args().collect();
    match args.iter().skip(1).position(|a| !a.starts_with('-')) {
        Some(offset) if !SUBCOMMANDS.contains(&args[offset + 1].as_str()) => {
            args.insert(offset + 1, "compile".to_string());
        }
        Some(_) => {}
        None => args.insert(1, "compile".to_string()),
    }

    let cli = Cli::parse_from(&args);
    init_tracing(cli.verbose);

    match cli.command {
        Command::Compile(compile_args) => do_compile(compile_args, cli.no_color),
        Command::Test(test_args) => {
            let path = Path::new(&test_args.path);
            if test_args.list_categories {
                test_runner::list_categories(path);
                return;
            }
            let exit_code = test_runner::run_tests(path, cli.no_color, &test_args.category);
            process::exit(exit_code);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn do_compile(args: CompileArgs, no_color: bool) {
    let color_choice = if no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };

    let source = match std::fs::read_to_string(&args.file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: cannot read '{}': {}", args.file, e);
            process::exit(1);
        }
    };

    let mut files = SimpleFiles::new();
    let file_id = files.add(args.file.clone(), source.clone());

    let loader = pugast::Loader::new(source, file_id);
    let root = match loader.load() {
        Ok(root) => root,
        Err(errors) => {
            let diagnostics: Vec<_> = errors.iter().map(|e| e.to_diagnostic()).collect();
            emit_diagnostics(color_choice, &files, &diagnostics);
            process::exit(1);
        }
    };
    tracing::debug!(file = %args.file, nodes = root.nodes.len(), "loaded tree");

    if args.ast {
        println!("{:#?}", root);
        return;
    }

    match transpiler::compile(&root) {
        Ok(output) => {
            if args.check {
                eprintln!("ok: {} compiled successfully", args.file);
            } else {
                println!("{}", output);
            }
        }
        Err(error) => {
            emit_diagnostics(color_choice, &files, &[error.to_diagnostic()]);
            process::exit(1);
        }
    }
}

fn emit_diagnostics(
    color_choice: ColorChoice,
    files: &SimpleFiles<String, String>,
    diagnostics: &[Diagnostic<usize>],
) {
    let writer = StandardStream::stderr(color_choice);
    let config = term::Config::default();
    for diagnostic in diagnostics {
        let _ = term::emit_to_write_style(&mut writer.lock(), &config, files, diagnostic);
    }
}
