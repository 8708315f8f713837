use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// reclass - rewrite compiled classes in directories and jars, incrementally
#[derive(Parser, Debug)]
#[command(name = "reclass")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process one invocation manifest
    Run(RunArgs),

    /// Delete everything under the output root
    Clean(OutputArgs),
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Config file (defaults to ./reclass.toml, then the user config)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output root (overrides config and RECLASS_OUTPUT_ROOT)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Invocation manifest written by the build tool
    #[arg(short, long)]
    pub manifest: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,

    /// External transform program (reads a class on stdin, writes it on stdout)
    #[arg(long, value_name = "PROG")]
    pub transform_cmd: Option<String>,

    /// Argument for the transform program (repeatable)
    #[arg(
        long = "transform-arg",
        value_name = "ARG",
        requires = "transform_cmd",
        allow_hyphen_values = true
    )]
    pub transform_args: Vec<String>,

    /// Reconcile units in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Stop starting new units after the first failure
    #[arg(long)]
    pub fail_fast: bool,
}

impl RunArgs {
    /// Transform command line given on the command line, if any
    pub fn transform_argv(&self) -> Option<Vec<String>> {
        let program = self.transform_cmd.clone()?;
        let mut argv = vec![program];
        argv.extend(self.transform_args.iter().cloned());
        Some(argv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_run_with_transform_args() {
        let cli = Cli::try_parse_from([
            "reclass",
            "run",
            "--manifest",
            "m.toml",
            "--transform-cmd",
            "rewrite",
            "--transform-arg",
            "--strip",
            "--transform-arg",
            "debug",
            "--parallel",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert!(args.parallel);
        assert_eq!(
            args.transform_argv().unwrap(),
            vec!["rewrite", "--strip", "debug"]
        );
    }

    #[test]
    fn transform_arg_requires_command() {
        let result = Cli::try_parse_from([
            "reclass",
            "run",
            "--manifest",
            "m.toml",
            "--transform-arg",
            "x",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_clean_with_global_json() {
        let cli = Cli::try_parse_from(["reclass", "clean", "--output", "out", "--json"]).unwrap();
        assert!(cli.json);
        let Commands::Clean(args) = cli.command else {
            panic!("expected clean");
        };
        assert_eq!(args.output, Some(PathBuf::from("out")));
    }
}
