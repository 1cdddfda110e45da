//! CLI argument parsing with clap.

use clap::{Args, Parser, Subcommand};

/// AI image studio - generate and edit images with Gemini.
#[derive(Parser, Debug)]
#[command(name = "imgstudio", version, about)]
pub struct Cli {
    /// The studio operation to run.
    #[command(subcommand)]
    pub command: Command,

    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Studio operations.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate an image from a text prompt.
    Generate(SubmitArgs),

    /// Edit an existing image with a text instruction.
    Edit {
        /// Prompt and output options.
        #[command(flatten)]
        args: SubmitArgs,

        /// Source image file (max 5MB).
        #[arg(short = 'i', long)]
        image: String,
    },

    /// Submit a manual payment request for more credits (mock).
    Topup {
        /// Plan tier in credits: 50, 100, or 200.
        #[arg(long, default_value = "50")]
        plan: u32,

        /// Transaction reference from the manual payment.
        #[arg(long)]
        trx_id: String,
    },
}

/// Shared arguments for generate and edit submissions.
#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Text prompt (generate) or edit instruction (edit).
    #[arg(conflicts_with = "prompt_file")]
    pub prompt: Option<String>,

    /// Path to a file containing the prompt text.
    #[arg(short = 'p', long, conflicts_with = "prompt")]
    pub prompt_file: Option<String>,

    /// Model name (defaults to the configured model).
    #[arg(short, long)]
    pub model: Option<String>,

    /// Output format: jpeg, png, webp (defaults to the configured format).
    #[arg(short, long)]
    pub format: Option<String>,

    /// Output file path (auto-generated if not specified).
    #[arg(short, long)]
    pub output: Option<String>,
}

impl SubmitArgs {
    /// Resolve the prompt from either the positional argument or the file flag.
    ///
    /// # Errors
    ///
    /// Returns an error if neither prompt nor prompt-file is provided,
    /// or if the file cannot be read.
    pub fn resolve_prompt(&self) -> Result<String, std::io::Error> {
        if let Some(ref text) = self.prompt {
            Ok(text.clone())
        } else if let Some(ref path) = self.prompt_file {
            std::fs::read_to_string(path)
        } else {
            Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Provide a prompt string or use -p/--prompt-file",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_positional_prompt() {
        let cli = Cli::parse_from(["imgstudio", "generate", "a cat"]);
        let Command::Generate(args) = cli.command else { panic!("expected generate") };
        assert_eq!(args.prompt.as_deref(), Some("a cat"));
        assert!(args.prompt_file.is_none());
        assert_eq!(args.resolve_prompt().unwrap(), "a cat");
    }

    #[test]
    fn generate_prompt_file_flag() {
        let dir = std::env::temp_dir().join("imgstudio_cli_pf_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("prompt.txt");
        std::fs::write(&path, "prompt from file").unwrap();

        let cli = Cli::parse_from(["imgstudio", "generate", "-p", path.to_str().unwrap()]);
        let Command::Generate(args) = cli.command else { panic!("expected generate") };
        assert!(args.prompt.is_none());
        assert_eq!(args.resolve_prompt().unwrap(), "prompt from file");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn generate_defaults_come_from_config() {
        let cli = Cli::parse_from(["imgstudio", "generate", "a cat"]);
        let Command::Generate(args) = cli.command else { panic!("expected generate") };
        assert!(args.model.is_none());
        assert!(args.format.is_none());
        assert!(args.output.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn edit_requires_image_flag() {
        assert!(Cli::try_parse_from(["imgstudio", "edit", "add a hat"]).is_err());

        let cli = Cli::parse_from(["imgstudio", "edit", "-i", "cat.png", "add a hat"]);
        let Command::Edit { args, image } = cli.command else { panic!("expected edit") };
        assert_eq!(image, "cat.png");
        assert_eq!(args.prompt.as_deref(), Some("add a hat"));
    }

    #[test]
    fn generate_all_options() {
        let cli = Cli::parse_from([
            "imgstudio",
            "generate",
            "-m",
            "gemini-3-pro-image-preview",
            "-f",
            "jpeg",
            "-o",
            "out.jpg",
            "-v",
            "a landscape",
        ]);
        assert!(cli.verbose);
        let Command::Generate(args) = cli.command else { panic!("expected generate") };
        assert_eq!(args.model.as_deref(), Some("gemini-3-pro-image-preview"));
        assert_eq!(args.format.as_deref(), Some("jpeg"));
        assert_eq!(args.output.as_deref(), Some("out.jpg"));
        assert_eq!(args.prompt.as_deref(), Some("a landscape"));
    }

    #[test]
    fn topup_parses_plan_and_trx() {
        let cli = Cli::parse_from(["imgstudio", "topup", "--plan", "100", "--trx-id", "trx-42"]);
        let Command::Topup { plan, trx_id } = cli.command else { panic!("expected topup") };
        assert_eq!(plan, 100);
        assert_eq!(trx_id, "trx-42");
    }

    #[test]
    fn topup_default_plan() {
        let cli = Cli::parse_from(["imgstudio", "topup", "--trx-id", "trx-42"]);
        let Command::Topup { plan, .. } = cli.command else { panic!("expected topup") };
        assert_eq!(plan, 50);
    }

    #[test]
    fn no_prompt_errors() {
        let cli = Cli::parse_from(["imgstudio", "generate"]);
        let Command::Generate(args) = cli.command else { panic!("expected generate") };
        assert!(args.resolve_prompt().is_err());
    }
}
