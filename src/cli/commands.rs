use crate::build_check::verify_dist;
use crate::catalog::{find_category, COMPANY_NAME, FAQ, PHONE, SERVICE_CATEGORIES};
use crate::cli::{completions, print_error, print_info, print_success, print_warning};
use crate::components::contact_form::{ERROR_MESSAGE, SUCCESS_MESSAGE};
use crate::config::{Config, ENV_PUBLIC_KEY, ENV_SERVICE_ID, ENV_TEMPLATE_ID};
use crate::core::contact::{ContactField, ContactForm, SubmissionController};
use crate::core::routing::resolve;
use crate::emailjs::EmailJsClient;
use crate::error::SubmitError;
use crate::utils::form::blocking_fields;
use crate::utils::{format_path_for_display, get_config_path, get_log_path};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Happy Visit Home Health in your terminal
#[derive(Parser, Debug)]
#[command(name = "happyvisit", version, about = "Happy Visit Home Health in your terminal", long_about = None, disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Disable colors in the TUI (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_colors: bool,

    /// Open the page at a location, e.g. "/index.html#services"
    #[arg(long, value_name = "LOCATION")]
    pub open: Option<String>,

    /// Start without the translation control (language switches reload the page)
    #[arg(long)]
    pub no_translate: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List service categories, or show one in full
    Services {
        /// Category id, e.g. "skilled-nursing"
        #[arg(long)]
        id: Option<String>,
    },
    /// Print the frequently asked questions
    Faq,
    /// Send a contact message without opening the TUI
    Send {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        message: String,
    },
    /// Show where a location lands after legacy redirects
    Route {
        /// Path with optional query and fragment, e.g. "/lander?x=1#contact"
        location: String,
    },
    /// Check a production build before deploying
    VerifyBuild {
        /// Build output directory
        #[arg(long, default_value = "dist")]
        dist: PathBuf,
        /// Output results as JSON for scripting
        #[arg(long)]
        json: bool,
    },
    /// Configuration file location
    Config,
    /// Shows logs location and how to view them
    Logs,
    /// Generate shell completions
    Completions {
        /// Shell to generate for (detected from the environment if omitted)
        shell: Option<Shell>,
    },
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        match self.command {
            Some(Commands::Services { id }) => Self::cmd_services(id.as_deref()),
            Some(Commands::Faq) => Self::cmd_faq(),
            Some(Commands::Send {
                name,
                email,
                phone,
                message,
            }) => Self::cmd_send(ContactForm {
                name,
                email,
                phone,
                message,
            }),
            Some(Commands::Route { location }) => Self::cmd_route(&location),
            Some(Commands::VerifyBuild { dist, json }) => Self::cmd_verify_build(&dist, json),
            Some(Commands::Config) => Self::cmd_config(),
            Some(Commands::Logs) => Self::cmd_logs(),
            Some(Commands::Completions { shell }) => completions::generate(shell),
            None => {
                // No command provided, launch TUI
                Ok(())
            }
        }
    }

    fn cmd_services(id: Option<&str>) -> Result<()> {
        let Some(id) = id else {
            println!("{} services\n", COMPANY_NAME);
            for category in SERVICE_CATEGORIES {
                println!("{} {} ({})", category.icon, category.title, category.id);
                println!("   {}", category.short_description);
            }
            return Ok(());
        };

        let Some(category) = find_category(id) else {
            print_error(&format!(
                "Unknown service category '{}'. Run 'happyvisit services' to list them.",
                id
            ));
            std::process::exit(1);
        };

        println!("{} {}\n", category.icon, category.title);
        println!("{}\n", category.full_description);
        for service in category.services {
            println!("• {}", service.title);
            println!("  {}", service.description);
            for detail in service.details {
                println!("    - {}", detail);
            }
        }
        println!("\nCall {} to get started.", PHONE);
        Ok(())
    }

    fn cmd_faq() -> Result<()> {
        for (i, entry) in FAQ.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("Q: {}", entry.question);
            println!("A: {}", entry.answer);
        }
        Ok(())
    }

    fn cmd_send(form: ContactForm) -> Result<()> {
        info!("CLI: send command executed");

        let blocking = blocking_fields(&form);
        if !blocking.is_empty() {
            let names: Vec<&str> = blocking.iter().map(ContactField::label).collect();
            print_error(&format!("Missing or invalid: {}", names.join(", ")));
            std::process::exit(1);
        }

        let config_path = get_config_path();
        let config =
            Config::load_or_create(&config_path).context("Failed to load configuration")?;
        let email = config.email.with_env_overrides();
        let client = EmailJsClient::new(email.endpoint.clone());

        let mut controller = SubmissionController::new(email);
        for field in ContactField::ALL {
            controller.update_field(field, form.get(field));
        }

        let runtime = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
        println!("📤 Sending message...");
        match runtime.block_on(controller.submit_with(&client, Instant::now)) {
            Ok(()) => {
                print_success(SUCCESS_MESSAGE);
                Ok(())
            }
            Err(SubmitError::Configuration(e)) => {
                print_error(&format!("Email service not configured: {}", e));
                print_info(&format!(
                    "Set [email] in {} or export {}, {} and {}",
                    format_path_for_display(&config_path),
                    ENV_SERVICE_ID,
                    ENV_TEMPLATE_ID,
                    ENV_PUBLIC_KEY
                ));
                std::process::exit(1);
            }
            Err(SubmitError::Delivery(e)) => {
                print_error(ERROR_MESSAGE);
                print_warning(&e.to_string());
                std::process::exit(1);
            }
        }
    }

    fn cmd_route(location: &str) -> Result<()> {
        let resolved = resolve(location);
        if resolved.redirected {
            println!("{} → {} (legacy redirect)", location, resolved.path);
        } else {
            println!("{} → {}", location, resolved.path);
        }
        if let Some(section) = resolved.section {
            println!("Section: {}", section.title());
        }
        Ok(())
    }

    fn cmd_verify_build(dist: &std::path::Path, json: bool) -> Result<()> {
        if !json {
            println!("🔍 Verifying production build in {}...\n", dist.display());
        }
        let report = verify_dist(dist);

        if json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            report.print();
        }

        if !report.passed() {
            std::process::exit(report.exit_code());
        }
        Ok(())
    }

    fn cmd_config() -> Result<()> {
        let config_path = get_config_path();
        println!("{}", config_path.display());
        Ok(())
    }

    fn cmd_logs() -> Result<()> {
        let log_file = get_log_path();
        println!("{}", log_file.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_send() {
        let cli = Cli::try_parse_from([
            "happyvisit",
            "send",
            "--name",
            "Jo",
            "--email",
            "jo@example.com",
            "--phone",
            "555",
            "--message",
            "Hello",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Commands::Send { ref name, .. }) if name == "Jo"));
    }

    #[test]
    fn test_verify_build_defaults_to_dist() {
        let cli = Cli::try_parse_from(["happyvisit", "verify-build"]).unwrap();
        match cli.command {
            Some(Commands::VerifyBuild { dist, json }) => {
                assert_eq!(dist, PathBuf::from("dist"));
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_tui_flags() {
        let cli =
            Cli::try_parse_from(["happyvisit", "--open", "/index.html#faq", "--no-translate"])
                .unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.open.as_deref(), Some("/index.html#faq"));
        assert!(cli.no_translate);
    }
}
