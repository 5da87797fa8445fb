//! CLI argument definitions for hudstats.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hudstats_core::Section;

#[derive(Parser)]
#[command(name = "hudstats")]
#[command(about = "Poker HUD statistics dashboard", version)]
pub struct Args {
    /// Settings file (default: hudstats.toml in the data directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding persisted configuration
    #[arg(long, env = "HUDSTATS_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// API endpoint URL
    #[arg(long, env = "HUDSTATS_API_ENDPOINT")]
    pub api_endpoint: Option<String>,

    /// API token (overrides the stored session)
    #[arg(long, env = "HUDSTATS_API_TOKEN")]
    pub api_token: Option<String>,

    /// Room to query
    #[arg(long)]
    pub room: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show or change the HUD layout
    Hud {
        #[command(subcommand)]
        action: HudAction,
    },
    /// Manage custom stat colors
    Colors {
        #[command(subcommand)]
        action: ColorsAction,
    },
    /// Copy a player's selected stats to the clipboard
    Copy {
        /// Player name
        player: String,
        /// Add a stat to the selection
        #[arg(long, value_name = "TITLE=VALUE")]
        add: Vec<String>,
        /// Remove a stat from the selection
        #[arg(long, value_name = "TITLE")]
        remove: Vec<String>,
    },
    /// Suggest player names, typing each query in turn
    Search {
        /// Successive query texts
        #[arg(required = true)]
        queries: Vec<String>,
    },
    /// Store an API token
    Login {
        /// Token issued by the web service
        token: String,
    },
    /// Forget the stored API token
    Logout,
    /// List the stat catalog
    Catalog {
        /// Only this section
        #[arg(long)]
        section: Option<Section>,
    },
}

#[derive(Subcommand)]
pub enum HudAction {
    /// Print visible stats per section
    Show {
        /// Only this section
        #[arg(long)]
        section: Option<Section>,
        /// Show premium stats as unlocked
        #[arg(long)]
        elevated: bool,
    },
    /// Show or hide a stat
    Toggle { section: Section, id: String },
    /// Add or remove a stat from the auto-copy set
    AutoCopy { id: String },
    /// Put the given stats first in a section
    Order {
        section: Section,
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Restore the default layout
    Reset,
}

#[derive(Subcommand)]
pub enum ColorsAction {
    /// Print the palette and current customizations
    List,
    /// Mark or unmark a stat as custom-colored
    Toggle { id: String },
    /// Assign a palette color to a stat
    Set { id: String, color: String },
    /// Choose the global color
    Global { color: String },
    /// Switch the global color override on or off
    UseGlobal,
    /// Assign a palette color to every custom stat
    ApplyAll { color: String },
    /// Remove all customizations
    Clear,
    /// Write the configuration as JSON
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Replace the configuration from a JSON file
    Import { file: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_requires_command() {
        assert!(Args::try_parse_from(["hudstats"]).is_err());
    }

    #[test]
    fn test_parse_global_options() {
        let args = Args::try_parse_from([
            "hudstats",
            "--api-endpoint",
            "https://stats.example.com",
            "--api-token",
            "tok",
            "--room",
            "nl50",
            "--data-dir",
            "/tmp/hud",
            "--config",
            "custom.toml",
            "logout",
        ])
        .unwrap();
        assert_eq!(args.api_endpoint.as_deref(), Some("https://stats.example.com"));
        assert_eq!(args.api_token.as_deref(), Some("tok"));
        assert_eq!(args.room.as_deref(), Some("nl50"));
        assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/hud")));
        assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(args.command, Command::Logout));
    }

    #[test]
    fn test_parse_api_token() {
        let args = Args::try_parse_from(["hudstats", "--api-token", "x", "catalog"]).unwrap();
        assert_eq!(args.api_token.as_deref(), Some("x"));
        assert!(matches!(args.command, Command::Catalog { section: None }));
    }

    #[test]
    fn test_env_fallbacks() {
        let command = Args::command();
        let env_of = |id: &str| {
            command
                .get_arguments()
                .find(|arg| arg.get_id() == id)
                .and_then(|arg| arg.get_env())
                .and_then(|env| env.to_str())
                .map(str::to_string)
        };
        assert_eq!(env_of("api_endpoint").as_deref(), Some("HUDSTATS_API_ENDPOINT"));
        assert_eq!(env_of("api_token").as_deref(), Some("HUDSTATS_API_TOKEN"));
        assert_eq!(env_of("data_dir").as_deref(), Some("HUDSTATS_DATA_DIR"));
        assert_eq!(env_of("room"), None);
        assert_eq!(env_of("config"), None);
    }

    #[test]
    fn test_parse_hud_show_defaults() {
        let args = Args::try_parse_from(["hudstats", "hud", "show"]).unwrap();
        match args.command {
            Command::Hud {
                action: HudAction::Show { section, elevated },
            } => {
                assert!(section.is_none());
                assert!(!elevated);
            }
            _ => panic!("Expected hud show"),
        }
    }

    #[test]
    fn test_parse_section_values() {
        for (raw, expected) in [
            ("preflop", Section::Preflop),
            ("Flop", Section::Flop),
            ("TURN", Section::Turn),
            ("showdown", Section::Showdown),
        ] {
            let args =
                Args::try_parse_from(["hudstats", "hud", "show", "--section", raw]).unwrap();
            match args.command {
                Command::Hud {
                    action: HudAction::Show { section, .. },
                } => assert_eq!(section, Some(expected)),
                _ => panic!("Expected hud show"),
            }
        }
        assert!(Args::try_parse_from(["hudstats", "hud", "toggle", "preflopp", "VPIP"]).is_err());
        assert!(Args::try_parse_from(["hudstats", "catalog", "--section", "draw"]).is_err());
    }

    #[test]
    fn test_parse_hud_toggle() {
        let args = Args::try_parse_from(["hudstats", "hud", "toggle", "preflop", "LF"]).unwrap();
        match args.command {
            Command::Hud {
                action: HudAction::Toggle { section, id },
            } => {
                assert_eq!(section, Section::Preflop);
                assert_eq!(id, "LF");
            }
            _ => panic!("Expected hud toggle"),
        }
    }

    #[test]
    fn test_parse_hud_order() {
        let args =
            Args::try_parse_from(["hudstats", "hud", "order", "river", "BR", "CBR"]).unwrap();
        match args.command {
            Command::Hud {
                action: HudAction::Order { section, ids },
            } => {
                assert_eq!(section, Section::River);
                assert_eq!(ids, vec!["BR", "CBR"]);
            }
            _ => panic!("Expected hud order"),
        }
        assert!(Args::try_parse_from(["hudstats", "hud", "order", "river"]).is_err());
    }

    #[test]
    fn test_parse_hud_auto_copy_and_reset() {
        let args = Args::try_parse_from(["hudstats", "hud", "auto-copy", "AF"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Hud { action: HudAction::AutoCopy { ref id } } if id == "AF"
        ));
        let args = Args::try_parse_from(["hudstats", "hud", "reset"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Hud {
                action: HudAction::Reset
            }
        ));
    }

    #[test]
    fn test_parse_colors_commands() {
        let args = Args::try_parse_from(["hudstats", "colors", "set", "VPIP", "red"]).unwrap();
        match args.command {
            Command::Colors {
                action: ColorsAction::Set { id, color },
            } => {
                assert_eq!(id, "VPIP");
                assert_eq!(color, "red");
            }
            _ => panic!("Expected colors set"),
        }

        let args = Args::try_parse_from(["hudstats", "colors", "apply-all", "teal"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Colors { action: ColorsAction::ApplyAll { ref color } } if color == "teal"
        ));

        let action = |name: &str| match Args::try_parse_from(["hudstats", "colors", name]) {
            Ok(Args {
                command: Command::Colors { action },
                ..
            }) => action,
            _ => panic!("Expected colors {}", name),
        };
        assert!(matches!(action("use-global"), ColorsAction::UseGlobal));
        assert!(matches!(action("list"), ColorsAction::List));
        assert!(matches!(action("clear"), ColorsAction::Clear));
    }

    #[test]
    fn test_parse_colors_export_import() {
        let args =
            Args::try_parse_from(["hudstats", "colors", "export", "-o", "colors.json"]).unwrap();
        match args.command {
            Command::Colors {
                action: ColorsAction::Export { output },
            } => assert_eq!(output, Some(PathBuf::from("colors.json"))),
            _ => panic!("Expected colors export"),
        }

        let args = Args::try_parse_from(["hudstats", "colors", "import", "colors.json"]).unwrap();
        match args.command {
            Command::Colors {
                action: ColorsAction::Import { file },
            } => assert_eq!(file, PathBuf::from("colors.json")),
            _ => panic!("Expected colors import"),
        }
    }

    #[test]
    fn test_parse_copy_with_toggles() {
        let args = Args::try_parse_from([
            "hudstats",
            "copy",
            "villain",
            "--add",
            "Ganancias USD=$-15.7",
            "--remove",
            "PFR",
            "--remove",
            "3Bet",
        ])
        .unwrap();
        match args.command {
            Command::Copy {
                player,
                add,
                remove,
            } => {
                assert_eq!(player, "villain");
                assert_eq!(add, vec!["Ganancias USD=$-15.7"]);
                assert_eq!(remove, vec!["PFR", "3Bet"]);
            }
            _ => panic!("Expected copy"),
        }
    }

    #[test]
    fn test_parse_search_requires_query() {
        assert!(Args::try_parse_from(["hudstats", "search"]).is_err());
        let args = Args::try_parse_from(["hudstats", "search", "al", "ali", "alic"]).unwrap();
        match args.command {
            Command::Search { queries } => assert_eq!(queries, vec!["al", "ali", "alic"]),
            _ => panic!("Expected search"),
        }
    }

    #[test]
    fn test_parse_login_and_catalog() {
        let args = Args::try_parse_from(["hudstats", "login", "tok123"]).unwrap();
        assert!(matches!(args.command, Command::Login { ref token } if token == "tok123"));

        let args =
            Args::try_parse_from(["hudstats", "catalog", "--section", "showdown"]).unwrap();
        match args.command {
            Command::Catalog { section } => assert_eq!(section, Some(Section::Showdown)),
            _ => panic!("Expected catalog"),
        }
    }
}
