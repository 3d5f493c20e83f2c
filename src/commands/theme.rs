use clap::{Args, Subcommand};

use crate::vault::Vault;

#[derive(Args)]
pub struct ThemeCommand {
    #[command(subcommand)]
    pub command: ThemeSubcommand,
}

#[derive(Subcommand)]
pub enum ThemeSubcommand {
    /// Show the active theme and where it comes from
    Show,

    /// Switch between dark and light and remember the choice
    Toggle,
}

impl ThemeCommand {
    pub fn run(&self, vault: &mut Vault) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ThemeSubcommand::Show => {
                println!("theme: {}", theme_name(vault.theme.is_dark()));
                if vault.theme.has_explicit_preference() {
                    println!("  source: saved choice");
                } else {
                    println!("  source: system preference");
                }
                println!("display marker: {}", theme_name(vault.display.is_dark()));
                Ok(())
            }

            ThemeSubcommand::Toggle => {
                let dark = vault.theme.toggle_theme();
                println!("Switched to {} theme.", theme_name(dark));
                Ok(())
            }
        }
    }
}

fn theme_name(dark: bool) -> &'static str {
    if dark {
        "dark"
    } else {
        "light"
    }
}
