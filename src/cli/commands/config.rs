//! Config command handler

use crate::args::ConfigSubcommand;
use gradebook::config::Config;
use std::io::{self, Write};

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None => show(config, None),
        Some(ConfigSubcommand::Get { key }) => show(config, key),
        Some(ConfigSubcommand::Set { key, value }) => {
            if let Err(e) = config.set(&key, &value) {
                eprintln!("{e}");
                std::process::exit(1);
            }
            persist(config);
            println!("✓ Set {key} = {value}");
        }
        Some(ConfigSubcommand::Unset { key }) => {
            if let Err(e) = config.unset(&key, defaults) {
                eprintln!("{e}");
                std::process::exit(1);
            }
            persist(config);
            println!("✓ Reset {key} to default");
        }
        Some(ConfigSubcommand::Reset) => reset(),
    }
}

/// Print one config value, or all of them when no key is given
fn show(config: &Config, key: Option<String>) {
    if let Some(k) = key {
        match config.get(&k) {
            Some(value) => println!("{value}"),
            None => eprintln!("Unknown config key: '{k}'"),
        }
    } else {
        println!("\n=== Configuration ===\n");
        print!("{config}");
    }
}

/// Write the config file, exiting on failure
fn persist(config: &Config) {
    if let Err(e) = config.save() {
        eprintln!("Failed to save config: {e}");
        std::process::exit(1);
    }
}

/// Delete the config file after asking for confirmation
fn reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    if response.trim().eq_ignore_ascii_case("y") || response.trim().eq_ignore_ascii_case("yes") {
        if let Err(e) = Config::reset() {
            eprintln!("Failed to remove config file: {e}");
            std::process::exit(1);
        }
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
}
