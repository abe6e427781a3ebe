use anyhow::Result;
use clap::Parser;

use carotid_screen::cli::commands::{DemoCommand, IndicatorCommand, NavigateCommand, RoutesCommand};
use carotid_screen::cli::{Cli, Commands};
use carotid_screen::services::{Credentials, GeoPoint};
use carotid_screen::{config, init_config, init_telemetry, shutdown_telemetry};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            show_usage();
            Ok(())
        }
        Some(Commands::Routes) => RoutesCommand.execute(),
        Some(Commands::Indicator { stage, json }) => {
            IndicatorCommand::new(stage).with_json(json).execute()
        }
        Some(Commands::Navigate { from, to }) => NavigateCommand { from, to }.execute(),
        Some(Commands::Demo {
            email,
            password,
            phone,
            patient,
            lat,
            lon,
            fast,
        }) => {
            init_config()?;
            let config = config()?;
            init_telemetry(&config.observability)?;

            let credentials = match phone {
                Some(number) => Credentials::Phone { number },
                None => Credentials::EmailPassword { email, password },
            };
            let command = DemoCommand {
                credentials,
                patient,
                location: GeoPoint { lat, lon },
                fast,
            };

            let result = tokio::runtime::Runtime::new()?
                .block_on(async { command.execute(config).await });
            shutdown_telemetry();
            result
        }
    }
}

fn show_usage() {
    println!("🩺 CAROTID SCREEN - Screening Workflow");
    println!("======================================");
    println!();
    println!("Workflow: Dashboard → Scan → Analysis → Results → Referral");
    println!();
    println!("   carotid-screen demo                      Run one simulated screening");
    println!("   carotid-screen indicator --stage scan    Render the step indicator");
    println!("   carotid-screen navigate --from results --to scan");
    println!("   carotid-screen routes                    List named routes");
}
