use clap::{Parser, Subcommand};

use crate::workflow::WorkflowStage;

pub mod commands;

#[derive(Parser)]
#[command(name = "carotid-screen")]
#[command(about = "Carotid IMT screening workflow: scan, AI analysis, triage and referral")]
#[command(long_about = "carotid-screen drives the five-stage screening workflow used by community \
                       health workers. Stages can be revisited through the step indicator but never \
                       skipped. Run 'carotid-screen demo' to walk through one simulated screening.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every named route and its path
    Routes,
    /// Render the step indicator for a stage
    Indicator {
        /// Stage currently on screen
        #[arg(long, default_value = "dashboard", help = "Stage name (dashboard, scan, analysis, results, referral) or ordinal 1-5")]
        stage: WorkflowStage,
        /// Print the indicator as JSON
        #[arg(long, help = "Emit the rendered segments as JSON")]
        json: bool,
    },
    /// Check whether an indicator tap is allowed and show the resulting history
    Navigate {
        /// Stage the worker is on
        #[arg(long, help = "Current stage")]
        from: WorkflowStage,
        /// Stage the worker tapped
        #[arg(long, help = "Tapped stage")]
        to: WorkflowStage,
    },
    /// Run one simulated screening session end to end with the demo collaborators
    Demo {
        /// Sign in with an email address
        #[arg(long, default_value = "chw@example.org", help = "Email used for the demo login")]
        email: String,
        /// Password for the email login
        #[arg(long, default_value = "demo", help = "Password used for the demo login")]
        password: String,
        /// Sign in with a phone number instead of email
        #[arg(long, help = "Use phone login instead of email")]
        phone: Option<String>,
        /// Patient to screen (defaults to the configured demo patient)
        #[arg(long, help = "Patient ID for this screening")]
        patient: Option<String>,
        /// Referral latitude
        #[arg(long, default_value = "-1.2921", allow_hyphen_values = true, help = "Latitude attached to the referral")]
        lat: f64,
        /// Referral longitude
        #[arg(long, default_value = "36.8219", allow_hyphen_values = true, help = "Longitude attached to the referral")]
        lon: f64,
        /// Skip all simulated delays
        #[arg(long, help = "Run without splash and processing delays")]
        fast: bool,
    },
}
