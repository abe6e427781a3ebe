use anyhow::Result;

use crate::config::CarotidScreenConfig;
use crate::services::{Credentials, GeoPoint, PatientId};
use crate::session::{AppShell, Collaborators, ScreeningError};

pub struct DemoCommand {
    pub credentials: Credentials,
    pub patient: Option<String>,
    pub location: GeoPoint,
    pub fast: bool,
}

impl DemoCommand {
    pub async fn execute(&self, config: &CarotidScreenConfig) -> Result<()> {
        let mut config = config.clone();
        if self.fast {
            config.app.splash_delay_ms = 0;
            config.simulation.scan_delay_ms = 0;
            config.simulation.analysis_delay_ms = 0;
        }

        let mut shell = AppShell::new(&config, Collaborators::demo(&config));

        println!("🩺 CAROTID SCREENING DEMO");
        println!("=========================");
        println!();

        print!("⏳ Splash screen... ");
        flush();
        let route = shell.finish_splash().await;
        println!("✅ → {route}");

        print!("🔑 Signing in as {}... ", self.credentials.principal());
        flush();
        let session = shell.login(&self.credentials).await?;
        println!("✅");
        println!("   {}", session.navigator().indicator());
        println!();

        match &self.patient {
            Some(patient) => step(session.start_screening_for(PatientId::new(patient.clone())))?,
            None => step(session.start_screening())?,
        };
        println!("🧑 Patient: {}", session.patient_id());
        println!("   {}", session.navigator().indicator());

        print!("📷 Capturing carotid scan... ");
        flush();
        let capture = step(session.capture_scan().await)?;
        println!("✅");
        println!(
            "   Frame {} ({} frames, {}% quality)",
            capture.frame_id, capture.frame_count, capture.image_quality_pct
        );
        println!("   {}", session.navigator().indicator());

        print!("🧠 Running AI analysis... ");
        flush();
        let analysis = step(session.run_analysis().await)?;
        println!("✅");
        println!("   {}", session.navigator().indicator());
        println!();

        println!("📊 TRIAGE RESULT:");
        println!("   IMT: {:.2} mm", analysis.imt_mm);
        println!("   Risk: {}", analysis.risk);
        println!(
            "   Mask: {}x{} ({})",
            analysis.mask_shape.0, analysis.mask_shape.1, analysis.model_version
        );
        println!();

        step(session.confirm_results())?;
        println!("   {}", session.navigator().indicator());

        print!("📨 Submitting referral... ");
        flush();
        let ack = step(session.submit_referral(self.location).await)?;
        println!("✅");
        println!("   Reference {} at {}", ack.reference, ack.facility);
        println!("   {}", session.navigator().indicator());
        println!();

        shell.logout();
        println!("👋 Session closed ({})", shell.current_route());
        Ok(())
    }
}

/// Report a failed screening step and whether the same screen can try again
fn step<T>(result: Result<T, ScreeningError>) -> Result<T> {
    result.map_err(|err| {
        println!("❌");
        if err.is_retryable() {
            println!("   {err} (retry from the same screen)");
        } else {
            println!("   {err}");
        }
        err.into()
    })
}

fn flush() {
    let _ = std::io::Write::flush(&mut std::io::stdout());
}
