use anyhow::Result;

use crate::routing::Route;

pub struct RoutesCommand;

impl RoutesCommand {
    pub fn execute(&self) -> Result<()> {
        println!("🧭 NAMED ROUTES");
        println!("───────────────");
        for route in Route::ALL {
            let stage = route
                .stage()
                .map(|stage| format!("stage {} ({})", stage.ordinal(), stage))
                .unwrap_or_else(|| "outside workflow".to_string());
            println!("   {:<16} {:<17} {}", route.name(), route.path(), stage);
        }
        Ok(())
    }
}
