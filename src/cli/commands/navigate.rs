use anyhow::Result;

use crate::workflow::{NavigationOutcome, WorkflowNavigator, WorkflowStage};

pub struct NavigateCommand {
    pub from: WorkflowStage,
    pub to: WorkflowStage,
}

impl NavigateCommand {
    pub fn execute(&self) -> Result<()> {
        // Reach the starting stage the only way a worker can: by completing stages
        let mut navigator = WorkflowNavigator::new();
        while navigator.current_stage() != self.from {
            navigator.complete_stage();
        }

        println!("{}", navigator.indicator());
        match navigator.request_navigate(self.to) {
            NavigationOutcome::Unchanged { stage } => {
                println!("⏸️  Already on {stage}; nothing to do");
            }
            NavigationOutcome::Navigated { from, to } => {
                println!("✅ {from} → {to}");
            }
            NavigationOutcome::Rejected { current, target } => {
                println!("🚫 {target} is ahead of {current}; tap ignored");
            }
        }

        let history: Vec<&str> = navigator
            .history()
            .routes()
            .iter()
            .map(|route| route.name())
            .collect();
        println!("{}", navigator.indicator());
        println!("📚 History: {}", history.join(" → "));
        Ok(())
    }
}
