use anyhow::Result;

use crate::workflow::{render_indicator, WorkflowStage};

pub struct IndicatorCommand {
    pub stage: WorkflowStage,
    pub json: bool,
}

impl IndicatorCommand {
    pub fn new(stage: WorkflowStage) -> Self {
        Self { stage, json: false }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn execute(&self) -> Result<()> {
        let row = render_indicator(self.stage);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&row)?);
            return Ok(());
        }

        println!("{row}");
        for segment in &row.segments {
            println!(
                "   {} {:<10} icon={:<11} state={:?}{}",
                segment.stage.ordinal(),
                segment.label,
                segment.icon,
                segment.state,
                if segment.tappable { "" } else { " (locked)" }
            );
        }
        Ok(())
    }
}
