use serde::Serialize;

/// Step counter as reported by the journal API. Values are already decoded;
/// negative counts from the wire arrive here as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WorkflowInfo {
    pub current_step: u32,
    pub max_steps: u32,
    /// Percentage the server computed. Informational only.
    pub reported_percentage: Option<f64>,
}

impl WorkflowInfo {
    pub fn new(current_step: u32, max_steps: u32) -> Self {
        Self {
            current_step,
            max_steps,
            reported_percentage: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkflowProgress {
    pub current_step: u32,
    pub max_steps: u32,
    pub percentage: f64,
}

impl WorkflowProgress {
    pub fn percentage_label(&self) -> String {
        format!("{:.2}%", self.percentage)
    }
}

pub fn compute_progress(info: &WorkflowInfo) -> WorkflowProgress {
    let percentage = if info.max_steps == 0 {
        0.0
    } else {
        (100.0 * f64::from(info.current_step) / f64::from(info.max_steps)).clamp(0.0, 100.0)
    };

    if let Some(reported) = info.reported_percentage {
        if (reported - percentage).abs() > 0.01 {
            tracing::debug!(
                reported,
                computed = percentage,
                "server progress percentage disagrees with step counter"
            );
        }
    }

    WorkflowProgress {
        current_step: info.current_step,
        max_steps: info.max_steps,
        percentage,
    }
}
