use crate::session::{ModeKind, SessionResult};

/// Final scores of past sessions, oldest first.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScoreHistory {
    #[serde(default, rename = "gridshot_high_scores", alias = "gridshot")]
    pub gridshot: Vec<f64>,
    #[serde(default, rename = "tracking_high_scores", alias = "tracking")]
    pub tracking: Vec<f64>,
}

impl ScoreHistory {
    pub fn record(&mut self, result: &SessionResult) {
        self.scores_mut(result.kind).push(result.score.as_f64());
    }

    pub fn scores(&self, kind: ModeKind) -> &[f64] {
        match kind {
            ModeKind::Gridshot => &self.gridshot,
            ModeKind::Tracking => &self.tracking,
        }
    }

    fn scores_mut(&mut self, kind: ModeKind) -> &mut Vec<f64> {
        match kind {
            ModeKind::Gridshot => &mut self.gridshot,
            ModeKind::Tracking => &mut self.tracking,
        }
    }

    pub fn best(&self, kind: ModeKind) -> Option<f64> {
        self.scores(kind)
            .iter()
            .copied()
            .filter(|s| s.is_finite())
            .fold(None, |best, s| Some(best.map_or(s, |b: f64| b.max(s))))
    }
}
