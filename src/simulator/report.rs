//! Simulation report generation.

use crate::core::game_state::GameState;
use serde::Serialize;
use std::collections::BTreeMap;

/// Summary of one simulated player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimRun {
    pub final_level: u32,
    pub highest_floor: u32,
    pub attempts: u32,
    pub clears: u32,
    pub defeats: u32,
    pub shards_spent: u64,
    pub upgrade_successes: u32,
    pub upgrade_failures: u32,
    pub best_item_level: u8,
    pub shadows_owned: usize,
    pub reached_target: bool,
}

impl SimRun {
    pub fn from_state(state: &GameState, attempts: u32, target_floor: u32) -> Self {
        let stats = state.run_stats();
        let highest_floor = stats.highest_floor_cleared.unwrap_or(0);
        Self {
            final_level: state.character.level,
            highest_floor,
            attempts,
            clears: stats.clears,
            defeats: stats.defeats,
            shards_spent: state.upgrade_stats.shards_spent,
            upgrade_successes: state.upgrade_stats.total_successes,
            upgrade_failures: state.upgrade_stats.total_failures,
            best_item_level: state.equipment.iter().map(|i| i.level).max().unwrap_or(0),
            shadows_owned: state.shadows.len(),
            reached_target: highest_floor >= target_floor,
        }
    }
}

fn average(runs: &[SimRun], f: impl Fn(&SimRun) -> f64) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(f).sum::<f64>() / runs.len() as f64
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub target_floor: u32,
    pub runs_completed: u32,
    pub avg_final_level: f64,
    pub avg_highest_floor: f64,
    pub avg_attempts: f64,
    pub avg_defeats: f64,
    pub avg_shards_spent: f64,
    pub upgrade_success_rate: f64,
    pub avg_best_item_level: f64,
    pub avg_shadows_owned: f64,
    /// Highest floor cleared -> number of runs
    pub floor_distribution: BTreeMap<u32, u32>,
    #[serde(skip)]
    pub runs: Vec<SimRun>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<SimRun>, target_floor: u32) -> Self {
        let successes: u64 = runs.iter().map(|r| r.upgrade_successes as u64).sum();
        let failures: u64 = runs.iter().map(|r| r.upgrade_failures as u64).sum();
        let attempts = successes + failures;

        let mut floor_distribution = BTreeMap::new();
        for run in &runs {
            *floor_distribution.entry(run.highest_floor).or_insert(0) += 1;
        }

        Self {
            num_runs: runs.len() as u32,
            target_floor,
            runs_completed: runs.iter().filter(|r| r.reached_target).count() as u32,
            avg_final_level: average(&runs, |r| r.final_level as f64),
            avg_highest_floor: average(&runs, |r| r.highest_floor as f64),
            avg_attempts: average(&runs, |r| r.attempts as f64),
            avg_defeats: average(&runs, |r| r.defeats as f64),
            avg_shards_spent: average(&runs, |r| r.shards_spent as f64),
            upgrade_success_rate: if attempts == 0 {
                0.0
            } else {
                successes as f64 / attempts as f64
            },
            avg_best_item_level: average(&runs, |r| r.best_item_level as f64),
            avg_shadows_owned: average(&runs, |r| r.shadows_owned as f64),
            floor_distribution,
            runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} reached floor {}\n\n",
            self.num_runs, self.runs_completed, self.target_floor
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Final Level:     {:.1}\n", self.avg_final_level));
        report.push_str(&format!("  Avg Highest Floor:   {:.1}\n", self.avg_highest_floor));
        report.push_str(&format!("  Avg Attempts:        {:.0}\n", self.avg_attempts));
        report.push_str(&format!("  Avg Defeats:         {:.1}\n\n", self.avg_defeats));

        report.push_str("── GEAR ─────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Shards Spent:    {:.0}\n", self.avg_shards_spent));
        report.push_str(&format!(
            "  Upgrade Success:     {:.1}%\n",
            self.upgrade_success_rate * 100.0
        ));
        report.push_str(&format!("  Avg Best Item:       +{:.1}\n", self.avg_best_item_level));
        report.push_str(&format!("  Avg Shadows Owned:   {:.1}\n\n", self.avg_shadows_owned));

        report.push_str("── HIGHEST FLOOR ────────────────────────────────────────────────\n");
        for (floor, count) in &self.floor_distribution {
            let pct = (*count as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  Floor {:3}: {:>5.1}% {}\n", floor, pct, bar));
        }

        report.push_str("\n── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let completion_rate = (self.runs_completed as f64 / self.num_runs.max(1) as f64) * 100.0;
        report.push_str(&format!("  Completion Rate: {:.1}%\n", completion_rate));
        if self.avg_defeats > self.avg_attempts * 0.5 {
            report.push_str("  ⚠️  More than half of all attempts end in defeat\n");
        }
        if self.upgrade_success_rate > 0.0 && self.upgrade_success_rate < 0.4 {
            report.push_str("  ⚠️  Upgrade success below 40% - pity too weak?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");
        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(level: u32, floor: u32, reached: bool) -> SimRun {
        SimRun {
            final_level: level,
            highest_floor: floor,
            attempts: 20,
            clears: floor,
            defeats: 20 - floor,
            shards_spent: 1_000,
            upgrade_successes: 3,
            upgrade_failures: 1,
            best_item_level: 4,
            shadows_owned: 1,
            reached_target: reached,
        }
    }

    #[test]
    fn test_report_generation() {
        let report = SimReport::from_runs(vec![run(20, 10, true), run(15, 8, false)], 10);
        assert_eq!(report.num_runs, 2);
        assert_eq!(report.runs_completed, 1);
        assert!((report.avg_final_level - 17.5).abs() < 1e-9);
        assert!((report.upgrade_success_rate - 0.75).abs() < 1e-9);
        assert_eq!(report.floor_distribution.get(&10), Some(&1));
        assert!(report.to_text().contains("Floor  10"));
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs(Vec::new(), 5);
        assert_eq!(report.avg_final_level, 0.0);
        assert!(report.to_json().contains("\"num_runs\": 0"));
    }
}
