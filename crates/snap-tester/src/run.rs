//! Implementation for the `classify` and `run` subcommands.

use std::{io::Write, sync::Arc};

use serde::Serialize;
use snap_winops::{Action, MoveOutcome, Positioner, ResolverConfig, classify_bits, geom::Rect};
use tracing::{info, warn};

use crate::{
    cli::{ClassifyArgs, RunArgs},
    error::{Error, Result},
    scenario::{Scenario, ScenarioDesktop, load_scenario, load_settings},
};

/// Parse an action argument into raw flag bits.
///
/// Accepts the text form (`left_half+next_display`) or a raw value in
/// decimal or `0x` hexadecimal. Raw values are validated by the decoder, not
/// here, so undefined bits surface as decoder errors.
fn parse_action_bits(raw: &str) -> Result<u32> {
    let s = raw.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))
        && let Ok(bits) = u32::from_str_radix(hex, 16)
    {
        return Ok(bits);
    }
    if let Ok(bits) = s.parse::<u32>() {
        return Ok(bits);
    }
    Ok(s.parse::<Action>()?.bits())
}

/// Print the operation shape for each action.
pub fn classify(args: &ClassifyArgs, out: &mut impl Write) -> Result<()> {
    if args.actions.is_empty() {
        return Err(Error::NoActions);
    }
    let mut rejected = 0;
    for raw in &args.actions {
        let bits = parse_action_bits(raw)?;
        match classify_bits(bits) {
            Ok(shape) => writeln!(out, "{raw}: {shape}")?,
            Err(err) => {
                rejected += 1;
                writeln!(out, "{raw}: {err}")?;
            }
        }
    }
    if rejected > 0 {
        return Err(Error::Rejected(rejected));
    }
    Ok(())
}

/// One line of the `run` report.
#[derive(Debug, Serialize)]
struct StepReport<'a> {
    step: usize,
    action: &'a str,
    outcome: &'static str,
    display: Option<u32>,
    display_index: Option<usize>,
    local: Option<Rect>,
    global: Option<Rect>,
}

impl<'a> StepReport<'a> {
    fn new(step: usize, action: &'a str, outcome: &MoveOutcome) -> Self {
        let label = match outcome {
            MoveOutcome::NoWindow => "no_window",
            MoveOutcome::Unchanged(_) => "unchanged",
            MoveOutcome::Moved(_) => "moved",
        };
        let target = outcome.target();
        Self {
            step,
            action,
            outcome: label,
            display: target.map(|t| t.display.id.0),
            display_index: target.map(|t| t.display_index),
            local: target.map(|t| t.rect),
            global: target.map(|t| t.global_rect()),
        }
    }

    fn render_text(&self) -> String {
        match (self.display, self.display_index, self.local, self.global) {
            (Some(id), Some(idx), Some(local), Some(global)) => format!(
                "step {} {}: {} -> display {} [{}] local {} global {}",
                self.step, self.action, self.outcome, id, idx, local, global
            ),
            _ => format!("step {} {}: {}", self.step, self.action, self.outcome),
        }
    }
}

/// Apply the actions in order to a scenario and report each step.
///
/// Returns the final scenario state.
pub fn run_scenario(
    scenario: Scenario,
    config: ResolverConfig,
    actions: &[String],
    json: bool,
    out: &mut impl Write,
) -> Result<Scenario> {
    if actions.is_empty() {
        return Err(Error::NoActions);
    }
    let desk = Arc::new(ScenarioDesktop::new(scenario));
    let positioner = Positioner::new(desk.clone(), desk.clone(), desk.clone()).with_config(config);
    info!(steps = actions.len(), ?config, "Scenario actions queued");

    for (idx, raw) in actions.iter().enumerate() {
        let step = idx + 1;
        let bits = parse_action_bits(raw)?;
        let outcome = positioner.move_frontmost_window_bits(bits).map_err(|err| {
            warn!(step, action = raw.as_str(), %err, "Step failed");
            err
        })?;
        let report = StepReport::new(step, raw, &outcome);
        if json {
            writeln!(out, "{}", serde_json::to_string(&report)?)?;
        } else {
            writeln!(out, "{}", report.render_text())?;
        }
    }
    Ok(desk.snapshot())
}

/// Run the `run` subcommand.
pub fn run(args: &RunArgs, out: &mut impl Write) -> Result<()> {
    let scenario = load_scenario(&args.scenario)?;
    let config = match &args.settings {
        Some(path) => load_settings(path)?,
        None => ResolverConfig::default(),
    };
    let final_state = run_scenario(scenario, config, &args.actions, args.json, out)?;
    if let Some(w) = final_state.window {
        info!(window = %w.id, frame = %w.frame, "Final window frame");
    }
    Ok(())
}
