//! Plain-text rendering of a roadmap and of the surrounding status messages.

use std::fmt::Write;

use career_models::CareerRoadmap;

use crate::form::FormError;
use crate::state::PlanState;

pub const RESET_PROMPT: &str = "Generate Another Plan? [y/N]";

/// Renders the roadmap sections in display order: strategy, skill gaps,
/// resources, weekly plan, next actions.
pub fn render_roadmap(roadmap: &CareerRoadmap) -> String {
    let mut out = String::new();

    heading(&mut out, "Your Career Strategy", '=');
    out.push_str(&roadmap.summary);
    out.push_str("\n\n");

    heading(&mut out, "Skill Gaps to Bridge", '-');
    let tags: Vec<String> = roadmap
        .skill_gaps
        .iter()
        .map(|gap| format!("[{gap}]"))
        .collect();
    out.push_str(&tags.join(" "));
    out.push_str("\n\n");

    heading(&mut out, "Recommended Resources", '-');
    for resource in &roadmap.learning_resources {
        let _ = writeln!(out, "  • {resource}");
    }
    out.push('\n');

    heading(
        &mut out,
        &format!("{}-Week Study Plan", roadmap.study_plan.len()),
        '-',
    );
    for week in &roadmap.study_plan {
        let _ = writeln!(out, "Week {}: {}", week.week_number, week.focus_area);
        for task in &week.tasks {
            let _ = writeln!(out, "  [ ] {task}");
        }
        out.push('\n');
    }

    heading(&mut out, "Immediate Next Actions", '-');
    for (i, step) in roadmap.next_steps.iter().enumerate() {
        let _ = writeln!(out, "  {}. {step}", i + 1);
    }

    out
}

pub fn render_error(message: &str) -> String {
    format!("! {message}")
}

/// The one message shown above the form. A local form error replaces any
/// server error left over from the previous request.
pub fn form_message(state: &PlanState, form_error: Option<&FormError>) -> Option<String> {
    match form_error {
        Some(e) => Some(render_error(&e.to_string())),
        None => state.error().map(render_error),
    }
}

/// Label of the submit action; it reads as busy while a request is in flight.
pub fn submit_label(loading: bool) -> &'static str {
    if loading {
        "Generating Plan..."
    } else {
        "Generate Roadmap"
    }
}

fn heading(out: &mut String, title: &str, underline: char) {
    out.push_str(title);
    out.push('\n');
    out.extend(std::iter::repeat(underline).take(title.chars().count()));
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use career_models::WeeklyPlan;

    fn roadmap() -> CareerRoadmap {
        CareerRoadmap {
            summary: "Bridge the gap from analyst to AI engineer.".to_string(),
            skill_gaps: vec!["PyTorch".to_string(), "MLOps".to_string()],
            study_plan: (1..=4)
                .map(|n| WeeklyPlan {
                    week_number: n,
                    focus_area: format!("Focus {n}"),
                    tasks: vec![format!("Task {n}a"), format!("Task {n}b")],
                })
                .collect(),
            learning_resources: vec!["fast.ai".to_string(), "CS231n".to_string()],
            next_steps: vec![
                "Install PyTorch".to_string(),
                "Pick a dataset".to_string(),
                "Ship a demo".to_string(),
            ],
        }
    }

    #[test]
    fn test_sections_render_in_order() {
        let out = render_roadmap(&roadmap());
        let positions: Vec<usize> = [
            "Your Career Strategy",
            "Skill Gaps to Bridge",
            "Recommended Resources",
            "4-Week Study Plan",
            "Immediate Next Actions",
        ]
        .iter()
        .map(|title| out.find(title).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_summary_and_tags_render() {
        let out = render_roadmap(&roadmap());
        assert!(out.contains("Bridge the gap from analyst to AI engineer."));
        assert!(out.contains("[PyTorch] [MLOps]"));
        assert!(out.contains("  • CS231n"));
    }

    #[test]
    fn test_each_week_renders_with_checklist_in_order() {
        let out = render_roadmap(&roadmap());
        assert_eq!(out.lines().filter(|l| l.starts_with("Week ")).count(), 4);
        let a = out.find("  [ ] Task 2a").unwrap();
        let b = out.find("  [ ] Task 2b").unwrap();
        let next_week = out.find("Week 3: Focus 3").unwrap();
        assert!(a < b && b < next_week);
    }

    #[test]
    fn test_next_steps_numbered_from_one() {
        let out = render_roadmap(&roadmap());
        assert!(out.contains("  1. Install PyTorch"));
        assert!(out.contains("  2. Pick a dataset"));
        assert!(out.contains("  3. Ship a demo"));
        assert!(!out.contains("  0. "));
    }

    #[test]
    fn test_empty_lists_still_render_headings() {
        let empty = CareerRoadmap {
            summary: String::new(),
            skill_gaps: vec![],
            study_plan: vec![],
            learning_resources: vec![],
            next_steps: vec![],
        };
        let out = render_roadmap(&empty);
        assert!(out.contains("0-Week Study Plan"));
        assert!(out.contains("Immediate Next Actions"));
    }

    #[test]
    fn test_form_error_replaces_stale_server_error() {
        let failed = PlanState::Failed("Failed to generate plan. Please try again.".to_string());
        let form_error = FormError::Missing("Degree");

        assert_eq!(
            form_message(&failed, Some(&form_error)),
            Some("! Degree is required".to_string())
        );
        assert_eq!(
            form_message(&failed, None),
            Some("! Failed to generate plan. Please try again.".to_string())
        );
        assert_eq!(form_message(&PlanState::Idle, None), None);
    }

    #[test]
    fn test_submit_label_tracks_loading() {
        assert_eq!(submit_label(true), "Generating Plan...");
        assert_eq!(submit_label(false), "Generate Roadmap");
    }
}
