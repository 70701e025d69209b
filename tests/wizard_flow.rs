//! End-to-end wizard sessions driven through the terminal prompter.
//!
//! Input is scripted line by line; output is captured and inspected the
//! way a user would read it.

use std::io::Cursor;
use std::sync::Arc;

use adu_estimator::adapters::{TerminalPrompter, TextTableRenderer};
use adu_estimator::application::{RunWizardHandler, RunWizardResult};
use adu_estimator::domain::catalog::UnitTypeKey;
use adu_estimator::domain::foundation::ErrorCode;
use adu_estimator::domain::wizard::{WizardDefaults, WizardStep};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn run(script: &str, defaults: WizardDefaults) -> (Result<RunWizardResult, ErrorCode>, String) {
    let mut prompter =
        TerminalPrompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::<u8>::new());
    let handler = RunWizardHandler::new(Arc::new(TextTableRenderer::new()), defaults);

    let result = handler.handle(&mut prompter).map_err(|e| e.code);
    let output = String::from_utf8(prompter.into_output()).unwrap();
    (result, output)
}

// =============================================================================
// Sessions
// =============================================================================

#[test]
fn accepting_every_default_estimates_garage_studio() {
    let (result, output) = run("\n\n\n\nq\n", WizardDefaults::default());
    let result = result.unwrap();

    assert_eq!(result.state.step(), WizardStep::ShowResult);
    assert_eq!(result.estimate.unit_type, UnitTypeKey::GarageStudio);
    assert!(output.contains("Press Enter to begin"));
    assert!(output.contains(
        "We estimate that your project will cost $123,700 with a likely range of $107,320 to $140,080."
    ));
    assert!(output.contains("Separate water and gas: No | Hillside: No"));
}

#[test]
fn answers_are_reflected_in_result_screen() {
    let (result, output) = run("\n2\ny\nyes\n", WizardDefaults::default());
    let result = result.unwrap();

    assert_eq!(result.estimate.unit_type, UnitTypeKey::DetachedStudio);
    assert!(output.contains("Detached new build studio (400 sq ft)"));
    assert!(output.contains("Separate water and gas: Yes | Hillside: Yes"));
    assert!(output.contains("$250,500"));
}

#[test]
fn changing_an_answer_recomputes() {
    // garage, no, no -> change type to 1br -> quit
    let (result, output) = run("\n1\nn\nn\nt\ndetached_1br\nq\n", WizardDefaults::default());
    let result = result.unwrap();

    assert_eq!(result.revisions, 1);
    assert_eq!(result.estimate.unit_type, UnitTypeKey::Detached1Br);
    assert_eq!(output.matches("We estimate").count(), 2);
    assert!(output.contains("$260,000"));
}

#[test]
fn end_of_input_on_result_screen_finishes() {
    let (result, _) = run("\n3\nn\nn\n", WizardDefaults::default());
    assert_eq!(result.unwrap().estimate.unit_type, UnitTypeKey::Detached1Br);
}

#[test]
fn configured_defaults_are_preselected() {
    let defaults = WizardDefaults {
        unit_type: UnitTypeKey::Detached3Br,
        include_utilities: true,
        on_hillside: false,
    };
    let (result, output) = run("\n\n\n\n", defaults);
    let estimate = result.unwrap().estimate;

    assert_eq!(estimate.unit_type, UnitTypeKey::Detached3Br);
    assert!(estimate.site.include_utilities);
    assert!(!estimate.site.on_hillside);
    assert!(output.contains("Choose 1-5 [5]:"));
}

#[test]
fn closing_input_mid_wizard_fails() {
    let (result, output) = run("\n1\n", WizardDefaults::default());
    assert_eq!(result.unwrap_err(), ErrorCode::PromptFailed);
    assert!(!output.contains("We estimate"));
}

#[test]
fn repeated_nonsense_gives_up() {
    let (result, output) = run("\nnine\nten\neleven\n", WizardDefaults::default());
    assert_eq!(result.unwrap_err(), ErrorCode::PromptFailed);
    assert_eq!(output.matches("Please answer").count(), 3);
}
