//! Complete sessions through the console.

use crate::infrastructure::export::CsvExporter;

use super::E2EHarness;

#[test]
fn known_rolls_produce_expected_report_and_export() {
    let harness = E2EHarness::new(vec![3, 1, 6, 6, 2]);

    let output = harness.run("d6\n5\nn\n");

    assert!(output.contains("RESULTS (d6):"));
    assert!(output.contains("Rolls: 3, 1, 6, 6, 2"));
    assert!(output.contains("• Minimum: 1"));
    assert!(output.contains("• Maximum: 6"));
    assert!(output.contains("• Average: 3.60"));
    assert!(output.contains("• Most common: 6"));
    assert!(output.contains("• Total rolls: 5"));
    assert!(output.contains("1: 1 rolls (20.0%)"));
    assert!(output.contains("2: 1 rolls (20.0%)"));
    assert!(output.contains("3: 1 rolls (20.0%)"));
    assert!(output.contains("6: 2 rolls (40.0%)"));

    let files = harness.exported_files();
    assert_eq!(files.len(), 1);
    let name = files[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("d6_rolls_") && name.ends_with(".csv"), "{name}");
    assert!(output.contains(&format!("Results saved to: {}", files[0].display())));

    let reread = CsvExporter::read_rolls(&files[0]).unwrap();
    assert_eq!(reread.values(), vec![3, 1, 6, 6, 2]);
}

#[test]
fn second_session_uses_a_new_die() {
    let harness = E2EHarness::new(vec![1, 2, 3, 4]);

    let output = harness.run("6\n2\ny\nd20\n2\nno\n");

    assert!(output.contains("RESULTS (d6):"));
    assert!(output.contains("RESULTS (d20):"));
    // Same fixed clock, different die size: two distinct files.
    assert_eq!(harness.exported_files().len(), 2);
}

#[test]
fn long_sessions_are_previewed() {
    let rolls: Vec<u32> = (1..=12).collect();
    let harness = E2EHarness::new(rolls);

    let output = harness.run("d12\n12\nn\n");

    assert!(output.contains("Rolls: 1, 2, 3, 4, 5, ..., 8, 9, 10, 11, 12"));
    let reread = CsvExporter::read_rolls(&harness.exported_files()[0]).unwrap();
    assert_eq!(reread.len(), 12);
}

#[test]
fn blocked_output_directory_warns_but_keeps_going() {
    let blocker = tempfile::NamedTempFile::new().unwrap();
    let blocked = blocker.path().join("out");
    let harness = E2EHarness::with_settings(vec![3, 1, 6, 6, 2], move |settings| {
        settings.output_dir = blocked;
    });

    let output = harness.run("d6\n5\ny\nd6\n5\nn\n");

    assert_eq!(output.matches("FREQUENCY:").count(), 2);
    assert_eq!(output.matches("Warning: could not save results").count(), 2);
    assert!(output.find("FREQUENCY:") < output.find("Warning: could not save results"));
    assert!(output.trim_end().ends_with("Thanks for rolling! Goodbye!"));
}

#[test]
fn roll_limit_from_settings_is_enforced() {
    let harness = E2EHarness::with_settings(vec![1], |settings| settings.max_rolls = 3);

    let output = harness.run("d6\n4\n3\nn\n");

    assert!(output.contains("At most 3 rolls per session"));
    assert!(output.contains("• Total rolls: 3"));
}

#[test]
fn disabled_histogram_notice_is_printed_once() {
    let harness = E2EHarness::new(vec![2]);
    let output = harness.run("d4\n1\ny\nd4\n1\nn\n");
    assert_eq!(output.matches("Skipping histograms").count(), 1);
}
