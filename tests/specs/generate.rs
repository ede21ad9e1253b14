// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `clarity generate` against a scripted fake generator.

use crate::prelude::*;

const SUCCESS_SCRIPT: &str = r#"#!/bin/sh
echo "INFO: scanning project"
printf '{"success": true, "message": "Docs generated", "readme_path": "%s/README.md"}\n' "$2"
"#;

/// A happy run surfaces the generator's message and the progress title.
#[test]
fn generating_docs_shows_the_success_message() {
    let project = Project::new();
    project.install_generator(SUCCESS_SCRIPT);

    project
        .generate()
        .passes()
        .stderr_has("Generating documentation. Please wait...")
        .stderr_has("Docs generated");
}

/// `--open` stands in for selecting the offered action: the generated
/// README is dumped to stdout.
#[test]
fn open_flag_dumps_the_generated_readme() {
    let project = Project::new();
    project.install_generator(
        r#"#!/bin/sh
printf '# Generated docs\n' > "$2/README.md"
printf '{"success": true, "message": "Docs generated", "readme_path": "%s/README.md"}\n' "$2"
"#,
    );

    project.generate().arg("--open").passes().stdout_has("# Generated docs");
}

/// The generator's own verdict about the project is shown verbatim.
#[test]
fn generator_domain_error_is_shown_verbatim() {
    let project = Project::new();
    project.install_generator(
        r#"#!/bin/sh
echo '{"error": "No relevant source files found."}'
"#,
    );

    project.generate().fails_with(1).stderr_has("No relevant source files found.");
}

/// An earlier diagnostic payload is noise; the last one is authoritative.
#[test]
fn stale_payload_is_superseded_by_the_final_result() {
    let project = Project::new();
    project.install_generator(
        r#"#!/bin/sh
echo '{"error": "stale"}'
printf '{"success": true, "message": "Done", "readme_path": "%s/README.md"}\n' "$2"
"#,
    );

    project.generate().passes().stderr_has("Done");
}

/// A nonzero exit is an infrastructure failure even when stdout carries a
/// perfectly valid success payload.
#[test]
fn nonzero_exit_is_an_infrastructure_failure() {
    let project = Project::new();
    project.install_generator(
        r#"#!/bin/sh
printf '{"success": true, "message": "Docs generated", "readme_path": "%s/README.md"}\n' "$2"
exit 7
"#,
    );

    project.generate().fails_with(2).stderr_has("exit code 7");
}

/// Output with no structured payload at all cannot be interpreted.
#[test]
fn log_only_output_cannot_be_interpreted() {
    let project = Project::new();
    project.install_generator(
        r#"#!/bin/sh
echo "INFO: scanning"
echo "INFO: done"
"#,
    );

    project.generate().fails_with(2).stderr_has("Could not interpret");
}

/// With no generator installed the launch itself fails, and the attempted
/// command line lands in the diagnostic log.
#[test]
fn missing_generator_is_a_launch_failure() {
    let project = Project::new();

    project
        .generate()
        .env("CLARITY_LOG", "debug")
        .fails_with(2)
        .stderr_has("Failed to launch")
        .stderr_has("running:");
}

/// The host rejects a project path that is not a directory before
/// anything is launched.
#[test]
fn nonexistent_project_path_is_rejected_up_front() {
    let project = Project::new();
    project.install_generator(SUCCESS_SCRIPT);
    std::fs::remove_dir_all(project.project_dir()).unwrap();

    project.generate().fails_with(2).stderr_has("not a directory");
}

/// A hung generator is killed once the opt-in timeout elapses.
#[test]
fn timeout_kills_a_hung_generator() {
    let project = Project::new();
    project.install_generator(
        r#"#!/bin/sh
sleep 30
"#,
    );

    project
        .generate()
        .arg("--timeout-secs")
        .arg("1")
        .fails_with(2)
        .stderr_has("timed out");
}
