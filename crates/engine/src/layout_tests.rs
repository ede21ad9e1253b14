// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::path::Path;

#[test]
#[cfg(not(windows))]
fn generator_paths_live_under_the_install_dir() {
    let layout = InstallLayout::new("/opt/clarity");
    assert_eq!(layout.generator_bin(), Path::new("/opt/clarity/.venv/bin/python"));
    assert_eq!(layout.generator_entry(), Path::new("/opt/clarity/python/main.py"));
}

#[test]
fn invocation_args_are_entry_then_root() {
    let layout = InstallLayout::new("/opt/clarity");
    let ctx = layout.invocation(Path::new("/work/proj"));
    let args = ctx.args();
    assert_eq!(args.len(), 2);
    assert_eq!(args[0], layout.generator_entry().display().to_string());
    assert_eq!(args[1], "/work/proj");
}

#[test]
fn command_line_names_all_three_paths() {
    let layout = InstallLayout::new("/opt/clarity");
    let ctx = layout.invocation(Path::new("/work/proj"));
    let line = ctx.command_line();
    assert!(line.contains(&layout.generator_bin().display().to_string()));
    assert!(line.contains(&layout.generator_entry().display().to_string()));
    assert!(line.contains("/work/proj"));
}
