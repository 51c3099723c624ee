//! Architecture contract tests.

mod support;

use support::architecture::{find_lines_containing, find_non_export_lines_in_mod_files};

#[test]
fn domain_has_no_framework_or_outer_layer_imports() {
    let hits = find_lines_containing(
        "src/domain",
        &[
            "crate::adapter",
            "crate::infrastructure",
            "crate::application",
            "crate::port",
            "tokio::",
            "reqwest::",
            "diesel::",
            "teloxide::",
        ],
    );

    assert!(
        hits.is_empty(),
        "found forbidden imports in domain layer: {hits:#?}"
    );
}

#[test]
fn ports_depend_only_on_domain() {
    let hits = find_lines_containing(
        "src/port",
        &[
            "crate::adapter",
            "crate::infrastructure",
            "crate::application",
            "reqwest::",
            "diesel::",
            "teloxide::",
        ],
    );

    assert!(hits.is_empty(), "found outer-layer imports in ports: {hits:#?}");
}

#[test]
fn application_has_no_adapter_imports() {
    let hits = find_lines_containing(
        "src/application",
        &[
            "crate::adapter",
            "crate::infrastructure",
            "reqwest::",
            "diesel::",
            "teloxide::",
        ],
    );

    assert!(
        hits.is_empty(),
        "application must only see ports and domain: {hits:#?}"
    );
}

#[test]
fn teloxide_is_confined_to_telegram_adapters() {
    let hits: Vec<_> = find_lines_containing("src", &["teloxide::", "use teloxide"])
        .into_iter()
        .filter(|(path, _, _)| {
            !path.starts_with("src/adapter/inbound/telegram/")
                && !path.starts_with("src/adapter/outbound/telegram/")
                && path != "src/infrastructure/bootstrap.rs"
        })
        .collect();

    assert!(hits.is_empty(), "teloxide leaked outside adapters: {hits:#?}");
}

#[test]
fn mod_rs_is_export_only() {
    let violations = find_non_export_lines_in_mod_files("src");
    assert!(
        violations.is_empty(),
        "found non-export content in mod.rs files: {violations:#?}"
    );
}
