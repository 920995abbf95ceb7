use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_status_without_batch() -> Result<()> {
    let test = CliTest::with_locales(&["en", "fr"])?;

    let out = run(test.status_command())?;

    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    assert!(
        out.stdout
            .contains("No pending batch: no outstanding translation work")
    );

    Ok(())
}

#[test]
fn test_status_counts_blank_entries() -> Result<()> {
    let test = CliTest::with_locales(&["en", "fr", "de"])?;
    test.write_file(
        "pending.json",
        r#"{"de": {"A": "", "B": "Bee"}, "fr": {"A": "Ah", "B": "Bé"}}"#,
    )?;

    let out = run(test.status_command())?;

    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    assert!(
        out.stdout
            .contains(&format!("Pending batch {}:", test.path_str("pending.json")))
    );
    assert!(out.stdout.contains("  de: 1 filled, 1 blank"));
    assert!(out.stdout.contains("  fr: 2 filled, 0 blank"));
    assert!(out.stdout.contains("1 entry without a translation"));

    Ok(())
}

#[test]
fn test_status_does_not_modify_files() -> Result<()> {
    let test = CliTest::with_locales(&["en", "fr"])?;
    test.write_file("src/app.ts", r#"tr("Hello")"#)?;
    test.write_file("pending.json", r#"{"fr": {"Hello": ""}}"#)?;

    let out = run(test.status_command())?;

    assert_eq!(out.code, Some(0));
    assert!(!test.exists("locales"));
    assert_eq!(test.read_file("pending.json")?, r#"{"fr": {"Hello": ""}}"#);

    Ok(())
}
