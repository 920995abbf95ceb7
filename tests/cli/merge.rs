use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_merge_applies_translations() -> Result<()> {
    let test = CliTest::with_locales(&["en", "fr"])?;
    test.write_file("src/app.ts", r#"tr("Hello")"#)?;
    assert_eq!(run(test.sync_command())?.code, Some(0));

    test.write_file("pending.json", r#"{"fr": {"Hello": "Bonjour"}}"#)?;
    let out = run(test.merge_command())?;

    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    assert!(out.stdout.contains("✓ fr: merged 1 entry"));
    assert!(out.stdout.contains("Merged 1 entry"));
    assert!(out.stdout.contains(&format!(
        "Removed pending batch {}",
        test.path_str("pending.json")
    )));
    assert!(!test.exists("pending.json"));

    insta::assert_snapshot!(test.read_file("locales/fr.json")?, @r#"
    {
      "Hello": "Bonjour"
    }
    "#);

    // A follow-up synchronization finds nothing left to do.
    let out = run(test.sync_command())?;
    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("All locales are up to date"));
    assert!(!test.exists("pending.json"));

    Ok(())
}

#[test]
fn test_merge_rejects_batch_with_blank_entry() -> Result<()> {
    let test = CliTest::with_locales(&["en", "fr"])?;
    let calls: String = (0..10).map(|i| format!("tr(\"Key {}\");\n", i)).collect();
    test.write_file("src/app.ts", &calls)?;
    assert_eq!(run(test.sync_command())?.code, Some(0));

    let mut entries: Vec<String> = (0..9)
        .map(|i| format!("\"Key {}\": \"Clé {}\"", i, i))
        .collect();
    entries.push("\"Key 9\": \"\"".to_string());
    let batch = format!("{{\"fr\": {{{}}}}}", entries.join(", "));
    test.write_file("pending.json", &batch)?;
    let fr_before = test.read_file("locales/fr.json")?;

    let out = run(test.merge_command())?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.is_empty());
    assert!(out.stderr.contains(&format!(
        "error: Pending batch {} is incomplete; nothing was merged.",
        test.path_str("pending.json")
    )));
    assert!(out.stderr.contains("✘ fr: Key 9"));
    assert_eq!(test.read_file("locales/fr.json")?, fr_before);
    assert_eq!(test.read_file("pending.json")?, batch);

    Ok(())
}

#[test]
fn test_merge_without_batch() -> Result<()> {
    let test = CliTest::with_locales(&["en", "fr"])?;

    let out = run(test.merge_command())?;

    assert_eq!(out.code, Some(1));
    assert!(out.stderr.contains(&format!(
        "error: Nothing to merge: {} does not exist.",
        test.path_str("pending.json")
    )));
    assert!(!test.exists("locales"));

    Ok(())
}

#[test]
fn test_merge_rejects_unknown_locale() -> Result<()> {
    let test = CliTest::with_locales(&["en", "fr"])?;
    test.write_file("pending.json", r#"{"de": {"Hello": "Hallo"}}"#)?;

    let out = run(test.merge_command())?;

    assert_eq!(out.code, Some(1));
    assert!(out.stderr.contains("de"));
    assert!(!test.exists("locales/de.json"));
    assert!(test.exists("pending.json"));

    Ok(())
}

#[test]
fn test_merge_malformed_batch_is_an_error() -> Result<()> {
    let test = CliTest::with_locales(&["en", "fr"])?;
    test.write_file("pending.json", "{\"fr\": ")?;

    let out = run(test.merge_command())?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("error:"));
    assert!(out.stderr.contains("pending.json"));

    Ok(())
}

#[test]
fn test_merge_malformed_store_is_an_error() -> Result<()> {
    let test = CliTest::with_locales(&["en", "fr", "de"])?;
    test.write_file("locales/en.json", r#"{"Hello": "Hello"}"#)?;
    test.write_file("locales/fr.json", r#"{"Hello": "#)?;
    test.write_file(
        "pending.json",
        r#"{"de": {"Hello": "Hallo"}, "fr": {"Hello": "Bonjour"}}"#,
    )?;

    let out = run(test.merge_command())?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("fr.json"));
    assert!(!test.exists("locales/de.json"));
    assert!(test.exists("pending.json"));

    Ok(())
}

#[test]
fn test_merge_rejects_key_not_in_source() -> Result<()> {
    let test = CliTest::with_locales(&["en", "fr"])?;
    test.write_file("src/app.ts", r#"tr("Hello")"#)?;
    assert_eq!(run(test.sync_command())?.code, Some(0));

    test.write_file(
        "pending.json",
        r#"{"fr": {"Hello": "Bonjour", "Helo": "Typo"}}"#,
    )?;
    let out = run(test.merge_command())?;

    assert_eq!(out.code, Some(1));
    assert!(out.stderr.contains("✘ fr: Helo (not a known key)"));
    insta::assert_snapshot!(test.read_file("locales/fr.json")?, @r#"
    {
      "Hello": ""
    }
    "#);
    assert!(test.exists("pending.json"));

    Ok(())
}
