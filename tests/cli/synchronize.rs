use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_synchronize_creates_stores_and_batch() -> Result<()> {
    let test = CliTest::with_locales(&["en", "fr"])?;
    test.write_file("src/a.ts", r#"button(tr("Save changes"));"#)?;
    test.write_file("src/b.ts", r#"const t = tr('Save changes');"#)?;

    let out = run(test.sync_command())?;

    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    assert!(out.stdout.contains("Scanned 2 source files, found 1 key"));
    assert!(out.stdout.contains("Added keys (1):\n  + Save changes"));
    assert!(out.stdout.contains("✓ en: 1 key"));
    assert!(out.stdout.contains("  fr: 1 key, 1 pending"));
    assert!(out.stdout.contains(&format!(
        "Wrote pending batch {} (1 entry)",
        test.path_str("pending.json")
    )));

    insta::assert_snapshot!(test.read_file("locales/en.json")?, @r#"
    {
      "Save changes": "Save changes"
    }
    "#);
    insta::assert_snapshot!(test.read_file("locales/fr.json")?, @r#"
    {
      "Save changes": ""
    }
    "#);
    insta::assert_snapshot!(test.read_file("pending.json")?, @r#"
    {
      "fr": {
        "Save changes": ""
      }
    }
    "#);

    Ok(())
}

#[test]
fn test_synchronize_removes_keys_no_longer_in_source() -> Result<()> {
    let test = CliTest::with_locales(&["en", "fr"])?;
    test.write_file("src/app.ts", r#"tr("Save")"#)?;
    test.write_file(
        "locales/en.json",
        r#"{"Old label": "Old label", "Save": "Save"}"#,
    )?;
    test.write_file(
        "locales/fr.json",
        r#"{"Old label": "Ancienne étiquette", "Save": "Enregistrer"}"#,
    )?;

    let out = run(test.sync_command())?;

    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    assert!(out.stdout.contains("Removed keys (1):\n  - Old label"));
    assert!(out.stdout.contains("All locales are up to date"));
    assert!(!test.exists("pending.json"));

    insta::assert_snapshot!(test.read_file("locales/fr.json")?, @r#"
    {
      "Save": "Enregistrer"
    }
    "#);

    Ok(())
}

#[test]
fn test_synchronize_is_idempotent() -> Result<()> {
    let test = CliTest::with_locales(&["en", "fr", "de"])?;
    test.write_file(
        "src/app.tsx",
        r#"<p>{tr("Hello")}</p><p>{tr(`World`)}</p><p>{tr(`Hi ${name}`)}</p>"#,
    )?;

    let first = run(test.sync_command())?;
    assert_eq!(first.code, Some(0), "stderr: {}", first.stderr);
    let en = test.read_file("locales/en.json")?;
    let fr = test.read_file("locales/fr.json")?;
    let batch = test.read_file("pending.json")?;

    let second = run(test.sync_command())?;
    assert_eq!(second.code, Some(0), "stderr: {}", second.stderr);
    assert!(!second.stdout.contains("Added keys"));
    assert!(!second.stdout.contains("Removed keys"));

    assert_eq!(test.read_file("locales/en.json")?, en);
    assert_eq!(test.read_file("locales/fr.json")?, fr);
    assert_eq!(test.read_file("pending.json")?, batch);

    insta::assert_snapshot!(en, @r#"
    {
      "Hello": "Hello",
      "World": "World"
    }
    "#);

    Ok(())
}

#[test]
fn test_synchronize_keeps_translated_batch_entries() -> Result<()> {
    let test = CliTest::with_locales(&["en", "fr"])?;
    test.write_file("src/app.ts", r#"tr("Hello"); tr("Bye");"#)?;
    assert_eq!(run(test.sync_command())?.code, Some(0));

    test.write_file(
        "pending.json",
        r#"{"fr": {"Bye": "", "Hello": "Bonjour"}}"#,
    )?;
    let out = run(test.sync_command())?;

    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    assert!(out.stdout.contains("kept 1 translated entry from the previous batch"));
    insta::assert_snapshot!(test.read_file("pending.json")?, @r#"
    {
      "fr": {
        "Bye": "",
        "Hello": "Bonjour"
      }
    }
    "#);

    Ok(())
}

#[test]
fn test_synchronize_malformed_store_changes_nothing() -> Result<()> {
    let test = CliTest::with_locales(&["en", "fr"])?;
    test.write_file("src/app.ts", r#"tr("Hello")"#)?;
    test.write_file("locales/fr.json", "{ not json")?;

    let out = run(test.sync_command())?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("error:"));
    assert!(out.stderr.contains("fr.json"));
    assert!(!test.exists("locales/en.json"));
    assert!(!test.exists("pending.json"));
    assert_eq!(test.read_file("locales/fr.json")?, "{ not json");

    Ok(())
}

#[test]
fn test_synchronize_without_sources_fails() -> Result<()> {
    let test = CliTest::with_locales(&["en", "fr"])?;
    test.write_file("locales/en.json", r#"{"Hello": "Hello"}"#)?;

    let out = run(test.sync_command())?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("error:"));
    assert_eq!(test.read_file("locales/en.json")?, r#"{"Hello": "Hello"}"#);

    Ok(())
}

#[test]
fn test_sync_alias_and_root_flag() -> Result<()> {
    let test = CliTest::with_locales(&["en"])?;
    test.write_file("src/app.js", r#"i18n.tr("Only")"#)?;

    let mut cmd = test.command();
    cmd.current_dir(std::env::temp_dir());
    cmd.arg("sync").arg("--root").arg(test.root());
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    assert!(test.exists("locales/en.json"));
    assert!(out.stdout.contains("All locales are up to date"));

    Ok(())
}

#[test]
fn test_synchronize_from_subdirectory_uses_project_config() -> Result<()> {
    let test = CliTest::with_locales(&["en", "fr"])?;
    test.write_file("src/app.ts", r#"tr("Hello")"#)?;

    let mut cmd = test.sync_command();
    cmd.current_dir(test.root().join("src"));
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    assert!(out.stdout.contains("  fr: 1 key, 1 pending"));
    assert!(test.exists("locales/en.json"));
    assert!(test.exists("locales/fr.json"));
    assert!(test.exists("pending.json"));
    assert!(!test.exists("src/locales"));

    Ok(())
}

#[test]
fn test_synchronize_reads_non_utf8_source() -> Result<()> {
    let test = CliTest::with_locales(&["en"])?;
    let mut latin1 = b"<p>caf\xe9</p>".to_vec();
    latin1.extend_from_slice(br#"<p>{{ tr("Menu") }}</p>"#);
    test.write_bytes("src/page.html", &latin1)?;

    let out = run(test.sync_command())?;

    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    insta::assert_snapshot!(test.read_file("locales/en.json")?, @r#"
    {
      "Menu": "Menu"
    }
    "#);

    Ok(())
}
