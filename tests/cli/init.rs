use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_init_writes_default_config() -> Result<()> {
    let test = CliTest::new()?;

    let out = run(test.init_command())?;

    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    assert!(out.stdout.contains("✓ Created .glotsyncrc.json"));

    let config: serde_json::Value = serde_json::from_str(&test.read_file(".glotsyncrc.json")?)?;
    assert_eq!(config["callName"], "tr");
    assert_eq!(config["canonicalLocale"], "en");
    assert_eq!(config["localesRoot"], "./locales");
    assert_eq!(config["pendingFile"], "./pending-translations.json");

    Ok(())
}

#[test]
fn test_init_keeps_existing_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".glotsyncrc.json", "{}")?;

    let out = run(test.init_command())?;

    assert_eq!(out.code, Some(1));
    assert!(out.stderr.contains(".glotsyncrc.json already exists"));
    assert_eq!(test.read_file(".glotsyncrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_default_config_synchronizes_without_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("app.ts", r#"tr("Hello")"#)?;

    let out = run(test.sync_command())?;

    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    insta::assert_snapshot!(test.read_file("locales/en.json")?, @r#"
    {
      "Hello": "Hello"
    }
    "#);

    Ok(())
}
