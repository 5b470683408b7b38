use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let (code, stdout, _) = run(&mut cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Created .hanresrc.json"));

    let config = test.read_file(".hanresrc.json")?;
    let parsed: serde_json::Value = serde_json::from_str(&config)?;
    assert_eq!(parsed["sourceRoot"], "./");
    assert_eq!(parsed["resourceNamespace"], "app.string");

    Ok(())
}

#[test]
fn test_init_fails_when_config_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".hanresrc.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let (code, _, stderr) = run(&mut cmd)?;

    assert_eq!(code, 2);
    assert!(stderr.contains("already exists"));

    Ok(())
}
