use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_extract_dry_run_leaves_files_untouched() -> Result<()> {
    let source = "let title = '首页';\n";
    let test = CliTest::with_file("pages/Index.ets", source)?;

    let (code, stdout, _) = run(&mut test.extract_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("Would rewrite 1 literal(s) in 1 file(s)."));
    assert!(stdout.contains("Would write 1 string resource(s)"));
    assert!(stdout.contains("Run with --apply to rewrite files."));

    // Nothing on disk changed
    assert_eq!(test.read_file("pages/Index.ets")?, source);
    assert!(!test.root().join("resource/translated-strings.json").exists());

    Ok(())
}

#[test]
fn test_extract_apply_rewrites_full_literal() -> Result<()> {
    let test = CliTest::with_file("pages/Index.ets", "let title = '首页';\n")?;

    let mut cmd = test.extract_command();
    cmd.arg("--apply");
    let (code, stdout, _) = run(&mut cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Rewrote 1 literal(s) in 1 file(s)."));

    assert_eq!(
        test.read_file("pages/Index.ets")?,
        "let title = $r('app.string.index_home_page');\n"
    );

    let table = test.read_file("resource/translated-strings.json")?;
    let parsed: serde_json::Value = serde_json::from_str(&table)?;
    assert_eq!(parsed["string"][0]["name"], "index_home_page");
    assert_eq!(parsed["string"][0]["value"], "首页");

    Ok(())
}

#[test]
fn test_extract_apply_rewrites_mixed_literal_as_template() -> Result<()> {
    let test = CliTest::with_file("pages/Index.ets", "let msg = '标题: A';\n")?;

    let mut cmd = test.extract_command();
    cmd.arg("--apply");
    let (code, _, _) = run(&mut cmd)?;

    assert_eq!(code, 0);
    assert_eq!(
        test.read_file("pages/Index.ets")?,
        "let msg = `${$r('app.string.index_title')}: A`;\n"
    );

    Ok(())
}

#[test]
fn test_extract_apply_sorts_resource_table() -> Result<()> {
    let test = CliTest::with_file(
        "pages/Menu.ets",
        "let a = '标题';\nlet b = '列表';\nlet c = '菜单';\n",
    )?;

    let mut cmd = test.extract_command();
    cmd.arg("--apply");
    let (code, _, _) = run(&mut cmd)?;
    assert_eq!(code, 0);

    let table = test.read_file("resource/translated-strings.json")?;
    let parsed: serde_json::Value = serde_json::from_str(&table)?;
    let names: Vec<&str> = parsed["string"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();

    // "菜单" translates to "menu", which already carries the file prefix
    assert_eq!(names, vec!["menu", "menu_list", "menu_title"]);

    Ok(())
}

#[test]
fn test_extract_apply_reuses_key_for_repeated_text() -> Result<()> {
    let test = CliTest::with_file("pages/Index.ets", "f('首页');\ng('首页');\n")?;

    let mut cmd = test.extract_command();
    cmd.arg("--apply");
    let (code, stdout, _) = run(&mut cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Rewrote 2 literal(s) in 1 file(s)."));
    assert!(stdout.contains("Wrote 1 string resource(s)"));

    assert_eq!(
        test.read_file("pages/Index.ets")?,
        "f($r('app.string.index_home_page'));\ng($r('app.string.index_home_page'));\n"
    );

    Ok(())
}

#[test]
fn test_extract_clean_project() -> Result<()> {
    let test = CliTest::with_file("pages/Index.ets", "let title = 'Home';\n")?;

    let (code, stdout, _) = run(&mut test.extract_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("no hardcoded Chinese text found"));

    Ok(())
}

#[test]
fn test_extract_resource_file_flag() -> Result<()> {
    let test = CliTest::with_file("pages/Index.ets", "let title = '首页';\n")?;

    let mut cmd = test.extract_command();
    cmd.arg("--apply")
        .arg("--resource-file")
        .arg("out/strings.json");
    let (code, _, _) = run(&mut cmd)?;

    assert_eq!(code, 0);
    assert!(test.root().join("out/strings.json").exists());
    assert!(!test.root().join("resource/translated-strings.json").exists());

    Ok(())
}

#[test]
fn test_extract_config_namespace() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file(
        ".hanresrc.json",
        r#"{
         "resourceNamespace": "app.res"
     }"#,
    )?;
    test.write_file("pages/Index.ets", "let title = '首页';\n")?;

    let mut cmd = test.extract_command();
    cmd.arg("--apply");
    let (code, _, _) = run(&mut cmd)?;

    assert_eq!(code, 0);
    assert_eq!(
        test.read_file("pages/Index.ets")?,
        "let title = $r('app.res.index_home_page');\n"
    );

    Ok(())
}
