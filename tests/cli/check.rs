use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_check_reports_hardcoded_chinese() -> Result<()> {
    let test = CliTest::with_file("pages/Index.ets", "let title = '首页';\n")?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("error: \"首页\""));
    assert!(stdout.contains("hardcoded-han"));
    // column points at the run inside the quotes
    assert!(stdout.contains("Index.ets:1:14"));
    assert!(stdout.contains("replace with $r('app.string.index_home_page')"));
    assert!(stdout.contains("1 problems (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_check_clean_project() -> Result<()> {
    let test = CliTest::with_file("pages/Index.ets", "let title = 'Home';\n")?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("no hardcoded Chinese text found"));

    Ok(())
}

#[test]
fn test_check_skips_comments() -> Result<()> {
    let test = CliTest::with_file(
        "pages/Index.ets",
        "// 这行是注释\n/* '标题' */\nlet title = 'Home';\n",
    )?;

    let (code, _, _) = run(&mut test.check_command())?;
    assert_eq!(code, 0);

    Ok(())
}

#[test]
fn test_check_reports_every_run() -> Result<()> {
    let test = CliTest::with_file(
        "pages/Menu.ets",
        "let a = '菜单';\nlet b = `欢迎, ${user}你好`;\n",
    )?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("\"菜单\""));
    assert!(stdout.contains("\"欢迎\""));
    assert!(stdout.contains("\"你好\""));
    assert!(stdout.contains("3 problems"));

    Ok(())
}

#[test]
fn test_check_config_ignores() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file(
        ".hanresrc.json",
        r#"{
         "ignores": ["**/generated/**"]
     }"#,
    )?;

    test.write_file("pages/Index.ets", "let a = 'clean';\n")?;
    test.write_file("generated/types.ets", "let b = '忽略';\n")?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("no hardcoded Chinese text found"));

    Ok(())
}

#[test]
fn test_check_config_ignore_texts() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file(
        ".hanresrc.json",
        r#"{
         "ignoreTexts": ["华为"]
     }"#,
    )?;

    test.write_file("pages/Index.ets", "let brand = '华为';\nlet t = '标题';\n")?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 1);
    assert!(!stdout.contains("\"华为\""));
    assert!(stdout.contains("\"标题\""));
    assert!(stdout.contains("1 problems"));

    Ok(())
}

#[test]
fn test_check_config_extensions() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file(
        ".hanresrc.json",
        r#"{
         "extensions": ["ets"]
     }"#,
    )?;

    test.write_file("a.ets", "let a = '标题';\n")?;
    test.write_file("b.js", "let b = '列表';\n")?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("\"标题\""));
    assert!(!stdout.contains("\"列表\""));

    Ok(())
}

#[test]
fn test_check_source_root_flag() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file("entry/Index.ets", "let a = '标题';\n")?;
    test.write_file("other/Other.ets", "let b = '列表';\n")?;

    let mut cmd = test.check_command();
    cmd.arg("--source-root").arg("entry");
    let (code, stdout, _) = run(&mut cmd)?;

    assert_eq!(code, 1);
    assert!(stdout.contains("\"标题\""));
    assert!(!stdout.contains("\"列表\""));

    Ok(())
}

#[test]
fn test_check_ignores_test_files_by_default() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file("Index.ets", "let a = 'clean';\n")?;
    test.write_file("Index.test.ets", "let b = '标题';\n")?;
    test.write_file("ohosTest/Ability.ets", "let c = '列表';\n")?;

    let (code, _, _) = run(&mut test.check_command())?;
    assert_eq!(code, 0);

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;
    let mut cmd = test.command();
    cmd.arg("--help");
    let (code, stdout, _) = run(&mut cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("check"));
    assert!(stdout.contains("extract"));
    assert!(stdout.contains("init"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;
    let (code, stdout, _) = run(&mut test.command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Usage"));

    Ok(())
}
