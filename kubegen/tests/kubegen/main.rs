use std::path::Path;

use anyhow::Context;
use clap::Parser;

datatest_stable::harness! {
    { test = test, root = "tests/kubegen/testdata", pattern = r".*/args$" },
}

fn test(path: &Path) -> datatest_stable::Result<()> {
    let dir = path.parent().unwrap();
    let args = std::fs::read_to_string(path).context("reading args")?;
    let args = std::iter::once("kubegen").chain(args.lines());
    let cli = kubegen::Cli::try_parse_from(args)?;

    let runtime = tokio::runtime::Builder::new_current_thread().build()?;
    let mut out = std::io::Cursor::new(Vec::new());

    let result = runtime.block_on(cli.run(&mut out));

    match result {
        Ok(()) => {
            expect_no_snapshot(&dir.join("expected.stderr"))?;
            let actual = String::from_utf8(out.into_inner())?;
            snapshot(&dir.join("expected.yaml"), &actual)?;
        }
        Err(err) => {
            eprintln!("Error running {}: {}", dir.display(), err);
            expect_no_snapshot(&dir.join("expected.yaml"))?;
            snapshot(&dir.join("expected.stderr"), &format!("{err}\n"))?;
        }
    }
    Ok(())
}

// A case that used to fail must not start passing (or the reverse) by writing a fresh snapshot.
fn expect_no_snapshot(path: &Path) -> datatest_stable::Result<()> {
    if path.exists() && std::env::var("UPDATE_SNAPSHOTS").is_err() {
        return Err(format!("unexpected outcome, expected {}", path.display()).into());
    }
    Ok(())
}

fn snapshot(path: &Path, actual: &str) -> datatest_stable::Result<()> {
    if !path.exists() || std::env::var("UPDATE_SNAPSHOTS").is_ok() {
        std::fs::write(path, actual).context("writing snapshot")?;
        return Ok(());
    }

    let expected = std::fs::read_to_string(path).context("reading snapshot")?;
    if expected == actual || same_documents(&expected, actual) {
        return Ok(());
    }

    let formatted = format_chunks(dissimilar::diff(&expected, actual));
    eprintln!("Snapshot mismatch for {}:\n{}", path.display(), formatted);

    Err(format!("Snapshot mismatch for {}", path.display()).into())
}

// Quoting and indentation choices of the emitter do not matter, only the parsed documents.
fn same_documents(expected: &str, actual: &str) -> bool {
    match (
        serde_yaml::from_str::<serde_yaml::Value>(expected),
        serde_yaml::from_str::<serde_yaml::Value>(actual),
    ) {
        (Ok(expected), Ok(actual)) => expected == actual,
        _ => false,
    }
}

fn format_chunks(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[4m\x1b[31m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[4m\x1b[32m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}
