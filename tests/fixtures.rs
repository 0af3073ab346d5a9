use std::fs;

use polexpr::{Context, evaluate_prefix};
use walkdir::WalkDir;

/// The values bound to `var0..var11` for every fixture.
const FIXTURE_VALUES: [f64; 12] = [11.8, 15.0, 9.0, 11.9, 1.0, 12.0, 12.0, 24.0, 6.0, 45.0, 45.0, 6.0];

#[test]
fn fixture_expressions_evaluate() {
    let context = Context::from_values(FIXTURE_VALUES);
    let mut count = 0;

    for entry in
        WalkDir::new("tests/fixtures").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (expression, expected)) in extract_cases(&content).into_iter().enumerate() {
            count += 1;
            let actual = evaluate_prefix(&expression, &context).unwrap_or_else(|e| {
                             panic!("Fixture {} in {:?} failed:\n{}\nError: {}",
                                    i + 1,
                                    path,
                                    expression,
                                    e)
                         });
            assert!(close(actual, expected),
                    "Fixture {} in {:?}: {} evaluated to {}, expected {}",
                    i + 1,
                    path,
                    expression,
                    actual,
                    expected);
        }
    }

    assert!(count > 0, "No fixtures found in tests/fixtures");
}

fn extract_cases(content: &str) -> Vec<(String, f64)> {
    content.lines()
           .map(str::trim)
           .filter(|line| !line.is_empty() && !line.starts_with('#'))
           .map(|line| {
               let (expression, expected) =
                   line.split_once("=>")
                       .unwrap_or_else(|| panic!("Fixture line without '=>': {line}"));
               let expected =
                   expected.trim()
                           .parse()
                           .unwrap_or_else(|e| panic!("Bad expected value in '{line}': {e}"));
               (expression.trim().to_string(), expected)
           })
           .collect()
}

fn close(actual: f64, expected: f64) -> bool {
    if expected.is_nan() {
        return actual.is_nan();
    }
    if expected.is_infinite() {
        return actual == expected;
    }
    (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
}
