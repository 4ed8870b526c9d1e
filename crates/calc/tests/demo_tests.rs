use calc::demo;
use pretty_assertions::assert_eq;

fn transcript() -> String {
    let mut out = Vec::new();
    demo::run(&mut out).expect("demo should not fail on an in-memory writer");
    String::from_utf8(out).expect("demo output should be valid utf-8")
}

#[test]
fn test_demo_transcript() {
    let expected = "\
🚀 DevSecOps CI/CD Demo Calculator
========================================

📊 Basic Operations Demo:
Addition: 5 + 3 = 8
Subtraction: 10 - 4 = 6
Multiplication: 6 * 7 = 42
Division: 15 / 3 = 5.0
Power: 2 ^ 8 = 256

⚠️  Error Handling Demo:
Division by zero: 10 / 0 = nil

📝 Calculation History:
  1. 5 + 3 = 8
  2. 10 - 4 = 6
  3. 6 * 7 = 42
  4. 15 / 3 = 5.0
  5. 2 ^ 8 = 256
  6. 10 / 0 = Error: Division by zero

✅ Demo completed successfully!
";
    assert_eq!(transcript(), expected);
}

#[test]
fn test_demo_sections() {
    let output = transcript();
    assert!(output.contains("DevSecOps CI/CD Demo Calculator"));
    assert!(output.contains("Basic Operations Demo:"));
    assert!(output.contains("Error Handling Demo:"));
    assert!(output.contains("Calculation History:"));
    assert!(output.contains("Demo completed successfully!"));
}

#[test]
fn test_demo_operations() {
    let output = transcript();
    assert!(output.contains("Addition: 5 + 3 = 8"));
    assert!(output.contains("Subtraction: 10 - 4 = 6"));
    assert!(output.contains("Multiplication: 6 * 7 = 42"));
    assert!(output.contains("Division: 15 / 3 = 5.0"));
    assert!(output.contains("Power: 2 ^ 8 = 256"));
}

#[test]
fn test_demo_history_numbering() {
    let output = transcript();
    assert!(output.contains("  1. 5 + 3 = 8"));
    assert!(output.contains("  2. 10 - 4 = 6"));
    assert!(output.contains("  3. 6 * 7 = 42"));
    assert!(output.contains("  4. 15 / 3 = 5.0"));
    assert!(output.contains("  5. 2 ^ 8 = 256"));
    assert!(output.contains("  6. 10 / 0 = Error: Division by zero"));
}
