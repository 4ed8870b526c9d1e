//! The demo driver: runs a fixed sequence of calculations and prints the
//! results and the full history.

use calc_core::Calculator;
use calc_val::Num;
use std::io::{self, Write};

/// Run the demo against any writer, so tests can capture the transcript.
pub fn run(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "🚀 DevSecOps CI/CD Demo Calculator")?;
    writeln!(out, "{}", "=".repeat(40))?;

    let mut calc = Calculator::new();

    writeln!(out)?;
    writeln!(out, "📊 Basic Operations Demo:")?;
    writeln!(out, "Addition: 5 + 3 = {}", calc.add(5, 3))?;
    writeln!(out, "Subtraction: 10 - 4 = {}", calc.subtract(10, 4))?;
    writeln!(out, "Multiplication: 6 * 7 = {}", calc.multiply(6, 7))?;
    writeln!(out, "Division: 15 / 3 = {}", show(calc.divide(15, 3)))?;
    writeln!(out, "Power: 2 ^ 8 = {}", calc.power(2, 8))?;

    writeln!(out)?;
    writeln!(out, "⚠️  Error Handling Demo:")?;
    writeln!(out, "Division by zero: 10 / 0 = {}", show(calc.divide(10, 0)))?;

    writeln!(out)?;
    writeln!(out, "📝 Calculation History:")?;
    for (i, calculation) in calc.get_history().iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, calculation)?;
    }

    writeln!(out)?;
    writeln!(out, "✅ Demo completed successfully!")?;
    Ok(())
}

fn show(result: Option<Num>) -> String {
    match result {
        Some(value) => value.to_string(),
        None => "nil".to_string(),
    }
}
