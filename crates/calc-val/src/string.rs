pub use ecow::EcoString as CalcStr;
