use serde_json::{Number, Value};

/// Largest magnitude below which every integral `f64` is exact (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Coerce an unvalidated field to display text.
///
/// Strings pass through verbatim and numbers keep their plain decimal form.
/// `null` and missing fields deliberately render as the empty string, not as
/// `null`. Arrays and objects are written as compact JSON.
pub fn render_loose(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Number(number)) => render_number(number),
        Some(other) => other.to_string(),
    }
}

/// Integral floats (`28.0`, `1e2`, `-0`) print without a fraction.
fn render_number(number: &Number) -> String {
    match number.as_f64() {
        Some(value)
            if number.is_f64()
                && value.is_finite()
                && value.fract() == 0.0
                && value.abs() < MAX_EXACT_INTEGER =>
        {
            (value as i64).to_string()
        }
        _ => number.to_string(),
    }
}
