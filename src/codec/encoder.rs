use crate::attributes::{Attributes, Value};

/// Render a store as `{"k1":v1,"k2":v2}`
///
/// Members keep insertion order. Strings are quoted verbatim without escaping,
/// so a string containing `"` will not decode back to the same value.
pub fn encode(attributes: &Attributes) -> String {
    let mut out = String::from("{");

    for (index, (key, value)) in attributes.iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        out.push('"');
        out.push_str(key);
        out.push_str("\":");
        render_value(value, &mut out);
    }

    out.push('}');
    out
}

fn render_value(value: &Value, out: &mut String) {
    let text = match value {
        Value::String(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
            return;
        }
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => render_float(*f),
        Value::Boolean(b) => b.to_string(),
    };
    out.push_str(&text.to_ascii_lowercase());
}

/// Floats always carry a `.` so the decoder types them as floats again
///
/// Magnitudes in `[1e-3, 1e7)` and zero are written in plain decimal form,
/// everything else as `d.ddde<exp>`, matching the scientific-notation switch
/// of the tokens this codec interoperates with. Both forms use the shortest
/// digits that round-trip.
fn render_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "infinity" } else { "-infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return with_fraction(value.to_string());
    }

    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            format!("{}e{exponent}", with_fraction(mantissa.to_string()))
        }
        None => with_fraction(text),
    }
}

fn with_fraction(text: String) -> String {
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&Attributes::new()), "{}");
    }

    #[test]
    fn test_encode_header() {
        let mut header = Attributes::new();
        header.set("alg", "HS256");
        header.set("typ", "JWT");
        assert_eq!(encode(&header), r#"{"alg":"HS256","typ":"JWT"}"#);
    }

    #[test]
    fn test_encode_value_types() {
        let mut claims = Attributes::new();
        claims.set("sub", "1234567890");
        claims.set("iat", 1516239022);
        claims.set("neg", -42);
        claims.set("ratio", 0.25);
        claims.set("whole", 3.0);
        claims.set("admin", true);
        claims.set("guest", false);

        assert_eq!(
            encode(&claims),
            r#"{"sub":"1234567890","iat":1516239022,"neg":-42,"ratio":0.25,"whole":3.0,"admin":true,"guest":false}"#
        );
    }

    #[test]
    fn test_encode_strings_verbatim() {
        let mut claims = Attributes::new();
        claims.set("name", "John { } : , Doe");
        assert_eq!(encode(&claims), r#"{"name":"John { } : , Doe"}"#);
    }

    #[test]
    fn test_encode_non_finite_floats_lowercase() {
        let mut claims = Attributes::new();
        claims.set("nan", f64::NAN);
        claims.set("inf", f64::INFINITY);
        claims.set("ninf", f64::NEG_INFINITY);
        assert_eq!(encode(&claims), r#"{"nan":nan,"inf":infinity,"ninf":-infinity}"#);
    }

    #[test]
    fn test_encode_plain_float_range() {
        assert_eq!(render_float(0.0), "0.0");
        assert_eq!(render_float(-0.5), "-0.5");
        assert_eq!(render_float(0.001), "0.001");
        assert_eq!(render_float(1234567.5), "1234567.5");
        assert_eq!(render_float(9999999.0), "9999999.0");
    }

    #[test]
    fn test_encode_scientific_float_range() {
        assert_eq!(render_float(12345678.9), "1.23456789e7");
        assert_eq!(render_float(1e7), "1.0e7");
        assert_eq!(render_float(1e16), "1.0e16");
        assert_eq!(render_float(1.0e-4), "1.0e-4");
        assert_eq!(render_float(-2.5e-9), "-2.5e-9");
        assert_eq!(render_float(0.000999), "9.99e-4");
    }
}
