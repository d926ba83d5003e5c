use std::fmt::{self, Write};

/// A value that can be appended to a message body.
/// This is automatically implemented for all types that implement Display.
pub trait Loggable {
    /// Appends the text form of self to `out`.
    fn append_to(&self, out: &mut String);
}

impl<T> Loggable for T
where
    T: fmt::Display + ?Sized,
{
    fn append_to(&self, out: &mut String) {
        // Writing into a String cannot fail.
        let _ = write!(out, "{}", self);
    }
}

/// Concatenates the text forms of `values` in order.
pub fn concat(values: &[&dyn Loggable]) -> String {
    let mut body = String::new();
    for value in values {
        value.append_to(&mut body);
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_conversion() {
        let mut out = String::new();
        12345i32.append_to(&mut out);
        assert_eq!(out, "12345");

        out.clear();
        3.14159f64.append_to(&mut out);
        assert_eq!(out, "3.14159");
    }

    #[test]
    fn test_concat_preserves_order() {
        let owned = String::from("frames");
        let body = concat(&[&"rendered ", &60u32, &" ", &owned, &" at ", &1.5f32, &"ms"]);
        assert_eq!(body, "rendered 60 frames at 1.5ms");
    }

    #[test]
    fn test_concat_empty() {
        assert_eq!(concat(&[]), "");
    }
}
