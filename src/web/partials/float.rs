use std::fmt::{Display, Write};

use maud::{Escaper, Render};

/// Renders a float rounded to the given precision, with the exact value
/// in the `title` attribute.
pub struct Float<T> {
    value: T,
    precision: usize,
}

impl<T> From<T> for Float<T> {
    fn from(value: T) -> Self {
        Self {
            value,
            precision: 0,
        }
    }
}

impl<T> Float<T> {
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

impl<T: Display> Render for Float<T> {
    fn render_to(&self, buffer: &mut String) {
        write!(buffer, r#"<span title=""#).unwrap();
        write!(Escaper::new(buffer), "{}", self.value).unwrap();
        write!(buffer, r#"">"#).unwrap();
        write!(Escaper::new(buffer), "{0:.1$}", self.value, self.precision).unwrap();
        write!(buffer, "</span>").unwrap();
    }
}

#[cfg(test)]
mod tests {
    use maud::html;

    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        let markup = html! { (Float::from(16884.923999).precision(2)) };
        assert_eq!(
            markup.into_string(),
            r#"<span title="16884.923999">16884.92</span>"#,
        );
    }
}
