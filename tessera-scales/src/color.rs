use crate::error::ScaleError;
use crate::linear::LinearScale;
use css_color_parser::Color;
use palette::{Mix, Srgba};
use tessera_common::Accessor;

/// Parses a CSS color string (`"#ffee00"`, `"yellowgreen"`,
/// `"rgba(255, 0, 241, 0.33)"`) into normalized RGBA components
pub fn parse_css_color(color: &str) -> Result<[f32; 4], ScaleError> {
    match color.parse::<Color>() {
        Ok(color) => Ok([
            color.r as f32 / 255.0,
            color.g as f32 / 255.0,
            color.b as f32 / 255.0,
            color.a,
        ]),
        Err(_) => Err(ScaleError::InvalidColor(color.to_string())),
    }
}

/// Maps a numeric domain onto evenly spaced colors, interpolating in sRGB.
///
/// Values outside the domain are clamped to the end colors. Undefined values
/// get the `unknown` color, so the color of a mark is always derived from its
/// record and never stored on it.
#[derive(Clone, Debug)]
pub struct ColorScale {
    scale: LinearScale,
    colors: Vec<Srgba>,
    unknown: [f32; 4],
}

impl ColorScale {
    pub fn try_new(domain: (f64, f64), colors: &[&str]) -> Result<Self, ScaleError> {
        let colors = colors
            .iter()
            .map(|c| parse_css_color(c))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rgba(domain, colors)
    }

    pub fn from_rgba(domain: (f64, f64), colors: Vec<[f32; 4]>) -> Result<Self, ScaleError> {
        if colors.is_empty() {
            return Err(ScaleError::EmptyRange);
        }
        let scale = LinearScale::default()
            .with_domain(domain)
            .with_range((0.0, (colors.len() - 1) as f64))
            .with_clamp(true);
        let colors = colors
            .into_iter()
            .map(|c| Srgba::new(c[0], c[1], c[2], c[3]))
            .collect();
        Ok(Self {
            scale,
            colors,
            unknown: [0.0, 0.0, 0.0, 0.0],
        })
    }

    pub fn with_unknown(mut self, unknown: [f32; 4]) -> Self {
        self.unknown = unknown;
        self
    }

    pub fn domain(&self) -> (f64, f64) {
        self.scale.domain()
    }

    /// Color for a domain value
    pub fn color(&self, value: f64) -> [f32; 4] {
        if value.is_nan() {
            return self.unknown;
        }
        let last = self.colors.len() - 1;
        let continuous_index = self.scale.scale(value).clamp(0.0, last as f64);
        let lower_index = continuous_index.floor() as usize;
        let upper_index = continuous_index.ceil() as usize;

        let color = if lower_index == upper_index {
            self.colors[lower_index]
        } else {
            let t = (continuous_index - lower_index as f64) as f32;
            self.colors[lower_index].mix(self.colors[upper_index], t)
        };
        let (r, g, b, a) = color.into_components();
        [r, g, b, a]
    }

    /// Color derived from a record through an accessor
    pub fn color_for<R>(
        &self,
        record: &R,
        accessor: &impl Accessor<R>,
    ) -> Result<[f32; 4], ScaleError> {
        Ok(match accessor.value(record)? {
            Some(v) => self.color(v),
            None => self.unknown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use tessera_common::{AccessorError, FieldAccessor, Record};

    fn assert_rgba_eq(actual: [f32; 4], expected: [f32; 4]) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert_approx_eq!(f32, *a, *e, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_parse_css_color() {
        assert_rgba_eq(parse_css_color("#ffee00").unwrap(), [1.0, 238.0 / 255.0, 0.0, 1.0]);
        assert_rgba_eq(
            parse_css_color("rgba(255,0,241, 0.33)").unwrap(),
            [1.0, 0.0, 241.0 / 255.0, 0.33],
        );
        assert!(matches!(
            parse_css_color("not-a-color"),
            Err(ScaleError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_interpolates_between_colors() {
        let scale =
            ColorScale::try_new((0.0, 10.0), &["rgba(255,0,241, 0.33)", "rgba(255,0,241, 1)"])
                .unwrap();

        assert_rgba_eq(scale.color(0.0), [1.0, 0.0, 241.0 / 255.0, 0.33]);
        assert_rgba_eq(scale.color(10.0), [1.0, 0.0, 241.0 / 255.0, 1.0]);
        assert_approx_eq!(f32, scale.color(5.0)[3], 0.665, epsilon = 1e-4);
        // clamped
        assert_rgba_eq(scale.color(20.0), scale.color(10.0));
        assert_rgba_eq(scale.color(-5.0), scale.color(0.0));
    }

    #[test]
    fn test_color_for_record() {
        let scale = ColorScale::try_new((0.0, 4.0), &["#000000", "#ffffff"])
            .unwrap()
            .with_unknown([0.5, 0.5, 0.5, 1.0]);
        let accessor = FieldAccessor::new("num_colors");

        let record = Record::new().with_field("num_colors", 2.0);
        assert_rgba_eq(scale.color_for(&record, &accessor).unwrap(), [0.5, 0.5, 0.5, 1.0]);
        let record = Record::new().with_field("num_colors", 4.0);
        assert_rgba_eq(scale.color_for(&record, &accessor).unwrap(), [1.0, 1.0, 1.0, 1.0]);

        let unknown = Record::new();
        assert_eq!(scale.color_for(&unknown, &accessor).unwrap(), [0.5, 0.5, 0.5, 1.0]);

        let text = Record::new().with_field("num_colors", "many");
        assert!(matches!(
            scale.color_for(&text, &accessor),
            Err(ScaleError::Accessor(AccessorError::NonNumeric { .. }))
        ));
    }

    #[test]
    fn test_empty_range() {
        assert_eq!(
            ColorScale::from_rgba((0.0, 1.0), vec![]).unwrap_err(),
            ScaleError::EmptyRange
        );
    }
}
